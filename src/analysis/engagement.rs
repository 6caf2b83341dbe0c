use crate::core::post::Post;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, PartialEq, Serialize)]
pub struct EngagementAnalysis {
    pub total_likes: u64,
    pub total_shares: u64,
    /// Mean of likes plus shares per post; `None` for an empty batch.
    pub avg_engagement: Option<f64>,
}

pub fn analyze_engagement(posts: &[Post]) -> EngagementAnalysis {
    let total_likes = posts.iter().map(|p| p.engagement.likes).sum::<u64>();
    let total_shares = posts.iter().map(|p| p.engagement.shares).sum::<u64>();
    let avg_engagement = if posts.is_empty() {
        warn!("no posts, average engagement is undefined");
        None
    } else {
        let total = posts.iter().map(|p| p.engagement.total()).sum::<u64>();
        Some(total as f64 / posts.len() as f64)
    };

    info!(total_likes, total_shares, ?avg_engagement, "engagement analysed");
    EngagementAnalysis {
        total_likes,
        total_shares,
        avg_engagement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::post::Engagement;
    use crate::ingest::synthetic::{config, generate, post};
    use approx::assert_relative_eq;

    #[test]
    fn test_synthetic_totals() {
        let posts = generate(&config(5)).collect::<Vec<_>>();
        let result = analyze_engagement(&posts);

        assert_eq!(100, result.total_likes);
        assert_eq!(20, result.total_shares);
        assert_relative_eq!(24.0, result.avg_engagement.unwrap());
    }

    #[test]
    fn test_totals_follow_index_formula() {
        let n = 100u64;
        let posts = generate(&config(n as usize)).collect::<Vec<_>>();
        let result = analyze_engagement(&posts);

        assert_eq!((0..n).map(|i| 10 * i).sum::<u64>(), result.total_likes);
        assert_eq!((0..n).map(|i| 2 * i).sum::<u64>(), result.total_shares);
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(
            EngagementAnalysis {
                total_likes: 0,
                total_shares: 0,
                avg_engagement: None,
            },
            analyze_engagement(&[])
        );
    }

    #[test]
    fn test_mixed_engagement() {
        let mut a = post("alice", &[]);
        a.engagement = Engagement { likes: 3, shares: 1 };
        let mut b = post("bob", &[]);
        b.engagement = Engagement { likes: 0, shares: 1 };
        let result = analyze_engagement(&[a, b]);

        assert_eq!(3, result.total_likes);
        assert_eq!(2, result.total_shares);
        assert_relative_eq!(2.5, result.avg_engagement.unwrap());
    }
}
