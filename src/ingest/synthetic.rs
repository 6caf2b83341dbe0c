use crate::core::post::{Engagement, Post};
use chrono::Utc;

/// Stand-in for collecting posts from a platform API: fabricates `count`
/// posts mentioning `keyword`.
pub struct SyntheticConfig {
    pub keyword: String,
    pub platform: String,
    pub count: usize,
}

pub fn generate(cfg: &SyntheticConfig) -> impl Iterator<Item = Post> + '_ {
    (0..cfg.count).map(move |i| Post {
        timestamp: Utc::now(),
        platform: cfg.platform.clone(),
        content: format!("Sample post containing {}", cfg.keyword),
        user: format!("user_{i}"),
        engagement: Engagement {
            likes: i as u64 * 10,
            shares: i as u64 * 2,
        },
        links: vec![format!("http://example{i}.com")],
        hashtags: vec![format!("#{}", cfg.keyword), "#sample".to_string()],
    })
}

#[cfg(test)]
pub fn post(user: &str, hashtags: &[&str]) -> Post {
    Post {
        timestamp: Utc::now(),
        platform: "twitter".to_string(),
        content: format!("post by {user}"),
        user: user.to_string(),
        engagement: Engagement::default(),
        links: vec![],
        hashtags: hashtags.iter().map(|t| t.to_string()).collect(),
    }
}

#[cfg(test)]
pub fn config(count: usize) -> SyntheticConfig {
    SyntheticConfig {
        keyword: "election2024".to_string(),
        platform: "twitter".to_string(),
        count,
    }
}
