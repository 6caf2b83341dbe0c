use crate::analysis::centrality::Centrality;
use crate::analysis::community::CommunityDetection;
use crate::analysis::cooccurrence::UserGraph;
use crate::analysis::engagement::{EngagementAnalysis, analyze_engagement};
use crate::analysis::narrative::{NarrativeAnalysis, identify_narratives};
use crate::analysis::network::{NetworkAnalysis, analyze_network};
use crate::core::post::Post;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report {
    pub timestamp: DateTime<Utc>,
    pub data_points: usize,
    pub network_analysis: NetworkAnalysis,
    pub narrative_analysis: NarrativeAnalysis,
    pub engagement_analysis: EngagementAnalysis,
}

pub fn generate_report(
    posts: &[Post],
    user_graph: &UserGraph,
    centrality: &dyn Centrality,
    detector: &dyn CommunityDetection,
) -> Report {
    Report {
        timestamp: Utc::now(),
        data_points: posts.len(),
        network_analysis: analyze_network(user_graph, centrality, detector),
        narrative_analysis: identify_narratives(posts),
        engagement_analysis: analyze_engagement(posts),
    }
}
