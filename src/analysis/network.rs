use crate::analysis::centrality::{Centrality, top_nodes};
use crate::analysis::community::{CommunityDetection, community_count, modularity};
use crate::analysis::cooccurrence::UserGraph;
use serde::Serialize;
use tracing::info;

const TOP_CENTRAL_NODES: usize = 10;

#[derive(Debug, Serialize)]
pub struct NetworkAnalysis {
    pub central_nodes: Vec<(String, f64)>,
    pub community_count: usize,
    pub density: f64,
}

pub fn analyze_network(
    user_graph: &UserGraph,
    centrality: &dyn Centrality,
    detector: &dyn CommunityDetection,
) -> NetworkAnalysis {
    let graph = &user_graph.graph;
    let scores = centrality.scores(graph);
    let labels = detector.communities(graph);
    let community_count = community_count(&labels);
    let density = graph.density();

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        community_count,
        modularity = modularity(graph, &labels),
        density,
        "network analysed"
    );

    NetworkAnalysis {
        central_nodes: top_nodes(&scores, TOP_CENTRAL_NODES)
            .into_iter()
            .map(|(node, score)| (user_graph.registry.name(node).to_string(), score))
            .collect(),
        community_count,
        density,
    }
}
