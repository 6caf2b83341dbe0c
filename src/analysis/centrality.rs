use crate::core::graph::Graph;
use crate::core::ids::NodeId;

pub trait Centrality {
    /// One score per node, indexed by node id.
    fn scores(&self, graph: &Graph) -> Vec<f64>;
}

/// Degree divided by the largest possible degree, `n - 1`.
pub struct DegreeCentrality;

impl Centrality for DegreeCentrality {
    fn scores(&self, graph: &Graph) -> Vec<f64> {
        let n = graph.node_count();
        if n <= 1 {
            return vec![0.0; n];
        }
        let max_degree = (n - 1) as f64;
        (0..n as NodeId)
            .map(|node| graph.degree(node) as f64 / max_degree)
            .collect()
    }
}

/// The `k` highest scoring nodes. Equal scores keep node id order.
pub fn top_nodes(scores: &[f64], k: usize) -> Vec<(NodeId, f64)> {
    let mut ranked = scores
        .iter()
        .enumerate()
        .map(|(node, score)| (node as NodeId, *score))
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(k);
    ranked
}
