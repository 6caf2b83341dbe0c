use crate::core::graph::Graph;
use std::collections::HashMap;

pub trait CommunityDetection {
    /// One community label per node, numbered from 0 in order of the first
    /// node carrying each label.
    fn communities(&self, graph: &Graph) -> Vec<u32>;
}

pub fn normalize_labels(labels: &[u32]) -> Vec<u32> {
    let mut renamed = HashMap::new();
    labels
        .iter()
        .map(|label| {
            let next = renamed.len() as u32;
            *renamed.entry(*label).or_insert(next)
        })
        .collect()
}

/// Number of distinct labels in a normalized partition.
pub fn community_count(labels: &[u32]) -> usize {
    labels.iter().max().map_or(0, |max| *max as usize + 1)
}

/// Newman modularity of a partition. Zero for graphs without edges.
pub fn modularity(graph: &Graph, labels: &[u32]) -> f64 {
    let m = graph.edge_count();
    if m == 0 {
        return 0.0;
    }
    let two_m = 2.0 * m as f64;
    let count = community_count(labels);
    let mut internal = vec![0.0; count];
    let mut degree_sum = vec![0.0; count];

    for (u, v) in graph.edges() {
        if labels[u as usize] == labels[v as usize] {
            internal[labels[u as usize] as usize] += 1.0;
        }
    }
    for (node, label) in labels.iter().enumerate() {
        degree_sum[*label as usize] += graph.degree(node as u32) as f64;
    }

    internal
        .iter()
        .zip(&degree_sum)
        .map(|(e, a)| e / m as f64 - (a / two_m).powi(2))
        .sum()
}

#[cfg(test)]
pub fn two_triangles() -> Graph {
    use crate::core::graph::GraphBuilder;

    let mut gb = GraphBuilder::new(6);
    gb.add_edge(0, 1);
    gb.add_edge(1, 2);
    gb.add_edge(2, 0);
    gb.add_edge(3, 4);
    gb.add_edge(4, 5);
    gb.add_edge(5, 3);
    gb.add_edge(2, 3);
    gb.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::GraphBuilder;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_labels() {
        assert_eq!(vec![0, 1, 0, 2], normalize_labels(&[7, 3, 7, 0]));
        assert!(normalize_labels(&[]).is_empty());
    }

    #[test]
    fn test_community_count() {
        assert_eq!(0, community_count(&[]));
        assert_eq!(3, community_count(&[0, 1, 1, 2]));
    }

    #[test]
    fn test_modularity_of_split_triangles() {
        let g = two_triangles();
        assert_relative_eq!(5.0 / 14.0, modularity(&g, &[0, 0, 0, 1, 1, 1]));
    }

    #[test]
    fn test_single_community_has_zero_modularity() {
        let g = two_triangles();
        assert_relative_eq!(0.0, modularity(&g, &[0; 6]));
    }

    #[test]
    fn test_edgeless_modularity() {
        let g = GraphBuilder::new(3).freeze();
        assert_eq!(0.0, modularity(&g, &[0, 1, 2]));
    }
}
