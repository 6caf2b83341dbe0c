use crate::analysis::community::{CommunityDetection, normalize_labels};
use crate::core::graph::Graph;
use std::mem::swap;

/// Synchronous label propagation: every node adopts the most frequent label
/// among its neighbours, ties going to the smallest label.
pub struct LabelPropagation {
    pub max_iters: usize,
}

impl Default for LabelPropagation {
    fn default() -> Self {
        Self { max_iters: 20 }
    }
}

impl CommunityDetection for LabelPropagation {
    fn communities(&self, graph: &Graph) -> Vec<u32> {
        normalize_labels(&label_propagation(graph, self.max_iters))
    }
}

pub fn label_propagation(graph: &Graph, max_iters: usize) -> Vec<u32> {
    let mut labels = (0..graph.node_count() as u32).collect::<Vec<u32>>();
    let mut next_labels = vec![0; labels.len()];
    let mut seen_labels = Vec::with_capacity(3);
    let mut counts = Vec::with_capacity(3);
    for _ in 0..max_iters {
        let mut changed = false;
        for src in 0..graph.node_count() {
            let mut new_label = labels[src];
            seen_labels.clear();
            counts.clear();
            for n in graph.neighbors(src as u32) {
                let group = labels[*n as usize];
                match seen_labels.iter().position(|l| *l == group) {
                    Some(i) => counts[i] += 1,
                    None => {
                        seen_labels.push(group);
                        counts.push(1);
                    }
                }
            }

            if !seen_labels.is_empty() {
                let mut max_idx = 0;
                for i in 1..seen_labels.len() {
                    if counts[i] > counts[max_idx]
                        || (counts[i] == counts[max_idx] && seen_labels[i] < seen_labels[max_idx])
                    {
                        max_idx = i;
                    }
                }
                new_label = seen_labels[max_idx];
            }

            next_labels[src] = new_label;
            if labels[src] != new_label {
                changed = true;
            }
        }
        if changed {
            swap(&mut labels, &mut next_labels);
        } else {
            break;
        }
    }

    labels
}
