use crate::analysis::community::{CommunityDetection, normalize_labels};
use crate::core::graph::Graph;
use crate::core::ids::NodeId;
use std::collections::BTreeMap;
use std::mem::take;

/// Clauset-Newman-Moore agglomeration: start from singletons and keep
/// merging the pair of communities with the largest modularity gain while
/// that gain is positive.
pub struct GreedyModularity;

impl CommunityDetection for GreedyModularity {
    fn communities(&self, graph: &Graph) -> Vec<u32> {
        let n = graph.node_count();
        let mut owner = (0..n as u32).collect::<Vec<u32>>();
        if graph.edge_count() == 0 {
            return owner;
        }

        let two_m = 2.0 * graph.edge_count() as f64;
        // links[i][j]: fraction of edge ends running from community i to j
        let mut links = (0..n as NodeId)
            .map(|u| {
                graph
                    .neighbors(u)
                    .iter()
                    .map(|v| (*v, 1.0 / two_m))
                    .collect::<BTreeMap<u32, f64>>()
            })
            .collect::<Vec<_>>();
        // share of edge ends attached to each community
        let mut ends = (0..n as NodeId)
            .map(|u| graph.degree(u) as f64 / two_m)
            .collect::<Vec<f64>>();
        let mut members = (0..n as NodeId).map(|u| vec![u]).collect::<Vec<_>>();

        loop {
            let mut best: Option<(usize, usize, f64)> = None;
            for (i, row) in links.iter().enumerate() {
                for (j, e) in row.range(i as u32 + 1..) {
                    let j = *j as usize;
                    let gain = 2.0 * (e - ends[i] * ends[j]);
                    if best.is_none_or(|(_, _, top)| gain > top) {
                        best = Some((i, j, gain));
                    }
                }
            }
            let (i, j) = match best {
                Some((i, j, gain)) if gain > 0.0 => (i, j),
                _ => break,
            };

            for (k, e) in take(&mut links[j]) {
                let k = k as usize;
                if k == i {
                    continue;
                }
                links[k].remove(&(j as u32));
                *links[k].entry(i as u32).or_insert(0.0) += e;
                *links[i].entry(k as u32).or_insert(0.0) += e;
            }
            links[i].remove(&(j as u32));
            ends[i] += ends[j];
            ends[j] = 0.0;
            for node in take(&mut members[j]) {
                owner[node as usize] = i as u32;
                members[i].push(node);
            }
        }

        normalize_labels(&owner)
    }
}
