use crate::core::ids::NodeId;

pub struct GraphBuilder {
    node_count: usize,
    edges: Vec<(NodeId, NodeId)>,
}

impl GraphBuilder {
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: vec![],
        }
    }

    /// Records an undirected edge. Self-loops are ignored and repeated
    /// pairs collapse into one edge on `freeze`.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        if u != v {
            self.edges.push((u, v));
        }
    }

    pub fn freeze(self) -> Graph {
        let mut graph = Graph::new(self.node_count);
        if self.edges.is_empty() {
            return graph;
        }

        let mut buf = vec![0; self.node_count];

        // store number of edge endpoints per node
        for (u, v) in &self.edges {
            buf[*u as usize] += 1;
            buf[*v as usize] += 1;
        }

        // compute adjacency offsets per node
        let mut offsets = vec![0; self.node_count + 1];
        let mut next = 0;
        for (i, endpoints) in buf.iter().enumerate() {
            offsets[i] = next;
            next += endpoints;
            offsets[i + 1] = next;
        }

        buf.fill(0);
        let mut neighbors = vec![0; next];
        for (u, v) in &self.edges {
            let (u, v) = (*u as usize, *v as usize);
            neighbors[offsets[u] + buf[u]] = v as NodeId;
            buf[u] += 1;
            neighbors[offsets[v] + buf[v]] = u as NodeId;
            buf[v] += 1;
        }

        // sort every adjacency slice and compact duplicates in place
        let mut write = 0;
        for n in 0..self.node_count {
            let (from, to) = (offsets[n], offsets[n + 1]);
            neighbors[from..to].sort_unstable();
            graph.offsets[n] = write;
            let mut last = None;
            for i in from..to {
                let dst = neighbors[i];
                if last != Some(dst) {
                    neighbors[write] = dst;
                    write += 1;
                    last = Some(dst);
                }
            }
        }
        graph.offsets[self.node_count] = write;
        neighbors.truncate(write);
        graph.neighbors = neighbors;

        graph
    }
}

/// Simple undirected graph in compressed adjacency form. Every edge is
/// stored once per endpoint.
#[derive(Debug)]
pub struct Graph {
    node_count: usize,
    neighbors: Vec<NodeId>,
    offsets: Vec<usize>,
}

impl Graph {
    fn new(node_count: usize) -> Self {
        Self {
            node_count,
            neighbors: vec![],
            offsets: vec![0; node_count + 1],
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.neighbors.len() / 2
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.offsets[node as usize + 1] - self.offsets[node as usize]
    }

    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.neighbors[self.offsets[node as usize]..self.offsets[node as usize + 1]]
    }

    /// Each undirected edge exactly once, as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        (0..self.node_count as NodeId).flat_map(move |u| {
            self.neighbors(u)
                .iter()
                .filter(move |v| u < **v)
                .map(move |v| (u, *v))
        })
    }

    pub fn density(&self) -> f64 {
        let n = self.node_count;
        if n <= 1 {
            return 0.0;
        }
        2.0 * self.edge_count() as f64 / (n * (n - 1)) as f64
    }
}
