use std::collections::HashMap;

pub type NodeId = u32;

/// Maps author ids to dense node ids, assigned in first-seen order.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    map: HashMap<String, NodeId>,
    names: Vec<String>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_insert(&mut self, external_id: &str) -> NodeId {
        if let Some(id) = self.map.get(external_id) {
            return *id;
        }
        let next = self.names.len();
        if next == u32::MAX as usize {
            panic!("Nodes count exceeds the limit")
        }
        self.map.insert(external_id.to_string(), next as NodeId);
        self.names.push(external_id.to_string());
        next as NodeId
    }

    pub fn get(&self, external_id: &str) -> Option<NodeId> {
        self.map.get(external_id).copied()
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.names[id as usize]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
