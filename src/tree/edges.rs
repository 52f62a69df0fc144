//! Edge Index
//!
//! Provides O(1) access to the parents and children of any node id, including
//! ids that never appear as a record of their own (dangling parents).

use crate::store::FileRecord;
use crate::types::NodeId;
use indexmap::IndexMap;

/// Edge index: NodeId -> ordered parent ids, NodeId -> ordered child ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeIndex {
    pub(crate) parents: IndexMap<NodeId, Vec<NodeId>>,
    pub(crate) children: IndexMap<NodeId, Vec<NodeId>>,
}

impl EdgeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invert the "record declares its parents" relation
    ///
    /// Every declared reference is recorded as-is: parents that have no record,
    /// repeated references and self references all become edges.
    pub fn build<'a>(records: impl IntoIterator<Item = &'a FileRecord>) -> Self {
        let mut index = EdgeIndex::new();
        for record in records {
            for parent in &record.parent_ids {
                index.add_edge(parent, &record.id);
            }
        }
        index
    }

    pub fn add_edge(&mut self, parent: &NodeId, child: &NodeId) {
        self.children
            .entry(parent.clone())
            .or_default()
            .push(child.clone());
        self.parents
            .entry(child.clone())
            .or_default()
            .push(parent.clone());
    }

    pub fn parents_of(&self, id: &str) -> &[NodeId] {
        self.parents.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn children_of(&self, id: &str) -> &[NodeId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the id takes part in any edge
    pub fn contains(&self, id: &str) -> bool {
        self.parents.contains_key(id) || self.children.contains_key(id)
    }

    pub fn edge_count(&self) -> usize {
        self.children.values().map(Vec::len).sum()
    }

    /// Ids that have children, in first-seen order
    pub fn parent_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.children.keys()
    }
}
