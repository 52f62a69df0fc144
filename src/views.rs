//! Ego Views
//!
//! Windows an ego neighborhood into a bounded set of display rows. The full
//! counts always travel with the view so the consumer can say "more exist".

use crate::dag::{EgoNeighborhood, FileDag};
use crate::tree::{Node, NodeKind};
use crate::types::NodeId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ROWS: usize = 200;

/// Display window policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewPolicy {
    /// Rows shown per list (parents and children are capped separately)
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

fn default_max_rows() -> usize {
    DEFAULT_MAX_ROWS
}

impl Default for ViewPolicy {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// One displayed neighbor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRow {
    pub id: NodeId,
    /// None when the id has no record (dangling reference)
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,
}

impl NodeRow {
    pub(crate) fn new(id: &NodeId, node: Option<&Node>) -> Self {
        NodeRow {
            id: id.clone(),
            name: node.map(|n| n.name.clone()),
            kind: node.map(|n| n.kind.clone()),
        }
    }

    pub fn is_dangling(&self) -> bool {
        self.name.is_none()
    }
}

/// Windowed ego neighborhood
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EgoView {
    pub center: NodeRow,
    pub parents: Vec<NodeRow>,
    pub children: Vec<NodeRow>,
    pub total_parents: usize,
    pub total_children: usize,
}

impl EgoView {
    pub fn hidden_parents(&self) -> usize {
        self.total_parents - self.parents.len()
    }

    pub fn hidden_children(&self) -> usize {
        self.total_children - self.children.len()
    }

    pub fn is_root(&self) -> bool {
        self.total_parents == 0
    }

    pub fn is_leaf(&self) -> bool {
        self.total_children == 0
    }
}

/// Build the display view for an ego neighborhood
pub fn build_ego_view(dag: &FileDag, ego: &EgoNeighborhood<'_>, policy: &ViewPolicy) -> EgoView {
    let rows = |ids: &[NodeId]| -> Vec<NodeRow> {
        ids.iter()
            .take(policy.max_rows)
            .map(|id| NodeRow::new(id, dag.get(id.as_str())))
            .collect()
    };

    EgoView {
        center: NodeRow::new(&ego.center, dag.get(ego.center.as_str())),
        parents: rows(ego.parents),
        children: rows(ego.children),
        total_parents: ego.parent_count(),
        total_children: ego.child_count(),
    }
}
