//! Selection state and center resolution
//!
//! The selection is owned by the caller and may point at nodes that vanished
//! in a rebuild. Resolution never fails; it walks an ordered list of sources
//! and reports which one produced the center.

use crate::dag::FileDag;
use crate::types::NodeId;
use serde::{Deserialize, Serialize};

/// Caller-owned selection: the focused node and the chosen traversal anchors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_node_id: Option<NodeId>,
    pub selected_root_ids: Vec<NodeId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(id: impl Into<NodeId>) -> Self {
        Self {
            selected_node_id: Some(id.into()),
            selected_root_ids: Vec::new(),
        }
    }

    pub fn select(&mut self, id: impl Into<NodeId>) {
        self.selected_node_id = Some(id.into());
    }

    pub fn clear_selected_node(&mut self) {
        self.selected_node_id = None;
    }

    /// "Set as root": anchor traversal at `id`. The graph itself is untouched.
    pub fn set_as_root(&mut self, id: impl Into<NodeId>) {
        self.selected_root_ids = vec![id.into()];
    }

    /// Resolve the center node, trying each source in [`CENTER_STRATEGIES`] order
    pub fn resolve(&self, dag: &FileDag) -> Option<CenterResolution> {
        CENTER_STRATEGIES.iter().find_map(|source| {
            source
                .candidate(self, dag)
                .map(|center| CenterResolution {
                    center,
                    source: *source,
                })
        })
    }
}

/// Where a resolved center came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CenterSource {
    /// The selected node, if it is a known record
    SelectedNode,
    /// The first selected root, if the dataset can navigate it
    SelectedRoot,
    /// The first root of the dataset
    FirstRoot,
}

/// Resolution order. Exhausting it means there is no center to show.
pub const CENTER_STRATEGIES: [CenterSource; 3] = [
    CenterSource::SelectedNode,
    CenterSource::SelectedRoot,
    CenterSource::FirstRoot,
];

impl CenterSource {
    fn candidate(&self, selection: &SelectionState, dag: &FileDag) -> Option<NodeId> {
        match self {
            CenterSource::SelectedNode => selection
                .selected_node_id
                .as_ref()
                .filter(|id| dag.get(id.as_str()).is_some())
                .cloned(),
            // Dangling ids are accepted here: they still have children to explore
            CenterSource::SelectedRoot => selection
                .selected_root_ids
                .first()
                .filter(|id| dag.is_navigable(id.as_str()))
                .cloned(),
            CenterSource::FirstRoot => dag.roots().first().cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterResolution {
    pub center: NodeId,
    pub source: CenterSource,
}
