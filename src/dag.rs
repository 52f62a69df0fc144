//! File DAG
//!
//! Built once from a flat list of file records and read-only afterwards. A new
//! dataset means a new `FileDag`; nothing here mutates after `build`.

use crate::error::DagError;
use crate::selection::{CenterResolution, SelectionState};
use crate::store::FileRecord;
use crate::tree::{find_cycle, CyclePolicy, EdgeIndex, Node, NodeRegistry, ResourceRef};
use crate::tree::hasher::compute_fingerprint;
use crate::types::{Fingerprint, NodeId};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Data-quality facts gathered while building
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    pub node_count: usize,
    pub edge_count: usize,
    pub root_count: usize,
    /// Parent ids that have no record of their own, in first-seen order
    pub dangling_parents: Vec<NodeId>,
    /// Ids that appeared on more than one record
    pub duplicate_ids: Vec<NodeId>,
    /// First cycle found, unless detection was skipped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<Vec<NodeId>>,
    pub cycle_policy: CyclePolicy,
}

/// Immediate parents and children of one center node
///
/// Lists are complete; windowing for display happens in [`crate::views`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EgoNeighborhood<'a> {
    pub center: NodeId,
    pub parents: &'a [NodeId],
    pub children: &'a [NodeId],
}

impl EgoNeighborhood<'_> {
    pub fn parent_count(&self) -> usize {
        self.parents.len()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Resolved resource for the presentation layer's open callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTarget<'a> {
    pub node: &'a Node,
    pub resource: &'a ResourceRef,
}

impl OpenTarget<'_> {
    /// Hand the resource to the caller's open handler
    pub fn open<R>(&self, callback: impl FnOnce(&ResourceRef) -> R) -> R {
        callback(self.resource)
    }
}

#[derive(Debug, Clone)]
pub struct FileDag {
    registry: NodeRegistry,
    edges: EdgeIndex,
    roots: Vec<NodeId>,
    fingerprint: Fingerprint,
    report: BuildReport,
}

impl Default for FileDag {
    fn default() -> Self {
        Self::from_records(&[])
    }
}

impl FileDag {
    /// Build with the default cycle policy (detect and warn)
    pub fn from_records(records: &[FileRecord]) -> Self {
        Self::assemble(records, CyclePolicy::Warn)
    }

    /// Build, treating cycles according to `policy`
    pub fn build(records: &[FileRecord], policy: CyclePolicy) -> Result<Self, DagError> {
        let dag = Self::assemble(records, policy);
        if policy == CyclePolicy::Reject {
            if let Some(cycle) = &dag.report.cycle {
                return Err(DagError::CycleDetected {
                    cycle: cycle.clone(),
                });
            }
        }
        Ok(dag)
    }

    fn assemble(records: &[FileRecord], policy: CyclePolicy) -> Self {
        let mut registry = NodeRegistry::new();
        let mut duplicate_ids = Vec::new();
        for record in records {
            if registry.insert(Node::from(record)).is_some() && !duplicate_ids.contains(&record.id)
            {
                debug!(id = %record.id, "Duplicate record id, keeping last");
                duplicate_ids.push(record.id.clone());
            }
        }

        let edges = EdgeIndex::build(records);
        let roots = derive_roots(&registry, &edges);

        let dangling_parents: Vec<NodeId> = edges
            .parent_ids()
            .filter(|id| !registry.contains(id.as_str()))
            .cloned()
            .collect();
        if !dangling_parents.is_empty() {
            debug!(count = dangling_parents.len(), "Dangling parent references");
        }

        let cycle = match policy {
            CyclePolicy::Allow => None,
            CyclePolicy::Warn | CyclePolicy::Reject => {
                find_cycle(&edges, registry.ids().chain(dangling_parents.iter()))
            }
        };
        if let Some(cycle) = &cycle {
            let path: Vec<&str> = cycle.iter().map(NodeId::as_str).collect();
            warn!(cycle = ?path, policy = ?policy, "Cycle in file hierarchy");
        }

        let fingerprint = compute_fingerprint(&registry, &edges, &roots);
        let report = BuildReport {
            node_count: registry.len(),
            edge_count: edges.edge_count(),
            root_count: roots.len(),
            dangling_parents,
            duplicate_ids,
            cycle,
            cycle_policy: policy,
        };
        info!(
            nodes = report.node_count,
            edges = report.edge_count,
            roots = report.root_count,
            fingerprint = %hex::encode(fingerprint),
            "Built file DAG"
        );

        FileDag {
            registry,
            edges,
            roots,
            fingerprint,
            report,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.registry.get(id)
    }

    pub fn parents_of(&self, id: &str) -> &[NodeId] {
        self.edges.parents_of(id)
    }

    pub fn children_of(&self, id: &str) -> &[NodeId] {
        self.edges.children_of(id)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Whether the id is a record or takes part in an edge
    pub fn is_navigable(&self, id: &str) -> bool {
        self.registry.contains(id) || self.edges.contains(id)
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    pub fn fingerprint_hex(&self) -> String {
        hex::encode(self.fingerprint)
    }

    pub fn resolve_center(&self, selection: &SelectionState) -> Option<CenterResolution> {
        selection.resolve(self)
    }

    pub fn ego_neighborhood(&self, center: &str) -> EgoNeighborhood<'_> {
        EgoNeighborhood {
            center: NodeId::from(center),
            parents: self.edges.parents_of(center),
            children: self.edges.children_of(center),
        }
    }

    /// Resolve the selection and query around the resulting center
    pub fn ego_for_selection(&self, selection: &SelectionState) -> Option<EgoNeighborhood<'_>> {
        self.resolve_center(selection)
            .map(|resolution| self.ego_neighborhood(resolution.center.as_str()))
    }

    /// Resource to open for a node, if the node is known and has one
    pub fn open_target(&self, id: &str) -> Option<OpenTarget<'_>> {
        let node = self.registry.get(id)?;
        let resource = node.resource.as_ref()?;
        Some(OpenTarget { node, resource })
    }
}

fn derive_roots(registry: &NodeRegistry, edges: &EdgeIndex) -> Vec<NodeId> {
    registry
        .ids()
        .filter(|id| edges.parents_of(id.as_str()).is_empty())
        .cloned()
        .collect()
}
