//! Hash computation for built datasets

use crate::tree::edges::EdgeIndex;
use crate::tree::registry::NodeRegistry;
use crate::types::{Fingerprint, NodeId};

/// Compute the fingerprint of a built dataset
///
/// Covers registry order, every node's parent and child lists (order included)
/// and the root list. Two builds from the same records hash identically.
pub fn compute_fingerprint(
    registry: &NodeRegistry,
    edges: &EdgeIndex,
    roots: &[NodeId],
) -> Fingerprint {
    let mut hasher = blake3::Hasher::new();

    hasher.update(b"nodes");
    for node in registry.iter() {
        update_id(&mut hasher, &node.id);
        update_str(&mut hasher, &node.name);
        update_str(&mut hasher, node.kind.mime_type());
    }

    hasher.update(b"parents");
    for (id, parents) in &edges.parents {
        update_id(&mut hasher, id);
        update_list(&mut hasher, parents);
    }

    hasher.update(b"children");
    for (id, children) in &edges.children {
        update_id(&mut hasher, id);
        update_list(&mut hasher, children);
    }

    hasher.update(b"roots");
    update_list(&mut hasher, roots);

    *hasher.finalize().as_bytes()
}

// Length-prefixed so that ("ab", "c") and ("a", "bc") differ
fn update_str(hasher: &mut blake3::Hasher, value: &str) {
    hasher.update(&(value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

fn update_id(hasher: &mut blake3::Hasher, id: &NodeId) {
    update_str(hasher, id.as_str());
}

fn update_list(hasher: &mut blake3::Hasher, ids: &[NodeId]) {
    hasher.update(&(ids.len() as u64).to_le_bytes());
    for id in ids {
        update_id(hasher, id);
    }
}
