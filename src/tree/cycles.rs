//! Cycle detection over the edge index
//!
//! Input is not guaranteed to be acyclic. How a detected cycle is treated is a
//! per-build choice, see [`CyclePolicy`].

use crate::tree::edges::EdgeIndex;
use crate::types::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a build treats cyclic input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// Skip detection and render whatever the data says
    Allow,
    /// Detect, log the cycle and keep the dataset
    #[default]
    Warn,
    /// Detect and fail the build
    Reject,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Find the first cycle reachable from `starts`, following child edges
///
/// Traversal is depth-first in the given start order and in edge insertion
/// order, so the reported cycle is deterministic. The returned path starts at
/// the node where the cycle closes; a self-loop is a path of length one.
pub fn find_cycle<'a>(
    edges: &'a EdgeIndex,
    starts: impl IntoIterator<Item = &'a NodeId>,
) -> Option<Vec<NodeId>> {
    let mut marks: HashMap<&'a NodeId, Mark> = HashMap::new();

    for start in starts {
        if marks.contains_key(start) {
            continue;
        }
        marks.insert(start, Mark::InProgress);
        let mut stack: Vec<(&'a NodeId, usize)> = vec![(start, 0)];

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let children = edges.children_of(node.as_str());
            if frame.1 >= children.len() {
                marks.insert(node, Mark::Done);
                stack.pop();
                continue;
            }
            let child = &children[frame.1];
            frame.1 += 1;

            match marks.get(child) {
                None => {
                    marks.insert(child, Mark::InProgress);
                    stack.push((child, 0));
                }
                Some(Mark::InProgress) => {
                    let from = stack
                        .iter()
                        .position(|(id, _)| *id == child)
                        .unwrap_or(0);
                    return Some(stack[from..].iter().map(|(id, _)| (*id).clone()).collect());
                }
                Some(Mark::Done) => {}
            }
        }
    }
    None
}
