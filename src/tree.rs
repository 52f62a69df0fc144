//! Node storage and the derived edge structure.

pub mod cycles;
pub mod edges;
pub mod hasher;
pub mod node;
pub mod registry;

pub use cycles::{find_cycle, CyclePolicy};
pub use edges::EdgeIndex;
pub use node::{Node, NodeKind, ResourceRef};
pub use registry::NodeRegistry;
