//! Filedag: multi-parent file hierarchies
//!
//! Materializes a flat list of file records, each declaring its parents, into
//! an id-keyed DAG with constant-time parent and child lookups, and answers
//! ego-neighborhood queries around a selection that may have gone stale.

pub mod config;
pub mod dag;
pub mod error;
pub mod logging;
pub mod progress;
pub mod selection;
pub mod store;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod views;

pub use dag::{BuildReport, EgoNeighborhood, FileDag, OpenTarget};
pub use error::DagError;
pub use selection::{CenterResolution, CenterSource, SelectionState};
pub use store::FileRecord;
pub use types::NodeId;
