//! Tooling Layer
//!
//! Command-line access and text formatting for datasets.

pub mod cli;
pub mod format;

pub use cli::{build_dataset, Cli, CliContext, Commands, OutputFormat};
