//! CLI Tooling
//!
//! Command-line access to a records file: roots, single nodes, ego
//! neighborhoods and the build report.

use crate::config::DagConfig;
use crate::dag::FileDag;
use crate::error::DagError;
use crate::progress::{ChunkedWork, WorkOutcome};
use crate::selection::SelectionState;
use crate::store::{JsonFileSource, RecordSource};
use crate::tooling::format::{
    format_ego_text, format_node_text, format_report_text, format_roots_text,
};
use crate::tree::CyclePolicy;
use crate::views::{build_ego_view, ViewPolicy};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

/// Filedag CLI - explore multi-parent file hierarchies
#[derive(Parser)]
#[command(name = "filedag")]
#[command(about = "Explore a file hierarchy where nodes may have several parents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON array of file records
    #[arg(long, short = 'r')]
    pub records: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Cycle handling for this run (overrides config)
    #[arg(long, value_enum)]
    pub cycles: Option<CycleArg>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CycleArg {
    Allow,
    Warn,
    Reject,
}

impl From<CycleArg> for CyclePolicy {
    fn from(arg: CycleArg) -> Self {
        match arg {
            CycleArg::Allow => CyclePolicy::Allow,
            CycleArg::Warn => CyclePolicy::Warn,
            CycleArg::Reject => CyclePolicy::Reject,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List nodes without parents
    Roots {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show one node's attributes
    Show {
        id: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show the parents and children around the resolved center
    Ego {
        /// Selected node
        #[arg(long)]
        node: Option<String>,
        /// Selected root (used when the node is missing or unknown)
        #[arg(long)]
        root: Option<String>,
        /// Rows shown per list
        #[arg(long)]
        max_rows: Option<usize>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Report dataset facts: counts, dangling parents, duplicates, cycles
    Check {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Loaded dataset plus the settings it was built with
pub struct CliContext {
    dag: FileDag,
    config: DagConfig,
}

impl CliContext {
    /// Load records and build the dataset with the given settings
    pub fn new(records: PathBuf, config: DagConfig) -> Result<Self, DagError> {
        let dag = build_dataset(&JsonFileSource::new(records), &config)?;
        Ok(Self { dag, config })
    }

    /// Wrap an already-built dataset
    pub fn from_parts(dag: FileDag, config: DagConfig) -> Self {
        Self { dag, config }
    }

    pub fn dag(&self) -> &FileDag {
        &self.dag
    }

    pub fn execute(&self, command: &Commands) -> Result<String, DagError> {
        match command {
            Commands::Roots { format } => Ok(self.roots(*format)),
            Commands::Show { id, format } => Ok(self.show(id, *format)),
            Commands::Ego {
                node,
                root,
                max_rows,
                format,
            } => Ok(self.ego(node.as_deref(), root.as_deref(), *max_rows, *format)),
            Commands::Check { format } => Ok(self.check(*format)),
        }
    }

    fn roots(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => format_roots_text(&self.dag),
            OutputFormat::Json => json!({ "roots": self.dag.roots() }).to_string(),
        }
    }

    fn show(&self, id: &str, format: OutputFormat) -> String {
        let parent_count = self.dag.parents_of(id).len();
        let child_count = self.dag.children_of(id).len();
        let Some(node) = self.dag.get(id) else {
            return match format {
                OutputFormat::Text => format!(
                    "No record for {} ({} children reference it as parent)\n",
                    id, child_count
                ),
                OutputFormat::Json => json!({ "id": id, "found": false, "children": child_count })
                    .to_string(),
            };
        };
        match format {
            OutputFormat::Text => format_node_text(node, parent_count, child_count),
            OutputFormat::Json => format!("{:#}", json!({
                "found": true,
                "node": node,
                "parents": parent_count,
                "children": child_count,
            })),
        }
    }

    fn ego(
        &self,
        node: Option<&str>,
        root: Option<&str>,
        max_rows: Option<usize>,
        format: OutputFormat,
    ) -> String {
        let mut selection = SelectionState::new();
        if let Some(node) = node {
            selection.select(node);
        }
        if let Some(root) = root {
            selection.set_as_root(root);
        }

        let Some(resolution) = self.dag.resolve_center(&selection) else {
            return match format {
                OutputFormat::Text => "Empty graph: no selection available\n".to_string(),
                OutputFormat::Json => json!({ "center": null }).to_string(),
            };
        };

        let policy = ViewPolicy {
            max_rows: max_rows.unwrap_or(self.config.view.max_rows),
        };
        let ego = self.dag.ego_neighborhood(resolution.center.as_str());
        let view = build_ego_view(&self.dag, &ego, &policy);
        match format {
            OutputFormat::Text => format_ego_text(&resolution, &view),
            OutputFormat::Json => format!("{:#}", json!({
                "resolution": resolution,
                "view": view,
                "hidden_parents": view.hidden_parents(),
                "hidden_children": view.hidden_children(),
            })),
        }
    }

    fn check(&self, format: OutputFormat) -> String {
        let report = self.dag.report();
        let fingerprint = self.dag.fingerprint_hex();
        match format {
            OutputFormat::Text => format_report_text(report, &fingerprint),
            OutputFormat::Json => format!("{:#}", json!({
                "report": report,
                "fingerprint": fingerprint,
            })),
        }
    }
}

/// Build the dataset inside a chunked run with the configured timing
pub fn build_dataset(source: &dyn RecordSource, config: &DagConfig) -> Result<FileDag, DagError> {
    let records = source.records()?;
    let policy = config.graph.cycle_policy;
    let mut work = ChunkedWork::new(config.progress);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let outcome = runtime.block_on(work.run(|| FileDag::build(&records, policy)));

    match outcome {
        WorkOutcome::Completed { elapsed, padded } => {
            info!(
                records = records.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                padded,
                "Dataset ready"
            );
            work.take_result()
                .ok_or_else(|| DagError::WorkFailed("build produced no dataset".to_string()))
        }
        WorkOutcome::Cancelled => Err(DagError::WorkFailed("build cancelled".to_string())),
        WorkOutcome::Failed { message } => Err(DagError::WorkFailed(message)),
    }
}
