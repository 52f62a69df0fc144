//! Format roots, nodes, ego views and build reports as text.

use crate::dag::{BuildReport, FileDag};
use crate::selection::{CenterResolution, CenterSource};
use crate::tree::{Node, NodeKind};
use crate::types::NodeId;
use crate::views::{EgoView, NodeRow};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn kind_label(kind: Option<&NodeKind>) -> String {
    match kind {
        Some(NodeKind::Folder) => "folder".to_string(),
        Some(NodeKind::File { mime_type }) if mime_type.is_empty() => "file".to_string(),
        Some(NodeKind::File { mime_type }) => mime_type.clone(),
        None => "-".to_string(),
    }
}

fn rows_table(rows: &[NodeRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Id", "Name", "Kind"]);
    for row in rows {
        let name = match &row.name {
            Some(name) if name.is_empty() => "(untitled)".to_string(),
            Some(name) => name.clone(),
            None => format!("{}", "(missing)".dimmed()),
        };
        table.add_row(vec![
            row.id.to_string(),
            name,
            kind_label(row.kind.as_ref()),
        ]);
    }
    table
}

/// Format the root list of a dataset.
pub fn format_roots_text(dag: &FileDag) -> String {
    let mut out = format!("{}\n\n", format_section_heading("Roots"));
    if dag.roots().is_empty() {
        out.push_str("No roots.\n");
        return out;
    }
    let rows: Vec<NodeRow> = dag
        .roots()
        .iter()
        .map(|id| NodeRow::new(id, dag.get(id.as_str())))
        .collect();
    out.push_str(&format!("{}\n", rows_table(&rows)));
    out
}

/// Format a single node's attributes.
pub fn format_node_text(node: &Node, parent_count: usize, child_count: usize) -> String {
    let mut out = format!("{}\n\n", format_section_heading("Node"));
    out.push_str(&format!("  Id: {}\n", node.id));
    out.push_str(&format!("  Name: {}\n", node.name));
    out.push_str(&format!("  Kind: {}\n", kind_label(Some(&node.kind))));
    if let Some(resource) = &node.resource {
        out.push_str(&format!("  Open: {}\n", resource.as_str()));
    }
    out.push_str(&format!("  Parents: {}\n", parent_count));
    out.push_str(&format!("  Children: {}\n", child_count));
    out
}

fn source_label(source: CenterSource) -> &'static str {
    match source {
        CenterSource::SelectedNode => "selected node",
        CenterSource::SelectedRoot => "selected root",
        CenterSource::FirstRoot => "first root",
    }
}

/// Format an ego view with its "more exist" indicators.
pub fn format_ego_text(resolution: &CenterResolution, view: &EgoView) -> String {
    let mut out = format!("{}\n\n", format_section_heading("Center"));
    let name = view.center.name.as_deref().unwrap_or("(missing)");
    out.push_str(&format!(
        "  {} {} (via {})\n",
        view.center.id.bold(),
        name,
        source_label(resolution.source)
    ));
    if view.is_root() {
        out.push_str(&format!("  {}\n", "root".green()));
    }
    if view.is_leaf() {
        out.push_str(&format!("  {}\n", "leaf".cyan()));
    }
    out.push('\n');

    for (title, rows, total, hidden) in [
        ("Parents", &view.parents, view.total_parents, view.hidden_parents()),
        ("Children", &view.children, view.total_children, view.hidden_children()),
    ] {
        out.push_str(&format!(
            "{}\n\n",
            format_section_heading(&format!("{} ({})", title, total))
        ));
        if rows.is_empty() {
            out.push_str("  none\n\n");
            continue;
        }
        out.push_str(&format!("{}\n", rows_table(rows)));
        if hidden > 0 {
            out.push_str(&format!("  ... {} more not shown\n", hidden));
        }
        out.push('\n');
    }
    out
}

/// Format a build report.
pub fn format_report_text(report: &BuildReport, fingerprint: &str) -> String {
    let mut out = format!("{}\n\n", format_section_heading("Dataset"));
    out.push_str(&format!("  Nodes: {}\n", report.node_count));
    out.push_str(&format!("  Edges: {}\n", report.edge_count));
    out.push_str(&format!("  Roots: {}\n", report.root_count));
    out.push_str(&format!(
        "  Fingerprint: {}...\n",
        &fingerprint[..fingerprint.len().min(12)]
    ));
    out.push_str(&format!("  Cycle policy: {:?}\n\n", report.cycle_policy));

    let list = |ids: &[NodeId]| -> String {
        ids.iter().map(NodeId::as_str).collect::<Vec<_>>().join(", ")
    };
    if !report.dangling_parents.is_empty() {
        out.push_str(&format!(
            "  Dangling parents ({}): {}\n",
            report.dangling_parents.len(),
            list(&report.dangling_parents)
        ));
    }
    if !report.duplicate_ids.is_empty() {
        out.push_str(&format!(
            "  Duplicate ids ({}): {}\n",
            report.duplicate_ids.len(),
            list(&report.duplicate_ids)
        ));
    }
    match &report.cycle {
        Some(cycle) => out.push_str(&format!("  {} {}\n", "Cycle:".red(), list(cycle))),
        None => out.push_str("  No cycles found\n"),
    }
    out
}
