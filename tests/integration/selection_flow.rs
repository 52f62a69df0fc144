use super::{diamond, ids};
use filedag::views::{build_ego_view, ViewPolicy};
use filedag::{CenterSource, FileDag, FileRecord, SelectionState};

#[test]
fn click_through_then_set_as_root() {
    let dag = FileDag::from_records(&diamond());
    let mut selection = SelectionState::new();

    // Nothing selected: first root
    let first = dag.resolve_center(&selection).unwrap();
    assert_eq!(first.center.as_str(), "A");
    assert_eq!(first.source, CenterSource::FirstRoot);

    // Click a child
    selection.select("C");
    let ego = dag.ego_for_selection(&selection).unwrap();
    assert_eq!(ids(ego.parents), vec!["A"]);
    assert_eq!(ids(ego.children), vec!["D"]);

    // Anchor there, then lose the node selection
    selection.set_as_root("C");
    selection.clear_selected_node();
    let anchored = dag.resolve_center(&selection).unwrap();
    assert_eq!(anchored.center.as_str(), "C");
    assert_eq!(anchored.source, CenterSource::SelectedRoot);
}

#[test]
fn truncated_view_keeps_full_counts() {
    let mut records = vec![FileRecord::folder("shared", "Shared", &[])];
    for i in 0..250 {
        records.push(FileRecord::file(
            &format!("f{i:03}"),
            &format!("file {i}"),
            "text/plain",
            &["shared"],
        ));
    }
    let dag = FileDag::from_records(&records);

    let ego = dag.ego_neighborhood("shared");
    assert_eq!(ego.child_count(), 250);

    let view = build_ego_view(&dag, &ego, &ViewPolicy::default());
    assert_eq!(view.children.len(), 200);
    assert_eq!(view.total_children, 250);
    assert_eq!(view.hidden_children(), 50);
    assert_eq!(view.children.last().unwrap().id.as_str(), "f199");
}

#[test]
fn open_target_for_selected_file() {
    let dag = FileDag::from_records(&[
        FileRecord::folder("root", "Root", &[]),
        FileRecord::file("doc", "Doc", "application/pdf", &["root"])
            .with_resource_url("https://files.example/doc"),
    ]);
    let selection = SelectionState::with_node("doc");
    let center = dag.resolve_center(&selection).unwrap().center;

    let mut opened = Vec::new();
    dag.open_target(center.as_str())
        .unwrap()
        .open(|resource| opened.push(resource.as_str().to_string()));
    assert_eq!(opened, vec!["https://files.example/doc".to_string()]);
}
