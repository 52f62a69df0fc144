use super::{diamond, ids};
use filedag::tree::CyclePolicy;
use filedag::{FileDag, FileRecord, SelectionState};

#[test]
fn linear_chain_roots_and_ego() {
    let dag = FileDag::from_records(&[
        FileRecord::folder("A", "a", &[]),
        FileRecord::folder("B", "b", &["A"]),
        FileRecord::folder("C", "c", &["B"]),
    ]);

    assert_eq!(ids(dag.roots()), vec!["A"]);
    let ego = dag.ego_neighborhood("B");
    assert_eq!(ids(ego.parents), vec!["A"]);
    assert_eq!(ids(ego.children), vec!["C"]);
}

#[test]
fn diamond_keeps_parent_order() {
    let dag = FileDag::from_records(&diamond());

    let ego = dag.ego_neighborhood("D");
    assert_eq!(ids(ego.parents), vec!["B", "C"]);
    assert_eq!(dag.parents_of("D").len(), 2);
    assert_eq!(ego.parent_count(), 2);
    assert!(ego.is_leaf());
    assert_eq!(ids(dag.children_of("A")), vec!["B", "C"]);
}

#[test]
fn dangling_parent_is_absent_but_has_children() {
    let dag = FileDag::from_records(&[FileRecord::file("X", "x", "text/plain", &["ghost"])]);

    assert!(dag.get("ghost").is_none());
    assert_eq!(ids(dag.children_of("ghost")), vec!["X"]);
    assert!(dag.parents_of("ghost").is_empty());
}

#[test]
fn multi_root_forest() {
    let dag = FileDag::from_records(&[
        FileRecord::folder("r1", "one", &[]),
        FileRecord::file("x", "x", "text/plain", &["r1"]),
        FileRecord::folder("r2", "two", &[]),
        FileRecord::folder("r3", "three", &[]),
    ]);
    assert_eq!(ids(dag.roots()), vec!["r1", "r2", "r3"]);
}

#[test]
fn unknown_ids_yield_empty_neighborhood() {
    let dag = FileDag::from_records(&diamond());
    let ego = dag.ego_neighborhood("nowhere");
    assert!(ego.parents.is_empty());
    assert!(ego.children.is_empty());
    assert!(ego.is_root());
    assert!(ego.is_leaf());
}

#[test]
fn set_as_root_does_not_touch_graph() {
    let dag = FileDag::from_records(&diamond());
    let before = *dag.fingerprint();

    let mut selection = SelectionState::new();
    selection.set_as_root("B");
    let ego = dag.ego_for_selection(&selection).unwrap();

    assert_eq!(ego.center.as_str(), "B");
    assert_eq!(ids(ego.parents), vec!["A"]);
    assert_eq!(ids(dag.roots()), vec!["A"]);
    assert_eq!(*dag.fingerprint(), before);
}

#[test]
fn rebuild_with_new_records_replaces_dataset() {
    let dag = FileDag::from_records(&diamond());
    let selection = SelectionState::with_node("D");
    assert_eq!(
        dag.resolve_center(&selection).unwrap().center.as_str(),
        "D"
    );

    let rebuilt = FileDag::from_records(&[FileRecord::folder("Z", "z", &[])]);
    let resolution = rebuilt.resolve_center(&selection).unwrap();
    assert_eq!(resolution.center.as_str(), "Z");
}

#[test]
fn cycle_policy_choices() {
    let cyclic = vec![
        FileRecord::folder("a", "a", &["c"]),
        FileRecord::folder("b", "b", &["a"]),
        FileRecord::folder("c", "c", &["b"]),
    ];

    assert!(FileDag::build(&cyclic, CyclePolicy::Reject).is_err());

    let warned = FileDag::build(&cyclic, CyclePolicy::Warn).unwrap();
    assert_eq!(
        warned.report().cycle.as_deref().map(ids),
        Some(vec!["a", "b", "c"])
    );
    // Every node has a parent, so nothing is a root
    assert!(warned.roots().is_empty());

    let allowed = FileDag::build(&cyclic, CyclePolicy::Allow).unwrap();
    assert!(allowed.report().cycle.is_none());
    assert_eq!(ids(allowed.children_of("a")), vec!["b"]);

    assert!(FileDag::build(&diamond(), CyclePolicy::Reject).is_ok());
}
