use filedag::{FileDag, FileRecord, SelectionState};
use proptest::prelude::*;

/// Records over a small id space so that multi-parent links, dangling
/// parents, duplicates and self references all show up.
fn records_strategy() -> impl Strategy<Value = Vec<FileRecord>> {
    let record = (0u8..12, prop::collection::vec(0u8..16, 0..4), any::<bool>()).prop_map(
        |(id, parents, is_folder)| {
            let id = format!("n{id}");
            let parents: Vec<String> = parents.iter().map(|p| format!("n{p}")).collect();
            let parent_refs: Vec<&str> = parents.iter().map(String::as_str).collect();
            if is_folder {
                FileRecord::folder(&id, &id, &parent_refs)
            } else {
                FileRecord::file(&id, &id, "text/plain", &parent_refs)
            }
        },
    );
    prop::collection::vec(record, 0..24)
}

fn count(list: &[filedag::NodeId], id: &filedag::NodeId) -> usize {
    list.iter().filter(|x| *x == id).count()
}

proptest! {
    #[test]
    fn parents_and_children_are_inverse(records in records_strategy()) {
        let dag = FileDag::from_records(&records);
        let mut ids: Vec<filedag::NodeId> = records.iter().map(|r| r.id.clone()).collect();
        ids.extend(records.iter().flat_map(|r| r.parent_ids.clone()));

        for c in &ids {
            for p in dag.parents_of(c.as_str()) {
                prop_assert_eq!(
                    count(dag.parents_of(c.as_str()), p),
                    count(dag.children_of(p.as_str()), c)
                );
            }
            for child in dag.children_of(c.as_str()) {
                prop_assert!(dag.parents_of(child.as_str()).contains(c));
            }
        }
    }

    #[test]
    fn roots_are_exactly_parentless_registry_nodes(records in records_strategy()) {
        let dag = FileDag::from_records(&records);
        for node in dag.registry().iter() {
            let is_root = dag.roots().contains(&node.id);
            prop_assert_eq!(is_root, dag.parents_of(node.id.as_str()).is_empty());
        }
        for root in dag.roots() {
            prop_assert!(dag.get(root.as_str()).is_some());
        }
    }

    #[test]
    fn rebuild_is_idempotent(records in records_strategy()) {
        let first = FileDag::from_records(&records);
        let second = FileDag::from_records(&records);
        prop_assert_eq!(first.roots(), second.roots());
        prop_assert_eq!(first.fingerprint(), second.fingerprint());
        for record in &records {
            let id = record.id.as_str();
            prop_assert_eq!(first.parents_of(id), second.parents_of(id));
            prop_assert_eq!(first.children_of(id), second.children_of(id));
        }
    }

    #[test]
    fn resolution_never_fails_on_arbitrary_selection(
        records in records_strategy(),
        node in proptest::option::of(0u8..20),
        root in proptest::option::of(0u8..20),
    ) {
        let dag = FileDag::from_records(&records);
        let mut selection = SelectionState::new();
        if let Some(node) = node {
            selection.select(format!("n{node}"));
        }
        if let Some(root) = root {
            selection.set_as_root(format!("n{root}"));
        }
        match dag.resolve_center(&selection) {
            Some(resolution) => prop_assert!(dag.is_navigable(resolution.center.as_str())),
            None => prop_assert!(dag.roots().is_empty()),
        }
    }
}

#[test]
fn empty_registry_has_no_center() {
    let dag = FileDag::from_records(&[]);
    assert!(dag.resolve_center(&SelectionState::new()).is_none());
}

#[test]
fn single_node_resolves_via_roots() {
    let dag = FileDag::from_records(&[FileRecord::file("only", "only", "text/plain", &[])]);
    let resolution = dag.resolve_center(&SelectionState::new()).unwrap();
    assert_eq!(resolution.center.as_str(), "only");
    assert_eq!(resolution.source, filedag::CenterSource::FirstRoot);
}
