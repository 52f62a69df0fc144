//! Integration tests for the file DAG

mod dag_properties;
mod dag_scenarios;
mod progress_flow;
mod records_file;
mod selection_flow;

use filedag::FileRecord;

pub(crate) fn ids(list: &[filedag::NodeId]) -> Vec<&str> {
    list.iter().map(|id| id.as_str()).collect()
}

pub(crate) fn diamond() -> Vec<FileRecord> {
    vec![
        FileRecord::folder("A", "a", &[]),
        FileRecord::folder("B", "b", &["A"]),
        FileRecord::folder("C", "c", &["A"]),
        FileRecord::file("D", "d.txt", "text/plain", &["B", "C"]),
    ]
}
