use filedag::config::DagConfig;
use filedag::tooling::{build_dataset, CliContext, Commands, OutputFormat};
use filedag::store::{JsonFileSource, RecordSource};
use std::fs;
use tempfile::TempDir;

const RECORDS: &str = r#"[
  {"id": "root", "name": "My Drive", "isFolder": true, "mimeType": "application/vnd.google-apps.folder", "parentIds": []},
  {"id": "team", "name": "Team", "isFolder": true, "mimeType": "application/vnd.google-apps.folder", "parentIds": ["root"]},
  {"id": "plan", "name": "plan.md", "isFolder": false, "mimeType": "text/markdown", "parentIds": ["root", "team"], "webViewLink": "https://files.example/plan"},
  {"id": "lost", "name": "lost.txt", "isFolder": false, "mimeType": "text/plain", "parentIds": ["trashed-folder"]}
]"#;

fn write_records(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("records.json");
    fs::write(&path, RECORDS).unwrap();
    path
}

#[test]
fn loads_and_builds_from_json_file() {
    let dir = TempDir::new().unwrap();
    let source = JsonFileSource::new(write_records(&dir));
    assert_eq!(source.records().unwrap().len(), 4);

    let dag = build_dataset(&source, &DagConfig::default()).unwrap();
    assert_eq!(super::ids(dag.roots()), vec!["root"]);
    assert_eq!(super::ids(dag.parents_of("plan")), vec!["root", "team"]);
    assert_eq!(super::ids(dag.children_of("trashed-folder")), vec!["lost"]);
    assert_eq!(
        super::ids(&dag.report().dangling_parents),
        vec!["trashed-folder"]
    );
}

#[test]
fn cli_context_answers_commands() {
    let dir = TempDir::new().unwrap();
    let cli = CliContext::new(write_records(&dir), DagConfig::default()).unwrap();

    let check = cli
        .execute(&Commands::Check {
            format: OutputFormat::Json,
        })
        .unwrap();
    let report: serde_json::Value = serde_json::from_str(&check).unwrap();
    assert_eq!(report["report"]["node_count"], 4);
    assert_eq!(report["report"]["dangling_parents"][0], "trashed-folder");

    let ego = cli
        .execute(&Commands::Ego {
            node: None,
            root: Some("trashed-folder".to_string()),
            max_rows: None,
            format: OutputFormat::Json,
        })
        .unwrap();
    let ego: serde_json::Value = serde_json::from_str(&ego).unwrap();
    assert_eq!(ego["resolution"]["source"], "selected_root");
    assert_eq!(ego["view"]["center"]["name"], serde_json::Value::Null);
    assert_eq!(ego["view"]["children"][0]["id"], "lost");
}

#[test]
fn malformed_records_file_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{\"name\": \"no id\"}]").unwrap();
    assert!(CliContext::new(path, DagConfig::default()).is_err());
}
