//! File Record Store
//!
//! Raw file records as they arrive from the metadata source: a flat list where
//! every record declares its own parents. The DAG is materialized from these.

use crate::error::DagError;
use crate::types::NodeId;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// FileRecord: one file or folder with its declared parent references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: NodeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_folder: bool,
    #[serde(default)]
    pub mime_type: String,
    /// Also read from `parents`; a record carrying both keys is rejected
    #[serde(default, alias = "parents")]
    pub parent_ids: Vec<NodeId>,
    /// Link the presentation layer opens; `webViewLink` in drive exports
    #[serde(default, alias = "webViewLink", skip_serializing_if = "Option::is_none")]
    pub resource_url: Option<String>,
}

impl FileRecord {
    pub fn folder(id: &str, name: &str, parents: &[&str]) -> Self {
        Self {
            id: NodeId::from(id),
            name: name.to_string(),
            is_folder: true,
            mime_type: crate::types::FOLDER_MIME.to_string(),
            parent_ids: parents.iter().map(|p| NodeId::from(*p)).collect(),
            resource_url: None,
        }
    }

    pub fn file(id: &str, name: &str, mime_type: &str, parents: &[&str]) -> Self {
        Self {
            id: NodeId::from(id),
            name: name.to_string(),
            is_folder: false,
            mime_type: mime_type.to_string(),
            parent_ids: parents.iter().map(|p| NodeId::from(*p)).collect(),
            resource_url: None,
        }
    }

    pub fn with_resource_url(mut self, url: &str) -> Self {
        self.resource_url = Some(url.to_string());
        self
    }
}

/// Source of raw file records
pub trait RecordSource {
    fn records(&self) -> Result<Vec<FileRecord>, DagError>;
}

/// JSON array of records stored on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn records(&self) -> Result<Vec<FileRecord>, DagError> {
        let file = File::open(&self.path)?;
        let records = load_records(BufReader::new(file))?;
        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "Loaded file records"
        );
        Ok(records)
    }
}

impl RecordSource for Vec<FileRecord> {
    fn records(&self) -> Result<Vec<FileRecord>, DagError> {
        Ok(self.clone())
    }
}

/// Parse a JSON array of file records
pub fn load_records<R: Read>(reader: R) -> Result<Vec<FileRecord>, DagError> {
    Ok(serde_json::from_reader(reader)?)
}
