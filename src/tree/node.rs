//! File and folder node types

use crate::store::FileRecord;
use crate::types::{NodeId, FOLDER_MIME};
use serde::{Deserialize, Serialize};

/// Node kind: a folder, or a file with its mime type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    Folder,
    File { mime_type: String },
}

impl NodeKind {
    pub fn is_folder(&self) -> bool {
        matches!(self, NodeKind::Folder)
    }

    /// Mime type as the metadata source reports it
    pub fn mime_type(&self) -> &str {
        match self {
            NodeKind::Folder => FOLDER_MIME,
            NodeKind::File { mime_type } => mime_type,
        }
    }
}

/// External resource the presentation layer opens for a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceRef(pub String);

impl ResourceRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// File or folder node. Immutable once built from its record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    #[serde(flatten)]
    pub kind: NodeKind,
    pub resource: Option<ResourceRef>,
}

impl Node {
    pub fn is_folder(&self) -> bool {
        self.kind.is_folder()
    }
}

impl From<&FileRecord> for Node {
    fn from(record: &FileRecord) -> Self {
        // Some exports set only the mime type for folders
        let kind = if record.is_folder || record.mime_type == FOLDER_MIME {
            NodeKind::Folder
        } else {
            NodeKind::File {
                mime_type: record.mime_type.clone(),
            }
        };
        Node {
            id: record.id.clone(),
            name: record.name.clone(),
            kind,
            resource: record.resource_url.clone().map(ResourceRef),
        }
    }
}
