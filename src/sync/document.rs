use crate::error::SyncError;
use crate::graph::{Canvas, Edge, Node};
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A list entry from the store, enough to render the workflow sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// The full stored workflow document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowDocument {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub canvas: Canvas,
}

impl WorkflowDocument {
    /// Pretty JSON for the download/export surface. Pure read, no mutation.
    pub fn export_json(&self) -> Result<String, SyncError> {
        serde_json::to_string_pretty(self).map_err(|e| SyncError::Snapshot(e.to_string()))
    }

    /// Serializes the document to the compact snapshot format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SyncError> {
        let snapshot = DocumentSnapshot::capture(self)?;
        encode_to_vec(&snapshot, standard())
            .map_err(|e| SyncError::Snapshot(format!("Serialization failed: {}", e)))
    }

    /// Deserializes a document from a snapshot byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SyncError> {
        let (snapshot, _): (DocumentSnapshot, _) = decode_from_slice(bytes, standard())
            .map_err(|e| SyncError::Snapshot(format!("Deserialization failed: {}", e)))?;
        snapshot.restore()
    }

    /// Saves the document as a snapshot file.
    pub fn save(&self, path: &str) -> Result<(), SyncError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path)
            .map_err(|e| SyncError::Snapshot(format!("Could not create file '{}': {}", path, e)))?;
        file.write_all(&bytes)
            .map_err(|e| SyncError::Snapshot(format!("Could not write to file '{}': {}", path, e)))
    }

    /// Loads a document from a snapshot file.
    pub fn from_file(path: &str) -> Result<Self, SyncError> {
        let mut file = fs::File::open(path)
            .map_err(|e| SyncError::Snapshot(format!("Could not open file '{}': {}", path, e)))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| SyncError::Snapshot(format!("Could not read from file '{}': {}", path, e)))?;
        Self::from_bytes(&bytes)
    }
}

/// Concrete shape the binary snapshot is encoded from. The binary codec
/// cannot re-read an open JSON value, so node configs travel as serialized
/// JSON text and are re-parsed on restore.
#[derive(Serialize, Deserialize)]
struct NodeSnapshot {
    id: String,
    kind: String,
    label: String,
    x: f64,
    y: f64,
    config: String,
}

#[derive(Serialize, Deserialize)]
struct DocumentSnapshot {
    id: u64,
    name: String,
    description: String,
    nodes: Vec<NodeSnapshot>,
    edges: Vec<Edge>,
}

impl DocumentSnapshot {
    fn capture(document: &WorkflowDocument) -> Result<Self, SyncError> {
        let nodes = document
            .canvas
            .nodes
            .iter()
            .map(|node| {
                Ok(NodeSnapshot {
                    id: node.id.clone(),
                    kind: node.kind.clone(),
                    label: node.label.clone(),
                    x: node.x,
                    y: node.y,
                    config: serde_json::to_string(&node.config)
                        .map_err(|e| SyncError::Snapshot(format!("Serialization failed: {}", e)))?,
                })
            })
            .collect::<Result<_, SyncError>>()?;
        Ok(Self {
            id: document.id,
            name: document.name.clone(),
            description: document.description.clone(),
            nodes,
            edges: document.canvas.edges.clone(),
        })
    }

    fn restore(self) -> Result<WorkflowDocument, SyncError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|node| {
                Ok(Node {
                    config: serde_json::from_str(&node.config).map_err(|e| {
                        SyncError::Snapshot(format!("Deserialization failed: {}", e))
                    })?,
                    id: node.id,
                    kind: node.kind,
                    label: node.label,
                    x: node.x,
                    y: node.y,
                })
            })
            .collect::<Result<_, SyncError>>()?;
        Ok(WorkflowDocument {
            id: self.id,
            name: self.name,
            description: self.description,
            canvas: Canvas {
                nodes,
                edges: self.edges,
            },
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Ok,
    Error,
}

/// One executed step of a run, display-only for the editor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunStep {
    pub step: usize,
    pub node_id: String,
    pub node_label: String,
    #[serde(rename = "nodeType")]
    pub node_kind: String,
    pub status: RunStatus,
    pub message: String,
}

/// The result of running a workflow, rendered as an ordered read-only list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunOutcome {
    pub status: RunStatus,
    pub total_nodes: usize,
    pub total_edges: usize,
    pub steps: Vec<RunStep>,
}

/// Aggregate counters for the stats bar. Failures fetching these are
/// non-critical and swallowed by callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStats {
    pub total_workflows: usize,
    pub total_runs: usize,
    #[serde(rename = "nodeTypesAvailable")]
    pub node_kinds_available: usize,
}
