use thiserror::Error;

/// Errors raised while validating or normalizing a canvas document.
#[derive(Error, Debug, Clone)]
pub enum CanvasError {
    #[error("Failed to parse canvas JSON: {0}")]
    JsonParseError(String),

    #[error("Node at index {index} is missing an id")]
    MissingNodeId { index: usize },

    #[error("Node '{node_id}' is missing a kind tag")]
    MissingNodeKind { node_id: String },

    #[error("Node '{node_id}' appears more than once in the canvas")]
    DuplicateNodeId { node_id: String },

    #[error("Node '{node_id}' has an unknown kind: '{kind}'")]
    UnknownKind { node_id: String, kind: String },

    #[error("Node '{node_id}' has a non-finite position ({x}, {y})")]
    InvalidPosition { node_id: String, x: f64, y: f64 },

    #[error("Edge '{edge_id}' references a missing node: '{node_id}'")]
    DanglingEdge { edge_id: String, node_id: String },

    #[error("Edge '{edge_id}' is missing a source or target endpoint")]
    IncompleteEdge { edge_id: String },
}

/// Errors raised when committing an inspector edit back into the graph.
/// Editing without a selection is a structural no-op, not an error.
#[derive(Error, Debug, Clone)]
pub enum EditError {
    #[error("Configuration is not valid JSON: {0}")]
    InvalidConfig(String),
}

/// Errors raised at the store boundary (load/save/run/list/delete).
#[derive(Error, Debug, Clone)]
pub enum SyncError {
    #[error("Workflow {0} not found")]
    WorkflowNotFound(u64),

    #[error("Canvas rejected by the store: {0}")]
    Validation(#[from] CanvasError),

    #[error("The flow contains cycles; execution requires an acyclic graph")]
    CyclicGraph,

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Backend error: {0}")]
    Backend(String),
}
