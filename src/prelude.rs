//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! nodeflow crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use nodeflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let mut store = MemoryStore::seeded();
//! let mut session = EditorSession::new(NodeCatalog::builtin());
//! session.open_from(&mut store, 1)?;
//!
//! session.apply(Intent::LoadDemo);
//! let outcome = session.run_on(&mut store)?;
//! println!("Ran {} steps", outcome.steps.len());
//! # Ok(())
//! # }
//! ```

// Editor state and intents
pub use crate::editor::{
    ConnectionState, DragSession, EditorSession, InspectorView, Intent, Notice, NoticeLevel,
    OpenWorkflow, Outcome, Redraw,
};

// Graph model
pub use crate::graph::{Canvas, Edge, Node, canvas_from_json, validate_canvas};

// Catalog and geometry
pub use crate::catalog::{NodeCatalog, NodeKindInfo};
pub use crate::geometry::{EdgeCurve, MARGIN, Point, Viewport, Zoom};

// Render pass
pub use crate::render::{
    AnchorResolver, CardLayout, CardMetrics, EdgePath, NodeVisual, PortAnchors, edge_paths, layout,
};

// Store boundary
pub use crate::sync::{
    MemoryStore, RunOutcome, RunStatus, RunStep, WorkflowDocument, WorkflowStats, WorkflowStore,
    WorkflowSummary,
};

// Error types
pub use crate::error::{CanvasError, EditError, SyncError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
