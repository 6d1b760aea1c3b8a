//! # Nodeflow - Node-Graph Editor Core
//!
//! **Nodeflow** is a headless node-graph editor core: the in-memory graph
//! model, the two-click connection gesture, the drag-to-reposition session,
//! the zoom transform and the cubic edge-curve computation behind a
//! workflow canvas, everything except the pixels. It is UI-toolkit
//! independent: an embedding layer translates raw input events into
//! [`Intent`](editor::Intent)s, dispatches them through an
//! [`EditorSession`](editor::EditorSession), and draws whatever the render
//! pass hands back.
//!
//! ## Core Workflow
//!
//! 1.  **Open a workflow**: load a [`WorkflowDocument`](sync::WorkflowDocument)
//!     through a [`WorkflowStore`](sync::WorkflowStore) into an
//!     [`EditorSession`](editor::EditorSession).
//! 2.  **Dispatch intents**: every gesture (add node, port clicks, drag
//!     ticks, zoom, inspector edits) goes through
//!     [`EditorSession::apply`](editor::EditorSession::apply); the returned
//!     [`Outcome`](editor::Outcome) says which re-render pass to run.
//! 3.  **Render**: [`render::layout`] maps nodes to visuals, the embedder
//!     measures the rendered port anchors, and [`render::edge_paths`]
//!     computes a cubic curve per edge from those measurements.
//! 4.  **Sync**: save the document back through the store, or save-and-run
//!     it and display the resulting step list read-only.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nodeflow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut store = MemoryStore::seeded();
//!     let mut session = EditorSession::new(NodeCatalog::builtin());
//!
//!     // Open the seed workflow and wire two nodes together with the
//!     // two-click port gesture.
//!     session.open_from(&mut store, 1)?;
//!     session.set_viewport(Viewport::new(Point::new(0.0, 0.0), 1280.0, 800.0));
//!
//!     session.apply(Intent::AddNode { kind: "invoice".to_string() });
//!     let canvas = session.canvas().expect("workflow is open");
//!     let (stock, invoice) = (
//!         canvas.nodes[2].id.clone(),
//!         canvas.nodes.last().unwrap().id.clone(),
//!     );
//!     session.apply(Intent::StartConnection { source: stock });
//!     session.apply(Intent::CompleteConnection { target: invoice });
//!
//!     // Compute the edge curves headlessly.
//!     let canvas = session.canvas().expect("workflow is open");
//!     let resolver = CardLayout::new(canvas, CardMetrics::default(), session.zoom());
//!     for path in edge_paths(canvas, &resolver) {
//!         println!("{}: {}", path.edge_id, path.curve.to_svg_path());
//!     }
//!
//!     // Persist and execute.
//!     let outcome = session.run_on(&mut store)?;
//!     for step in &outcome.steps {
//!         println!("{}. {} - {}", step.step, step.node_label, step.message);
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod demo;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod prelude;
pub mod render;
pub mod sync;
