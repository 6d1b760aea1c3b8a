use super::connection::ConnectionState;
use super::drag::DragSession;
use super::inspector::{self, InspectorView};
use super::intent::{Intent, Notice, Outcome, Redraw};
use crate::catalog::NodeCatalog;
use crate::demo;
use crate::error::SyncError;
use crate::geometry::{Viewport, Zoom};
use crate::graph::Canvas;
use crate::sync::{RunOutcome, WorkflowDocument, WorkflowStore};
use tracing::debug;

/// The workflow document currently open in the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenWorkflow {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub canvas: Canvas,
}

impl From<WorkflowDocument> for OpenWorkflow {
    fn from(doc: WorkflowDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            description: doc.description,
            canvas: doc.canvas,
        }
    }
}

/// The editor's application state: one active workflow, the connection
/// gesture, the selection, the drag session and the zoom factor.
///
/// All mutation goes through [`apply`](Self::apply); each dispatched intent
/// runs to completion on the caller's thread and the returned
/// [`Outcome`] tells the embedder which re-render pass to run. A render is
/// therefore always a pure function of the state left by the immediately
/// preceding intent.
#[derive(Debug, Default)]
pub struct EditorSession {
    workflow: Option<OpenWorkflow>,
    connection: ConnectionState,
    selected: Option<String>,
    drag: Option<DragSession>,
    zoom: Zoom,
    viewport: Viewport,
    catalog: NodeCatalog,
}

impl EditorSession {
    pub fn new(catalog: NodeCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> &NodeCatalog {
        &self.catalog
    }

    pub fn workflow(&self) -> Option<&OpenWorkflow> {
        self.workflow.as_ref()
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.workflow.as_ref().map(|w| &w.canvas)
    }

    fn canvas_mut(&mut self) -> Option<&mut Canvas> {
        self.workflow.as_mut().map(|w| &mut w.canvas)
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn selected_node(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn connection(&self) -> &ConnectionState {
        &self.connection
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The scrollable viewport, used to place newly added nodes. The
    /// embedding layer keeps this current as the user scrolls or resizes.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Replaces the open workflow. Session interaction state resets to
    /// neutral whenever the active document changes.
    pub fn open(&mut self, workflow: impl Into<OpenWorkflow>) {
        let workflow = workflow.into();
        debug!(id = workflow.id, name = %workflow.name, "workflow opened");
        self.workflow = Some(workflow);
        self.reset_interaction();
    }

    /// Discards the open workflow (delete, or navigating away).
    pub fn close(&mut self) {
        self.workflow = None;
        self.reset_interaction();
    }

    fn reset_interaction(&mut self) {
        self.connection = ConnectionState::Idle;
        self.selected = None;
        self.drag = None;
    }

    /// Projects the current selection for the inspector panel; `None` means
    /// the placeholder panel.
    pub fn inspector(&self) -> Option<InspectorView> {
        inspector::project(self.canvas()?, &self.catalog, self.selected.as_deref())
    }

    /// Dispatches one editor intent. Every arm terminates in a redraw
    /// decision rather than a nested mutation, so handlers never re-enter.
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::AddNode { kind } => self.add_node(&kind),
            Intent::DeleteNode { id } => self.delete_node(&id),
            Intent::SelectNode { id } => self.select_node(&id),
            Intent::ClearSelection => {
                if self.selected.take().is_some() {
                    Outcome::quiet(Redraw::Full)
                } else {
                    Outcome::nothing()
                }
            }
            Intent::StartConnection { source } => self.start_connection(&source),
            Intent::CompleteConnection { target } => self.complete_connection(&target),
            Intent::CancelConnection => {
                if self.connection.cancel() {
                    Outcome::quiet(Redraw::Full)
                } else {
                    Outcome::nothing()
                }
            }
            Intent::RemoveEdge { id } => {
                match self.canvas_mut().is_some_and(|c| c.remove_edge(&id)) {
                    true => Outcome::quiet(Redraw::Full),
                    false => Outcome::nothing(),
                }
            }
            Intent::StartDrag {
                id,
                pointer,
                card_origin,
            } => {
                // A drag session is exclusive; a second pointer-down while
                // one is live is ignored.
                if self.drag.is_none() && self.canvas().is_some_and(|c| c.contains_node(&id)) {
                    self.drag = Some(DragSession::begin(id, pointer, card_origin));
                }
                Outcome::nothing()
            }
            Intent::DragMove {
                pointer,
                canvas_origin,
            } => {
                let Some(drag) = self.drag.clone() else {
                    return Outcome::nothing();
                };
                let zoom = self.zoom;
                let moved = self
                    .canvas_mut()
                    .is_some_and(|c| drag.update(c, pointer, canvas_origin, zoom));
                if moved {
                    Outcome::quiet(Redraw::EdgesOnly)
                } else {
                    Outcome::nothing()
                }
            }
            Intent::EndDrag => {
                if let Some(drag) = self.drag.take() {
                    debug!(node = drag.node_id(), "drag ended");
                }
                Outcome::nothing()
            }
            Intent::ZoomIn => self.set_zoom(self.zoom.zoom_in()),
            Intent::ZoomOut => self.set_zoom(self.zoom.zoom_out()),
            Intent::ZoomReset => self.set_zoom(self.zoom.reset()),
            Intent::ApplyInspectorEdit { label, config_text } => {
                self.apply_inspector_edit(&label, &config_text)
            }
            Intent::LoadDemo => self.load_demo(),
        }
    }

    fn add_node(&mut self, kind: &str) -> Outcome {
        if self.workflow.is_none() {
            return Outcome::nothing();
        }
        let label = self.catalog.display_name(kind).to_string();
        let config = self.catalog.default_config(kind);
        let index = self.canvas().map_or(0, |c| c.nodes.len());
        let position = self.viewport.place_new_node(index, self.zoom);
        let canvas = self.canvas_mut().expect("workflow checked above");
        let id = canvas.add_node(kind, &label, position, config).id.clone();
        self.selected = Some(id);
        Outcome::with_notice(Redraw::Full, Notice::info(format!("Node \"{label}\" added")))
    }

    fn delete_node(&mut self, id: &str) -> Outcome {
        let removed = self.canvas_mut().is_some_and(|c| c.remove_node(id));
        if !removed {
            return Outcome::nothing();
        }
        self.connection.forget_node(id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        Outcome::with_notice(Redraw::Full, Notice::info("Node deleted"))
    }

    fn select_node(&mut self, id: &str) -> Outcome {
        if !self.canvas().is_some_and(|c| c.contains_node(id)) {
            return Outcome::nothing();
        }
        self.selected = Some(id.to_string());
        Outcome::quiet(Redraw::Full)
    }

    fn start_connection(&mut self, source: &str) -> Outcome {
        if !self.canvas().is_some_and(|c| c.contains_node(source)) {
            return Outcome::nothing();
        }
        self.connection.start(source);
        Outcome::quiet(Redraw::Full)
    }

    fn complete_connection(&mut self, target: &str) -> Outcome {
        if !self.connection.is_connecting() {
            return Outcome::nothing();
        }
        let Some(source) = self.connection.complete(target) else {
            // Self-connection: the gesture cancels without an edge.
            return Outcome::quiet(Redraw::Full);
        };
        let created = self
            .canvas_mut()
            .is_some_and(|c| c.add_edge(&source, target).is_some());
        if created {
            Outcome::with_notice(Redraw::Full, Notice::ok("Connection created"))
        } else {
            Outcome::quiet(Redraw::Full)
        }
    }

    fn set_zoom(&mut self, zoom: Zoom) -> Outcome {
        if zoom == self.zoom {
            return Outcome::nothing();
        }
        self.zoom = zoom;
        Outcome::quiet(Redraw::EdgesOnly)
    }

    fn apply_inspector_edit(&mut self, label: &str, config_text: &str) -> Outcome {
        let Some(selected) = self.selected.clone() else {
            return Outcome::nothing();
        };
        let Some(node) = self.canvas_mut().and_then(|c| c.node_mut(&selected)) else {
            return Outcome::nothing();
        };
        match inspector::apply_edit(node, label, config_text) {
            Ok(()) => Outcome::quiet(Redraw::Full),
            Err(err) => Outcome::with_notice(Redraw::Nothing, Notice::danger(err.to_string())),
        }
    }

    fn load_demo(&mut self) -> Outcome {
        let Some(workflow) = self.workflow.as_mut() else {
            return Outcome::nothing();
        };
        workflow.canvas = demo::demo_canvas();
        let summary = format!(
            "Demo flow loaded - {} nodes, {} connections",
            workflow.canvas.nodes.len(),
            workflow.canvas.edges.len()
        );
        self.reset_interaction();
        Outcome::with_notice(Redraw::Full, Notice::ok(summary))
    }

    // --- Store boundary -------------------------------------------------
    //
    // Each call either succeeds and updates the session, or fails and
    // leaves the session exactly as it was. There is no optimistic update.

    /// Loads a workflow document and makes it the active one.
    pub fn open_from(&mut self, store: &mut dyn WorkflowStore, id: u64) -> Result<(), SyncError> {
        let document = store.load(id)?;
        self.open(document);
        Ok(())
    }

    /// Persists the open workflow. The in-memory graph is untouched either
    /// way.
    pub fn save_to(&self, store: &mut dyn WorkflowStore) -> Result<(), SyncError> {
        let workflow = self
            .workflow
            .as_ref()
            .ok_or_else(|| SyncError::Backend("no workflow is open".to_string()))?;
        store.save(
            workflow.id,
            &workflow.name,
            &workflow.description,
            &workflow.canvas,
        )
    }

    /// Saves and then runs the open workflow, so the executed version
    /// always matches the edited graph. The result is display-only.
    pub fn run_on(&self, store: &mut dyn WorkflowStore) -> Result<RunOutcome, SyncError> {
        self.save_to(store)?;
        let workflow = self.workflow.as_ref().expect("checked by save_to");
        store.run(workflow.id)
    }

    /// Deletes a workflow; if it was the active one, the session closes it.
    pub fn delete_in(&mut self, store: &mut dyn WorkflowStore, id: u64) -> Result<(), SyncError> {
        store.delete(id)?;
        if self.workflow.as_ref().is_some_and(|w| w.id == id) {
            self.close();
        }
        Ok(())
    }
}
