//! Common test utilities for building editor sessions and canvases.
use nodeflow::prelude::*;

/// Opens a session over a blank workflow, without going through a store.
#[allow(dead_code)]
pub fn blank_session() -> EditorSession {
    let mut session = EditorSession::new(NodeCatalog::builtin());
    session.open(OpenWorkflow {
        id: 1,
        name: "Test flow".to_string(),
        description: String::new(),
        canvas: Canvas::new(),
    });
    session.set_viewport(Viewport::new(Point::new(0.0, 0.0), 1280.0, 800.0));
    session
}

/// A session holding two unconnected nodes, returning their ids.
#[allow(dead_code)]
pub fn session_with_two_nodes() -> (EditorSession, String, String) {
    let mut session = blank_session();
    session.apply(Intent::AddNode {
        kind: "trigger".to_string(),
    });
    session.apply(Intent::AddNode {
        kind: "notify".to_string(),
    });
    let canvas = session.canvas().expect("workflow open");
    let a = canvas.nodes[0].id.clone();
    let b = canvas.nodes[1].id.clone();
    (session, a, b)
}

/// Number of edges in the open canvas.
#[allow(dead_code)]
pub fn edge_count(session: &EditorSession) -> usize {
    session.canvas().map_or(0, |c| c.edges.len())
}

/// True when every edge endpoint resolves to a present node.
#[allow(dead_code)]
pub fn edges_are_consistent(canvas: &Canvas) -> bool {
    canvas
        .edges
        .iter()
        .all(|e| canvas.contains_node(&e.source) && canvas.contains_node(&e.target))
}
