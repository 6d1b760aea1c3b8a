//! Editor session scenarios: the connection gesture, selection and
//! inspector sync, drag geometry and zoom behavior.
mod common;
use common::*;
use nodeflow::prelude::*;
use serde_json::json;

#[test]
fn connect_then_cancel_leaves_no_edge() {
    let (mut session, a, _) = session_with_two_nodes();

    session.apply(Intent::StartConnection { source: a });
    assert!(session.connection().is_connecting());

    // Click on empty canvas background.
    session.apply(Intent::CancelConnection);
    assert_eq!(*session.connection(), ConnectionState::Idle);
    assert_eq!(edge_count(&session), 0);
}

#[test]
fn connect_success_creates_exactly_one_edge() {
    let (mut session, a, b) = session_with_two_nodes();

    session.apply(Intent::StartConnection { source: a.clone() });
    let outcome = session.apply(Intent::CompleteConnection { target: b.clone() });

    assert_eq!(*session.connection(), ConnectionState::Idle);
    assert_eq!(edge_count(&session), 1);
    let edge = &session.canvas().unwrap().edges[0];
    assert_eq!((edge.source.as_str(), edge.target.as_str()), (a.as_str(), b.as_str()));
    assert_eq!(outcome.redraw, Redraw::Full);
}

#[test]
fn starting_again_retargets_the_source() {
    let (mut session, a, b) = session_with_two_nodes();

    session.apply(Intent::StartConnection { source: a });
    session.apply(Intent::StartConnection { source: b.clone() });

    assert_eq!(session.connection().source(), Some(b.as_str()));
    assert_eq!(edge_count(&session), 0);
}

#[test]
fn completing_on_the_source_cancels_without_an_edge() {
    let (mut session, a, _) = session_with_two_nodes();

    session.apply(Intent::StartConnection { source: a.clone() });
    session.apply(Intent::CompleteConnection { target: a });

    assert_eq!(*session.connection(), ConnectionState::Idle);
    assert_eq!(edge_count(&session), 0);
}

#[test]
fn duplicate_gesture_is_silently_absorbed() {
    let (mut session, a, b) = session_with_two_nodes();

    for _ in 0..2 {
        session.apply(Intent::StartConnection { source: a.clone() });
        session.apply(Intent::CompleteConnection { target: b.clone() });
    }
    assert_eq!(edge_count(&session), 1);
}

#[test]
fn deleting_the_pending_source_returns_to_idle() {
    let (mut session, a, _) = session_with_two_nodes();

    session.apply(Intent::StartConnection { source: a.clone() });
    session.apply(Intent::DeleteNode { id: a });

    assert_eq!(*session.connection(), ConnectionState::Idle);
}

#[test]
fn deleting_the_selected_node_clears_the_inspector() {
    let (mut session, a, _) = session_with_two_nodes();

    session.apply(Intent::SelectNode { id: a.clone() });
    assert!(session.inspector().is_some());

    session.apply(Intent::DeleteNode { id: a });
    assert!(session.selected_node().is_none());
    assert!(session.inspector().is_none());
}

#[test]
fn deleting_a_node_cascades_its_edges() {
    let (mut session, a, b) = session_with_two_nodes();
    session.apply(Intent::StartConnection { source: a.clone() });
    session.apply(Intent::CompleteConnection { target: b });

    session.apply(Intent::DeleteNode { id: a });
    assert_eq!(edge_count(&session), 0);
    assert!(edges_are_consistent(session.canvas().unwrap()));
}

#[test]
fn failed_config_edit_leaves_the_node_untouched() {
    let (mut session, a, _) = session_with_two_nodes();
    session.apply(Intent::SelectNode { id: a.clone() });

    let before = session.canvas().unwrap().node(&a).unwrap().clone();
    let outcome = session.apply(Intent::ApplyInspectorEdit {
        label: "Renamed".to_string(),
        config_text: "{broken".to_string(),
    });

    assert_eq!(outcome.redraw, Redraw::Nothing);
    assert_eq!(outcome.notice.unwrap().level, NoticeLevel::Danger);
    assert_eq!(session.canvas().unwrap().node(&a).unwrap(), &before);
}

#[test]
fn successful_edit_updates_label_and_config() {
    let (mut session, a, _) = session_with_two_nodes();
    session.apply(Intent::SelectNode { id: a.clone() });

    session.apply(Intent::ApplyInspectorEdit {
        label: "Entry point".to_string(),
        config_text: r#"{"retries": 3}"#.to_string(),
    });

    let node = session.canvas().unwrap().node(&a).unwrap();
    assert_eq!(node.label, "Entry point");
    assert_eq!(node.config, json!({"retries": 3}));
}

#[test]
fn add_node_selects_it_and_applies_catalog_defaults() {
    let mut session = blank_session();
    session.apply(Intent::AddNode {
        kind: "stock_check".to_string(),
    });

    let canvas = session.canvas().unwrap();
    let node = &canvas.nodes[0];
    assert_eq!(session.selected_node(), Some(node.id.as_str()));
    assert_eq!(node.label, "Validación stock");
    assert_eq!(node.config, json!({"warehouse": "MAD-01"}));
    assert!(node.x >= MARGIN && node.y >= MARGIN);
}

#[test]
fn drag_updates_geometry_only() {
    let (mut session, a, b) = session_with_two_nodes();
    session.apply(Intent::StartConnection { source: a.clone() });
    session.apply(Intent::CompleteConnection { target: b });
    let edges_before = edge_count(&session);

    // Drag the node to logical (100, 100) first: with a zero grab offset
    // and canvas origin, the stored position follows the pointer exactly.
    session.apply(Intent::StartDrag {
        id: a.clone(),
        pointer: Point::new(0.0, 0.0),
        card_origin: Point::new(0.0, 0.0),
    });
    session.apply(Intent::DragMove {
        pointer: Point::new(100.0, 100.0),
        canvas_origin: Point::default(),
    });
    session.apply(Intent::EndDrag);
    assert_eq!(session.canvas().unwrap().node(&a).unwrap().x, 100.0);

    // A 50px horizontal screen drag at zoom 1.0 moves x by exactly 50.
    session.apply(Intent::StartDrag {
        id: a.clone(),
        pointer: Point::new(100.0, 100.0),
        card_origin: Point::new(100.0, 100.0),
    });
    let outcome = session.apply(Intent::DragMove {
        pointer: Point::new(150.0, 100.0),
        canvas_origin: Point::default(),
    });
    session.apply(Intent::EndDrag);

    assert_eq!(outcome.redraw, Redraw::EdgesOnly);
    let node = session.canvas().unwrap().node(&a).unwrap();
    assert_eq!(node.x, 150.0);
    assert_eq!(node.y, 100.0);
    assert_eq!(edge_count(&session), edges_before);
}

#[test]
fn zoom_never_alters_stored_coordinates() {
    let (mut session, _a, _b) = session_with_two_nodes();
    let before: Vec<(f64, f64)> = session
        .canvas()
        .unwrap()
        .nodes
        .iter()
        .map(|n| (n.x, n.y))
        .collect();

    session.apply(Intent::ZoomIn);
    session.apply(Intent::ZoomIn);
    session.apply(Intent::ZoomOut);
    session.apply(Intent::ZoomReset);
    for _ in 0..20 {
        session.apply(Intent::ZoomOut);
    }

    let after: Vec<(f64, f64)> = session
        .canvas()
        .unwrap()
        .nodes
        .iter()
        .map(|n| (n.x, n.y))
        .collect();
    assert_eq!(before, after);
    assert_eq!(session.zoom().factor(), Zoom::MIN);
}

#[test]
fn intents_without_an_open_workflow_are_inert() {
    let mut session = EditorSession::new(NodeCatalog::builtin());
    let outcome = session.apply(Intent::AddNode {
        kind: "trigger".to_string(),
    });
    assert_eq!(outcome, Outcome::nothing());
    assert!(session.canvas().is_none());
}

#[test]
fn opening_a_workflow_resets_interaction_state() {
    let (mut session, a, _) = session_with_two_nodes();
    session.apply(Intent::SelectNode { id: a.clone() });
    session.apply(Intent::StartConnection { source: a });

    session.open(OpenWorkflow {
        id: 2,
        name: "Other".to_string(),
        description: String::new(),
        canvas: Canvas::new(),
    });

    assert!(session.selected_node().is_none());
    assert_eq!(*session.connection(), ConnectionState::Idle);
}

#[test]
fn demo_loader_resets_selection_and_gesture() {
    let (mut session, a, _) = session_with_two_nodes();
    session.apply(Intent::SelectNode { id: a.clone() });
    session.apply(Intent::StartConnection { source: a });

    let outcome = session.apply(Intent::LoadDemo);

    assert!(session.selected_node().is_none());
    assert_eq!(*session.connection(), ConnectionState::Idle);
    let canvas = session.canvas().unwrap();
    assert_eq!(canvas.nodes.len(), 11);
    assert_eq!(canvas.edges.len(), 14);
    assert!(outcome.notice.unwrap().message.contains("11 nodes"));
}

#[test]
fn completing_on_an_absent_target_creates_no_edge() {
    let (mut session, source, _) = session_with_two_nodes();
    session.apply(Intent::StartConnection { source });
    session.apply(Intent::CompleteConnection {
        target: "n-ghost".to_string(),
    });
    assert_eq!(edge_count(&session), 0);
    assert_eq!(*session.connection(), ConnectionState::Idle);
    assert!(edges_are_consistent(session.canvas().unwrap()));
}
