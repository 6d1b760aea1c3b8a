//! Graph model invariants: cascade deletes, edge dedup, self-loop
//! rejection, across longer operation sequences.
mod common;
use common::*;
use nodeflow::prelude::*;
use serde_json::json;

fn add(canvas: &mut Canvas, kind: &str, x: f64) -> String {
    canvas
        .add_node(kind, kind, Point::new(x, 100.0), json!({}))
        .id
        .clone()
}

#[test]
fn cascade_invariant_holds_across_mixed_sequences() {
    let mut canvas = Canvas::new();
    let mut ids: Vec<String> = (0..8)
        .map(|i| add(&mut canvas, "trigger", 100.0 + i as f64 * 50.0))
        .collect();

    // A scripted interleaving of adds, connects and deletes; the edge set
    // must never reference a missing node at any point.
    let mut step = 0usize;
    for round in 0..40 {
        step = step.wrapping_mul(31).wrapping_add(round + 7) % 97;
        match step % 5 {
            0 => {
                ids.push(add(&mut canvas, "notify", 100.0 + step as f64));
            }
            1 | 2 => {
                let a = &ids[step % ids.len()];
                let b = &ids[(step / 3 + 1) % ids.len()];
                canvas.add_edge(a, b);
            }
            3 => {
                let victim = ids[step % ids.len()].clone();
                canvas.remove_node(&victim);
                ids.retain(|id| *id != victim);
            }
            _ => {
                if let Some(edge) = canvas.edges.first() {
                    let id = edge.id.clone();
                    canvas.remove_edge(&id);
                }
            }
        }
        assert!(edges_are_consistent(&canvas), "after round {}", round);
    }
}

#[test]
fn add_edge_is_idempotent_per_ordered_pair() {
    let mut canvas = Canvas::new();
    let a = add(&mut canvas, "trigger", 100.0);
    let b = add(&mut canvas, "notify", 400.0);

    assert!(canvas.add_edge(&a, &b).is_some());
    assert!(canvas.add_edge(&a, &b).is_none());
    let matching = canvas
        .edges
        .iter()
        .filter(|e| e.source == a && e.target == b)
        .count();
    assert_eq!(matching, 1);
}

#[test]
fn self_connection_never_creates_an_edge() {
    let mut canvas = Canvas::new();
    let a = add(&mut canvas, "trigger", 100.0);
    for _ in 0..3 {
        assert!(canvas.add_edge(&a, &a).is_none());
    }
    assert!(canvas.edges.is_empty());
}

#[test]
fn removal_of_absent_ids_is_a_silent_noop() {
    let mut canvas = Canvas::new();
    assert!(!canvas.remove_node("n-ghost"));
    assert!(!canvas.remove_edge("e-ghost"));
}

#[test]
fn canvas_round_trips_through_wire_json() {
    let canvas = nodeflow::demo::demo_canvas();
    let text = serde_json::to_string(&canvas).expect("serialize");
    let parsed =
        canvas_from_json(&text, &NodeCatalog::builtin()).expect("demo canvas is always valid");
    assert_eq!(parsed.nodes.len(), canvas.nodes.len());
    assert_eq!(parsed.edges.len(), canvas.edges.len());
}
