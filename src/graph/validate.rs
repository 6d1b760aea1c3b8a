use super::model::{Canvas, Edge, Node};
use crate::catalog::NodeCatalog;
use crate::error::CanvasError;
use crate::geometry::Point;
use ahash::AHashSet;

/// Normalizes a canvas before it crosses the store boundary.
///
/// Ids and labels are trimmed; a blank label is replaced with the kind's
/// display name. Blank or duplicate node ids, kinds missing from the
/// catalog, non-finite coordinates and dangling edge endpoints are rejected.
/// Duplicate `(source, target)` pairs are dropped rather than rejected, and
/// edges without an id get a positional one, both matching the editor's own
/// idempotent treatment of those shapes.
pub fn validate_canvas(canvas: &Canvas, catalog: &NodeCatalog) -> Result<Canvas, CanvasError> {
    let mut nodes = Vec::with_capacity(canvas.nodes.len());
    let mut seen_ids: AHashSet<String> = AHashSet::new();

    for (index, node) in canvas.nodes.iter().enumerate() {
        let id = node.id.trim().to_string();
        if id.is_empty() {
            return Err(CanvasError::MissingNodeId { index });
        }
        let kind = node.kind.trim().to_string();
        if kind.is_empty() {
            return Err(CanvasError::MissingNodeKind { node_id: id });
        }
        if !catalog.contains(&kind) {
            return Err(CanvasError::UnknownKind { node_id: id, kind });
        }
        if !node.x.is_finite() || !node.y.is_finite() {
            return Err(CanvasError::InvalidPosition {
                node_id: id,
                x: node.x,
                y: node.y,
            });
        }
        if !seen_ids.insert(id.clone()) {
            return Err(CanvasError::DuplicateNodeId { node_id: id });
        }

        let label = node.label.trim();
        let label = if label.is_empty() {
            catalog.display_name(&kind).to_string()
        } else {
            label.to_string()
        };
        let position = Point::new(node.x, node.y).clamped();
        let config = if node.config.is_object() {
            node.config.clone()
        } else {
            serde_json::json!({})
        };
        nodes.push(Node {
            id,
            kind,
            label,
            x: position.x,
            y: position.y,
            config,
        });
    }

    let mut edges = Vec::with_capacity(canvas.edges.len());
    let mut seen_pairs: AHashSet<(String, String)> = AHashSet::new();

    for edge in &canvas.edges {
        let source = edge.source.trim().to_string();
        let target = edge.target.trim().to_string();
        let id = edge.id.trim().to_string();
        let id = if id.is_empty() {
            format!("e-{}", edges.len() + 1)
        } else {
            id
        };
        if source.is_empty() || target.is_empty() {
            return Err(CanvasError::IncompleteEdge { edge_id: id });
        }
        for endpoint in [&source, &target] {
            if !seen_ids.contains(endpoint) {
                return Err(CanvasError::DanglingEdge {
                    edge_id: id.clone(),
                    node_id: endpoint.clone(),
                });
            }
        }
        if !seen_pairs.insert((source.clone(), target.clone())) {
            continue;
        }
        edges.push(Edge { id, source, target });
    }

    Ok(Canvas { nodes, edges })
}

/// Parses and normalizes a canvas from raw JSON text.
pub fn canvas_from_json(text: &str, catalog: &NodeCatalog) -> Result<Canvas, CanvasError> {
    let canvas: Canvas =
        serde_json::from_str(text).map_err(|e| CanvasError::JsonParseError(e.to_string()))?;
    validate_canvas(&canvas, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(id: &str, kind: &str) -> Node {
        Node {
            id: id.to_string(),
            kind: kind.to_string(),
            label: String::new(),
            x: 100.0,
            y: 100.0,
            config: json!({}),
        }
    }

    #[test]
    fn blank_label_defaults_from_catalog() {
        let canvas = Canvas {
            nodes: vec![node("n-1", "trigger")],
            edges: vec![],
        };
        let clean = validate_canvas(&canvas, &NodeCatalog::builtin()).expect("valid");
        assert_eq!(clean.nodes[0].label, "Inicio");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let canvas = Canvas {
            nodes: vec![node("n-1", "mystery")],
            edges: vec![],
        };
        let err = validate_canvas(&canvas, &NodeCatalog::builtin()).unwrap_err();
        assert!(matches!(err, CanvasError::UnknownKind { .. }));
    }

    #[test]
    fn dangling_edge_is_rejected() {
        let canvas = Canvas {
            nodes: vec![node("n-1", "trigger")],
            edges: vec![Edge {
                id: "e-1".into(),
                source: "n-1".into(),
                target: "n-ghost".into(),
            }],
        };
        let err = validate_canvas(&canvas, &NodeCatalog::builtin()).unwrap_err();
        assert!(matches!(err, CanvasError::DanglingEdge { .. }));
    }

    #[test]
    fn duplicate_pairs_are_dropped_not_rejected() {
        let canvas = Canvas {
            nodes: vec![node("n-1", "trigger"), node("n-2", "notify")],
            edges: vec![
                Edge {
                    id: "e-1".into(),
                    source: "n-1".into(),
                    target: "n-2".into(),
                },
                Edge {
                    id: "e-2".into(),
                    source: "n-1".into(),
                    target: "n-2".into(),
                },
            ],
        };
        let clean = validate_canvas(&canvas, &NodeCatalog::builtin()).expect("valid");
        assert_eq!(clean.edges.len(), 1);
    }
}
