//! Built-in canvases: the seed workflow the store starts with and the
//! spider-web demo flow the editor can load over an open workflow.

use crate::graph::{Canvas, Edge, Node};
use serde_json::{Value, json};

fn node(id: &str, kind: &str, label: &str, x: f64, y: f64, config: Value) -> Node {
    Node {
        id: id.to_string(),
        kind: kind.to_string(),
        label: label.to_string(),
        x,
        y,
        config,
    }
}

fn edge(id: &str, source: &str, target: &str) -> Edge {
    Edge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
    }
}

/// The four-node order pipeline every fresh store is seeded with.
pub fn seed_canvas() -> Canvas {
    Canvas {
        nodes: vec![
            node("n-trigger", "trigger", "Inicio flujo", 120.0, 170.0, json!({})),
            node(
                "n-order",
                "order_input",
                "Recepción pedido",
                360.0,
                170.0,
                json!({"channel": "email"}),
            ),
            node(
                "n-stock",
                "stock_check",
                "Validación stock",
                600.0,
                170.0,
                json!({"warehouse": "MAD-01"}),
            ),
            node(
                "n-notify",
                "notify",
                "Notificar cliente",
                840.0,
                170.0,
                json!({"channel": "whatsapp"}),
            ),
        ],
        edges: vec![
            edge("e-1", "n-trigger", "n-order"),
            edge("e-2", "n-order", "n-stock"),
            edge("e-3", "n-stock", "n-notify"),
        ],
    }
}

/// The fixed demo flow: eleven nodes across five columns, fourteen edges
/// fanning out and back in.
pub fn demo_canvas() -> Canvas {
    Canvas {
        nodes: vec![
            node("n-trigger", "trigger", "Webhook Inicio", 120.0, 300.0, json!({})),
            node(
                "n-order",
                "order_input",
                "Captura pedido",
                380.0,
                180.0,
                json!({"channel": "web"}),
            ),
            node(
                "n-customer",
                "customer_check",
                "Validar cliente CRM",
                380.0,
                420.0,
                json!({}),
            ),
            node(
                "n-stock",
                "stock_check",
                "Consultar stock",
                640.0,
                100.0,
                json!({"warehouse": "MAD-01"}),
            ),
            node(
                "n-condition",
                "conditional_check",
                "Stock suficiente?",
                640.0,
                300.0,
                json!({"condition": "stock > 0"}),
            ),
            node(
                "n-finance",
                "finance_approval",
                "Aprobacion financiera",
                640.0,
                500.0,
                json!({}),
            ),
            node("n-invoice", "invoice", "Generar factura", 900.0, 200.0, json!({})),
            node(
                "n-ai",
                "ai_summary",
                "Resumen IA direccion",
                900.0,
                420.0,
                json!({"tone": "ejecutivo"}),
            ),
            node(
                "n-transform",
                "data_transform",
                "Exportar JSON/XML",
                1160.0,
                300.0,
                json!({"format": "JSON"}),
            ),
            node(
                "n-notify",
                "notify",
                "Notificar cliente",
                1420.0,
                200.0,
                json!({"channel": "whatsapp"}),
            ),
            node("n-archive", "archive", "Archivar en ERP", 1420.0, 420.0, json!({})),
        ],
        edges: vec![
            edge("e-1", "n-trigger", "n-order"),
            edge("e-2", "n-trigger", "n-customer"),
            edge("e-3", "n-order", "n-stock"),
            edge("e-4", "n-order", "n-condition"),
            edge("e-5", "n-customer", "n-condition"),
            edge("e-6", "n-customer", "n-finance"),
            edge("e-7", "n-stock", "n-invoice"),
            edge("e-8", "n-condition", "n-invoice"),
            edge("e-9", "n-condition", "n-ai"),
            edge("e-10", "n-finance", "n-ai"),
            edge("e-11", "n-invoice", "n-transform"),
            edge("e-12", "n-ai", "n-transform"),
            edge("e-13", "n-transform", "n-notify"),
            edge("e-14", "n-transform", "n-archive"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_counts_are_fixed() {
        let canvas = demo_canvas();
        assert_eq!(canvas.nodes.len(), 11);
        assert_eq!(canvas.edges.len(), 14);
    }

    #[test]
    fn demo_edges_all_resolve() {
        let canvas = demo_canvas();
        for edge in &canvas.edges {
            assert!(canvas.contains_node(&edge.source), "missing {}", edge.source);
            assert!(canvas.contains_node(&edge.target), "missing {}", edge.target);
        }
    }

    #[test]
    fn seed_is_a_linear_pipeline() {
        let canvas = seed_canvas();
        assert_eq!(canvas.nodes.len(), 4);
        assert_eq!(canvas.edges.len(), 3);
    }
}
