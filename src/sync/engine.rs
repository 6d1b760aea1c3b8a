//! The reference run engine behind the store boundary.
//!
//! Execution semantics are an external collaborator as far as the editor is
//! concerned: the session hands a workflow id to the store and renders the
//! resulting step list read-only. This module is that collaborator for
//! in-process stores: a topological walk with canned per-kind messages.

use super::document::{RunOutcome, RunStatus, RunStep};
use crate::error::SyncError;
use crate::graph::{Canvas, Node};
use ahash::AHashMap;
use std::collections::VecDeque;

/// Kahn's algorithm over the canvas, in node container order. Fails when
/// the graph has a cycle.
pub fn topological_order(canvas: &Canvas) -> Result<Vec<String>, SyncError> {
    let mut indegree: AHashMap<&str, usize> = canvas
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), 0usize))
        .collect();
    let mut outgoing: AHashMap<&str, Vec<&str>> = AHashMap::new();

    for edge in &canvas.edges {
        outgoing
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
        if let Some(degree) = indegree.get_mut(edge.target.as_str()) {
            *degree += 1;
        }
    }

    let mut queue: VecDeque<&str> = canvas
        .nodes
        .iter()
        .filter(|n| indegree[n.id.as_str()] == 0)
        .map(|n| n.id.as_str())
        .collect();
    let mut order = Vec::with_capacity(canvas.nodes.len());

    while let Some(current) = queue.pop_front() {
        order.push(current.to_string());
        for &next in outgoing.get(current).into_iter().flatten() {
            if let Some(degree) = indegree.get_mut(next) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(next);
                }
            }
        }
    }

    if order.len() != canvas.nodes.len() {
        return Err(SyncError::CyclicGraph);
    }
    Ok(order)
}

fn config_str<'a>(node: &'a Node, key: &str, default: &'a str) -> &'a str {
    node.config
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or(default)
}

/// One canned step message per node kind.
fn step_message(node: &Node) -> String {
    match node.kind.as_str() {
        "trigger" => format!("Inicio del flujo '{}'.", node.label),
        "order_input" => format!(
            "Pedido registrado desde canal {}.",
            config_str(node, "channel", "web")
        ),
        "customer_check" => "Cliente verificado en CRM.".to_string(),
        "stock_check" => format!(
            "Stock validado en almacén {}.",
            config_str(node, "warehouse", "principal")
        ),
        "finance_approval" => "Aprobación financiera concedida para el pedido.".to_string(),
        "invoice" => "Factura generada y vinculada al pedido.".to_string(),
        "notify" => format!(
            "Cliente notificado por {}.",
            config_str(node, "channel", "email")
        ),
        "archive" => "Pedido archivado en el ERP documental.".to_string(),
        "ai_summary" => format!(
            "Resumen IA generado para dirección con tono {}.",
            config_str(node, "tone", "profesional")
        ),
        "conditional_check" => format!(
            "Condición evaluada: {}.",
            config_str(node, "condition", "true")
        ),
        "data_transform" => format!(
            "Datos transformados a formato {}.",
            config_str(node, "format", "JSON")
        ),
        _ => format!("Nodo ejecutado: {}.", node.label),
    }
}

/// Walks the canvas in topological order and produces one step per node.
pub fn run_canvas(canvas: &Canvas) -> Result<RunOutcome, SyncError> {
    let order = topological_order(canvas)?;
    let by_id: AHashMap<&str, &Node> = canvas.nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    let steps = order
        .iter()
        .enumerate()
        .map(|(index, node_id)| {
            let node = by_id[node_id.as_str()];
            RunStep {
                step: index + 1,
                node_id: node.id.clone(),
                node_label: node.label.clone(),
                node_kind: node.kind.clone(),
                status: RunStatus::Ok,
                message: step_message(node),
            }
        })
        .collect();

    Ok(RunOutcome {
        status: RunStatus::Ok,
        total_nodes: canvas.nodes.len(),
        total_edges: canvas.edges.len(),
        steps,
    })
}
