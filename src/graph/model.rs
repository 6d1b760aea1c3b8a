use crate::geometry::Point;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

/// A placed, typed unit in the graph.
///
/// `x`/`y` are logical canvas units, invariant under zoom. `config` is an
/// open JSON object; the editor enforces nothing about its shape beyond
/// "must parse".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    #[serde(default = "empty_config")]
    pub config: Value,
}

fn empty_config() -> Value {
    json!({})
}

/// A directed connection from one node's output port to another's input port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// The node and edge sets of one open workflow.
///
/// Container order matters only for rendering: node order is the visual
/// z-order. Edges carry no order dependency.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Canvas {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Generates an id of the form `<prefix>-xxxxxx` with six base36 characters.
fn random_id(prefix: char) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::rng();
    let suffix: String = (0..6)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{}-{}", prefix, suffix)
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn edge_between(&self, source: &str, target: &str) -> Option<&Edge> {
        self.edges
            .iter()
            .find(|e| e.source == source && e.target == target)
    }

    /// Appends a node with a freshly generated id at `position`.
    pub fn add_node(
        &mut self,
        kind: impl Into<String>,
        label: impl Into<String>,
        position: Point,
        config: Value,
    ) -> &Node {
        let mut id = random_id('n');
        while self.contains_node(&id) {
            id = random_id('n');
        }
        let node = Node {
            id,
            kind: kind.into(),
            label: label.into(),
            x: position.x,
            y: position.y,
            config,
        };
        debug!(node = %node.id, kind = %node.kind, "node added");
        self.nodes.push(node);
        self.nodes.last().expect("node just pushed")
    }

    /// Removes a node and every edge touching it, atomically. Returns
    /// `false` (no-op, not an error) when the id is absent.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return false;
        }
        let edges_before = self.edges.len();
        self.edges.retain(|e| e.source != id && e.target != id);
        debug!(
            node = %id,
            cascaded_edges = edges_before - self.edges.len(),
            "node removed"
        );
        true
    }

    /// Creates an edge between two nodes. Self-loops, duplicate ordered
    /// pairs and absent endpoints are silently absorbed (`None`); all are
    /// expected idempotent outcomes of user gestures, not failures.
    pub fn add_edge(&mut self, source: &str, target: &str) -> Option<&Edge> {
        if source == target {
            return None;
        }
        if !self.contains_node(source) || !self.contains_node(target) {
            debug!(%source, %target, "edge endpoint missing, ignored");
            return None;
        }
        if self.edge_between(source, target).is_some() {
            debug!(%source, %target, "duplicate edge suppressed");
            return None;
        }
        let mut id = random_id('e');
        while self.edge(&id).is_some() {
            id = random_id('e');
        }
        debug!(edge = %id, %source, %target, "edge added");
        self.edges.push(Edge {
            id,
            source: source.to_string(),
            target: target.to_string(),
        });
        self.edges.last()
    }

    /// Removes an edge by id; no-op if absent.
    pub fn remove_edge(&mut self, id: &str) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != id);
        self.edges.len() != before
    }
}
