//! The toolkit-independent render pass.
//!
//! Rendering is three ordered passes:
//!
//! 1. [`layout`] maps each node to a [`NodeVisual`] from its logical
//!    position and the catalog styling.
//! 2. The embedding layer draws the visuals and *measures* the rendered
//!    port anchors, exposing them through an [`AnchorResolver`]. Port
//!    offsets depend on real card layout, so anchors are never derived
//!    from `x`/`y` arithmetic on the model.
//! 3. [`edge_paths`] computes a cubic curve per edge from the measured
//!    anchors.
//!
//! The ordering is load-bearing: computing curves before measuring leaves
//! edges desynced from card geometry. Headless callers (tests, the CLI) use
//! [`CardLayout`], which stands in for a real measurement pass with a fixed
//! card size.

use crate::catalog::NodeCatalog;
use crate::editor::EditorSession;
use crate::geometry::{EdgeCurve, Point, Zoom};
use crate::graph::{Canvas, Node};
use ahash::AHashMap;
use itertools::Itertools;
use tracing::debug;

/// Everything a renderer needs to draw one node card.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeVisual {
    pub id: String,
    /// Logical position; the canvas transform applies the zoom.
    pub position: Point,
    pub label: String,
    pub kind: String,
    pub kind_label: String,
    pub color: String,
    pub icon: String,
    pub selected: bool,
    /// Highlighted as the pending source of a connection gesture.
    pub connecting: bool,
}

impl NodeVisual {
    fn from_node(node: &Node, catalog: &NodeCatalog, selected: bool, connecting: bool) -> Self {
        Self {
            id: node.id.clone(),
            position: Point::new(node.x, node.y),
            label: node.label.clone(),
            kind: node.kind.clone(),
            kind_label: catalog.display_name(&node.kind).to_string(),
            color: catalog.color(&node.kind).to_string(),
            icon: catalog.icon(&node.kind).to_string(),
            selected,
            connecting,
        }
    }
}

/// Pass 1: node visuals in container order (container order is z-order).
pub fn layout(session: &EditorSession) -> Vec<NodeVisual> {
    let Some(canvas) = session.canvas() else {
        return Vec::new();
    };
    let connecting = session.connection().source();
    canvas
        .nodes
        .iter()
        .map(|node| {
            NodeVisual::from_node(
                node,
                session.catalog(),
                session.selected_node() == Some(node.id.as_str()),
                connecting == Some(node.id.as_str()),
            )
        })
        .collect()
}

/// Measured screen positions of one node's ports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortAnchors {
    pub input: Point,
    pub output: Point,
}

/// Pass 2 seam: maps a node id to the live screen anchors of its rendered
/// card. `None` means the node is not currently rendered (mid-deletion,
/// off-tree) and its edges are skipped for the frame.
pub trait AnchorResolver {
    fn anchors(&self, node_id: &str) -> Option<PortAnchors>;
}

/// Measured anchors collected by an embedding layer.
impl AnchorResolver for AHashMap<String, PortAnchors> {
    fn anchors(&self, node_id: &str) -> Option<PortAnchors> {
        self.get(node_id).copied()
    }
}

/// A headless stand-in for the measurement pass: fixed-size cards with
/// ports at the vertical midpoint of the left and right edges, scaled by
/// the zoom factor.
#[derive(Debug, Clone, Copy)]
pub struct CardMetrics {
    pub width: f64,
    pub height: f64,
}

impl Default for CardMetrics {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 60.0,
        }
    }
}

pub struct CardLayout<'a> {
    canvas: &'a Canvas,
    metrics: CardMetrics,
    zoom: Zoom,
}

impl<'a> CardLayout<'a> {
    pub fn new(canvas: &'a Canvas, metrics: CardMetrics, zoom: Zoom) -> Self {
        Self {
            canvas,
            metrics,
            zoom,
        }
    }
}

impl AnchorResolver for CardLayout<'_> {
    fn anchors(&self, node_id: &str) -> Option<PortAnchors> {
        let node = self.canvas.node(node_id)?;
        let mid_y = node.y + self.metrics.height / 2.0;
        Some(PortAnchors {
            input: self.zoom.to_screen(Point::new(node.x, mid_y)),
            output: self
                .zoom
                .to_screen(Point::new(node.x + self.metrics.width, mid_y)),
        })
    }
}

/// One renderable edge curve.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgePath {
    pub edge_id: String,
    pub source: String,
    pub target: String,
    pub curve: EdgeCurve,
}

/// Pass 3: a curve per edge, from the source output anchor to the target
/// input anchor. Runs after every structural change, drag tick and zoom
/// change, since all three move anchors.
pub fn edge_paths(canvas: &Canvas, resolver: &dyn AnchorResolver) -> Vec<EdgePath> {
    canvas
        .edges
        .iter()
        .filter_map(|edge| {
            let (src, tgt) = match (resolver.anchors(&edge.source), resolver.anchors(&edge.target))
            {
                (Some(src), Some(tgt)) => (src, tgt),
                _ => {
                    // Unmeasurable endpoint: skip for this frame. Reaching
                    // this for a node still in the set would mean a stale
                    // resolver, not a model defect.
                    debug!(edge = %edge.id, "edge endpoint not rendered, skipping");
                    return None;
                }
            };
            Some(EdgePath {
                edge_id: edge.id.clone(),
                source: edge.source.clone(),
                target: edge.target.clone(),
                curve: EdgeCurve::between(src.output, tgt.input),
            })
        })
        .collect()
}

/// Edge rows for the bottom panel: `source label → target label`, in edge
/// order, with unknown endpoints shown as `?`.
pub fn edge_summaries(canvas: &Canvas) -> Vec<(String, String)> {
    let labels: AHashMap<&str, &str> = canvas
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), n.label.as_str()))
        .collect();
    canvas
        .edges
        .iter()
        .map(|edge| {
            (
                edge.id.clone(),
                format!(
                    "{} \u{2192} {}",
                    labels.get(edge.source.as_str()).copied().unwrap_or("?"),
                    labels.get(edge.target.as_str()).copied().unwrap_or("?"),
                ),
            )
        })
        .collect()
}

/// `N nodes · M connections`, for the canvas footer.
pub fn node_counter(canvas: &Canvas) -> String {
    format!(
        "{} nodes \u{00B7} {} connections",
        canvas.nodes.len(),
        canvas.edges.len()
    )
}

/// Palette entries: `(kind, display label, color, icon)` sorted by label.
pub fn palette(catalog: &NodeCatalog) -> Vec<(String, String, String, String)> {
    catalog
        .entries()
        .into_iter()
        .map(|(kind, info)| {
            (
                kind.to_string(),
                info.display_name.clone(),
                info.color.clone(),
                info.icon.clone(),
            )
        })
        .collect_vec()
}
