use crate::geometry::{Point, Zoom};
use crate::graph::Canvas;
use tracing::debug;

/// An exclusive pointer-drag session over one node.
///
/// Started on pointer-down on a node's body (the embedding layer filters
/// out ports and buttons). The session captures the offset between the
/// pointer and the card's visual top-left; every move rewrites the node's
/// logical position from the live pointer, so a node never jumps under the
/// cursor. Dragging only touches geometry: edges are recomputed by the
/// caller, nothing else re-renders.
#[derive(Debug, Clone)]
pub struct DragSession {
    node_id: String,
    grab_offset: Point,
}

impl DragSession {
    /// `pointer` and `card_origin` are both in screen space.
    pub fn begin(node_id: impl Into<String>, pointer: Point, card_origin: Point) -> Self {
        let node_id = node_id.into();
        debug!(node = %node_id, "drag started");
        Self {
            grab_offset: pointer - card_origin,
            node_id,
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Applies one pointer-move tick. The new logical position is
    /// `(pointer - grab_offset - canvas_origin) / zoom`, clamped to the
    /// canvas margin. Returns whether the stored position changed, so the
    /// caller can skip the edge pass on idle moves.
    pub fn update(
        &self,
        canvas: &mut Canvas,
        pointer: Point,
        canvas_origin: Point,
        zoom: Zoom,
    ) -> bool {
        let Some(node) = canvas.node_mut(&self.node_id) else {
            return false;
        };
        let logical = zoom
            .to_logical(pointer - self.grab_offset - canvas_origin)
            .clamped();
        if node.x == logical.x && node.y == logical.y {
            return false;
        }
        node.x = logical.x;
        node.y = logical.y;
        true
    }
}
