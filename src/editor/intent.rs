use crate::geometry::Point;

/// Every gesture the editor understands, funneled through
/// [`EditorSession::apply`](crate::editor::EditorSession::apply).
///
/// The embedding layer translates raw input events (clicks, pointer moves,
/// key presses) into these intents; all transition logic lives behind the
/// dispatch, where it can be exercised without a UI toolkit.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Place a new node of `kind` at the viewport center.
    AddNode { kind: String },
    DeleteNode { id: String },
    SelectNode { id: String },
    ClearSelection,
    /// Output-port activation on a node.
    StartConnection { source: String },
    /// Input-port activation on a node.
    CompleteConnection { target: String },
    /// Escape key or a click on empty canvas background.
    CancelConnection,
    RemoveEdge { id: String },
    /// Pointer-down on a node body. Both points are in screen space.
    StartDrag {
        id: String,
        pointer: Point,
        card_origin: Point,
    },
    /// Pointer-move while a drag session is live.
    DragMove { pointer: Point, canvas_origin: Point },
    /// Pointer-up anywhere in the document.
    EndDrag,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    /// Commit the inspector form into the selected node.
    ApplyInspectorEdit { label: String, config_text: String },
    /// Replace the canvas with the built-in demo flow.
    LoadDemo,
}

/// How much re-rendering an applied intent requires.
///
/// Drag ticks and zoom changes move anchor screen positions without
/// changing graph structure, so they only need the edge-curve pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    Full,
    EdgesOnly,
    Nothing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Ok,
    Danger,
}

/// A transient, user-visible report (rendered as a toast).
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Ok,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Danger,
            message: message.into(),
        }
    }
}

/// The result of dispatching one intent: what to re-render and what, if
/// anything, to report. Structural no-ops come back as
/// `Redraw::Nothing` with no notice.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub redraw: Redraw,
    pub notice: Option<Notice>,
}

impl Outcome {
    pub fn quiet(redraw: Redraw) -> Self {
        Self {
            redraw,
            notice: None,
        }
    }

    pub fn nothing() -> Self {
        Self::quiet(Redraw::Nothing)
    }

    pub fn with_notice(redraw: Redraw, notice: Notice) -> Self {
        Self {
            redraw,
            notice: Some(notice),
        }
    }
}
