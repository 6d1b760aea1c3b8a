use tracing::debug;

/// The two-click connection gesture.
///
/// Activating an output port moves to `Connecting` (or re-targets the
/// source if a gesture is already pending). Activating an input port either
/// cancels (same node) or hands the pair to the graph model; the state
/// returns to `Idle` regardless of whether an edge was actually created.
/// The state is global to the editor: only one gesture is live at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConnectionState {
    #[default]
    Idle,
    Connecting {
        source: String,
    },
}

impl ConnectionState {
    pub fn is_connecting(&self) -> bool {
        matches!(self, ConnectionState::Connecting { .. })
    }

    /// The pending source node, if a gesture is live.
    pub fn source(&self) -> Option<&str> {
        match self {
            ConnectionState::Connecting { source } => Some(source),
            ConnectionState::Idle => None,
        }
    }

    /// Output-port activation: starts a gesture, or re-targets the source
    /// of the pending one.
    pub fn start(&mut self, source: impl Into<String>) {
        let source = source.into();
        debug!(%source, "connection gesture started");
        *self = ConnectionState::Connecting { source };
    }

    /// Explicit cancel (escape, or a click on empty canvas background).
    /// Returns whether a gesture was actually pending.
    pub fn cancel(&mut self) -> bool {
        let was_connecting = self.is_connecting();
        if was_connecting {
            debug!("connection gesture cancelled");
        }
        *self = ConnectionState::Idle;
        was_connecting
    }

    /// Input-port activation: consumes the gesture and yields the source id
    /// to connect from, unless the target is the source itself (self-loop,
    /// treated as a cancel) or no gesture is pending.
    pub fn complete(&mut self, target: &str) -> Option<String> {
        match std::mem::take(self) {
            ConnectionState::Idle => None,
            ConnectionState::Connecting { source } if source == target => {
                debug!(%source, "self-connection rejected, gesture cancelled");
                None
            }
            ConnectionState::Connecting { source } => Some(source),
        }
    }

    /// Cascade hook: deleting the pending source drops the gesture.
    pub fn forget_node(&mut self, node_id: &str) {
        if self.source() == Some(node_id) {
            *self = ConnectionState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restart_retargets_the_source() {
        let mut state = ConnectionState::default();
        state.start("n-a");
        state.start("n-b");
        assert_eq!(state.source(), Some("n-b"));
    }

    #[test]
    fn completing_on_source_cancels() {
        let mut state = ConnectionState::default();
        state.start("n-a");
        assert_eq!(state.complete("n-a"), None);
        assert_eq!(state, ConnectionState::Idle);
    }

    #[test]
    fn completing_while_idle_is_a_noop() {
        let mut state = ConnectionState::default();
        assert_eq!(state.complete("n-b"), None);
    }

    #[test]
    fn forget_node_only_drops_the_matching_source() {
        let mut state = ConnectionState::default();
        state.start("n-a");
        state.forget_node("n-b");
        assert!(state.is_connecting());
        state.forget_node("n-a");
        assert_eq!(state, ConnectionState::Idle);
    }
}
