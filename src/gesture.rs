//! The pointer gesture state machine.
//!
//! At most one gesture is active at a time. A gesture starts with a
//! pointer-down on a node body (move) or on one of its anchors (connect), and
//! ends with the next pointer-up. Nothing is committed to the board until the
//! pointer-up, so a gesture can be dropped at any point without cleanup.

use crate::board::NodeId;
use crate::geometry::Anchor;

/// The gesture currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// A node follows the pointer.
    DraggingNode { node: NodeId },
    /// A connection is being drawn out of `from`'s `anchor`.
    DraggingConnection { from: NodeId, anchor: Anchor },
}

/// What a finished gesture asks the board to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Nothing to apply.
    Nothing,
    /// A node drag ended; its position was already applied while moving.
    Release { node: NodeId },
    /// Connect two existing nodes.
    Connect { from: NodeId, to: NodeId },
    /// Released over empty canvas: spawn a node linked from `origin`.
    Spawn { origin: NodeId },
    /// Released over the source node itself.
    RejectSelf { node: NodeId },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    /// Node being moved, if any.
    pub fn dragged_node(&self) -> Option<NodeId> {
        match *self {
            Gesture::DraggingNode { node } => Some(node),
            _ => None,
        }
    }

    /// Source of the connection being drawn, if any.
    pub fn connection_source(&self) -> Option<(NodeId, Anchor)> {
        match *self {
            Gesture::DraggingConnection { from, anchor } => Some((from, anchor)),
            _ => None,
        }
    }

    /// Start moving `node`. Ignored unless idle.
    pub fn begin_node_drag(&mut self, node: NodeId) -> bool {
        self.begin(Gesture::DraggingNode { node })
    }

    /// Start drawing a connection from `from`. Ignored unless idle.
    pub fn begin_connection(&mut self, from: NodeId, anchor: Anchor) -> bool {
        self.begin(Gesture::DraggingConnection { from, anchor })
    }

    fn begin(&mut self, next: Gesture) -> bool {
        if !self.is_idle() {
            tracing::trace!(current = ?self, ignored = ?next, "gesture already active");
            return false;
        }
        tracing::debug!(gesture = ?next, "gesture started");
        *self = next;
        true
    }

    /// End the gesture on pointer-up over `target` (`None` for empty canvas)
    /// and return what should be committed. Always leaves the machine idle.
    pub fn finish(&mut self, target: Option<NodeId>) -> Commit {
        let commit = match std::mem::take(self) {
            Gesture::Idle => Commit::Nothing,
            Gesture::DraggingNode { node } => Commit::Release { node },
            Gesture::DraggingConnection { from, .. } => match target {
                Some(to) if to == from => Commit::RejectSelf { node: from },
                Some(to) => Commit::Connect { from, to },
                None => Commit::Spawn { origin: from },
            },
        };
        tracing::debug!(?commit, "gesture finished");
        commit
    }

    /// Drop the active gesture without committing anything.
    pub fn abandon(&mut self) {
        if !self.is_idle() {
            tracing::debug!(gesture = ?self, "gesture abandoned");
        }
        *self = Gesture::Idle;
    }
}
