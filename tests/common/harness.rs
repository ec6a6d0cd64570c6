//! Test harness for board editing.
//!
//! Wires a controller, Slint models and an event tracker together the way a
//! UI would, with helpers for simulating pointer gestures.

#![allow(dead_code)]

use super::CallbackTracker;
use chainboard::{
    Anchor, BoardController, BoardEvent, BoardModels, CanvasConfig, GestureOutcome, NodeId,
    NodeKind, NodeUpdate, Point,
};
use slint::SharedString;

/// Test harness for the board editor.
pub struct BoardHarness {
    pub ctrl: BoardController,
    pub models: BoardModels,
    pub tracker: CallbackTracker,
}

impl BoardHarness {
    /// Create a harness with an empty board and default config.
    pub fn new() -> Self {
        Self::with_config(CanvasConfig::default())
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        let ctrl = BoardController::with_config(config);
        let models = BoardModels::new();
        models.attach(&ctrl);

        let tracker = CallbackTracker::new();
        ctrl.subscribe({
            let tracker = tracker.clone();
            move |event: &BoardEvent| tracker.record(event)
        });

        Self { ctrl, models, tracker }
    }

    /// Add a node with the given kind and text at `at`.
    pub fn node(&self, kind: NodeKind, text: &str, at: (f32, f32)) -> NodeId {
        let id = self.ctrl.create_node(at.into(), None);
        self.ctrl.update_node(id, NodeUpdate::Kind(kind));
        self.ctrl.update_node(id, NodeUpdate::Text(text.to_string()));
        id
    }

    /// Add a node linked from `origin`.
    pub fn child(&self, origin: NodeId, kind: NodeKind, text: &str) -> NodeId {
        let id = self.ctrl.create_node(Point::default(), Some(origin));
        self.ctrl.update_node(id, NodeUpdate::Kind(kind));
        self.ctrl.update_node(id, NodeUpdate::Text(text.to_string()));
        id
    }

    /// Press on `id`, move the pointer through `path`, release over canvas.
    pub fn drag_node(&self, id: NodeId, path: &[(f32, f32)]) -> GestureOutcome {
        self.ctrl.begin_node_drag(id);
        for &p in path {
            self.ctrl.on_pointer_move(p.into());
        }
        self.ctrl.end_gesture(None)
    }

    /// Draw a connection out of `from`'s `anchor` and release at `release`,
    /// resolving the target by hit testing like a canvas would.
    pub fn connect_to_point(
        &self,
        from: NodeId,
        anchor: Anchor,
        release: (f32, f32),
    ) -> GestureOutcome {
        self.ctrl.begin_connection_drag(from, anchor);
        let release: Point = release.into();
        self.ctrl.on_pointer_move(release);
        let target = self.ctrl.node_at(release);
        self.ctrl.end_gesture(target)
    }

    /// Draw a connection and release directly over `target`.
    pub fn connect(&self, from: NodeId, target: NodeId) -> GestureOutcome {
        self.ctrl.begin_connection_drag(from, Anchor::Right);
        self.ctrl.end_gesture(Some(target))
    }

    pub fn node_count(&self) -> usize {
        self.ctrl.with_board(|b| b.node_count())
    }

    pub fn edge_count(&self) -> usize {
        self.ctrl.with_board(|b| b.edge_count())
    }

    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.ctrl.with_board(|b| b.node(id).map(|n| n.position))
    }

    pub fn slide_titles(&self) -> Vec<String> {
        self.ctrl
            .present()
            .slides()
            .iter()
            .map(|s| s.title.clone())
            .collect()
    }

    pub fn id_string(id: NodeId) -> SharedString {
        id.to_string().into()
    }
}
