//! High-level controller for board editing.
//!
//! [`BoardController`] owns the board, the gesture state machine and the
//! selection, and turns UI events into board mutations. Every committed
//! mutation is reported to subscribers as a [`BoardEvent`], so a view layer
//! can re-render from whatever changed.
//!
//! # Example
//!
//! ```ignore
//! use chainboard::{BoardController, BoardModels};
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let ctrl = BoardController::new();
//!
//!     // Keep Slint models in sync with the board, building the window's
//!     // own row structs
//!     let models = BoardModels::with_rows(
//!         |node, active| BoardNode {
//!             id: node.id.to_string().into(),
//!             x: node.position.x,
//!             y: node.position.y,
//!             text: node.display_text().into(),
//!             active,
//!             ..Default::default()
//!         },
//!         |from, to, start, end| BoardEdge {
//!             from: from.id.to_string().into(),
//!             to: to.id.to_string().into(),
//!             start_x: start.x,
//!             start_y: start.y,
//!             end_x: end.x,
//!             end_y: end.y,
//!         },
//!         |slide| BoardSlide {
//!             title: slide.title.as_str().into(),
//!             body: slide.body.as_str().into(),
//!         },
//!     );
//!     models.attach(&ctrl);
//!     window.set_nodes(models.nodes());
//!     window.set_edges(models.edges());
//!
//!     // Gestures - controller handles the logic
//!     window.on_pointer_moved(ctrl.pointer_move_callback());
//!     window.on_node_pressed(ctrl.node_pressed_callback());
//!     window.on_anchor_pressed(ctrl.anchor_pressed_callback());
//!     window.on_pointer_released(ctrl.end_gesture_callback());
//!
//!     window.on_add_node({
//!         let ctrl = ctrl.clone();
//!         move || {
//!             ctrl.add_node();
//!         }
//!     });
//!
//!     window.on_present({
//!         let ctrl = ctrl.clone();
//!         let models = models.clone();
//!         move || models.sync_slides(&ctrl.present())
//!     });
//!
//!     window.run().unwrap();
//! }
//! ```

use crate::board::{Board, NodeId, NodeUpdate};
use crate::config::CanvasConfig;
use crate::error::EdgeRejected;
use crate::geometry::{Anchor, Point};
use crate::gesture::{Commit, Gesture};
use crate::presentation::Presentation;
use crate::selection::Selection;
use slint::SharedString;
use std::cell::RefCell;
use std::rc::Rc;

/// A committed change, reported to subscribers after it is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    NodeCreated { node: NodeId, origin: Option<NodeId> },
    NodeDeleted(NodeId),
    NodeUpdated(NodeId),
    NodeMoved(NodeId),
    EdgeAdded { from: NodeId, to: NodeId },
    /// A connection was released over its own source; nothing changed.
    SelfConnectionRejected(NodeId),
    TitleChanged,
    SelectionChanged,
}

/// What a finished gesture did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// No gesture was active, or it was released without effect.
    None,
    /// A node drag ended.
    Moved(NodeId),
    /// An edge was added between two existing nodes.
    Connected { from: NodeId, to: NodeId },
    /// A new node was spawned and linked from `from`.
    Spawned { from: NodeId, node: NodeId },
    SelfConnectionRejected(NodeId),
}

type Listener = Rc<dyn Fn(&BoardEvent)>;

/// Controller that owns board state and implements the UI entry points.
///
/// Clone this controller to share it across callbacks. All clones see the
/// same board.
#[derive(Clone)]
pub struct BoardController {
    board: Rc<RefCell<Board>>,
    gesture: Rc<RefCell<Gesture>>,
    selection: Rc<RefCell<Selection>>,
    pointer: Rc<RefCell<Point>>,
    config: Rc<CanvasConfig>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl Default for BoardController {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardController {
    /// Create a controller with an empty board and default settings.
    pub fn new() -> Self {
        Self::with_config(CanvasConfig::default())
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            board: Rc::new(RefCell::new(Board::new(config.default_title.clone()))),
            gesture: Rc::new(RefCell::new(Gesture::Idle)),
            selection: Rc::new(RefCell::new(Selection::new())),
            pointer: Rc::new(RefCell::new(Point::default())),
            config: Rc::new(config),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub(crate) fn board(&self) -> Rc<RefCell<Board>> {
        self.board.clone()
    }

    pub(crate) fn selection_handle(&self) -> Rc<RefCell<Selection>> {
        self.selection.clone()
    }

    /// Run `f` against the current board.
    pub fn with_board<R>(&self, f: impl FnOnce(&Board) -> R) -> R {
        f(&*self.board.borrow())
    }

    /// Clone of the current board.
    pub fn snapshot(&self) -> Board {
        self.board.borrow().clone()
    }

    pub fn gesture(&self) -> Gesture {
        *self.gesture.borrow()
    }

    pub fn selection(&self) -> Selection {
        *self.selection.borrow()
    }

    /// Last pointer position reported through [`on_pointer_move`](Self::on_pointer_move).
    pub fn pointer(&self) -> Point {
        *self.pointer.borrow()
    }

    /// Register a callback invoked after every committed change.
    pub fn subscribe(&self, listener: impl Fn(&BoardEvent) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn emit(&self, event: BoardEvent) {
        // listeners may subscribe or read the board while being notified
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in &listeners {
            listener(&event);
        }
    }

    // === Board mutations ===

    /// The "add item" action: a fresh node at the spawn position, activated
    /// and opened for editing.
    pub fn add_node(&self) -> NodeId {
        let id = self.create_node(self.config.spawn_position, None);
        self.focus_new(id);
        id
    }

    pub fn create_node(&self, position: Point, origin: Option<NodeId>) -> NodeId {
        let (id, linked) = {
            let mut board = self.board.borrow_mut();
            let edges_before = board.edge_count();
            let id = board.create_node(position, origin);
            (id, board.edge_count() > edges_before)
        };
        self.emit(BoardEvent::NodeCreated {
            node: id,
            origin: origin.filter(|_| linked),
        });
        id
    }

    /// Delete a node, its edges, and any selection pointing at it.
    pub fn delete_node(&self, id: NodeId) -> bool {
        let removed = self.board.borrow_mut().delete_node(id);
        let forgotten = self.selection.borrow_mut().forget(id);
        if removed {
            self.emit(BoardEvent::NodeDeleted(id));
        }
        if forgotten {
            self.emit(BoardEvent::SelectionChanged);
        }
        removed
    }

    pub fn update_node(&self, id: NodeId, update: NodeUpdate) -> bool {
        let updated = self.board.borrow_mut().update_node(id, update);
        if updated {
            self.emit(BoardEvent::NodeUpdated(id));
        }
        updated
    }

    pub fn move_node(&self, id: NodeId, position: Point) -> bool {
        let moved = self.board.borrow_mut().move_node(id, position);
        if moved {
            self.emit(BoardEvent::NodeMoved(id));
        }
        moved
    }

    pub fn add_edge(&self, from: NodeId, to: NodeId) -> Result<(), EdgeRejected> {
        let result = self.board.borrow_mut().add_edge(from, to);
        match result {
            Ok(()) => self.emit(BoardEvent::EdgeAdded { from, to }),
            Err(EdgeRejected::SelfConnection(node)) => {
                self.emit(BoardEvent::SelfConnectionRejected(node))
            }
        }
        result
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.board.borrow_mut().set_title(title);
        self.emit(BoardEvent::TitleChanged);
    }

    // === Selection and edit dialog ===

    /// Show the controls of `id`. Ignored for unknown nodes.
    pub fn activate_node(&self, id: NodeId) {
        if !self.board.borrow().contains(id) {
            return;
        }
        self.selection.borrow_mut().activate(id);
        self.emit(BoardEvent::SelectionChanged);
    }

    /// Open the edit dialog for `id`. Ignored for unknown nodes.
    pub fn open_editor(&self, id: NodeId) {
        if !self.board.borrow().contains(id) {
            return;
        }
        self.selection.borrow_mut().open_editor(id);
        self.emit(BoardEvent::SelectionChanged);
    }

    /// Close the edit dialog keeping the edits made so far.
    pub fn confirm_edit(&self) {
        self.close_editor();
    }

    /// Close the edit dialog. Edits are applied live, so nothing is reverted.
    pub fn cancel_edit(&self) {
        self.close_editor();
    }

    fn close_editor(&self) {
        let was_editing = {
            let mut selection = self.selection.borrow_mut();
            let was_editing = selection.is_editing();
            selection.close_editor();
            was_editing
        };
        if was_editing {
            self.emit(BoardEvent::SelectionChanged);
        }
    }

    fn focus_new(&self, id: NodeId) {
        self.selection.borrow_mut().focus_new(id);
        self.emit(BoardEvent::SelectionChanged);
    }

    // === Gestures ===

    /// Pointer-down on a node body. Ignored while another gesture is active
    /// or if the node does not exist.
    pub fn begin_node_drag(&self, id: NodeId) -> bool {
        if !self.board.borrow().contains(id) {
            return false;
        }
        self.gesture.borrow_mut().begin_node_drag(id)
    }

    /// Pointer-down on one of a node's anchors. Same rules as
    /// [`begin_node_drag`](Self::begin_node_drag).
    pub fn begin_connection_drag(&self, id: NodeId, anchor: Anchor) -> bool {
        if !self.board.borrow().contains(id) {
            return false;
        }
        self.gesture.borrow_mut().begin_connection(id, anchor)
    }

    /// Track the pointer; a dragged node follows it from its centre.
    pub fn on_pointer_move(&self, position: Point) {
        *self.pointer.borrow_mut() = position;
        let dragged = self.gesture.borrow().dragged_node();
        if let Some(node) = dragged {
            tracing::trace!(%node, x = position.x, y = position.y, "dragging node");
            self.move_node(node, position - self.config.grab_offset());
        }
    }

    /// Pointer-up over `target`, or over empty canvas when `None`.
    ///
    /// A connection whose source was deleted mid-drag commits nothing.
    pub fn end_gesture(&self, target: Option<NodeId>) -> GestureOutcome {
        let commit = self.gesture.borrow_mut().finish(target);
        if let Commit::Connect { from, .. } | Commit::Spawn { origin: from } = commit {
            if !self.board.borrow().contains(from) {
                tracing::debug!(node = %from, "connection source deleted during drag");
                return GestureOutcome::None;
            }
        }
        match commit {
            Commit::Nothing => GestureOutcome::None,
            Commit::Release { node } => GestureOutcome::Moved(node),
            Commit::Connect { from, to } => match self.add_edge(from, to) {
                Ok(()) => GestureOutcome::Connected { from, to },
                Err(EdgeRejected::SelfConnection(node)) => {
                    GestureOutcome::SelfConnectionRejected(node)
                }
            },
            Commit::Spawn { origin } => {
                let position = self.pointer() - self.config.grab_offset();
                let node = self.create_node(position, Some(origin));
                self.focus_new(node);
                GestureOutcome::Spawned { from: origin, node }
            }
            Commit::RejectSelf { node } => {
                self.emit(BoardEvent::SelfConnectionRejected(node));
                GestureOutcome::SelfConnectionRejected(node)
            }
        }
    }

    /// Drop the active gesture without committing it, e.g. when the canvas
    /// goes away mid-drag.
    pub fn abandon_gesture(&self) {
        self.gesture.borrow_mut().abandon();
    }

    /// Start and end of the connection being drawn: the source anchor and the
    /// pointer. `None` unless a connection drag is active on a live node.
    pub fn connection_preview(&self) -> Option<(Point, Point)> {
        let (from, anchor) = self.gesture.borrow().connection_source()?;
        let board = self.board.borrow();
        let node = board.node(from)?;
        let start = node.position + anchor.offset(self.config.node_size);
        Some((start, self.pointer()))
    }

    /// Topmost node under `point`, for resolving a pointer-up target.
    pub fn node_at(&self, point: Point) -> Option<NodeId> {
        self.board.borrow().node_at(point, self.config.node_size)
    }

    // === Presentation ===

    /// Derive a fresh deck from the current board.
    pub fn present(&self) -> Presentation {
        Presentation::from_board(&self.board.borrow())
    }

    // === Callback factories ===
    //
    // Slint passes node ids as strings; an empty string means "no node".

    /// Returns a callback for pointer movement in canvas coordinates.
    pub fn pointer_move_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.on_pointer_move(Point::new(x, y))
    }

    /// Returns a callback for pointer-down on a node body: activates the node
    /// and starts dragging it.
    pub fn node_pressed_callback(&self) -> impl Fn(SharedString) {
        let ctrl = self.clone();
        move |id| {
            if let Some(id) = parse_node_id(&id) {
                ctrl.activate_node(id);
                ctrl.begin_node_drag(id);
            }
        }
    }

    /// Returns a callback for pointer-down on an anchor, given the node id
    /// and the anchor name (`"top"`, `"bottom"`, `"left"`, `"right"`).
    pub fn anchor_pressed_callback(&self) -> impl Fn(SharedString, SharedString) {
        let ctrl = self.clone();
        move |id, anchor| {
            let Some(anchor) = Anchor::from_name(&anchor) else {
                tracing::warn!(anchor = %anchor, "unknown anchor name");
                return;
            };
            if let Some(id) = parse_node_id(&id) {
                ctrl.begin_connection_drag(id, anchor);
            }
        }
    }

    /// Returns a callback for pointer-up over a node (its id) or over empty
    /// canvas (empty string).
    pub fn end_gesture_callback(&self) -> impl Fn(SharedString) {
        let ctrl = self.clone();
        move |target| {
            if target.is_empty() {
                ctrl.end_gesture(None);
                return;
            }
            match parse_node_id(&target) {
                Some(id) => {
                    ctrl.end_gesture(Some(id));
                }
                // an unreadable target must not spawn a node
                None => ctrl.abandon_gesture(),
            }
        }
    }
}

fn parse_node_id(raw: &str) -> Option<NodeId> {
    match raw.parse() {
        Ok(id) => Some(id),
        Err(err) => {
            tracing::warn!(id = raw, %err, "ignoring malformed node id");
            None
        }
    }
}
