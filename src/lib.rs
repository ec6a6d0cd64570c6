//! # ChainBoard
//!
//! The graph and interaction core of a thought board: users place labelled
//! nodes on a free-form canvas, connect them by dragging from one node's edge
//! to another, and turn the result into a slide deck.
//!
//! ## Features
//!
//! - **Graph store** - [`Board`] owns every node and edge and keeps them
//!   consistent; deleting a node removes its edges in the same call
//! - **Gesture state machine** - [`Gesture`] allows exactly one drag at a
//!   time and commits nothing until pointer-up
//! - **Slide derivation** - [`derive_presentation`] is a pure function from a
//!   board to an ordered deck
//! - **Slint integration** - [`BoardController`] callback factories and
//!   [`BoardModels`] for binding a Slint canvas
//!
//! ## Quick Start
//!
//! ```
//! use chainboard::{Anchor, BoardController, GestureOutcome, NodeKind, NodeUpdate, Point};
//!
//! let ctrl = BoardController::new();
//! let topic = ctrl.add_node();
//! ctrl.update_node(topic, NodeUpdate::Text("Photosynthesis".into()));
//!
//! // Drag from the topic's right anchor and release over empty canvas
//! ctrl.begin_connection_drag(topic, Anchor::Right);
//! ctrl.on_pointer_move(Point::new(700.0, 260.0));
//! let GestureOutcome::Spawned { node, .. } = ctrl.end_gesture(None) else {
//!     unreachable!();
//! };
//! ctrl.update_node(node, NodeUpdate::Kind(NodeKind::Definition));
//! ctrl.update_node(node, NodeUpdate::Text("Light to sugar".into()));
//!
//! let deck = ctrl.present();
//! assert_eq!(deck.len(), 4);
//! assert_eq!(deck.slides()[2].body, "📘 Light to sugar");
//! ```

pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod models;
pub mod presentation;
pub mod selection;
pub mod slides;

pub use board::{Board, Edge, EdgeView, Node, NodeId, NodeKind, NodeUpdate};
pub use config::CanvasConfig;
pub use controller::{BoardController, BoardEvent, GestureOutcome};
pub use error::{BoardLoadError, ConfigError, EdgeRejected, UnknownNodeKind};
pub use geometry::{Anchor, Point, Rect, Size};
pub use gesture::{Commit, Gesture};
pub use models::{BoardModels, EdgeRow, NodeRow, SlideRow};
pub use presentation::Presentation;
pub use selection::Selection;
pub use slides::{derive_presentation, Slide};
