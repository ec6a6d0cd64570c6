//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod harness;

use chainboard::{BoardEvent, NodeId};
use std::cell::RefCell;
use std::rc::Rc;

/// Tracks board events for testing.
///
/// Each field records events of one kind with their payload.
#[derive(Default, Clone)]
pub struct CallbackTracker {
    /// (node, origin)
    pub node_created: Rc<RefCell<Vec<(NodeId, Option<NodeId>)>>>,
    pub node_deleted: Rc<RefCell<Vec<NodeId>>>,
    pub node_updated: Rc<RefCell<Vec<NodeId>>>,
    pub node_moved: Rc<RefCell<Vec<NodeId>>>,
    /// (from, to)
    pub edge_added: Rc<RefCell<Vec<(NodeId, NodeId)>>>,
    pub self_connection_rejected: Rc<RefCell<Vec<NodeId>>>,
    /// Count of TitleChanged events
    pub title_changed: Rc<RefCell<usize>>,
    /// Count of SelectionChanged events
    pub selection_changed: Rc<RefCell<usize>>,
}

impl CallbackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one event.
    pub fn record(&self, event: &BoardEvent) {
        match *event {
            BoardEvent::NodeCreated { node, origin } => {
                self.node_created.borrow_mut().push((node, origin))
            }
            BoardEvent::NodeDeleted(id) => self.node_deleted.borrow_mut().push(id),
            BoardEvent::NodeUpdated(id) => self.node_updated.borrow_mut().push(id),
            BoardEvent::NodeMoved(id) => self.node_moved.borrow_mut().push(id),
            BoardEvent::EdgeAdded { from, to } => self.edge_added.borrow_mut().push((from, to)),
            BoardEvent::SelfConnectionRejected(id) => {
                self.self_connection_rejected.borrow_mut().push(id)
            }
            BoardEvent::TitleChanged => *self.title_changed.borrow_mut() += 1,
            BoardEvent::SelectionChanged => *self.selection_changed.borrow_mut() += 1,
        }
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        self.node_created.borrow_mut().clear();
        self.node_deleted.borrow_mut().clear();
        self.node_updated.borrow_mut().clear();
        self.node_moved.borrow_mut().clear();
        self.edge_added.borrow_mut().clear();
        self.self_connection_rejected.borrow_mut().clear();
        *self.title_changed.borrow_mut() = 0;
        *self.selection_changed.borrow_mut() = 0;
    }
}
