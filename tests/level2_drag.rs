//! Level 2: Node Drag Tests
//!
//! Dragging a node moves it under the pointer and never adds or removes
//! anything from the board.

mod common;

use chainboard::{Anchor, GestureOutcome, NodeKind, Point};
use common::harness::BoardHarness;
use slint::Model;

// ============================================================================
// Basic drag
// ============================================================================

#[test]
fn test_drag_moves_node_with_pointer() {
    let h = BoardHarness::new();
    let id = h.node(NodeKind::Explanation, "Cells", (0.0, 0.0));

    let outcome = h.drag_node(id, &[(200.0, 100.0), (328.0, 148.0)]);

    assert_eq!(outcome, GestureOutcome::Moved(id));
    assert_eq!(h.position(id), Some(Point::new(200.0, 100.0)));
}

#[test]
fn test_each_pointer_move_is_reported() {
    let h = BoardHarness::new();
    let id = h.node(NodeKind::Explanation, "Cells", (0.0, 0.0));
    h.tracker.clear();

    h.drag_node(id, &[(10.0, 10.0), (20.0, 20.0), (30.0, 30.0)]);

    assert_eq!(h.tracker.node_moved.borrow().as_slice(), &[id, id, id]);
}

#[test]
fn test_drag_keeps_counts() {
    let h = BoardHarness::new();
    let a = h.node(NodeKind::Explanation, "Cells", (0.0, 0.0));
    h.child(a, NodeKind::Definition, "Unit of life");
    h.tracker.clear();

    h.drag_node(a, &[(700.0, 500.0)]);

    assert_eq!(h.node_count(), 2);
    assert_eq!(h.edge_count(), 1);
    assert!(h.tracker.node_created.borrow().is_empty());
    assert!(h.tracker.edge_added.borrow().is_empty());
}

#[test]
fn test_release_without_move_keeps_position() {
    let h = BoardHarness::new();
    let id = h.node(NodeKind::Explanation, "Cells", (40.0, 40.0));

    assert_eq!(h.drag_node(id, &[]), GestureOutcome::Moved(id));
    assert_eq!(h.position(id), Some(Point::new(40.0, 40.0)));
}

#[test]
fn test_release_over_other_node_only_moves() {
    let h = BoardHarness::new();
    let a = h.node(NodeKind::Explanation, "Cells", (0.0, 0.0));
    let b = h.node(NodeKind::Explanation, "Tissues", (500.0, 0.0));

    h.ctrl.begin_node_drag(a);
    h.ctrl.on_pointer_move(Point::new(600.0, 40.0));
    assert_eq!(h.ctrl.end_gesture(Some(b)), GestureOutcome::Moved(a));
    assert_eq!(h.edge_count(), 0);
}

// ============================================================================
// Gesture exclusivity
// ============================================================================

#[test]
fn test_second_drag_ignored_while_dragging() {
    let h = BoardHarness::new();
    let a = h.node(NodeKind::Explanation, "Cells", (0.0, 0.0));
    let b = h.node(NodeKind::Explanation, "Tissues", (500.0, 0.0));

    assert!(h.ctrl.begin_node_drag(a));
    assert!(!h.ctrl.begin_node_drag(b));
    assert!(!h.ctrl.begin_connection_drag(b, Anchor::Top));

    h.ctrl.on_pointer_move(Point::new(128.0, 148.0));
    h.ctrl.end_gesture(None);

    assert_eq!(h.position(a), Some(Point::new(0.0, 100.0)));
    assert_eq!(h.position(b), Some(Point::new(500.0, 0.0)));
}

#[test]
fn test_pointer_move_while_idle_changes_nothing() {
    let h = BoardHarness::new();
    let id = h.node(NodeKind::Explanation, "Cells", (0.0, 0.0));
    h.tracker.clear();

    h.ctrl.on_pointer_move(Point::new(999.0, 999.0));

    assert_eq!(h.position(id), Some(Point::new(0.0, 0.0)));
    assert!(h.tracker.node_moved.borrow().is_empty());
    assert_eq!(h.ctrl.end_gesture(None), GestureOutcome::None);
}

#[test]
fn test_dragged_node_deleted_mid_gesture() {
    let h = BoardHarness::new();
    let id = h.node(NodeKind::Explanation, "Cells", (0.0, 0.0));

    h.ctrl.begin_node_drag(id);
    h.ctrl.delete_node(id);
    h.ctrl.on_pointer_move(Point::new(300.0, 300.0));
    h.ctrl.end_gesture(None);

    assert_eq!(h.node_count(), 0);
    assert!(h.ctrl.gesture().is_idle());
}

// ============================================================================
// Models
// ============================================================================

#[test]
fn test_models_follow_drag() {
    let h = BoardHarness::new();
    let a = h.node(NodeKind::Explanation, "Cells", (0.0, 0.0));
    h.node(NodeKind::Definition, "Unit", (400.0, 0.0));
    let b = h.child(a, NodeKind::Definition, "Membrane");
    h.ctrl.move_node(b, Point::new(400.0, 200.0));

    h.drag_node(a, &[(228.0, 248.0)]);

    let row = h.models.nodes().row_data(0).unwrap();
    assert_eq!((row.x, row.y), (100.0, 200.0));
    let edge = h.models.edges().row_data(0).unwrap();
    // right anchor of the moved node to left anchor of the child
    assert_eq!((edge.start_x, edge.start_y), (356.0, 248.0));
    assert_eq!((edge.end_x, edge.end_y), (400.0, 248.0));
}

#[test]
fn test_callbacks_drive_drag() {
    let h = BoardHarness::new();
    let id = h.node(NodeKind::Explanation, "Cells", (0.0, 0.0));

    h.ctrl.node_pressed_callback()(BoardHarness::id_string(id));
    h.ctrl.pointer_move_callback()(428.0, 348.0);
    h.ctrl.end_gesture_callback()("".into());

    assert_eq!(h.position(id), Some(Point::new(300.0, 300.0)));
    assert_eq!(h.ctrl.selection().active(), Some(id));
}
