//! Slint models mirroring board and presentation state.
//!
//! [`BoardModels`] keeps one `VecModel` per list the UI renders. Bind it to a
//! controller with [`attach`](BoardModels::attach) and the node and edge rows
//! are refreshed after every committed change.
//!
//! Rows are built by constructor closures, so the models can hold the structs
//! Slint generates for a window:
//!
//! ```ignore
//! let models = BoardModels::with_rows(
//!     |node, active| BoardNode {
//!         id: node.id.to_string().into(),
//!         x: node.position.x,
//!         y: node.position.y,
//!         text: node.display_text().into(),
//!         kind: node.kind.as_str().into(),
//!         active,
//!     },
//!     |from, to, start, end| BoardEdge {
//!         from: from.id.to_string().into(),
//!         to: to.id.to_string().into(),
//!         start_x: start.x,
//!         start_y: start.y,
//!         end_x: end.x,
//!         end_y: end.y,
//!     },
//!     |slide| BoardSlide {
//!         title: slide.title.as_str().into(),
//!         body: slide.body.as_str().into(),
//!     },
//! );
//! models.attach(&ctrl);
//! window.set_nodes(models.nodes());
//! window.set_edges(models.edges());
//! ```
//!
//! [`BoardModels::new`] uses the plain [`NodeRow`], [`EdgeRow`] and
//! [`SlideRow`] types, which is enough for headless use and tests.

use crate::board::{Board, Node};
use crate::controller::{BoardController, BoardEvent};
use crate::geometry::{Anchor, Point, Size};
use crate::presentation::Presentation;
use crate::selection::Selection;
use crate::slides::Slide;
use slint::{Model, ModelRc, SharedString, VecModel};
use std::rc::Rc;

/// One node as the canvas draws it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeRow {
    pub id: SharedString,
    pub x: f32,
    pub y: f32,
    /// Display text, with the placeholder for empty nodes.
    pub text: SharedString,
    pub kind: SharedString,
    pub active: bool,
}

impl NodeRow {
    pub fn new(node: &Node, active: bool) -> Self {
        Self {
            id: node.id.to_string().into(),
            x: node.position.x,
            y: node.position.y,
            text: node.display_text().into(),
            kind: node.kind.as_str().into(),
            active,
        }
    }
}

/// A resolved edge, drawn from the source's right anchor to the target's
/// left anchor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeRow {
    pub from: SharedString,
    pub to: SharedString,
    pub start_x: f32,
    pub start_y: f32,
    pub end_x: f32,
    pub end_y: f32,
}

impl EdgeRow {
    pub fn new(from: &Node, to: &Node, start: Point, end: Point) -> Self {
        Self {
            from: from.id.to_string().into(),
            to: to.id.to_string().into(),
            start_x: start.x,
            start_y: start.y,
            end_x: end.x,
            end_y: end.y,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlideRow {
    pub title: SharedString,
    pub body: SharedString,
}

impl From<&Slide> for SlideRow {
    fn from(slide: &Slide) -> Self {
        Self {
            title: slide.title.as_str().into(),
            body: slide.body.as_str().into(),
        }
    }
}

type NodeConstructor<N> = Rc<dyn Fn(&Node, bool) -> N>;
type EdgeConstructor<E> = Rc<dyn Fn(&Node, &Node, Point, Point) -> E>;
type SlideConstructor<S> = Rc<dyn Fn(&Slide) -> S>;

/// The Slint-facing models of one board.
///
/// `N`, `E` and `S` are the row types of the node, edge and slide models.
/// Clone to share; clones update the same models.
pub struct BoardModels<N = NodeRow, E = EdgeRow, S = SlideRow> {
    nodes: Rc<VecModel<N>>,
    edges: Rc<VecModel<E>>,
    slides: Rc<VecModel<S>>,
    node_row: NodeConstructor<N>,
    edge_row: EdgeConstructor<E>,
    slide_row: SlideConstructor<S>,
}

impl<N, E, S> Clone for BoardModels<N, E, S> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            slides: self.slides.clone(),
            node_row: self.node_row.clone(),
            edge_row: self.edge_row.clone(),
            slide_row: self.slide_row.clone(),
        }
    }
}

impl BoardModels<NodeRow, EdgeRow, SlideRow> {
    /// Models of the crate's plain row types.
    pub fn new() -> Self {
        Self::with_rows(NodeRow::new, EdgeRow::new, |slide: &Slide| SlideRow::from(slide))
    }
}

impl Default for BoardModels<NodeRow, EdgeRow, SlideRow> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E, S> BoardModels<N, E, S>
where
    N: Clone + PartialEq + 'static,
    E: Clone + PartialEq + 'static,
    S: Clone + PartialEq + 'static,
{
    /// Empty models whose rows are built by the given constructors.
    ///
    /// * `node_row` - row for a node and whether it is the active node
    /// * `edge_row` - row for a resolved edge: source, target, and the
    ///   canvas points the line runs between
    /// * `slide_row` - row for one slide of the deck
    pub fn with_rows<FN, FE, FS>(node_row: FN, edge_row: FE, slide_row: FS) -> Self
    where
        FN: Fn(&Node, bool) -> N + 'static,
        FE: Fn(&Node, &Node, Point, Point) -> E + 'static,
        FS: Fn(&Slide) -> S + 'static,
    {
        Self {
            nodes: Rc::new(VecModel::default()),
            edges: Rc::new(VecModel::default()),
            slides: Rc::new(VecModel::default()),
            node_row: Rc::new(node_row),
            edge_row: Rc::new(edge_row),
            slide_row: Rc::new(slide_row),
        }
    }

    pub fn nodes(&self) -> ModelRc<N> {
        ModelRc::from(self.nodes.clone())
    }

    pub fn edges(&self) -> ModelRc<E> {
        ModelRc::from(self.edges.clone())
    }

    pub fn slides(&self) -> ModelRc<S> {
        ModelRc::from(self.slides.clone())
    }

    /// Sync now and after every change committed through `ctrl`.
    pub fn attach(&self, ctrl: &BoardController) {
        let size = ctrl.config().node_size;
        let board = ctrl.board();
        let selection = ctrl.selection_handle();
        self.sync_board(&board.borrow(), &selection.borrow(), size);

        let models = self.clone();
        ctrl.subscribe(move |event: &BoardEvent| {
            if matches!(event, BoardEvent::SelfConnectionRejected(_)) {
                return;
            }
            models.sync_board(&board.borrow(), &selection.borrow(), size);
        });
    }

    /// Rebuild node and edge rows from `board`. Dangling edges are skipped.
    pub fn sync_board(&self, board: &Board, selection: &Selection, size: Size) {
        let nodes = board
            .nodes()
            .map(|node| (self.node_row)(node, selection.is_active(node.id)));
        sync_rows(&self.nodes, nodes);

        let start_offset = Anchor::Right.offset(size);
        let end_offset = Anchor::Left.offset(size);
        let edges = board.resolved_edges().map(|(from, to)| {
            let start = from.position + start_offset;
            let end = to.position + end_offset;
            (self.edge_row)(from, to, start, end)
        });
        sync_rows(&self.edges, edges);
    }

    /// Replace the slide rows with `presentation`'s deck.
    pub fn sync_slides(&self, presentation: &Presentation) {
        let slides = presentation.slides().iter().map(|slide| (self.slide_row)(slide));
        sync_rows(&self.slides, slides);
    }
}

/// Update rows in place, appending or truncating as needed. Unchanged rows
/// are left alone so the UI is not notified for them.
fn sync_rows<T, I>(model: &VecModel<T>, rows: I)
where
    T: Clone + PartialEq + 'static,
    I: IntoIterator<Item = T>,
{
    let mut len = 0;
    for (i, row) in rows.into_iter().enumerate() {
        len = i + 1;
        if i < model.row_count() {
            if model.row_data(i).as_ref() != Some(&row) {
                model.set_row_data(i, row);
            }
        } else {
            model.push(row);
        }
    }
    while model.row_count() > len {
        model.remove(model.row_count() - 1);
    }
}
