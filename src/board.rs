//! The graph store: nodes, edges and the board that owns them.
//!
//! [`Board`] is the single authoritative copy of the graph. Every mutation
//! goes through one of its methods, and each method leaves the board
//! consistent: deleting a node removes every edge touching it in the same
//! call. Lookups of unknown ids are silent no-ops.

use crate::error::{BoardLoadError, EdgeRejected, UnknownNodeKind};
use crate::geometry::{find_topmost, Point, Rect, Size};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque unique node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Allocate a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for NodeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// What a node contributes to the derived presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NodeKind {
    /// A topic; each one opens a group of slides.
    #[default]
    Explanation,
    Question,
    Link,
    Definition,
}

impl NodeKind {
    /// All kinds in the order the edit dialog lists them.
    pub const ALL: [NodeKind; 4] = [
        NodeKind::Explanation,
        NodeKind::Question,
        NodeKind::Link,
        NodeKind::Definition,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Explanation => "Explanation",
            NodeKind::Question => "Question",
            NodeKind::Link => "Link",
            NodeKind::Definition => "Definition",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = UnknownNodeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownNodeKind(s.to_string()))
    }
}

/// A thought unit placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub position: Point,
    pub text: String,
    pub kind: NodeKind,
}

impl Node {
    /// Placeholder shown for a node without text.
    pub const EMPTY_TEXT: &'static str = "(No content)";

    fn new(id: NodeId, position: Point) -> Self {
        Self {
            id,
            position,
            text: String::new(),
            kind: NodeKind::default(),
        }
    }

    /// Text as the canvas shows it.
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            Self::EMPTY_TEXT
        } else {
            &self.text
        }
    }

    /// The node's box on the canvas.
    pub fn rect(&self, size: Size) -> Rect {
        Rect::at(self.position, size)
    }
}

/// An editable node field together with its new value.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeUpdate {
    Text(String),
    Kind(NodeKind),
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }

    pub fn touches(&self, id: NodeId) -> bool {
        self.from == id || self.to == id
    }
}

/// An edge with its endpoints looked up on the board.
///
/// An endpoint is `None` when the node it names no longer exists.
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'a> {
    pub edge: Edge,
    pub from: Option<&'a Node>,
    pub to: Option<&'a Node>,
}

impl EdgeView<'_> {
    pub fn is_dangling(&self) -> bool {
        self.from.is_none() || self.to.is_none()
    }
}

/// The aggregate owning every node and edge of one editing session.
///
/// Deserializing goes through the same checks as the mutation methods:
/// self-loops and edges to missing nodes are dropped, and a node stored under
/// a key other than its own id is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    title: String,
    /// Insertion order is the default topic order of the presentation.
    nodes: IndexMap<NodeId, Node>,
    /// Insertion order decides content order within a slide group.
    edges: Vec<Edge>,
}

/// A board as read from storage, before validation.
#[derive(Deserialize)]
struct RawBoard {
    title: String,
    nodes: IndexMap<NodeId, Node>,
    edges: Vec<Edge>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardLoadError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if let Some((&key, node)) = raw.nodes.iter().find(|(key, node)| **key != node.id) {
            return Err(BoardLoadError::NodeIdMismatch { key, id: node.id });
        }
        let loaded = raw.edges.len();
        let edges: Vec<Edge> = raw
            .edges
            .into_iter()
            .filter(|edge| {
                edge.from != edge.to
                    && raw.nodes.contains_key(&edge.from)
                    && raw.nodes.contains_key(&edge.to)
            })
            .collect();
        if edges.len() != loaded {
            tracing::warn!(dropped = loaded - edges.len(), "dropped invalid edges from loaded board");
        }
        Ok(Self {
            title: raw.title,
            nodes: raw.nodes,
            edges,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new("Untitled Board")
    }
}

impl Board {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            nodes: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    // === Mutations ===

    /// Insert a new empty Explanation node at `position`.
    ///
    /// When `origin` names an existing node, an edge `origin -> new` is
    /// appended in the same call.
    pub fn create_node(&mut self, position: Point, origin: Option<NodeId>) -> NodeId {
        let id = NodeId::generate();
        self.nodes.insert(id, Node::new(id, position));
        tracing::debug!(node = %id, x = position.x, y = position.y, "node created");

        if let Some(origin) = origin.filter(|o| self.nodes.contains_key(o)) {
            self.edges.push(Edge::new(origin, id));
            tracing::debug!(from = %origin, to = %id, "edge added with new node");
        }
        id
    }

    /// Remove a node and every edge touching it.
    ///
    /// Returns `false` (and changes nothing) if the node does not exist.
    pub fn delete_node(&mut self, id: NodeId) -> bool {
        // shift_remove keeps the remaining nodes in insertion order
        let removed = self.nodes.shift_remove(&id).is_some();
        let edges_before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(id));
        if removed {
            tracing::debug!(
                node = %id,
                edges_removed = edges_before - self.edges.len(),
                "node deleted"
            );
        }
        removed
    }

    /// Change a node's text or kind. Returns `false` if the node is absent.
    pub fn update_node(&mut self, id: NodeId, update: NodeUpdate) -> bool {
        let Some(node) = self.nodes.get_mut(&id) else {
            return false;
        };
        match update {
            NodeUpdate::Text(text) => node.text = text,
            NodeUpdate::Kind(kind) => node.kind = kind,
        }
        tracing::debug!(node = %id, kind = %node.kind, "node updated");
        true
    }

    /// Set a node's position. Returns `false` if the node is absent.
    pub fn move_node(&mut self, id: NodeId, position: Point) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.position = position;
                true
            }
            None => false,
        }
    }

    /// Append an edge `from -> to`.
    ///
    /// Endpoints are not checked for existence; reads skip unresolved ones.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<(), EdgeRejected> {
        if from == to {
            tracing::debug!(node = %from, "self-connection rejected");
            return Err(EdgeRejected::SelfConnection(from));
        }
        self.edges.push(Edge::new(from, to));
        tracing::debug!(%from, %to, "edge added");
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        tracing::debug!(title = %self.title, "board title changed");
    }

    // === Reads ===

    pub fn title(&self) -> &str {
        &self.title
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Raw edges in insertion order, dangling ones included.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Every edge with its endpoints resolved against the current nodes.
    pub fn edge_views(&self) -> impl Iterator<Item = EdgeView<'_>> + '_ {
        self.edges.iter().map(move |&edge| EdgeView {
            edge,
            from: self.nodes.get(&edge.from),
            to: self.nodes.get(&edge.to),
        })
    }

    /// Edges whose endpoints both exist, as `(from, to)` node pairs.
    pub fn resolved_edges(&self) -> impl Iterator<Item = (&Node, &Node)> + '_ {
        self.edge_views().filter_map(|view| Some((view.from?, view.to?)))
    }

    /// Live targets of `id`'s outgoing edges, in edge order.
    ///
    /// A node reached by several edges appears once per edge.
    pub fn children_of(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        self.edges
            .iter()
            .filter(move |edge| edge.from == id)
            .filter_map(move |edge| self.nodes.get(&edge.to))
    }

    /// First node of `kind` in insertion order.
    pub fn first_of_kind(&self, kind: NodeKind) -> Option<&Node> {
        self.nodes().find(|node| node.kind == kind)
    }

    /// Topmost node whose box contains `point`.
    pub fn node_at(&self, point: Point, size: Size) -> Option<NodeId> {
        find_topmost(point, self.nodes().map(|node| (node.id, node.rect(size))))
    }
}
