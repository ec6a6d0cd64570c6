//! Error types.
//!
//! Board mutations never fail outright; a missing node is a silent no-op.
//! The only rejected mutation is a self-connection, reported as a value so
//! the UI can show a hint.

use crate::board::NodeId;
use thiserror::Error;

/// Why an edge was not added to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EdgeRejected {
    #[error("cannot connect node {0} to itself")]
    SelfConnection(NodeId),
}

/// Failure to load a [`CanvasConfig`](crate::config::CanvasConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid canvas config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("node size must be positive, got {width}x{height}")]
    InvalidNodeSize { width: f32, height: f32 },
}

/// A string that does not name a [`NodeKind`](crate::board::NodeKind).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown node kind: {0}")]
pub struct UnknownNodeKind(pub String);

/// A stored board that cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardLoadError {
    #[error("node stored under key {key} has id {id}")]
    NodeIdMismatch { key: NodeId, id: NodeId },
}
