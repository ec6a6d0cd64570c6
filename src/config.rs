//! Canvas configuration.
//!
//! ```toml
//! default_title = "Biology"
//! spawn_position = { x = 40.0, y = 40.0 }
//!
//! [node_size]
//! width = 200.0
//! height = 80.0
//! ```

use crate::error::ConfigError;
use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

/// Fixed metrics the interaction core needs from the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Size every node box is rendered at.
    pub node_size: Size,
    /// Where the "add" button drops a new node.
    pub spawn_position: Point,
    /// Title a fresh board starts with.
    pub default_title: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            node_size: Size::default(),
            spawn_position: Point::new(200.0, 200.0),
            default_title: "Untitled Board".to_string(),
        }
    }
}

impl CanvasConfig {
    /// Parse a config from TOML. Missing fields keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: CanvasConfig = toml::from_str(source)?;
        let Size { width, height } = config.node_size;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidNodeSize { width, height });
        }
        Ok(config)
    }

    /// Offset subtracted from the pointer so a dragged node follows it from
    /// its centre.
    pub fn grab_offset(&self) -> Point {
        self.node_size.half()
    }
}
