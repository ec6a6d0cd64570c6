//! Canvas-space geometry: points, node sizes, anchor offsets and hit testing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A position in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Width and height of a node box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Offset from a node's top-left corner to its centre.
    pub fn half(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(256.0, 96.0)
    }
}

/// Axis-aligned rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn at(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Edges are inclusive so a pointer resting on a border still hits.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// One of the four attachment points on a node's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Top,
    Bottom,
    Left,
    Right,
}

impl Anchor {
    pub const ALL: [Anchor; 4] = [Anchor::Top, Anchor::Bottom, Anchor::Left, Anchor::Right];

    /// Parse the lowercase name used by [`Display`](fmt::Display).
    pub fn from_name(name: &str) -> Option<Anchor> {
        Anchor::ALL.into_iter().find(|anchor| anchor.to_string() == name)
    }

    /// Offset of this anchor relative to the node's top-left corner.
    pub fn offset(self, size: Size) -> Point {
        match self {
            Anchor::Top => Point::new(size.width / 2.0, 0.0),
            Anchor::Bottom => Point::new(size.width / 2.0, size.height),
            Anchor::Left => Point::new(0.0, size.height / 2.0),
            Anchor::Right => Point::new(size.width, size.height / 2.0),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Anchor::Top => "top",
            Anchor::Bottom => "bottom",
            Anchor::Left => "left",
            Anchor::Right => "right",
        };
        f.write_str(name)
    }
}

/// Find the topmost item whose rect contains `point`.
///
/// Items are expected in paint order, so the last hit wins.
pub fn find_topmost<T, I>(point: Point, items: I) -> Option<T>
where
    I: IntoIterator<Item = (T, Rect)>,
{
    items
        .into_iter()
        .filter(|(_, rect)| rect.contains(point))
        .last()
        .map(|(item, _)| item)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Point arithmetic
    // ========================================================================

    #[test]
    fn test_point_sub_and_add() {
        let p = Point::new(300.0, 200.0) - Point::new(128.0, 48.0);
        assert_eq!(p, Point::new(172.0, 152.0));
        assert_eq!(p + Point::new(128.0, 48.0), Point::new(300.0, 200.0));
    }

    #[test]
    fn test_half_size_is_grab_offset() {
        assert_eq!(Size::default().half(), Point::new(128.0, 48.0));
    }

    // ========================================================================
    // Anchor offsets
    // ========================================================================

    #[test]
    fn test_anchor_offsets_for_default_node() {
        let size = Size::default();
        assert_eq!(Anchor::Top.offset(size), Point::new(128.0, 0.0));
        assert_eq!(Anchor::Bottom.offset(size), Point::new(128.0, 96.0));
        assert_eq!(Anchor::Left.offset(size), Point::new(0.0, 48.0));
        assert_eq!(Anchor::Right.offset(size), Point::new(256.0, 48.0));
    }

    #[test]
    fn test_anchor_display() {
        let names: Vec<String> = Anchor::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["top", "bottom", "left", "right"]);
        assert_eq!(Anchor::from_name("left"), Some(Anchor::Left));
        assert_eq!(Anchor::from_name("middle"), None);
    }

    // ========================================================================
    // Hit testing
    // ========================================================================

    #[test]
    fn test_rect_contains_border() {
        let rect = Rect::at(Point::new(10.0, 10.0), Size::new(100.0, 50.0));
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(110.0, 60.0)));
        assert!(!rect.contains(Point::new(110.1, 60.0)));
    }

    #[test]
    fn test_find_topmost_prefers_last() {
        let size = Size::new(100.0, 50.0);
        let items = vec![
            (1, Rect::at(Point::new(0.0, 0.0), size)),
            (2, Rect::at(Point::new(50.0, 0.0), size)),
        ];
        assert_eq!(find_topmost(Point::new(75.0, 25.0), items.clone()), Some(2));
        assert_eq!(find_topmost(Point::new(25.0, 25.0), items.clone()), Some(1));
        assert_eq!(find_topmost(Point::new(500.0, 500.0), items), None);
    }

    #[test]
    fn test_find_topmost_negative_coordinates() {
        let items = vec![("a", Rect::at(Point::new(-200.0, -100.0), Size::default()))];
        assert_eq!(find_topmost(Point::new(-100.0, -50.0), items), Some("a"));
    }
}
