//! Point and bounding box types for gesture geometry.

use serde::{Deserialize, Serialize};

/// A single timestamped sample of an input trace.
///
/// Coordinates are in the capture device's pixel space; the timestamp is
/// milliseconds since an arbitrary epoch. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedPoint {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
    /// Capture time in milliseconds
    pub timestamp_ms: i64,
}

impl TimedPoint {
    /// Create a new point.
    #[inline]
    pub fn new(x: f32, y: f32, timestamp_ms: i64) -> Self {
        Self { x, y, timestamp_ms }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: &TimedPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned bounding box of a stroke or gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub min_x: f32,
    /// Minimum Y coordinate
    pub min_y: f32,
    /// Maximum X coordinate
    pub max_x: f32,
    /// Maximum Y coordinate
    pub max_y: f32,
}

impl BoundingBox {
    /// Bounding box of a single point.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    /// Grow the box to include a point.
    pub fn include(&mut self, x: f32, y: f32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Grow the box to include another box.
    pub fn union(&mut self, other: &BoundingBox) {
        self.include(other.min_x, other.min_y);
        self.include(other.max_x, other.max_y);
    }

    /// Width of the box.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Height of the box.
    #[inline]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Center X coordinate.
    #[inline]
    pub fn center_x(&self) -> f32 {
        (self.min_x + self.max_x) / 2.0
    }

    /// Center Y coordinate.
    #[inline]
    pub fn center_y(&self) -> f32 {
        (self.min_y + self.max_y) / 2.0
    }
}
