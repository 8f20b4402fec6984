//! A single continuous input path.

use serde::{Deserialize, Serialize};

use super::point::{BoundingBox, TimedPoint};
use crate::error::{Error, Result};

/// One continuous input path: an ordered sequence of timestamped points.
///
/// Point order is temporally and spatially significant. Non-empty by
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<TimedPoint>,
}

impl Stroke {
    /// Create a stroke from its recorded points.
    ///
    /// Fails with [`Error::InvalidInput`] when `points` is empty.
    pub fn new(points: Vec<TimedPoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::InvalidInput(
                "a stroke requires at least one point".to_string(),
            ));
        }
        Ok(Self { points })
    }

    /// The recorded points, in capture order.
    #[inline]
    pub fn points(&self) -> &[TimedPoint] {
        &self.points
    }

    /// Number of points in the stroke.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Arc length of the stroke path.
    ///
    /// Zero for a single-point stroke.
    pub fn path_length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(&pair[1]))
            .sum()
    }

    /// Bounding box of the stroke.
    pub fn bounds(&self) -> BoundingBox {
        let first = self.points[0];
        let mut bounds = BoundingBox::at(first.x, first.y);
        for point in &self.points[1..] {
            bounds.include(point.x, point.y);
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn point(x: f32, y: f32) -> TimedPoint {
        TimedPoint::new(x, y, 0)
    }

    #[test]
    fn test_empty_stroke_rejected() {
        let err = Stroke::new(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_path_length() {
        let stroke = Stroke::new(vec![point(0.0, 0.0), point(3.0, 4.0), point(3.0, 6.0)]).unwrap();
        assert_relative_eq!(stroke.path_length(), 7.0, epsilon = 1e-6);
    }

    #[test]
    fn test_single_point_stroke() {
        let stroke = Stroke::new(vec![point(2.0, 3.0)]).unwrap();
        assert_eq!(stroke.len(), 1);
        assert_relative_eq!(stroke.path_length(), 0.0);

        let bounds = stroke.bounds();
        assert_relative_eq!(bounds.width(), 0.0);
        assert_relative_eq!(bounds.center_x(), 2.0);
    }

    #[test]
    fn test_bounds() {
        let stroke = Stroke::new(vec![point(1.0, -1.0), point(-2.0, 4.0), point(0.0, 0.0)]).unwrap();
        let bounds = stroke.bounds();
        assert_relative_eq!(bounds.min_x, -2.0);
        assert_relative_eq!(bounds.max_x, 1.0);
        assert_relative_eq!(bounds.min_y, -1.0);
        assert_relative_eq!(bounds.max_y, 4.0);
    }
}
