//! Geometry model: points, strokes, gestures.

mod gesture;
mod point;
mod stroke;

pub use gesture::Gesture;
pub use point::{BoundingBox, TimedPoint};
pub use stroke::Stroke;
