//! Foundation layer: geometry types, vector math, wire primitives.

pub mod math;
pub mod types;
pub(crate) mod wire;

pub use types::{BoundingBox, Gesture, Stroke, TimedPoint};
