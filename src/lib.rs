//! MudraStore - Trainable gesture recognition store
//!
//! Keeps named collections of example gesture traces, extracts a feature
//! vector from each trace, and predicts the most likely entry for a new
//! trace by comparing it against the stored examples. The whole labeled
//! example set persists in a compact versioned binary format.
//!
//! # Architecture
//!
//! The crate is organized into 4 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                     store/                          │  ← Façade + persistence
//! │           (GestureStore, file format)               │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                   classifier/                       │  ← Prediction
//! │            (Learner, InstanceLearner)               │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                    features/                        │  ← Extraction
//! │        (policies, Instance, samplers)               │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                      core/                          │  ← Foundation
//! │           (geometry types, math, wire)              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use mudra_store::{Gesture, GestureStore, Stroke, TimedPoint};
//!
//! # fn main() -> mudra_store::Result<()> {
//! let mut store = GestureStore::new("gestures.bin");
//!
//! let stroke = Stroke::new(vec![
//!     TimedPoint::new(0.0, 0.0, 0),
//!     TimedPoint::new(10.0, 2.0, 16),
//!     TimedPoint::new(20.0, 0.0, 32),
//! ])?;
//! let example = Gesture::new(vec![stroke])?;
//! store.add_gesture("check", example.clone())?;
//!
//! let predictions = store.recognize(&example)?;
//! assert_eq!(predictions[0].name, "check");
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Feature extraction (depends on core)
// ============================================================================
pub mod features;

// ============================================================================
// Layer 3: Classification (depends on core, features)
// ============================================================================
pub mod classifier;

// ============================================================================
// Layer 4: Store façade + persistence (depends on all layers)
// ============================================================================
pub mod store;

pub mod config;
pub mod error;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

pub use crate::core::math;
pub use crate::core::types::{BoundingBox, Gesture, Stroke, TimedPoint};

pub use classifier::{InstanceLearner, Learner, Prediction};
pub use config::{ConfigError, StoreConfig};
pub use error::{Error, Result};
pub use features::{Instance, OrientationStyle, SequenceType};
pub use store::{FILE_FORMAT_VERSION, GestureStore};
