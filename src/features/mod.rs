//! Feature extraction: invariance policies and the instance vector.

mod instance;
mod sampling;

pub use instance::Instance;
pub use sampling::{PATCH_SAMPLE_SIZE, SEQUENCE_SAMPLE_SIZE, spatial_sampling, temporal_sampling};

use serde::{Deserialize, Serialize};

/// Whether stroke and point ordering affect the extracted feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SequenceType {
    /// Insensitive to stroke count and draw order; accepts multi-stroke
    /// gestures.
    Invariant,
    /// Follows point order along the stroke; single-stroke gestures only.
    #[default]
    Sensitive,
}

impl SequenceType {
    /// Feature vector length under this policy, known ahead of extraction.
    pub fn vector_len(&self) -> usize {
        match self {
            SequenceType::Invariant => PATCH_SAMPLE_SIZE * PATCH_SAMPLE_SIZE,
            SequenceType::Sensitive => SEQUENCE_SAMPLE_SIZE * 2,
        }
    }
}

/// Whether absolute rotation affects the extracted feature vector.
///
/// Only meaningful under [`SequenceType::Sensitive`]; sequence-invariant
/// extraction ignores this axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrientationStyle {
    /// Normalize away the gesture's estimated rotation.
    Invariant,
    /// Keep absolute angle information, snapped to the nearest major
    /// orientation.
    #[default]
    Sensitive,
}
