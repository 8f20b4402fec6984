//! Feature vector extraction from gestures.

use crate::core::math::{centroid, magnitude, rotate, translate};
use crate::core::types::Gesture;
use crate::error::{Error, Result};

use super::sampling::{PATCH_SAMPLE_SIZE, SEQUENCE_SAMPLE_SIZE, spatial_sampling, temporal_sampling};
use super::{OrientationStyle, SequenceType};

/// The eight major orientations, multiples of 45° in [-π, π].
/// Orientation-sensitive extraction snaps a gesture's estimated rotation
/// onto the nearest of these, preserving its absolute octant.
const MAJOR_ORIENTATIONS: [f32; 9] = [
    0.0,
    std::f32::consts::FRAC_PI_4,
    std::f32::consts::FRAC_PI_2,
    3.0 * std::f32::consts::FRAC_PI_4,
    std::f32::consts::PI,
    -std::f32::consts::FRAC_PI_4,
    -std::f32::consts::FRAC_PI_2,
    -3.0 * std::f32::consts::FRAC_PI_4,
    -std::f32::consts::PI,
];

/// A feature vector extracted from a gesture under a fixed policy pair.
///
/// Value-like: extracting twice from the same gesture under the same
/// policies yields bit-identical vectors. `label` is `None` when the
/// instance represents an unlabeled query.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// Identifier of the originating gesture
    pub id: u64,
    /// Label the instance was trained under, `None` for queries
    pub label: Option<String>,
    /// The extracted feature vector
    pub vector: Vec<f32>,
}

impl Instance {
    /// Extract a feature vector from `gesture` under the given policies.
    ///
    /// Under [`SequenceType::Sensitive`] only single-stroke gestures are
    /// accepted; a multi-stroke gesture fails with
    /// [`Error::InvalidInput`]. The orientation policy only affects
    /// sequence-sensitive extraction.
    pub fn extract(
        gesture: &Gesture,
        sequence_type: SequenceType,
        orientation_style: OrientationStyle,
        label: Option<&str>,
    ) -> Result<Self> {
        let vector = match sequence_type {
            SequenceType::Invariant => spatial_sampling(gesture, PATCH_SAMPLE_SIZE),
            SequenceType::Sensitive => {
                if gesture.stroke_count() != 1 {
                    return Err(Error::InvalidInput(format!(
                        "sequence-sensitive extraction requires a single-stroke gesture, got {} strokes",
                        gesture.stroke_count()
                    )));
                }
                sequence_vector(gesture, orientation_style)
            }
        };

        Ok(Self {
            id: gesture.id(),
            label: label.map(str::to_string),
            vector,
        })
    }
}

/// Resample, re-orient and normalize a single-stroke gesture.
fn sequence_vector(gesture: &Gesture, orientation_style: OrientationStyle) -> Vec<f32> {
    let mut vector = temporal_sampling(&gesture.strokes()[0], SEQUENCE_SAMPLE_SIZE);

    let (cx, cy) = centroid(&vector);
    // Estimated rotation: angle of the first resampled point about the centroid
    let orientation = (vector[1] - cy).atan2(vector[0] - cx);

    let mut adjustment = -orientation;
    if orientation_style == OrientationStyle::Sensitive {
        for target in MAJOR_ORIENTATIONS {
            let delta = target - orientation;
            if delta.abs() < adjustment.abs() {
                adjustment = delta;
            }
        }
    }

    translate(&mut vector, -cx, -cy);
    rotate(&mut vector, adjustment);

    let m = magnitude(&vector);
    if m > f32::EPSILON {
        for value in &mut vector {
            *value /= m;
        }
    }

    vector
}
