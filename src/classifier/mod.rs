//! Instance store and classification.

mod instance_learner;

pub use instance_learner::InstanceLearner;

use crate::error::Result;
use crate::features::{Instance, SequenceType};

/// A (label, confidence) pair returned by classification.
///
/// Scores are finite and totally ordered; they do not sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Entry name of the predicted label
    pub name: String,
    /// Confidence score, higher is more likely
    pub score: f64,
}

impl Prediction {
    /// Create a new prediction.
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Trait for incremental instance-based classifiers.
///
/// One concrete implementation exists ([`InstanceLearner`]); the trait
/// keeps the store façade independent of the classification strategy.
pub trait Learner: Send {
    /// Add an instance to the store. Never rejects a well-formed vector.
    fn add_instance(&mut self, instance: Instance);

    /// Remove the instance tied to a gesture identifier.
    ///
    /// No-op when the identifier is absent.
    fn remove_instance(&mut self, gesture_id: u64);

    /// Remove every instance carrying the given label.
    fn remove_instances(&mut self, label: &str);

    /// Drop all stored instances.
    fn clear(&mut self);

    /// Number of stored instances.
    fn instance_count(&self) -> usize;

    /// Score the query vector against every stored instance and return
    /// predictions sorted by descending confidence.
    ///
    /// Returns an empty list for an empty store. Fails with
    /// [`crate::Error::PolicyMismatch`] when a stored vector's length
    /// differs from the query's.
    fn classify(&self, sequence_type: SequenceType, query: &[f32]) -> Result<Vec<Prediction>>;

    /// Name of this learner for logging.
    fn name(&self) -> &str;
}
