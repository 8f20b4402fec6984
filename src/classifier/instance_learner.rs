//! Nearest-exemplar instance classifier.

use std::collections::{BTreeMap, HashMap};

use crate::core::math::{minimum_cosine_distance, squared_euclidean_distance};
use crate::error::{Error, Result};
use crate::features::{Instance, SequenceType};

use super::{Learner, Prediction};

/// Instance-based classifier scoring a query against every stored
/// exemplar.
///
/// Each label's score is the best (largest) inverse distance over that
/// label's instances, so adding a close match for a label can only raise
/// its score. Sequence-sensitive vectors are compared with the minimum
/// cosine distance over rotations; sequence-invariant vectors with the
/// mean squared Euclidean distance.
#[derive(Debug, Default)]
pub struct InstanceLearner {
    instances: HashMap<u64, Instance>,
}

impl InstanceLearner {
    /// Create an empty learner.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Learner for InstanceLearner {
    fn add_instance(&mut self, instance: Instance) {
        self.instances.insert(instance.id, instance);
    }

    fn remove_instance(&mut self, gesture_id: u64) {
        self.instances.remove(&gesture_id);
    }

    fn remove_instances(&mut self, label: &str) {
        self.instances
            .retain(|_, instance| instance.label.as_deref() != Some(label));
    }

    fn clear(&mut self) {
        self.instances.clear();
    }

    fn instance_count(&self) -> usize {
        self.instances.len()
    }

    fn classify(&self, sequence_type: SequenceType, query: &[f32]) -> Result<Vec<Prediction>> {
        // BTreeMap keyed by label: aggregation order never leaks into the
        // result, and equal scores come out in lexical label order
        let mut label_scores: BTreeMap<&str, f64> = BTreeMap::new();

        for instance in self.instances.values() {
            let Some(label) = instance.label.as_deref() else {
                continue;
            };
            if instance.vector.len() != query.len() {
                return Err(Error::PolicyMismatch {
                    query: query.len(),
                    stored: instance.vector.len(),
                });
            }

            let distance = match sequence_type {
                SequenceType::Sensitive => minimum_cosine_distance(&instance.vector, query),
                SequenceType::Invariant => squared_euclidean_distance(&instance.vector, query),
            } as f64;

            let weight = if distance == 0.0 {
                f64::MAX
            } else {
                1.0 / distance
            };

            let entry = label_scores.entry(label).or_insert(weight);
            if weight > *entry {
                *entry = weight;
            }
        }

        let mut predictions: Vec<Prediction> = label_scores
            .into_iter()
            .map(|(label, score)| Prediction::new(label, score))
            .collect();
        // Stable sort on a lexically ordered input: ties stay in label order
        predictions.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(predictions)
    }

    fn name(&self) -> &str {
        "instance-learner"
    }
}
