//! The gesture store façade.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::classifier::{InstanceLearner, Learner, Prediction};
use crate::config::StoreConfig;
use crate::core::types::Gesture;
use crate::error::Result;
use crate::features::{Instance, OrientationStyle, SequenceType};

use super::format;

/// Maintains labeled gesture examples and predicts entries for new
/// gestures.
///
/// The store owns the label mapping, one classifier, and the persistence
/// codec. Every gesture in the mapping has exactly one instance in the
/// classifier and vice versa; all mutations go through a single internal
/// add/remove path so the two can never drift apart.
///
/// Mutating operations take `&mut self`; `recognize` and the accessors
/// take `&self` and may run concurrently with each other. `save` and
/// `load` block on local disk I/O only and report failure as a boolean
/// rather than an error.
pub struct GestureStore {
    path: PathBuf,
    sequence_type: SequenceType,
    orientation_style: OrientationStyle,
    entries: BTreeMap<String, Vec<Gesture>>,
    classifier: Box<dyn Learner>,
    changed: bool,
}

impl GestureStore {
    /// Create an empty store backed by the given file path.
    ///
    /// Nothing is read from disk until [`load`](Self::load) is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sequence_type: SequenceType::default(),
            orientation_style: OrientationStyle::default(),
            entries: BTreeMap::new(),
            classifier: Box::new(InstanceLearner::new()),
            changed: false,
        }
    }

    /// Create a store from a configuration.
    pub fn with_config(config: &StoreConfig) -> Self {
        let mut store = Self::new(config.path.clone());
        store.sequence_type = config.sequence_type;
        store.orientation_style = config.orientation_style;
        store
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The active sequence policy.
    pub fn sequence_type(&self) -> SequenceType {
        self.sequence_type
    }

    /// Set the sequence policy.
    ///
    /// Instances already stored are not recomputed; classifying across a
    /// dimension change fails with
    /// [`crate::Error::PolicyMismatch`] until the store is rebuilt
    /// (for example by calling [`load`](Self::load) again).
    pub fn set_sequence_type(&mut self, sequence_type: SequenceType) {
        self.sequence_type = sequence_type;
    }

    /// The active orientation policy.
    pub fn orientation_style(&self) -> OrientationStyle {
        self.orientation_style
    }

    /// Set the orientation policy. Stored instances are not recomputed.
    pub fn set_orientation_style(&mut self, orientation_style: OrientationStyle) {
        self.orientation_style = orientation_style;
    }

    /// All entry names in the store. No ordering guarantee.
    pub fn entry_names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// The gestures trained under an entry, or `None` when the entry does
    /// not exist.
    ///
    /// Returns a copy; mutating it does not affect the store.
    pub fn gestures(&self, entry_name: &str) -> Option<Vec<Gesture>> {
        self.entries.get(entry_name).cloned()
    }

    /// Number of instances currently participating in prediction.
    pub fn instance_count(&self) -> usize {
        self.classifier.instance_count()
    }

    /// Whether the store has mutations not yet written by
    /// [`save`](Self::save).
    pub fn has_unsaved_changes(&self) -> bool {
        self.changed
    }

    /// Add an example gesture under an entry.
    ///
    /// A blank entry name is ignored without error. Extraction failures
    /// (a multi-stroke gesture under the sequence-sensitive policy)
    /// propagate and leave the store unchanged.
    pub fn add_gesture(&mut self, entry_name: &str, gesture: Gesture) -> Result<()> {
        if entry_name.trim().is_empty() {
            return Ok(());
        }

        let instance = Instance::extract(
            &gesture,
            self.sequence_type,
            self.orientation_style,
            Some(entry_name),
        )?;
        self.insert_example(entry_name, gesture, instance);
        Ok(())
    }

    /// Remove a gesture from an entry, matching by gesture identifier.
    ///
    /// The entry is deleted once its last gesture is removed. Unknown
    /// entries and gestures are ignored.
    pub fn remove_gesture(&mut self, entry_name: &str, gesture: &Gesture) {
        let Some(gestures) = self.entries.get_mut(entry_name) else {
            return;
        };
        gestures.retain(|g| g.id() != gesture.id());

        // No empty-but-present entries survive
        if gestures.is_empty() {
            self.entries.remove(entry_name);
        }

        self.classifier.remove_instance(gesture.id());
        self.changed = true;
    }

    /// Remove an entry and every instance trained under it.
    pub fn remove_entry(&mut self, entry_name: &str) {
        self.entries.remove(entry_name);
        self.classifier.remove_instances(entry_name);
        self.changed = true;
    }

    /// Predict the most likely entries for a gesture.
    ///
    /// Predictions are sorted by descending confidence; an empty store
    /// yields an empty list.
    pub fn recognize(&self, gesture: &Gesture) -> Result<Vec<Prediction>> {
        let instance = Instance::extract(gesture, self.sequence_type, self.orientation_style, None)?;
        self.classifier.classify(self.sequence_type, &instance.vector)
    }

    /// Write the store to its backing file.
    ///
    /// A clean store is a successful no-op. The file is written to a
    /// sibling temp path and renamed into place, so a failed save leaves
    /// the previous file intact. Failures are logged and reported as
    /// `false`; the dirty flag is cleared only on success.
    pub fn save(&mut self) -> bool {
        if !self.changed {
            return true;
        }

        match self.write_to_disk() {
            Ok(()) => {
                log::debug!(
                    "saved {} entries ({} instances) to {}",
                    self.entries.len(),
                    self.classifier.instance_count(),
                    self.path.display()
                );
                self.changed = false;
                true
            }
            Err(e) => {
                log::warn!("failed to save gesture store to {}: {}", self.path.display(), e);
                false
            }
        }
    }

    /// Load the store from its backing file, replacing in-memory state.
    ///
    /// A missing file returns `false` without logging (nothing to load).
    /// A recognized version fully replaces the label mapping and rebuilds
    /// the classifier under the current policies. An unrecognized version
    /// reads no entries and returns `true`. I/O and decode failures are
    /// logged and return `false`, leaving in-memory state unspecified.
    pub fn load(&mut self) -> bool {
        if !self.path.exists() {
            return false;
        }

        match self.read_from_disk() {
            Ok(()) => true,
            Err(e) => {
                log::warn!(
                    "failed to load gesture store from {}: {}",
                    self.path.display(),
                    e
                );
                false
            }
        }
    }

    /// The single mutation path coupling the label mapping and the
    /// classifier.
    fn insert_example(&mut self, entry_name: &str, gesture: Gesture, instance: Instance) {
        self.entries
            .entry(entry_name.to_string())
            .or_default()
            .push(gesture);
        self.classifier.add_instance(instance);
        self.changed = true;
    }

    fn write_to_disk(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("tmp");
        let written: Result<()> = (|| {
            let mut writer = BufWriter::new(File::create(&tmp)?);
            format::write_entries(&mut writer, &self.entries)?;
            writer.flush()?;
            Ok(())
        })();

        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn read_from_disk(&mut self) -> Result<()> {
        let mut reader = BufReader::new(File::open(&self.path)?);
        let version = format::read_version(&mut reader)?;
        match version {
            format::FILE_FORMAT_VERSION => self.read_v1(&mut reader),
            other => {
                log::debug!(
                    "ignoring gesture store {} with unrecognized format version {}",
                    self.path.display(),
                    other
                );
                Ok(())
            }
        }
    }

    fn read_v1<R: Read>(&mut self, reader: &mut R) -> Result<()> {
        let loaded = format::read_entries_v1(reader)?;

        self.entries.clear();
        self.classifier.clear();
        for (name, gestures) in loaded {
            for gesture in &gestures {
                let instance = Instance::extract(
                    gesture,
                    self.sequence_type,
                    self.orientation_style,
                    Some(&name),
                )?;
                self.classifier.add_instance(instance);
            }
            self.entries.insert(name, gestures);
        }
        self.changed = false;
        Ok(())
    }
}
