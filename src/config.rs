//! Store configuration loaded from YAML with built-in defaults.
//!
//! ```yaml
//! path: data/gestures.bin
//! sequence_type: sensitive
//! orientation_style: invariant
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::features::{OrientationStyle, SequenceType};

/// Config load error
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// I/O error
    Io(String),
    /// Parse error
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Gesture store configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backing file for the persisted store
    #[serde(default = "default_store_path")]
    pub path: String,

    /// Sequence policy applied at extraction time
    #[serde(default)]
    pub sequence_type: SequenceType,

    /// Orientation policy applied at extraction time
    #[serde(default)]
    pub orientation_style: OrientationStyle,
}

fn default_store_path() -> String {
    "gestures.bin".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            sequence_type: SequenceType::default(),
            orientation_style: OrientationStyle::default(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path (configs/store.yaml), falling
    /// back to built-in defaults when the file does not exist.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new("configs/store.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
