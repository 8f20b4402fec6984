//! Error types for the gesture store.

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Gesture store error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before a field could be read completely
    #[error("truncated input while reading {0}")]
    Truncated(&'static str),

    /// A field was read completely but holds an invalid value
    #[error("invalid {field}: {reason}")]
    Decode {
        /// Field being decoded when the error occurred
        field: &'static str,
        /// What was wrong with the value
        reason: String,
    },

    /// Caller supplied a gesture incompatible with the active policy
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Query and stored feature vectors have different lengths
    #[error("feature vector length mismatch: query has {query} elements, stored instance has {stored}")]
    PolicyMismatch {
        /// Query vector length
        query: usize,
        /// Stored instance vector length
        stored: usize,
    },
}
