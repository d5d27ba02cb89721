//! # Error Types

/// Errors from sgtok operations.
#[derive(Debug, thiserror::Error)]
pub enum SgtokError {
    /// Vocab size is below the minimum (256, the u8 space).
    #[error("vocab size ({size}) must be >= 256")]
    VocabSizeTooSmall {
        /// The vocab size that was too small.
        size: usize,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Symbol id space is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Model file version header does not match the expected literal.
    #[error("model version mismatch: expected {expected:?}, found {found:?}")]
    VersionMismatch {
        /// The expected version literal.
        expected: &'static str,
        /// The version line found in the file.
        found: String,
    },

    /// A model file did not parse into the expected shape.
    #[error("malformed model: {0}")]
    MalformedModel(String),

    /// Decode was given a symbol id with no vocabulary entry.
    #[error("unknown symbol id: {token}")]
    UnknownToken {
        /// The unresolvable symbol id.
        token: String,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for sgtok operations.
pub type SgResult<T> = core::result::Result<T, SgtokError>;
