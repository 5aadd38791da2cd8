//! Error types for recomendar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for recomendar operations.
///
/// Distinguishes record-level failures (absorbed during corpus construction),
/// corpus-level failures (fatal to snapshot construction), and query-level
/// failures (recoverable, surfaced to the caller).
///
/// # Examples
///
/// ```
/// use recomendar::error::RecomendarError;
///
/// let err = RecomendarError::TitleNotFound {
///     title: "Unknown Movie".to_string(),
/// };
/// assert!(err.to_string().contains("Unknown Movie"));
/// ```
#[derive(Debug)]
pub enum RecomendarError {
    /// A record's structured attribute fields could not be parsed.
    ///
    /// Absorbed by the corpus builder (the record is dropped); only surfaced
    /// when a caller normalizes a single record directly.
    MalformedRecord {
        /// Identifier of the offending record
        id: u64,
        /// What failed to parse
        reason: String,
    },

    /// Every input record was dropped; no corpus can be built.
    EmptyCorpus,

    /// A recommendation query whose title matches no corpus item.
    TitleNotFound {
        /// The query title
        title: String,
    },

    /// A recommendation query whose id matches no corpus item.
    ItemNotFound {
        /// The query id
        id: u64,
    },

    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for RecomendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecomendarError::MalformedRecord { id, reason } => {
                write!(f, "Malformed record {id}: {reason}")
            }
            RecomendarError::EmptyCorpus => {
                write!(f, "Empty corpus: no record survived normalization")
            }
            RecomendarError::TitleNotFound { title } => {
                write!(f, "Title not found in corpus: {title}")
            }
            RecomendarError::ItemNotFound { id } => {
                write!(f, "Item not found in corpus: id {id}")
            }
            RecomendarError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected}, got {actual}")
            }
            RecomendarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RecomendarError {}

impl From<&str> for RecomendarError {
    fn from(msg: &str) -> Self {
        RecomendarError::Other(msg.to_string())
    }
}

impl From<String> for RecomendarError {
    fn from(msg: String) -> Self {
        RecomendarError::Other(msg)
    }
}

impl RecomendarError {
    /// Create a dimension mismatch error with descriptive context.
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create a malformed record error.
    #[must_use]
    pub fn malformed_record(id: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            id,
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RecomendarError>;
