//! Partitioning error types.

use thiserror::Error;

/// Input problems the caller can fix and should see verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The number of classes must be between 1-{max}.")]
    InvalidClassCount { count: i64, max: i64 },

    #[error("Missing required headers: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error(
        "cannot isolate special-education students into a dedicated class when only one class is requested"
    )]
    DegenerateBudget,
}

/// Errors that can occur while partitioning a roster.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PartitionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("row {row}: malformed numeric value {value:?} in column {column}")]
    MalformedScore {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}: expected {expected} cells, found {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl PartitionError {
    /// Returns `true` for errors that should be reported to the caller
    /// as a client error.
    pub fn is_validation(&self) -> bool {
        matches!(self, PartitionError::Validation(_))
    }

    /// Message safe to hand back across a service boundary.
    ///
    /// Validation errors are returned verbatim; everything else collapses
    /// to a generic message.
    pub fn public_message(&self) -> String {
        match self {
            PartitionError::Validation(e) => e.to_string(),
            _ => "Internal Server Error".to_string(),
        }
    }
}

pub type PartitionResult<T> = Result<T, PartitionError>;
