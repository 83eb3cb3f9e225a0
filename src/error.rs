// ⚠️ Error Types - Ingestion + query failures
// One enum for the whole library; binaries wrap it with anyhow context.

use crate::store::{IndividualId, WorkId};
use thiserror::Error;

/// Main error type for the award-interval library
#[derive(Error, Debug)]
pub enum AwardsError {
    /// Record file could not be opened or read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited data (unequal field counts, bad encoding, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row lacks a required column
    #[error("missing required column `{column}` in header")]
    MissingColumn { column: &'static str },

    /// Required value is blank on a data row
    #[error("line {line}: required field `{field}` is empty")]
    MissingField { line: u64, field: &'static str },

    /// `year` is not an integer
    #[error("line {line}: invalid year `{value}`")]
    InvalidYear { line: u64, value: String },

    /// Work id was not issued by this store
    #[error("unknown work id {0}")]
    UnknownWork(WorkId),

    /// Individual id was not issued by this store
    #[error("unknown individual id {0}")]
    UnknownIndividual(IndividualId),
}

impl AwardsError {
    /// True for errors caused by the content of the record file
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            AwardsError::Csv(_)
                | AwardsError::MissingColumn { .. }
                | AwardsError::MissingField { .. }
                | AwardsError::InvalidYear { .. }
        )
    }
}

/// Convenience Result type
pub type Result<T> = std::result::Result<T, AwardsError>;
