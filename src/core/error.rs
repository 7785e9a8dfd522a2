//! Engine error types.
//!
//! Load-time and configuration failures are fatal to the caller. Lookup and
//! sampling failures are recoverable: re-prompt or retry. Guess rejections
//! are not errors at all; see `GuessOutcome`.

use thiserror::Error;

/// Errors raised by the puzzle engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A source record lacks one of the identity fields.
    #[error("Malformed record {index}: missing identity field '{field}'")]
    MalformedRecord { index: usize, field: String },

    /// A display name does not resolve to exactly one entity.
    #[error("Unknown entity: '{name}'")]
    UnknownEntity { name: String },

    /// The sampler exhausted its restart budget without building a grid.
    #[error("Could not generate puzzle from {catalog_size} properties after {restarts} restarts")]
    InsufficientData { restarts: u32, catalog_size: usize },

    /// Two properties in one catalog share a label.
    #[error("Duplicate property label: {label:?}")]
    DuplicateLabel { label: String },

    /// Cell coordinates outside the 3x3 grid.
    #[error("Invalid cell ({row}, {col})")]
    InvalidCell { row: usize, col: usize },
}

/// Result alias for engine operations.
pub type GridResult<T> = Result<T, GridError>;
