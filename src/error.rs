//! Error types for txtree

use thiserror::Error;

/// Result type alias for txtree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in txtree operations
///
/// Every variant signals a caller or precondition violation; none are
/// recoverable by retry, and no operation falls back to a partial result
/// after raising one.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot build a tree from an empty transaction sequence")]
    EmptyInput,

    #[error("invalid node access: {0}")]
    Structure(String),

    #[error("trees have different heights")]
    ShapeMismatch,

    #[error("descent for index {expected} landed on leaf {found}")]
    IndexMismatch { expected: u64, found: u64 },
}
