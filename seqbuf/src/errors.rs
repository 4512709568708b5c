//! Error types for sequence buffer operations

use thiserror::Error;

/// Errors that can occur while reading a count or building a sequence buffer
#[derive(Debug, Error)]
pub enum SeqBufError {
    /// Storage for the requested number of elements could not be obtained
    #[error("Memory allocation failed")]
    AllocationFailed {
        /// Number of elements that were requested
        requested: usize,
    },

    /// Requested count is negative
    #[error("Memory allocation failed: count must be non-negative, got {0}")]
    InvalidArgument(i64),

    /// Input token is not a decimal integer in range
    #[error("Invalid input '{0}': expected an integer count")]
    InvalidInput(String),

    /// Input ended before any token was read
    #[error("Invalid input: expected an integer count, found end of input")]
    MissingInput,

    /// IO error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SeqBufError {
    /// Returns `true` if the error belongs to the allocation failure class.
    ///
    /// A negative count is reported the same way as an out-of-memory
    /// condition, since both mean no buffer can be handed out.
    #[must_use]
    pub fn is_allocation_failure(&self) -> bool {
        matches!(
            self,
            SeqBufError::AllocationFailed { .. } | SeqBufError::InvalidArgument(_)
        )
    }
}

/// Result type for sequence buffer operations
pub type SeqBufResult<T> = Result<T, SeqBufError>;
