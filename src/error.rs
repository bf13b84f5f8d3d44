//! Error types for password generation.

use thiserror::Error;

/// Errors a generation request can fail with. Both are recoverable: callers
/// are expected to report and re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Requested length is below the accepted floor.
    #[error("password length must be at least {min}, got {got}")]
    InvalidLength { min: usize, got: usize },

    /// No character category enabled, so the pool is empty.
    #[error("select at least one character set")]
    NoCategorySelected,
}
