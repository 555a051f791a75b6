//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where a core operation can fail underneath them.

use thiserror::Error;

/// Errors produced by `blk-core`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid service time {0:?}: expected H:MM:SS")]
    InvalidTime(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `blk-core`.
pub type CoreResult<T> = Result<T, CoreError>;
