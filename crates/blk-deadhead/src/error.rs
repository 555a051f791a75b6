//! Deadhead-subsystem error type.

use thiserror::Error;

/// Errors produced by `blk-deadhead`.  Lookups never fail; only loading can.
#[derive(Debug, Error)]
pub enum DeadheadError {
    #[error("segment parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DeadheadResult<T> = Result<T, DeadheadError>;
