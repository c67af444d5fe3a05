//! Core error type.

use thiserror::Error;

/// Errors produced by `v2x-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `v2x-core`.
pub type CoreResult<T> = Result<T, CoreError>;
