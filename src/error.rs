//! Errors surfaced by the palette library services.

use thiserror::Error;

use crate::color::ColorParseError;
use crate::dao::storage::StorageError;

/// Errors that can occur in palette library operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage backend failed to read or persist a payload.
    #[error("storage unavailable")]
    Unavailable(#[source] StorageError),
    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Invalid input provided by the caller.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        ServiceError::Unavailable(err)
    }
}

impl From<ColorParseError> for ServiceError {
    fn from(err: ColorParseError) -> Self {
        ServiceError::InvalidInput(err.to_string())
    }
}
