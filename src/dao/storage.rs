//! Storage abstraction for the palette library.

use std::error::Error;

use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends regardless of the underlying medium.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backend failed to read or persist a payload.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// What the backend was doing when it failed.
        message: String,
        /// The underlying failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }
}

/// Synchronous key-value persistence used by the palette library.
///
/// Keys that were never written read back as `None`; callers treat absence
/// as an empty list.
pub trait KeyValueStore: Send {
    /// Read the payload stored under `key`, if any.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    /// Persist `value` under `key`, replacing any previous payload.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}
