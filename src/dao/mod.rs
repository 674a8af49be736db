//! Persistence layer: entity models and key-value store backends.

/// File-backed and in-memory store backends.
pub mod json_file;
/// Persisted entity definitions.
pub mod models;
/// Storage abstraction and errors.
pub mod storage;
