//! Service layer exposed to callers.

/// Persistent palette library: CRUD, collections, search and tagging.
pub mod library;
