//! Location of the on-disk palette store.

use std::{env, path::PathBuf};

use tracing::info;

/// Default location on disk for the palette store file.
const DEFAULT_STORE_PATH: &str = "data/palette-studio.json";
/// Environment variable that overrides [`DEFAULT_STORE_PATH`].
const STORE_PATH_ENV: &str = "PALETTE_STUDIO_DATA_PATH";

/// Resolved location of the persisted palette store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// File that holds the serialized key-value entries.
    pub path: PathBuf,
}

impl StoreConfig {
    /// Resolve the store path from the environment, falling back to the
    /// default location.
    #[must_use]
    pub fn resolve() -> Self {
        let path = env::var(STORE_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH));
        info!(path = %path.display(), "resolved palette store path");
        Self { path }
    }

    /// Use an explicit path (tests and tools).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}
