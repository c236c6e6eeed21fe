//! Error types for cache persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or persisting the backing file.
///
/// Lookup itself is infallible; these only surface from [`flush`] or are
/// downgraded to warnings inside [`open`] and the per-miss persistence.
///
/// [`flush`]: crate::ComponentCache::flush
/// [`open`]: crate::ComponentCache::open
#[derive(Debug, Error)]
pub enum CacheError {
    /// Failed to read the backing file.
    #[error("failed to read cache file '{path}': {source}")]
    ReadFile {
        /// Path of the backing file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the backing file.
    #[error("failed to write cache file '{path}': {source}")]
    WriteFile {
        /// Path of the backing file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the directory holding the backing file.
    #[error("failed to create cache directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a valid serialized cache.
    #[error("failed to parse cache file '{path}': {source}")]
    Parse {
        /// Path of the backing file.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Serialization of the in-memory map failed.
    #[error("failed to serialize cache: {0}")]
    Serialize(#[from] serde_json::Error),
}
