//! Content-addressed store for rendered components.

use crate::CacheError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Application name used for the cache directory.
const APP_NAME: &str = "ondas";

/// File name of the serialized key → samples map.
const CACHE_FILE: &str = "components.json";

/// Returns the default location of the backing file.
///
/// - Linux: `~/.cache/ondas/components.json`
/// - macOS: `~/Library/Caches/ondas/components.json`
/// - Windows: `%LOCALAPPDATA%\ondas\components.json`
///
/// Falls back to the current directory if the platform cache directory
/// cannot be determined.
pub fn default_cache_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(CACHE_FILE)
}

/// Persistent memo store mapping fingerprint keys to sample buffers.
///
/// Open one at process start, pass it to whatever builds signals, and
/// [`flush`](Self::flush) it at shutdown if you need a durability
/// guarantee beyond the per-miss write.
///
/// Entries are never evicted; see the crate docs for the growth and
/// concurrent-writer caveats.
#[derive(Debug)]
pub struct ComponentCache {
    /// Backing file, or `None` for a purely in-memory cache.
    path: Option<PathBuf>,
    entries: HashMap<String, Vec<f64>>,
    hits: u64,
    misses: u64,
}

impl ComponentCache {
    /// Open a cache backed by `path`.
    ///
    /// A missing, unreadable, or corrupt backing file yields an empty
    /// cache and a warning; it never fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::load(&path) {
            Ok(entries) => entries,
            Err(CacheError::ReadFile { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::debug!(path = %path.display(), "no cache file yet, starting empty");
                HashMap::new()
            }
            Err(err) => {
                tracing::warn!(%err, "unreadable cache file, starting empty");
                HashMap::new()
            }
        };
        tracing::debug!(
            path = %path.display(),
            entries = entries.len(),
            "opened component cache"
        );
        Self {
            path: Some(path),
            entries,
            hits: 0,
            misses: 0,
        }
    }

    /// Open a cache at the platform default location.
    pub fn at_default_location() -> Self {
        Self::open(default_cache_path())
    }

    /// Create a cache with no backing file.
    ///
    /// Lookups and inserts behave identically but nothing is persisted.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    fn load(path: &Path) -> Result<HashMap<String, Vec<f64>>, CacheError> {
        let raw = fs::read_to_string(path).map_err(|source| CacheError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| CacheError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Look up `key`, running `compute` and persisting on a miss.
    ///
    /// A miss rewrites the entire backing map synchronously before
    /// returning. If that write fails, the result is still returned and
    /// the failure is logged and only durability is lost.
    pub fn get_or_compute(&mut self, key: &str, compute: impl FnOnce() -> Vec<f64>) -> &[f64] {
        if self.entries.contains_key(key) {
            self.hits += 1;
            tracing::debug!(key, "component cache hit");
        } else {
            self.misses += 1;
            tracing::debug!(key, "component cache miss");
            self.entries.insert(key.to_owned(), compute());
            if let Err(err) = self.flush() {
                tracing::warn!(%err, "cache write failed, result kept in memory only");
            }
        }
        self.entries[key].as_slice()
    }

    /// Returns the cached samples for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&[f64]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Serialize the whole map to the backing file.
    ///
    /// A no-op for in-memory caches.
    pub fn flush(&self) -> Result<(), CacheError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| CacheError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let serialized = serde_json::to_string(&self.entries)?;
        fs::write(path, serialized).map_err(|source| CacheError::WriteFile {
            path: path.clone(),
            source,
        })
    }

    /// Number of cached components.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from memory since this cache was opened.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that had to run their compute closure.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Backing file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
