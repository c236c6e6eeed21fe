//! Disk-persisted component memoization for the ondas synthesis engine.
//!
//! Rendering a single band-limited component costs O(n_samples · n_max)
//! trigonometric evaluations, so identical components are memoized across
//! process lifetimes. [`ComponentCache`] is a content-addressed map from a
//! deterministic parameter fingerprint to the rendered sample buffer,
//! serialized as JSON at a fixed filesystem path.
//!
//! The cache is an explicitly constructed value with an open/flush
//! lifecycle: open it once at startup, thread it through the code that
//! needs it:
//!
//! ```rust
//! use ondas_cache::ComponentCache;
//!
//! let mut cache = ComponentCache::in_memory();
//! let samples = cache.get_or_compute("440:1:0:sine:100:44100:1", || vec![0.0; 4]);
//! assert_eq!(samples.len(), 4);
//! ```
//!
//! Two deliberate behaviors:
//!
//! - every miss rewrites the *entire* backing map synchronously, trading
//!   throughput for a trivially simple durability story;
//! - entries are never evicted, so the backing file grows without bound.
//!
//! A missing or unreadable backing file degrades to an empty cache rather
//! than failing. Concurrent processes sharing one backing file are not
//! coordinated; the last writer wins and a torn write can corrupt the file
//! (which the next open then treats as empty).

mod error;
mod store;

pub use error::CacheError;
pub use store::{ComponentCache, default_cache_path};
