//! Offline asset cache for the calculator's static files.
//!
//! Mirrors the service-worker contract: a named cache populated with a
//! fixed asset list at install time, then consulted cache-first on every
//! fetch with a live fallback to the backing source. No invalidation or
//! versioning beyond the static cache name, and no dependency on any
//! calculator state.

use std::collections::HashMap;
use thiserror::Error;

/// Static identifier for the cache generation.
pub const CACHE_NAME: &str = "shop-calc-v1";

/// The fixed set of asset paths cached at install time.
pub const PRECACHE_ASSETS: &[&str] = &[
    "./",
    "./index.html",
    "./style.css",
    "./print.css",
    "./script.js",
    "./manifest.json",
];

/// Errors from cache installation and lookup.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// The asset exists neither in the cache nor at the source.
    #[error("asset '{path}' not found")]
    NotFound { path: String },
}

/// Backing source the cache installs from and falls back to.
pub trait AssetSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError>;
}

/// Cache-first store of static assets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssetCache {
    entries: HashMap<String, Vec<u8>>,
}

impl AssetCache {
    /// Install the cache by fetching every precache asset from the source.
    ///
    /// All-or-nothing: if any listed asset is unavailable the install fails
    /// and no cache is produced.
    pub fn install<S: AssetSource>(source: &S) -> Result<Self, FetchError> {
        let mut entries = HashMap::new();
        for path in PRECACHE_ASSETS {
            entries.insert(path.to_string(), source.fetch(path)?);
        }
        Ok(Self { entries })
    }

    /// Serve an asset, cache-first with a live fallback.
    ///
    /// A cached entry is returned as-is; anything else goes to the source.
    pub fn fetch<S: AssetSource>(&self, path: &str, source: &S) -> Result<Vec<u8>, FetchError> {
        if let Some(bytes) = self.entries.get(path) {
            return Ok(bytes.clone());
        }
        source.fetch(path)
    }

    /// Whether an asset is held in the cache itself.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of cached assets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no assets.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
