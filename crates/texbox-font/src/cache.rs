//! Memoization of glyph lookups.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use texbox_core::logging::targets;
use tracing::{debug, trace};

use crate::error::FontResult;
use crate::font::Font;
use crate::metrics::GlyphInfo;

/// Cache key for glyph lookups.
///
/// Includes the resolution since the same symbol may be measured at
/// several DPIs. The math flag is not part of the key: a symbol is assumed
/// to resolve identically in both modes once it has been cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlyphKey {
    /// The symbol as requested.
    pub symbol: String,
    /// The requested font descriptor.
    pub font: Font,
    dpi_bits: u64,
}

impl GlyphKey {
    /// Create a new cache key.
    pub fn new(symbol: impl Into<String>, font: Font, dpi: f64) -> Self {
        Self {
            symbol: symbol.into(),
            font,
            dpi_bits: dpi.to_bits(),
        }
    }

    /// The resolution of the key.
    pub fn dpi(&self) -> f64 {
        f64::from_bits(self.dpi_bits)
    }
}

/// Statistics about the metrics cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of cached entries.
    pub entries: usize,
    /// Number of lookups answered from the cache.
    pub hits: u64,
    /// Number of lookups that had to be computed.
    pub misses: u64,
}

impl CacheStats {
    /// Cache hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Default)]
struct Inner {
    entries: HashMap<GlyphKey, Arc<GlyphInfo>>,
    hits: u64,
    misses: u64,
}

/// A write-once map from [`GlyphKey`] to resolved glyph data.
///
/// A single mutex guards lookup and insertion, and is held while a missing
/// entry is computed, so each key is computed at most once. Entries are
/// never evicted or replaced. Failed computations are not cached.
#[derive(Default)]
pub struct MetricsCache {
    inner: Mutex<Inner>,
}

impl MetricsCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the entry for `key`, computing and storing it with `f` if it
    /// is missing.
    pub fn get_or_try_insert_with<F>(&self, key: GlyphKey, f: F) -> FontResult<Arc<GlyphInfo>>
    where
        F: FnOnce() -> FontResult<GlyphInfo>,
    {
        let mut inner = self.inner.lock();
        if let Some(info) = inner.entries.get(&key).cloned() {
            inner.hits += 1;
            trace!(target: targets::CACHE, symbol = %key.symbol, "metrics cache hit");
            return Ok(info);
        }

        inner.misses += 1;
        let info = Arc::new(f()?);
        debug!(
            target: targets::CACHE,
            symbol = %key.symbol,
            family = %info.family,
            size = info.size,
            dpi = key.dpi(),
            "metrics cache miss"
        );
        inner.entries.insert(key, Arc::clone(&info));
        Ok(info)
    }

    /// The entry for `key`, if cached. Does not affect statistics.
    pub fn get(&self, key: &GlyphKey) -> Option<Arc<GlyphInfo>> {
        self.inner.lock().entries.get(key).cloned()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            entries: inner.entries.len(),
            hits: inner.hits,
            misses: inner.misses,
        }
    }
}

impl std::fmt::Debug for MetricsCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        f.debug_struct("MetricsCache")
            .field("entries", &stats.entries)
            .field("hits", &stats.hits)
            .field("misses", &stats.misses)
            .finish()
    }
}
