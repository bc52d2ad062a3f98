//! `src/cache/translation_cache.rs`
//! ============================================================================
//! # TranslationCache
//!
//! Session-scoped memo of `raw name → translation`. Backed by a sharded
//! [`DashMap`], so readers of different shards never contend and a writer only
//! locks the shard owning its key. There is no eviction: keys are file names
//! seen during one session.
//!
//! The first value stored for a key wins. Translations are pure functions of
//! the name, so a second `set` for the same key is either identical or a late
//! duplicate and is ignored.

use std::sync::atomic::{AtomicU64, Ordering};

use compact_str::CompactString;
use dashmap::{DashMap, mapref::entry::Entry};
use tracing::debug;

/// Cache statistics for monitoring and debugging
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
    inserts: AtomicU64,
}

impl CacheStats {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
}

impl CacheStatsSnapshot {
    #[expect(clippy::cast_precision_loss, reason = "Expected precision loss")]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug, Default)]
pub struct TranslationCache {
    inner: DashMap<CompactString, CompactString>,
    stats: CacheStats,
}

impl TranslationCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        match self.inner.get(name) {
            Some(value) => {
                self.stats.record_hit();
                Some(value.to_string())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Non-counting presence check, used by the listing to decide which
    /// entries still need a resolution job.
    pub fn peek(&self, name: &str) -> Option<String> {
        self.inner.get(name).map(|value| value.to_string())
    }

    pub fn set(&self, name: &str, value: &str) {
        match self.inner.entry(CompactString::from(name)) {
            Entry::Occupied(existing) => {
                if existing.get().as_str() != value {
                    debug!(
                        marker = "TRANSLATION_CACHE",
                        operation_type = "set_ignored",
                        entry_name = name,
                        kept = %existing.get(),
                        offered = value,
                        "Keeping first translation for name"
                    );
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(CompactString::from(value));
                self.stats.record_insert();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn get_after_set_returns_value() {
        let cache = TranslationCache::new();
        assert_eq!(cache.get("Music"), None);
        cache.set("Music", "Musique");
        assert_eq!(cache.get("Music").as_deref(), Some("Musique"));

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.inserts, 1);
        assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn first_value_is_never_replaced() {
        let cache = TranslationCache::new();
        cache.set("report", "rapport");
        cache.set("report", "compte rendu");
        assert_eq!(cache.get("report").as_deref(), Some("rapport"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn peek_does_not_touch_counters() {
        let cache = TranslationCache::new();
        cache.set("tmp", "temporaire");
        assert_eq!(cache.peek("tmp").as_deref(), Some("temporaire"));
        assert_eq!(cache.peek("var"), None);
        assert_eq!(cache.stats().hits, 0);
        assert_eq!(cache.stats().misses, 0);
    }

    #[test]
    fn concurrent_writers_lose_nothing() {
        let cache = Arc::new(TranslationCache::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for i in 0..250 {
                        let key = format!("file-{t}-{i}");
                        cache.set(&key, &key.to_uppercase());
                        assert!(cache.get(&key).is_some());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("writer thread");
        }

        assert_eq!(cache.len(), 8 * 250);
        assert_eq!(cache.peek("file-3-17").as_deref(), Some("FILE-3-17"));
    }
}
