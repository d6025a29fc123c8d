//! Moka-backed cache store with per-entry TTL.

use std::sync::Arc;
use std::time::{Duration, Instant};

use ::moka::Expiry;
use ::moka::sync::Cache;

use super::{CacheConfig, CacheStore};

/// A cached value plus the lifetime it was stored with.
#[derive(Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// Expiry policy reading the TTL each entry was stored with.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    // Overwrites must take the new put's TTL; moka's default would keep
    // the previous entry's remaining lifetime.
    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// The bundled [`CacheStore`] backend.
///
/// Thread-safe and clone-friendly (clones share the same underlying cache).
/// Expiry is handled by Moka: entries past their TTL are invisible to reads.
pub struct MokaStore {
    inner: Arc<Cache<String, Entry>>,
}

impl Clone for MokaStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl MokaStore {
    /// Create a new store with the given config.
    pub fn new(config: CacheConfig) -> Self {
        let mut builder = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(PerEntryTtl);

        if let Some(tti) = config.tti {
            builder = builder.time_to_idle(tti);
        }

        Self {
            inner: Arc::new(builder.build()),
        }
    }

    /// Number of entries currently held.
    ///
    /// Note: may lag behind concurrent operations and pending evictions.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}

impl CacheStore for MokaStore {
    fn has(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).map(|entry| entry.value)
    }

    fn put(&self, key: &str, value: String, ttl: Duration) {
        self.inner.insert(key.to_string(), Entry { value, ttl });
    }
}

impl std::fmt::Debug for MokaStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaStore")
            .field("entry_count", &self.inner.entry_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_roundtrip() {
        let store = MokaStore::new(CacheConfig::default());

        store.put("k", "v".into(), Duration::from_secs(60));
        assert!(store.has("k"));
        assert_eq!(store.get("k"), Some("v".to_string()));
    }

    #[test]
    fn test_absent_key() {
        let store = MokaStore::new(CacheConfig::default());

        assert!(!store.has("missing"));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_put_overwrites() {
        let store = MokaStore::new(CacheConfig::default());

        store.put("k", "first".into(), Duration::from_secs(60));
        store.put("k", "second".into(), Duration::from_secs(60));
        assert_eq!(store.get("k"), Some("second".to_string()));
    }

    #[test]
    fn test_overwrite_takes_new_ttl() {
        let store = MokaStore::new(CacheConfig::default());

        store.put("k", "short-lived".into(), Duration::from_millis(100));
        store.put("k", "long-lived".into(), Duration::from_secs(60));

        std::thread::sleep(Duration::from_millis(400));

        // The overwrite's TTL governs, not the remaining lifetime of the
        // entry it replaced.
        assert_eq!(store.get("k"), Some("long-lived".to_string()));

        // And the other way around: a short overwrite expires on its own
        // schedule even when the original entry had longer to live.
        store.put("j", "long-lived".into(), Duration::from_secs(60));
        store.put("j", "short-lived".into(), Duration::from_millis(100));
        std::thread::sleep(Duration::from_millis(300));
        assert_eq!(store.get("j"), None);
    }

    #[test]
    fn test_ttl_expiry() {
        let store = MokaStore::new(CacheConfig::default());

        store.put("short", "v".into(), Duration::from_millis(100));
        store.put("long", "v".into(), Duration::from_secs(60));
        assert!(store.has("short"));

        std::thread::sleep(Duration::from_millis(300));

        assert!(!store.has("short"));
        assert_eq!(store.get("short"), None);
        // Entries with a longer TTL are unaffected.
        assert_eq!(store.get("long"), Some("v".to_string()));
    }
}
