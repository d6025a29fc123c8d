//! The cache store contract consumed by the render core.

use std::time::Duration;

/// A key-value store with TTL semantics.
///
/// The render core only needs these three operations; everything else
/// (eviction policy, capacity, concurrency safety) is the store's own
/// business. Entries past their TTL must behave as absent from both
/// `has` and `get`.
pub trait CacheStore: Send + Sync {
    /// Whether a live (unexpired) entry exists for the key.
    fn has(&self, key: &str) -> bool;

    /// Fetch a live entry's value, or `None` if absent or expired.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value under the key, live for `ttl` from now.
    /// Overwrites any existing entry.
    fn put(&self, key: &str, value: String, ttl: Duration);
}
