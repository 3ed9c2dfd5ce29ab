use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use lru::LruCache;
use tracing::debug;

use crate::planner::constants::DEFAULT_CACHE_MAX_ENTRIES;

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CACHE_MAX_ENTRIES) {
    Some(n) => n,
    None => unreachable!(),
};

/// Lifetime and size bound shared by the catalog and recipe caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    pub ttl: Duration,
    /// Zero falls back to the default capacity.
    pub max_entries: usize,
}

#[derive(Debug)]
struct Entry<V> {
    value: V,
    /// `None` when `now + ttl` is not representable; such entries never expire.
    expires_at: Option<Instant>,
}

impl<V> Entry<V> {
    fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now().checked_add(ttl),
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Time-expiring memoization keyed by call arguments.
///
/// Entries expire once their age reaches the TTL, so a zero TTL never hits.
/// Expired entries are dropped on every insert and the least recently used
/// entry is evicted once `max_entries` is reached. The producer passed to
/// [`TtlCache::get_or_try_insert_with`] runs without holding the lock.
#[derive(Debug)]
pub struct TtlCache<K: Eq + Hash, V> {
    ttl: Duration,
    entries: Mutex<LruCache<K, Entry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(settings: CacheSettings) -> Self {
        let capacity = NonZeroUsize::new(settings.max_entries).unwrap_or(DEFAULT_CAPACITY);
        Self {
            ttl: settings.ttl,
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<K, Entry<V>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fresh value for `key`, evicting it if expired.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.lock();
        let expired = entries.get(key)?.is_expired(Instant::now());
        if expired {
            entries.pop(key);
            return None;
        }
        entries.peek(key).map(|entry| entry.value.clone())
    }

    /// Store a value, dropping expired entries first.
    pub fn insert(&self, key: K, value: V) {
        let mut entries = self.lock();
        let removed = Self::remove_expired(&mut entries);
        if removed > 0 {
            debug!("dropped {} expired cache entries", removed);
        }
        entries.push(key, Entry::new(value, self.ttl));
    }

    /// Return the cached value or compute, store and return a new one.
    ///
    /// Errors from `produce` are returned as-is and nothing is stored.
    pub fn get_or_try_insert_with<E, F>(&self, key: K, produce: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }
        let value = produce()?;
        self.insert(key, value.clone());
        Ok(value)
    }

    /// Drop expired entries, returning how many were removed.
    fn remove_expired(entries: &mut LruCache<K, Entry<V>>) -> usize {
        let now = Instant::now();
        let expired: Vec<K> = entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            entries.pop(key);
        }
        expired.len()
    }

    /// Number of stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::thread;

    fn settings(ttl: Duration, max_entries: usize) -> CacheSettings {
        CacheSettings { ttl, max_entries }
    }

    #[test]
    fn test_hit_within_ttl() {
        let cache = TtlCache::new(settings(Duration::from_secs(60), 16));
        let calls = Cell::new(0);

        for _ in 0..3 {
            let value: Result<u32, ()> = cache.get_or_try_insert_with("breakfast", || {
                calls.set(calls.get() + 1);
                Ok(42)
            });
            assert_eq!(value, Ok(42));
        }
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_zero_ttl_never_hits() {
        let cache = TtlCache::new(settings(Duration::ZERO, 16));
        cache.insert("lunch", 1);
        assert_eq!(cache.get(&"lunch"), None);
        // Expired entry evicted on read.
        assert!(cache.is_empty());
    }

    #[test]
    fn test_errors_not_cached() {
        let cache: TtlCache<&str, u32> = TtlCache::new(settings(Duration::from_secs(60), 16));
        let failed: Result<u32, &str> = cache.get_or_try_insert_with("dinner", || Err("down"));
        assert_eq!(failed, Err("down"));
        assert!(cache.is_empty());

        let ok: Result<u32, &str> = cache.get_or_try_insert_with("dinner", || Ok(7));
        assert_eq!(ok, Ok(7));
    }

    #[test]
    fn test_insert_drops_expired() {
        let cache = TtlCache::new(settings(Duration::ZERO, 16));
        cache.insert(1, "a");
        cache.insert(2, "b");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_expired_entries_dropped_on_insert() {
        let cache = TtlCache::new(settings(Duration::from_millis(1), 20_000));
        for key in 0..10_000u32 {
            let value: Result<u32, ()> = cache.get_or_try_insert_with(key, || Ok(key));
            assert!(value.is_ok());
        }
        thread::sleep(Duration::from_millis(20));

        let value: Result<u32, ()> = cache.get_or_try_insert_with(10_000, || Ok(0));
        assert!(value.is_ok());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_evicts_least_recently_used() {
        let cache = TtlCache::new(settings(Duration::from_secs(60), 2));
        cache.insert("breakfast", 1);
        cache.insert("lunch", 2);
        assert_eq!(cache.get(&"breakfast"), Some(1));

        cache.insert("dinner", 3);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"lunch"), None);
        assert_eq!(cache.get(&"breakfast"), Some(1));
        assert_eq!(cache.get(&"dinner"), Some(3));
    }

    #[test]
    fn test_zero_capacity_uses_default() {
        let cache = TtlCache::new(settings(Duration::from_secs(60), 0));
        for key in 0..DEFAULT_CACHE_MAX_ENTRIES + 10 {
            cache.insert(key, key);
        }
        assert_eq!(cache.len(), DEFAULT_CACHE_MAX_ENTRIES);
    }

    #[test]
    fn test_huge_ttl_does_not_overflow() {
        let cache = TtlCache::new(settings(Duration::MAX, 4));
        cache.insert("lunch", 1);
        assert_eq!(cache.get(&"lunch"), Some(1));
    }

    #[test]
    fn test_distinct_keys() {
        let cache = TtlCache::new(settings(Duration::from_secs(60), 16));
        cache.insert(("lunch", vec!["Vegan"]), 1);
        cache.insert(("lunch", vec![]), 2);
        assert_eq!(cache.get(&("lunch", vec!["Vegan"])), Some(1));
        assert_eq!(cache.get(&("lunch", vec![])), Some(2));
    }
}
