//! In-memory caches for upstream replies.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

/// Per-key cache where every entry expires `ttl` after insertion.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: Mutex<HashMap<K, (DateTime<Utc>, V)>>,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Fresh value for `key`. Expired entries are dropped on the way.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some((expires_at, value)) if *expires_at > Utc::now() => Some(value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store `value` under `key`, sweeping out everything already expired.
    pub fn insert(&self, key: K, value: V) {
        let now = Utc::now();
        let mut entries = self.entries.lock();
        entries.retain(|_, (expires_at, _)| *expires_at > now);
        entries.insert(key, (expires_after(self.ttl), value));
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

/// A single cached value that stays readable after expiry (for `/api/health`).
pub struct Slot<V> {
    ttl: Duration,
    inner: Mutex<Option<(DateTime<Utc>, V)>>,
}

impl<V: Clone> Slot<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: Mutex::new(None),
        }
    }

    pub fn fresh(&self) -> Option<V> {
        match &*self.inner.lock() {
            Some((expires_at, value)) if *expires_at > Utc::now() => Some(value.clone()),
            _ => None,
        }
    }

    pub fn set(&self, value: V) {
        *self.inner.lock() = Some((expires_after(self.ttl), value));
    }

    pub fn is_filled(&self) -> bool {
        self.inner.lock().is_some()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.inner.lock().as_ref().map(|(at, _)| *at)
    }
}

fn expires_after(ttl: Duration) -> DateTime<Utc> {
    Utc::now() + chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ttl_never_hits() {
        let cache = TtlCache::new(Duration::ZERO);
        cache.insert("1", 5);
        assert_eq!(cache.get(&"1"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn fresh_entry_hits() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("1".to_string(), "v");
        assert_eq!(cache.get(&"1".to_string()), Some("v"));
        assert_eq!(cache.get(&"2".to_string()), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn insert_sweeps_expired_keys() {
        let cache = TtlCache::new(Duration::ZERO);
        for id in 0..100u64 {
            cache.insert(id, "presence");
        }
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn insert_keeps_fresh_keys() {
        let cache = TtlCache::new(Duration::from_secs(60));
        for id in 0..3u64 {
            cache.insert(id, id * 10);
        }
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(&1), Some(10));
    }

    #[test]
    fn slot_keeps_expiry_after_going_stale() {
        let slot = Slot::new(Duration::ZERO);
        assert!(!slot.is_filled());
        slot.set(vec![1, 2]);
        assert!(slot.fresh().is_none());
        assert!(slot.is_filled());
        assert!(slot.expires_at().is_some());
    }
}
