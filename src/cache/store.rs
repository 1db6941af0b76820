//! Cache Store Module
//!
//! Plain HashMap storage of response bodies plus the expiry sweep. Locking
//! lives one level up in [`Cache`](super::Cache).

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage of cached payloads keyed by request URL.
#[derive(Debug, Default)]
pub struct CacheStore {
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// Overwriting resets the key's expiry clock; there is no merge.
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns a copy of the stored bytes, if present.
    ///
    /// Presence is decided by the reaper alone; an entry past its interval
    /// stays readable until the next sweep.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Reap Expired ==
    /// Removes every entry that has outlived `interval` as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap_expired(&mut self, now: Instant, interval: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now, interval));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_new() {
        let store = CacheStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_add_and_get() {
        let mut store = CacheStore::new();

        store.add("key1".to_string(), b"value1".to_vec());

        assert_eq!(store.get("key1"), Some(b"value1".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let store = CacheStore::new();
        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new();

        store.add("key1".to_string(), b"value1".to_vec());
        store.add("key1".to_string(), b"value2".to_vec());

        assert_eq!(store.get("key1"), Some(b"value2".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_empty_value_is_present() {
        let mut store = CacheStore::new();

        store.add("empty".to_string(), Vec::new());

        assert_eq!(store.get("empty"), Some(Vec::new()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_reap_expired() {
        let mut store = CacheStore::new();
        let interval = Duration::from_secs(10);

        store.add("old".to_string(), b"a".to_vec());
        tokio::time::advance(Duration::from_secs(6)).await;
        store.add("young".to_string(), b"b".to_vec());
        tokio::time::advance(Duration::from_secs(5)).await;

        let removed = store.reap_expired(Instant::now(), interval);

        assert_eq!(removed, 1);
        assert_eq!(store.get("old"), None);
        assert_eq!(store.get("young"), Some(b"b".to_vec()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_overwrite_resets_expiry() {
        let mut store = CacheStore::new();
        let interval = Duration::from_secs(10);

        store.add("key".to_string(), b"v1".to_vec());
        tokio::time::advance(Duration::from_secs(8)).await;
        store.add("key".to_string(), b"v2".to_vec());
        tokio::time::advance(Duration::from_secs(8)).await;

        assert_eq!(store.reap_expired(Instant::now(), interval), 0);
        assert_eq!(store.get("key"), Some(b"v2".to_vec()));
    }
}
