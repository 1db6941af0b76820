//! Shared Cache Handle
//!
//! Wraps a [`CacheStore`] in a single exclusive lock and ties the lifetime of
//! its background reaper to the handle.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::CacheStore;
use crate::tasks::spawn_reap_task;

// == Cache ==
/// Time-bounded response cache shared between callers and its reaper.
///
/// Every operation takes the lock only for the map access itself. The reaper
/// runs until [`Cache::stop`] is called or the cache is dropped.
#[derive(Debug)]
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
    reaper: JoinHandle<()>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Entries older than `interval` are removed on the next sweep, and
    /// sweeps run every `interval`, so an entry lives at most about twice
    /// the interval.
    ///
    /// # Panics
    /// Panics if `interval` is zero or if called outside a tokio runtime.
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "cache reap interval must be non-zero");

        let store = Arc::new(Mutex::new(CacheStore::new()));
        let reaper = spawn_reap_task(store.clone(), interval);

        Self { store, reaper }
    }

    // == Add ==
    /// Inserts or overwrites `key`, restarting its expiry clock.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        let key = key.into();
        debug!(key = %key, bytes = value.len(), "cache add");
        self.store.lock().await.add(key, value);
    }

    // == Get ==
    /// Returns the cached bytes for `key`, or `None` if absent.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().await.get(key)
    }

    // == Length ==
    /// Number of entries currently held, including any awaiting the next sweep.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    // == Is Empty ==
    /// Returns true if no entries are held.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Stop ==
    /// Stops the background reaper. Calling it more than once is harmless.
    ///
    /// Entries already stored stay readable but will no longer expire.
    pub fn stop(&self) {
        if !self.reaper.is_finished() {
            debug!("stopping cache reaper");
        }
        self.reaper.abort();
    }

    /// Returns true once the reaper has exited.
    pub fn is_stopped(&self) -> bool {
        self.reaper.is_finished()
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}
