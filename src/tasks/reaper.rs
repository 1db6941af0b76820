//! Cache Reap Task
//!
//! Background task that periodically sweeps expired entries out of a cache store.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that sweeps `store` every `interval`.
///
/// Each tick removes entries whose `created_at + interval` is at or before
/// the tick time. The first sweep happens one full interval after this call,
/// not immediately. The lock is held only for the sweep itself.
///
/// # Arguments
/// * `store` - shared reference to the cache store
/// * `interval` - sweep period, also the entry lifetime; must be non-zero
///
/// # Returns
/// A JoinHandle for the spawned task; aborting it stops the sweeps.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new()));
/// let reaper = spawn_reap_task(store.clone(), Duration::from_secs(3600));
/// // Later, during shutdown:
/// reaper.abort();
/// ```
pub fn spawn_reap_task(store: Arc<Mutex<CacheStore>>, interval: Duration) -> JoinHandle<()> {
    let mut ticker = time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tokio::spawn(async move {
        debug!(interval_ms = interval.as_millis() as u64, "cache reaper started");

        loop {
            let tick = ticker.tick().await;

            let (removed, remaining) = {
                let mut guard = store.lock().await;
                let removed = guard.reap_expired(tick, interval);
                (removed, guard.len())
            };

            if removed > 0 {
                info!(removed, remaining, "cache reap: removed expired entries");
            } else {
                debug!(remaining, "cache reap: no expired entries");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_reap_task_removes_expired_entries() {
        let store = Arc::new(Mutex::new(CacheStore::new()));
        store
            .lock()
            .await
            .add("expire_soon".to_string(), b"value".to_vec());

        let handle = spawn_reap_task(store.clone(), Duration::from_secs(1));

        time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(store.lock().await.get("expire_soon"), None);
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reap_task_preserves_fresh_entries() {
        let store = Arc::new(Mutex::new(CacheStore::new()));
        let handle = spawn_reap_task(store.clone(), Duration::from_secs(1));

        time::sleep(Duration::from_millis(600)).await;
        store
            .lock()
            .await
            .add("young".to_string(), b"value".to_vec());

        // First sweep at 1s sees an entry 400ms old.
        time::sleep(Duration::from_millis(500)).await;

        assert_eq!(store.lock().await.get("young"), Some(b"value".to_vec()));
        handle.abort();
    }

    #[tokio::test]
    async fn test_reap_task_can_be_aborted() {
        let store = Arc::new(Mutex::new(CacheStore::new()));

        let handle = spawn_reap_task(store, Duration::from_secs(1));
        handle.abort();

        time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
