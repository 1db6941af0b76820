//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store against a plain HashMap model and the
//! shared cache under concurrent access.

use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{Cache, CacheStore};

// == Strategies ==
/// Generates URL-like cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9/-]{1,32}".prop_map(|path| format!("https://pokeapi.co/api/v2/{path}"))
}

/// Generates opaque payloads, including empty ones
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, value: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Add { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any sequence of adds and gets agrees with a last-write-wins map.
    #[test]
    fn prop_store_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new();
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Add { key, value } => {
                    store.add(key.clone(), value.clone());
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(store.get(&key), model.get(&key).cloned());
                }
            }
        }

        prop_assert_eq!(store.len(), model.len());
    }

    // A second add to the same key replaces the first.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = CacheStore::new();

        store.add(key.clone(), value1);
        store.add(key.clone(), value2.clone());

        prop_assert_eq!(store.get(&key), Some(value2));
        prop_assert_eq!(store.len(), 1);
    }

    // A sweep strictly before one interval keeps everything; a sweep at or
    // after one interval clears everything.
    #[test]
    fn prop_reap_respects_interval(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 1..20),
        interval_ms in 1u64..10_000,
    ) {
        let start = Instant::now();
        let mut store = CacheStore::new();
        for (key, value) in &entries {
            store.add(key.clone(), value.clone());
        }
        let interval = Duration::from_millis(interval_ms);

        // Entries were stamped at or after `start`.
        let early = start + interval - Duration::from_nanos(1);
        prop_assert_eq!(store.reap_expired(early, interval), 0);
        prop_assert_eq!(store.len(), entries.len());

        let late = Instant::now() + interval;
        prop_assert_eq!(store.reap_expired(late, interval), entries.len());
        prop_assert!(store.is_empty());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // Concurrent adds on disjoint keys never lose an entry and each key
    // ends with its task's last write.
    #[test]
    fn prop_concurrent_disjoint_writes(
        entries in prop::collection::hash_map(key_strategy(), (value_strategy(), value_strategy()), 1..32)
    ) {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(4)
            .enable_all()
            .build()
            .unwrap();

        rt.block_on(async {
            let cache = Arc::new(Cache::new(Duration::from_secs(3600)));

            let handles: Vec<_> = entries
                .iter()
                .map(|(key, (first, last))| {
                    let cache = Arc::clone(&cache);
                    let (key, first, last) = (key.clone(), first.clone(), last.clone());
                    tokio::spawn(async move {
                        cache.add(key.clone(), first).await;
                        let _ = cache.get(&key).await;
                        cache.add(key, last).await;
                    })
                })
                .collect();

            for handle in handles {
                handle.await.expect("Task should not panic");
            }

            prop_assert_eq!(cache.len().await, entries.len());
            for (key, (_, last)) in &entries {
                prop_assert_eq!(cache.get(key).await, Some(last.clone()));
            }
            Ok(())
        })?;
    }
}

// == Additional Unit Tests for Edge Cases ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_add_get_blocking() {
        // tokio-test drives the cache from a plain #[test].
        tokio_test::block_on(async {
            let cache = Cache::new(Duration::from_secs(1));
            cache.add("k", b"v".to_vec()).await;
            assert_eq!(cache.get("k").await, Some(b"v".to_vec()));
        });
    }

    #[test]
    fn test_reap_on_empty_store() {
        let mut store = CacheStore::new();
        let removed = store.reap_expired(Instant::now(), Duration::from_secs(1));
        assert_eq!(removed, 0);
    }
}
