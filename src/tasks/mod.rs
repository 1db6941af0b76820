//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Cache reap: removes entries older than the cache interval on a fixed period

mod reaper;

pub use reaper::spawn_reap_task;
