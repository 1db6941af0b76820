//! Cache Module
//!
//! Provides in-memory caching of response bodies with interval-based reaping.

mod entry;
mod handle;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use store::CacheStore;
