//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI root, without a trailing slash
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Six hours; the remote dataset is effectively static
const DEFAULT_REAP_INTERVAL_SECS: u64 = 6 * 60 * 60;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Upper bound for any configured duration (one year); larger values overflow
/// timer arithmetic.
const MAX_DURATION_SECS: u64 = 365 * 24 * 60 * 60;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the PokeAPI v2 endpoints
    pub base_url: String,
    /// Cache reap interval in seconds, always non-zero
    pub cache_reap_interval: u64,
    /// Per-request HTTP timeout in seconds
    pub request_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `CACHE_REAP_INTERVAL` - Reap interval in seconds (default: 21600)
    /// - `REQUEST_TIMEOUT` - HTTP timeout in seconds (default: 30)
    ///
    /// Unparsable, zero or out-of-range durations fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            cache_reap_interval: positive_secs("CACHE_REAP_INTERVAL")
                .unwrap_or(DEFAULT_REAP_INTERVAL_SECS),
            request_timeout: positive_secs("REQUEST_TIMEOUT")
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Reap interval as a `Duration`.
    pub fn reap_interval(&self) -> Duration {
        Duration::from_secs(self.cache_reap_interval)
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

fn positive_secs(var: &str) -> Option<u64> {
    env::var(var)
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&secs: &u64| (1..=MAX_DURATION_SECS).contains(&secs))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_reap_interval: DEFAULT_REAP_INTERVAL_SECS,
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
