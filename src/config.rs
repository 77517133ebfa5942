//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Requested number of shards, rounded up to a power of two by the cache
    pub shard_count: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Sweeper tick interval in milliseconds
    pub sweep_interval_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SHARD_COUNT` - Requested shard count (default: 256)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `SWEEP_INTERVAL_MS` - Sweeper interval in milliseconds (default: 1000)
    ///
    /// Unparseable values, and a zero sweep interval, fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            shard_count: parse_env("SHARD_COUNT").unwrap_or(defaults.shard_count),
            server_port: parse_env("SERVER_PORT").unwrap_or(defaults.server_port),
            sweep_interval_ms: parse_env("SWEEP_INTERVAL_MS")
                .filter(|&ms: &u64| ms > 0)
                .unwrap_or(defaults.sweep_interval_ms),
        }
    }

    /// Sweeper tick interval.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_millis(self.sweep_interval_ms)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shard_count: 256,
            server_port: 8080,
            sweep_interval_ms: 1000,
        }
    }
}
