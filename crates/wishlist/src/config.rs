use std::{env, num::NonZeroUsize, time::Duration};

const DEFAULT_CACHE_MAX_ENTRIES: usize = 10_000;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// TTL of every cached view in milliseconds (default: 600,000)
    pub cache_ttl_ms: u64,
    /// Maximum number of in-memory view store entries (default: 10,000)
    #[cfg_attr(not(feature = "memory"), allow(dead_code))]
    pub cache_max_entries: usize,
    /// Latency bound of a single view store call in milliseconds (default: 250)
    pub cache_op_timeout_ms: u64,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[cfg_attr(not(feature = "redis"), allow(dead_code))]
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_MS` - View TTL in milliseconds (default: 600,000)
    /// - `CACHE_MAX_ENTRIES` - Maximum in-memory entries (default: 10,000)
    /// - `CACHE_OP_TIMEOUT_MS` - Per-call view store timeout (default: 250)
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    pub fn from_env() -> Self {
        Self {
            cache_ttl_ms: env::var("CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(600_000),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_MAX_ENTRIES),
            cache_op_timeout_ms: env::var("CACHE_OP_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(250),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        }
    }

    /// Get the view TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    /// Get the per-call view store timeout as a Duration.
    pub fn cache_op_timeout(&self) -> Duration {
        Duration::from_millis(self.cache_op_timeout_ms)
    }

    /// In-memory store capacity. A zero setting falls back to the default.
    #[cfg_attr(not(feature = "memory"), allow(dead_code))]
    pub fn cache_capacity(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.cache_max_entries).unwrap_or_else(|| {
            tracing::warn!(
                default = DEFAULT_CACHE_MAX_ENTRIES,
                "CACHE_MAX_ENTRIES must be > 0, using default"
            );
            NonZeroUsize::new(DEFAULT_CACHE_MAX_ENTRIES).unwrap_or(NonZeroUsize::MIN)
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
