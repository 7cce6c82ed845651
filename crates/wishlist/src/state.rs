//! Shared application state.
//!
//! Holds the wishlist service and, through it, the single
//! [`CacheCoordinator`] every request handler shares.

use std::sync::Arc;

use wishlist_core::cache::ViewStore;
use wishlist_core::storage::WishRepository;

use crate::cache::TimeoutViewStore;
use crate::config::Config;
use crate::service::WishlistService;
use crate::storage::InMemoryWishRepository;
use crate::views::CacheCoordinator;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub wishlist: Arc<WishlistService>,
}

impl AppState {
    /// Wires a repository and a view store into the service.
    ///
    /// Every view store call is bounded by `config.cache_op_timeout()`.
    pub fn build(
        repository: Arc<dyn WishRepository>,
        store: Arc<dyn ViewStore>,
        config: &Config,
    ) -> Self {
        let store = Arc::new(TimeoutViewStore::new(store, config.cache_op_timeout()));
        let cache = Arc::new(CacheCoordinator::new(store, config.cache_ttl()));
        Self {
            wishlist: Arc::new(WishlistService::new(repository, cache)),
        }
    }

    /// In-memory repository with the in-memory view store.
    #[cfg(feature = "memory")]
    pub fn in_memory(config: &Config) -> Self {
        let store = Arc::new(crate::cache::MemoryViewStore::new(config.cache_capacity()));
        Self::build(Arc::new(InMemoryWishRepository::new()), store, config)
    }

    /// Builds the state for the view store backend compiled in.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        #[cfg(feature = "memory")]
        {
            tracing::info!(capacity = config.cache_max_entries, "Using in-memory view store");
            Ok(Self::in_memory(config))
        }

        #[cfg(feature = "redis")]
        {
            use anyhow::Context;

            tracing::info!(url = %config.redis_url, "Using Redis view store");
            let store = crate::cache::RedisViewStore::new(&config.redis_url)
                .await
                .context("failed to connect to Redis")?;
            Ok(Self::build(
                Arc::new(InMemoryWishRepository::new()),
                Arc::new(store),
                config,
            ))
        }
    }
}

#[cfg(feature = "memory")]
impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(&Config::default())
    }
}
