//! Invalidation coordinator.
//!
//! The service layer mutates the source of truth first and only then calls
//! the matching `on_*` method here. Evicting before the write commits would
//! let a concurrent reader repopulate a view with pre-mutation data.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use wishlist_core::cache::{namespace_pattern, stale_views, Mutation, Namespace, StaleView, ViewStore};

use super::{DerivedViewCache, ListPaginationCache};

/// Single handle over every cached view, shared by all request handlers.
pub struct CacheCoordinator {
    pagination: ListPaginationCache,
    derived: DerivedViewCache,
}

impl CacheCoordinator {
    /// Creates a coordinator whose views all live in `store` and expire
    /// after `ttl`.
    pub fn new(store: Arc<dyn ViewStore>, ttl: Duration) -> Self {
        Self {
            pagination: ListPaginationCache::new(store.clone(), ttl),
            derived: DerivedViewCache::new(store, ttl),
        }
    }

    pub fn pagination(&self) -> &ListPaginationCache {
        &self.pagination
    }

    pub fn derived(&self) -> &DerivedViewCache {
        &self.derived
    }

    /// A wish was created for `owner_id`.
    pub async fn on_create(&self, owner_id: Uuid) {
        self.invalidate(owner_id, Mutation::Created).await;
    }

    /// A wish's editable fields changed.
    pub async fn on_update(&self, owner_id: Uuid, wish_id: Uuid) {
        self.invalidate(owner_id, Mutation::Updated { wish_id })
            .await;
    }

    /// A wish was deleted. `was_completed` is its state before deletion.
    pub async fn on_delete(&self, owner_id: Uuid, wish_id: Uuid, was_completed: bool) {
        self.invalidate(
            owner_id,
            Mutation::Deleted {
                wish_id,
                was_completed,
            },
        )
        .await;
    }

    /// A wish was marked completed.
    pub async fn on_complete(&self, owner_id: Uuid, wish_id: Uuid) {
        self.invalidate(owner_id, Mutation::Completed { wish_id })
            .await;
    }

    /// Evicts every view of every owner.
    pub async fn evict_all(&self) {
        self.pagination.evict_all().await;
        for namespace in Namespace::ALL
            .into_iter()
            .filter(|ns| *ns != Namespace::UserWishes)
        {
            self.derived
                .evict_pattern(&namespace_pattern(namespace))
                .await;
        }
        tracing::info!("Evicted all cached views");
    }

    async fn invalidate(&self, owner_id: Uuid, mutation: Mutation) {
        let views = stale_views(mutation);
        for view in &views {
            match *view {
                StaleView::Item(wish_id) => self.derived.evict_item(owner_id, wish_id).await,
                StaleView::Pagination => self.pagination.evict(owner_id).await,
                StaleView::Completed => self.derived.evict_completed(owner_id).await,
                StaleView::Pending => self.derived.evict_pending(owner_id).await,
                StaleView::Category => self.derived.evict_categories(owner_id).await,
            }
        }
        tracing::debug!(%owner_id, ?mutation, evicted = views.len(), "Invalidated cached views");
    }
}
