//! Paginated list view.
//!
//! The whole sorted collection of an owner is cached once per sort order as
//! a list in the backing store. Pages are index ranges over that list, so
//! requests that differ only in page or size share one entry.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use wishlist_core::cache::{
    deserialize_wish_elements, namespace_pattern, serialize_wish_elements, user_wishes_key,
    user_wishes_pattern, CacheError, Namespace, ViewStore,
};
use wishlist_core::wish::{page_bounds, SortSpec, Wish};

use super::CacheRead;

/// Cache of fully sorted wish lists, one per (owner, sort).
pub struct ListPaginationCache {
    store: Arc<dyn ViewStore>,
    ttl: Duration,
}

impl ListPaginationCache {
    pub fn new(store: Arc<dyn ViewStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Reads the `[offset, offset + size - 1]` slice of the cached list.
    ///
    /// An empty slice is reported as [`CacheRead::Miss`]: an absent key and
    /// an offset past the end look the same, and both are answered by a
    /// rebuild.
    pub async fn get_page(
        &self,
        owner_id: Uuid,
        sort: SortSpec,
        offset: u64,
        size: u64,
    ) -> CacheRead<Vec<Wish>> {
        let Some((start, stop)) = page_bounds(offset, size) else {
            return CacheRead::Miss;
        };
        let key = user_wishes_key(owner_id, sort);

        let elements = match self.store.range(&key, start, stop).await {
            Ok(elements) => elements,
            Err(CacheError::Corrupted { reason, .. }) => {
                tracing::warn!(%owner_id, %key, %reason, "Store reported a corrupted list, evicting");
                self.evict_key(&key).await;
                return CacheRead::Miss;
            }
            Err(err) => {
                tracing::warn!(%owner_id, %key, error = %err, "Failed to read cached page");
                return CacheRead::Unavailable;
            }
        };

        if elements.is_empty() {
            tracing::trace!(%owner_id, %key, offset, size, "Cache miss for page");
            return CacheRead::Miss;
        }

        match deserialize_wish_elements(&elements) {
            Ok(wishes) => {
                tracing::trace!(%owner_id, %key, offset, count = wishes.len(), "Cache hit for page");
                CacheRead::Hit(wishes)
            }
            Err(err) => {
                tracing::warn!(%owner_id, %key, error = %err, "Cached list is corrupted, evicting");
                self.evict_key(&key).await;
                CacheRead::Miss
            }
        }
    }

    /// Length of the cached list, or 0 if it is absent or unreadable.
    pub async fn get_total_count(&self, owner_id: Uuid, sort: SortSpec) -> u64 {
        let key = user_wishes_key(owner_id, sort);
        match self.store.list_len(&key).await {
            Ok(len) => len,
            Err(err) => {
                tracing::warn!(%owner_id, %key, error = %err, "Failed to read cached list length");
                0
            }
        }
    }

    /// Replaces the cached list with `wishes` and resets its TTL.
    ///
    /// Empty lists are not cached.
    pub async fn populate(&self, owner_id: Uuid, sort: SortSpec, wishes: &[Wish]) {
        if wishes.is_empty() {
            tracing::trace!(%owner_id, %sort, "Not caching empty list");
            return;
        }

        let key = user_wishes_key(owner_id, sort);
        let elements = match serialize_wish_elements(wishes) {
            Ok(elements) => elements,
            Err(err) => {
                tracing::warn!(%owner_id, %key, error = %err, "Failed to serialize list");
                return;
            }
        };

        match self.store.replace_list(&key, &elements, self.ttl).await {
            Ok(()) => tracing::debug!(%owner_id, %key, count = wishes.len(), "Cached list"),
            Err(err) => tracing::warn!(%owner_id, %key, error = %err, "Failed to cache list"),
        }
    }

    /// Evicts the cached lists of every sort order the owner has used.
    pub async fn evict(&self, owner_id: Uuid) {
        let pattern = user_wishes_pattern(owner_id);
        match self.store.delete_pattern(&pattern).await {
            Ok(()) => tracing::debug!(%owner_id, "Evicted cached lists"),
            Err(err) => tracing::warn!(%owner_id, error = %err, "Failed to evict cached lists"),
        }
    }

    async fn evict_key(&self, key: &str) {
        if let Err(err) = self.store.delete(key).await {
            tracing::warn!(%key, error = %err, "Failed to evict corrupted list");
        }
    }

    /// Evicts the cached lists of every owner.
    pub async fn evict_all(&self) {
        let pattern = namespace_pattern(Namespace::UserWishes);
        if let Err(err) = self.store.delete_pattern(&pattern).await {
            tracing::warn!(%pattern, error = %err, "Failed to evict all cached lists");
        }
    }
}
