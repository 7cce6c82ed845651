//! Whole-result views: one wish, completed wishes, pending wishes and
//! wishes of one category.
//!
//! Each view is a single TTL-bound value, populated by reads and evicted by
//! writes. Unlike the paginated lists, empty results are cached too.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use wishlist_core::cache::{
    category_wishes_key, category_wishes_pattern, completed_wishes_key, deserialize_wish,
    deserialize_wishes, pending_wishes_key, serialize_wish, serialize_wishes, wish_key,
    CacheError, SerializationError, ViewStore,
};
use wishlist_core::wish::Wish;

use super::CacheRead;

/// A list-valued derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView<'a> {
    Completed,
    Pending,
    Category(&'a str),
}

impl ListView<'_> {
    pub fn key(&self, owner_id: Uuid) -> String {
        match self {
            ListView::Completed => completed_wishes_key(owner_id),
            ListView::Pending => pending_wishes_key(owner_id),
            ListView::Category(category) => category_wishes_key(owner_id, category),
        }
    }
}

/// Cache-aside store for the derived views.
pub struct DerivedViewCache {
    store: Arc<dyn ViewStore>,
    ttl: Duration,
}

impl DerivedViewCache {
    pub fn new(store: Arc<dyn ViewStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub async fn get_item(&self, owner_id: Uuid, wish_id: Uuid) -> CacheRead<Wish> {
        self.get(&wish_key(owner_id, wish_id), deserialize_wish)
            .await
    }

    pub async fn put_item(&self, wish: &Wish) {
        let key = wish_key(wish.owner_id, wish.id);
        self.put(&key, serialize_wish(wish)).await;
    }

    pub async fn evict_item(&self, owner_id: Uuid, wish_id: Uuid) {
        self.evict(&wish_key(owner_id, wish_id)).await;
    }

    pub async fn get_list(&self, owner_id: Uuid, view: ListView<'_>) -> CacheRead<Vec<Wish>> {
        self.get(&view.key(owner_id), deserialize_wishes).await
    }

    pub async fn put_list(&self, owner_id: Uuid, view: ListView<'_>, wishes: &[Wish]) {
        self.put(&view.key(owner_id), serialize_wishes(wishes))
            .await;
    }

    pub async fn evict_completed(&self, owner_id: Uuid) {
        self.evict(&completed_wishes_key(owner_id)).await;
    }

    pub async fn evict_pending(&self, owner_id: Uuid) {
        self.evict(&pending_wishes_key(owner_id)).await;
    }

    /// Evicts every category view of the owner.
    ///
    /// The category a mutation touched is not always known (an update may
    /// move a wish between categories), so all of them go.
    pub async fn evict_categories(&self, owner_id: Uuid) {
        self.evict_pattern(&category_wishes_pattern(owner_id)).await;
    }

    async fn get<T>(
        &self,
        key: &str,
        decode: fn(&[u8]) -> Result<T, SerializationError>,
    ) -> CacheRead<T> {
        let bytes = match self.store.get(key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::trace!(%key, "Cache miss for view");
                return CacheRead::Miss;
            }
            Err(CacheError::Corrupted { reason, .. }) => {
                tracing::warn!(%key, %reason, "Store reported a corrupted view, evicting");
                self.evict(key).await;
                return CacheRead::Miss;
            }
            Err(err) => {
                tracing::warn!(%key, error = %err, "Failed to read cached view");
                return CacheRead::Unavailable;
            }
        };

        match decode(&bytes) {
            Ok(value) => {
                tracing::trace!(%key, "Cache hit for view");
                CacheRead::Hit(value)
            }
            Err(err) => {
                tracing::warn!(%key, error = %err, "Cached view is corrupted, evicting");
                self.evict(key).await;
                CacheRead::Miss
            }
        }
    }

    async fn put(&self, key: &str, encoded: Result<Vec<u8>, SerializationError>) {
        let bytes = match encoded {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(%key, error = %err, "Failed to serialize view");
                return;
            }
        };
        if let Err(err) = self.store.set(key, &bytes, Some(self.ttl)).await {
            tracing::warn!(%key, error = %err, "Failed to cache view");
        }
    }

    async fn evict(&self, key: &str) {
        if let Err(err) = self.store.delete(key).await {
            tracing::warn!(%key, error = %err, "Failed to evict view");
        }
    }

    pub(super) async fn evict_pattern(&self, pattern: &str) {
        if let Err(err) = self.store.delete_pattern(pattern).await {
            tracing::warn!(%pattern, error = %err, "Failed to evict views");
        }
    }
}
