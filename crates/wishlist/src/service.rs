//! Wishlist service layer.
//!
//! Reads go through the cached views (cache-aside). Writes go to the
//! repository first and then tell the [`CacheCoordinator`] which views to
//! drop. Cache trouble never turns into an error here: the coordinator
//! reports it as [`CacheRead::Unavailable`] and the service reads the
//! repository directly.

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use wishlist_core::storage::{self, WishRepository};
use wishlist_core::wish::{
    slice_page, total_pages, CreateWishRequest, ListWishesQuery, Result, SortSpec,
    UpdateWishRequest, Wish, WishError, WishPage,
};

use crate::views::{CacheCoordinator, CacheRead, ListView};

/// CRUD operations over wishes, scoped by owner.
pub struct WishlistService {
    repository: Arc<dyn WishRepository>,
    cache: Arc<CacheCoordinator>,
}

impl WishlistService {
    pub fn new(repository: Arc<dyn WishRepository>, cache: Arc<CacheCoordinator>) -> Self {
        Self { repository, cache }
    }

    pub fn cache(&self) -> &CacheCoordinator {
        &self.cache
    }

    /// Lists one page of the owner's wishes.
    ///
    /// Pages are sliced out of the cached full list. When the slice comes
    /// back empty the full list is rebuilt from the repository and cached
    /// before slicing again.
    pub async fn list_wishes(&self, owner_id: Uuid, query: &ListWishesQuery) -> Result<WishPage> {
        let sort = query.validate()?;
        let offset = query.offset();
        let size = query.size;
        let pagination = self.cache.pagination();

        let (wishes, total) = match pagination.get_page(owner_id, sort, offset, size).await {
            CacheRead::Hit(wishes) => match pagination.get_total_count(owner_id, sort).await {
                // The list vanished between the two reads.
                0 => self.read_page_through(owner_id, sort, offset, size).await?,
                total => (wishes, total),
            },
            CacheRead::Miss => {
                let all = self.repository.find_all(owner_id, sort).await?;
                pagination.populate(owner_id, sort, &all).await;

                let wishes = match pagination.get_page(owner_id, sort, offset, size).await {
                    CacheRead::Hit(wishes) => wishes,
                    _ => slice_page(&all, offset, size),
                };
                let total = match pagination.get_total_count(owner_id, sort).await {
                    0 => all.len() as u64,
                    total => total,
                };
                (wishes, total)
            }
            CacheRead::Unavailable => self.read_page_through(owner_id, sort, offset, size).await?,
        };

        Ok(WishPage {
            wishes,
            total_items: total,
            total_pages: total_pages(total, size),
            current_page: query.page,
        })
    }

    /// Lists another owner's wishes on behalf of `caller_id`.
    ///
    /// Only the owner may do so.
    pub async fn list_user_wishes(
        &self,
        caller_id: Uuid,
        owner_id: Uuid,
        query: &ListWishesQuery,
    ) -> Result<WishPage> {
        if caller_id != owner_id {
            tracing::debug!(%caller_id, %owner_id, "Rejected cross-owner listing");
            return Err(WishError::Unauthorized);
        }
        self.list_wishes(owner_id, query).await
    }

    pub async fn get_wish(&self, owner_id: Uuid, wish_id: Uuid) -> Result<Wish> {
        let derived = self.cache.derived();
        let populate = match derived.get_item(owner_id, wish_id).await {
            CacheRead::Hit(wish) => return Ok(wish),
            CacheRead::Miss => true,
            CacheRead::Unavailable => false,
        };

        let wish = self.find_owned(owner_id, wish_id).await?;
        if populate {
            derived.put_item(&wish).await;
        }
        Ok(wish)
    }

    pub async fn create_wish(&self, owner_id: Uuid, request: CreateWishRequest) -> Result<Wish> {
        request.validate()?;
        let wish = self.repository.save(&request.into_wish(owner_id)).await?;

        self.cache.on_create(owner_id).await;

        tracing::debug!(wish_id = %wish.id, %owner_id, "Wish created");
        Ok(wish)
    }

    /// Replaces the editable fields of a wish. Completion is left alone.
    pub async fn update_wish(
        &self,
        owner_id: Uuid,
        wish_id: Uuid,
        request: UpdateWishRequest,
    ) -> Result<Wish> {
        request.validate()?;
        let mut wish = self.find_owned(owner_id, wish_id).await?;
        request.apply_to(&mut wish);
        let wish = self.repository.save(&wish).await?;

        self.cache.on_update(owner_id, wish_id).await;

        tracing::debug!(%wish_id, %owner_id, "Wish updated");
        Ok(wish)
    }

    pub async fn delete_wish(&self, owner_id: Uuid, wish_id: Uuid) -> Result<()> {
        let wish = self.find_owned(owner_id, wish_id).await?;
        self.repository.delete(&wish).await?;

        self.cache
            .on_delete(owner_id, wish_id, wish.completed)
            .await;

        tracing::debug!(%wish_id, %owner_id, was_completed = wish.completed, "Wish deleted");
        Ok(())
    }

    /// Marks a wish completed. Completing it again refreshes `completed_at`.
    pub async fn complete_wish(&self, owner_id: Uuid, wish_id: Uuid) -> Result<Wish> {
        let mut wish = self.find_owned(owner_id, wish_id).await?;
        wish.mark_completed(Utc::now());
        let wish = self.repository.save(&wish).await?;

        self.cache.on_complete(owner_id, wish_id).await;

        tracing::debug!(%wish_id, %owner_id, "Wish completed");
        Ok(wish)
    }

    pub async fn completed_wishes(&self, owner_id: Uuid) -> Result<Vec<Wish>> {
        self.read_list(
            owner_id,
            ListView::Completed,
            self.repository.find_by_completion(owner_id, true),
        )
        .await
    }

    pub async fn pending_wishes(&self, owner_id: Uuid) -> Result<Vec<Wish>> {
        self.read_list(
            owner_id,
            ListView::Pending,
            self.repository.find_by_completion(owner_id, false),
        )
        .await
    }

    pub async fn wishes_by_category(&self, owner_id: Uuid, category: &str) -> Result<Vec<Wish>> {
        self.read_list(
            owner_id,
            ListView::Category(category),
            self.repository.find_by_category(owner_id, category),
        )
        .await
    }

    /// Free-text search. Never cached.
    pub async fn search_wishes(&self, owner_id: Uuid, term: &str) -> Result<Vec<Wish>> {
        Ok(self.repository.search(owner_id, term).await?)
    }

    async fn find_owned(&self, owner_id: Uuid, wish_id: Uuid) -> Result<Wish> {
        self.repository
            .find_by_id(wish_id, owner_id)
            .await?
            .ok_or(WishError::NotFound(wish_id))
    }

    async fn read_page_through(
        &self,
        owner_id: Uuid,
        sort: SortSpec,
        offset: u64,
        size: u64,
    ) -> Result<(Vec<Wish>, u64)> {
        let page = self
            .repository
            .find_page(owner_id, sort, offset, size)
            .await?;
        Ok((page.wishes, page.total))
    }

    /// Cache-aside read of a list-valued derived view. `fetch` only runs
    /// when the view is not cached.
    async fn read_list<F>(&self, owner_id: Uuid, view: ListView<'_>, fetch: F) -> Result<Vec<Wish>>
    where
        F: Future<Output = storage::Result<Vec<Wish>>> + Send,
    {
        let derived = self.cache.derived();
        match derived.get_list(owner_id, view).await {
            CacheRead::Hit(wishes) => Ok(wishes),
            CacheRead::Miss => {
                let wishes = fetch.await?;
                derived.put_list(owner_id, view, &wishes).await;
                Ok(wishes)
            }
            CacheRead::Unavailable => Ok(fetch.await?),
        }
    }
}
