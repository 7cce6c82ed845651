use async_trait::async_trait;
use uuid::Uuid;

use crate::wish::{SortSpec, Wish};

use super::Result;

/// A page of wishes read straight from the source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPage {
    pub wishes: Vec<Wish>,
    /// Total number of wishes the owner has, across all pages.
    pub total: u64,
}

/// The source of truth for wishes.
///
/// Every query is scoped by owner; no operation reads across owners.
#[async_trait]
pub trait WishRepository: Send + Sync {
    /// Gets one page of an owner's wishes in the given order.
    async fn find_page(
        &self,
        owner_id: Uuid,
        sort: SortSpec,
        offset: u64,
        limit: u64,
    ) -> Result<StoredPage>;

    /// Gets all of an owner's wishes in the given order.
    async fn find_all(&self, owner_id: Uuid, sort: SortSpec) -> Result<Vec<Wish>>;

    /// Gets a wish by id, only if it belongs to the owner.
    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Wish>>;

    /// Gets all of an owner's wishes in the given completion state.
    async fn find_by_completion(&self, owner_id: Uuid, completed: bool) -> Result<Vec<Wish>>;

    /// Gets all of an owner's wishes carrying the given category label.
    async fn find_by_category(&self, owner_id: Uuid, category: &str) -> Result<Vec<Wish>>;

    /// Case-insensitive search over title and description.
    async fn search(&self, owner_id: Uuid, term: &str) -> Result<Vec<Wish>>;

    /// Inserts or updates a wish and returns the stored version.
    ///
    /// The store owns the `created_at`/`updated_at` timestamps.
    async fn save(&self, wish: &Wish) -> Result<Wish>;

    /// Deletes a wish.
    async fn delete(&self, wish: &Wish) -> Result<()>;
}
