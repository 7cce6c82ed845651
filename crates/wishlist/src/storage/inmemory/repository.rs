//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use wishlist_core::storage::{RepositoryError, Result, StoredPage, WishRepository};
use wishlist_core::wish::{slice_page, sort_wishes, SortSpec, Wish};

/// In-memory source of truth for wishes.
///
/// Timestamps handed out by [`WishRepository::save`] are strictly
/// increasing, even when the wall clock stalls or steps backwards.
#[derive(Debug, Clone)]
pub struct InMemoryWishRepository {
    wishes: Arc<RwLock<HashMap<Uuid, Wish>>>,
    last_tick: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl Default for InMemoryWishRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryWishRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            wishes: Arc::new(RwLock::new(HashMap::new())),
            last_tick: Arc::new(Mutex::new(None)),
        }
    }

    async fn tick(&self) -> DateTime<Utc> {
        let mut last = self.last_tick.lock().await;
        let now = Utc::now();
        let next = match *last {
            Some(prev) if now <= prev => prev + Duration::microseconds(1),
            _ => now,
        };
        *last = Some(next);
        next
    }

    async fn collect<F>(&self, owner_id: Uuid, sort: SortSpec, filter: F) -> Vec<Wish>
    where
        F: Fn(&Wish) -> bool,
    {
        let wishes = self.wishes.read().await;
        let mut owned: Vec<Wish> = wishes
            .values()
            .filter(|w| w.owner_id == owner_id && filter(w))
            .cloned()
            .collect();
        sort_wishes(&mut owned, sort);
        owned
    }
}

#[async_trait]
impl WishRepository for InMemoryWishRepository {
    async fn find_page(
        &self,
        owner_id: Uuid,
        sort: SortSpec,
        offset: u64,
        limit: u64,
    ) -> Result<StoredPage> {
        let all = self.collect(owner_id, sort, |_| true).await;
        Ok(StoredPage {
            wishes: slice_page(&all, offset, limit),
            total: all.len() as u64,
        })
    }

    async fn find_all(&self, owner_id: Uuid, sort: SortSpec) -> Result<Vec<Wish>> {
        Ok(self.collect(owner_id, sort, |_| true).await)
    }

    async fn find_by_id(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Wish>> {
        let wishes = self.wishes.read().await;
        Ok(wishes.get(&id).filter(|w| w.owner_id == owner_id).cloned())
    }

    async fn find_by_completion(&self, owner_id: Uuid, completed: bool) -> Result<Vec<Wish>> {
        Ok(self
            .collect(owner_id, SortSpec::default(), |w| w.completed == completed)
            .await)
    }

    async fn find_by_category(&self, owner_id: Uuid, category: &str) -> Result<Vec<Wish>> {
        Ok(self
            .collect(owner_id, SortSpec::default(), |w| w.in_category(category))
            .await)
    }

    async fn search(&self, owner_id: Uuid, term: &str) -> Result<Vec<Wish>> {
        Ok(self
            .collect(owner_id, SortSpec::default(), |w| w.matches_term(term))
            .await)
    }

    async fn save(&self, wish: &Wish) -> Result<Wish> {
        let now = self.tick().await;
        let mut wishes = self.wishes.write().await;

        let mut stored = wish.clone();
        match wishes.get(&wish.id) {
            Some(existing) if existing.owner_id != wish.owner_id => {
                return Err(RepositoryError::AlreadyExists {
                    entity_type: "Wish",
                    id: wish.id.to_string(),
                });
            }
            Some(existing) => stored.created_at = existing.created_at,
            None => stored.created_at = now,
        }
        stored.updated_at = now;

        wishes.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, wish: &Wish) -> Result<()> {
        let mut wishes = self.wishes.write().await;
        match wishes.get(&wish.id) {
            Some(existing) if existing.owner_id == wish.owner_id => {
                wishes.remove(&wish.id);
                Ok(())
            }
            _ => Err(RepositoryError::NotFound {
                entity_type: "Wish",
                id: wish.id.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wishlist_core::wish::SortField;

    fn owner() -> Uuid {
        Uuid::from_u128(1)
    }

    async fn seed(repo: &InMemoryWishRepository, titles: &[&str]) -> Vec<Wish> {
        let mut saved = Vec::new();
        for title in titles {
            saved.push(repo.save(&Wish::new(owner(), *title)).await.unwrap());
        }
        saved
    }

    #[tokio::test]
    async fn test_save_assigns_monotonic_timestamps() {
        let repo = InMemoryWishRepository::new();
        let saved = seed(&repo, &["A", "B", "C"]).await;

        assert!(saved[0].created_at < saved[1].created_at);
        assert!(saved[1].created_at < saved[2].created_at);
        assert_eq!(saved[0].created_at, saved[0].updated_at);
    }

    #[tokio::test]
    async fn test_update_keeps_created_at_and_bumps_updated_at() {
        let repo = InMemoryWishRepository::new();
        let original = repo.save(&Wish::new(owner(), "Original")).await.unwrap();

        let mut changed = original.clone();
        changed.title = "Changed".to_string();
        let updated = repo.save(&changed).await.unwrap();

        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at > original.updated_at);
        assert_eq!(repo.find_all(owner(), SortSpec::default()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_all_default_order_is_newest_first() {
        let repo = InMemoryWishRepository::new();
        seed(&repo, &["A", "B", "C"]).await;

        let titles: Vec<String> = repo
            .find_all(owner(), SortSpec::default())
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.title)
            .collect();
        assert_eq!(titles, vec!["C", "B", "A"]);

        let asc = repo
            .find_all(owner(), SortSpec::asc(SortField::Title))
            .await
            .unwrap();
        assert_eq!(asc[0].title, "A");
    }

    #[tokio::test]
    async fn test_find_page_reports_total() {
        let repo = InMemoryWishRepository::new();
        seed(&repo, &["A", "B", "C"]).await;

        let page = repo
            .find_page(owner(), SortSpec::default(), 2, 2)
            .await
            .unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.wishes.len(), 1);
        assert_eq!(page.wishes[0].title, "A");
    }

    #[tokio::test]
    async fn test_queries_are_owner_scoped() {
        let repo = InMemoryWishRepository::new();
        let mine = seed(&repo, &["Mine"]).await.remove(0);
        let other = Uuid::from_u128(2);
        repo.save(&Wish::new(other, "Theirs")).await.unwrap();

        assert_eq!(repo.find_all(owner(), SortSpec::default()).await.unwrap().len(), 1);
        assert!(repo.find_by_id(mine.id, other).await.unwrap().is_none());
        assert!(repo.find_by_id(mine.id, owner()).await.unwrap().is_some());

        let mut stolen = mine.clone();
        stolen.owner_id = other;
        assert!(matches!(
            repo.delete(&stolen).await,
            Err(RepositoryError::NotFound { .. })
        ));
        assert!(matches!(
            repo.save(&stolen).await,
            Err(RepositoryError::AlreadyExists { .. })
        ));
    }

    #[tokio::test]
    async fn test_filters() {
        let repo = InMemoryWishRepository::new();
        let mut wishes = seed(&repo, &["Paris trip", "New bike"]).await;
        let mut bike = wishes.remove(1).with_category("sports");
        bike.mark_completed(Utc::now());
        repo.save(&bike).await.unwrap();

        assert_eq!(repo.find_by_completion(owner(), true).await.unwrap().len(), 1);
        assert_eq!(repo.find_by_completion(owner(), false).await.unwrap().len(), 1);
        assert_eq!(repo.find_by_category(owner(), "sports").await.unwrap().len(), 1);
        assert_eq!(repo.search(owner(), "paris").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let repo = InMemoryWishRepository::new();
        let result = repo.delete(&Wish::new(owner(), "Ghost")).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }
}
