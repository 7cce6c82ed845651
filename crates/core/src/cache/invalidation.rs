//! Invalidation planning.
//!
//! Maps a completed mutation to the set of cached views it makes stale.
//! Pure: the shell turns each [`StaleView`] into an eviction against the
//! backing store.

use uuid::Uuid;

/// A successful write against the wish store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Created,
    Updated { wish_id: Uuid },
    Deleted { wish_id: Uuid, was_completed: bool },
    Completed { wish_id: Uuid },
}

/// One cached view that must be evicted after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaleView {
    /// The single-wish entry.
    Item(Uuid),
    /// Every sorted list of the owner.
    Pagination,
    Completed,
    Pending,
    /// Every category view of the owner.
    Category,
}

/// Returns the views made stale by `mutation`, item entry first.
pub fn stale_views(mutation: Mutation) -> Vec<StaleView> {
    match mutation {
        Mutation::Created => vec![
            StaleView::Pagination,
            StaleView::Pending,
            StaleView::Category,
        ],
        Mutation::Updated { wish_id } | Mutation::Completed { wish_id } => vec![
            StaleView::Item(wish_id),
            StaleView::Pagination,
            StaleView::Completed,
            StaleView::Pending,
            StaleView::Category,
        ],
        Mutation::Deleted {
            wish_id,
            was_completed,
        } => {
            // A deleted wish only ever sat in one of the two status views.
            let status = if was_completed {
                StaleView::Completed
            } else {
                StaleView::Pending
            };
            vec![
                StaleView::Item(wish_id),
                StaleView::Pagination,
                status,
                StaleView::Category,
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> Uuid {
        Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap()
    }

    #[test]
    fn test_every_mutation_evicts_pagination_and_category() {
        let mutations = [
            Mutation::Created,
            Mutation::Updated { wish_id: id() },
            Mutation::Deleted {
                wish_id: id(),
                was_completed: false,
            },
            Mutation::Deleted {
                wish_id: id(),
                was_completed: true,
            },
            Mutation::Completed { wish_id: id() },
        ];

        for mutation in mutations {
            let views = stale_views(mutation);
            assert!(views.contains(&StaleView::Pagination), "{mutation:?}");
            assert!(views.contains(&StaleView::Category), "{mutation:?}");
        }
    }

    #[test]
    fn test_create_has_no_item_entry() {
        let views = stale_views(Mutation::Created);
        assert!(!views.iter().any(|v| matches!(v, StaleView::Item(_))));
        assert!(views.contains(&StaleView::Pending));
        assert!(!views.contains(&StaleView::Completed));
    }

    #[test]
    fn test_update_and_complete_evict_both_status_views() {
        for mutation in [
            Mutation::Updated { wish_id: id() },
            Mutation::Completed { wish_id: id() },
        ] {
            let views = stale_views(mutation);
            assert_eq!(views[0], StaleView::Item(id()));
            assert!(views.contains(&StaleView::Completed));
            assert!(views.contains(&StaleView::Pending));
        }
    }

    #[test]
    fn test_delete_evicts_only_the_matching_status_view() {
        let pending = stale_views(Mutation::Deleted {
            wish_id: id(),
            was_completed: false,
        });
        assert!(pending.contains(&StaleView::Pending));
        assert!(!pending.contains(&StaleView::Completed));
        assert!(pending.contains(&StaleView::Item(id())));

        let completed = stale_views(Mutation::Deleted {
            wish_id: id(),
            was_completed: true,
        });
        assert!(completed.contains(&StaleView::Completed));
        assert!(!completed.contains(&StaleView::Pending));
    }
}
