//! Deterministic cache keys for every view namespace.
//!
//! Keys have the shape `{namespace}::{owner_id}[::{discriminator}]`. The
//! owner always comes second so that every key an owner can have in a
//! namespace shares the `{namespace}::{owner_id}::` prefix.

use std::fmt;

use uuid::Uuid;

use crate::wish::SortSpec;

const SEPARATOR: &str = "::";

/// A family of cached views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Full sorted list per owner and sort spec, sliced into pages.
    UserWishes,
    /// A single wish.
    Wish,
    CompletedWishes,
    PendingWishes,
    /// Wishes sharing one category label.
    CategoryWishes,
}

impl Namespace {
    pub const ALL: [Namespace; 5] = [
        Namespace::UserWishes,
        Namespace::Wish,
        Namespace::CompletedWishes,
        Namespace::PendingWishes,
        Namespace::CategoryWishes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::UserWishes => "userWishes",
            Namespace::Wish => "wish",
            Namespace::CompletedWishes => "completedWishes",
            Namespace::PendingWishes => "pendingWishes",
            Namespace::CategoryWishes => "categoryWishes",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the key for a (namespace, owner, discriminator) triple.
pub fn build_key(namespace: Namespace, owner_id: Uuid, discriminator: Option<&str>) -> String {
    match discriminator {
        Some(d) => format!("{namespace}{SEPARATOR}{owner_id}{SEPARATOR}{d}"),
        None => format!("{namespace}{SEPARATOR}{owner_id}"),
    }
}

/// The discriminator of the pagination namespace.
pub fn sort_discriminator(sort: SortSpec) -> String {
    format!("sort={}{SEPARATOR}{}", sort.field, sort.direction)
}

/// Returns the key of the full sorted list for an owner and sort spec.
///
/// Pagination offset and size are deliberately absent: every page of the
/// same ordering is sliced from one cached list.
pub fn user_wishes_key(owner_id: Uuid, sort: SortSpec) -> String {
    build_key(
        Namespace::UserWishes,
        owner_id,
        Some(&sort_discriminator(sort)),
    )
}

/// Returns the pattern matching every sorted list cached for an owner.
pub fn user_wishes_pattern(owner_id: Uuid) -> String {
    owner_pattern(Namespace::UserWishes, owner_id)
}

/// Returns the key of a single wish view.
pub fn wish_key(owner_id: Uuid, wish_id: Uuid) -> String {
    build_key(Namespace::Wish, owner_id, Some(&wish_id.to_string()))
}

pub fn completed_wishes_key(owner_id: Uuid) -> String {
    build_key(Namespace::CompletedWishes, owner_id, None)
}

pub fn pending_wishes_key(owner_id: Uuid) -> String {
    build_key(Namespace::PendingWishes, owner_id, None)
}

/// Returns the key of one category view.
pub fn category_wishes_key(owner_id: Uuid, category: &str) -> String {
    build_key(Namespace::CategoryWishes, owner_id, Some(category))
}

/// Returns the pattern matching every category view cached for an owner.
pub fn category_wishes_pattern(owner_id: Uuid) -> String {
    owner_pattern(Namespace::CategoryWishes, owner_id)
}

/// Returns the pattern matching every key in a namespace, for all owners.
pub fn namespace_pattern(namespace: Namespace) -> String {
    format!("{namespace}{SEPARATOR}*")
}

fn owner_pattern(namespace: Namespace, owner_id: Uuid) -> String {
    format!("{namespace}{SEPARATOR}{owner_id}{SEPARATOR}*")
}

/// Extracts the owner ID from a cache key, if present.
///
/// # Examples
///
/// ```
/// use wishlist_core::cache::extract_owner_id_from_key;
/// use uuid::Uuid;
///
/// let owner = Uuid::nil();
/// let key = format!("pendingWishes::{}", owner);
/// assert_eq!(extract_owner_id_from_key(&key), Some(owner));
/// assert_eq!(extract_owner_id_from_key("userWishes"), None);
/// ```
pub fn extract_owner_id_from_key(key: &str) -> Option<Uuid> {
    let mut parts = key.splitn(3, SEPARATOR);
    let namespace = parts.next()?;
    if !Namespace::ALL.iter().any(|ns| ns.as_str() == namespace) {
        return None;
    }
    Uuid::parse_str(parts.next()?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::pattern_matches;
    use crate::wish::{SortField, SortSpec};

    fn owner() -> Uuid {
        Uuid::nil()
    }

    fn other_owner() -> Uuid {
        Uuid::from_u128(1)
    }

    #[test]
    fn test_user_wishes_key() {
        let key = user_wishes_key(owner(), SortSpec::asc(SortField::Priority));
        assert_eq!(
            key,
            "userWishes::00000000-0000-0000-0000-000000000000::sort=priority::asc"
        );
    }

    #[test]
    fn test_user_wishes_key_default_sort() {
        let key = user_wishes_key(owner(), SortSpec::default());
        assert_eq!(
            key,
            "userWishes::00000000-0000-0000-0000-000000000000::sort=created_at::desc"
        );
    }

    #[test]
    fn test_wish_key() {
        let key = wish_key(owner(), other_owner());
        assert_eq!(
            key,
            "wish::00000000-0000-0000-0000-000000000000::00000000-0000-0000-0000-000000000001"
        );
    }

    #[test]
    fn test_completion_keys() {
        assert_eq!(
            completed_wishes_key(owner()),
            "completedWishes::00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            pending_wishes_key(owner()),
            "pendingWishes::00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_category_key() {
        assert_eq!(
            category_wishes_key(owner(), "travel"),
            "categoryWishes::00000000-0000-0000-0000-000000000000::travel"
        );
    }

    #[test]
    fn test_distinct_triples_give_distinct_keys() {
        let sort_keys = [
            user_wishes_key(owner(), SortSpec::asc(SortField::Title)),
            user_wishes_key(owner(), SortSpec::desc(SortField::Title)),
            user_wishes_key(other_owner(), SortSpec::asc(SortField::Title)),
            user_wishes_key(owner(), SortSpec::asc(SortField::DueDate)),
        ];
        let unique: std::collections::HashSet<_> = sort_keys.iter().collect();
        assert_eq!(unique.len(), sort_keys.len());

        assert_ne!(completed_wishes_key(owner()), pending_wishes_key(owner()));
        assert_ne!(
            category_wishes_key(owner(), "a"),
            category_wishes_key(other_owner(), "a")
        );
    }

    #[test]
    fn test_owner_patterns_cover_every_sort_and_category() {
        let pattern = user_wishes_pattern(owner());
        assert!(pattern_matches(
            &pattern,
            &user_wishes_key(owner(), SortSpec::default())
        ));
        assert!(pattern_matches(
            &pattern,
            &user_wishes_key(owner(), SortSpec::asc(SortField::Title))
        ));
        assert!(!pattern_matches(
            &pattern,
            &user_wishes_key(other_owner(), SortSpec::default())
        ));

        let pattern = category_wishes_pattern(owner());
        assert!(pattern_matches(&pattern, &category_wishes_key(owner(), "books")));
        assert!(!pattern_matches(
            &pattern,
            &category_wishes_key(other_owner(), "books")
        ));
        assert!(!pattern_matches(&pattern, &pending_wishes_key(owner())));
    }

    #[test]
    fn test_namespace_pattern() {
        assert_eq!(namespace_pattern(Namespace::Wish), "wish::*");
        assert!(pattern_matches(
            &namespace_pattern(Namespace::Wish),
            &wish_key(owner(), other_owner())
        ));
        assert!(!pattern_matches(
            &namespace_pattern(Namespace::Wish),
            &pending_wishes_key(owner())
        ));
    }

    #[test]
    fn test_extract_owner_id_from_key() {
        let key = category_wishes_key(other_owner(), "garden::tools");
        assert_eq!(extract_owner_id_from_key(&key), Some(other_owner()));
        assert_eq!(extract_owner_id_from_key("session::123"), None);
        assert_eq!(extract_owner_id_from_key("wish::not-a-uuid::x"), None);
    }
}
