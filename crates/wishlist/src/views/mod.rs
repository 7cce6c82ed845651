//! Cached views of the wishes collection.
//!
//! - [`ListPaginationCache`]: one fully sorted list per owner and sort order,
//!   sliced into pages on read.
//! - [`DerivedViewCache`]: single-wish, completed, pending and category views.
//! - [`CacheCoordinator`]: the one handle the service layer talks to. Owns
//!   both caches and evicts what each mutation makes stale.
//!
//! Every cache operation fails open: backing-store errors are logged and
//! surface as [`CacheRead::Unavailable`] or a skipped write, never as an
//! error the caller has to handle.

mod coordinator;
mod derived;
mod pagination;

pub use coordinator::CacheCoordinator;
pub use derived::{DerivedViewCache, ListView};
pub use pagination::ListPaginationCache;

/// Outcome of a cache read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheRead<T> {
    Hit(T),
    /// Nothing usable is cached; rebuild from the source of truth.
    Miss,
    /// The backing store failed; read the source of truth and do not populate.
    Unavailable,
}

#[cfg(test)]
impl<T> CacheRead<T> {
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheRead::Hit(_))
    }

    pub fn hit(self) -> Option<T> {
        match self {
            CacheRead::Hit(value) => Some(value),
            _ => None,
        }
    }
}
