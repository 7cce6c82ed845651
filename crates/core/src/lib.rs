//! Functional core for the wishlist service.
//!
//! Pure data types and pure functions, plus the async traits that mark the
//! seams to the source of truth ([`storage::WishRepository`]) and to the
//! backing store for cached views ([`cache::ViewStore`]).

pub mod cache;
pub mod serde;
pub mod storage;
pub mod wish;
