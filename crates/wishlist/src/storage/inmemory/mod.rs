//! In-memory storage backend.
//!
//! Stores all wishes in a HashMap wrapped in `Arc<RwLock<_>>`. Useful for
//! development and tests where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use wishlist::storage::inmemory::InMemoryWishRepository;
//!
//! let repo = InMemoryWishRepository::new();
//! ```

mod repository;

pub use repository::InMemoryWishRepository;
