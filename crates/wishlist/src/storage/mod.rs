//! Source-of-truth implementations.
//!
//! Provides concrete implementations of `wishlist_core::storage::WishRepository`.
//! Persistence format is out of scope for this service, so the only bundled
//! backend is the in-memory one; a real deployment plugs its own store in
//! behind the same trait.

pub mod inmemory;

pub use inmemory::InMemoryWishRepository;
