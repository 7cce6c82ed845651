//! In-memory view store backend.
//!
//! Single-process store with TTLs, list values and LRU eviction.

mod store;

pub use store::MemoryViewStore;
