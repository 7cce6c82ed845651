//! Redis view store backend.
//!
//! Shared store for multi-instance deployments.

mod error;
mod store;

pub use store::RedisViewStore;
