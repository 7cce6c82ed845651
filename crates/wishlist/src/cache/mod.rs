//! View store backends.
//!
//! This module provides concrete implementations of
//! `wishlist_core::cache::ViewStore`. The backend is selected at compile
//! time via feature flags.
//!
//! # Feature Flags
//!
//! - `memory` (default): In-memory store using tokio synchronization primitives
//! - `redis`: Redis store using the redis crate
//!
//! These features are mutually exclusive - only one backend can be
//! enabled at a time.

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!(
    "Features 'memory' and 'redis' are mutually exclusive. \
    Enable only one cache backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No cache backend selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p wishlist --no-default-features --features redis"
);

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

mod timeout;

#[cfg(feature = "memory")]
pub use memory::MemoryViewStore;

#[cfg(feature = "redis")]
pub use redis_impl::RedisViewStore;

pub use timeout::TimeoutViewStore;
