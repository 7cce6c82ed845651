use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Backing store for cached views.
///
/// A thin key/value + key/list store with TTLs and glob key enumeration.
/// It carries no business logic; keys come from [`super::keys`].
#[async_trait]
pub trait ViewStore: Send + Sync {
    /// Gets a value by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a key of any kind. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Resets the TTL of an existing key. Returns false if the key is absent.
    ///
    /// The views never call this directly: `replace_list` and `set` carry
    /// their own TTL. It stays part of the store contract for callers that
    /// extend a view's lifetime without rewriting it.
    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool>;

    /// Replaces the list stored at `key` with `values` and sets its TTL.
    ///
    /// Delete, push and expire happen atomically: a concurrent reader sees
    /// either the old list or the complete new one.
    async fn replace_list(&self, key: &str, values: &[Vec<u8>], ttl: Duration) -> Result<()>;

    /// Returns list elements in the inclusive index range `[start, stop]`.
    ///
    /// Out-of-range indexes are clamped; a missing key yields an empty vec.
    async fn range(&self, key: &str, start: u64, stop: u64) -> Result<Vec<Vec<u8>>>;

    /// Returns the length of the list at `key`, or 0 if absent.
    async fn list_len(&self, key: &str) -> Result<u64>;

    /// Returns every live key matching a glob pattern.
    async fn keys(&self, pattern: &str) -> Result<Vec<String>>;

    /// Deletes every key matching a glob pattern.
    async fn delete_pattern(&self, pattern: &str) -> Result<()> {
        for key in self.keys(pattern).await? {
            self.delete(&key).await?;
        }
        Ok(())
    }
}
