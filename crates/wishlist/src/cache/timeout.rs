//! Per-operation deadline for view store calls.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use wishlist_core::cache::{CacheError, Result, ViewStore};

/// Wraps a [`ViewStore`] so that no single call can stall a request.
///
/// A call that exceeds the deadline fails with [`CacheError::Timeout`],
/// which callers treat like any other store failure.
pub struct TimeoutViewStore {
    inner: Arc<dyn ViewStore>,
    timeout: Duration,
}

impl TimeoutViewStore {
    pub fn new(inner: Arc<dyn ViewStore>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    async fn bounded<T>(&self, fut: impl Future<Output = Result<T>> + Send) -> Result<T> {
        tokio::time::timeout(self.timeout, fut)
            .await
            .unwrap_or(Err(CacheError::Timeout(self.timeout)))
    }
}

#[async_trait]
impl ViewStore for TimeoutViewStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.bounded(self.inner.get(key)).await
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        self.bounded(self.inner.set(key, value, ttl)).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.bounded(self.inner.delete(key)).await
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool> {
        self.bounded(self.inner.expire(key, ttl)).await
    }

    async fn replace_list(&self, key: &str, values: &[Vec<u8>], ttl: Duration) -> Result<()> {
        self.bounded(self.inner.replace_list(key, values, ttl)).await
    }

    async fn range(&self, key: &str, start: u64, stop: u64) -> Result<Vec<Vec<u8>>> {
        self.bounded(self.inner.range(key, start, stop)).await
    }

    async fn list_len(&self, key: &str) -> Result<u64> {
        self.bounded(self.inner.list_len(key)).await
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        self.bounded(self.inner.keys(pattern)).await
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<()> {
        self.bounded(self.inner.delete_pattern(pattern)).await
    }
}
