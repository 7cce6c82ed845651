//! Redis view store.
//!
//! Byte views are plain strings, paginated views are Redis lists. TTLs are
//! set in milliseconds. Pattern enumeration uses `KEYS`, which is fine for
//! the per-owner patterns this service issues.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use wishlist_core::cache::{Result, ViewStore};

use super::error::map_redis_error;

fn millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1)
}

/// `PEXPIRE` takes a signed count.
fn expire_millis(ttl: Duration) -> i64 {
    i64::try_from(millis(ttl)).unwrap_or(i64::MAX)
}

/// Converts an inclusive index range to `LRANGE` arguments.
///
/// Redis reads negative indices from the tail, so a start beyond
/// `isize::MAX` has no valid encoding and yields `None`.
fn lrange_bounds(start: u64, stop: u64) -> Option<(isize, isize)> {
    let start = isize::try_from(start).ok()?;
    let stop = isize::try_from(stop).unwrap_or(isize::MAX);
    Some((start, stop))
}

/// Redis view store using a connection manager for pooling.
#[derive(Clone)]
pub struct RedisViewStore {
    conn: redis::aio::ConnectionManager,
}

impl RedisViewStore {
    /// Connects to Redis.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Unavailable` if the connection cannot be established.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl ViewStore for RedisViewStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        conn.get(key).await.map_err(map_redis_error)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.conn.clone();
        match ttl {
            Some(duration) => conn
                .pset_ex::<_, _, ()>(key, value, millis(duration))
                .await
                .map_err(map_redis_error),
            None => conn
                .set::<_, _, ()>(key, value)
                .await
                .map_err(map_redis_error),
        }
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await.map_err(map_redis_error)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool> {
        let mut conn = self.conn.clone();
        conn.pexpire(key, expire_millis(ttl))
            .await
            .map_err(map_redis_error)
    }

    async fn replace_list(&self, key: &str, values: &[Vec<u8>], ttl: Duration) -> Result<()> {
        let mut conn = self.conn.clone();
        let mut pipe = redis::pipe();
        pipe.atomic().del(key).ignore();
        if !values.is_empty() {
            pipe.rpush(key, values)
                .ignore()
                .pexpire(key, expire_millis(ttl))
                .ignore();
        }
        pipe.query_async::<()>(&mut conn)
            .await
            .map_err(map_redis_error)
    }

    async fn range(&self, key: &str, start: u64, stop: u64) -> Result<Vec<Vec<u8>>> {
        let Some((start, stop)) = lrange_bounds(start, stop) else {
            return Ok(Vec::new());
        };
        let mut conn = self.conn.clone();
        conn.lrange(key, start, stop)
            .await
            .map_err(map_redis_error)
    }

    async fn list_len(&self, key: &str) -> Result<u64> {
        let mut conn = self.conn.clone();
        conn.llen(key).await.map_err(map_redis_error)
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        conn.keys(pattern).await.map_err(map_redis_error)
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<()> {
        let keys = self.keys(pattern).await?;
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(&keys).await.map_err(map_redis_error)
    }
}
