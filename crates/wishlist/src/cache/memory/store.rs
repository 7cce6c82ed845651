//! In-memory view store with LRU eviction.
//!
//! Mirrors the Redis backend closely enough that the view caches behave the
//! same on either:
//! - keys hold either a byte value or a list of byte values
//! - TTLs expire lazily on access
//! - keys are tracked per owner so that owner-scoped pattern deletes do not
//!   scan the whole store

use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;
use uuid::Uuid;

use wishlist_core::cache::{extract_owner_id_from_key, pattern_matches, Result, ViewStore};

#[derive(Debug, Clone)]
enum StoredValue {
    Bytes(Vec<u8>),
    List(Vec<Vec<u8>>),
}

/// A single store entry with optional expiration.
#[derive(Debug, Clone)]
struct StoreEntry {
    value: StoredValue,
    expires_at: Option<Instant>,
}

impl StoreEntry {
    fn new(value: StoredValue, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.map(|d| Instant::now() + d);
        Self { value, expires_at }
    }

    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() >= exp)
    }
}

#[derive(Debug)]
struct Inner {
    entries: LruCache<String, StoreEntry>,
    /// owner_id -> keys currently stored for that owner.
    tracking: HashMap<Uuid, HashSet<String>>,
}

impl Inner {
    fn insert(&mut self, key: &str, entry: StoreEntry) {
        if let Some((evicted, _)) = self.entries.push(key.to_string(), entry) {
            if evicted != key {
                self.untrack(&evicted);
            }
        }
        if let Some(owner_id) = extract_owner_id_from_key(key) {
            self.tracking
                .entry(owner_id)
                .or_default()
                .insert(key.to_string());
        }
    }

    fn remove(&mut self, key: &str) {
        self.entries.pop(key);
        self.untrack(key);
    }

    fn untrack(&mut self, key: &str) {
        let Some(owner_id) = extract_owner_id_from_key(key) else {
            return;
        };
        if let Some(keys) = self.tracking.get_mut(&owner_id) {
            keys.remove(key);
            if keys.is_empty() {
                self.tracking.remove(&owner_id);
            }
        }
    }

    /// Returns the live entry for `key`, dropping it first if it has expired.
    fn live(&mut self, key: &str) -> Option<&mut StoreEntry> {
        if self.entries.peek(key).is_some_and(StoreEntry::is_expired) {
            self.remove(key);
            return None;
        }
        self.entries.get_mut(key)
    }

    fn matching_keys(&self, pattern: &str) -> Vec<String> {
        match extract_owner_id_from_key(pattern) {
            Some(owner_id) => self
                .tracking
                .get(&owner_id)
                .map(|keys| {
                    keys.iter()
                        .filter(|k| pattern_matches(pattern, k))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default(),
            // Not owner-scoped, fall back to a full scan.
            None => self
                .entries
                .iter()
                .filter(|(key, _)| pattern_matches(pattern, key))
                .map(|(key, _)| key.clone())
                .collect(),
        }
    }
}

/// In-memory [`ViewStore`] with LRU eviction.
///
/// All state sits behind one `RwLock`, so every operation (including
/// [`ViewStore::replace_list`]) is atomic with respect to the others.
#[derive(Debug, Clone)]
pub struct MemoryViewStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryViewStore {
    /// Creates a store that evicts least-recently-used keys past `max_entries`.
    pub fn new(max_entries: NonZeroUsize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                entries: LruCache::new(max_entries),
                tracking: HashMap::new(),
            })),
        }
    }
}

#[async_trait]
impl ViewStore for MemoryViewStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut inner = self.inner.write().await;
        Ok(match inner.live(key) {
            Some(StoreEntry {
                value: StoredValue::Bytes(bytes),
                ..
            }) => Some(bytes.clone()),
            _ => None,
        })
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.insert(key, StoreEntry::new(StoredValue::Bytes(value.to_vec()), ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.inner.write().await.remove(key);
        Ok(())
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool> {
        let mut inner = self.inner.write().await;
        Ok(match inner.live(key) {
            Some(entry) => {
                entry.expires_at = Some(Instant::now() + ttl);
                true
            }
            None => false,
        })
    }

    async fn replace_list(&self, key: &str, values: &[Vec<u8>], ttl: Duration) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.remove(key);
        if !values.is_empty() {
            inner.insert(
                key,
                StoreEntry::new(StoredValue::List(values.to_vec()), Some(ttl)),
            );
        }
        Ok(())
    }

    async fn range(&self, key: &str, start: u64, stop: u64) -> Result<Vec<Vec<u8>>> {
        let mut inner = self.inner.write().await;
        let Some(StoreEntry {
            value: StoredValue::List(list),
            ..
        }) = inner.live(key)
        else {
            return Ok(Vec::new());
        };

        let len = list.len() as u64;
        if start >= len || start > stop {
            return Ok(Vec::new());
        }
        let stop = stop.min(len - 1);
        Ok(list[start as usize..=stop as usize].to_vec())
    }

    async fn list_len(&self, key: &str) -> Result<u64> {
        let mut inner = self.inner.write().await;
        Ok(match inner.live(key) {
            Some(StoreEntry {
                value: StoredValue::List(list),
                ..
            }) => list.len() as u64,
            _ => 0,
        })
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let inner = self.inner.read().await;
        Ok(inner
            .matching_keys(pattern)
            .into_iter()
            .filter(|k| inner.entries.peek(k).is_some_and(|e| !e.is_expired()))
            .collect())
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<()> {
        let mut inner = self.inner.write().await;
        for key in inner.matching_keys(pattern) {
            inner.remove(&key);
        }
        Ok(())
    }
}
