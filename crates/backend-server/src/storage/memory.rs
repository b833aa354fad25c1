//! In-memory stand-ins for PostgreSQL and Redis used by the handler tests

use async_trait::async_trait;
use backend_types::{Item, NewItem};
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use super::{CacheError, CacheSignal, ItemConnection, ItemStore, StoreError};

#[derive(Default)]
struct StoreState {
    items: Mutex<Vec<Item>>,
    next_id: AtomicI32,
    open_connections: AtomicUsize,
    connects: AtomicUsize,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

/// Item store backed by a `Vec`, with switchable reachability
pub struct MemoryItemStore {
    state: Arc<StoreState>,
    available: AtomicBool,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(StoreState::default()),
            available: AtomicBool::new(true),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Make every insert fail with a store-level error
    pub fn set_fail_writes(&self, fail: bool) {
        self.state.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make every read fail with a store-level error
    pub fn set_fail_reads(&self, fail: bool) {
        self.state.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Connections opened and not yet closed
    pub fn open_connections(&self) -> usize {
        self.state.open_connections.load(Ordering::SeqCst)
    }

    /// Successful connects since creation
    pub fn connects(&self) -> usize {
        self.state.connects.load(Ordering::SeqCst)
    }

    pub fn item_count(&self) -> usize {
        self.state.items.lock().unwrap().len()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn connect(&self) -> Result<Box<dyn ItemConnection>, StoreError> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }

        self.state.connects.fetch_add(1, Ordering::SeqCst);
        self.state.open_connections.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemoryConnection {
            state: self.state.clone(),
        }))
    }
}

struct MemoryConnection {
    state: Arc<StoreState>,
}

#[async_trait]
impl ItemConnection for MemoryConnection {
    async fn list_items(&mut self) -> Result<Vec<Item>, StoreError> {
        if self.state.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Query(sqlx::Error::Protocol(
                "select rejected".to_string(),
            )));
        }

        let items = self.state.items.lock().unwrap();
        Ok(items.iter().rev().cloned().collect())
    }

    async fn create_item(&mut self, item: &NewItem) -> Result<i32, StoreError> {
        if self.state.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Query(sqlx::Error::Protocol(
                "insert rejected".to_string(),
            )));
        }

        let id = self.state.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.items.lock().unwrap().push(Item {
            id,
            name: item.name().to_string(),
            description: Some(item.description().to_string()),
            created_at: Some(chrono::Local::now().naive_local()),
        });
        Ok(id)
    }

    async fn close(self: Box<Self>) {
        self.state.open_connections.fetch_sub(1, Ordering::SeqCst);
    }
}

struct CacheEntry {
    value: String,
    expires_at: Option<Instant>,
}

/// Key-value cache with TTL support and switchable reachability
pub struct MemoryCache {
    data: DashMap<String, CacheEntry>,
    enabled: bool,
    reachable: AtomicBool,
    invalidations: Mutex<Vec<String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
            enabled: true,
            reachable: AtomicBool::new(true),
            invalidations: Mutex::new(Vec::new()),
        }
    }

    /// A client that never connected
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }

    /// Keys passed to `invalidate` while reachable
    pub fn invalidations(&self) -> Vec<String> {
        self.invalidations.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), CacheError> {
        if !self.enabled {
            return Err(CacheError::Disabled);
        }
        if !self.reachable.load(Ordering::SeqCst) {
            return Err(CacheError::Command(redis::RedisError::from((
                redis::ErrorKind::IoError,
                "connection refused",
            ))));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheSignal for MemoryCache {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn ping(&self) -> bool {
        self.check().is_ok()
    }

    async fn invalidate(&self, key: &str) {
        if self.check().is_ok() {
            self.data.remove(key);
            self.invalidations.lock().unwrap().push(key.to_string());
        }
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        self.check()?;
        self.data.insert(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                expires_at: Some(Instant::now() + ttl),
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.check()?;
        let value = self.data.get(key).and_then(|entry| match entry.expires_at {
            Some(expires) if Instant::now() > expires => None,
            _ => Some(entry.value.clone()),
        });
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_ttl() {
        let cache = MemoryCache::new();

        cache
            .set_with_expiry("key1", "value", Duration::from_millis(10))
            .await
            .unwrap();
        assert_eq!(cache.get("key1").await.unwrap(), Some("value".to_string()));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(cache.get("key1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_store_lists_newest_first() {
        let store = MemoryItemStore::new();
        let mut conn = store.connect().await.unwrap();
        conn.create_item(&NewItem::new("first", "").unwrap())
            .await
            .unwrap();
        conn.create_item(&NewItem::new("second", "").unwrap())
            .await
            .unwrap();

        let names: Vec<String> = conn
            .list_items()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["second", "first"]);

        conn.close().await;
        assert_eq!(store.open_connections(), 0);
    }
}
