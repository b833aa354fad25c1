//! Item catalog: connection discipline and cache invalidation around the store

use crate::storage::{CacheSignal, ItemStore, StoreError};
use backend_types::{Item, NewItem};
use std::sync::Arc;
use tracing::{debug, info};

/// Cache marker dropped after every successful insert
pub const ITEMS_CACHE_KEY: &str = "items_cache";

pub struct ItemCatalog {
    store: Arc<dyn ItemStore>,
    cache: Arc<dyn CacheSignal>,
}

impl ItemCatalog {
    pub fn new(store: Arc<dyn ItemStore>, cache: Arc<dyn CacheSignal>) -> Self {
        Self { store, cache }
    }

    /// All items, newest first
    pub async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let mut conn = self.store.connect().await?;
        let result = conn.list_items().await;
        conn.close().await;

        let items = result?;
        debug!("Listed {} items", items.len());
        Ok(items)
    }

    /// Insert `item` and return its id. The cache marker is invalidated only
    /// once the insert has succeeded.
    pub async fn create(&self, item: &NewItem) -> Result<i32, StoreError> {
        let mut conn = self.store.connect().await?;
        let result = conn.create_item(item).await;
        conn.close().await;

        let id = result?;
        info!("Created item {} ({})", id, item.name());

        self.cache.invalidate(ITEMS_CACHE_KEY).await;
        Ok(id)
    }

    /// Whether a connection can be opened right now
    pub async fn is_reachable(&self) -> bool {
        match self.store.connect().await {
            Ok(conn) => {
                conn.close().await;
                true
            }
            Err(e) => {
                debug!("Store unreachable: {}", e);
                false
            }
        }
    }
}
