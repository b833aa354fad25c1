//! Storage layer
//!
//! PostgreSQL holds the items table; Redis carries the cache invalidation
//! marker and the diagnostic test key. Handlers only see the traits below.

pub mod cache;
pub mod db;
#[cfg(test)]
pub mod memory;

pub use cache::RedisCache;
pub use db::PgItemStore;

use async_trait::async_trait;
use backend_types::{Item, NewItem};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database not available: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Query(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Redis not available")]
    Disabled,

    #[error(transparent)]
    Command(#[from] redis::RedisError),
}

/// Opens connections to the relational store
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Open a fresh connection. An unreachable store is reported as
    /// [`StoreError::Unavailable`], never as a panic.
    async fn connect(&self) -> Result<Box<dyn ItemConnection>, StoreError>;
}

/// One open connection to the relational store.
///
/// Callers close it explicitly once done; dropping it also releases the socket.
#[async_trait]
pub trait ItemConnection: Send {
    /// All items, most recently created first
    async fn list_items(&mut self) -> Result<Vec<Item>, StoreError>;

    /// Insert an item and return its generated id
    async fn create_item(&mut self, item: &NewItem) -> Result<i32, StoreError>;

    async fn close(self: Box<Self>);
}

/// Best-effort key-value signals
#[async_trait]
pub trait CacheSignal: Send + Sync {
    /// False when the store was unreachable at startup
    fn is_enabled(&self) -> bool;

    async fn ping(&self) -> bool;

    /// Delete `key`, ignoring the outcome
    async fn invalidate(&self, key: &str);

    async fn set_with_expiry(&self, key: &str, value: &str, ttl: Duration)
        -> Result<(), CacheError>;

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
}
