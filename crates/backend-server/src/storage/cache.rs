//! Redis-backed cache signal client

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::{CacheError, CacheSignal};

/// Redis client that stays disabled when the server was unreachable at startup
pub struct RedisCache {
    conn: Option<ConnectionManager>,
}

impl RedisCache {
    /// Connect to `url`. Never fails: an unreachable server yields a disabled client.
    pub async fn connect(url: &str) -> Self {
        match Self::open(url).await {
            Ok(conn) => {
                info!("Connected to Redis at {}", url);
                Self { conn: Some(conn) }
            }
            Err(e) => {
                warn!("Redis unavailable at {}, cache disabled: {}", url, e);
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self { conn: None }
    }

    async fn open(url: &str) -> redis::RedisResult<ConnectionManager> {
        let client = redis::Client::open(url)?;
        ConnectionManager::new(client).await
    }

    fn handle(&self) -> Result<ConnectionManager, CacheError> {
        self.conn.clone().ok_or(CacheError::Disabled)
    }
}

#[async_trait]
impl CacheSignal for RedisCache {
    fn is_enabled(&self) -> bool {
        self.conn.is_some()
    }

    async fn ping(&self) -> bool {
        let Ok(mut conn) = self.handle() else {
            return false;
        };

        match redis::cmd("PING").query_async::<_, String>(&mut conn).await {
            Ok(_) => true,
            Err(e) => {
                debug!("Redis ping failed: {}", e);
                false
            }
        }
    }

    async fn invalidate(&self, key: &str) {
        let Ok(mut conn) = self.handle() else {
            return;
        };

        match redis::cmd("DEL").arg(key).query_async::<_, i64>(&mut conn).await {
            Ok(removed) => debug!("Invalidated {} ({} key removed)", key, removed),
            Err(e) => warn!("Failed to invalidate {}: {}", key, e),
        }
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        let mut conn = self.handle()?;
        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(ttl.as_secs())
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.handle()?;
        let value = redis::cmd("GET")
            .arg(key)
            .query_async::<_, Option<String>>(&mut conn)
            .await?;
        Ok(value)
    }
}
