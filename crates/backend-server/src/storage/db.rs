//! PostgreSQL item store, one connection per request

use async_trait::async_trait;
use backend_types::{Item, NewItem};
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;

use super::{ItemConnection, ItemStore, StoreError};

pub struct PgItemStore {
    options: PgConnectOptions,
}

impl PgItemStore {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn connect(&self) -> Result<Box<dyn ItemConnection>, StoreError> {
        let conn = PgConnection::connect_with(&self.options)
            .await
            .map_err(|e| {
                tracing::warn!("Failed to connect to PostgreSQL: {}", e);
                StoreError::Unavailable(e.to_string())
            })?;

        Ok(Box::new(PgItemConnection { conn }))
    }
}

pub struct PgItemConnection {
    conn: PgConnection,
}

#[async_trait]
impl ItemConnection for PgItemConnection {
    async fn list_items(&mut self) -> Result<Vec<Item>, StoreError> {
        let rows: Vec<ItemRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, created_at
            FROM items
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&mut self.conn)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create_item(&mut self, item: &NewItem) -> Result<i32, StoreError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO items (name, description)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(item.name())
        .bind(item.description())
        .fetch_one(&mut self.conn)
        .await?;

        Ok(id)
    }

    async fn close(self: Box<Self>) {
        if let Err(e) = self.conn.close().await {
            tracing::debug!("Error while closing PostgreSQL connection: {}", e);
        }
    }
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct ItemRow {
    id: i32,
    name: String,
    description: Option<String>,
    created_at: Option<chrono::NaiveDateTime>,
}

impl From<ItemRow> for Item {
    fn from(r: ItemRow) -> Self {
        Item {
            id: r.id,
            name: r.name,
            description: r.description,
            created_at: r.created_at,
        }
    }
}
