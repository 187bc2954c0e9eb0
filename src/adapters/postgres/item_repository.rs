//! PostgreSQL implementation of ItemRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ItemId, UserId};
use crate::domain::item::{Item, ItemTitle};
use crate::ports::ItemRepository;

use super::map_sqlx_error;

/// PostgreSQL implementation of ItemRepository.
#[derive(Clone)]
pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    /// Creates a new PostgresItemRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn list_all(&self) -> Result<Vec<Item>, DomainError> {
        let rows = sqlx::query("SELECT id, title, user_id FROM items ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to fetch items", e))?;

        rows.iter().map(row_to_item).collect()
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Item>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, title, user_id FROM items WHERE user_id = $1 ORDER BY id ASC",
        )
        .bind(owner.as_i32())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to fetch items by owner", e))?;

        rows.iter().map(row_to_item).collect()
    }

    async fn insert(
        &self,
        title: &ItemTitle,
        owner: Option<UserId>,
    ) -> Result<ItemId, DomainError> {
        let (id,): (i32,) =
            sqlx::query_as("INSERT INTO items (title, user_id) VALUES ($1, $2) RETURNING id")
                .bind(title.as_str())
                .bind(owner.map(|u| u.as_i32()))
                .fetch_one(&self.pool)
                .await
                .map_err(|e| map_sqlx_error("Failed to insert item", e))?;

        Ok(ItemId::new(id))
    }

    async fn update_title(&self, id: ItemId, title: &ItemTitle) -> Result<u64, DomainError> {
        let result = sqlx::query("UPDATE items SET title = $1 WHERE id = $2")
            .bind(title.as_str())
            .bind(id.as_i32())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to update item", e))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: ItemId) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to delete item", e))?;

        Ok(result.rows_affected())
    }
}

fn row_to_item(row: &PgRow) -> Result<Item, DomainError> {
    let id: i32 = row
        .try_get("id")
        .map_err(|e| map_sqlx_error("Failed to read item id", e))?;
    let title: String = row
        .try_get("title")
        .map_err(|e| map_sqlx_error("Failed to read item title", e))?;
    let user_id: Option<i32> = row
        .try_get("user_id")
        .map_err(|e| map_sqlx_error("Failed to read item owner", e))?;

    Ok(Item::new(ItemId::new(id), title, user_id.map(UserId::new)))
}
