use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::items::models::{Item, ItemChanges, NewItem};

const ITEM_COLUMNS: &str = "id, name, quantity, unit, location, category, purchase_date, \
     expiration_date, notes, finished, created_at, updated_at";

/// Persistent store for inventory items.
///
/// Every mutation is a single SQL statement, so each operation either
/// fully applies or not at all. Queries over active items order by
/// expiration date with NULLs (no expiration) last, ties broken by
/// insertion order.
pub struct ItemStore {
    pool: PgPool,
}

impl ItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_item: &NewItem) -> Result<Item> {
        let query = format!(
            "INSERT INTO items (name, quantity, unit, location, category, purchase_date, \
             expiration_date, notes) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()), $7, $8) \
             RETURNING {ITEM_COLUMNS}"
        );

        let item = sqlx::query_as::<_, Item>(&query)
            .bind(&new_item.name)
            .bind(new_item.quantity)
            .bind(&new_item.unit)
            .bind(&new_item.location)
            .bind(&new_item.category)
            .bind(new_item.purchase_date)
            .bind(new_item.expiration_date)
            .bind(&new_item.notes)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert item: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(item)
    }

    pub async fn get(&self, id: Uuid) -> Result<Item> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = $1");

        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))
    }

    /// Replace the mutable fields of an existing item. The id and the
    /// purchase date are never touched.
    pub async fn update(&self, id: Uuid, changes: &ItemChanges) -> Result<Item> {
        let query = format!(
            "UPDATE items \
             SET name = $1, quantity = $2, unit = $3, location = $4, category = $5, \
                 expiration_date = $6, notes = $7, finished = $8, updated_at = NOW() \
             WHERE id = $9 \
             RETURNING {ITEM_COLUMNS}"
        );

        sqlx::query_as::<_, Item>(&query)
            .bind(&changes.name)
            .bind(changes.quantity)
            .bind(&changes.unit)
            .bind(&changes.location)
            .bind(&changes.category)
            .bind(changes.expiration_date)
            .bind(&changes.notes)
            .bind(changes.finished)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update item: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))
    }

    pub async fn set_finished(&self, id: Uuid, finished: bool) -> Result<Item> {
        let query = format!(
            "UPDATE items SET finished = $1, updated_at = NOW() \
             WHERE id = $2 \
             RETURNING {ITEM_COLUMNS}"
        );

        sqlx::query_as::<_, Item>(&query)
            .bind(finished)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))
    }

    pub async fn set_quantity_and_finished(
        &self,
        id: Uuid,
        quantity: Decimal,
        finished: bool,
    ) -> Result<Item> {
        let query = format!(
            "UPDATE items SET quantity = $1, finished = $2, updated_at = NOW() \
             WHERE id = $3 \
             RETURNING {ITEM_COLUMNS}"
        );

        sqlx::query_as::<_, Item>(&query)
            .bind(quantity)
            .bind(finished)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))
    }

    /// Permanently remove an item. Not a soft delete; history is kept via
    /// the `finished` flag, delete is the explicit way out. The store
    /// deletes by id regardless of state; restricting delete to finished
    /// items is the caller's responsibility.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete item: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Item {} not found", id)));
        }

        Ok(())
    }

    /// All active items, soonest expiration first, no-expiration last.
    pub async fn list_active(&self) -> Result<Vec<Item>> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM items \
             WHERE NOT finished \
             ORDER BY expiration_date ASC NULLS LAST, created_at ASC"
        );

        sqlx::query_as::<_, Item>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    pub async fn list_active_by_location(&self, location: &str) -> Result<Vec<Item>> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM items \
             WHERE NOT finished AND location = $1 \
             ORDER BY expiration_date ASC NULLS LAST, created_at ASC"
        );

        sqlx::query_as::<_, Item>(&query)
            .bind(location)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    /// Finished items, newest purchase first.
    pub async fn list_finished(&self) -> Result<Vec<Item>> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM items \
             WHERE finished \
             ORDER BY purchase_date DESC"
        );

        sqlx::query_as::<_, Item>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    /// Active items with an expiration date on or before `date`.
    pub async fn list_expiring_by(&self, date: NaiveDate) -> Result<Vec<Item>> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM items \
             WHERE NOT finished AND expiration_date IS NOT NULL AND expiration_date <= $1 \
             ORDER BY expiration_date ASC"
        );

        sqlx::query_as::<_, Item>(&query)
            .bind(date)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    /// Active items already expired as of `today`.
    pub async fn list_expired(&self, today: NaiveDate) -> Result<Vec<Item>> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM items \
             WHERE NOT finished AND expiration_date IS NOT NULL AND expiration_date < $1 \
             ORDER BY expiration_date ASC"
        );

        sqlx::query_as::<_, Item>(&query)
            .bind(today)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    /// Active items expiring between `today` and `warning_date` inclusive.
    pub async fn list_expiring_between(
        &self,
        today: NaiveDate,
        warning_date: NaiveDate,
    ) -> Result<Vec<Item>> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM items \
             WHERE NOT finished AND expiration_date IS NOT NULL \
               AND expiration_date >= $1 AND expiration_date <= $2 \
             ORDER BY expiration_date ASC"
        );

        sqlx::query_as::<_, Item>(&query)
            .bind(today)
            .bind(warning_date)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    /// Distinct locations across active items, for the filter dropdown.
    pub async fn distinct_locations(&self) -> Result<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT location FROM items WHERE NOT finished ORDER BY location",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    /// Distinct categories across all items (history included): the
    /// category vocabulary grows from whatever was ever entered.
    pub async fn distinct_categories(&self) -> Result<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM items \
             WHERE category IS NOT NULL AND category != '' \
             ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    /// Category of the most recently purchased item with this name,
    /// matched case-insensitively.
    pub async fn find_category_by_name(&self, name: &str) -> Result<Option<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT category FROM items \
             WHERE LOWER(name) = LOWER($1) AND category IS NOT NULL AND category != '' \
             ORDER BY purchase_date DESC \
             LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
