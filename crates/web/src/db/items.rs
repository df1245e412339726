//! Item repository for the default (today) list.
//!
//! Standalone item documents: one row per item, newest rendered first.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use daylist_core::{ItemId, ItemName};

use super::RepositoryError;
use crate::models::Item;

/// Raw row shape for the `item` table.
#[derive(sqlx::FromRow)]
struct ItemRow {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

impl ItemRow {
    fn into_item(self) -> Result<Item, RepositoryError> {
        let name = ItemName::parse(&self.name).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid item name in database: {e}"))
        })?;

        Ok(Item {
            id: ItemId::new(self.id),
            name,
            created_at: self.created_at,
        })
    }
}

/// Repository for standalone item documents.
pub struct ItemRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ItemRepository<'a> {
    /// Create a new item repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch all items, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored name is invalid.
    pub async fn find_all(&self) -> Result<Vec<Item>, RepositoryError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r"
            SELECT id, name, created_at
            FROM item
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(ItemRow::into_item).collect()
    }

    /// Get a single item by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored name is invalid.
    pub async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, RepositoryError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r"
            SELECT id, name, created_at
            FROM item
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(ItemRow::into_item).transpose()
    }

    /// Returns `true` if the item store holds no documents at all.
    ///
    /// Seeding checks global emptiness, not emptiness of any particular view.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn is_empty(&self) -> Result<bool, RepositoryError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM item)")
            .fetch_one(self.pool)
            .await?;

        Ok(!exists)
    }

    /// Insert a single item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, item: &Item) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO item (id, name, created_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(item.id)
        .bind(item.name.as_str())
        .bind(item.created_at)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Insert several items in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any insert fails; nothing is
    /// persisted in that case.
    pub async fn insert_many(&self, items: &[Item]) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        for item in items {
            sqlx::query(
                r"
                INSERT INTO item (id, name, created_at)
                VALUES ($1, $2, $3)
                ",
            )
            .bind(item.id)
            .bind(item.name.as_str())
            .bind(item.created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Update an item's name in place.
    ///
    /// # Returns
    ///
    /// Returns `true` if a row matched, `false` if the id doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update_name(&self, id: ItemId, name: &ItemName) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE item
            SET name = $2
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(name.as_str())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete an item by id.
    ///
    /// # Returns
    ///
    /// Returns `true` if a row was deleted, `false` if the id doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ItemId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM item
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, Utc};
    use sqlx::PgPool;

    use super::*;

    /// Build an item backdated by `seconds_ago` so ordering is unambiguous.
    fn item_created_at(name: &str, seconds_ago: i64) -> Item {
        let mut item = Item::new(ItemName::parse(name).unwrap());
        item.created_at = Utc::now() - Duration::seconds(seconds_ago);
        item
    }

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL database (DATABASE_URL)"]
    async fn find_all_orders_newest_first(pool: PgPool) {
        let repo = ItemRepository::new(&pool);
        repo.insert_many(&[
            item_created_at("Oldest", 30),
            item_created_at("Middle", 20),
            item_created_at("Newest", 10),
        ])
        .await
        .unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name.into_inner())
            .collect();
        assert_eq!(names, ["Newest", "Middle", "Oldest"]);
    }

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL database (DATABASE_URL)"]
    async fn insert_makes_store_non_empty(pool: PgPool) {
        let repo = ItemRepository::new(&pool);
        assert!(repo.is_empty().await.unwrap());

        let item = item_created_at("Milk", 0);
        repo.insert(&item).await.unwrap();

        assert!(!repo.is_empty().await.unwrap());
        let found = repo.find_by_id(item.id).await.unwrap().unwrap();
        assert_eq!(found.id, item.id);
        assert_eq!(found.name.as_str(), "Milk");
        assert!(repo.find_by_id(ItemId::generate()).await.unwrap().is_none());
    }

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL database (DATABASE_URL)"]
    async fn update_and_delete_report_row_matches(pool: PgPool) {
        let repo = ItemRepository::new(&pool);
        let item = item_created_at("Milk", 0);
        repo.insert(&item).await.unwrap();

        let renamed = ItemName::parse("Oat milk").unwrap();
        assert!(repo.update_name(item.id, &renamed).await.unwrap());
        let found = repo.find_by_id(item.id).await.unwrap().unwrap();
        assert_eq!(found.name.as_str(), "Oat milk");
        assert!(!repo.update_name(ItemId::generate(), &renamed).await.unwrap());

        assert!(repo.delete(item.id).await.unwrap());
        // Re-deleting the same id is a no-op
        assert!(!repo.delete(item.id).await.unwrap());
        assert!(repo.is_empty().await.unwrap());
    }
}
