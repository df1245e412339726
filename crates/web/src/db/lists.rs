//! List repository for named lists.
//!
//! A list is a single document: one row with the items embedded in a
//! `jsonb` array column. Element-level operations (push, in-place rename,
//! pull) are single statements, so each one is atomic; list creation uses
//! an upsert so at most one row ever exists per name, even under concurrent
//! first visits.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use daylist_core::{ItemId, ItemName, ListId, ListName};

use super::RepositoryError;
use crate::models::{Item, List};

/// Raw row shape for the `list` table.
#[derive(sqlx::FromRow)]
struct ListRow {
    id: Uuid,
    name: String,
    items: serde_json::Value,
    created_at: DateTime<Utc>,
}

impl ListRow {
    fn into_list(self) -> Result<List, RepositoryError> {
        Ok(List {
            id: ListId::new(self.id),
            name: self.name,
            items: decode_items(self.items)?,
            created_at: self.created_at,
        })
    }
}

/// Decode the embedded `jsonb` items array.
fn decode_items(value: serde_json::Value) -> Result<Vec<Item>, RepositoryError> {
    serde_json::from_value(value)
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid embedded items: {e}")))
}

fn encode_items(items: &[Item]) -> Result<serde_json::Value, RepositoryError> {
    serde_json::to_value(items)
        .map_err(|e| RepositoryError::DataCorruption(format!("failed to serialize items: {e}")))
}

/// Repository for named list documents.
pub struct ListRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ListRepository<'a> {
    /// Create a new list repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a list by its exact name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the embedded items are invalid.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<List>, RepositoryError> {
        let row = sqlx::query_as::<_, ListRow>(
            r"
            SELECT id, name, items, created_at
            FROM list
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        row.map(ListRow::into_list).transpose()
    }

    /// Get a list by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the embedded items are invalid.
    pub async fn find_by_id(&self, id: ListId) -> Result<Option<List>, RepositoryError> {
        let row = sqlx::query_as::<_, ListRow>(
            r"
            SELECT id, name, items, created_at
            FROM list
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(ListRow::into_list).transpose()
    }

    /// Get the list with the given name, creating it seeded with `seed_items`
    /// if it doesn't exist yet.
    ///
    /// This is a single atomic upsert: concurrent first visits to the same
    /// name produce exactly one row, and the seed items are only persisted
    /// on insert.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the embedded items are invalid.
    pub async fn find_or_create(
        &self,
        name: &ListName,
        seed_items: &[Item],
    ) -> Result<List, RepositoryError> {
        let row = sqlx::query_as::<_, ListRow>(
            r"
            INSERT INTO list (id, name, items, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name, items, created_at
            ",
        )
        .bind(ListId::generate())
        .bind(name.as_str())
        .bind(encode_items(seed_items)?)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        row.into_list()
    }

    /// Append an item to a list's embedded sequence.
    ///
    /// # Returns
    ///
    /// Returns `true` if the list exists, `false` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn push_item(&self, name: &str, item: &Item) -> Result<bool, RepositoryError> {
        let encoded = serde_json::to_value(item)
            .map_err(|e| RepositoryError::DataCorruption(format!("failed to serialize item: {e}")))?;

        // jsonb `||` appends a non-array right operand to an array
        let result = sqlx::query(
            r"
            UPDATE list
            SET items = items || $2
            WHERE name = $1
            ",
        )
        .bind(name)
        .bind(encoded)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Rename the embedded item matching `id` inside the list matching `name`.
    ///
    /// Only the matching element's `name` field changes; other elements and
    /// fields are untouched. A missing element is a no-op.
    ///
    /// # Returns
    ///
    /// Returns `true` if the list exists, `false` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update_item_name(
        &self,
        name: &str,
        id: ItemId,
        new_name: &ItemName,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE list
            SET items = (
                SELECT COALESCE(
                    jsonb_agg(
                        CASE WHEN t.entry->>'id' = $2
                             THEN jsonb_set(t.entry, '{name}', to_jsonb($3::text))
                             ELSE t.entry
                        END
                        ORDER BY t.ord
                    ),
                    '[]'::jsonb
                )
                FROM jsonb_array_elements(items) WITH ORDINALITY AS t(entry, ord)
            )
            WHERE name = $1
            ",
        )
        .bind(name)
        .bind(id.to_string())
        .bind(new_name.as_str())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove the embedded item matching `id` from the list matching `name`.
    ///
    /// A missing element is a no-op.
    ///
    /// # Returns
    ///
    /// Returns `true` if the list exists, `false` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn remove_item(&self, name: &str, id: ItemId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE list
            SET items = (
                SELECT COALESCE(jsonb_agg(t.entry ORDER BY t.ord), '[]'::jsonb)
                FROM jsonb_array_elements(items) WITH ORDINALITY AS t(entry, ord)
                WHERE t.entry->>'id' <> $2
            )
            WHERE name = $1
            ",
        )
        .bind(name)
        .bind(id.to_string())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn seed(names: &[&str]) -> Vec<Item> {
        names
            .iter()
            .map(|n| Item::new(ItemName::parse(n).unwrap()))
            .collect()
    }

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL database (DATABASE_URL)"]
    async fn find_or_create_creates_exactly_one_row_per_name(pool: PgPool) {
        let repo = ListRepository::new(&pool);
        let name = ListName::parse("Groceries").unwrap();

        let first = repo
            .find_or_create(&name, &seed(&["A", "B", "C"]))
            .await
            .unwrap();
        assert_eq!(first.items.len(), 3);

        // A second visit returns the same document; the fresh seed is discarded.
        let second = repo.find_or_create(&name, &seed(&["X"])).await.unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.items, first.items);

        let by_name = repo.find_by_name("Groceries").await.unwrap().unwrap();
        assert_eq!(by_name.id, first.id);
        let by_id = repo.find_by_id(first.id).await.unwrap().unwrap();
        assert_eq!(by_id.name, "Groceries");
    }

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL database (DATABASE_URL)"]
    async fn push_edit_and_remove_touch_only_their_element(pool: PgPool) {
        let repo = ListRepository::new(&pool);
        let name = ListName::parse("Errands").unwrap();
        let list = repo
            .find_or_create(&name, &seed(&["First", "Second", "Third"]))
            .await
            .unwrap();
        let target = list.items[1].clone();

        let extra = Item::new(ItemName::parse("Fourth").unwrap());
        assert!(repo.push_item("Errands", &extra).await.unwrap());

        let renamed = ItemName::parse("Renamed").unwrap();
        assert!(
            repo.update_item_name("Errands", target.id, &renamed)
                .await
                .unwrap()
        );
        let after_edit = repo.find_by_name("Errands").await.unwrap().unwrap();
        let names: Vec<&str> = after_edit.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["First", "Renamed", "Third", "Fourth"]);
        // Only the name field of the matching element changed
        assert_eq!(after_edit.items[1].id, target.id);
        assert_eq!(after_edit.items[1].created_at, target.created_at);
        assert_eq!(after_edit.items[0], list.items[0]);
        assert_eq!(after_edit.items[2], list.items[2]);

        assert!(repo.remove_item("Errands", target.id).await.unwrap());
        let after_remove = repo.find_by_name("Errands").await.unwrap().unwrap();
        let names: Vec<&str> = after_remove.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["First", "Third", "Fourth"]);

        // Re-removing the same id is a no-op
        assert!(repo.remove_item("Errands", target.id).await.unwrap());
        let unchanged = repo.find_by_name("Errands").await.unwrap().unwrap();
        assert_eq!(unchanged.items, after_remove.items);
    }

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL database (DATABASE_URL)"]
    async fn element_operations_report_missing_lists(pool: PgPool) {
        let repo = ListRepository::new(&pool);
        let item = Item::new(ItemName::parse("Milk").unwrap());
        let renamed = ItemName::parse("Oat milk").unwrap();

        assert!(repo.find_by_name("Nowhere").await.unwrap().is_none());
        assert!(!repo.push_item("Nowhere", &item).await.unwrap());
        assert!(
            !repo
                .update_item_name("Nowhere", item.id, &renamed)
                .await
                .unwrap()
        );
        assert!(!repo.remove_item("Nowhere", item.id).await.unwrap());
    }

    #[test]
    fn decode_items_accepts_encoded_items() {
        let items = vec![
            Item::new(ItemName::parse("Milk").unwrap()),
            Item::new(ItemName::parse("Eggs").unwrap()),
        ];
        let decoded = decode_items(encode_items(&items).unwrap()).unwrap();
        assert_eq!(decoded, items);
    }

    #[test]
    fn decode_items_accepts_empty_array() {
        let decoded = decode_items(serde_json::json!([])).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn decode_items_flags_corrupt_data() {
        let err = decode_items(serde_json::json!({"not": "an array"})).unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(_)));

        let err = decode_items(serde_json::json!([{"id": "not-a-uuid"}])).unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
    }
}
