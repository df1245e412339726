//! To-do item domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use daylist_core::{ItemId, ItemName};

/// A single to-do entry.
///
/// Serde derives cover the embedded form: inside a named list, items are
/// persisted as entries of a `jsonb` array with exactly these fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Unique item ID, generated on creation, immutable.
    pub id: ItemId,
    /// Item text.
    pub name: ItemName,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Construct a new item with a fresh ID and the current timestamp.
    #[must_use]
    pub fn new(name: ItemName) -> Self {
        Self {
            id: ItemId::generate(),
            name,
            created_at: Utc::now(),
        }
    }
}
