//! Named list domain type.

use chrono::{DateTime, Utc};

use daylist_core::ListId;

use super::Item;

/// A named collection of items.
///
/// The items are embedded: they have no identity outside the list except
/// their own `id`, which is used for in-list addressing. The default
/// (today) list is never represented as a `List` - it lives as standalone
/// item rows.
#[derive(Debug, Clone)]
pub struct List {
    /// Unique list ID.
    pub id: ListId,
    /// Lookup key; capitalized when created from a route parameter.
    pub name: String,
    /// Embedded items, in insertion order.
    pub items: Vec<Item>,
    /// When the list was created.
    pub created_at: DateTime<Utc>,
}
