//! The todo service: orchestrates reads and writes against the item and
//! list stores.
//!
//! Every operation resolves its target once - the default (today) list is
//! backed by standalone item rows, named lists by a single embedded
//! document - and then talks to exactly one of the two repositories.

use sqlx::PgPool;

use daylist_core::{ItemId, ItemName, ListName, ListTarget};

use crate::dates;
use crate::db::{ItemRepository, ListRepository};
use crate::error::{AppError, Result};
use crate::models::Item;

/// Names of the items seeded into any newly created or emptied-out list.
const DEFAULT_ITEM_NAMES: [&str; 3] = [
    "Welcome to your todolist!",
    "Hit the + to add a new item",
    "<-- Hit this to delete an item",
];

/// A rendered list page: the title plus the items to show.
#[derive(Debug)]
pub struct ListPage {
    /// Page title; for the default list this is the date key.
    pub title: String,
    /// Items in display order.
    pub items: Vec<Item>,
}

/// Outcome of viewing the default list.
#[derive(Debug)]
pub enum TodayView {
    /// The store was empty and has been seeded; the caller should redirect
    /// to `/` and re-fetch.
    Seeded,
    /// The page to render.
    Page(ListPage),
}

/// Outcome of viewing a named list.
#[derive(Debug)]
pub enum NamedView {
    /// The requested name is today's date key; the default list never
    /// exists as a list document, so the caller should redirect to `/`.
    RedirectHome,
    /// The page to render.
    Page(ListPage),
}

/// Orchestrates the five todo operations over the two stores.
pub struct TodoService<'a> {
    items: ItemRepository<'a>,
    lists: ListRepository<'a>,
}

impl<'a> TodoService<'a> {
    /// Create a service over the shared pool.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            items: ItemRepository::new(pool),
            lists: ListRepository::new(pool),
        }
    }

    /// Freshly constructed default seed items.
    ///
    /// Built anew on every call so each seeded list gets its own ids and
    /// timestamps.
    #[must_use]
    pub fn default_items() -> Vec<Item> {
        DEFAULT_ITEM_NAMES
            .iter()
            .filter_map(|name| ItemName::parse(name).ok())
            .map(Item::new)
            .collect()
    }

    /// View the default list.
    ///
    /// Seeds the default items when the item store is entirely empty.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` on storage failure.
    pub async fn view_today(&self) -> Result<TodayView> {
        let items = self.items.find_all().await?;

        if items.is_empty() {
            // Re-check global emptiness right before inserting; a concurrent
            // request may have seeded between the fetch and now.
            if self.items.is_empty().await? {
                self.items.insert_many(&Self::default_items()).await?;
                tracing::info!("Seeded default items into empty item store");
            }
            return Ok(TodayView::Seeded);
        }

        Ok(TodayView::Page(ListPage {
            title: dates::today_title(),
            items,
        }))
    }

    /// View a named list, creating it on first visit.
    ///
    /// The raw route parameter is normalized (trimmed, capitalized) before
    /// lookup. Creation is an atomic upsert seeded with fresh default
    /// items, so concurrent first visits produce exactly one list.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for a blank or overlong name and
    /// `AppError::Database` on storage failure.
    pub async fn view_named(&self, raw_name: &str) -> Result<NamedView> {
        // Resolve before normalizing: the date key is capitalized mid-string
        // ("Saturday, June 1") and normalization would mangle it.
        if ListTarget::resolve(raw_name.trim(), &dates::today_title()).is_today() {
            return Ok(NamedView::RedirectHome);
        }

        let name = ListName::from_route_param(raw_name)?;

        let list = self
            .lists
            .find_or_create(&name, &Self::default_items())
            .await?;

        Ok(NamedView::Page(ListPage {
            title: list.name,
            items: list.items,
        }))
    }

    /// Add an item to the targeted list.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for a blank item name,
    /// `AppError::NotFound` if a named target doesn't exist, and
    /// `AppError::Database` on storage failure.
    pub async fn add_item(&self, target: &ListTarget, raw_name: &str) -> Result<()> {
        let name = ItemName::parse(raw_name)?;
        let item = Item::new(name);

        match target {
            ListTarget::Today => self.items.insert(&item).await?,
            ListTarget::Named(list_name) => {
                let found = self.lists.push_item(list_name, &item).await?;
                if !found {
                    return Err(AppError::NotFound(format!("list '{list_name}'")));
                }
            }
        }

        Ok(())
    }

    /// Rename an item in the targeted list.
    ///
    /// An id that matches nothing is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` for an unparseable id,
    /// `AppError::Validation` for a blank title, and `AppError::Database`
    /// on storage failure.
    pub async fn edit_item(
        &self,
        target: &ListTarget,
        raw_id: &str,
        raw_title: &str,
    ) -> Result<()> {
        let id = parse_item_id(raw_id)?;
        let name = ItemName::parse(raw_title)?;

        let matched = match target {
            ListTarget::Today => self.items.update_name(id, &name).await?,
            ListTarget::Named(list_name) => {
                self.lists.update_item_name(list_name, id, &name).await?
            }
        };

        if !matched {
            tracing::debug!(%id, "Edit targeted a missing item or list; no-op");
        }

        Ok(())
    }

    /// Delete an item from the targeted list.
    ///
    /// An id that matches nothing is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` for an unparseable id and
    /// `AppError::Database` on storage failure.
    pub async fn delete_item(&self, target: &ListTarget, raw_id: &str) -> Result<()> {
        let id = parse_item_id(raw_id)?;

        let matched = match target {
            ListTarget::Today => self.items.delete(id).await?,
            ListTarget::Named(list_name) => self.lists.remove_item(list_name, id).await?,
        };

        if !matched {
            tracing::debug!(%id, "Delete targeted a missing item or list; no-op");
        }

        Ok(())
    }
}

fn parse_item_id(raw: &str) -> Result<ItemId> {
    ItemId::parse(raw.trim()).map_err(|_| AppError::BadRequest("invalid item id".to_string()))
}
