//! Todo route handlers.
//!
//! Each operation has an explicit typed form struct; the `#[serde(rename)]`
//! attributes are the wire contract with the form fields in `list.html`
//! (including the historical `customeListName` spelling, which the
//! templates post).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use daylist_core::ListTarget;

use crate::dates;
use crate::error::Result;
use crate::filters;
use crate::models::Item;
use crate::services::TodoService;
use crate::services::todo::{ListPage, NamedView, TodayView};
use crate::state::AppState;

/// Item view for templates.
#[derive(Debug, Clone)]
pub struct ItemView {
    pub id: String,
    pub name: String,
}

impl From<Item> for ItemView {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.into_inner(),
        }
    }
}

/// The list page template, shared by the default and named list views.
#[derive(Template, WebTemplate)]
#[template(path = "list.html")]
pub struct ListTemplate {
    /// Page title; doubles as the hidden `list` form field, which is what
    /// routes submissions back to the right store.
    pub title: String,
    pub items: Vec<ItemView>,
}

impl From<ListPage> for ListTemplate {
    fn from(page: ListPage) -> Self {
        Self {
            title: page.title,
            items: page.items.into_iter().map(ItemView::from).collect(),
        }
    }
}

/// Form body for POST `/`.
#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    #[serde(rename = "newItem")]
    pub new_item: String,
    pub list: String,
}

/// Form body for POST `/edit`.
#[derive(Debug, Deserialize)]
pub struct EditItemForm {
    #[serde(rename = "updatedItemId")]
    pub item_id: String,
    #[serde(rename = "updatedItemTitle")]
    pub item_title: String,
    #[serde(rename = "customeListName")]
    pub list_name: String,
}

/// Form body for POST `/delete`.
#[derive(Debug, Deserialize)]
pub struct DeleteItemForm {
    #[serde(rename = "listName")]
    pub list_name: String,
    /// The checked item's id; the delete control is a checkbox.
    pub checkbox: String,
}

/// Redirect path for a target: `/` for today, `/<name>` for a named list.
fn redirect_path(target: &ListTarget) -> String {
    match target {
        ListTarget::Today => "/".to_string(),
        ListTarget::Named(name) => format!("/{}", urlencoding::encode(name)),
    }
}

fn redirect_to(target: &ListTarget) -> Redirect {
    Redirect::to(&redirect_path(target))
}

/// Display the default (today) list.
///
/// Seeds the three default items and redirects back to `/` when the item
/// store is empty.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<Response> {
    let service = TodoService::new(state.pool());

    match service.view_today().await? {
        TodayView::Seeded => Ok(Redirect::to("/").into_response()),
        TodayView::Page(page) => Ok(ListTemplate::from(page).into_response()),
    }
}

/// Display a named list, creating it on first visit.
#[instrument(skip(state))]
pub async fn show_list(
    State(state): State<AppState>,
    Path(list_name): Path<String>,
) -> Result<Response> {
    let service = TodoService::new(state.pool());

    match service.view_named(&list_name).await? {
        NamedView::RedirectHome => Ok(Redirect::to("/").into_response()),
        NamedView::Page(page) => Ok(ListTemplate::from(page).into_response()),
    }
}

/// Add an item to the list named in the form.
#[instrument(skip(state, form), fields(list = %form.list))]
pub async fn add_item(
    State(state): State<AppState>,
    Form(form): Form<AddItemForm>,
) -> Result<Redirect> {
    let service = TodoService::new(state.pool());
    let target = ListTarget::resolve(&form.list, &dates::today_title());

    service.add_item(&target, &form.new_item).await?;

    Ok(redirect_to(&target))
}

/// Edit an item's name.
#[instrument(skip(state, form), fields(list = %form.list_name))]
pub async fn edit_item(
    State(state): State<AppState>,
    Form(form): Form<EditItemForm>,
) -> Result<Redirect> {
    let service = TodoService::new(state.pool());
    let target = ListTarget::resolve(&form.list_name, &dates::today_title());

    service
        .edit_item(&target, &form.item_id, &form.item_title)
        .await?;

    Ok(redirect_to(&target))
}

/// Delete an item.
#[instrument(skip(state, form), fields(list = %form.list_name))]
pub async fn delete_item(
    State(state): State<AppState>,
    Form(form): Form<DeleteItemForm>,
) -> Result<Redirect> {
    let service = TodoService::new(state.pool());
    let target = ListTarget::resolve(&form.list_name, &dates::today_title());

    service.delete_item(&target, &form.checkbox).await?;

    Ok(redirect_to(&target))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn add_form_decodes_wire_names() {
        let form: AddItemForm =
            serde_urlencoded::from_str("newItem=Milk&list=Groceries").unwrap();
        assert_eq!(form.new_item, "Milk");
        assert_eq!(form.list, "Groceries");
    }

    #[test]
    fn add_form_requires_both_fields() {
        assert!(serde_urlencoded::from_str::<AddItemForm>("newItem=Milk").is_err());
        assert!(serde_urlencoded::from_str::<AddItemForm>("list=Groceries").is_err());
    }

    #[test]
    fn edit_form_decodes_wire_names() {
        let form: EditItemForm = serde_urlencoded::from_str(
            "updatedItemId=abc&updatedItemTitle=Oat+milk&customeListName=Groceries",
        )
        .unwrap();
        assert_eq!(form.item_id, "abc");
        assert_eq!(form.item_title, "Oat milk");
        assert_eq!(form.list_name, "Groceries");
    }

    #[test]
    fn delete_form_decodes_wire_names() {
        let form: DeleteItemForm =
            serde_urlencoded::from_str("listName=Groceries&checkbox=abc").unwrap();
        assert_eq!(form.list_name, "Groceries");
        assert_eq!(form.checkbox, "abc");
    }

    #[test]
    fn redirect_paths() {
        assert_eq!(redirect_path(&ListTarget::Today), "/");
        assert_eq!(
            redirect_path(&ListTarget::Named("Groceries".to_string())),
            "/Groceries"
        );
        assert_eq!(
            redirect_path(&ListTarget::Named("Work stuff".to_string())),
            "/Work%20stuff"
        );
    }

    #[test]
    fn item_view_carries_display_strings() {
        let item = Item::new(daylist_core::ItemName::parse("Milk").unwrap());
        let id = item.id.to_string();
        let view = ItemView::from(item);
        assert_eq!(view.id, id);
        assert_eq!(view.name, "Milk");
    }
}
