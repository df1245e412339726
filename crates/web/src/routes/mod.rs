//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /               - Default (today) list; seeds defaults if the store is empty
//! POST /               - Add an item (form: newItem, list)
//! POST /edit           - Edit an item's name (form: updatedItemId, updatedItemTitle, customeListName)
//! POST /delete         - Delete an item (form: listName, checkbox)
//! GET  /{list_name}    - View a named list, creating it on first visit
//!
//! GET  /health         - Liveness check (in main.rs)
//! GET  /health/ready   - Readiness check (in main.rs)
//! GET  /static/*       - Static assets (ServeDir, in main.rs)
//! ```
//!
//! The wildcard `/{list_name}` route is registered last; axum prefers the
//! static routes above it.

pub mod todo;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(todo::home).post(todo::add_item))
        .route("/edit", post(todo::edit_item))
        .route("/delete", post(todo::delete_item))
        .route("/{list_name}", get(todo::show_list))
}
