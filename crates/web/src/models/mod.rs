//! Domain models.
//!
//! These types represent validated domain objects separate from database row
//! types. Items exist in two storage shapes - rows of the `item` table for
//! the default list, and entries of a list's embedded `jsonb` array - but
//! both shapes carry the same [`Item`] type.

pub mod item;
pub mod list;

pub use item::Item;
pub use list::List;
