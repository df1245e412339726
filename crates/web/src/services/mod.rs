//! Business logic services.

pub mod todo;

pub use todo::TodoService;
