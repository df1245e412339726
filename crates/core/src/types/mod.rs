//! Core types for Daylist.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod name;
pub mod target;

pub use id::*;
pub use name::{ItemName, ListName, NameError};
pub use target::ListTarget;
