//! Daylist Core - Shared domain types.
//!
//! This crate provides the validated domain types used by the web crate:
//! typed entity IDs, validated item/list names, and the [`ListTarget`]
//! resolution type that decides whether an operation addresses the default
//! (date-keyed) list or a named list.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
