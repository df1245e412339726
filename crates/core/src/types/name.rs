//! Validated item and list names.
//!
//! The persistence layer only accepts these types, so length and blankness
//! rules are enforced before anything touches storage.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`ItemName`] or [`ListName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The input is empty (or whitespace-only) after trimming.
    #[error("name cannot be empty")]
    Empty,
    /// The input is too long.
    #[error("name must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

fn parse_trimmed(s: &str, max: usize) -> Result<String, NameError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }
    if trimmed.chars().count() > max {
        return Err(NameError::TooLong { max });
    }
    Ok(trimmed.to_owned())
}

/// The name of a single to-do item.
///
/// ## Constraints
///
/// - Trimmed of surrounding whitespace
/// - Length: 1-200 characters after trimming
///
/// ## Examples
///
/// ```
/// use daylist_core::ItemName;
///
/// assert_eq!(ItemName::parse("  Milk ").unwrap().as_str(), "Milk");
/// assert!(ItemName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    /// Maximum length of an item name.
    pub const MAX_LENGTH: usize = 200;

    /// Parse an `ItemName` from a string, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::Empty`] for blank input and
    /// [`NameError::TooLong`] past 200 characters.
    pub fn parse(s: &str) -> Result<Self, NameError> {
        parse_trimmed(s, Self::MAX_LENGTH).map(Self)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ItemName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The name of a custom list.
///
/// ## Constraints
///
/// - Trimmed of surrounding whitespace
/// - Length: 1-50 characters after trimming
///
/// Lists created from a route parameter are case-normalized to capitalized
/// form via [`ListName::from_route_param`], so `/groceries` and `/GROCERIES`
/// land on the same "Groceries" list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ListName(String);

impl ListName {
    /// Maximum length of a list name.
    pub const MAX_LENGTH: usize = 50;

    /// Parse a `ListName` from a string, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::Empty`] for blank input and
    /// [`NameError::TooLong`] past 50 characters.
    pub fn parse(s: &str) -> Result<Self, NameError> {
        parse_trimmed(s, Self::MAX_LENGTH).map(Self)
    }

    /// Parse a `ListName` from a URL path segment, normalizing case.
    ///
    /// The first character is uppercased and the rest lowercased, so all
    /// case variants of a route resolve to one list.
    ///
    /// # Errors
    ///
    /// Same as [`ListName::parse`].
    pub fn from_route_param(s: &str) -> Result<Self, NameError> {
        let trimmed = parse_trimmed(s, Self::MAX_LENGTH)?;
        Ok(Self(capitalize(&trimmed)))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ListName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn item_name_trims() {
        let name = ItemName::parse("  Buy milk  ").unwrap();
        assert_eq!(name.as_str(), "Buy milk");
    }

    #[test]
    fn item_name_rejects_blank() {
        assert_eq!(ItemName::parse(""), Err(NameError::Empty));
        assert_eq!(ItemName::parse("   \t "), Err(NameError::Empty));
    }

    #[test]
    fn item_name_rejects_too_long() {
        let long = "x".repeat(201);
        assert_eq!(
            ItemName::parse(&long),
            Err(NameError::TooLong { max: 200 })
        );
        assert!(ItemName::parse(&"x".repeat(200)).is_ok());
    }

    #[test]
    fn list_name_bounds() {
        assert!(ListName::parse(&"x".repeat(50)).is_ok());
        assert_eq!(
            ListName::parse(&"x".repeat(51)),
            Err(NameError::TooLong { max: 50 })
        );
    }

    #[test]
    fn route_param_is_capitalized() {
        assert_eq!(
            ListName::from_route_param("groceries").unwrap().as_str(),
            "Groceries"
        );
        assert_eq!(
            ListName::from_route_param("GROCERIES").unwrap().as_str(),
            "Groceries"
        );
        assert_eq!(
            ListName::from_route_param(" work stuff ").unwrap().as_str(),
            "Work stuff"
        );
    }

    #[test]
    fn route_param_rejects_blank() {
        assert_eq!(ListName::from_route_param("  "), Err(NameError::Empty));
    }
}
