//! Resolution of a raw list name into the store it addresses.

/// The storage target an operation addresses.
///
/// The default list is keyed by today's formatted date string: forms render
/// the page title into a hidden `list` field, and the title of the default
/// page *is* the date key. Resolving the raw name once at the entry of each
/// operation replaces scattered string comparisons against the date key.
///
/// A `Named` target preserves the raw string exactly as submitted - named
/// lists are looked up by exact name, and case normalization only happens
/// when a list is created from a route parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListTarget {
    /// The default list, stored as standalone item documents.
    Today,
    /// A named list, stored as a single list document with embedded items.
    Named(String),
}

impl ListTarget {
    /// Resolve a raw list name against the current date key.
    #[must_use]
    pub fn resolve(raw: &str, date_key: &str) -> Self {
        if raw == date_key {
            Self::Today
        } else {
            Self::Named(raw.to_owned())
        }
    }

    /// Returns `true` for the default (today) list.
    #[must_use]
    pub const fn is_today(&self) -> bool {
        matches!(self, Self::Today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_key_resolves_to_today() {
        let key = "Saturday, June 1";
        assert_eq!(ListTarget::resolve(key, key), ListTarget::Today);
    }

    #[test]
    fn other_names_resolve_to_named() {
        let target = ListTarget::resolve("Groceries", "Saturday, June 1");
        assert_eq!(target, ListTarget::Named("Groceries".to_owned()));
    }

    #[test]
    fn named_preserves_exact_string() {
        // No trimming or case folding: lookups must match what was submitted.
        let target = ListTarget::resolve(" groceries ", "Saturday, June 1");
        assert_eq!(target, ListTarget::Named(" groceries ".to_owned()));
    }
}
