//! Character name normalization.
//!
//! Corpus names are stored upper-case; lookups normalize the query the same
//! way so `bianca`, ` Bianca ` and `BIANCA` all hit the same index key.

/// Normalize a name into its index key (trimmed, upper-cased).
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Case-insensitive substring match. A missing name never matches.
pub fn name_contains(name: Option<&str>, needle: &str) -> bool {
    match name {
        Some(name) => name.to_uppercase().contains(&needle.to_uppercase()),
        None => false,
    }
}
