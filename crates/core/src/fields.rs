//! Column coercion for the flat-file tables.
//!
//! Every backing column is read as text. Key columns must parse; typed and
//! optional columns fall back to `None` instead of rejecting the row:
//!
//! | Helper            | Empty / unparsable |
//! |-------------------|--------------------|
//! | [`nullable`]      | `None`             |
//! | [`nullable_text`] | `None`             |
//! | [`required_id`]   | error              |
//!
//! Free-text columns (titles, line text) are kept exactly as written.

use std::str::FromStr;

use crate::types::DbId;

/// Parse a trimmed value, yielding `None` when it is empty or unparsable.
///
/// ```
/// use dialogue_core::fields::nullable;
///
/// assert_eq!(nullable::<i64>(" 42 "), Some(42));
/// assert_eq!(nullable::<i64>("n/a"), None);
/// assert_eq!(nullable::<f64>(""), None);
/// ```
pub fn nullable<T: FromStr>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Trimmed text, or `None` when the column is blank.
pub fn nullable_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Parse a primary-key column. The caller decides how to report the failure.
pub fn required_id(raw: &str) -> Result<DbId, String> {
    nullable(raw).ok_or_else(|| format!("invalid id {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nullable_zero_is_a_value() {
        assert_eq!(nullable::<i64>("0"), Some(0));
    }

    #[test]
    fn nullable_float() {
        assert_eq!(nullable::<f64>("7.9"), Some(7.9));
        assert_eq!(nullable::<f64>("seven"), None);
    }

    #[test]
    fn nullable_text_blank_is_none() {
        assert_eq!(nullable_text("   "), None);
        assert_eq!(nullable_text(" BIANCA "), Some("BIANCA".to_string()));
    }

    #[test]
    fn required_id_rejects_garbage() {
        assert_eq!(required_id("12"), Ok(12));
        assert!(required_id("").is_err());
        assert!(required_id("x12").is_err());
    }
}
