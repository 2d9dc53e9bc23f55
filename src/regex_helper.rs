//! Regex matching behind a boolean predicate
//!
//! The string validator consumes pattern matching as a capability only:
//! "does this text match this pattern". Compilation failures surface as
//! [`regex::Error`] so callers can tell a broken pattern apart from a
//! non-matching value.

use regex::Regex;

/// Returns whether `text` matches `pattern` anywhere.
///
/// # Errors
///
/// Returns [`regex::Error`] if `pattern` is not a valid regular expression.
pub fn is_match(pattern: &str, text: &str) -> Result<bool, regex::Error> {
    Ok(Regex::new(pattern)?.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_text() {
        assert!(is_match(r"^\d{3}-\d{4}$", "123-4567").unwrap());
    }

    #[test]
    fn non_matching_text() {
        assert!(!is_match(r"^\d{3}-\d{4}$", "invalid").unwrap());
    }

    #[test]
    fn unanchored_search() {
        assert!(is_match(r"\d+", "order 42 shipped").unwrap());
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(is_match(r"(unclosed", "anything").is_err());
    }
}
