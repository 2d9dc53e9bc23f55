//! String assertions
//!
//! The subject is an `Option<&str>`: absence means `None` and nothing else.
//! Empty and whitespace-only strings are present values with their own
//! predicates, layered so that empty is a subset of whitespace:
//!
//! - `is_null` — absent
//! - `is_null_or_empty` — absent or zero-length
//! - `is_null_or_whitespace` — absent, zero-length, or all whitespace
//!
//! Every other predicate demands a present value and fails with the null
//! kind when the subject is absent. Length predicates count `char`s;
//! content predicates compare literal substrings case-sensitively.

use crate::error::ValidationError;
use crate::number::Number;
use crate::regex_helper;
use crate::validators::base::Validator;

/// Validator for string subjects.
///
/// Construct it from a plain `&str` or from an `Option<&str>` when the
/// value may be absent.
pub type StringValidator<'a> = Validator<'a, Option<&'a str>>;

impl<'a> Validator<'a, Option<&'a str>> {
    // ------------------------------------------------------------------
    // Null / empty / whitespace
    // ------------------------------------------------------------------

    /// Passes when the value is absent.
    pub fn is_null(&self) -> Result<&Self, ValidationError> {
        match self.value {
            None => Ok(self),
            Some(present) => Err(ValidationError::argument(
                format!(
                    "The argument `{}` should be null but was `{present}`",
                    self.argument_name
                ),
                present,
                self.argument_name,
            )),
        }
    }

    /// Passes when the value is present.
    pub fn is_not_null(&self) -> Result<&Self, ValidationError> {
        self.expect_present()?;
        Ok(self)
    }

    /// Passes when the value is absent or empty.
    pub fn is_null_or_empty(&self) -> Result<&Self, ValidationError> {
        match self.value {
            None | Some("") => Ok(self),
            Some(present) => Err(ValidationError::argument(
                format!(
                    "The argument `{}` should be null or empty but was `{present}`",
                    self.argument_name
                ),
                present,
                self.argument_name,
            )),
        }
    }

    /// Passes when the value is present and non-empty.
    pub fn is_not_null_or_empty(&self) -> Result<&Self, ValidationError> {
        let value = self.expect_present()?;
        if value.is_empty() {
            return Err(ValidationError::argument(
                format!("The argument `{}` should not be empty", self.argument_name),
                value,
                self.argument_name,
            ));
        }
        Ok(self)
    }

    /// Passes when the value is absent, empty, or consists entirely of
    /// whitespace.
    pub fn is_null_or_whitespace(&self) -> Result<&Self, ValidationError> {
        // Empty is a subset of whitespace for this predicate.
        if self.is_null_or_empty().is_ok() {
            return Ok(self);
        }
        let value = self.expect_present()?;
        if value.chars().all(char::is_whitespace) {
            Ok(self)
        } else {
            Err(ValidationError::argument(
                format!(
                    "The argument `{}` should be null or whitespace but was `{value}`",
                    self.argument_name
                ),
                value,
                self.argument_name,
            ))
        }
    }

    /// Passes when the value is present, non-empty, and not whitespace-only.
    pub fn is_not_null_or_whitespace(&self) -> Result<&Self, ValidationError> {
        self.is_not_null_or_empty()?;
        let value = self.expect_present()?;
        if value.chars().all(char::is_whitespace) {
            return Err(ValidationError::argument(
                format!(
                    "The argument `{}` should not consist only of whitespace but was `{value}`",
                    self.argument_name
                ),
                value,
                self.argument_name,
            ));
        }
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Length
    // ------------------------------------------------------------------

    /// Passes when the value has fewer than `max_length` characters.
    pub fn is_shorter_than(&self, max_length: usize) -> Result<&Self, ValidationError> {
        let (value, length) = self.measured()?;
        if length < max_length {
            Ok(self)
        } else {
            Err(self
                .length_error(
                    format!(
                        "The argument `{}` should be shorter than `{max_length}` characters but is `{length}`",
                        self.argument_name
                    ),
                    value,
                )
                .with_max_value(bound(max_length)))
        }
    }

    /// Passes when the value has at most `max_length` characters.
    pub fn is_shorter_or_equal(&self, max_length: usize) -> Result<&Self, ValidationError> {
        let (value, length) = self.measured()?;
        if length <= max_length {
            Ok(self)
        } else {
            Err(self
                .length_error(
                    format!(
                        "The argument `{}` should be shorter than or equal to `{max_length}` characters but is `{length}`",
                        self.argument_name
                    ),
                    value,
                )
                .with_max_value(bound(max_length)))
        }
    }

    /// Passes when the value has more than `min_length` characters.
    pub fn is_longer_than(&self, min_length: usize) -> Result<&Self, ValidationError> {
        let (value, length) = self.measured()?;
        if length > min_length {
            Ok(self)
        } else {
            Err(self
                .length_error(
                    format!(
                        "The argument `{}` should be longer than `{min_length}` characters but is `{length}`",
                        self.argument_name
                    ),
                    value,
                )
                .with_min_value(bound(min_length)))
        }
    }

    /// Passes when the value has at least `min_length` characters.
    pub fn is_longer_or_equal(&self, min_length: usize) -> Result<&Self, ValidationError> {
        let (value, length) = self.measured()?;
        if length >= min_length {
            Ok(self)
        } else {
            Err(self
                .length_error(
                    format!(
                        "The argument `{}` should be longer than or equal to `{min_length}` characters but is `{length}`",
                        self.argument_name
                    ),
                    value,
                )
                .with_min_value(bound(min_length)))
        }
    }

    /// Passes when the value has exactly `length` characters.
    pub fn has_length(&self, length: usize) -> Result<&Self, ValidationError> {
        let (value, actual) = self.measured()?;
        if actual == length {
            Ok(self)
        } else {
            Err(self
                .length_error(
                    format!(
                        "The argument `{}` should have a length of `{length}` but is `{actual}`",
                        self.argument_name
                    ),
                    value,
                )
                .with_equal_to(bound(length)))
        }
    }

    /// Passes when the value does not have exactly `length` characters.
    pub fn does_not_have_length(&self, length: usize) -> Result<&Self, ValidationError> {
        let (value, actual) = self.measured()?;
        if actual != length {
            Ok(self)
        } else {
            Err(self
                .length_error(
                    format!(
                        "The argument `{}` should not have a length of `{length}`",
                        self.argument_name
                    ),
                    value,
                )
                .with_equal_to(bound(length)))
        }
    }

    // ------------------------------------------------------------------
    // Content
    // ------------------------------------------------------------------

    /// Passes when the value starts with `prefix` (case-sensitive).
    pub fn starts_with(&self, prefix: &str) -> Result<&Self, ValidationError> {
        let value = self.expect_present()?;
        if value.starts_with(prefix) {
            Ok(self)
        } else {
            Err(self.content_error("start with", prefix, value))
        }
    }

    /// Passes when the value does not start with `prefix`.
    pub fn does_not_start_with(&self, prefix: &str) -> Result<&Self, ValidationError> {
        let value = self.expect_present()?;
        if !value.starts_with(prefix) {
            Ok(self)
        } else {
            Err(self.content_error("not start with", prefix, value))
        }
    }

    /// Passes when the value ends with `suffix` (case-sensitive).
    pub fn ends_with(&self, suffix: &str) -> Result<&Self, ValidationError> {
        let value = self.expect_present()?;
        if value.ends_with(suffix) {
            Ok(self)
        } else {
            Err(self.content_error("end with", suffix, value))
        }
    }

    /// Passes when the value does not end with `suffix`.
    pub fn does_not_end_with(&self, suffix: &str) -> Result<&Self, ValidationError> {
        let value = self.expect_present()?;
        if !value.ends_with(suffix) {
            Ok(self)
        } else {
            Err(self.content_error("not end with", suffix, value))
        }
    }

    /// Passes when the value contains `needle` (case-sensitive).
    pub fn contains(&self, needle: &str) -> Result<&Self, ValidationError> {
        let value = self.expect_present()?;
        if value.contains(needle) {
            Ok(self)
        } else {
            Err(self.content_error("contain", needle, value))
        }
    }

    /// Passes when the value does not contain `needle`.
    pub fn does_not_contain(&self, needle: &str) -> Result<&Self, ValidationError> {
        let value = self.expect_present()?;
        if !value.contains(needle) {
            Ok(self)
        } else {
            Err(self.content_error("not contain", needle, value))
        }
    }

    /// Passes when the value equals `expected` (literal, case-sensitive).
    pub fn equals(&self, expected: &str) -> Result<&Self, ValidationError> {
        let value = self.expect_present()?;
        if value == expected {
            Ok(self)
        } else {
            Err(self.content_error("equal", expected, value))
        }
    }

    /// Passes when the value differs from `expected`.
    pub fn does_not_equal(&self, expected: &str) -> Result<&Self, ValidationError> {
        let value = self.expect_present()?;
        if value != expected {
            Ok(self)
        } else {
            Err(self.content_error("not equal", expected, value))
        }
    }

    // ------------------------------------------------------------------
    // Patterns
    // ------------------------------------------------------------------

    /// Passes when the value matches `pattern`.
    ///
    /// # Panics
    ///
    /// Panics when `pattern` is not a valid regular expression; a broken
    /// pattern is a defect in the calling code, not an invalid value.
    pub fn is_regex_match(&self, pattern: &str) -> Result<&Self, ValidationError> {
        let value = self.expect_present()?;
        match regex_helper::is_match(pattern, value) {
            Ok(true) => Ok(self),
            Ok(false) => Err(ValidationError::pattern_mismatch(
                format!(
                    "The argument `{}` should match the pattern `{pattern}` but was `{value}`",
                    self.argument_name
                ),
                value,
                self.argument_name,
                pattern,
            )),
            Err(error) => panic!("`{pattern}` is not a valid regex pattern: {error}"),
        }
    }

    /// Passes when the value does not match `pattern`.
    ///
    /// # Panics
    ///
    /// Panics when `pattern` is not a valid regular expression.
    pub fn is_not_regex_match(&self, pattern: &str) -> Result<&Self, ValidationError> {
        let value = self.expect_present()?;
        match regex_helper::is_match(pattern, value) {
            Ok(false) => Ok(self),
            Ok(true) => Err(ValidationError::pattern_mismatch(
                format!(
                    "The argument `{}` should not match the pattern `{pattern}` but was `{value}`",
                    self.argument_name
                ),
                value,
                self.argument_name,
                pattern,
            )),
            Err(error) => panic!("`{pattern}` is not a valid regex pattern: {error}"),
        }
    }

    // ------------------------------------------------------------------
    // Sets
    // ------------------------------------------------------------------

    /// Passes when the value is an exact member of `set`.
    pub fn is_in_set(&self, set: &[&str]) -> Result<&Self, ValidationError> {
        let value = self.expect_present()?;
        if set.contains(&value) {
            Ok(self)
        } else {
            Err(self.set_error("be one of", set, value))
        }
    }

    /// Passes when the value is not an exact member of `set`.
    pub fn is_not_in_set(&self, set: &[&str]) -> Result<&Self, ValidationError> {
        let value = self.expect_present()?;
        if !set.contains(&value) {
            Ok(self)
        } else {
            Err(self.set_error("not be one of", set, value))
        }
    }

    /// Passes when the value is a member of `set`, ignoring case.
    pub fn is_in_set_case_insensitive(&self, set: &[&str]) -> Result<&Self, ValidationError> {
        let value = self.expect_present()?;
        if contains_case_insensitive(set, value) {
            Ok(self)
        } else {
            Err(self.set_error("be one of (ignoring case)", set, value))
        }
    }

    /// Passes when the value is not a member of `set`, ignoring case.
    pub fn is_not_in_set_case_insensitive(&self, set: &[&str]) -> Result<&Self, ValidationError> {
        let value = self.expect_present()?;
        if !contains_case_insensitive(set, value) {
            Ok(self)
        } else {
            Err(self.set_error("not be one of (ignoring case)", set, value))
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn expect_present(&self) -> Result<&'a str, ValidationError> {
        self.value
            .ok_or_else(|| ValidationError::null(self.argument_name))
    }

    fn measured(&self) -> Result<(&'a str, usize), ValidationError> {
        let value = self.expect_present()?;
        Ok((value, value.chars().count()))
    }

    fn length_error(&self, message: String, value: &str) -> ValidationError {
        ValidationError::out_of_range(message, value, self.argument_name)
    }

    fn content_error(&self, condition: &str, expected: &str, value: &str) -> ValidationError {
        ValidationError::argument(
            format!(
                "The argument `{}` should {condition} `{expected}` but was `{value}`",
                self.argument_name
            ),
            value,
            self.argument_name,
        )
    }

    fn set_error(&self, condition: &str, set: &[&str], value: &str) -> ValidationError {
        ValidationError::argument(
            format!(
                "The argument `{}` should {condition} {set:?} but was `{value}`",
                self.argument_name
            ),
            value,
            self.argument_name,
        )
    }
}

// String lengths always fit in i64; the fallback is unreachable.
fn bound(length: usize) -> Number {
    Number::Int(i64::try_from(length).unwrap_or(i64::MAX))
}

fn contains_case_insensitive(set: &[&str], value: &str) -> bool {
    let folded = value.to_lowercase();
    set.iter().any(|member| member.to_lowercase() == folded)
}

// ============================================================================
// TESTS
// ============================================================================
