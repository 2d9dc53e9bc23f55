//! Validation failure taxonomy
//!
//! Every failed assertion produces exactly one [`ValidationError`] of one
//! of four kinds. All kinds carry the human-readable message, a rendering
//! of the offending value, and the argument name; the range and pattern
//! kinds additionally carry the bound(s) or pattern that were violated.
//!
//! Errors are terminal: the library raises them at the point of detection
//! and never catches, retries, or logs them itself.

use thiserror::Error;

use crate::number::Number;

/// A structured validation failure.
///
/// The message in every kind reads as a complete sentence naming the
/// argument, the expected condition, and the actual value, so it can stand
/// alone in a log line.
///
/// # Examples
///
/// ```rust,ignore
/// use conditions::prelude::*;
///
/// let err = requires_num(-1, "port").is_greater_than(0).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "The argument `port` should be greater than `0`, but was `-1`",
/// );
/// assert_eq!(err.min_value(), Some(Number::Int(0)));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValidationError {
    /// Default kind for most failed predicates.
    #[error("{message}")]
    Argument {
        /// Assertion-specific description of the failure.
        message: String,
        /// Rendering of the offending value.
        value: String,
        /// Name of the checked argument.
        argument_name: String,
    },

    /// Value-absence failure.
    #[error("{message}")]
    Null {
        /// Assertion-specific description of the failure.
        message: String,
        /// Rendering of the offending value.
        value: String,
        /// Name of the checked argument.
        argument_name: String,
    },

    /// Numeric or length boundary failure, carrying the violated bound(s).
    #[error("{message}")]
    OutOfRange {
        /// Assertion-specific description of the failure.
        message: String,
        /// Rendering of the offending value.
        value: String,
        /// Name of the checked argument.
        argument_name: String,
        /// Lower bound that was violated, if any.
        min_value: Option<Number>,
        /// Upper bound that was violated, if any.
        max_value: Option<Number>,
        /// Equality target that was violated, if any.
        equal_to: Option<Number>,
    },

    /// Regex failure, carrying the pattern that did not match.
    #[error("{message}")]
    PatternMismatch {
        /// Assertion-specific description of the failure.
        message: String,
        /// Rendering of the offending value.
        value: String,
        /// Name of the checked argument.
        argument_name: String,
        /// The pattern the value was held against.
        pattern: String,
    },
}

impl ValidationError {
    /// Creates a generic argument error.
    pub fn argument(
        message: impl Into<String>,
        value: impl Into<String>,
        argument_name: impl Into<String>,
    ) -> Self {
        Self::Argument {
            message: message.into(),
            value: value.into(),
            argument_name: argument_name.into(),
        }
    }

    /// Creates the canonical null error for an absent value.
    pub fn null(argument_name: &str) -> Self {
        Self::Null {
            message: format!("The argument `{argument_name}` should not be null"),
            value: "null".to_owned(),
            argument_name: argument_name.to_owned(),
        }
    }

    /// Creates an out-of-range error with no bounds attached yet.
    ///
    /// Attach the violated bound(s) with [`with_min_value`](Self::with_min_value),
    /// [`with_max_value`](Self::with_max_value), or
    /// [`with_equal_to`](Self::with_equal_to).
    pub fn out_of_range(
        message: impl Into<String>,
        value: impl Into<String>,
        argument_name: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            message: message.into(),
            value: value.into(),
            argument_name: argument_name.into(),
            min_value: None,
            max_value: None,
            equal_to: None,
        }
    }

    /// Creates a pattern-mismatch error.
    pub fn pattern_mismatch(
        message: impl Into<String>,
        value: impl Into<String>,
        argument_name: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        Self::PatternMismatch {
            message: message.into(),
            value: value.into(),
            argument_name: argument_name.into(),
            pattern: pattern.into(),
        }
    }

    /// Attaches the violated lower bound. No-op for non-range kinds.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_min_value(mut self, min: impl Into<Number>) -> Self {
        if let Self::OutOfRange { min_value, .. } = &mut self {
            *min_value = Some(min.into());
        }
        self
    }

    /// Attaches the violated upper bound. No-op for non-range kinds.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max_value(mut self, max: impl Into<Number>) -> Self {
        if let Self::OutOfRange { max_value, .. } = &mut self {
            *max_value = Some(max.into());
        }
        self
    }

    /// Attaches the violated equality target. No-op for non-range kinds.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_equal_to(mut self, target: impl Into<Number>) -> Self {
        if let Self::OutOfRange { equal_to, .. } = &mut self {
            *equal_to = Some(target.into());
        }
        self
    }

    /// The human-readable failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Argument { message, .. }
            | Self::Null { message, .. }
            | Self::OutOfRange { message, .. }
            | Self::PatternMismatch { message, .. } => message,
        }
    }

    /// A rendering of the offending value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Argument { value, .. }
            | Self::Null { value, .. }
            | Self::OutOfRange { value, .. }
            | Self::PatternMismatch { value, .. } => value,
        }
    }

    /// The name of the checked argument.
    #[must_use]
    pub fn argument_name(&self) -> &str {
        match self {
            Self::Argument { argument_name, .. }
            | Self::Null { argument_name, .. }
            | Self::OutOfRange { argument_name, .. }
            | Self::PatternMismatch { argument_name, .. } => argument_name,
        }
    }

    /// The violated lower bound, for the out-of-range kind.
    #[must_use]
    pub fn min_value(&self) -> Option<Number> {
        match self {
            Self::OutOfRange { min_value, .. } => *min_value,
            _ => None,
        }
    }

    /// The violated upper bound, for the out-of-range kind.
    #[must_use]
    pub fn max_value(&self) -> Option<Number> {
        match self {
            Self::OutOfRange { max_value, .. } => *max_value,
            _ => None,
        }
    }

    /// The violated equality target, for the out-of-range kind.
    #[must_use]
    pub fn equal_to(&self) -> Option<Number> {
        match self {
            Self::OutOfRange { equal_to, .. } => *equal_to,
            _ => None,
        }
    }

    /// The pattern that failed to match, for the pattern-mismatch kind.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::PatternMismatch { pattern, .. } => Some(pattern),
            _ => None,
        }
    }

    /// Converts the error to a JSON value for structured diagnostics.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

// ============================================================================
// TESTS
// ============================================================================
