//! Dispatch from a raw subject to its typed validator
//!
//! [`requires`] and [`ensures`] classify a [`Subject`] with a single
//! exhaustive match and construct the matching validator. Classification
//! is exact: booleans convert through their own arm and never reach the
//! numeric ones, and only the canonical string types classify as strings.
//! New categories are added by extending the sum type.
//!
//! The type-pinned variants (`requires_bool`, `requires_num`,
//! `requires_str`, `requires_obj`) skip classification entirely and trust
//! the caller's compile-time type.

use std::any::Any;

use crate::number::Number;
use crate::validators::{
    BooleanValidator, NumberValidator, ObjectRef, ObjectValidator, StringValidator, Validator,
};

// ============================================================================
// SUBJECT
// ============================================================================

/// A raw value awaiting classification.
///
/// Primitive numerics, `bool`, and string references convert via `From`.
/// Arbitrary objects have no blanket conversion; wrap them explicitly:
///
/// ```rust,ignore
/// let validator = requires(Subject::object(&config), "config");
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    /// A boolean value.
    Boolean(bool),
    /// An integral numeric value.
    Integer(i64),
    /// A floating-point numeric value.
    Float(f64),
    /// A string slice.
    Str(&'a str),
    /// Any other value, type-erased.
    Object(ObjectRef<'a>),
}

impl<'a> Subject<'a> {
    /// Wraps an arbitrary value for object classification.
    pub fn object<T: Any>(value: &'a T) -> Self {
        Subject::Object(ObjectRef::of(Some(value)))
    }
}

impl From<bool> for Subject<'_> {
    fn from(value: bool) -> Self {
        Subject::Boolean(value)
    }
}

macro_rules! impl_subject_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Subject<'_> {
                fn from(value: $ty) -> Self {
                    Subject::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_subject_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Subject<'_> {
    fn from(value: f32) -> Self {
        Subject::Float(f64::from(value))
    }
}

impl From<f64> for Subject<'_> {
    fn from(value: f64) -> Self {
        Subject::Float(value)
    }
}

impl<'a> From<&'a str> for Subject<'a> {
    fn from(value: &'a str) -> Self {
        Subject::Str(value)
    }
}

impl<'a> From<&'a String> for Subject<'a> {
    fn from(value: &'a String) -> Self {
        Subject::Str(value.as_str())
    }
}

impl<'a> From<ObjectRef<'a>> for Subject<'a> {
    fn from(value: ObjectRef<'a>) -> Self {
        Subject::Object(value)
    }
}

// ============================================================================
// DISPATCHED VALIDATOR
// ============================================================================

/// The category a subject classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKind {
    /// Boolean subjects.
    Boolean,
    /// Integral and floating-point subjects.
    Number,
    /// String subjects.
    String,
    /// Everything else.
    Object,
}

impl std::fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SubjectKind::Boolean => "boolean",
            SubjectKind::Number => "number",
            SubjectKind::String => "string",
            SubjectKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// The validator produced by auto-detecting dispatch.
///
/// Match on it, or use the consuming `into_*` accessors when the expected
/// category is known.
#[derive(Debug, Clone)]
pub enum AnyValidator<'a> {
    /// The subject classified as a boolean.
    Boolean(BooleanValidator<'a>),
    /// The subject classified as a number.
    Number(NumberValidator<'a>),
    /// The subject classified as a string.
    String(StringValidator<'a>),
    /// The subject classified as an object.
    Object(ObjectValidator<'a>),
}

impl<'a> AnyValidator<'a> {
    /// The category the subject classified into.
    #[must_use]
    pub fn kind(&self) -> SubjectKind {
        match self {
            AnyValidator::Boolean(_) => SubjectKind::Boolean,
            AnyValidator::Number(_) => SubjectKind::Number,
            AnyValidator::String(_) => SubjectKind::String,
            AnyValidator::Object(_) => SubjectKind::Object,
        }
    }

    /// The argument name the wrapped validator reports under.
    #[must_use]
    pub fn argument_name(&self) -> &str {
        match self {
            AnyValidator::Boolean(v) => v.argument_name(),
            AnyValidator::Number(v) => v.argument_name(),
            AnyValidator::String(v) => v.argument_name(),
            AnyValidator::Object(v) => v.argument_name(),
        }
    }

    /// Unwraps the boolean validator.
    ///
    /// # Panics
    ///
    /// Panics when the subject classified as another category; asking for
    /// the wrong validator is a defect in the calling code.
    #[must_use]
    pub fn into_boolean(self) -> BooleanValidator<'a> {
        match self {
            AnyValidator::Boolean(v) => v,
            other => other.kind_mismatch(SubjectKind::Boolean),
        }
    }

    /// Unwraps the number validator.
    ///
    /// # Panics
    ///
    /// Panics when the subject classified as another category.
    #[must_use]
    pub fn into_number(self) -> NumberValidator<'a> {
        match self {
            AnyValidator::Number(v) => v,
            other => other.kind_mismatch(SubjectKind::Number),
        }
    }

    /// Unwraps the string validator.
    ///
    /// # Panics
    ///
    /// Panics when the subject classified as another category.
    #[must_use]
    pub fn into_string(self) -> StringValidator<'a> {
        match self {
            AnyValidator::String(v) => v,
            other => other.kind_mismatch(SubjectKind::String),
        }
    }

    /// Unwraps the object validator.
    ///
    /// # Panics
    ///
    /// Panics when the subject classified as another category.
    #[must_use]
    pub fn into_object(self) -> ObjectValidator<'a> {
        match self {
            AnyValidator::Object(v) => v,
            other => other.kind_mismatch(SubjectKind::Object),
        }
    }

    fn kind_mismatch(&self, requested: SubjectKind) -> ! {
        panic!(
            "the argument `{}` classified as a {} subject, not a {} subject",
            self.argument_name(),
            self.kind(),
            requested
        )
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Precondition: classifies `value` and returns the matching validator.
pub fn requires<'a>(value: impl Into<Subject<'a>>, argument_name: &'a str) -> AnyValidator<'a> {
    match value.into() {
        Subject::Boolean(v) => AnyValidator::Boolean(Validator::new(v, argument_name)),
        Subject::Integer(v) => AnyValidator::Number(Validator::new(Number::Int(v), argument_name)),
        Subject::Float(v) => AnyValidator::Number(Validator::new(Number::Float(v), argument_name)),
        Subject::Str(v) => AnyValidator::String(Validator::new(Some(v), argument_name)),
        Subject::Object(v) => AnyValidator::Object(Validator::new(v, argument_name)),
    }
}

/// Postcondition counterpart of [`requires`]; identical mechanics.
pub fn ensures<'a>(value: impl Into<Subject<'a>>, argument_name: &'a str) -> AnyValidator<'a> {
    requires(value, argument_name)
}

/// Precondition on a value already known to be boolean.
pub fn requires_bool(value: bool, argument_name: &str) -> BooleanValidator<'_> {
    Validator::new(value, argument_name)
}

/// Postcondition counterpart of [`requires_bool`].
pub fn ensures_bool(value: bool, argument_name: &str) -> BooleanValidator<'_> {
    requires_bool(value, argument_name)
}

/// Precondition on a value already known to be numeric.
pub fn requires_num(value: impl Into<Number>, argument_name: &str) -> NumberValidator<'_> {
    Validator::new(value.into(), argument_name)
}

/// Postcondition counterpart of [`requires_num`].
pub fn ensures_num(value: impl Into<Number>, argument_name: &str) -> NumberValidator<'_> {
    requires_num(value, argument_name)
}

/// Precondition on a value already known to be a string.
///
/// Accepts a plain `&str` or an `Option<&str>` when the value may be
/// absent.
pub fn requires_str<'a>(
    value: impl Into<Option<&'a str>>,
    argument_name: &'a str,
) -> StringValidator<'a> {
    Validator::new(value.into(), argument_name)
}

/// Postcondition counterpart of [`requires_str`].
pub fn ensures_str<'a>(
    value: impl Into<Option<&'a str>>,
    argument_name: &'a str,
) -> StringValidator<'a> {
    requires_str(value, argument_name)
}

/// Precondition on an arbitrary object.
///
/// Accepts a plain `&T` or an `Option<&T>` when the value may be absent.
pub fn requires_obj<'a, T: Any>(
    value: impl Into<Option<&'a T>>,
    argument_name: &'a str,
) -> ObjectValidator<'a> {
    Validator::new(ObjectRef::of(value.into()), argument_name)
}

/// Postcondition counterpart of [`requires_obj`].
pub fn ensures_obj<'a, T: Any>(
    value: impl Into<Option<&'a T>>,
    argument_name: &'a str,
) -> ObjectValidator<'a> {
    requires_obj(value, argument_name)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Payload {
        #[allow(dead_code)]
        body: &'static str,
    }

    #[test]
    fn booleans_classify_as_boolean() {
        assert_eq!(requires(true, "flag").kind(), SubjectKind::Boolean);
        assert_eq!(requires(false, "flag").kind(), SubjectKind::Boolean);
    }

    #[test]
    fn integers_and_floats_classify_as_number() {
        assert_eq!(requires(5, "n").kind(), SubjectKind::Number);
        assert_eq!(requires(5.5, "n").kind(), SubjectKind::Number);
        assert_eq!(requires(7_589_724i64, "n").kind(), SubjectKind::Number);
        assert_eq!(requires(80_188.76f64, "n").kind(), SubjectKind::Number);
    }

    #[test]
    fn strings_classify_as_string() {
        assert_eq!(requires("test", "s").kind(), SubjectKind::String);
        let owned = String::from("this_is_my_value");
        assert_eq!(requires(&owned, "s").kind(), SubjectKind::String);
    }

    #[test]
    fn arbitrary_objects_classify_as_object() {
        let payload = Payload { body: "x" };
        let validator = requires(Subject::object(&payload), "payload");
        assert_eq!(validator.kind(), SubjectKind::Object);
        assert!(validator.into_object().is_of_type::<Payload>().is_ok());
    }

    #[test]
    fn into_accessors_unwrap_the_matching_kind() {
        assert!(requires(true, "flag").into_boolean().is_true().is_ok());
        assert!(requires(5, "n").into_number().is_positive().is_ok());
        assert!(requires("s", "s").into_string().is_not_null().is_ok());
    }

    #[test]
    #[should_panic(expected = "classified as a number subject, not a string subject")]
    fn into_accessor_panics_on_kind_mismatch() {
        let _ = requires(5, "n").into_string();
    }

    #[test]
    fn argument_name_survives_dispatch() {
        assert_eq!(requires(5, "count").argument_name(), "count");
    }

    #[test]
    fn ensures_mirrors_requires() {
        assert_eq!(ensures(true, "out").kind(), SubjectKind::Boolean);
        assert_eq!(ensures("s", "out").kind(), SubjectKind::String);
        assert!(ensures_bool(true, "out").is_true().is_ok());
        assert!(ensures_num(5, "out").is_in_range(1, 10).is_ok());
        assert!(ensures_str("abc", "out").has_length(3).is_ok());
        let payload = Payload { body: "x" };
        assert!(ensures_obj(&payload, "out").is_not_null().is_ok());
    }

    #[test]
    fn type_pinned_constructors() {
        assert!(requires_bool(true, "flag").is_true().is_ok());
        assert!(requires_num(2500.7869, "n").is_equal_to(2500.7869).is_ok());
        assert!(requires_str("abc", "s").starts_with("a").is_ok());
        assert!(requires_str(None, "s").is_null().is_ok());
        let payload = Payload { body: "x" };
        assert!(requires_obj(&payload, "p").is_of_type::<Payload>().is_ok());
        assert!(requires_obj(None::<&Payload>, "p").is_null().is_ok());
    }
}
