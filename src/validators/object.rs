//! Object assertions
//!
//! Subjects that are neither boolean, numeric, nor string validate through
//! a type-erased [`ObjectRef`]: the reference itself plus the `TypeId` and
//! display name of its concrete type, captured at construction. Expected
//! types are supplied as type parameters, so passing an initialized value
//! where a type belongs is rejected by the compiler rather than at runtime.

use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::fmt;

use crate::error::ValidationError;
use crate::validators::base::Validator;

/// A type-erased reference to an object under validation.
#[derive(Clone, Copy)]
pub struct ObjectRef<'a> {
    value: Option<&'a dyn Any>,
    type_id: TypeId,
    type_name: &'static str,
}

impl<'a> ObjectRef<'a> {
    /// Captures a reference (or its absence) along with its concrete type.
    pub fn of<T: Any>(value: Option<&'a T>) -> Self {
        Self {
            value: value.map(|v| v as &dyn Any),
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Returns the erased reference, if present.
    #[must_use]
    pub fn get(&self) -> Option<&'a dyn Any> {
        self.value
    }

    /// Returns the value as `U` when present and of that exact type.
    #[must_use]
    pub fn downcast_ref<U: Any>(&self) -> Option<&'a U> {
        self.value.and_then(<dyn Any>::downcast_ref)
    }

    /// Returns the short display name of the captured type, generic
    /// arguments included.
    #[must_use]
    pub fn type_name(&self) -> Cow<'static, str> {
        short_type_name(self.type_name)
    }

    /// Returns true when no value was captured.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }
}

impl fmt::Debug for ObjectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("type", &self.type_name())
            .field("present", &self.value.is_some())
            .finish()
    }
}

// Strips the module path from every segment of a type name while keeping
// its generic shape: `alloc::vec::Vec<alloc::string::String>` becomes
// `Vec<String>`. A plain `rsplit("::")` would land inside the generic
// arguments and truncate the name.
fn short_type_name(full: &str) -> Cow<'_, str> {
    if !full.contains("::") {
        return Cow::Borrowed(full);
    }
    if !full.contains('<') {
        return Cow::Borrowed(last_path_segment(full));
    }
    let mut short = String::with_capacity(full.len());
    let mut segment_start = 0;
    for (i, c) in full.char_indices() {
        if matches!(c, '<' | '>' | ',' | ' ' | '&' | '(' | ')' | '[' | ']' | ';') {
            short.push_str(last_path_segment(&full[segment_start..i]));
            short.push(c);
            segment_start = i + c.len_utf8();
        }
    }
    short.push_str(last_path_segment(&full[segment_start..]));
    Cow::Owned(short)
}

fn last_path_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// Validator for arbitrary object subjects.
pub type ObjectValidator<'a> = Validator<'a, ObjectRef<'a>>;

impl<'a> Validator<'a, ObjectRef<'a>> {
    // ------------------------------------------------------------------
    // Type checks
    // ------------------------------------------------------------------

    /// Passes when the captured type is exactly `U`.
    pub fn is_of_type<U: Any>(&self) -> Result<&Self, ValidationError> {
        if self.value.type_id == TypeId::of::<U>() {
            Ok(self)
        } else {
            Err(self.type_error("be of type", &expected_name::<U>()))
        }
    }

    /// Passes when the captured type is not exactly `U`.
    pub fn is_not_of_type<U: Any>(&self) -> Result<&Self, ValidationError> {
        if self.value.type_id != TypeId::of::<U>() {
            Ok(self)
        } else {
            Err(self.type_error("not be of type", &expected_name::<U>()))
        }
    }

    /// Passes when the captured type has the same display name as `U`.
    ///
    /// Unlike [`is_of_type`](Self::is_of_type) this compares names, so two
    /// distinct types that share a short name are considered equivalent.
    pub fn is_of_type_name<U: Any>(&self) -> Result<&Self, ValidationError> {
        if self.value.type_name() == expected_name::<U>() {
            Ok(self)
        } else {
            Err(self.type_error("be of a type named", &expected_name::<U>()))
        }
    }

    /// Passes when the captured type does not share a display name with `U`.
    pub fn is_not_of_type_name<U: Any>(&self) -> Result<&Self, ValidationError> {
        if self.value.type_name() != expected_name::<U>() {
            Ok(self)
        } else {
            Err(self.type_error("not be of a type named", &expected_name::<U>()))
        }
    }

    /// Passes when the live value can be used as a `U`.
    ///
    /// This asks the value itself rather than the declared type, the
    /// instance-style counterpart of the exact check above.
    pub fn is_of_type_instance<U: Any>(&self) -> Result<&Self, ValidationError> {
        if self.value.downcast_ref::<U>().is_some() {
            Ok(self)
        } else {
            Err(self.type_error("be an instance of", &expected_name::<U>()))
        }
    }

    /// Passes when the live value cannot be used as a `U`.
    pub fn is_not_of_type_instance<U: Any>(&self) -> Result<&Self, ValidationError> {
        if self.value.downcast_ref::<U>().is_none() {
            Ok(self)
        } else {
            Err(self.type_error("not be an instance of", &expected_name::<U>()))
        }
    }

    // ------------------------------------------------------------------
    // Null checks
    // ------------------------------------------------------------------

    /// Passes when no value was captured.
    pub fn is_null(&self) -> Result<&Self, ValidationError> {
        if self.value.is_null() {
            Ok(self)
        } else {
            Err(ValidationError::argument(
                format!(
                    "The argument `{}` should be null but was `{}`",
                    self.argument_name,
                    self.value_repr()
                ),
                self.value_repr(),
                self.argument_name,
            ))
        }
    }

    /// Passes when a value is present.
    pub fn is_not_null(&self) -> Result<&Self, ValidationError> {
        if self.value.is_null() {
            Err(ValidationError::null(self.argument_name))
        } else {
            Ok(self)
        }
    }

    // ------------------------------------------------------------------
    // Equality
    // ------------------------------------------------------------------

    /// Passes when the value is the very same instance as `expected`.
    ///
    /// This compares reference identity, not structural equality; use
    /// [`is_equal_to_using_eq`](Self::is_equal_to_using_eq) for the latter.
    /// Identity is only meaningful for sized values: distinct zero-sized
    /// instances can share an address and pass this check.
    pub fn is_equal_to<U: Any>(&self, expected: &U) -> Result<&Self, ValidationError> {
        if self.is_same_instance(expected) {
            Ok(self)
        } else {
            Err(self.equality_error("be the same instance as", &expected_name::<U>()))
        }
    }

    /// Passes when the value is not the same instance as `expected`.
    pub fn is_not_equal_to<U: Any>(&self, expected: &U) -> Result<&Self, ValidationError> {
        if !self.is_same_instance(expected) {
            Ok(self)
        } else {
            Err(self.equality_error("not be the same instance as", &expected_name::<U>()))
        }
    }

    /// Passes when the value structurally equals `expected` per `U`'s own
    /// equality definition.
    pub fn is_equal_to_using_eq<U: Any + PartialEq>(
        &self,
        expected: &U,
    ) -> Result<&Self, ValidationError> {
        if self.value.downcast_ref::<U>() == Some(expected) {
            Ok(self)
        } else {
            Err(self.equality_error("be equal to", &expected_name::<U>()))
        }
    }

    /// Passes when the value structurally differs from `expected` per `U`'s
    /// own equality definition.
    pub fn is_not_equal_to_using_ne<U: Any + PartialEq>(
        &self,
        expected: &U,
    ) -> Result<&Self, ValidationError> {
        if self.value.downcast_ref::<U>() != Some(expected) {
            Ok(self)
        } else {
            Err(self.equality_error("not be equal to", &expected_name::<U>()))
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn is_same_instance<U: Any>(&self, expected: &U) -> bool {
        self.value
            .get()
            .is_some_and(|held| std::ptr::addr_eq(held, expected))
    }

    fn value_repr(&self) -> String {
        if self.value.is_null() {
            "null".to_owned()
        } else {
            format!("<{}>", self.value.type_name())
        }
    }

    fn type_error(&self, condition: &str, expected: &str) -> ValidationError {
        ValidationError::argument(
            format!(
                "The argument `{}` should {condition} `{expected}` but was `{}`",
                self.argument_name,
                self.value.type_name()
            ),
            self.value_repr(),
            self.argument_name,
        )
    }

    fn equality_error(&self, condition: &str, expected: &str) -> ValidationError {
        ValidationError::argument(
            format!(
                "The argument `{}` should {condition} the expected `{expected}` value",
                self.argument_name
            ),
            self.value_repr(),
            self.argument_name,
        )
    }
}

fn expected_name<U: Any>() -> Cow<'static, str> {
    short_type_name(std::any::type_name::<U>())
}

// ============================================================================
// TESTS
// ============================================================================
