//! Common validator storage
//!
//! [`Validator`] is the single live state of every validation chain: the
//! snapshot of the checked value and the caller-supplied argument name.
//! Neither field changes for the validator's lifetime; assertion methods
//! only read them.

/// A bound `(value, argument_name)` pair exposing chainable assertions.
///
/// The concrete assertion methods are defined per value shape:
///
/// - [`BooleanValidator`](crate::BooleanValidator) for `bool`
/// - [`NumberValidator`](crate::NumberValidator) for [`Number`](crate::Number)
/// - [`StringValidator`](crate::StringValidator) for `Option<&str>`
/// - [`ObjectValidator`](crate::ObjectValidator) for [`ObjectRef`](crate::ObjectRef)
///
/// Each assertion returns `&Self` on success, so a chain operates on one
/// instance from start to finish. The validator owns its value snapshot
/// but only borrows the argument name.
#[derive(Debug, Clone)]
pub struct Validator<'a, T> {
    pub(crate) value: T,
    pub(crate) argument_name: &'a str,
}

impl<'a, T> Validator<'a, T> {
    /// Binds a value to its argument name.
    pub fn new(value: T, argument_name: &'a str) -> Self {
        Self {
            value,
            argument_name,
        }
    }

    /// Returns the held value, unchanged by any prior assertion.
    pub fn get_value(&self) -> &T {
        &self.value
    }

    /// Returns the argument name this validator reports failures under.
    pub fn argument_name(&self) -> &str {
        self.argument_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_value_returns_the_held_value() {
        let validator = Validator::new(42, "answer");
        assert_eq!(*validator.get_value(), 42);
        assert_eq!(validator.argument_name(), "answer");
    }

    #[test]
    fn get_value_is_stable_across_calls() {
        let validator = Validator::new("snapshot", "name");
        let first = validator.get_value();
        let second = validator.get_value();
        assert!(std::ptr::eq(first, second));
        assert_eq!(*first, "snapshot");
    }
}
