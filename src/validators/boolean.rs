//! Boolean assertions

use crate::error::ValidationError;
use crate::validators::base::Validator;

/// Validator for `bool` subjects.
pub type BooleanValidator<'a> = Validator<'a, bool>;

impl Validator<'_, bool> {
    /// Passes when the value is `true`.
    pub fn is_true(&self) -> Result<&Self, ValidationError> {
        if self.value {
            Ok(self)
        } else {
            Err(self.state_error("true"))
        }
    }

    /// Passes when the value is `false`.
    pub fn is_false(&self) -> Result<&Self, ValidationError> {
        if !self.value {
            Ok(self)
        } else {
            Err(self.state_error("false"))
        }
    }

    fn state_error(&self, expected: &str) -> ValidationError {
        ValidationError::argument(
            format!(
                "The argument `{}` should be {expected} but was `{}`",
                self.argument_name, self.value
            ),
            self.value.to_string(),
            self.argument_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_true_passes_on_true() {
        let validator = BooleanValidator::new(true, "flag");
        assert!(validator.is_true().is_ok());
    }

    #[test]
    fn is_true_fails_on_false() {
        let validator = BooleanValidator::new(false, "flag");
        let err = validator.is_true().unwrap_err();
        assert_eq!(
            err.to_string(),
            "The argument `flag` should be true but was `false`"
        );
        assert!(matches!(err, ValidationError::Argument { .. }));
    }

    #[test]
    fn is_false_passes_on_false() {
        let validator = BooleanValidator::new(false, "flag");
        assert!(validator.is_false().is_ok());
    }

    #[test]
    fn is_false_fails_on_true() {
        let validator = BooleanValidator::new(true, "flag");
        assert!(validator.is_false().is_err());
    }

    #[test]
    fn success_returns_the_same_instance() {
        let validator = BooleanValidator::new(true, "flag");
        let chained = validator.is_true().unwrap();
        assert!(std::ptr::eq(chained, &validator));
    }
}
