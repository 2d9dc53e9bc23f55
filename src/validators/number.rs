//! Numeric assertions
//!
//! All comparisons run through [`Number`]'s exact ordering, so an integral
//! subject can be held against fractional bounds (and vice versa) without
//! precision loss. Boundaries are inclusive for the `or_equal` and
//! `in_range` forms and exclusive for the `than` forms. A NaN subject is
//! unordered and therefore fails every bound predicate.

use crate::error::ValidationError;
use crate::number::Number;
use crate::validators::base::Validator;

/// Validator for numeric subjects.
pub type NumberValidator<'a> = Validator<'a, Number>;

impl Validator<'_, Number> {
    /// Passes when `min <= value <= max` (both bounds inclusive).
    pub fn is_in_range(
        &self,
        min: impl Into<Number>,
        max: impl Into<Number>,
    ) -> Result<&Self, ValidationError> {
        let (min, max) = (min.into(), max.into());
        if self.value >= min && self.value <= max {
            Ok(self)
        } else {
            Err(self
                .range_error(format!(
                    "The argument `{}` is out of the range `{min}-{max}`, was `{}`",
                    self.argument_name, self.value
                ))
                .with_min_value(min)
                .with_max_value(max))
        }
    }

    /// Passes when the value lies outside `min..=max`.
    pub fn is_not_in_range(
        &self,
        min: impl Into<Number>,
        max: impl Into<Number>,
    ) -> Result<&Self, ValidationError> {
        let (min, max) = (min.into(), max.into());
        if self.value < min || self.value > max {
            Ok(self)
        } else {
            Err(self
                .range_error(format!(
                    "The argument `{}` should be out of the range `{min}-{max}`, was `{}`",
                    self.argument_name, self.value
                ))
                .with_min_value(min)
                .with_max_value(max))
        }
    }

    /// Passes when `value > min` (exclusive).
    pub fn is_greater_than(&self, min: impl Into<Number>) -> Result<&Self, ValidationError> {
        let min = min.into();
        if self.value > min {
            Ok(self)
        } else {
            Err(self
                .range_error(format!(
                    "The argument `{}` should be greater than `{min}`, but was `{}`",
                    self.argument_name, self.value
                ))
                .with_min_value(min))
        }
    }

    /// Passes when `value <= max`.
    pub fn is_not_greater_than(&self, max: impl Into<Number>) -> Result<&Self, ValidationError> {
        let max = max.into();
        if self.value <= max {
            Ok(self)
        } else {
            Err(self
                .range_error(format!(
                    "The argument `{}` should not be greater than `{max}`, but was `{}`",
                    self.argument_name, self.value
                ))
                .with_max_value(max))
        }
    }

    /// Passes when `value >= min` (inclusive).
    pub fn is_greater_or_equal(&self, min: impl Into<Number>) -> Result<&Self, ValidationError> {
        let min = min.into();
        if self.value >= min {
            Ok(self)
        } else {
            Err(self
                .range_error(format!(
                    "The argument `{}` should be greater than or equal to `{min}`, but was `{}`",
                    self.argument_name, self.value
                ))
                .with_min_value(min))
        }
    }

    /// Passes when `value < max`.
    pub fn is_not_greater_or_equal(
        &self,
        max: impl Into<Number>,
    ) -> Result<&Self, ValidationError> {
        let max = max.into();
        if self.value < max {
            Ok(self)
        } else {
            Err(self
                .range_error(format!(
                    "The argument `{}` should not be greater than or equal to `{max}`, but was `{}`",
                    self.argument_name, self.value
                ))
                .with_max_value(max))
        }
    }

    /// Passes when `value < max` (exclusive).
    pub fn is_less_than(&self, max: impl Into<Number>) -> Result<&Self, ValidationError> {
        let max = max.into();
        if self.value < max {
            Ok(self)
        } else {
            Err(self
                .range_error(format!(
                    "The argument `{}` should be less than `{max}`, but was `{}`",
                    self.argument_name, self.value
                ))
                .with_max_value(max))
        }
    }

    /// Passes when `value >= min`.
    pub fn is_not_less_than(&self, min: impl Into<Number>) -> Result<&Self, ValidationError> {
        let min = min.into();
        if self.value >= min {
            Ok(self)
        } else {
            Err(self
                .range_error(format!(
                    "The argument `{}` should not be less than `{min}`, but was `{}`",
                    self.argument_name, self.value
                ))
                .with_min_value(min))
        }
    }

    /// Passes when `value <= max` (inclusive).
    pub fn is_less_or_equal(&self, max: impl Into<Number>) -> Result<&Self, ValidationError> {
        let max = max.into();
        if self.value <= max {
            Ok(self)
        } else {
            Err(self
                .range_error(format!(
                    "The argument `{}` should be less than or equal to `{max}`, but was `{}`",
                    self.argument_name, self.value
                ))
                .with_max_value(max))
        }
    }

    /// Passes when `value > min`.
    pub fn is_not_less_or_equal(&self, min: impl Into<Number>) -> Result<&Self, ValidationError> {
        let min = min.into();
        if self.value > min {
            Ok(self)
        } else {
            Err(self
                .range_error(format!(
                    "The argument `{}` should not be less than or equal to `{min}`, but was `{}`",
                    self.argument_name, self.value
                ))
                .with_min_value(min))
        }
    }

    /// Passes when the value equals the target.
    pub fn is_equal_to(&self, target: impl Into<Number>) -> Result<&Self, ValidationError> {
        let target = target.into();
        if self.value == target {
            Ok(self)
        } else {
            Err(self
                .range_error(format!(
                    "The argument `{}` should be equal to `{target}`, but was `{}`",
                    self.argument_name, self.value
                ))
                .with_equal_to(target))
        }
    }

    /// Passes when the value differs from the target.
    pub fn is_not_equal_to(&self, target: impl Into<Number>) -> Result<&Self, ValidationError> {
        let target = target.into();
        if self.value != target {
            Ok(self)
        } else {
            Err(self
                .range_error(format!(
                    "The argument `{}` should not be equal to `{target}`, but was `{}`",
                    self.argument_name, self.value
                ))
                .with_equal_to(target))
        }
    }

    /// Passes when `value > 0`.
    pub fn is_positive(&self) -> Result<&Self, ValidationError> {
        if self.value > Number::Int(0) {
            Ok(self)
        } else {
            Err(self
                .range_error(format!(
                    "The argument `{}` should be positive, but was `{}`",
                    self.argument_name, self.value
                ))
                .with_min_value(0))
        }
    }

    /// Passes when `value < 0`.
    pub fn is_negative(&self) -> Result<&Self, ValidationError> {
        if self.value < Number::Int(0) {
            Ok(self)
        } else {
            Err(self
                .range_error(format!(
                    "The argument `{}` should be negative, but was `{}`",
                    self.argument_name, self.value
                ))
                .with_max_value(0))
        }
    }

    fn range_error(&self, message: String) -> ValidationError {
        ValidationError::out_of_range(message, self.value.to_string(), self.argument_name)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn validator(value: impl Into<Number>) -> NumberValidator<'static> {
        NumberValidator::new(value.into(), "value")
    }

    #[test]
    fn in_range_is_boundary_inclusive() {
        let v = validator(5);
        assert!(v.is_in_range(5, 10).is_ok());
        assert!(v.is_in_range(1, 5).is_ok());
        assert!(v.is_in_range(6, 10).is_err());
        assert!(v.is_in_range(1, 4).is_err());
    }

    #[test]
    fn in_range_failure_carries_both_bounds() {
        let err = validator(11).is_in_range(1, 10).unwrap_err();
        assert_eq!(err.min_value(), Some(Number::Int(1)));
        assert_eq!(err.max_value(), Some(Number::Int(10)));
        assert_eq!(
            err.to_string(),
            "The argument `value` is out of the range `1-10`, was `11`"
        );
    }

    #[test]
    fn not_in_range_passes_outside_only() {
        let v = validator(5);
        assert!(v.is_not_in_range(6, 10).is_ok());
        assert!(v.is_not_in_range(0, 4).is_ok());
        assert!(v.is_not_in_range(5, 10).is_err());
        assert!(v.is_not_in_range(1, 5).is_err());
    }

    #[test]
    fn greater_than_is_exclusive() {
        let v = validator(5);
        assert!(v.is_greater_than(4).is_ok());
        assert!(v.is_greater_than(5).is_err());
    }

    #[test]
    fn greater_or_equal_is_inclusive() {
        let v = validator(5);
        assert!(v.is_greater_or_equal(5).is_ok());
        assert!(v.is_greater_or_equal(6).is_err());
    }

    #[test]
    fn less_than_is_exclusive() {
        let v = validator(5);
        assert!(v.is_less_than(6).is_ok());
        assert!(v.is_less_than(5).is_err());
    }

    #[test]
    fn less_or_equal_is_inclusive() {
        let v = validator(5);
        assert!(v.is_less_or_equal(5).is_ok());
        assert!(v.is_less_or_equal(4).is_err());
    }

    #[test]
    fn negated_comparisons_mirror_their_positive_forms() {
        let v = validator(5);
        assert!(v.is_not_greater_than(5).is_ok());
        assert!(v.is_not_greater_than(4).is_err());
        assert!(v.is_not_greater_or_equal(6).is_ok());
        assert!(v.is_not_greater_or_equal(5).is_err());
        assert!(v.is_not_less_than(5).is_ok());
        assert!(v.is_not_less_than(6).is_err());
        assert!(v.is_not_less_or_equal(4).is_ok());
        assert!(v.is_not_less_or_equal(5).is_err());
    }

    #[test]
    fn equality_on_floats() {
        let v = validator(2500.7869);
        assert!(v.is_equal_to(2500.7869).is_ok());
        assert!(v.is_not_equal_to(2500.7869).is_err());
        assert!(v.is_not_equal_to(2500.7868).is_ok());
    }

    #[test]
    fn equality_failure_carries_target() {
        let err = validator(4).is_equal_to(5).unwrap_err();
        assert_eq!(err.equal_to(), Some(Number::Int(5)));
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn mixed_integral_subject_fractional_bounds() {
        let v = validator(5);
        assert!(v.is_in_range(4.5, 5.5).is_ok());
        assert!(v.is_greater_than(4.9).is_ok());
        assert!(v.is_less_than(5.1).is_ok());
        assert!(v.is_greater_than(5.0).is_err());
    }

    #[test]
    fn sign_predicates() {
        assert!(validator(1).is_positive().is_ok());
        assert!(validator(0).is_positive().is_err());
        assert!(validator(-1).is_negative().is_ok());
        assert!(validator(0.5).is_positive().is_ok());
        assert!(validator(-0.5).is_negative().is_ok());
    }

    #[test]
    fn nan_fails_every_bound_predicate() {
        let v = validator(f64::NAN);
        assert!(v.is_in_range(0, 1).is_err());
        assert!(v.is_greater_than(0).is_err());
        assert!(v.is_less_than(0).is_err());
        assert!(v.is_equal_to(f64::NAN).is_err());
    }

    #[test]
    fn success_returns_the_same_instance() {
        let v = validator(5);
        let chained = v.is_in_range(1, 10).unwrap();
        assert!(std::ptr::eq(chained, &v));
    }

    #[test]
    fn chains_compose() -> Result<(), ValidationError> {
        let v = validator(5);
        v.is_positive()?.is_in_range(1, 10)?.is_not_equal_to(7)?;
        Ok(())
    }
}
