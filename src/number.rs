//! Numeric subjects
//!
//! [`Number`] is the closed sum of the two numeric shapes a validator can
//! hold: a signed integer or a double-precision float. Comparisons between
//! the two arms are exact — an integer is never routed through a lossy
//! `as f64` cast, so values above 2^53 cannot be misclassified against a
//! nearby float.

use std::cmp::Ordering;
use std::fmt;

/// A numeric value under validation: either integral or floating-point.
///
/// Bound arguments to the numeric assertions accept anything convertible
/// into a `Number`, so an integral subject can be compared against a
/// fractional bound and vice versa.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    /// A signed integer.
    Int(i64),
    /// A double-precision float.
    Float(f64),
}

impl Number {
    /// Returns true if this number holds the integral arm.
    #[must_use]
    pub fn is_integer(self) -> bool {
        matches!(self, Number::Int(_))
    }
}

// 2^63, the smallest f64 strictly above every i64. i64::MAX itself rounds
// up to this value, so the threshold tests below keep the truncation
// in-range for `as i64`.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Exact comparison of an `i64` against an `f64`.
///
/// Floats beyond the `i64` range order strictly outside it; in-range floats
/// are truncated and compared integrally, with the fractional part breaking
/// ties. `None` only for NaN.
fn cmp_int_float(a: i64, b: f64) -> Option<Ordering> {
    if b.is_nan() {
        return None;
    }
    if b >= TWO_POW_63 {
        return Some(Ordering::Less);
    }
    if b < -TWO_POW_63 {
        return Some(Ordering::Greater);
    }
    let truncated = b.trunc() as i64;
    match a.cmp(&truncated) {
        Ordering::Equal => {
            let fraction = b - b.trunc();
            if fraction > 0.0 {
                Some(Ordering::Less)
            } else if fraction < 0.0 {
                Some(Ordering::Greater)
            } else {
                Some(Ordering::Equal)
            }
        }
        ordering => Some(ordering),
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
