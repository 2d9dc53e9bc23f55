//! Typed validators
//!
//! One validator per subject shape, all sharing the common storage in
//! [`base::Validator`]:
//!
//! - [`BooleanValidator`] — `is_true` / `is_false`
//! - [`NumberValidator`] — range, comparison, and sign assertions
//! - [`StringValidator`] — null triad, length, content, set, and regex
//!   assertions
//! - [`ObjectValidator`] — type, null, and equality assertions

pub mod base;
pub mod boolean;
pub mod number;
pub mod object;
pub mod string;

pub use base::Validator;
pub use boolean::BooleanValidator;
pub use number::NumberValidator;
pub use object::{ObjectRef, ObjectValidator};
pub use string::StringValidator;
