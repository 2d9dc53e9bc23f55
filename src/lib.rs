//! # conditions
//!
//! Fluent precondition and postcondition checks with typed validators.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use conditions::prelude::*;
//!
//! fn connect(host: &str, port: i64) -> Result<(), ValidationError> {
//!     let host = requires_str(host, "host");
//!     host.is_not_null_or_whitespace()?.is_shorter_than(256)?;
//!
//!     let port = requires_num(port, "port");
//!     port.is_in_range(1, 65_535)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Every assertion either hands back the same validator for further
//! chaining or fails with a [`ValidationError`] that names the argument,
//! the expected condition, and the offending value.
//!
//! ## Entry points
//!
//! - [`requires`] / [`ensures`] dispatch on a [`Subject`] and return the
//!   matching validator wrapped in an [`AnyValidator`].
//! - [`requires_bool`], [`requires_num`], [`requires_str`], [`requires_obj`]
//!   (and their `ensures_*` twins) construct a typed validator directly when
//!   the subject's type is already known at compile time.
//!
//! `requires` and `ensures` are mechanically identical; the two names record
//! whether the caller is guarding an input or an output.

// ValidationError is the return type of every assertion method; boxing it
// would put an allocation on every failure path of a plain value check.
#![allow(clippy::result_large_err)]

pub mod condition;
pub mod error;
pub mod number;
pub mod prelude;
pub mod regex_helper;
pub mod validators;

pub use condition::{
    AnyValidator, Subject, SubjectKind, ensures, ensures_bool, ensures_num, ensures_obj,
    ensures_str, requires, requires_bool, requires_num, requires_obj, requires_str,
};
pub use error::ValidationError;
pub use number::Number;
pub use validators::{
    BooleanValidator, NumberValidator, ObjectRef, ObjectValidator, StringValidator, Validator,
};
