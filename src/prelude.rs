//! Prelude module for convenient imports.
//!
//! A single `use conditions::prelude::*;` brings in the entry points, the
//! typed validators, and the error taxonomy.
//!
//! ```rust,ignore
//! use conditions::prelude::*;
//!
//! let name = requires_str("ada", "name");
//! name.is_not_null_or_whitespace()?.is_shorter_than(64)?;
//! ```

pub use crate::condition::{
    AnyValidator, Subject, SubjectKind, ensures, ensures_bool, ensures_num, ensures_obj,
    ensures_str, requires, requires_bool, requires_num, requires_obj, requires_str,
};
pub use crate::error::ValidationError;
pub use crate::number::Number;
pub use crate::validators::{
    BooleanValidator, NumberValidator, ObjectRef, ObjectValidator, StringValidator, Validator,
};
