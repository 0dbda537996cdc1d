//! Selection validation module.

mod validate;

pub use validate::{validate_object, validate_selection, ValidationResult};
