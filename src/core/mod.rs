//! Core module containing the validation engine and error types

pub mod error;
pub mod field;
pub mod validation;

pub use error::{ConfigError, FieldValidationError, FormError, ValidationError};
pub use field::{FieldFormat, ValueType};
pub use validation::{FieldSpec, FormSchema, ObjectSchema, Validated};
