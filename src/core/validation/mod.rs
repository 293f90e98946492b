//! Validation system
//!
//! Schemas are declared with [`ObjectSchema`] and [`FieldSpec`], using the rule
//! constructors in [`validators`]. Typed form values implement [`FormSchema`]
//! to tie a Rust type to the schema that guards it.

pub mod extractor;
pub mod schema;
pub mod validators;

pub use extractor::Validated;
pub use schema::{FieldKind, FieldSpec, ObjectSchema, REQUIRED_MESSAGE, Rule};

use crate::core::error::{FieldValidationError, ValidationError};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A typed form value guarded by an object schema
///
/// The type is hand-written and kept in sync with its schema: every value
/// the schema accepts must deserialize into `Self`.
pub trait FormSchema: DeserializeOwned {
    /// The schema candidate values are checked against
    fn schema() -> &'static ObjectSchema;

    /// Validate a JSON value and convert it into the typed form value
    fn parse(input: &Value) -> Result<Self, ValidationError> {
        let normalized = Self::schema().validate(input)?;
        serde_json::from_value(normalized).map_err(|e| {
            tracing::error!(
                schema = %Self::schema().name(),
                error = %e,
                "normalized value does not fit its type"
            );
            ValidationError::FieldErrors(vec![FieldValidationError::new("", e.to_string())])
        })
    }

    /// Parse raw JSON text, then validate it
    fn from_json_str(input: &str) -> Result<Self, ValidationError> {
        let value: Value =
            serde_json::from_str(input).map_err(|e| ValidationError::InvalidJson {
                message: e.to_string(),
            })?;
        Self::parse(&value)
    }
}
