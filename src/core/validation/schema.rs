//! Declarative object schemas
//!
//! An [`ObjectSchema`] is an ordered list of [`FieldSpec`]s. A field is either
//! a scalar with a JSON type and a list of rules, or a nested object schema.
//! Validation walks the whole tree and collects every failure instead of
//! stopping at the first one, then returns a normalized copy of the input:
//! defaults filled in, unknown keys dropped.
//!
//! ```rust,ignore
//! use rentform::core::validation::{FieldSpec, ObjectSchema, validators::*};
//!
//! let schema = ObjectSchema::new("schedule")
//!     .field(
//!         FieldSpec::string("start_date")
//!             .rule(non_empty("Start date is required"))
//!             .when_missing("Start date is required"),
//!     )
//!     .field(
//!         FieldSpec::string("delivery_method")
//!             .rule(one_of(&["delivery", "pickup"]))
//!             .default_value("delivery"),
//!     );
//!
//! let step = schema.partial();
//! ```

use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::field::ValueType;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Message for a required value that was not supplied
pub const REQUIRED_MESSAGE: &str = "Required";

/// A single field rule: `(field path, value) -> Result<(), message>`
pub type Rule = Arc<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

/// What kind of value a field holds
#[derive(Clone)]
pub enum FieldKind {
    Scalar {
        expected: ValueType,
        rules: Vec<Rule>,
    },
    Object(ObjectSchema),
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Scalar { expected, rules } => f
                .debug_struct("Scalar")
                .field("expected", expected)
                .field("rules", &rules.len())
                .finish(),
            FieldKind::Object(schema) => f.debug_tuple("Object").field(schema).finish(),
        }
    }
}

/// One field of an object schema
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    kind: FieldKind,
    required: bool,
    default: Option<Value>,
    missing_message: String,
}

impl FieldSpec {
    fn scalar(name: impl Into<String>, expected: ValueType) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Scalar {
                expected,
                rules: Vec::new(),
            },
            required: true,
            default: None,
            missing_message: REQUIRED_MESSAGE.to_string(),
        }
    }

    /// A required string field
    pub fn string(name: impl Into<String>) -> Self {
        Self::scalar(name, ValueType::String)
    }

    /// A required boolean field
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::scalar(name, ValueType::Boolean)
    }

    /// A required number field
    pub fn number(name: impl Into<String>) -> Self {
        Self::scalar(name, ValueType::Number)
    }

    /// A required nested object
    pub fn object(name: impl Into<String>, schema: ObjectSchema) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Object(schema),
            required: true,
            default: None,
            missing_message: REQUIRED_MESSAGE.to_string(),
        }
    }

    /// Add a rule; rules run in the order they were added.
    ///
    /// Rules on an object field are ignored.
    pub fn rule<F>(mut self, rule: F) -> Self
    where
        F: Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    {
        if let FieldKind::Scalar { rules, .. } = &mut self.kind {
            rules.push(Arc::new(rule));
        }
        self
    }

    /// Message reported when the field is required but absent
    pub fn when_missing(mut self, message: impl Into<String>) -> Self {
        self.missing_message = message.into();
        self
    }

    /// Absent values are accepted and left out of the output
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Absent values are replaced by `value`
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Whether an absent value is a validation failure
    pub fn is_required(&self) -> bool {
        self.required && self.default.is_none()
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    fn partial(&self) -> Self {
        let kind = match &self.kind {
            FieldKind::Object(schema) => FieldKind::Object(schema.partial()),
            scalar => scalar.clone(),
        };
        Self {
            name: self.name.clone(),
            kind,
            required: false,
            default: None,
            missing_message: self.missing_message.clone(),
        }
    }

    fn validate_present(
        &self,
        path: &str,
        value: &Value,
        errors: &mut Vec<FieldValidationError>,
    ) -> Option<Value> {
        match &self.kind {
            FieldKind::Object(schema) => schema.validate_object(path, value, errors),
            FieldKind::Scalar { expected, rules } => {
                if ValueType::of(value) != *expected {
                    errors.push(FieldValidationError::new(
                        path,
                        expected.mismatch_message(value),
                    ));
                    return None;
                }
                for rule in rules {
                    if let Err(message) = rule(path, value) {
                        errors.push(FieldValidationError::new(path, message));
                    }
                }
                Some(value.clone())
            }
        }
    }
}

/// An ordered set of named fields validated as one unit
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    name: String,
    fields: Vec<FieldSpec>,
}

impl ObjectSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field; validation visits fields in declaration order.
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Same shape with every field at every level optional and no defaults
    pub fn partial(&self) -> Self {
        Self {
            name: format!("partial_{}", self.name),
            fields: self.fields.iter().map(FieldSpec::partial).collect(),
        }
    }

    /// Keep only the named fields, in this schema's declaration order
    pub fn pick(&self, names: &[&str]) -> Self {
        Self {
            name: self.name.clone(),
            fields: self
                .fields
                .iter()
                .filter(|f| names.contains(&f.name.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Validate `input`, returning the normalized value or every field error
    pub fn validate(&self, input: &Value) -> Result<Value, ValidationError> {
        let mut errors = Vec::new();
        let normalized = self.validate_object("", input, &mut errors);

        match normalized {
            Some(value) if errors.is_empty() => {
                tracing::trace!(schema = %self.name, "validation passed");
                Ok(value)
            }
            _ => {
                tracing::debug!(
                    schema = %self.name,
                    error_count = errors.len(),
                    "validation failed"
                );
                Err(ValidationError::FieldErrors(errors))
            }
        }
    }

    fn validate_object(
        &self,
        path: &str,
        input: &Value,
        errors: &mut Vec<FieldValidationError>,
    ) -> Option<Value> {
        let Some(object) = input.as_object() else {
            errors.push(FieldValidationError::new(
                path,
                ValueType::Object.mismatch_message(input),
            ));
            return None;
        };

        let mut output = Map::new();
        for field in &self.fields {
            let field_path = join_path(path, &field.name);
            match object.get(&field.name) {
                None => {
                    if let Some(default) = &field.default {
                        output.insert(field.name.clone(), default.clone());
                    } else if field.required {
                        errors.push(FieldValidationError::new(
                            field_path,
                            field.missing_message.clone(),
                        ));
                    }
                }
                Some(value) => {
                    if let Some(valid) = field.validate_present(&field_path, value, errors) {
                        output.insert(field.name.clone(), valid);
                    }
                }
            }
        }
        Some(Value::Object(output))
    }
}

fn join_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", parent, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::validators::{min_length, non_empty, one_of};
    use serde_json::json;

    fn address_schema() -> ObjectSchema {
        ObjectSchema::new("address")
            .field(
                FieldSpec::string("city")
                    .rule(non_empty("City is required"))
                    .when_missing("City is required"),
            )
            .field(
                FieldSpec::string("kind")
                    .rule(one_of(&["home", "work"]))
                    .default_value("home"),
            )
    }

    fn person_schema() -> ObjectSchema {
        ObjectSchema::new("person")
            .field(
                FieldSpec::string("name")
                    .rule(non_empty("Name is required"))
                    .rule(min_length(2, "Name must be at least 2 characters")),
            )
            .field(FieldSpec::object("address", address_schema()))
            .field(FieldSpec::string("note").optional().default_value(""))
    }

    fn fields(err: &ValidationError) -> Vec<(&str, &str)> {
        err.fields()
            .iter()
            .map(|e| (e.field.as_str(), e.message.as_str()))
            .collect()
    }

    #[test]
    fn test_valid_input_applies_defaults_and_drops_unknown_keys() {
        let out = person_schema()
            .validate(&json!({
                "name": "Ana",
                "address": { "city": "Cebu", "zip": "6000" },
                "extra": 1
            }))
            .expect("valid");
        assert_eq!(
            out,
            json!({
                "name": "Ana",
                "address": { "city": "Cebu", "kind": "home" },
                "note": ""
            })
        );
    }

    #[test]
    fn test_all_failing_checks_reported_in_order() {
        let err = person_schema()
            .validate(&json!({ "name": "", "address": { "city": "" } }))
            .unwrap_err();
        assert_eq!(
            fields(&err),
            vec![
                ("name", "Name is required"),
                ("name", "Name must be at least 2 characters"),
                ("address.city", "City is required"),
            ]
        );
    }

    #[test]
    fn test_missing_fields_use_missing_message() {
        let err = person_schema().validate(&json!({})).unwrap_err();
        assert_eq!(
            fields(&err),
            vec![
                ("name", "Required"),
                ("address", "Required"),
            ]
        );
    }

    #[test]
    fn test_null_is_a_type_mismatch() {
        let err = person_schema()
            .validate(&json!({ "name": "Ana", "address": { "city": null }, "note": null }))
            .unwrap_err();
        assert_eq!(
            fields(&err),
            vec![
                ("address.city", "Expected string, received null"),
                ("note", "Expected string, received null"),
            ]
        );
    }

    #[test]
    fn test_partial_rejects_null() {
        let err = person_schema()
            .partial()
            .validate(&json!({ "name": null, "address": null }))
            .unwrap_err();
        assert_eq!(
            fields(&err),
            vec![
                ("name", "Expected string, received null"),
                ("address", "Expected object, received null"),
            ]
        );
    }

    #[test]
    fn test_type_mismatch_skips_rules() {
        let err = person_schema()
            .validate(&json!({ "name": 7, "address": "Cebu" }))
            .unwrap_err();
        assert_eq!(
            fields(&err),
            vec![
                ("name", "Expected string, received number"),
                ("address", "Expected object, received string"),
            ]
        );
    }

    #[test]
    fn test_non_object_root_fails_at_empty_path() {
        let err = person_schema().validate(&json!([1, 2])).unwrap_err();
        assert_eq!(
            fields(&err),
            vec![("", "Expected object, received array")]
        );
    }

    #[test]
    fn test_partial_accepts_empty_and_nested_subset() {
        let partial = person_schema().partial();
        assert_eq!(partial.name(), "partial_person");
        assert_eq!(partial.validate(&json!({})).unwrap(), json!({}));
        assert_eq!(
            partial.validate(&json!({ "address": {} })).unwrap(),
            json!({ "address": {} })
        );
    }

    #[test]
    fn test_partial_still_checks_present_values() {
        let err = person_schema()
            .partial()
            .validate(&json!({ "name": "A", "address": { "kind": "boat" } }))
            .unwrap_err();
        assert_eq!(
            fields(&err),
            vec![
                ("name", "Name must be at least 2 characters"),
                (
                    "address.kind",
                    "Invalid enum value. Expected 'home' | 'work', received 'boat'"
                ),
            ]
        );
    }

    #[test]
    fn test_partial_drops_defaults() {
        let schema = address_schema();
        assert!(schema.get("kind").unwrap().default().is_some());
        assert!(schema.partial().get("kind").unwrap().default().is_none());
        assert!(!schema.partial().get("city").unwrap().is_required());
    }

    #[test]
    fn test_pick_keeps_declaration_order() {
        let picked = person_schema().pick(&["note", "name"]);
        let names: Vec<&str> = picked.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name", "note"]);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let schema = person_schema();
        let once = schema
            .validate(&json!({ "name": "Ana", "address": { "city": "Cebu" } }))
            .unwrap();
        let twice = schema.validate(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_number_field_type_check() {
        let schema = ObjectSchema::new("n").field(FieldSpec::number("days"));
        assert!(schema.validate(&json!({ "days": 3 })).is_ok());
        let err = schema.validate(&json!({ "days": "3" })).unwrap_err();
        assert_eq!(
            err.first_message_for("days"),
            Some("Expected number, received string")
        );
    }
}
