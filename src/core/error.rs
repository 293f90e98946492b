//! Typed error handling for rentform
//!
//! Validation failures are data, not control flow: a schema returns every
//! problem it found as a list of [`FieldValidationError`]s wrapped in
//! [`ValidationError::FieldErrors`], so a form UI can display them all at once.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: input that does not satisfy a form schema
//! - [`ConfigError`]: stepper configuration that cannot be loaded
//! - [`FormError`]: umbrella type with HTTP mapping for the backend side
//!
//! # Example
//!
//! ```rust,ignore
//! use rentform::prelude::*;
//!
//! match RentalBooking::parse(&payload) {
//!     Ok(booking) => submit(booking),
//!     Err(err) => {
//!         for (field, messages) in err.into_field_map() {
//!             show_under(field, &messages[0]);
//!         }
//!     }
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use indexmap::IndexMap;
use serde::Serialize;

/// The main error type for rentform
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Input failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl FormError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            FormError::Validation(e) => e.status_code(),
            FormError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FormError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            FormError::Validation(e) => e.error_code(),
            FormError::Config(_) => "CONFIG_ERROR",
            FormError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        let details = match self {
            FormError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        };

        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field validation error
///
/// `field` is a dotted path from the root of the validated object, e.g.
/// `personal_details.first_name`. Errors about the root value itself use an
/// empty path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors related to input validation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// One or more fields failed validation, in report order
    #[error("Validation errors: {}", format_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),

    /// Input text was not valid JSON
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },
}

fn format_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationError::FieldErrors(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ValidationError::InvalidJson { .. } => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
        }
    }

    /// All field errors carried by this error (empty for invalid JSON)
    pub fn fields(&self) -> &[FieldValidationError] {
        match self {
            ValidationError::FieldErrors(errors) => errors,
            ValidationError::InvalidJson { .. } => &[],
        }
    }

    /// Messages reported for one field path, in check order
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.fields()
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// The message a UI shows first for a field path
    pub fn first_message_for(&self, field: &str) -> Option<&str> {
        self.fields()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Whether any error was reported for `field`
    pub fn has_error_for(&self, field: &str) -> bool {
        self.fields().iter().any(|e| e.field == field)
    }

    /// Group messages by field path, keeping first-seen field order
    pub fn into_field_map(self) -> IndexMap<String, Vec<String>> {
        let mut map: IndexMap<String, Vec<String>> = IndexMap::new();
        if let ValidationError::FieldErrors(errors) = self {
            for error in errors {
                map.entry(error.field).or_default().push(error.message);
            }
        }
        map
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to stepper configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    /// A step id appears more than once
    #[error("Duplicate booking step '{step}' in configuration")]
    DuplicateStep { step: String },

    /// A step is not configured
    #[error("Missing configuration for booking step '{step}'")]
    MissingStep { step: String },
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ValidationError {
        ValidationError::FieldErrors(vec![
            FieldValidationError::new("personal_details.first_name", "First name is required"),
            FieldValidationError::new(
                "personal_details.first_name",
                "First name must be at least 2 characters",
            ),
            FieldValidationError::new("costume_id", "Costume ID is required"),
        ])
    }

    #[test]
    fn test_display_lists_every_field() {
        let msg = sample().to_string();
        assert!(msg.starts_with("Validation errors: "));
        assert!(msg.contains("personal_details.first_name: First name is required"));
        assert!(msg.contains("costume_id: Costume ID is required"));
    }

    #[test]
    fn test_messages_for_keeps_check_order() {
        let err = sample();
        assert_eq!(
            err.messages_for("personal_details.first_name"),
            vec![
                "First name is required",
                "First name must be at least 2 characters"
            ]
        );
        assert_eq!(
            err.first_message_for("personal_details.first_name"),
            Some("First name is required")
        );
        assert_eq!(err.first_message_for("schedule"), None);
        assert!(err.has_error_for("costume_id"));
    }

    #[test]
    fn test_into_field_map_groups_by_path() {
        let map = sample().into_field_map();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["personal_details.first_name", "costume_id"]);
        assert_eq!(map["personal_details.first_name"].len(), 2);
    }

    #[test]
    fn test_invalid_json_has_no_fields() {
        let err = ValidationError::InvalidJson {
            message: "expected value".to_string(),
        };
        assert!(err.fields().is_empty());
        assert!(err.into_field_map().is_empty());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            FormError::from(sample()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            FormError::from(ValidationError::InvalidJson {
                message: "eof".to_string()
            })
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            FormError::from(ConfigError::MissingStep {
                step: "payment".to_string()
            })
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            FormError::Internal("boom".to_string()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_response_includes_field_details() {
        let response = FormError::from(sample()).to_response();
        assert_eq!(response.code, "VALIDATION_ERROR");
        let details = response.details.expect("field details");
        assert_eq!(details["fields"][2]["field"], "costume_id");
        assert_eq!(details["fields"][2]["message"], "Costume ID is required");
    }
}
