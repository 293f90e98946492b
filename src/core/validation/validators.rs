//! Reusable field validators
//!
//! Each constructor returns a rule closure `(field, value) -> Result<(), message>`.
//! Rules only judge values of the type they understand and let anything else
//! through; the schema checks the JSON type before running them.

use crate::core::field::FieldFormat;
use regex::Regex;
use serde_json::Value;

/// Validator: string must have at least `min` characters
pub fn min_length(
    min: usize,
    message: impl Into<String>,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    let message = message.into();
    move |_: &str, value: &Value| match value.as_str() {
        Some(s) if s.chars().count() < min => Err(message.clone()),
        _ => Ok(()),
    }
}

/// Validator: string must not be empty
pub fn non_empty(
    message: impl Into<String>,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    min_length(1, message)
}

/// Validator: string must match a [`FieldFormat`]
pub fn format(
    format: FieldFormat,
    message: impl Into<String>,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    let message = message.into();
    move |_: &str, value: &Value| match value.as_str() {
        Some(s) if !format.matches(s) => Err(message.clone()),
        _ => Ok(()),
    }
}

/// Validator: string must be a valid email address
pub fn email(
    message: impl Into<String>,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    format(FieldFormat::Email, message)
}

/// Validator: string must be a UTC ISO-8601 datetime
pub fn iso_datetime(
    message: impl Into<String>,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    format(FieldFormat::IsoDateTime, message)
}

/// Validator: string must match a regular expression
pub fn pattern(
    regex: Regex,
    message: impl Into<String>,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    format(FieldFormat::Custom(regex), message)
}

/// Validator: value must be in allowed list
///
/// The message lists the allowed values and echoes the received one.
pub fn one_of(
    allowed: &[&str],
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone + use<> {
    let allowed: Vec<String> = allowed.iter().map(|s| s.to_string()).collect();
    move |_: &str, value: &Value| {
        let Some(s) = value.as_str() else {
            return Ok(());
        };
        if allowed.iter().any(|a| a == s) {
            return Ok(());
        }
        let expected = allowed
            .iter()
            .map(|a| format!("'{}'", a))
            .collect::<Vec<_>>()
            .join(" | ");
        Err(format!(
            "Invalid enum value. Expected {}, received '{}'",
            expected, s
        ))
    }
}

/// Validator: boolean must be exactly `true`
pub fn is_true(
    message: impl Into<String>,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    let message = message.into();
    move |_: &str, value: &Value| match value.as_bool() {
        Some(false) => Err(message.clone()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === min_length() ===

    #[test]
    fn test_min_length_too_short_returns_message() {
        let v = min_length(2, "First name must be at least 2 characters");
        assert_eq!(
            v("first_name", &json!("J")),
            Err("First name must be at least 2 characters".to_string())
        );
    }

    #[test]
    fn test_min_length_exact_returns_ok() {
        let v = min_length(2, "too short");
        assert!(v("first_name", &json!("Jo")).is_ok());
    }

    #[test]
    fn test_min_length_counts_characters_not_bytes() {
        let v = min_length(2, "too short");
        // "ñ" is two bytes but one character
        assert!(v("first_name", &json!("ñ")).is_err());
        assert!(v("first_name", &json!("Ño")).is_ok());
    }

    #[test]
    fn test_min_length_non_string_passthrough() {
        let v = min_length(5, "too short");
        assert!(v("age", &json!(42)).is_ok());
    }

    // === non_empty() ===

    #[test]
    fn test_non_empty_rejects_empty_string() {
        let v = non_empty("Start date is required");
        assert_eq!(
            v("start_date", &json!("")),
            Err("Start date is required".to_string())
        );
        assert!(v("start_date", &json!("2024-01-01")).is_ok());
    }

    #[test]
    fn test_non_empty_accepts_whitespace() {
        let v = non_empty("required");
        assert!(v("delivery_address", &json!(" ")).is_ok());
    }

    // === email() ===

    #[test]
    fn test_email_valid_and_invalid() {
        let v = email("Please enter a valid email address");
        assert!(v("email", &json!("maria@example.ph")).is_ok());
        assert_eq!(
            v("email", &json!("maria.example.ph")),
            Err("Please enter a valid email address".to_string())
        );
    }

    // === iso_datetime() ===

    #[test]
    fn test_iso_datetime_rejects_date_only() {
        let v = iso_datetime("Date of birth must be a valid ISO date");
        assert!(v("date_of_birth", &json!("1990-05-01T00:00:00.000Z")).is_ok());
        assert!(v("date_of_birth", &json!("1990-05-01")).is_err());
    }

    // === pattern() ===

    #[test]
    fn test_pattern_custom_regex() {
        let v = pattern(Regex::new(r"^C-\d+$").unwrap(), "bad id");
        assert!(v("costume_id", &json!("C-42")).is_ok());
        assert_eq!(v("costume_id", &json!("42")), Err("bad id".to_string()));
    }

    // === one_of() ===

    #[test]
    fn test_one_of_value_in_list_returns_ok() {
        let v = one_of(&["delivery", "pickup"]);
        assert!(v("delivery_method", &json!("pickup")).is_ok());
    }

    #[test]
    fn test_one_of_value_not_in_list_lists_options() {
        let v = one_of(&["delivery", "pickup"]);
        assert_eq!(
            v("delivery_method", &json!("courier")),
            Err("Invalid enum value. Expected 'delivery' | 'pickup', received 'courier'".to_string())
        );
    }

    #[test]
    fn test_one_of_single_option_message() {
        let v = one_of(&["gcash"]);
        assert_eq!(
            v("type", &json!("card")),
            Err("Invalid enum value. Expected 'gcash', received 'card'".to_string())
        );
    }

    // === is_true() ===

    #[test]
    fn test_is_true_rejects_false() {
        let v = is_true("You must accept the damage policy");
        assert!(v("damage_policy", &json!(true)).is_ok());
        assert_eq!(
            v("damage_policy", &json!(false)),
            Err("You must accept the damage policy".to_string())
        );
    }
}
