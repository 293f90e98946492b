//! Field value types and format checks

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;
use validator::ValidateEmail;

/// JSON type of a field value, as named in validation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Null,
}

impl ValueType {
    /// Classify a JSON value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => ValueType::String,
            Value::Number(_) => ValueType::Number,
            Value::Bool(_) => ValueType::Boolean,
            Value::Object(_) => ValueType::Object,
            Value::Array(_) => ValueType::Array,
            Value::Null => ValueType::Null,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Number => "number",
            ValueType::Boolean => "boolean",
            ValueType::Object => "object",
            ValueType::Array => "array",
            ValueType::Null => "null",
        }
    }

    /// Message reported when a value of the wrong type is supplied
    pub fn mismatch_message(&self, received: &Value) -> String {
        format!(
            "Expected {}, received {}",
            self.as_str(),
            ValueType::of(received).as_str()
        )
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field format validators for string fields
#[derive(Debug, Clone)]
pub enum FieldFormat {
    Email,
    /// UTC datetime: `YYYY-MM-DDTHH:MM:SS[.fff…]Z`
    IsoDateTime,
    /// Philippine mobile number in `+63` + 10 digits form
    GcashNumber,
    Custom(Regex),
}

impl FieldFormat {
    /// Check a string against this format
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FieldFormat::Email => value.validate_email() && has_dotted_domain(value),
            FieldFormat::IsoDateTime => Self::is_valid_iso_datetime(value),
            FieldFormat::GcashNumber => gcash_regex().is_match(value),
            FieldFormat::Custom(regex) => regex.is_match(value),
        }
    }

    fn is_valid_iso_datetime(value: &str) -> bool {
        static DATETIME_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = DATETIME_REGEX.get_or_init(|| {
            Regex::new(
                r"^([0-9]{4})-([0-9]{2})-([0-9]{2})T([01][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9](\.[0-9]+)?Z$",
            )
                .expect("datetime pattern is valid")
        });
        let Some(caps) = regex.captures(value) else {
            return false;
        };

        // The pattern only bounds digit counts; reject impossible calendar days.
        let year = caps[1].parse::<i32>();
        let month = caps[2].parse::<u32>();
        let day = caps[3].parse::<u32>();
        match (year, month, day) {
            (Ok(y), Ok(m), Ok(d)) => NaiveDate::from_ymd_opt(y, m, d).is_some(),
            _ => false,
        }
    }
}

fn gcash_regex() -> &'static Regex {
    static GCASH_REGEX: OnceLock<Regex> = OnceLock::new();
    GCASH_REGEX.get_or_init(|| Regex::new(r"^\+63[0-9]{10}$").expect("gcash pattern is valid"))
}

/// Domain part must be a dotted host name ending in an alphabetic TLD.
///
/// `ValidateEmail` alone also accepts `user@localhost` and IP literals.
fn has_dotted_domain(value: &str) -> bool {
    static DOMAIN_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = DOMAIN_REGEX.get_or_init(|| {
        Regex::new(r"^[^@\s]+\.[A-Za-z]{2,}$").expect("domain pattern is valid")
    });
    value
        .rsplit_once('@')
        .is_some_and(|(_, domain)| regex.is_match(domain))
}
