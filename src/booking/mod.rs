//! Costume rental booking form
//!
//! Schemas, typed values and the stepper for the booking dialog. The form is
//! filled in over four steps; each step is checked on its own while the user
//! moves forward, and the whole booking is checked again on submission.

pub mod costume;
pub mod schemas;
pub mod steps;
pub mod types;

pub use costume::{CostumeRentalInfo, RentalCalculation};
pub use steps::{BookingStep, BookingStepConfig, UnknownStep};
pub use types::{
    Agreements, DeliveryMethod, PartialAgreements, PartialPaymentMethod, PartialPersonalDetails,
    PartialRentalBooking, PartialSchedule, PaymentMethod, PaymentType, PersonalDetails,
    RentalBooking, Schedule,
};

use crate::core::error::ValidationError;
use serde_json::Value;

/// Top-level form section a step is responsible for
pub fn step_section(step: BookingStep) -> Option<&'static str> {
    match step {
        BookingStep::Schedule => Some("schedule"),
        BookingStep::Personal => Some("personal_details"),
        BookingStep::Payment => Some("payment_method"),
        BookingStep::Summary => None,
    }
}

/// Validate the part of an in-progress form that `step` owns
///
/// The step's section is checked with its full schema, so every field of the
/// section must be present. Sections owned by other steps are ignored. The
/// summary step validates the whole booking. Error paths are rooted at the
/// form, e.g. `schedule.start_date`.
pub fn validate_step(step: BookingStep, form: &Value) -> Result<Value, ValidationError> {
    let booking = schemas::rental_booking_schema();
    match step_section(step) {
        Some(section) => booking.pick(&[section]).validate(form),
        None => booking.validate(form),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_step_sections() {
        assert_eq!(step_section(BookingStep::Schedule), Some("schedule"));
        assert_eq!(step_section(BookingStep::Personal), Some("personal_details"));
        assert_eq!(step_section(BookingStep::Payment), Some("payment_method"));
        assert_eq!(step_section(BookingStep::Summary), None);
    }

    #[test]
    fn test_schedule_step_checks_only_schedule() {
        let form = json!({
            "schedule": {
                "start_date": "2024-01-01",
                "end_date": "2024-01-02",
                "delivery_method": "pickup",
                "delivery_address": "SM North EDSA"
            },
            "personal_details": { "first_name": "" }
        });
        let out = validate_step(BookingStep::Schedule, &form).unwrap();
        assert_eq!(out["schedule"]["delivery_method"], "pickup");
        assert!(out.get("personal_details").is_none());
    }

    #[test]
    fn test_schedule_step_missing_section() {
        let err = validate_step(BookingStep::Schedule, &json!({})).unwrap_err();
        assert_eq!(err.messages_for("schedule"), vec!["Required"]);
        assert_eq!(err.fields().len(), 1);
    }

    #[test]
    fn test_payment_step_uses_full_paths() {
        let err = validate_step(
            BookingStep::Payment,
            &json!({ "payment_method": { "gcash_number": "0917" } }),
        )
        .unwrap_err();
        assert_eq!(
            err.first_message_for("payment_method.gcash_number"),
            Some("Please enter a valid Philippine GCash number")
        );
    }
}
