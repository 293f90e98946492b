//! Schemas for the costume rental booking form
//!
//! Each schema is built once and shared for the life of the process. The
//! `partial_*` variants relax every field at every level to optional and are
//! used to check a step while the rest of the form is still being filled in.

use crate::core::field::FieldFormat;
use crate::core::validation::validators::{
    email, format, is_true, iso_datetime, min_length, non_empty, one_of,
};
use crate::core::validation::{FieldSpec, ObjectSchema};
use std::sync::OnceLock;

pub const DELIVERY_METHODS: &[&str] = &["delivery", "pickup"];
pub const PAYMENT_TYPES: &[&str] = &["gcash"];

/// Non-empty string whose missing and empty messages are the same
///
/// An absent key reports the field's own message (e.g. "Start date is
/// required") rather than the generic `"Required"` a zod schema gives for a
/// missing key, so the form shows one wording for both cases.
fn required_string(name: &str, message: &'static str) -> FieldSpec {
    FieldSpec::string(name)
        .rule(non_empty(message))
        .when_missing(message)
}

fn accepted(name: &str, message: &'static str) -> FieldSpec {
    FieldSpec::boolean(name)
        .rule(is_true(message))
        .when_missing(message)
}

fn build_schedule() -> ObjectSchema {
    ObjectSchema::new("schedule")
        .field(required_string("start_date", "Start date is required"))
        .field(required_string("end_date", "End date is required"))
        .field(
            FieldSpec::string("delivery_method")
                .rule(one_of(DELIVERY_METHODS))
                .default_value("delivery"),
        )
        .field(required_string(
            "delivery_address",
            "Delivery address is required",
        ))
}

fn build_personal_details() -> ObjectSchema {
    ObjectSchema::new("personal_details")
        .field(required_string("user_id", "User ID is required"))
        .field(
            required_string("first_name", "First name is required")
                .rule(min_length(2, "First name must be at least 2 characters")),
        )
        .field(
            required_string("last_name", "Last name is required")
                .rule(min_length(2, "Last name must be at least 2 characters")),
        )
        .field(
            required_string("email", "Email is required")
                .rule(email("Please enter a valid email address")),
        )
        .field(
            FieldSpec::string("phone_number")
                .rule(min_length(3, "Phone number is required"))
                .when_missing("Phone number is required"),
        )
        .field(
            FieldSpec::string("date_of_birth")
                .rule(iso_datetime("Date of birth must be a valid ISO date")),
        )
}

fn build_payment_method() -> ObjectSchema {
    ObjectSchema::new("payment_method")
        .field(
            FieldSpec::string("type")
                .rule(one_of(PAYMENT_TYPES))
                .default_value("gcash"),
        )
        .field(
            required_string("gcash_number", "GCash number is required").rule(format(
                FieldFormat::GcashNumber,
                "Please enter a valid Philippine GCash number",
            )),
        )
}

fn build_agreements() -> ObjectSchema {
    ObjectSchema::new("agreements")
        .field(accepted(
            "terms_accepted",
            "You must accept the terms and conditions",
        ))
        .field(accepted("damage_policy", "You must accept the damage policy"))
        .field(accepted(
            "cancellation_policy",
            "You must accept the cancellation policy",
        ))
}

fn build_rental_booking() -> ObjectSchema {
    ObjectSchema::new("rental_booking")
        .field(required_string("costume_id", "Costume ID is required"))
        .field(FieldSpec::object("schedule", schedule_schema().clone()))
        .field(FieldSpec::object(
            "personal_details",
            personal_details_schema().clone(),
        ))
        .field(FieldSpec::object(
            "payment_method",
            payment_method_schema().clone(),
        ))
        .field(FieldSpec::object("agreements", agreements_schema().clone()))
        .field(
            FieldSpec::string("special_instructions")
                .optional()
                .default_value(""),
        )
}

macro_rules! static_schema {
    ($name:ident, $build:expr) => {
        pub fn $name() -> &'static ObjectSchema {
            static SCHEMA: OnceLock<ObjectSchema> = OnceLock::new();
            SCHEMA.get_or_init($build)
        }
    };
}

static_schema!(schedule_schema, build_schedule);
static_schema!(personal_details_schema, build_personal_details);
static_schema!(payment_method_schema, build_payment_method);
static_schema!(agreements_schema, build_agreements);
static_schema!(rental_booking_schema, build_rental_booking);

static_schema!(partial_schedule_schema, || schedule_schema().partial());
static_schema!(partial_personal_details_schema, || {
    personal_details_schema().partial()
});
static_schema!(partial_payment_method_schema, || {
    payment_method_schema().partial()
});
static_schema!(partial_agreements_schema, || agreements_schema().partial());
static_schema!(partial_rental_booking_schema, || {
    rental_booking_schema().partial()
});
