//! # rentform
//!
//! Validation schemas and typed contracts for the costume rental booking form.
//!
//! ## Features
//!
//! - **Declarative Schemas**: per-field rules, nested objects, defaults
//! - **Partial Variants**: every schema has an all-optional twin for step-by-step checks
//! - **Aggregated Errors**: every failing field is reported, keyed by its dotted path
//! - **Typed Values**: validated input converts into plain Rust structs
//! - **Axum Integration**: `Validated<T>` rejects bad request bodies with 422
//! - **Configurable Stepper**: step titles and descriptions loadable from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rentform::prelude::*;
//!
//! // While the user is still on the schedule step
//! let draft = json!({ "schedule": { "start_date": "2024-01-01" } });
//! assert!(PartialRentalBooking::parse(&draft).is_ok());
//!
//! // On submit, everything is required
//! match RentalBooking::parse(&draft) {
//!     Ok(booking) => send(booking),
//!     Err(err) => {
//!         for e in err.fields() {
//!             println!("{}: {}", e.field, e.message);
//!         }
//!     }
//! }
//! ```

pub mod booking;
pub mod config;
pub mod core;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ConfigError, FieldValidationError, FormError, ValidationError},
        field::{FieldFormat, ValueType},
        validation::{FieldSpec, FormSchema, ObjectSchema, Validated, validators},
    };

    // === Booking form ===
    pub use crate::booking::{
        Agreements, BookingStep, BookingStepConfig, CostumeRentalInfo, DeliveryMethod,
        PartialAgreements, PartialPaymentMethod, PartialPersonalDetails, PartialRentalBooking,
        PartialSchedule, PaymentMethod, PaymentType, PersonalDetails, RentalBooking,
        RentalCalculation, Schedule,
        schemas::{
            agreements_schema, partial_agreements_schema, partial_payment_method_schema,
            partial_personal_details_schema, partial_rental_booking_schema,
            partial_schedule_schema, payment_method_schema, personal_details_schema,
            rental_booking_schema, schedule_schema,
        },
        step_section, validate_step,
    };

    // === Config ===
    pub use crate::config::{StepDefinition, StepsConfig};

    // === External dependencies ===
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{Value, json};
}
