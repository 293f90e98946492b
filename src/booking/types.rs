//! Typed booking form values
//!
//! These are hand-written to mirror the schemas in [`super::schemas`]. Values
//! are only constructed through [`FormSchema::parse`] (or deserialization of
//! data that already passed it), so a typed value always satisfies its schema.

use super::schemas::{
    agreements_schema, partial_agreements_schema, partial_payment_method_schema,
    partial_personal_details_schema, partial_rental_booking_schema, partial_schedule_schema,
    payment_method_schema, personal_details_schema, rental_booking_schema, schedule_schema,
};
use crate::core::error::ValidationError;
use crate::core::validation::{FormSchema, ObjectSchema};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the costume reaches the renter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    #[default]
    Delivery,
    Pickup,
}

impl DeliveryMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMethod::Delivery => "delivery",
            DeliveryMethod::Pickup => "pickup",
        }
    }
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported payment channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    #[default]
    Gcash,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Gcash => "gcash",
        }
    }
}

/// Rental period and hand-over details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub start_date: String,
    pub end_date: String,
    pub delivery_method: DeliveryMethod,
    pub delivery_address: String,
}

/// Who is renting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDetails {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    /// UTC ISO-8601 datetime, e.g. `1990-05-01T00:00:00.000Z`
    pub date_of_birth: String,
}

impl PersonalDetails {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub gcash_number: String,
}

/// Policy acknowledgements; every flag is `true` once validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agreements {
    pub terms_accepted: bool,
    pub damage_policy: bool,
    pub cancellation_policy: bool,
}

/// A complete booking, shaped exactly like the backend request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalBooking {
    pub costume_id: String,
    pub schedule: Schedule,
    pub personal_details: PersonalDetails,
    pub payment_method: PaymentMethod,
    pub agreements: Agreements,
    pub special_instructions: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialSchedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<DeliveryMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialPersonalDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialPaymentMethod {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcash_number: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialAgreements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_accepted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_policy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_policy: Option<bool>,
}

/// In-progress form state: every field at every level may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialRentalBooking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub costume_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<PartialSchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_details: Option<PartialPersonalDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PartialPaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreements: Option<PartialAgreements>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

impl PartialRentalBooking {
    /// Re-validate the accumulated state against the full booking schema
    pub fn into_complete(self) -> Result<RentalBooking, ValidationError> {
        let value = serde_json::to_value(&self).map_err(|e| ValidationError::InvalidJson {
            message: e.to_string(),
        })?;
        RentalBooking::parse(&value)
    }
}

impl From<RentalBooking> for PartialRentalBooking {
    fn from(booking: RentalBooking) -> Self {
        let RentalBooking {
            costume_id,
            schedule,
            personal_details,
            payment_method,
            agreements,
            special_instructions,
        } = booking;

        Self {
            costume_id: Some(costume_id),
            schedule: Some(PartialSchedule {
                start_date: Some(schedule.start_date),
                end_date: Some(schedule.end_date),
                delivery_method: Some(schedule.delivery_method),
                delivery_address: Some(schedule.delivery_address),
            }),
            personal_details: Some(PartialPersonalDetails {
                user_id: Some(personal_details.user_id),
                first_name: Some(personal_details.first_name),
                last_name: Some(personal_details.last_name),
                email: Some(personal_details.email),
                phone_number: Some(personal_details.phone_number),
                date_of_birth: Some(personal_details.date_of_birth),
            }),
            payment_method: Some(PartialPaymentMethod {
                payment_type: Some(payment_method.payment_type),
                gcash_number: Some(payment_method.gcash_number),
            }),
            agreements: Some(PartialAgreements {
                terms_accepted: Some(agreements.terms_accepted),
                damage_policy: Some(agreements.damage_policy),
                cancellation_policy: Some(agreements.cancellation_policy),
            }),
            special_instructions: Some(special_instructions),
        }
    }
}

macro_rules! form_schema {
    ($type:ty, $schema:ident) => {
        impl FormSchema for $type {
            fn schema() -> &'static ObjectSchema {
                $schema()
            }
        }
    };
}

form_schema!(Schedule, schedule_schema);
form_schema!(PersonalDetails, personal_details_schema);
form_schema!(PaymentMethod, payment_method_schema);
form_schema!(Agreements, agreements_schema);
form_schema!(RentalBooking, rental_booking_schema);

form_schema!(PartialSchedule, partial_schedule_schema);
form_schema!(PartialPersonalDetails, partial_personal_details_schema);
form_schema!(PartialPaymentMethod, partial_payment_method_schema);
form_schema!(PartialAgreements, partial_agreements_schema);
form_schema!(PartialRentalBooking, partial_rental_booking_schema);
