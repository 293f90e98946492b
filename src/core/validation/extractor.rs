//! Axum extractor for validated form submissions
//!
//! This module provides the `Validated<T>` extractor that validates request
//! payloads against a form schema before they reach handlers.

use super::FormSchema;
use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

/// Axum extractor that validates a JSON body and converts it to `T`
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_booking(
///     Validated(booking): Validated<RentalBooking>,
/// ) -> Result<Json<BookingReceipt>, StatusCode> {
///     // booking is already validated, defaults applied
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    /// Get the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: FormSchema + Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<Value> = match Json::from_request(req, state).await {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "rejected form body: invalid JSON");
                return Err((
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "Invalid JSON",
                        "details": e.to_string()
                    })),
                )
                    .into_response());
            }
        };

        match T::parse(&payload) {
            Ok(value) => Ok(Validated(value)),
            Err(err) => {
                tracing::warn!(
                    schema = %T::schema().name(),
                    error_count = err.fields().len(),
                    "rejected form body: validation failed"
                );
                Err((
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({
                        "error": "Validation failed",
                        "errors": err.fields()
                    })),
                )
                    .into_response())
            }
        }
    }
}
