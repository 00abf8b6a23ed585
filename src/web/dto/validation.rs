//! Validation utilities for Web API DTOs.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::web::error::ApiError;

/// Email domain required for job contact addresses.
pub const CORPORATE_EMAIL_DOMAIN: &str = "@vietinbank.vn";

/// Number of digits required in a notification chat id.
pub const CHAT_ID_DIGITS: usize = 8;

/// A JSON extractor that validates the request body.
///
/// This extractor deserializes the request body as JSON and then validates it
/// using the `validator` crate. If validation fails, it returns a detailed
/// error response with field-level error information.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // First, extract the JSON body
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e)))?;

        // Then, validate the deserialized value
        value.validate().map_err(ApiError::from_validation_errors)?;

        Ok(ValidatedJson(value))
    }
}

// ============================================================================
// Custom Validators
// ============================================================================

/// Validate that a contact email belongs to the corporate domain.
pub fn corporate_email(value: &str) -> Result<(), validator::ValidationError> {
    if !value.ends_with(CORPORATE_EMAIL_DOMAIN) {
        return Err(validator::ValidationError::new("corporate_email")
            .with_message(format!("Email must end with {CORPORATE_EMAIL_DOMAIN}").into()));
    }
    Ok(())
}

/// Validate that a chat id is exactly eight decimal digits.
pub fn chat_id_digits(value: &str) -> Result<(), validator::ValidationError> {
    if value.len() != CHAT_ID_DIGITS || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(validator::ValidationError::new("chat_id_digits")
            .with_message("Chat ID must be exactly 8 digits".into()));
    }
    Ok(())
}
