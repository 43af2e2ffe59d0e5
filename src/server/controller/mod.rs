//! HTTP request handlers.
//!
//! Controllers convert request DTOs into domain parameters, call the matching service
//! and convert the result back into a response DTO. They are the only layer that knows
//! about status codes; failures are mapped by `AppError`'s `IntoResponse`.

pub mod health;
pub mod pull_request;
pub mod stats;
pub mod team;
pub mod user;

use crate::server::error::AppError;

/// Rejects an empty required field with 400 Bad Request.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }

    Ok(())
}
