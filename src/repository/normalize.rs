use crate::api::{parse_error_message, ApiError};

use super::resource::Resource;

/// Shown for every transport failure regardless of the call.
pub const CONNECTION_ERROR: &str = "Error de conexión. Inténtalo nuevamente.";

/// Shown when a 2xx reply carries no body where one is required.
pub const EMPTY_RESPONSE: &str = "Respuesta vacía del servidor";

/// Map a failed call to its user-facing message.
pub fn error_message(error: &ApiError, fallback: &str) -> String {
    match error {
        ApiError::Transport(_) => CONNECTION_ERROR.to_string(),
        ApiError::Status { body, .. } => parse_error_message(Some(body), fallback),
        ApiError::EmptyBody => EMPTY_RESPONSE.to_string(),
        ApiError::Decode(_) | ApiError::InvalidUrl(_) => fallback.to_string(),
    }
}

/// Fold a call result into a [`Resource`], logging failures.
pub fn normalize<T>(result: Result<T, ApiError>, fallback: &str) -> Resource<T> {
    match result {
        Ok(data) => Resource::Success(data),
        Err(error) => {
            let message = error_message(&error, fallback);
            tracing::warn!(error = %error, message = %message, "request normalized to error");
            Resource::error(message)
        }
    }
}
