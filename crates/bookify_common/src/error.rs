// --- File: crates/bookify_common/src/error.rs ---
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// The base error type for all Bookify request failures.
///
/// This enum provides the common set of failure variants used across all crates.
/// Crate-local errors (e.g. token errors) convert into this type via From impls.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing, malformed, expired or otherwise unusable credentials
    #[error("{0}")]
    Unauthenticated(String),

    /// The account behind a valid token has been disabled
    #[error("Inactive user")]
    AccountDisabled,

    /// Role or ownership violation
    #[error("{0}")]
    Forbidden(String),

    /// Missing entity, or an empty result set on list endpoints
    #[error("{0}")]
    NotFound(String),

    /// Resource already exists (duplicate registration)
    #[error("{0}")]
    Conflict(String),

    /// Malformed payload, date or time
    #[error("{0}")]
    Validation(String),

    /// Unexpected internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Standard rejection for requests whose credentials cannot be validated.
    pub fn invalid_credentials() -> Self {
        ApiError::Unauthenticated("Could not validate credentials".to_string())
    }
}

/// A trait for converting errors to HTTP status codes.
///
/// Implemented by error types to provide a consistent way to map errors
/// onto the wire contract.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for ApiError {
    fn status_code(&self) -> u16 {
        match self {
            ApiError::Unauthenticated(_) => 401,
            // The original service reported disabled accounts as 400
            ApiError::AccountDisabled => 400,
            ApiError::Forbidden(_) => 403,
            ApiError::NotFound(_) => 404,
            // 400 rather than 409 to preserve the original registration contract
            ApiError::Conflict(_) => 400,
            ApiError::Validation(_) => 422,
            ApiError::Internal(_) => 500,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(json!({ "detail": self.to_string() }));

        if matches!(self, ApiError::Unauthenticated(_)) {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_wire_contract() {
        assert_eq!(ApiError::invalid_credentials().status_code(), 401);
        assert_eq!(ApiError::AccountDisabled.status_code(), 400);
        assert_eq!(ApiError::Forbidden("no".into()).status_code(), 403);
        assert_eq!(ApiError::NotFound("missing".into()).status_code(), 404);
        assert_eq!(ApiError::Conflict("dupe".into()).status_code(), 400);
        assert_eq!(ApiError::Validation("bad date".into()).status_code(), 422);
        assert_eq!(ApiError::Internal("boom".into()).status_code(), 500);
    }

    #[test]
    fn unauthenticated_response_carries_challenge_header() {
        let response = ApiError::invalid_credentials().into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response
                .headers()
                .get(header::WWW_AUTHENTICATE)
                .and_then(|v| v.to_str().ok()),
            Some("Bearer")
        );
    }
}
