//! API error taxonomy and the JSON error envelope.
//!
//! Every failure a handler can produce maps to one `ApiError` variant; the
//! Display string of the variant is the envelope's `message` and is part of
//! the HTTP contract. `stack` is only rendered in development mode.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthError;
use crate::observability::Logger;
use crate::store::StoreError;

/// The response tuple handlers return on failure.
pub type Rejection = (StatusCode, Json<ErrorEnvelope>);

/// Failures visible at the HTTP boundary.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Path id segment did not start with an integer.
    #[error("Input must be a number")]
    InvalidId,

    /// Request body failed key-set or shape validation.
    #[error("Bad Request")]
    BadRequest,

    /// A record lookup missed; carries the resource's singular name.
    #[error("{0} not found")]
    NotFound(String),

    /// No route (or no configured resource) matched the request.
    #[error("Not Found")]
    RouteNotFound,

    /// A unique key (record id or email) is already taken.
    #[error("Conflict")]
    Conflict,

    /// Credentials or security answers did not check out.
    #[error("Unauthorized")]
    Unauthorized,

    /// Any other failure, reported with the underlying message.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Translate a store failure for a specific resource.
    ///
    /// `NotFound` picks up the resource's singular name ("Recipe not
    /// found"); id collisions become `Conflict`; everything else passes
    /// through as a 500 with the store's message.
    pub fn from_store(err: StoreError, singular: &str) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound(singular.to_string()),
            StoreError::DuplicateId(_) => ApiError::Conflict,
            StoreError::Internal(message) => ApiError::Internal(message),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized => ApiError::Unauthorized,
            AuthError::Conflict => ApiError::Conflict,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// The uniform JSON body of every failure response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    #[serde(rename = "type")]
    pub kind: &'static str,

    pub status: u16,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorEnvelope {
    /// Build the envelope for an error, optionally carrying its debug
    /// rendering as the `stack` field.
    pub fn from_error(err: &ApiError, include_stack: bool) -> Self {
        Self {
            kind: "error",
            status: err.status_code().as_u16(),
            message: err.to_string(),
            stack: include_stack.then(|| format!("{err:?}")),
        }
    }
}

/// Render a failure as its HTTP response, logging it on the way out.
///
/// Client errors (4xx) log at WARN; server errors (5xx) at ERROR.
pub fn reject(err: ApiError, include_stack: bool) -> Rejection {
    let status = err.status_code();
    let status_text = status.as_u16().to_string();
    let message = err.to_string();
    let fields = [("message", message.as_str()), ("status", status_text.as_str())];

    if status.is_server_error() {
        Logger::error("REQUEST_FAILED", &fields);
    } else {
        Logger::warn("REQUEST_REJECTED", &fields);
    }

    (status, Json(ErrorEnvelope::from_error(&err, include_stack)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::NotFound("Book".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_contract_messages() {
        assert_eq!(ApiError::InvalidId.to_string(), "Input must be a number");
        assert_eq!(ApiError::BadRequest.to_string(), "Bad Request");
        assert_eq!(
            ApiError::NotFound("Recipe".to_string()).to_string(),
            "Recipe not found"
        );
        assert_eq!(ApiError::Unauthorized.to_string(), "Unauthorized");
        assert_eq!(ApiError::Conflict.to_string(), "Conflict");
    }

    #[test]
    fn test_store_not_found_picks_up_resource_name() {
        let err = ApiError::from_store(StoreError::NotFound, "Book");
        assert_eq!(err.to_string(), "Book not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_duplicate_is_conflict() {
        let err = ApiError::from_store(StoreError::DuplicateId(6), "Book");
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_store_internal_keeps_message() {
        let err = ApiError::from_store(StoreError::Internal("Lock poisoned".to_string()), "Book");
        assert_eq!(err.to_string(), "Lock poisoned");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_auth_errors_map_through() {
        assert_eq!(
            ApiError::from(AuthError::Unauthorized).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(AuthError::Conflict).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(AuthError::HashingFailed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_envelope_shape() {
        let envelope = ErrorEnvelope::from_error(&ApiError::BadRequest, false);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["type"], "error");
        assert_eq!(json["status"], 400);
        assert_eq!(json["message"], "Bad Request");
        assert!(json.get("stack").is_none());
    }

    #[test]
    fn test_envelope_stack_only_when_requested() {
        let with_stack = ErrorEnvelope::from_error(&ApiError::Unauthorized, true);
        assert!(with_stack.stack.is_some());

        let without = ErrorEnvelope::from_error(&ApiError::Unauthorized, false);
        assert!(without.stack.is_none());
    }
}
