//! Auth errors.
//!
//! Display strings are part of the HTTP contract: they surface verbatim in
//! the error envelope's `message` field.

use thiserror::Error;

/// Result type for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication failures.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Unknown email, wrong password, or mismatched security answers.
    /// Deliberately generic.
    #[error("Unauthorized")]
    Unauthorized,

    /// Email already registered.
    #[error("Conflict")]
    Conflict,

    /// Password hashing failed.
    #[error("Internal error: password hashing failed")]
    HashingFailed,

    /// Credential storage failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AuthError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::Unauthorized => 401,
            AuthError::Conflict => 409,
            AuthError::HashingFailed => 500,
            AuthError::Storage(_) => 500,
        }
    }
}
