//! Auth HTTP routes: register, login, verify security questions.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;

use crate::auth::Credential;
use crate::validation::{KeyRule, VerifyAnswersBody};

use super::errors::{ApiError, Rejection};
use super::AppState;

/// Registration and login both take exactly an email and a password.
const CREDENTIAL_KEYS: KeyRule = KeyRule::exact(&["email", "password"]);

/// Auth routes under `/api`.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route(
            "/users/:email/verify-security-question",
            post(verify_security_question_handler),
        )
}

#[derive(Debug, Serialize)]
struct RegisterResponse {
    user: Credential,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct VerifyResponse {
    message: &'static str,
    user: Credential,
}

/// Pull the email and password values out of an already key-validated body.
fn credential_values(body: &Value) -> Result<(&str, &str), ApiError> {
    let email = body["email"].as_str().ok_or(ApiError::BadRequest)?;
    let password = body["password"].as_str().ok_or(ApiError::BadRequest)?;
    Ok((email, password))
}

/// POST /api/register
async fn register_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RegisterResponse>, Rejection> {
    let Json(body) = body.map_err(|_| state.reject(ApiError::BadRequest))?;
    if !CREDENTIAL_KEYS.validate(&body) {
        return Err(state.reject(ApiError::BadRequest));
    }
    let (email, password) = credential_values(&body).map_err(|e| state.reject(e))?;

    let user = state
        .auth
        .register(email, password)
        .map_err(|e| state.reject(e.into()))?;

    Ok(Json(RegisterResponse {
        user,
        message: "Registration successful",
    }))
}

/// POST /api/login
async fn login_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, Rejection> {
    let Json(body) = body.map_err(|_| state.reject(ApiError::BadRequest))?;
    if !CREDENTIAL_KEYS.validate(&body) {
        return Err(state.reject(ApiError::BadRequest));
    }
    let (email, password) = credential_values(&body).map_err(|e| state.reject(e))?;

    state
        .auth
        .login(email, password)
        .map_err(|e| state.reject(e.into()))?;

    Ok(Json(MessageResponse {
        message: "Authentication successful",
    }))
}

/// POST /api/users/:email/verify-security-question
async fn verify_security_question_handler(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<VerifyResponse>, Rejection> {
    let Json(body) = body.map_err(|_| state.reject(ApiError::BadRequest))?;
    let parsed: VerifyAnswersBody =
        serde_json::from_value(body).map_err(|_| state.reject(ApiError::BadRequest))?;

    let user = state
        .auth
        .verify_security_answers(&email, &parsed.into_answers())
        .map_err(|e| state.reject(e.into()))?;

    Ok(Json(VerifyResponse {
        message: "Security questions successfully answered",
        user,
    }))
}
