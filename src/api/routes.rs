//! Parameterized collection handlers.
//!
//! One handler set serves every configured resource; the `:resource` path
//! segment selects the `ResourceSpec` that drives validation and messages.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::validation::parse_id;

use super::errors::{ApiError, Rejection};
use super::AppState;

/// Collection CRUD routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/:resource", get(list_records).post(create_record))
        .route(
            "/:resource/:id",
            get(get_record).put(update_record).delete(delete_record),
        )
}

/// GET /api/:resource
async fn list_records(
    State(state): State<Arc<AppState>>,
    Path(resource): Path<String>,
) -> Result<Json<Vec<Value>>, Rejection> {
    let spec = state.resource(&resource)?;

    let records = state
        .store
        .find(spec.name)
        .map_err(|e| state.reject(ApiError::from_store(e, spec.singular)))?;

    Ok(Json(records))
}

/// GET /api/:resource/:id
async fn get_record(
    State(state): State<Arc<AppState>>,
    Path((resource, raw_id)): Path<(String, String)>,
) -> Result<Json<Value>, Rejection> {
    let spec = state.resource(&resource)?;
    let id = parse_id(&raw_id).map_err(|_| state.reject(ApiError::InvalidId))?;

    let record = state
        .store
        .find_one(spec.name, id)
        .map_err(|e| state.reject(ApiError::from_store(e, spec.singular)))?;

    Ok(Json(record))
}

/// POST /api/:resource
async fn create_record(
    State(state): State<Arc<AppState>>,
    Path(resource): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), Rejection> {
    let spec = state.resource(&resource)?;

    let Json(body) = body.map_err(|_| state.reject(ApiError::BadRequest))?;
    if !spec.create_rule.validate(&body) {
        return Err(state.reject(ApiError::BadRequest));
    }

    let id = state
        .store
        .insert_one(spec.name, body)
        .map_err(|e| state.reject(ApiError::from_store(e, spec.singular)))?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// PUT /api/:resource/:id
async fn update_record(
    State(state): State<Arc<AppState>>,
    Path((resource, raw_id)): Path<(String, String)>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, Rejection> {
    let spec = state.resource(&resource)?;
    let id = parse_id(&raw_id).map_err(|_| state.reject(ApiError::InvalidId))?;

    let Json(body) = body.map_err(|_| state.reject(ApiError::BadRequest))?;
    if !spec.update_rule.validate(&body) {
        return Err(state.reject(ApiError::BadRequest));
    }

    state
        .store
        .update_one(spec.name, id, body)
        .map_err(|e| state.reject(ApiError::from_store(e, spec.singular)))?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/:resource/:id
async fn delete_record(
    State(state): State<Arc<AppState>>,
    Path((resource, raw_id)): Path<(String, String)>,
) -> Result<StatusCode, Rejection> {
    let spec = state.resource(&resource)?;

    // An unparseable id cannot match any record; it falls out as the
    // resource's 404 rather than a 400.
    let Ok(id) = parse_id(&raw_id) else {
        return Err(state.reject(ApiError::NotFound(spec.singular.to_string())));
    };

    state
        .store
        .delete_one(spec.name, id)
        .map_err(|e| state.reject(ApiError::from_store(e, spec.singular)))?;

    Ok(StatusCode::NO_CONTENT)
}
