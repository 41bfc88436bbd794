//! HTTP API layer.
//!
//! One parameterized set of collection handlers plus the auth endpoints.
//! Handlers follow a fixed order per request: resolve the resource, parse
//! the path id, validate the body's key set, call the store, then map the
//! outcome to a status code. All failures render the same JSON envelope.

mod auth_routes;
mod errors;
mod resource;
mod routes;

pub use errors::{reject, ApiError, ErrorEnvelope, Rejection};
pub use resource::{ResourceRegistry, ResourceSpec};

use std::sync::Arc;

use axum::Router;

use crate::auth::{AuthService, InMemoryCredentialRepository};
use crate::server::Environment;
use crate::store::Store;

/// Shared state for all API handlers.
pub struct AppState {
    pub registry: ResourceRegistry,
    pub store: Box<dyn Store>,
    pub auth: AuthService<InMemoryCredentialRepository>,
    pub environment: Environment,
}

impl AppState {
    pub fn new(
        registry: ResourceRegistry,
        store: Box<dyn Store>,
        auth: AuthService<InMemoryCredentialRepository>,
        environment: Environment,
    ) -> Self {
        Self {
            registry,
            store,
            auth,
            environment,
        }
    }

    /// Render a failure, gating `stack` on the configured environment.
    pub fn reject(&self, err: ApiError) -> Rejection {
        errors::reject(err, self.environment.is_development())
    }

    /// Resolve a path segment to a configured resource, or 404.
    fn resource(&self, name: &str) -> Result<&ResourceSpec, Rejection> {
        self.registry
            .get(name)
            .ok_or_else(|| self.reject(ApiError::RouteNotFound))
    }
}

/// All routes under `/api`.
pub fn api_router() -> Router<Arc<AppState>> {
    auth_routes::router().merge(routes::router())
}
