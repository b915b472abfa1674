// Copyright 2026 S4Core Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Axum HTTP server setup and routing.

use axum::{
    http::{header::HeaderName, Method},
    middleware,
    routing::get,
    Router,
};
use portico_access::{AccessError, CredentialVerifier, PasswordHasher, StaticCredentialVerifier};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;
use crate::middleware::{logging_middleware, metrics_middleware, REQUEST_ID_HEADER};

/// Shared application state for all handlers.
///
/// Everything in here is immutable once built; cloning only bumps
/// reference counts.
#[derive(Clone)]
pub struct AppState {
    /// Credential verifier consulted by `/login`.
    pub verifier: Arc<dyn CredentialVerifier>,
    /// Prometheus metrics handle for rendering `/metrics` endpoint.
    pub prometheus_handle: Option<metrics_exporter_prometheus::PrometheusHandle>,
}

impl AppState {
    /// Creates a new application state around an existing verifier.
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            verifier,
            prometheus_handle: None,
        }
    }

    /// Creates a new application state accepting a single username/password.
    ///
    /// `secret_key` keys the in-memory password hash; pass an empty string
    /// for an unkeyed hash.
    pub fn with_credentials(
        username: impl Into<String>,
        password: &str,
        secret_key: &str,
    ) -> Result<Self, AccessError> {
        let hasher = PasswordHasher::with_secret(secret_key);
        let verifier = StaticCredentialVerifier::new(username, password, hasher)?;
        Ok(Self::new(Arc::new(verifier)))
    }

    /// Sets the Prometheus handle for rendering metrics.
    pub fn with_prometheus_handle(
        mut self,
        handle: metrics_exporter_prometheus::PrometheusHandle,
    ) -> Self {
        self.prometheus_handle = Some(handle);
        self
    }
}

/// Creates the main router.
///
/// # Routing
///
/// - `GET /` - Home
/// - `GET|POST /login?username=..&password=..` - Login check
/// - `GET|POST /dashboard` - Dashboard
/// - `GET|POST /logout` - Logout
/// - `GET|POST /profile?username=..&login_status=..` - Profile check
/// - `GET /metrics` - Prometheus metrics
///
/// Every route except `/metrics` answers `200` with `{"response": "..."}`.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any)
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)]);

    Router::new()
        .route("/", get(handlers::home))
        .route("/login", get(handlers::login).post(handlers::login))
        .route("/dashboard", get(handlers::dashboard).post(handlers::dashboard))
        .route("/logout", get(handlers::logout).post(handlers::logout))
        .route("/profile", get(handlers::profile).post(handlers::profile))
        // Observability endpoints
        .route("/metrics", get(handlers::stats::prometheus_metrics))
        .layer(cors)
        // Add tracing layer for request logging
        .layer(TraceLayer::new_for_http())
        // Add metrics middleware to record request count and latency
        .layer(middleware::from_fn(metrics_middleware))
        // Outermost so every response carries a request id
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
