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

//! Integration tests for the metrics endpoint.
//!
//! Tests `/metrics` (Prometheus format).
//! Uses in-process requests via tower::ServiceExt::oneshot.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use portico_api::{create_router, AppState};
use tower::ServiceExt;

fn create_test_state() -> AppState {
    AppState::with_credentials("admin", "admin123", "test-secret-key")
        .expect("Failed to create test state")
}

async fn body_to_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_prometheus_metrics_without_recorder() {
    let app = create_router(create_test_state());

    let response = app
        .oneshot(Request::builder().method("GET").uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    // PrometheusHandle is None in test state
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_to_string(response.into_body()).await, "Metrics disabled");
}

#[tokio::test]
async fn test_prometheus_metrics_with_recorder() {
    // Install a test-local Prometheus recorder
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    let handle = builder.install_recorder().expect("Failed to install recorder");

    let state = create_test_state().with_prometheus_handle(handle);
    let app = create_router(state);

    // Make requests to generate some metrics first
    for uri in [
        "/profile?username=sainath&login_status=true",
        "/login?username=admin&password=admin123",
        "/login?username=admin&password=wrong",
    ] {
        let response = app
            .clone()
            .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(Request::builder().method("GET").uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_string(response.into_body()).await;
    assert!(
        body.contains("http_requests_total"),
        "Expected request counter in body, got: {}",
        &body[..body.len().min(500)]
    );
    assert!(body.contains("login_attempts_total"));
    assert!(body.contains(r#"outcome="success""#));
    assert!(body.contains(r#"outcome="invalid""#));
    assert!(body.contains(r#"path="/profile""#));
}
