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

//! Metrics middleware for recording HTTP request metrics.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;

/// Paths that keep their own label.
const KNOWN_PATHS: [&str; 6] = ["/", "/login", "/dashboard", "/logout", "/profile", "/metrics"];

/// Middleware that records HTTP request count and latency metrics.
///
/// Records two metrics via the `metrics` crate:
/// - `http_requests_total` (counter): labeled by method, path and status.
/// - `http_request_duration_seconds` (histogram): labeled by method and path.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = normalize_path(request.uri().path());
    let start = Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    metrics::counter!("http_requests_total", "method" => method.clone(), "status" => status, "path" => path)
        .increment(1);
    metrics::histogram!("http_request_duration_seconds", "method" => method, "path" => path)
        .record(duration);

    response
}

/// Normalizes request paths to avoid label cardinality explosion.
///
/// Known routes keep their path (ignoring one trailing slash); anything
/// else is reported as `other`.
fn normalize_path(path: &str) -> &'static str {
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };

    KNOWN_PATHS.iter().copied().find(|known| *known == trimmed).unwrap_or("other")
}
