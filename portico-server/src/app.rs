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

//! Application initialization and runtime.
//!
//! This module handles:
//! - Building the shared state from configuration
//! - HTTP server setup and routing
//! - TLS/HTTPS configuration
//! - Graceful shutdown

use crate::config::Config;
use anyhow::{Context, Result};
use axum::{Router, ServiceExt};
use portico_api::{create_router, AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::normalize_path::NormalizePath;
use tracing::info;

/// Main application.
pub struct App {
    config: Config,
    /// Shared handler state, without the metrics handle yet.
    state: AppState,
}

impl App {
    /// Creates a new application instance.
    ///
    /// Hashes the configured password and builds the credential verifier.
    pub fn new(config: Config) -> Result<Self> {
        info!("Initializing Portico application...");

        let state = AppState::with_credentials(
            config.security.admin_username.clone(),
            &config.security.admin_password,
            &config.security.secret_key,
        )
        .context("Failed to build credential verifier")?;

        info!(
            "Credential verifier ready for user '{}'",
            config.security.admin_username
        );

        Ok(Self { config, state })
    }

    /// Runs the application (HTTP/HTTPS server).
    ///
    /// If TLS is configured via `PORTICO_TLS_CERT` and `PORTICO_TLS_KEY`
    /// environment variables, the server will use HTTPS. Otherwise, it runs as HTTP.
    pub async fn run(self) -> Result<()> {
        // Validate TLS configuration early
        self.config
            .server
            .tls
            .validate()
            .map_err(|e| anyhow::anyhow!("TLS configuration error: {}", e))?;

        // Parse bind address
        let addr: SocketAddr = self
            .config
            .server
            .bind
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.config.server.bind))?;

        // Check if TLS is enabled and load configuration
        let tls_config = if self.config.server.tls.enabled {
            Some(self.load_tls_config().await?)
        } else {
            None
        };

        // Initialize Prometheus metrics recorder if enabled
        let prometheus_handle = if self.config.metrics.prometheus_enabled {
            use metrics_exporter_prometheus::PrometheusBuilder;
            match PrometheusBuilder::new().install_recorder() {
                Ok(handle) => {
                    info!("Prometheus metrics enabled (available at /metrics)");
                    Some(handle)
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to install Prometheus recorder: {}. Metrics disabled.",
                        e
                    );
                    None
                }
            }
        } else {
            info!("Prometheus metrics disabled");
            None
        };

        let mut state = self.state;
        if let Some(handle) = prometheus_handle {
            state = state.with_prometheus_handle(handle);
        }

        let service = build_service(state);

        // Run server with or without TLS
        if let Some(rustls_config) = tls_config {
            info!("Listening on https://{}", addr);
            run_https_server(addr, service, rustls_config).await
        } else {
            info!("Listening on http://{}", addr);
            run_http_server(addr, service).await
        }
    }

    /// Loads TLS configuration from certificate and key files.
    async fn load_tls_config(&self) -> Result<axum_server::tls_rustls::RustlsConfig> {
        use axum_server::tls_rustls::RustlsConfig;

        let tls_config = &self.config.server.tls;

        let cert_path =
            tls_config.cert_path.as_ref().context("TLS certificate path not configured")?;
        let key_path =
            tls_config.key_path.as_ref().context("TLS private key path not configured")?;

        info!("Loading TLS certificate from {:?}", cert_path);
        info!("Loading TLS private key from {:?}", key_path);

        let rustls_config = RustlsConfig::from_pem_file(cert_path, key_path)
            .await
            .context("Failed to load TLS certificate and key")?;

        info!("TLS configured successfully");
        Ok(rustls_config)
    }
}

/// Builds the HTTP service: the router with trailing slashes trimmed
/// before routing, so `/profile/` reaches `/profile`.
pub fn build_service(state: AppState) -> NormalizePath<Router> {
    NormalizePath::trim_trailing_slash(create_router(state))
}

/// Runs the HTTP server (without TLS).
async fn run_http_server(addr: SocketAddr, service: NormalizePath<Router>) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(
        listener,
        ServiceExt::<axum::http::Request<axum::body::Body>>::into_make_service(service),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Runs the HTTPS server (with TLS).
async fn run_https_server(
    addr: SocketAddr,
    service: NormalizePath<Router>,
    rustls_config: axum_server::tls_rustls::RustlsConfig,
) -> Result<()> {
    // Create handle for graceful shutdown
    let handle = axum_server::Handle::new();
    let shutdown_handle = handle.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_handle.graceful_shutdown(Some(std::time::Duration::from_secs(30)));
    });

    axum_server::bind_rustls(addr, rustls_config)
        .handle(handle)
        .serve(ServiceExt::<axum::http::Request<axum::body::Body>>::into_make_service(service))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handles graceful shutdown signals.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown...");
        }
    }
}
