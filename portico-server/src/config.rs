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

//! Configuration management for Portico server.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default bind address.
pub const DEFAULT_BIND: &str = "127.0.0.1:9090";
/// Default accepted username.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
/// Default accepted password.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings (bind address, TLS)
    pub server: ServerConfig,
    /// Credentials and application secret
    pub security: SecurityConfig,
    /// Metrics configuration
    pub metrics: MetricsConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:9090").
    /// Can be set via PORTICO_BIND environment variable.
    pub bind: String,
    /// TLS configuration for HTTPS support.
    pub tls: TlsConfig,
}

/// TLS/HTTPS configuration.
///
/// TLS is disabled by default. To enable TLS, set the `PORTICO_TLS_CERT` and
/// `PORTICO_TLS_KEY` environment variables to point to PEM-encoded certificate
/// and private key files.
///
/// Example:
/// ```bash
/// export PORTICO_TLS_CERT=/path/to/cert.pem
/// export PORTICO_TLS_KEY=/path/to/key.pem
/// ./portico-server
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TlsConfig {
    /// Whether TLS is enabled.
    /// Automatically set to true when both cert_path and key_path are provided.
    pub enabled: bool,
    /// Path to PEM-encoded certificate file.
    pub cert_path: Option<PathBuf>,
    /// Path to PEM-encoded private key file.
    pub key_path: Option<PathBuf>,
}

impl Default for TlsConfig {
    fn default() -> Self {
        let cert_path = std::env::var("PORTICO_TLS_CERT").ok().map(PathBuf::from);
        let key_path = std::env::var("PORTICO_TLS_KEY").ok().map(PathBuf::from);

        // Enable TLS only if both cert and key are provided
        let enabled = cert_path.is_some() && key_path.is_some();

        Self {
            enabled,
            cert_path,
            key_path,
        }
    }
}

impl TlsConfig {
    /// Validates TLS configuration.
    ///
    /// Returns an error if TLS is enabled but certificate or key paths are missing.
    pub fn validate(&self) -> Result<(), String> {
        if self.enabled {
            if self.cert_path.is_none() {
                return Err("TLS enabled but PORTICO_TLS_CERT is not set".to_string());
            }
            if self.key_path.is_none() {
                return Err("TLS enabled but PORTICO_TLS_KEY is not set".to_string());
            }
        }
        Ok(())
    }
}

/// Security configuration.
///
/// Replaces the hardcoded credentials and secret key of a single global
/// app: the server builds its verifier from these values at startup.
/// The secret and the password are never serialized.
#[derive(Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Secret mixed into password hashes.
    /// Can be set via PORTICO_SECRET_KEY environment variable.
    #[serde(skip_serializing)]
    pub secret_key: String,
    /// Username accepted by `/login`.
    /// Can be set via PORTICO_ADMIN_USERNAME environment variable.
    pub admin_username: String,
    /// Password accepted by `/login`.
    /// Can be set via PORTICO_ADMIN_PASSWORD environment variable.
    #[serde(skip_serializing)]
    pub admin_password: String,
}

impl std::fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("secret_key", &"<redacted>")
            .field("admin_username", &self.admin_username)
            .field("admin_password", &"<redacted>")
            .finish()
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            secret_key: std::env::var("PORTICO_SECRET_KEY").unwrap_or_else(|_| {
                // Generate a random key for development if not set
                use std::collections::hash_map::DefaultHasher;
                use std::hash::{Hash, Hasher};
                let mut hasher = DefaultHasher::new();
                (std::time::SystemTime::now(), std::process::id()).hash(&mut hasher);
                format!("dev-secret-{:016x}", hasher.finish())
            }),
            admin_username: std::env::var("PORTICO_ADMIN_USERNAME")
                .unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string()),
            admin_password: std::env::var("PORTICO_ADMIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string()),
        }
    }
}

/// Metrics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Enable Prometheus metrics at `/metrics`.
    /// Can be set via PORTICO_METRICS_ENABLED environment variable.
    pub prometheus_enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            prometheus_enabled: std::env::var("PORTICO_METRICS_ENABLED")
                .map(|s| parse_bool(&s))
                .unwrap_or(true),
        }
    }
}

/// Parses an environment flag: `true` or `1`, case-insensitive.
pub fn parse_bool(s: &str) -> bool {
    let s = s.trim();
    s.eq_ignore_ascii_case("true") || s == "1"
}

impl Config {
    /// Loads configuration from environment variables and validates it.
    pub fn load() -> anyhow::Result<Self> {
        let config = Self::default();
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;
        Ok(config)
    }

    /// Validates the whole configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.server
            .bind
            .parse::<SocketAddr>()
            .map_err(|e| format!("Invalid bind address '{}': {}", self.server.bind, e))?;

        if self.security.admin_username.is_empty() {
            return Err("PORTICO_ADMIN_USERNAME must not be empty".to_string());
        }

        self.server.tls.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind: std::env::var("PORTICO_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string()),
                tls: TlsConfig::default(),
            },
            security: SecurityConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}
