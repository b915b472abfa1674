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

//! Credential verification.

use async_trait::async_trait;
use tokio::task;

use super::error::AccessError;
use super::password::PasswordHasher;

/// A source of truth for username/password pairs.
///
/// The login route only sees this trait, so the configured pair can be
/// swapped for an external auth provider without touching the handlers.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Returns `Ok(true)` if `password` is the password of `username`.
    ///
    /// Comparison is exact and case-sensitive.
    async fn verify(&self, username: &str, password: &str) -> Result<bool, AccessError>;
}

/// Verifier for a single configured username/password pair.
///
/// Only an Argon2 hash of the password is kept in memory.
#[derive(Debug, Clone)]
pub struct StaticCredentialVerifier {
    username: String,
    password_hash: String,
    hasher: PasswordHasher,
}

impl StaticCredentialVerifier {
    /// Create a verifier accepting exactly `username`/`password`.
    ///
    /// # Errors
    ///
    /// - `InvalidUsername` if `username` is empty
    /// - `HashingFailed` if the password cannot be hashed
    pub fn new(
        username: impl Into<String>,
        password: &str,
        hasher: PasswordHasher,
    ) -> Result<Self, AccessError> {
        let username = username.into();
        if username.is_empty() {
            return Err(AccessError::InvalidUsername);
        }

        let password_hash = hasher.hash_password(password)?;

        Ok(Self {
            username,
            password_hash,
            hasher,
        })
    }

    /// The accepted username.
    pub fn username(&self) -> &str {
        &self.username
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> Result<bool, AccessError> {
        let hasher = self.hasher.clone();
        let password_hash = self.password_hash.clone();
        let password = password.to_string();

        // Argon2 is CPU bound; keep it off the async workers.
        // Hash check runs for unknown usernames too
        let password_ok =
            task::spawn_blocking(move || hasher.verify_password(&password, &password_hash))
                .await
                .map_err(|e| AccessError::ProviderUnavailable(e.to_string()))??;

        Ok(password_ok && username == self.username)
    }
}
