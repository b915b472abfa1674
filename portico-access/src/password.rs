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

//! Password hashing and verification using Argon2.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::rngs::OsRng;

use super::error::AccessError;

/// Password hasher using Argon2id.
///
/// When built with [`PasswordHasher::with_secret`], the application secret
/// key is mixed into every hash. Hashes made under one secret do not verify
/// under another.
#[derive(Clone, Default)]
pub struct PasswordHasher {
    secret: Option<Vec<u8>>,
}

impl PasswordHasher {
    /// Create new password hasher with default parameters and no secret.
    pub fn new() -> Self {
        Self { secret: None }
    }

    /// Create a password hasher keyed with the application secret.
    ///
    /// An empty secret is treated as no secret.
    pub fn with_secret(secret: impl AsRef<[u8]>) -> Self {
        let secret = secret.as_ref();
        Self {
            secret: (!secret.is_empty()).then(|| secret.to_vec()),
        }
    }

    fn argon2(&self) -> Result<Argon2<'_>, AccessError> {
        match &self.secret {
            Some(secret) => Argon2::new_with_secret(
                secret,
                Algorithm::default(),
                Version::default(),
                Params::default(),
            )
            .map_err(|_| AccessError::HashingFailed),
            None => Ok(Argon2::default()),
        }
    }

    /// Hash password using Argon2.
    ///
    /// # Returns
    ///
    /// Returns PHC string format hash.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::HashingFailed` if hashing fails.
    pub fn hash_password(&self, password: &str) -> Result<String, AccessError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| AccessError::HashingFailed)?;
        Ok(hash.to_string())
    }

    /// Verify password against hash.
    ///
    /// Returns `Ok(true)` if password matches, `Ok(false)` if it doesn't.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::InvalidHash` if hash is malformed.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AccessError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|_| AccessError::InvalidHash)?;

        Ok(self.argon2()?.verify_password(password.as_bytes(), &parsed_hash).is_ok())
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "admin123";

        let hash = hasher.hash_password(password).unwrap();
        assert!(hasher.verify_password(password, &hash).unwrap());
        assert!(!hasher.verify_password("ADMIN123", &hash).unwrap());
    }

    #[test]
    fn test_different_passwords_different_hashes() {
        let hasher = PasswordHasher::new();

        let hash1 = hasher.hash_password("password").unwrap();
        let hash2 = hasher.hash_password("password").unwrap();

        // Different salts = different hashes
        assert_ne!(hash1, hash2);
        assert!(hasher.verify_password("password", &hash1).unwrap());
        assert!(hasher.verify_password("password", &hash2).unwrap());
    }

    #[test]
    fn test_invalid_hash() {
        let hasher = PasswordHasher::new();

        let result = hasher.verify_password("password", "invalid_hash");
        assert!(matches!(result, Err(AccessError::InvalidHash)));
    }

    #[test]
    fn test_secret_is_required_to_verify() {
        let keyed = PasswordHasher::with_secret("sainath123567");
        let other = PasswordHasher::with_secret("another-secret");
        let unkeyed = PasswordHasher::new();

        let hash = keyed.hash_password("admin123").unwrap();
        assert!(keyed.verify_password("admin123", &hash).unwrap());
        assert!(!other.verify_password("admin123", &hash).unwrap());
        assert!(!unkeyed.verify_password("admin123", &hash).unwrap());
    }

    #[test]
    fn test_empty_secret_means_unkeyed() {
        let hasher = PasswordHasher::with_secret("");
        let hash = hasher.hash_password("admin123").unwrap();
        assert!(PasswordHasher::new().verify_password("admin123", &hash).unwrap());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let hasher = PasswordHasher::with_secret("sainath123567");
        let debug = format!("{:?}", hasher);
        assert!(!debug.contains("sainath"));
        assert!(debug.contains("redacted"));
    }
}
