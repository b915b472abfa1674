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

//! Access decisions for the login and profile routes.
//!
//! Every decision is computed from the request alone. Nothing is
//! remembered between calls, so repeating a request repeats its answer.

use tracing::debug;

use super::error::AccessError;
use super::models::{LoginOutcome, LoginQuery, ProfileOutcome, ProfileQuery};
use super::verifier::CredentialVerifier;

/// Literal value of `login_status` that marks a logged-in caller.
pub const LOGGED_IN: &str = "true";

/// Decide a login attempt.
///
/// Missing username or password is `InvalidCredentials` without asking
/// the verifier.
///
/// # Errors
///
/// Propagates verifier failures; callers decide how to surface them.
pub async fn decide_login(
    verifier: &dyn CredentialVerifier,
    query: &LoginQuery,
) -> Result<LoginOutcome, AccessError> {
    let (Some(username), Some(password)) = (query.username.as_deref(), query.password.as_deref())
    else {
        debug!("Login attempt without username or password");
        return Ok(LoginOutcome::InvalidCredentials);
    };

    if verifier.verify(username, password).await? {
        Ok(LoginOutcome::Success)
    } else {
        Ok(LoginOutcome::InvalidCredentials)
    }
}

/// Decide a profile request.
///
/// Welcome only if `username` is non-empty and `login_status` is exactly
/// `"true"`.
pub fn decide_profile(query: &ProfileQuery) -> ProfileOutcome {
    let has_username = query.username.as_deref().is_some_and(|u| !u.is_empty());
    let logged_in = query.login_status.as_deref() == Some(LOGGED_IN);

    if has_username && logged_in {
        ProfileOutcome::Welcome
    } else {
        ProfileOutcome::LoginRequired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PasswordHasher, StaticCredentialVerifier};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn profile(username: Option<&str>, login_status: Option<&str>) -> ProfileOutcome {
        decide_profile(&ProfileQuery {
            username: username.map(String::from),
            login_status: login_status.map(String::from),
        })
    }

    fn login(username: Option<&str>, password: Option<&str>) -> LoginQuery {
        LoginQuery {
            username: username.map(String::from),
            password: password.map(String::from),
        }
    }

    /// Counts calls and answers a fixed value.
    struct CountingVerifier {
        calls: AtomicUsize,
        answer: bool,
    }

    #[async_trait]
    impl CredentialVerifier for CountingVerifier {
        async fn verify(&self, _username: &str, _password: &str) -> Result<bool, AccessError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.answer)
        }
    }

    struct FailingVerifier;

    #[async_trait]
    impl CredentialVerifier for FailingVerifier {
        async fn verify(&self, _username: &str, _password: &str) -> Result<bool, AccessError> {
            Err(AccessError::ProviderUnavailable("down".to_string()))
        }
    }

    #[test]
    fn test_profile_welcome() {
        assert_eq!(profile(Some("sainath"), Some("true")), ProfileOutcome::Welcome);
        assert_eq!(profile(Some("admin"), Some("true")), ProfileOutcome::Welcome);
        assert_eq!(profile(Some(" "), Some("true")), ProfileOutcome::Welcome);
    }

    #[test]
    fn test_profile_login_required() {
        let cases = [
            (Some("sainath"), Some("false")),
            (Some("sainath"), Some("")),
            (Some("sainath"), Some("TRUE")),
            (Some("sainath"), Some("True")),
            (Some("sainath"), Some("1")),
            (Some("sainath"), None),
            (Some(""), Some("true")),
            (None, Some("true")),
            (Some(""), Some("")),
            (None, None),
        ];

        for (username, login_status) in cases {
            assert_eq!(
                profile(username, login_status),
                ProfileOutcome::LoginRequired,
                "username={:?} login_status={:?}",
                username,
                login_status
            );
        }
    }

    #[tokio::test]
    async fn test_login_with_configured_pair() {
        let verifier =
            StaticCredentialVerifier::new("admin", "admin123", PasswordHasher::new()).unwrap();

        let outcome = decide_login(&verifier, &login(Some("admin"), Some("admin123")))
            .await
            .unwrap();
        assert_eq!(outcome, LoginOutcome::Success);

        let outcome = decide_login(&verifier, &login(Some("admin"), Some("admin1234")))
            .await
            .unwrap();
        assert_eq!(outcome, LoginOutcome::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_missing_parameters_skip_verifier() {
        let verifier = CountingVerifier {
            calls: AtomicUsize::new(0),
            answer: true,
        };

        for query in [
            login(None, None),
            login(Some("admin"), None),
            login(None, Some("admin123")),
        ] {
            let outcome = decide_login(&verifier, &query).await.unwrap();
            assert_eq!(outcome, LoginOutcome::InvalidCredentials);
        }
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 0);

        let outcome = decide_login(&verifier, &login(Some(""), Some(""))).await.unwrap();
        assert_eq!(outcome, LoginOutcome::Success);
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_login_propagates_verifier_error() {
        let result = decide_login(&FailingVerifier, &login(Some("admin"), Some("admin123"))).await;
        assert!(matches!(result, Err(AccessError::ProviderUnavailable(_))));
    }
}
