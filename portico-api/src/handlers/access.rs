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

//! Login and profile handlers.
//!
//! Both always answer `200`: a denial is a message, not a status code.
//! Query strings are read as raw pairs; the first value of a repeated key
//! wins. A query string that fails to parse carries no parameters.

use axum::{
    extract::{Query, State},
    Json,
};
use portico_access::{
    decide_login, decide_profile, LoginOutcome, LoginQuery, MessageResponse, ProfileOutcome,
    ProfileQuery,
};
use tracing::{debug, error, info, warn};

use crate::server::AppState;

/// Login check.
///
/// GET|POST /login?username=...&password=...
/// Returns: { "response": "Login Successful" | "Invalid Credentials" }
///
/// A verifier failure is logged and answered as `Invalid Credentials`.
pub async fn login(
    State(state): State<AppState>,
    pairs: Option<Query<Vec<(String, String)>>>,
) -> Json<MessageResponse> {
    let query = pairs.map(|Query(p)| LoginQuery::from_pairs(p)).unwrap_or_default();

    let outcome = match decide_login(state.verifier.as_ref(), &query).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Credential verification failed: {}", e);
            LoginOutcome::InvalidCredentials
        }
    };

    let username = query.username.as_deref().unwrap_or_default();
    match outcome {
        LoginOutcome::Success => info!(username, "Login successful"),
        LoginOutcome::InvalidCredentials => warn!(username, "Login rejected"),
    }
    metrics::counter!("login_attempts_total", "outcome" => outcome.label()).increment(1);

    Json(outcome.into())
}

/// Profile check.
///
/// GET|POST /profile?username=...&login_status=true
/// Returns: { "response": "Welcome to your profile page" | "Please login to access your profile" }
pub async fn profile(pairs: Option<Query<Vec<(String, String)>>>) -> Json<MessageResponse> {
    let query = pairs.map(|Query(p)| ProfileQuery::from_pairs(p)).unwrap_or_default();

    let outcome = decide_profile(&query);
    if outcome == ProfileOutcome::LoginRequired {
        debug!(username = ?query.username, "Profile access requires login");
    }

    Json(outcome.into())
}
