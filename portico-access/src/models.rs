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

//! Access data models.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by `/login`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginQuery {
    /// Username to check
    pub username: Option<String>,
    /// Plain text password
    pub password: Option<String>,
}

/// Query parameters accepted by `/profile`.
///
/// `login_status` is supplied by the caller on every request; the server
/// keeps no session of its own.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileQuery {
    /// Username claiming the profile
    pub username: Option<String>,
    /// Session flag, `"true"` when the caller considers itself logged in
    pub login_status: Option<String>,
}

impl LoginQuery {
    /// Build from raw query pairs. The first value of a repeated key wins.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "username" => set_first(&mut query.username, value),
                "password" => set_first(&mut query.password, value),
                _ => {}
            }
        }
        query
    }
}

impl ProfileQuery {
    /// Build from raw query pairs. The first value of a repeated key wins.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "username" => set_first(&mut query.username, value),
                "login_status" => set_first(&mut query.login_status, value),
                _ => {}
            }
        }
        query
    }
}

fn set_first(slot: &mut Option<String>, value: String) {
    if slot.is_none() {
        *slot = Some(value);
    }
}

/// Result of a login decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Username and password matched
    Success,
    /// Anything else, including missing parameters
    InvalidCredentials,
}

impl LoginOutcome {
    /// Response message for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            LoginOutcome::Success => "Login Successful",
            LoginOutcome::InvalidCredentials => "Invalid Credentials",
        }
    }

    /// Metric label for this outcome.
    pub fn label(&self) -> &'static str {
        match self {
            LoginOutcome::Success => "success",
            LoginOutcome::InvalidCredentials => "invalid",
        }
    }
}

/// Result of a profile decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileOutcome {
    /// Caller may see the profile page
    Welcome,
    /// Caller must log in first
    LoginRequired,
}

impl ProfileOutcome {
    /// Response message for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            ProfileOutcome::Welcome => "Welcome to your profile page",
            ProfileOutcome::LoginRequired => "Please login to access your profile",
        }
    }
}

/// JSON body shared by every route: `{"response": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human readable message
    pub response: String,
}

impl MessageResponse {
    /// Create a response carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            response: message.into(),
        }
    }
}

impl From<LoginOutcome> for MessageResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self::new(outcome.message())
    }
}

impl From<ProfileOutcome> for MessageResponse {
    fn from(outcome: ProfileOutcome) -> Self {
        Self::new(outcome.message())
    }
}
