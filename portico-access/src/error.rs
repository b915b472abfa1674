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

//! Access error types.

use thiserror::Error;

/// Errors raised while deciding access.
///
/// None of these reach the HTTP caller directly: the API layer turns a
/// failed verification into a normal denial.
#[derive(Error, Debug)]
pub enum AccessError {
    /// Configured username is empty
    #[error("Invalid username (must not be empty)")]
    InvalidUsername,

    /// Password hashing operation failed
    #[error("Password hashing failed")]
    HashingFailed,

    /// Password hash format is invalid
    #[error("Invalid password hash format")]
    InvalidHash,

    /// Credential provider could not answer
    #[error("Credential provider unavailable: {0}")]
    ProviderUnavailable(String),
}
