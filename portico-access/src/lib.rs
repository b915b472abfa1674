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

//! Portico Access - request access decisions.
//!
//! This crate provides the logic behind the `/login` and `/profile` routes:
//! - Login decisions against an injected credential verifier
//! - Profile decisions from caller-supplied session flags
//! - Argon2 password hashing with an optional application secret
//!
//! It has no HTTP dependencies; the API crate maps outcomes to responses.

pub mod decision;
pub mod error;
pub mod models;
pub mod password;
pub mod verifier;

pub use decision::{decide_login, decide_profile};
pub use error::AccessError;
pub use models::{LoginOutcome, LoginQuery, MessageResponse, ProfileOutcome, ProfileQuery};
pub use password::PasswordHasher;
pub use verifier::{CredentialVerifier, StaticCredentialVerifier};
