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

//! Fixed-message pages. They ignore their input entirely.

use axum::Json;
use portico_access::MessageResponse;

/// Home page message.
pub const HOME_MESSAGE: &str = "Hello User";
/// Dashboard message.
pub const DASHBOARD_MESSAGE: &str = "You are in dashboard";
/// Logout message.
pub const LOGOUT_MESSAGE: &str = "successfully logged out";

/// GET /
pub async fn home() -> Json<MessageResponse> {
    Json(MessageResponse::new(HOME_MESSAGE))
}

/// GET|POST /dashboard
pub async fn dashboard() -> Json<MessageResponse> {
    Json(MessageResponse::new(DASHBOARD_MESSAGE))
}

/// GET|POST /logout
///
/// There is no server-side session to end; the caller drops its own
/// `login_status` flag.
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse::new(LOGOUT_MESSAGE))
}
