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

//! HTTP request handlers.
//!
//! This module provides handlers for:
//! - Fixed-message pages (home, dashboard, logout)
//! - Access checks (login, profile)
//! - Observability (Prometheus metrics)

pub mod access;
pub mod pages;
pub mod stats;

pub use access::{login, profile};
pub use pages::{dashboard, home, logout};
