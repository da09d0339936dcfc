// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Authentication types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /api/auth/login`
///
/// Borrows its credentials so the password never has to be copied out of
/// the caller's secret storage for longer than one request.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    /// Requested token lifetime in milliseconds (server default when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl fmt::Debug for LoginRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("duration_ms", &self.duration_ms)
            .finish()
    }
}

/// Response of a successful login
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthDto {
    /// Bearer token for all subsequent calls
    pub access_token: String,
    /// Token type, normally "Bearer"
    pub token_type: String,
    /// Lifetime of the token in seconds
    pub expires_in: u64,
}

impl fmt::Debug for AuthDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthDto")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
