// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Authentication

use csrest_api::{AuthDto, LoginRequest};
use secrecy::{ExposeSecret, SecretString};
use tokio_util::sync::CancellationToken;

use crate::client::Client;
use crate::error::Result;
use crate::transport::Request;

impl Client {
    /// Log in and store the returned access token for later calls.
    ///
    /// The login request itself never carries a bearer token, even when
    /// one is already set.
    pub async fn login(
        &self,
        username: &str,
        password: &SecretString,
        duration_ms: Option<u64>,
        cancel: &CancellationToken,
    ) -> Result<AuthDto> {
        let body = LoginRequest {
            username,
            password: password.expose_secret(),
            duration_ms,
        };
        let request = Request::post("/api/auth/login")
            .json(&body)
            .unauthenticated();

        let auth: AuthDto = self.execute_required(request, cancel).await?;
        self.set_token(SecretString::from(auth.access_token.clone()));

        tracing::info!(
            username,
            expires_in = auth.expires_in,
            "logged in to team server"
        );
        Ok(auth)
    }
}
