// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! The API session

use std::sync::{RwLock, RwLockReadGuard};
use std::time::Duration;

use secrecy::SecretString;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::config::{ClientConfig, PollPolicy, RetryPolicy};
use crate::error::{ApiError, Error, Result};
use crate::retry::run_with_retry;
use crate::transport::{Decoded, Request};

/// User agent sent with every request
const USER_AGENT: &str = concat!("csrest/", env!("CARGO_PKG_VERSION"));

/// Client for one team server
///
/// A `Client` is meant to be shared (by reference or in an `Arc`) between
/// any number of concurrent calls; the underlying connection pool is reused
/// across all of them.
///
/// The access token is written by [`Client::login`] and read by every
/// authenticated call. Concurrent logins are not coordinated: the last one
/// to finish wins, and callers that need a particular token must serialize
/// their logins themselves.
///
/// Retry and poll policies are set through `&mut self` and therefore cannot
/// change while a call is in flight.
pub struct Client {
    base_url: String,
    http: reqwest::Client,
    token: RwLock<Option<SecretString>>,
    retry: RetryPolicy,
    poll: PollPolicy,
}

impl Client {
    /// Create a client for `https://{host}:{port}` with default settings.
    pub fn new(host: &str, port: u16) -> Result<Self> {
        Self::from_config(&ClientConfig {
            host: host.to_string(),
            port,
            ..Default::default()
        })
    }

    /// Create a client from serialized connection settings.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let http = build_http_client(config.request_timeout(), config.insecure)?;
        let mut client = Self::with_http_client(config.base_url(), http);
        client.set_retry_policy(config.retry_policy());
        client.set_poll_policy(config.poll_policy());
        Ok(client)
    }

    /// Create a client against an explicit base URL (scheme, host and port,
    /// no trailing path), with a default HTTP client.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = build_http_client(ClientConfig::default().request_timeout(), false)?;
        Ok(Self::with_http_client(base_url, http))
    }

    /// Create a client that uses a caller-built HTTP client, for custom TLS
    /// roots, proxies or timeouts.
    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http,
            token: RwLock::new(None),
            retry: RetryPolicy::default(),
            poll: PollPolicy::default(),
        }
    }

    /// Replace the HTTP client.
    pub fn set_http_client(&mut self, http: reqwest::Client) {
        self.http = http;
    }

    pub fn set_retry_policy(&mut self, policy: RetryPolicy) {
        self.retry = policy;
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    pub fn set_poll_policy(&mut self, policy: PollPolicy) {
        self.poll = policy;
    }

    pub fn poll_policy(&self) -> PollPolicy {
        self.poll
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Use an access token obtained elsewhere.
    pub fn set_token(&self, token: SecretString) {
        let mut guard = self.token.write().unwrap_or_else(|poisoned| {
            tracing::error!("Access token lock was poisoned, recovering");
            poisoned.into_inner()
        });
        *guard = Some(token);
    }

    /// Forget the access token; later calls go out unauthenticated.
    pub fn clear_token(&self) {
        let mut guard = self.token.write().unwrap_or_else(|poisoned| {
            tracing::error!("Access token lock was poisoned, recovering");
            poisoned.into_inner()
        });
        *guard = None;
    }

    pub fn has_token(&self) -> bool {
        self.token_guard().is_some()
    }

    pub(crate) fn token_guard(&self) -> RwLockReadGuard<'_, Option<SecretString>> {
        self.token.read().unwrap_or_else(|poisoned| {
            tracing::error!("Access token lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Execute `request` under the retry policy.
    ///
    /// Returns `Ok(None)` when the server answered 2xx with an empty body.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: Request,
        cancel: &CancellationToken,
    ) -> Result<Option<T>> {
        self.dispatch(&request, cancel, Decoded::into_value).await
    }

    /// Like [`Client::execute`], but an empty success body is an error.
    pub async fn execute_required<T: DeserializeOwned>(
        &self,
        request: Request,
        cancel: &CancellationToken,
    ) -> Result<T> {
        self.dispatch(&request, cancel, Decoded::require).await
    }

    async fn dispatch<T: DeserializeOwned, U>(
        &self,
        request: &Request,
        cancel: &CancellationToken,
        finish: fn(Decoded<T>) -> std::result::Result<U, ApiError>,
    ) -> Result<U> {
        run_with_retry(&self.retry, cancel, move |attempt| {
            tracing::debug!(
                method = %request.method(),
                path = request.path(),
                attempt,
                "sending request"
            );
            async move { self.execute_once(request).await.and_then(finish) }
        })
        .await
    }
}

fn build_http_client(timeout: Duration, insecure: bool) -> Result<reqwest::Client> {
    crate::tls::install_crypto_provider();
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .danger_accept_invalid_certs(insecure)
        .build()
        .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))
}
