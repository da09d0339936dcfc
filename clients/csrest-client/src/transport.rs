// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Single-attempt request execution
//!
//! [`Client::execute_once`] performs exactly one HTTP exchange and turns
//! every way it can fail into a classified [`ApiError`]. It never retries;
//! that is the job of [`crate::retry`].

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Method, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::Client;
use crate::error::{ApiError, FailureKind};

/// Body of an outbound request
///
/// The payload is serialized when the request is described, and a
/// serialization failure is carried along to be reported by the executor.
#[derive(Debug, Clone)]
enum RequestBody {
    Empty,
    Json(Bytes),
    Invalid(String),
}

/// Description of one logical API call
///
/// Cheap to clone; the same descriptor is reused by every attempt.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    body: RequestBody,
    require_auth: bool,
}

impl Request {
    /// A request against `path` (relative to the client's base URL) that
    /// carries the bearer token.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: RequestBody::Empty,
            require_auth: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.body = match serde_json::to_vec(body) {
            Ok(bytes) => RequestBody::Json(Bytes::from(bytes)),
            Err(e) => RequestBody::Invalid(e.to_string()),
        };
        self
    }

    /// Never attach the bearer token. Only authentication itself uses this.
    pub(crate) fn unauthenticated(mut self) -> Self {
        self.require_auth = false;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn requires_auth(&self) -> bool {
        self.require_auth
    }
}

/// Result of one successful attempt
#[derive(Debug)]
pub(crate) struct Decoded<T> {
    pub status: StatusCode,
    pub value: Option<T>,
}

impl<T> Decoded<T> {
    pub fn into_value(self) -> Result<Option<T>, ApiError> {
        Ok(self.value)
    }

    /// Turn a missing body into a contract error.
    pub fn require(self) -> Result<T, ApiError> {
        self.value.ok_or_else(|| {
            ApiError::new(
                FailureKind::EmptyBody,
                self.status.as_u16(),
                format!("HTTP {}: empty response body", self.status.as_u16()),
            )
        })
    }
}

impl Client {
    /// Perform one attempt of `request`.
    ///
    /// A 2xx response with an empty body yields `value: None`.
    pub(crate) async fn execute_once<T: DeserializeOwned>(
        &self,
        request: &Request,
    ) -> Result<Decoded<T>, ApiError> {
        let body = match &request.body {
            RequestBody::Empty => None,
            RequestBody::Json(bytes) => Some(bytes.clone()),
            RequestBody::Invalid(msg) => {
                return Err(ApiError::new(
                    FailureKind::Serialize,
                    0,
                    format!("failed to marshal request: {}", msg),
                ));
            }
        };

        let url = format!("{}{}", self.base_url(), request.path);
        let mut builder = self.http().request(request.method.clone(), url.as_str());

        if let Some(body) = body {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        if request.require_auth
            && let Some(value) = self.bearer_header()?
        {
            builder = builder.header(AUTHORIZATION, value);
        }

        let outbound = builder.build().map_err(|e| {
            ApiError::new(
                FailureKind::Build,
                0,
                format!("failed to create request: {}", e),
            )
        })?;

        let response = self.http().execute(outbound).await.map_err(|e| {
            let kind = if e.is_timeout() {
                FailureKind::Timeout
            } else {
                FailureKind::Transport
            };
            ApiError::new(kind, 0, format!("request failed: {}", e))
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            ApiError::new(
                FailureKind::ReadBody,
                status.as_u16(),
                format!("failed to read response: {}", e),
            )
        })?;

        if !status.is_success() {
            return Err(status_error(status, &bytes));
        }

        let value = decode_body(status, &bytes)?;
        Ok(Decoded { status, value })
    }

    /// `Authorization` header for the current token, if one is set.
    fn bearer_header(&self) -> Result<Option<HeaderValue>, ApiError> {
        let guard = self.token_guard();
        let Some(token) = guard.as_ref() else {
            return Ok(None);
        };
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| {
                ApiError::new(
                    FailureKind::Build,
                    0,
                    "failed to create request: access token is not a valid header value",
                )
            })?;
        value.set_sensitive(true);
        Ok(Some(value))
    }
}

/// Classify a non-2xx response.
fn status_error(status: StatusCode, body: &[u8]) -> ApiError {
    let message = if body.is_empty() {
        format!(
            "HTTP {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        )
    } else {
        String::from_utf8_lossy(body).into_owned()
    };
    ApiError::new(FailureKind::Status, status.as_u16(), message)
}

fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<Option<T>, ApiError> {
    if body.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(body).map(Some).map_err(|e| {
        ApiError::new(
            FailureKind::Decode,
            status.as_u16(),
            format!("failed to unmarshal response: {}", e),
        )
    })
}
