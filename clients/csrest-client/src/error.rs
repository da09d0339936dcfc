// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for csrest-client
//!
//! A single HTTP attempt fails with an [`ApiError`], which records where the
//! failure happened and whether repeating the attempt could help. Everything
//! a caller sees is an [`Error`]: a classified API error, a cancellation, an
//! exhausted retry budget, a poll timeout, or a local failure.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Where a single request attempt failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Request body could not be serialized
    Serialize,
    /// Outbound request could not be constructed (bad URL, bad header)
    Build,
    /// Connection, DNS or TLS failure before a response arrived
    Transport,
    /// The HTTP client's own timeout fired before a response arrived
    Timeout,
    /// Response body could not be read
    ReadBody,
    /// Server answered with a status outside 2xx
    Status,
    /// Success response body did not match the expected shape
    Decode,
    /// Success response had no body where one was required
    EmptyBody,
}

impl FailureKind {
    /// Whether a failure of this kind, with this HTTP status, is worth
    /// another attempt.
    ///
    /// `Timeout` is retryable like any other transport failure. It is kept
    /// as its own kind so a caller can tell a timed-out attempt apart.
    pub fn is_retryable(self, status: u16) -> bool {
        match self {
            FailureKind::Serialize
            | FailureKind::Build
            | FailureKind::Decode
            | FailureKind::EmptyBody => false,
            FailureKind::Transport | FailureKind::Timeout | FailureKind::ReadBody => true,
            FailureKind::Status => is_retryable_status(status),
        }
    }
}

/// Server errors and rate limiting are retryable; other error statuses are
/// not.
pub fn is_retryable_status(status: u16) -> bool {
    status >= 500 || status == 429
}

/// A classified failure of one request attempt
///
/// `status` is 0 when the failure happened before any response status was
/// known. The retryable flag is derived from the kind and status alone.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    kind: FailureKind,
    status: u16,
    message: String,
    retryable: bool,
}

impl ApiError {
    pub fn new(kind: FailureKind, status: u16, message: impl Into<String>) -> Self {
        Self {
            kind,
            status,
            message: message.into(),
            retryable: kind.is_retryable(status),
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_retryable(&self) -> bool {
        self.retryable
    }
}

/// Errors returned by the client
#[derive(Error, Debug)]
pub enum Error {
    /// A request failed with an error that is not worth retrying
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The caller's cancellation token fired
    #[error("request cancelled")]
    Cancelled,

    /// Every attempt failed with a retryable error
    #[error("request failed after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last: ApiError,
    },

    /// A task did not reach a terminal status before the deadline
    #[error("timeout waiting for task {task_id} to complete after {timeout:?}")]
    Timeout { task_id: String, timeout: Duration },

    /// A local file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid client configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// The underlying classified API error, if there is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            Error::RetriesExhausted { last, .. } => Some(last),
            _ => None,
        }
    }

    /// HTTP status of the underlying API error (0 if none was received).
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(ApiError::status)
    }

    pub fn is_retryable(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_retryable)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
