// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default REST API port of a team server
const DEFAULT_PORT: u16 = 50443;

/// Default per-request HTTP timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default number of retries after the first attempt
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default fixed delay between attempts (milliseconds)
const DEFAULT_RETRY_DELAY_MS: u64 = 2000;

/// Default task poll interval (milliseconds)
const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// Retry policy for a single logical request
///
/// The budget is a number of attempts, not a time budget: an overall
/// deadline belongs to the caller's cancellation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt (total attempts = `max_retries + 1`)
    pub max_retries: u32,
    /// Fixed delay before every attempt after the first
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, retry_delay: Duration) -> Self {
        Self {
            max_retries,
            retry_delay,
        }
    }

    /// A policy that makes exactly one attempt.
    pub fn no_retries() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Total number of attempts this policy allows.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

/// Task completion polling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Fixed interval between task fetches
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

/// Serializable connection settings
///
/// Every field has a default, so a config file only has to name the team
/// server host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Team server host name or address
    pub host: String,
    /// REST API port
    pub port: u16,
    /// Skip TLS certificate verification (team servers commonly use
    /// self-signed certificates)
    pub insecure: bool,
    /// Per-request HTTP timeout in seconds
    pub request_timeout_secs: u64,
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Delay between attempts in milliseconds
    pub retry_delay_ms: u64,
    /// Task poll interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_PORT,
            insecure: false,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl ClientConfig {
    /// Base URL of the REST API
    pub fn base_url(&self) -> String {
        format!("https://{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, Duration::from_millis(self.retry_delay_ms))
    }

    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy {
            interval: Duration::from_millis(self.poll_interval_ms),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"host": "ts.example.com", "maxRetries": 5}"#).unwrap();
        assert_eq!(config.base_url(), "https://ts.example.com:50443");
        assert_eq!(config.retry_policy().max_retries, 5);
        assert_eq!(config.retry_policy().retry_delay, Duration::from_secs(2));
        assert_eq!(config.poll_policy(), PollPolicy::default());
        assert!(!config.insecure);
    }

    #[test]
    fn max_attempts_counts_the_first_attempt() {
        assert_eq!(RetryPolicy::default().max_attempts(), 4);
        assert_eq!(RetryPolicy::no_retries().max_attempts(), 1);
        assert_eq!(RetryPolicy::new(u32::MAX, Duration::ZERO).max_attempts(), u32::MAX);
    }
}
