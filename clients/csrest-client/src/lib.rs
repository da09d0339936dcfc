// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Cobalt Strike REST API client
//!
//! A [`Client`] talks to one team server. Every call goes through the same
//! pipeline:
//!
//! - the transport executor performs one HTTP exchange and classifies any
//!   failure as an [`ApiError`] (retryable or not),
//! - the retry coordinator repeats retryable failures a bounded number of
//!   times with a fixed delay,
//! - [`Client::wait_for_task`] polls a task on a fixed interval until it
//!   reaches a terminal status.
//!
//! Every call takes a [`CancellationToken`]. Cancelling it aborts in-flight
//! requests, retry delays and poll waits, and the call returns
//! [`Error::Cancelled`].
//!
//! ```no_run
//! use std::time::Duration;
//! use csrest_client::{CancellationToken, Client};
//! use secrecy::SecretString;
//!
//! # async fn example() -> csrest_client::Result<()> {
//! let client = Client::new("teamserver.example.com", 50443)?;
//! let cancel = CancellationToken::new();
//! let password = SecretString::from("hunter2".to_string());
//!
//! client.login("operator", &password, None, &cancel).await?;
//! let queued = client.execute_shell("12345", "whoami", &cancel).await?;
//! if let Some(task_id) = queued.task_id {
//!     let task = client
//!         .wait_for_task(&task_id, Duration::from_secs(60), &cancel)
//!         .await?;
//!     println!("{}", task.status());
//! }
//! # Ok(())
//! # }
//! ```

mod auth;
mod beacons;
mod client;
mod commands;
pub mod config;
pub mod error;
mod files;
mod poll;
mod retry;
mod tasks;
mod tls;
mod transport;

pub use client::Client;
pub use config::{ClientConfig, PollPolicy, RetryPolicy};
pub use error::{ApiError, Error, FailureKind, Result, is_retryable_status};
pub use files::{EncodedFile, encode_file};
pub use tls::install_crypto_provider;
pub use transport::Request;

pub use tokio_util::sync::CancellationToken;

/// Re-export of the wire types
pub use csrest_api as types;
