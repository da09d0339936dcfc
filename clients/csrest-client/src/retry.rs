// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Bounded retry loop with a fixed delay between attempts

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::config::RetryPolicy;
use crate::error::{ApiError, Error};

/// Run `attempt` until it succeeds, fails with a non-retryable error, the
/// policy's attempt budget runs out, or `cancel` fires.
///
/// `attempt` receives the 1-based attempt number. Attempts are strictly
/// sequential. Cancellation is observed before each attempt is started,
/// while it is in flight, after it returns, and during the delay before
/// the next one; in each case the result is [`Error::Cancelled`] rather
/// than the last failure.
pub(crate) async fn run_with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    cancel: &CancellationToken,
    mut attempt: F,
) -> Result<T, Error>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let max_attempts = policy.max_attempts();
    let mut attempt_no = 1u32;

    loop {
        // `select!` builds every branch before polling, so check first.
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            outcome = attempt(attempt_no) => outcome,
        };

        let err = match outcome {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if !err.is_retryable() {
            return Err(Error::Api(err));
        }
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        if attempt_no >= max_attempts {
            return Err(Error::RetriesExhausted {
                attempts: max_attempts,
                last: err,
            });
        }

        tracing::warn!(
            attempt = attempt_no,
            max_attempts,
            status = err.status(),
            error = %err,
            "request failed, retrying in {:?}",
            policy.retry_delay
        );

        tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            _ = tokio::time::sleep(policy.retry_delay) => {}
        }

        attempt_no += 1;
    }
}
