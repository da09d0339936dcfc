// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Task completion polling

use std::future::Future;
use std::time::Duration;

use csrest_api::TaskDetail;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::client::Client;
use crate::config::PollPolicy;
use crate::error::{Error, Result};

/// Smallest usable tick; a zero period would make `interval` panic.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Largest tick, keeping the first tick representable as an `Instant`.
const MAX_INTERVAL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

impl Client {
    /// Wait until task `task_id` reaches a terminal status and return that
    /// final snapshot.
    ///
    /// The task is fetched once per poll interval, starting one interval
    /// after the call. The deadline is only checked on a tick, so the call
    /// can run up to one interval past `timeout` before failing with
    /// [`Error::Timeout`]. A failed fetch ends the wait with that error.
    pub async fn wait_for_task(
        &self,
        task_id: &str,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<TaskDetail> {
        poll_until_terminal(task_id, &self.poll_policy(), timeout, cancel, || {
            self.get_task(task_id, cancel)
        })
        .await
    }
}

pub(crate) async fn poll_until_terminal<F, Fut>(
    task_id: &str,
    policy: &PollPolicy,
    timeout: Duration,
    cancel: &CancellationToken,
    mut fetch: F,
) -> Result<TaskDetail>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<TaskDetail>>,
{
    let period = policy.interval.clamp(MIN_INTERVAL, MAX_INTERVAL);
    let start = Instant::now();
    // A timeout too large to represent never expires.
    let deadline = start.checked_add(timeout);

    let mut ticker = tokio::time::interval_at(start + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            _ = ticker.tick() => {}
        }

        if deadline.is_some_and(|d| Instant::now() > d) {
            return Err(Error::Timeout {
                task_id: task_id.to_string(),
                timeout,
            });
        }

        let task = fetch().await?;
        tracing::debug!(
            task_id,
            status = %task.status(),
            elapsed = ?start.elapsed(),
            "polled task"
        );

        if task.status().is_terminal() {
            return Ok(task);
        }
    }
}
