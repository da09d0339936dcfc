// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Task queries

use csrest_api::{TaskDetail, TaskSummary};
use tokio_util::sync::CancellationToken;

use crate::beacons::beacon_path;
use crate::client::Client;
use crate::error::Result;
use crate::transport::Request;

impl Client {
    /// Fetch one snapshot of a task, including its output.
    pub async fn get_task(&self, task_id: &str, cancel: &CancellationToken) -> Result<TaskDetail> {
        let path = format!("/api/v1/tasks/{}", urlencoding::encode(task_id));
        self.execute_required(Request::get(path), cancel).await
    }

    pub async fn list_tasks(&self, cancel: &CancellationToken) -> Result<Vec<TaskSummary>> {
        let tasks = self.execute(Request::get("/api/v1/tasks"), cancel).await?;
        Ok(tasks.unwrap_or_default())
    }

    pub async fn beacon_tasks_summary(
        &self,
        bid: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<TaskSummary>> {
        let tasks = self
            .execute(Request::get(beacon_path(bid, "/tasks/summary")), cancel)
            .await?;
        Ok(tasks.unwrap_or_default())
    }

    pub async fn beacon_tasks_detail(
        &self,
        bid: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<TaskDetail>> {
        let tasks = self
            .execute(Request::get(beacon_path(bid, "/tasks/detail")), cancel)
            .await?;
        Ok(tasks.unwrap_or_default())
    }
}
