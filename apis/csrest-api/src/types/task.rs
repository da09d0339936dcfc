// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Task types
//!
//! A task is created server-side whenever a beacon command is queued. The
//! client only ever sees snapshots of it, fetched until the status becomes
//! terminal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Task lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    NotFound,
    InProgress,
    Completed,
    Failed,
    OutputReceived,
    /// Any status this client does not know about. Never terminal.
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// Whether no further transitions will happen for this task.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TaskStatus::Completed | TaskStatus::Failed | TaskStatus::OutputReceived
        )
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::NotFound => "NOT_FOUND",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Failed => "FAILED",
            TaskStatus::OutputReceived => "OUTPUT_RECEIVED",
            TaskStatus::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// Task summary as returned by the list endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub task_id: String,
    /// Beacon the task was issued to
    pub bid: String,
    /// Job ID, for long running jobs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jid: Option<u32>,
    /// Command echo
    pub task_command: String,
    /// Operator who issued the command
    pub user: String,
    pub created: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    pub task_status: TaskStatus,
}

/// A single value inside a task result entry
///
/// Result entries are open-ended key/value maps, but the values are limited
/// to scalars and arrays of scalars. Anything else (a nested object, for
/// instance) fails to decode rather than being carried along untyped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ResultValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<ResultValue>),
}

impl ResultValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ResultValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// One entry of a task's result list
pub type ResultEntry = BTreeMap<String, ResultValue>;

/// Error reported by the beacon while running a task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorMessage {
    pub message: String,
    pub time: DateTime<Utc>,
}

/// Task detail, including its output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskDetail {
    #[serde(flatten)]
    pub summary: TaskSummary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub result: Vec<ResultEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub error: Vec<ErrorMessage>,
    /// MITRE ATT&CK tactics associated with the command
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tactics: Vec<String>,
}

impl TaskDetail {
    pub fn task_id(&self) -> &str {
        &self.summary.task_id
    }

    pub fn status(&self) -> TaskStatus {
        self.summary.task_status
    }
}
