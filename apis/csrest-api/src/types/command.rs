// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Beacon command requests and the asynchronous command response

use serde::{Deserialize, Serialize};

use super::bof::FileMap;

/// Response returned by every asynchronous beacon command
///
/// The command is only queued when this comes back; its output is
/// retrieved later through the task identified by `task_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AsyncCommandResponse {
    pub name: String,
    pub status: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

/// Body of `spawn/command/shell`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShellRequest {
    pub command: String,
}

/// Body of `spawn/powershell`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PowerShellRequest {
    /// Full PowerShell command or script
    pub commandlet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
}

/// Body of `execute/upload`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadRequest {
    /// `@files/<name>` reference into `files`
    pub file: String,
    #[serde(default, skip_serializing_if = "FileMap::is_empty")]
    pub files: FileMap,
}

impl UploadRequest {
    /// Build an upload of a single file already base64 encoded.
    pub fn single(file_name: &str, content_b64: String) -> Self {
        Self {
            file: format!("@files/{}", file_name),
            files: FileMap::from([(file_name.to_string(), content_b64)]),
        }
    }
}

/// Body of `execute/download`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Path on the beacon host
    pub path: String,
}

/// Body of `inject/screenshot`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScreenshotRequest {
    /// Process to inject into (0 lets the beacon choose)
    pub pid: u32,
    /// "x86" or "x64"
    pub arch: String,
}

/// Empty JSON object for commands that take no arguments
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmptyRequest {}
