// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Beacon commands
//!
//! Every command is asynchronous: the response only confirms that it was
//! queued. Use [`Client::wait_for_task`] with the returned task id to get
//! its output.

use std::path::Path;

use csrest_api::{
    AsyncCommandResponse, DownloadRequest, EmptyRequest, PowerShellRequest, ScreenshotRequest,
    ShellRequest, UploadRequest,
};
use tokio_util::sync::CancellationToken;

use crate::beacons::beacon_path;
use crate::client::Client;
use crate::error::Result;
use crate::files::encode_file;
use crate::transport::Request;

impl Client {
    /// Run `command` through `cmd.exe /c` in a spawned process.
    pub async fn execute_shell(
        &self,
        bid: &str,
        command: &str,
        cancel: &CancellationToken,
    ) -> Result<AsyncCommandResponse> {
        let body = ShellRequest {
            command: command.to_string(),
        };
        let request = Request::post(beacon_path(bid, "/spawn/command/shell")).json(&body);
        self.execute_required(request, cancel).await
    }

    /// Run a PowerShell command or script in a spawned process.
    pub async fn execute_powershell(
        &self,
        bid: &str,
        command: &str,
        cancel: &CancellationToken,
    ) -> Result<AsyncCommandResponse> {
        let body = PowerShellRequest {
            commandlet: command.to_string(),
            arguments: None,
        };
        let request = Request::post(beacon_path(bid, "/spawn/powershell")).json(&body);
        self.execute_required(request, cancel).await
    }

    /// Upload a local file into the beacon's working directory.
    ///
    /// The file is read once, before the first attempt; a read failure is
    /// never retried.
    pub async fn upload(
        &self,
        bid: &str,
        local_path: impl AsRef<Path>,
        cancel: &CancellationToken,
    ) -> Result<AsyncCommandResponse> {
        let encoded = encode_file(local_path).await?;
        tracing::debug!(
            bid,
            file = %encoded.name,
            encoded_len = encoded.content_b64.len(),
            "uploading file"
        );
        let body = UploadRequest::single(&encoded.name, encoded.content_b64);
        let request = Request::post(beacon_path(bid, "/execute/upload")).json(&body);
        self.execute_required(request, cancel).await
    }

    /// Download a file from the beacon host to the team server.
    pub async fn download(
        &self,
        bid: &str,
        remote_path: &str,
        cancel: &CancellationToken,
    ) -> Result<AsyncCommandResponse> {
        let body = DownloadRequest {
            path: remote_path.to_string(),
        };
        let request = Request::post(beacon_path(bid, "/execute/download")).json(&body);
        self.execute_required(request, cancel).await
    }

    /// Take a screenshot by injecting into process `pid` (0 lets the
    /// beacon pick one).
    pub async fn screenshot(
        &self,
        bid: &str,
        pid: u32,
        arch: &str,
        cancel: &CancellationToken,
    ) -> Result<AsyncCommandResponse> {
        let body = ScreenshotRequest {
            pid,
            arch: arch.to_string(),
        };
        let request = Request::post(beacon_path(bid, "/inject/screenshot")).json(&body);
        self.execute_required(request, cancel).await
    }

    /// Take a screenshot from a freshly spawned process.
    pub async fn screenshot_spawn(
        &self,
        bid: &str,
        cancel: &CancellationToken,
    ) -> Result<AsyncCommandResponse> {
        let request = Request::post(beacon_path(bid, "/spawn/screenshot")).json(&EmptyRequest {});
        self.execute_required(request, cancel).await
    }
}
