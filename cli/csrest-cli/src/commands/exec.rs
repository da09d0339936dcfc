// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Beacon command execution
//!
//! Every command is queued on the team server and returns immediately with
//! a task ID. With `--wait` the task is polled until it finishes and its
//! output is printed.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use csrest_api::AsyncCommandResponse;

use super::Session;
use crate::output::print_json;

/// Options shared by every command that queues a task
#[derive(Args, Clone)]
pub struct WaitOpts {
    /// Wait for the task to finish and print its output
    #[arg(short, long)]
    pub wait: bool,

    /// Timeout in seconds when waiting
    #[arg(long, default_value = "300")]
    pub timeout: u64,
}

#[derive(Args, Clone)]
pub struct ShellArgs {
    /// Beacon ID
    pub bid: String,

    /// Command line passed to cmd.exe
    pub command: String,

    #[command(flatten)]
    pub wait: WaitOpts,
}

#[derive(Args, Clone)]
pub struct PowerShellArgs {
    /// Beacon ID
    pub bid: String,

    /// PowerShell command or script
    pub command: String,

    #[command(flatten)]
    pub wait: WaitOpts,
}

#[derive(Args, Clone)]
pub struct UploadArgs {
    /// Beacon ID
    pub bid: String,

    /// Local file to upload into the beacon's working directory
    pub file: PathBuf,

    #[command(flatten)]
    pub wait: WaitOpts,
}

#[derive(Args, Clone)]
pub struct DownloadArgs {
    /// Beacon ID
    pub bid: String,

    /// Path of the file on the beacon host
    pub path: String,

    #[command(flatten)]
    pub wait: WaitOpts,
}

#[derive(Args, Clone)]
pub struct GetUidArgs {
    /// Beacon ID
    pub bid: String,

    #[command(flatten)]
    pub wait: WaitOpts,
}

pub async fn shell(args: ShellArgs, session: &Session) -> Result<()> {
    let resp = session
        .client
        .execute_shell(&args.bid, &args.command, &session.cancel)
        .await?;
    finish(resp, &args.wait, session).await
}

pub async fn powershell(args: PowerShellArgs, session: &Session) -> Result<()> {
    let resp = session
        .client
        .execute_powershell(&args.bid, &args.command, &session.cancel)
        .await?;
    finish(resp, &args.wait, session).await
}

pub async fn upload(args: UploadArgs, session: &Session) -> Result<()> {
    let resp = session
        .client
        .upload(&args.bid, &args.file, &session.cancel)
        .await?;
    finish(resp, &args.wait, session).await
}

pub async fn download(args: DownloadArgs, session: &Session) -> Result<()> {
    let resp = session
        .client
        .download(&args.bid, &args.path, &session.cancel)
        .await?;
    finish(resp, &args.wait, session).await
}

pub async fn getuid(args: GetUidArgs, session: &Session) -> Result<()> {
    let resp = session.client.get_uid(&args.bid, &session.cancel).await?;
    finish(resp, &args.wait, session).await
}

/// Report a queued command, then optionally wait for its task.
async fn finish(resp: AsyncCommandResponse, opts: &WaitOpts, session: &Session) -> Result<()> {
    if !opts.wait {
        if session.use_json {
            print_json(&resp)?;
        } else {
            println!("{}: {}", resp.status, resp.message);
            if let Some(task_id) = &resp.task_id {
                println!("Task: {}", task_id);
            }
        }
        return Ok(());
    }

    let task_id = resp.task_id.ok_or_else(|| {
        anyhow::anyhow!(
            "Server did not return a task ID for '{}', cannot wait",
            resp.name
        )
    })?;

    let task = session
        .client
        .wait_for_task(&task_id, Duration::from_secs(opts.timeout), &session.cancel)
        .await?;
    super::task::print_detail(&task, session.use_json)
}
