// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Task list, get and wait commands

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use csrest_api::{ResultEntry, TaskDetail, TaskSummary};

use super::Session;
use crate::output::{format_age, print_json, table};

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Only list tasks issued to this beacon
    #[arg(short, long)]
    pub beacon: Option<String>,
}

#[derive(Args, Clone)]
pub struct GetArgs {
    /// Task ID
    pub task_id: String,
}

#[derive(Args, Clone)]
pub struct WaitArgs {
    /// Task ID
    pub task_id: String,

    /// Timeout in seconds
    #[arg(long, default_value = "300")]
    pub timeout: u64,
}

pub async fn list(args: ListArgs, session: &Session) -> Result<()> {
    let tasks = match &args.beacon {
        Some(bid) => {
            session
                .client
                .beacon_tasks_summary(bid, &session.cancel)
                .await?
        }
        None => session.client.list_tasks(&session.cancel).await?,
    };

    if session.use_json {
        print_json(&tasks)?;
    } else {
        print_summary_table(&tasks);
    }
    Ok(())
}

pub async fn get(args: GetArgs, session: &Session) -> Result<()> {
    let task = session
        .client
        .get_task(&args.task_id, &session.cancel)
        .await?;
    print_detail(&task, session.use_json)
}

pub async fn wait(args: WaitArgs, session: &Session) -> Result<()> {
    let task = session
        .client
        .wait_for_task(
            &args.task_id,
            Duration::from_secs(args.timeout),
            &session.cancel,
        )
        .await?;
    print_detail(&task, session.use_json)
}

fn print_summary_table(tasks: &[TaskSummary]) {
    let mut tbl = table::create_table(&["TASKID", "BID", "STATUS", "USER", "AGE", "COMMAND"]);
    for t in tasks {
        tbl.add_row(vec![
            t.task_id.clone(),
            t.bid.clone(),
            t.task_status.to_string(),
            t.user.clone(),
            format_age(&t.created),
            table::truncate(&t.task_command, table::MAX_TEXT_WIDTH),
        ]);
    }
    table::print_table(tbl);
}

pub fn print_detail(task: &TaskDetail, use_json: bool) -> Result<()> {
    if use_json {
        return print_json(task);
    }

    let s = &task.summary;
    println!("Task:     {}", s.task_id);
    println!("Beacon:   {}", s.bid);
    println!("Command:  {}", s.task_command);
    println!("User:     {}", s.user);
    println!("Status:   {}", s.task_status);
    println!("Created:  {}", s.created.to_rfc3339());
    if let Some(updated) = &s.updated {
        println!("Updated:  {}", updated.to_rfc3339());
    }
    if !task.tactics.is_empty() {
        println!("Tactics:  {}", task.tactics.join(", "));
    }

    for err in &task.error {
        eprintln!("[{}] error: {}", err.time.to_rfc3339(), err.message);
    }
    for entry in &task.result {
        println!();
        println!("{}", render_entry(entry)?);
    }
    Ok(())
}

/// Plain output entries print as their text; anything else as JSON.
fn render_entry(entry: &ResultEntry) -> Result<String> {
    if entry.len() == 1
        && let Some(text) = entry.get("output").and_then(|v| v.as_str())
    {
        return Ok(text.trim_end().to_string());
    }
    Ok(serde_json::to_string_pretty(entry)?)
}
