// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Beacon list and get commands

use anyhow::Result;
use clap::Args;
use csrest_api::Beacon;

use super::Session;
use crate::output::{format_age, print_json, table};

#[derive(Args, Clone)]
pub struct GetArgs {
    /// Beacon ID
    pub bid: String,
}

pub async fn list(session: &Session) -> Result<()> {
    let beacons = session.client.list_beacons(&session.cancel).await?;

    if session.use_json {
        print_json(&beacons)?;
        return Ok(());
    }

    let mut tbl = table::create_table(&[
        "BID", "USER", "COMPUTER", "PROCESS", "PID", "INTERNAL", "LAST", "ALIVE",
    ]);
    for b in &beacons {
        let user = if b.is_admin {
            format!("{} *", b.user)
        } else {
            b.user.clone()
        };
        tbl.add_row(vec![
            b.bid.clone(),
            user,
            b.computer.clone(),
            table::truncate(&b.process, table::MAX_TEXT_WIDTH),
            b.pid.to_string(),
            b.internal.clone(),
            format_age(&b.last_checkin_time),
            b.alive.to_string(),
        ]);
    }
    table::print_table(tbl);
    Ok(())
}

pub async fn get(args: GetArgs, session: &Session) -> Result<()> {
    let beacon = session.client.get_beacon(&args.bid, &session.cancel).await?;

    if session.use_json {
        print_json(&beacon)?;
    } else {
        print_beacon(&beacon);
    }
    Ok(())
}

fn print_beacon(b: &Beacon) {
    println!("BID:         {}", b.bid);
    if let Some(pbid) = &b.pbid {
        println!("Parent:      {}", pbid);
    }
    println!("Computer:    {}", b.computer);
    println!(
        "User:        {}{}",
        b.user,
        if b.is_admin { " (admin)" } else { "" }
    );
    if let Some(imp) = &b.impersonated {
        println!("Impersonated: {}", imp);
    }
    println!("Process:     {} ({})", b.process, b.pid);
    println!("Internal:    {}", b.internal);
    println!("External:    {}", b.external);
    if let Some(os) = &b.os {
        println!("OS:          {} {}", os, b.version.as_deref().unwrap_or(""));
    }
    if let Some(arch) = &b.beacon_arch {
        println!("Arch:        {}", arch);
    }
    println!("Listener:    {}", b.listener);
    println!(
        "Sleep:       {}s ({}% jitter)",
        b.sleep.sleep, b.sleep.jitter
    );
    println!(
        "Last:        {} ({})",
        b.last_checkin_formatted,
        b.last_checkin_time.to_rfc3339()
    );
    println!("Alive:       {}", b.alive);
    if let Some(note) = &b.note {
        println!("Note:        {}", note);
    }
}
