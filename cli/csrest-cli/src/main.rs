// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! csrest - command-line client for the Cobalt Strike REST API

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use csrest_client::{CancellationToken, Client};
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;

use commands::Session;
use config::{Overrides, Profile};

/// Log filter enabled by `--verbose` when RUST_LOG is unset
const VERBOSE_FILTER: &str = "csrest=debug,csrest_client=debug";

#[derive(Parser)]
#[command(
    name = "csrest",
    version,
    about = "Cobalt Strike REST API client",
    long_about = "Queue beacon commands on a Cobalt Strike team server and collect their output"
)]
struct Cli {
    /// Team server host
    #[arg(short = 'H', long, global = true, env = "CSREST_HOST")]
    host: Option<String>,

    /// REST API port
    #[arg(short = 'P', long, global = true, env = "CSREST_PORT")]
    port: Option<u16>,

    /// Operator username
    #[arg(short, long, global = true, env = "CSREST_USER")]
    user: Option<String>,

    /// Operator password (prompted for when not set)
    #[arg(long, global = true, env = "CSREST_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Skip TLS certificate verification
    #[arg(short = 'k', long, global = true)]
    insecure: bool,

    /// Output as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List beacons
    Beacons,

    /// Show one beacon
    Beacon(commands::beacon::GetArgs),

    /// Run a shell command on a beacon
    Shell(commands::exec::ShellArgs),

    /// Run a PowerShell command on a beacon
    #[command(alias = "ps")]
    Powershell(commands::exec::PowerShellArgs),

    /// Upload a local file to a beacon
    Upload(commands::exec::UploadArgs),

    /// Download a file from a beacon
    Download(commands::exec::DownloadArgs),

    /// Show the beacon's user
    Getuid(commands::exec::GetUidArgs),

    /// List tasks
    Tasks(commands::task::ListArgs),

    /// Show one task and its output
    Task(commands::task::GetArgs),

    /// Wait for a task to finish
    Wait(commands::task::WaitArgs),
}

impl Cli {
    /// Resolve settings, build the client and log in.
    async fn open_session(&mut self, cancel: CancellationToken) -> Result<Session> {
        let profile = Profile::load()?;
        let overrides = Overrides {
            host: self.host.take(),
            port: self.port,
            user: self.user.take(),
            password: self.password.take().map(SecretString::from),
            insecure: self.insecure,
        };
        let settings = config::resolve(profile, overrides)?;

        let password = match settings.password {
            Some(password) => password,
            None => {
                let prompt = format!(
                    "Password for {}@{}: ",
                    settings.username, settings.connection.host
                );
                SecretString::from(
                    rpassword::prompt_password(prompt).context("Failed to read password")?,
                )
            }
        };

        let client = Client::from_config(&settings.connection)?;
        tracing::debug!(base_url = client.base_url(), "connecting");
        client
            .login(&settings.username, &password, None, &cancel)
            .await
            .with_context(|| format!("Login to {} failed", client.base_url()))?;

        Ok(Session {
            client,
            cancel,
            use_json: self.json,
        })
    }
}

fn init_logging(verbose: bool) {
    let from_env = EnvFilter::try_from_default_env().ok();
    if !verbose && from_env.is_none() {
        return;
    }
    let filter = from_env.unwrap_or_else(|| EnvFilter::new(VERBOSE_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("interrupted, cancelling");
            on_interrupt.cancel();
        }
    });

    let session = cli.open_session(cancel).await?;

    match cli.command {
        Commands::Beacons => commands::beacon::list(&session).await,
        Commands::Beacon(args) => commands::beacon::get(args, &session).await,
        Commands::Shell(args) => commands::exec::shell(args, &session).await,
        Commands::Powershell(args) => commands::exec::powershell(args, &session).await,
        Commands::Upload(args) => commands::exec::upload(args, &session).await,
        Commands::Download(args) => commands::exec::download(args, &session).await,
        Commands::Getuid(args) => commands::exec::getuid(args, &session).await,
        Commands::Tasks(args) => commands::task::list(args, &session).await,
        Commands::Task(args) => commands::task::get(args, &session).await,
        Commands::Wait(args) => commands::task::wait(args, &session).await,
    }
}
