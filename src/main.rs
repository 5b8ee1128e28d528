// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use podrun::config::Config;
use podrun::constants::DEADLINE_SECS;
use podrun::deadline::Deadline;
use podrun::kubernetes::connect;
use podrun::runner::Runner;

#[tokio::main]
async fn main() -> ExitCode {
    // The time budget starts with the process
    let deadline = Deadline::after(Duration::from_secs(DEADLINE_SECS));

    // Initialize tracing, keeping stdout for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(deadline).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(deadline: Deadline) -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: kubeconfig={}, namespace={}",
        config.kubeconfig.display(),
        config.namespace
    );

    // Create Kubernetes client
    let client = connect(&config).await?;
    info!("Connected to Kubernetes cluster");

    let mut stdout = std::io::stdout();
    Runner::new(client, config, deadline).run(&mut stdout).await?;

    Ok(())
}
