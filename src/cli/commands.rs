//! Session entry point for the CLI

use crate::{config::Config, core::RecordStore, shell::Session};
use anyhow::Context;
use std::io;
use tracing::{info, instrument};

/// Run an interactive session on the process's standard input and output
#[instrument(skip(config))]
pub fn run_session(config: &Config) -> anyhow::Result<()> {
    info!("Starting shelter records session");

    let mut store = RecordStore::new();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    Session::new(config, &mut store, stdin, stdout)
        .run()
        .context("Unexpected error, shelter session aborted")?;

    info!("Session finished, discarding {} record(s)", store.len());
    Ok(())
}
