//! # Shelter Records
//!
//! A small interactive tool for a pet shelter: register animals with an
//! adoption fee and look the fee up again by name. Records live in memory
//! for the duration of a session only.
//!
//! ## Example
//!
//! ```
//! use shelter_records::core::RecordStore;
//!
//! let mut store = RecordStore::new();
//! store.add("Buddy", 50.0)?;
//! assert_eq!(store.lookup("Buddy")?, 50.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod shell;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging on stderr; stdout carries the dialogue
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
