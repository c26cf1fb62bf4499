#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use shelter_records::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Initialize configuration
    let config = Config::from_args(&args)?;

    // Setup logging based on debug flag
    setup_logging(config.debug)?;

    cli::run_session(&config)
}
