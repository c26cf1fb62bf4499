//! Command-line argument parsing

use clap::Parser;

/// Pet Shelter records - register animals and look up their adoption fees
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "shelter")]
pub struct Args {
    /// Enable debug output (written to stderr)
    #[arg(long)]
    pub debug: bool,

    /// Do not print the welcome line
    #[arg(long)]
    pub no_banner: bool,

    /// Read answers without printing prompt texts
    #[arg(long)]
    pub quiet_prompts: bool,

    /// Text of the main action prompt
    #[arg(long, value_name = "TEXT")]
    pub action_prompt: Option<String>,

    /// Text of the name prompt when adding an animal
    #[arg(long, value_name = "TEXT")]
    pub name_prompt: Option<String>,

    /// Text of the adoption fee prompt
    #[arg(long, value_name = "TEXT")]
    pub fee_prompt: Option<String>,

    /// Text of the name prompt when looking up a fee
    #[arg(long, value_name = "TEXT")]
    pub lookup_prompt: Option<String>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
