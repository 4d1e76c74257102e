//! CLI argument definitions using clap
//!
//! Commands:
//! - triviad serve --config <path>
//! - triviad check --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// triviad - a self-hostable trivia quiz API server
#[derive(Parser, Debug)]
#[command(name = "triviad")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the trivia API server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./triviad.json")]
        config: PathBuf,
    },

    /// Validate configuration and seed data, then exit
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./triviad.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
