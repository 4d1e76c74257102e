//! CLI module for triviad
//!
//! Provides the command-line interface:
//! - serve: load config, build the store, run the HTTP server
//! - check: validate config and seed data, print a summary, exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
