//! CLI error types.

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::SeedError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("seed error: {0}")]
    Seed(#[from] SeedError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
