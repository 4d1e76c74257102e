//! Server configuration file loading.
//!
//! `triviad.json` is a JSON document:
//!
//! ```json
//! {
//!   "http": {"host": "0.0.0.0", "port": 5000, "cors_origins": []},
//!   "data": "./trivia_seed.json"
//! }
//! ```
//!
//! Every field is optional; a missing file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::api::HttpServerConfig;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level server configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    /// HTTP bind and CORS settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Optional seed data file loaded into the store at startup
    #[serde(default)]
    pub data: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration, falling back to defaults when the file does
    /// not exist. A file that exists but does not parse is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
