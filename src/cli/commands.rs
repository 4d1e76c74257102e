//! CLI command dispatch.

use std::path::Path;
use std::sync::Arc;

use crate::api::{AppState, HttpServer};
use crate::config::ServerConfig;
use crate::observability::{Logger, Severity};
use crate::store::{MemoryStore, SeedData, TriviaStore};

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}

/// Run a single command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config } => serve(&config),
        Command::Check { config } => check(&config),
    }
}

/// Build the store from config and enter the serving loop.
fn serve(config_path: &Path) -> CliResult<()> {
    let config = ServerConfig::load_or_default(config_path)?;
    let store = build_store(&config)?;

    let state = Arc::new(AppState::new(Arc::new(store)));
    let server = HttpServer::with_config(config.http, state);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

/// Validate config and seed data without serving.
fn check(config_path: &Path) -> CliResult<()> {
    let config = ServerConfig::load_or_default(config_path)?;
    let store = build_store(&config)?;

    let categories = store.categories().map(|c| c.len()).unwrap_or(0);
    let questions = store.question_count().unwrap_or(0);
    Logger::log(
        Severity::Info,
        "check_ok",
        &[
            ("addr", &config.http.socket_addr()),
            ("categories", &categories.to_string()),
            ("questions", &questions.to_string()),
        ],
    );
    Ok(())
}

fn build_store(config: &ServerConfig) -> CliResult<MemoryStore> {
    match &config.data {
        Some(path) => {
            let seed = SeedData::load(path)?;
            Logger::log(
                Severity::Info,
                "seed_load",
                &[
                    ("categories", &seed.categories.len().to_string()),
                    ("path", &path.display().to_string()),
                    ("questions", &seed.questions.len().to_string()),
                ],
            );
            Ok(MemoryStore::from_seed(seed))
        }
        None => Ok(MemoryStore::new()),
    }
}
