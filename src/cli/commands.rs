//! CLI command implementations.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::api::{AppState, ResourceRegistry};
use crate::auth::{seeded_repository, AuthService};
use crate::observability::Logger;
use crate::server::{ConfigError, Environment, Server, ServerConfig};
use crate::store::seed::seeded_store;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Write a default configuration file. Refuses to clobber an existing one.
pub fn init(path: &Path) -> CliResult<()> {
    if path.exists() {
        return Err(ConfigError::Invalid(format!(
            "Config already exists: {}",
            path.display()
        ))
        .into());
    }

    let config = ServerConfig::default();
    let content = serde_json::to_string_pretty(&config)
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    fs::write(path, content)?;

    let written_to = path.display().to_string();
    Logger::info("CONFIG_WRITTEN", &[("path", written_to.as_str())]);
    Ok(())
}

/// Boot the server. A missing config file means defaults.
pub fn start(path: &Path) -> CliResult<()> {
    let config = if path.exists() {
        ServerConfig::load(path)?
    } else {
        ServerConfig::default()
    };

    let state = bootstrap_state(config.environment)?;
    let server = Server::with_config(config, state);

    let addr = server.socket_addr();
    Logger::info("SERVER_START", &[("addr", addr.as_str())]);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

/// Seeded store, seeded credentials, default resources.
fn bootstrap_state(environment: Environment) -> CliResult<Arc<AppState>> {
    let repository = seeded_repository().map_err(|e| CliError::Bootstrap(e.to_string()))?;

    Ok(Arc::new(AppState::new(
        ResourceRegistry::with_defaults(),
        Box::new(seeded_store()),
        AuthService::new(repository),
        environment,
    )))
}
