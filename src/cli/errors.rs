//! CLI errors.

use thiserror::Error;

use crate::server::ConfigError;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Failures surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Seeding the starter credentials failed.
    #[error("Bootstrap failed: {0}")]
    Bootstrap(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_passes_through() {
        let err = CliError::from(ConfigError::Invalid("port must be > 0".to_string()));
        assert_eq!(err.to_string(), "Invalid config: port must be > 0");
    }
}
