//! Error types for the fx-risk CLI.

use thiserror::Error;

use crate::config::ConfigError;
use crate::loader::LoadError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Trade file could not be loaded
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// One or more trades failed validation
    #[error("Validation failed with {} error(s)", .0.len())]
    Validation(Vec<String>),

    /// Trades failed pricing or conversion in strict mode
    #[error("{0} trade(s) failed pricing or conversion")]
    FailedTrades(usize),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Report serialisation error
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_counts_errors() {
        let err = CliError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "Validation failed with 2 error(s)");
    }

    #[test]
    fn test_failed_trades_display() {
        assert_eq!(
            CliError::FailedTrades(3).to_string(),
            "3 trade(s) failed pricing or conversion"
        );
    }
}
