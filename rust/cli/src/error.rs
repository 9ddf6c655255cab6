//! Error types for the CLI application.

use pontoon_engine::errors::GameError;
use std::fmt;

/// Custom error type for CLI operations.
///
/// Encompasses everything that can go wrong during command execution so
/// handlers can propagate with the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_the_category() {
        let e = CliError::InvalidInput("rounds must be >= 1".to_string());
        assert_eq!(e.to_string(), "Invalid input: rounds must be >= 1");
    }

    #[test]
    fn game_errors_convert_to_engine_errors() {
        let e: CliError = GameError::SplitNonPair { hand: 0 }.into();
        assert!(matches!(e, CliError::Engine(_)));
    }
}
