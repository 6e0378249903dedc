//! Centralized CLI error handling.

use thiserror::Error;

/// Errors that abort the CLI with a user-facing message.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file problem.
    #[error("Configuration error: {0}")]
    Config(#[from] skysim::config::ConfigFileError),

    /// Logging setup or signal handling failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The simulator could not be constructed or failed unexpectedly.
    #[error("Simulator error: {0}")]
    Simulator(#[from] skysim::simulator::SimulatorError),
}
