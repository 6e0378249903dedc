//! Error types for the simulation actor.

use thiserror::Error;

/// Errors surfaced by the simulator's public contract.
///
/// Everything except `InvalidConfig` is recoverable at the caller:
/// `QueueFull` invites a retry, `Timeout` and `Cancelled` abort a single
/// operation. `InvalidConfig` is produced only at construction and is fatal
/// to startup. The actor itself never fails because of a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulatorError {
    /// The command intake queue stayed full for the whole bounded wait.
    #[error("command queue is full")]
    QueueFull,

    /// The operation's cancellation token fired, or the actor has shut down.
    #[error("operation cancelled")]
    Cancelled,

    /// The bounded wait on a state query elapsed.
    #[error("operation timeout")]
    Timeout,

    /// The simulator was constructed with unusable parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
