//! Submission and query interface to the simulation actor.
//!
//! [`SimulatorHandle`] is the public face of the actor: it is cheap to
//! clone and can be shared across tasks. All communication goes through
//! channels, so callers never touch the aircraft state directly.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::error::SendTimeoutError;
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::model::{AircraftState, Command};
use crate::pubsub::StatePublisher;
use crate::simulator::SimulatorError;

/// A state query in flight.
///
/// Carries a one-shot reply sender so the actor's response is non-blocking:
/// the actor sends the snapshot and moves on regardless of whether the
/// caller is still waiting.
pub(crate) struct StateRequest {
    pub reply: oneshot::Sender<AircraftState>,
}

/// Handle for submitting commands and querying state.
#[derive(Clone)]
pub struct SimulatorHandle {
    pub(crate) command_tx: mpsc::Sender<Command>,
    pub(crate) state_tx: mpsc::Sender<StateRequest>,
    pub(crate) publisher: Arc<StatePublisher>,
    pub(crate) submit_timeout: Duration,
    pub(crate) state_query_timeout: Duration,
}

impl SimulatorHandle {
    /// Enqueue a command for the actor.
    ///
    /// Waits up to the configured submit timeout for queue capacity, then
    /// fails with [`SimulatorError::QueueFull`]. The wait never blocks the
    /// actor's tick progress; commands already queued are consumed in FIFO
    /// order, one per loop iteration.
    ///
    /// No semantic validation happens here - see [`crate::validation`].
    pub async fn submit_command(
        &self,
        cancellation: &CancellationToken,
        command: Command,
    ) -> Result<(), SimulatorError> {
        let command_id = command.id.clone();
        tokio::select! {
            result = self.command_tx.send_timeout(command, self.submit_timeout) => match result {
                Ok(()) => {
                    debug!(command_id = %command_id, "Command queued");
                    Ok(())
                }
                Err(SendTimeoutError::Timeout(_)) => Err(SimulatorError::QueueFull),
                Err(SendTimeoutError::Closed(_)) => Err(SimulatorError::Cancelled),
            },
            _ = cancellation.cancelled() => Err(SimulatorError::Cancelled),
        }
    }

    /// Fetch the current aircraft state.
    ///
    /// Read-your-writes: the reply reflects every tick and command the
    /// actor serviced before picking up this request. Fails with
    /// [`SimulatorError::Timeout`] if the actor does not answer within the
    /// configured query timeout.
    pub async fn get_state(
        &self,
        cancellation: &CancellationToken,
    ) -> Result<AircraftState, SimulatorError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        let query = async {
            self.state_tx
                .send(StateRequest { reply: reply_tx })
                .await
                .map_err(|_| SimulatorError::Cancelled)?;
            reply_rx.await.map_err(|_| SimulatorError::Cancelled)
        };

        tokio::select! {
            result = tokio::time::timeout(self.state_query_timeout, query) => match result {
                Ok(reply) => reply,
                Err(_) => Err(SimulatorError::Timeout),
            },
            _ = cancellation.cancelled() => Err(SimulatorError::Cancelled),
        }
    }

    /// The broadcast registry for snapshot subscriptions.
    ///
    /// Subscribers are created by callers, not by the actor.
    pub fn publisher(&self) -> Arc<StatePublisher> {
        Arc::clone(&self.publisher)
    }
}
