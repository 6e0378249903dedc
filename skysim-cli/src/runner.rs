//! Background snapshot logging for flight analysis.
//!
//! Subscribes to the simulator's state fan-out and logs a sample of the
//! stream at DEBUG level. Useful for tailing a flight without a transport
//! front-end attached.
//!
//! # Output Format
//!
//! Structured fields per entry:
//! - `lat`, `lon` - position in decimal degrees
//! - `hdg` - heading in degrees
//! - `gs` - ground speed in m/s
//! - `vs` - vertical speed in m/s
//! - `alt` - altitude in meters MSL
//! - `cmd` - active command type, if any

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use skysim::model::AircraftState;
use skysim::pubsub::StatePublisher;

/// Subscriber id used for the console logger.
const LOGGER_SUBSCRIBER_ID: &str = "cli-snapshot-logger";

/// Log every Nth snapshot (10Hz stream → one line per second).
const LOG_EVERY: u64 = 10;

/// Spawn a background task that logs simulation snapshots.
///
/// The logger stops when the token is cancelled or the subscription
/// closes. Snapshots the logger cannot keep up with are dropped by the
/// publisher, so it never slows the simulation down.
pub fn spawn_snapshot_logger(
    publisher: Arc<StatePublisher>,
    cancellation: CancellationToken,
) -> JoinHandle<()> {
    let mut rx = publisher.subscribe(LOGGER_SUBSCRIBER_ID);

    tokio::spawn(async move {
        let mut received: u64 = 0;

        loop {
            tokio::select! {
                _ = cancellation.cancelled() => {
                    publisher.unsubscribe(LOGGER_SUBSCRIBER_ID);
                    debug!("Snapshot logger stopped");
                    break;
                }
                snapshot = rx.recv() => match snapshot {
                    Some(state) => {
                        received += 1;
                        if received % LOG_EVERY == 1 {
                            log_snapshot(&state);
                        }
                    }
                    None => break,
                },
            }
        }
    })
}

fn log_snapshot(state: &AircraftState) {
    debug!(
        lat = format!("{:.5}", state.position.latitude),
        lon = format!("{:.5}", state.position.longitude),
        hdg = format!("{:.1}", state.heading),
        gs = format!("{:.1}", state.velocity.ground_speed),
        vs = format!("{:.1}", state.velocity.vertical_speed),
        alt = format!("{:.0}", state.position.altitude),
        cmd = state
            .active_command
            .as_ref()
            .map_or("none", |info| info.kind.as_str()),
        "Simulation snapshot"
    );
}
