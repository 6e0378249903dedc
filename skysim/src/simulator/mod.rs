//! Aircraft simulation engine.
//!
//! The simulator follows the actor model: a single task owns all mutable
//! aircraft state and multiplexes four event sources with a `select!` loop:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Simulator                             │
//! │                                                              │
//! │  cancellation ──► return cancellation cause                  │
//! │  tick timer ────► advance flight model, publish snapshot     │
//! │  command queue ─► install new active command                 │
//! │  state request ─► reply with a snapshot (one-shot channel)   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Exactly one event is serviced per iteration. External producers interact
//! only through the [`SimulatorHandle`] returned by [`Simulator::new`] -
//! a bounded command submission with backpressure (`QueueFull` after a
//! bounded wait), a read-your-writes state query, and the snapshot
//! [`publisher`](SimulatorHandle::publisher).
//!
//! # Determinism
//!
//! Each tick integrates the nominal `1 / tick_rate_hz` seconds, not the
//! measured wall-clock delta. Timer skew is deliberately ignored: drift
//! correction is a non-goal, and fixed `dt` keeps trajectories reproducible
//! under load and in tests.
//!
//! # Components
//!
//! - [`Simulator`] - the state-owning loop and flight behaviors
//! - [`SimulatorHandle`] - the cloneable submission/query interface
//! - [`SimulationConfig`] - tick rate, kinematic limits, and bounded waits
//! - [`SimulatorError`] - the error taxonomy of the public contract

mod actor;
mod config;
mod error;
mod handle;

pub use actor::Simulator;
pub use config::{SimulationConfig, DEFAULT_STATE_QUERY_TIMEOUT, DEFAULT_SUBMIT_TIMEOUT};
pub use error::SimulatorError;
pub use handle::SimulatorHandle;
