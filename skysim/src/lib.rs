//! SkySim - Real-time single-aircraft flight simulation backend
//!
//! This library provides the core of a flight simulator service: a simulation
//! actor that advances a kinematic flight model at a fixed tick rate, a
//! bounded command submission path, and a multi-subscriber state fan-out.
//!
//! # High-Level API
//!
//! ```ignore
//! use skysim::simulator::{SimulationConfig, Simulator};
//! use tokio_util::sync::CancellationToken;
//!
//! let (simulator, handle) = Simulator::new(SimulationConfig::default(), None)?;
//!
//! let shutdown = CancellationToken::new();
//! tokio::spawn(simulator.run(shutdown.clone()));
//!
//! // Submit a command and query state through the handle
//! handle.submit_command(&shutdown, command).await?;
//! let state = handle.get_state(&shutdown).await?;
//!
//! // Stream snapshots
//! let mut rx = handle.publisher().subscribe("console");
//! while let Some(snapshot) = rx.recv().await {
//!     println!("{:.4}, {:.4}", snapshot.position.latitude, snapshot.position.longitude);
//! }
//! ```
//!
//! Transport concerns (HTTP decoding, SSE framing) live outside this crate;
//! the library exposes only the command/state/subscription surface above.

pub mod config;
pub mod environment;
pub mod geo;
pub mod logging;
pub mod model;
pub mod pubsub;
pub mod simulator;
pub mod validation;

/// Version of the SkySim library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
