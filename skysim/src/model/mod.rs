//! Core data model for the simulation.
//!
//! These are the value types that cross component boundaries:
//!
//! - [`Position`] / [`Velocity`] - geodetic position and velocity vector
//! - [`AircraftState`] - the snapshot published to subscribers and returned
//!   by state queries
//! - [`Command`] / [`CommandKind`] - navigation commands submitted to the
//!   simulation actor
//! - [`CommandInfo`] / [`EnvironmentState`] - descriptors attached to
//!   snapshots for downstream serialization
//!
//! All types are plain values. The actor owns the only mutable
//! `AircraftState`; everything handed out is a copy.

mod command;
mod state;

pub use command::{Command, CommandKind, GoToCommand, TrajectoryCommand, Waypoint};
pub use state::{AircraftState, CommandInfo, EnvironmentState, Position, Velocity, WindVector};
