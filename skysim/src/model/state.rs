//! Aircraft state snapshot types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in degrees (-90 to 90).
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180).
    pub longitude: f64,
    /// Altitude in meters MSL.
    pub altitude: f64,
}

impl Position {
    /// Create a new position.
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }
}

/// Aircraft velocity vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    /// Ground speed in m/s (non-negative).
    pub ground_speed: f64,
    /// Vertical speed in m/s (positive = climbing).
    pub vertical_speed: f64,
}

impl Velocity {
    /// Create a new velocity vector.
    pub fn new(ground_speed: f64, vertical_speed: f64) -> Self {
        Self {
            ground_speed,
            vertical_speed,
        }
    }
}

/// Complete aircraft state at a point in time.
///
/// The simulation actor owns the only mutable instance. Copies of it are
/// published to subscribers after every tick and returned by state queries,
/// so consumers always see an immutable snapshot.
///
/// # Heading
///
/// Heading is in degrees, normalized to `[0, 360)`. 0° is true north,
/// increasing clockwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// Geographic position.
    pub position: Position,
    /// Velocity vector.
    pub velocity: Velocity,
    /// True heading in degrees (0-360).
    pub heading: f64,
    /// When this snapshot was produced.
    pub timestamp: DateTime<Utc>,
    /// Descriptor of the command currently being executed, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_command: Option<CommandInfo>,
    /// Environmental conditions, present only when the environment is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentState>,
}

/// Descriptor of the currently executing command.
///
/// Attached to snapshots so downstream consumers can display progress
/// without access to the actor's internal command slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandInfo {
    /// Command type: "goto", "trajectory", "hold", or "stop".
    #[serde(rename = "type")]
    pub kind: String,
    /// Current navigation target (the GoTo target or the active waypoint).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Position>,
    /// Naive time-to-target estimate at current ground speed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta_seconds: Option<f64>,
}

/// Environmental conditions reported with the state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentState {
    /// Wind vector, if wind is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind: Option<WindVector>,
    /// Relative humidity in percent (0-100), if configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
}

/// Wind direction and speed.
///
/// Direction follows meteorological convention: the direction the wind is
/// coming *from*, in degrees (0 = from north).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindVector {
    /// Direction the wind originates from, in degrees (0-360).
    pub direction: f64,
    /// Wind speed in m/s.
    pub speed: f64,
}
