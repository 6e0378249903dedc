//! Simulation engine configuration.

use std::time::Duration;

use crate::config::SimulationSettings;
use crate::model::{Position, Velocity};
use crate::simulator::SimulatorError;

/// Default bounded wait for command submission.
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default bounded wait for a state query reply.
pub const DEFAULT_STATE_QUERY_TIMEOUT: Duration = Duration::from_secs(1);

/// Configuration for the simulation actor.
///
/// Immutable after construction. The tick-rate-driven form is canonical:
/// each tick advances the model by exactly `1 / tick_rate_hz` seconds of
/// simulated time, regardless of wall-clock skew.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Tick rate in Hz (must be positive).
    pub tick_rate_hz: f64,
    /// Command intake queue capacity (must be at least 1).
    pub command_queue_size: usize,
    /// Starting position.
    pub initial_position: Position,
    /// Starting velocity.
    pub initial_velocity: Velocity,
    /// Starting heading in degrees.
    pub initial_heading: f64,
    /// Cruise speed used when a command does not specify one, in m/s.
    pub default_speed: f64,
    /// Ground speed ceiling in m/s.
    pub max_speed: f64,
    /// Maximum climb rate in m/s.
    pub max_climb_rate: f64,
    /// Maximum descent rate in m/s (positive value).
    pub max_descent_rate: f64,
    /// Great-circle distance below which a target counts as reached, in meters.
    pub position_tolerance: f64,
    /// Turn rate limit in degrees per second.
    pub heading_change_rate: f64,
    /// Acceleration limit in m/s².
    pub speed_change_rate: f64,
    /// Bounded wait before a submission fails with `QueueFull`.
    pub submit_timeout: Duration,
    /// Bounded wait before a state query fails with `Timeout`.
    pub state_query_timeout: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::from(&SimulationSettings::default())
    }
}

impl SimulationConfig {
    /// Check the configuration for values the actor cannot run with.
    ///
    /// Construction-time failures are fatal to the caller; nothing else in
    /// the simulator reports `InvalidConfig`.
    pub fn validate(&self) -> Result<(), SimulatorError> {
        if !(self.tick_rate_hz > 0.0) {
            return Err(SimulatorError::InvalidConfig(format!(
                "tick rate must be positive, got {}",
                self.tick_rate_hz
            )));
        }
        if self.command_queue_size == 0 {
            return Err(SimulatorError::InvalidConfig(
                "command queue capacity must be at least 1".to_string(),
            ));
        }
        if self.max_speed <= 0.0 {
            return Err(SimulatorError::InvalidConfig(format!(
                "max speed must be positive, got {}",
                self.max_speed
            )));
        }
        if self.max_climb_rate < 0.0 || self.max_descent_rate < 0.0 {
            return Err(SimulatorError::InvalidConfig(
                "climb and descent rates must be non-negative".to_string(),
            ));
        }
        if self.position_tolerance <= 0.0 {
            return Err(SimulatorError::InvalidConfig(format!(
                "position tolerance must be positive, got {}",
                self.position_tolerance
            )));
        }
        Ok(())
    }

    /// The wall-clock period of one tick.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate_hz)
    }

    /// The simulated time step per tick, in seconds.
    pub fn dt(&self) -> f64 {
        1.0 / self.tick_rate_hz
    }
}

impl From<&SimulationSettings> for SimulationConfig {
    fn from(settings: &SimulationSettings) -> Self {
        Self {
            tick_rate_hz: settings.tick_rate_hz,
            command_queue_size: settings.command_queue_size,
            initial_position: Position::new(
                settings.initial_latitude,
                settings.initial_longitude,
                settings.initial_altitude,
            ),
            initial_velocity: Velocity::new(
                settings.initial_ground_speed,
                settings.initial_vertical_speed,
            ),
            initial_heading: settings.initial_heading,
            default_speed: settings.default_speed,
            max_speed: settings.max_speed,
            max_climb_rate: settings.max_climb_rate,
            max_descent_rate: settings.max_descent_rate,
            position_tolerance: settings.position_tolerance,
            heading_change_rate: settings.heading_change_rate,
            speed_change_rate: settings.speed_change_rate,
            submit_timeout: DEFAULT_SUBMIT_TIMEOUT,
            state_query_timeout: DEFAULT_STATE_QUERY_TIMEOUT,
        }
    }
}
