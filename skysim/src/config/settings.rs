//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file. These
//! are pure data types with no parsing or serialization logic.

use super::defaults;

/// Complete application configuration loaded from the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    /// Simulation engine settings.
    pub simulation: SimulationSettings,
    /// Environmental effect settings.
    pub environment: EnvironmentSettings,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Simulation engine configuration (`[simulation]`).
#[derive(Debug, Clone)]
pub struct SimulationSettings {
    /// Tick rate in Hz.
    pub tick_rate_hz: f64,
    /// Command intake queue capacity.
    pub command_queue_size: usize,
    /// Initial latitude in degrees.
    pub initial_latitude: f64,
    /// Initial longitude in degrees.
    pub initial_longitude: f64,
    /// Initial altitude in meters MSL.
    pub initial_altitude: f64,
    /// Initial ground speed in m/s.
    pub initial_ground_speed: f64,
    /// Initial vertical speed in m/s.
    pub initial_vertical_speed: f64,
    /// Initial heading in degrees.
    pub initial_heading: f64,
    /// Cruise speed used when a command does not specify one, in m/s.
    pub default_speed: f64,
    /// Ground speed ceiling in m/s.
    pub max_speed: f64,
    /// Maximum climb rate in m/s.
    pub max_climb_rate: f64,
    /// Maximum descent rate in m/s.
    pub max_descent_rate: f64,
    /// Waypoint-reached threshold in meters.
    pub position_tolerance: f64,
    /// Turn rate limit in degrees per second.
    pub heading_change_rate: f64,
    /// Acceleration limit in m/s².
    pub speed_change_rate: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            tick_rate_hz: defaults::DEFAULT_TICK_RATE_HZ,
            command_queue_size: defaults::DEFAULT_COMMAND_QUEUE_SIZE,
            initial_latitude: defaults::DEFAULT_INITIAL_LATITUDE,
            initial_longitude: defaults::DEFAULT_INITIAL_LONGITUDE,
            initial_altitude: defaults::DEFAULT_INITIAL_ALTITUDE,
            initial_ground_speed: 0.0,
            initial_vertical_speed: 0.0,
            initial_heading: 0.0,
            default_speed: defaults::DEFAULT_SPEED,
            max_speed: defaults::DEFAULT_MAX_SPEED,
            max_climb_rate: defaults::DEFAULT_MAX_CLIMB_RATE,
            max_descent_rate: defaults::DEFAULT_MAX_DESCENT_RATE,
            position_tolerance: defaults::DEFAULT_POSITION_TOLERANCE,
            heading_change_rate: defaults::DEFAULT_HEADING_CHANGE_RATE,
            speed_change_rate: defaults::DEFAULT_SPEED_CHANGE_RATE,
        }
    }
}

/// Environmental effect configuration (`[wind]` and `[humidity]`).
#[derive(Debug, Clone, Default)]
pub struct EnvironmentSettings {
    /// Wind settings.
    pub wind: WindSettings,
    /// Humidity settings.
    pub humidity: HumiditySettings,
}

/// Wind configuration (`[wind]`).
#[derive(Debug, Clone, Default)]
pub struct WindSettings {
    /// Whether wind affects motion.
    pub enabled: bool,
    /// Direction the wind comes from, in degrees.
    pub direction: f64,
    /// Wind speed in m/s.
    pub speed: f64,
}

/// Humidity configuration (`[humidity]`).
///
/// Reported in snapshots only; has no effect on motion.
#[derive(Debug, Clone, Default)]
pub struct HumiditySettings {
    /// Whether humidity is reported.
    pub enabled: bool,
    /// Relative humidity in percent (0-100).
    pub value: f64,
}

/// Logging configuration (`[logging]`).
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Directory for log files.
    pub directory: String,
    /// Log file name.
    pub file: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: defaults::DEFAULT_LOG_DIR.to_string(),
            file: defaults::DEFAULT_LOG_FILE.to_string(),
        }
    }
}
