//! Built-in configuration defaults.

/// Default simulation tick rate in Hz.
pub const DEFAULT_TICK_RATE_HZ: f64 = 10.0;

/// Default command intake queue capacity.
pub const DEFAULT_COMMAND_QUEUE_SIZE: usize = 100;

/// Default initial latitude (Tel Aviv).
pub const DEFAULT_INITIAL_LATITUDE: f64 = 32.0853;

/// Default initial longitude (Tel Aviv).
pub const DEFAULT_INITIAL_LONGITUDE: f64 = 34.7818;

/// Default initial altitude in meters MSL.
pub const DEFAULT_INITIAL_ALTITUDE: f64 = 1000.0;

/// Default cruise speed in m/s.
pub const DEFAULT_SPEED: f64 = 100.0;

/// Default ground speed ceiling in m/s.
pub const DEFAULT_MAX_SPEED: f64 = 250.0;

/// Default maximum climb rate in m/s.
pub const DEFAULT_MAX_CLIMB_RATE: f64 = 15.0;

/// Default maximum descent rate in m/s.
pub const DEFAULT_MAX_DESCENT_RATE: f64 = 10.0;

/// Default waypoint-reached threshold in meters.
pub const DEFAULT_POSITION_TOLERANCE: f64 = 10.0;

/// Default turn rate limit in degrees per second.
pub const DEFAULT_HEADING_CHANGE_RATE: f64 = 30.0;

/// Default acceleration limit in m/s².
pub const DEFAULT_SPEED_CHANGE_RATE: f64 = 50.0;

/// Default log directory.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "skysim.log";
