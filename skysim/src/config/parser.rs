//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct
//! fields. Parsing starts from `ConfigFile::default()` and overlays any
//! values found in the INI.

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    if let Some(section) = ini.section(Some("simulation")) {
        let sim = &mut config.simulation;
        if let Some(v) = section.get("tick_rate_hz") {
            sim.tick_rate_hz = parse_f64("simulation", "tick_rate_hz", v)?;
        }
        if let Some(v) = section.get("command_queue_size") {
            sim.command_queue_size = parse_usize("simulation", "command_queue_size", v)?;
        }
        if let Some(v) = section.get("initial_latitude") {
            sim.initial_latitude = parse_f64("simulation", "initial_latitude", v)?;
        }
        if let Some(v) = section.get("initial_longitude") {
            sim.initial_longitude = parse_f64("simulation", "initial_longitude", v)?;
        }
        if let Some(v) = section.get("initial_altitude") {
            sim.initial_altitude = parse_f64("simulation", "initial_altitude", v)?;
        }
        if let Some(v) = section.get("initial_ground_speed") {
            sim.initial_ground_speed = parse_f64("simulation", "initial_ground_speed", v)?;
        }
        if let Some(v) = section.get("initial_vertical_speed") {
            sim.initial_vertical_speed = parse_f64("simulation", "initial_vertical_speed", v)?;
        }
        if let Some(v) = section.get("initial_heading") {
            sim.initial_heading = parse_f64("simulation", "initial_heading", v)?;
        }
        if let Some(v) = section.get("default_speed") {
            sim.default_speed = parse_f64("simulation", "default_speed", v)?;
        }
        if let Some(v) = section.get("max_speed") {
            sim.max_speed = parse_f64("simulation", "max_speed", v)?;
        }
        if let Some(v) = section.get("max_climb_rate") {
            sim.max_climb_rate = parse_f64("simulation", "max_climb_rate", v)?;
        }
        if let Some(v) = section.get("max_descent_rate") {
            sim.max_descent_rate = parse_f64("simulation", "max_descent_rate", v)?;
        }
        if let Some(v) = section.get("position_tolerance") {
            sim.position_tolerance = parse_f64("simulation", "position_tolerance", v)?;
        }
        if let Some(v) = section.get("heading_change_rate") {
            sim.heading_change_rate = parse_f64("simulation", "heading_change_rate", v)?;
        }
        if let Some(v) = section.get("speed_change_rate") {
            sim.speed_change_rate = parse_f64("simulation", "speed_change_rate", v)?;
        }
    }

    if let Some(section) = ini.section(Some("wind")) {
        let wind = &mut config.environment.wind;
        if let Some(v) = section.get("enabled") {
            wind.enabled = parse_bool("wind", "enabled", v)?;
        }
        if let Some(v) = section.get("direction") {
            wind.direction = parse_f64("wind", "direction", v)?;
        }
        if let Some(v) = section.get("speed") {
            wind.speed = parse_f64("wind", "speed", v)?;
        }
    }

    if let Some(section) = ini.section(Some("humidity")) {
        let humidity = &mut config.environment.humidity;
        if let Some(v) = section.get("enabled") {
            humidity.enabled = parse_bool("humidity", "enabled", v)?;
        }
        if let Some(v) = section.get("value") {
            humidity.value = parse_f64("humidity", "value", v)?;
        }
    }

    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = v.to_string();
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
    }

    Ok(config)
}

fn parse_f64(section: &str, key: &str, value: &str) -> Result<f64, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(section, key, value, "expected a number"))
}

fn parse_usize(section: &str, key: &str, value: &str) -> Result<usize, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(section, key, value, "expected a non-negative integer"))
}

fn parse_bool(section: &str, key: &str, value: &str) -> Result<bool, ConfigFileError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(invalid(section, key, value, "expected true or false")),
    }
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
