//! Configuration file handling.
//!
//! Loads user configuration from an INI file with sensible defaults.
//! Settings structs live in [`super::settings`], constants in
//! [`super::defaults`], parsing in [`super::parser`].

use std::path::Path;

use ini::Ini;
use thiserror::Error;

use super::settings::ConfigFile;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read the config file.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// A value failed to parse or is out of range.
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigFile {
    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write temp config");
        file
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = ConfigFile::load_from(Path::new("/nonexistent/skysim.ini")).unwrap();

        assert_eq!(config.simulation.tick_rate_hz, defaults::DEFAULT_TICK_RATE_HZ);
        assert_eq!(
            config.simulation.command_queue_size,
            defaults::DEFAULT_COMMAND_QUEUE_SIZE
        );
        assert!(!config.environment.wind.enabled);
        assert_eq!(config.logging.file, defaults::DEFAULT_LOG_FILE);
    }

    #[test]
    fn test_values_overlay_defaults() {
        let file = write_config(
            "[simulation]\n\
             tick_rate_hz = 20\n\
             initial_latitude = 51.4775\n\
             initial_longitude = -0.4614\n\
             max_speed = 300\n\
             \n\
             [wind]\n\
             enabled = true\n\
             direction = 270\n\
             speed = 12.5\n",
        );

        let config = ConfigFile::load_from(file.path()).unwrap();

        assert_eq!(config.simulation.tick_rate_hz, 20.0);
        assert_eq!(config.simulation.initial_latitude, 51.4775);
        assert_eq!(config.simulation.initial_longitude, -0.4614);
        assert_eq!(config.simulation.max_speed, 300.0);
        // Untouched keys keep their defaults
        assert_eq!(
            config.simulation.default_speed,
            defaults::DEFAULT_SPEED
        );

        assert!(config.environment.wind.enabled);
        assert_eq!(config.environment.wind.direction, 270.0);
        assert_eq!(config.environment.wind.speed, 12.5);
        assert!(!config.environment.humidity.enabled);
    }

    #[test]
    fn test_humidity_and_logging_sections() {
        let file = write_config(
            "[humidity]\n\
             enabled = yes\n\
             value = 65\n\
             \n\
             [logging]\n\
             directory = /var/log/skysim\n\
             file = sim.log\n",
        );

        let config = ConfigFile::load_from(file.path()).unwrap();

        assert!(config.environment.humidity.enabled);
        assert_eq!(config.environment.humidity.value, 65.0);
        assert_eq!(config.logging.directory, "/var/log/skysim");
        assert_eq!(config.logging.file, "sim.log");
    }

    #[test]
    fn test_invalid_number_names_the_key() {
        let file = write_config("[simulation]\ntick_rate_hz = fast\n");

        match ConfigFile::load_from(file.path()) {
            Err(ConfigFileError::InvalidValue { section, key, value, .. }) => {
                assert_eq!(section, "simulation");
                assert_eq!(key, "tick_rate_hz");
                assert_eq!(value, "fast");
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_bool_rejected() {
        let file = write_config("[wind]\nenabled = maybe\n");
        assert!(ConfigFile::load_from(file.path()).is_err());
    }
}
