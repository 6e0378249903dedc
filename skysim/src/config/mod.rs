//! Application configuration.
//!
//! Settings are loaded from an INI file (default `skysim.ini`) and overlay
//! built-in defaults; a missing file simply yields the defaults. The
//! module is split the same way the values flow:
//!
//! - `settings` - pure data structs, one per `[section]`
//! - [`defaults`] - the built-in default constants
//! - `parser` - INI → settings conversion and value validation
//! - `file` - file loading and [`ConfigFileError`]

pub mod defaults;

mod file;
mod parser;
mod settings;

pub use defaults::*;
pub use file::ConfigFileError;
pub use settings::{
    ConfigFile, EnvironmentSettings, HumiditySettings, LoggingSettings, SimulationSettings,
    WindSettings,
};
