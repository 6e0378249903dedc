//! Environmental perturbation of aircraft motion.
//!
//! The environment is immutable after construction. It currently models a
//! constant wind (see [`WindEffect`]) and a constant relative humidity that
//! is reported in snapshots but has no kinematic effect.
//!
//! A disabled environment is represented as the absence of an
//! [`Environment`] value; velocity then passes through unchanged.

mod wind;

pub use wind::WindEffect;

use crate::config::EnvironmentSettings;
use crate::model::{EnvironmentState, Velocity};

/// Collection of enabled environmental effects.
#[derive(Debug, Clone)]
pub struct Environment {
    wind: Option<WindEffect>,
    humidity: Option<f64>,
}

impl Environment {
    /// Build an environment from settings.
    ///
    /// Returns `None` when no effect is enabled, so callers can skip the
    /// perturbation step entirely.
    pub fn from_settings(settings: &EnvironmentSettings) -> Option<Self> {
        let wind = settings
            .wind
            .enabled
            .then(|| WindEffect::new(settings.wind.direction, settings.wind.speed));
        let humidity = settings.humidity.enabled.then_some(settings.humidity.value);

        if wind.is_none() && humidity.is_none() {
            return None;
        }

        Some(Self { wind, humidity })
    }

    /// Create an environment with only a wind effect.
    pub fn with_wind(wind: WindEffect) -> Self {
        Self {
            wind: Some(wind),
            humidity: None,
        }
    }

    /// Apply all enabled effects to the velocity, returning the effective
    /// velocity used for motion integration.
    pub fn apply_effects(&self, heading: f64, velocity: Velocity) -> Velocity {
        match &self.wind {
            Some(wind) => wind.apply(heading, velocity),
            None => velocity,
        }
    }

    /// The wind effect, if enabled.
    pub fn wind(&self) -> Option<&WindEffect> {
        self.wind.as_ref()
    }

    /// Environment snapshot for state reporting.
    pub fn state(&self) -> EnvironmentState {
        EnvironmentState {
            wind: self.wind.as_ref().map(WindEffect::vector),
            humidity: self.humidity,
        }
    }
}
