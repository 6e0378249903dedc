//! Command validation.
//!
//! Semantic pre-checks run by callers *before* a command is submitted to
//! the simulation actor. The actor itself performs no validation, so every
//! submission path (transport handlers, tooling, tests) is expected to call
//! [`validate_command`] first and reject bad input at the boundary.

use thiserror::Error;

use crate::model::{Command, CommandKind, GoToCommand, Position, TrajectoryCommand};

/// Validation failures, always recoverable by rejecting the submission.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Latitude outside [-90, 90].
    #[error("latitude must be between -90 and 90 degrees: {0}")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180].
    #[error("longitude must be between -180 and 180 degrees: {0}")]
    InvalidLongitude(f64),

    /// Negative altitude.
    #[error("altitude must be non-negative: {0}")]
    InvalidAltitude(f64),

    /// Negative speed.
    #[error("speed must be non-negative: {0}")]
    InvalidSpeed(f64),

    /// Speed above the configured maximum.
    #[error("speed exceeds maximum allowed: {speed} > {max_speed}")]
    SpeedExceedsMax { speed: f64, max_speed: f64 },

    /// Trajectory without waypoints.
    #[error("trajectory must contain at least one waypoint")]
    EmptyWaypoints,

    /// A waypoint failed validation.
    #[error("waypoint {index}: {source}")]
    InvalidWaypoint {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

/// Validate geographic coordinates.
pub fn validate_position(position: &Position) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&position.latitude) {
        return Err(ValidationError::InvalidLatitude(position.latitude));
    }
    if !(-180.0..=180.0).contains(&position.longitude) {
        return Err(ValidationError::InvalidLongitude(position.longitude));
    }
    if position.altitude < 0.0 {
        return Err(ValidationError::InvalidAltitude(position.altitude));
    }
    Ok(())
}

/// Validate a speed value against the configured maximum.
pub fn validate_speed(speed: f64, max_speed: f64) -> Result<(), ValidationError> {
    if speed < 0.0 {
        return Err(ValidationError::InvalidSpeed(speed));
    }
    if speed > max_speed {
        return Err(ValidationError::SpeedExceedsMax { speed, max_speed });
    }
    Ok(())
}

/// Validate a command prior to submission.
///
/// `max_speed` is the simulator's configured speed limit.
pub fn validate_command(command: &Command, max_speed: f64) -> Result<(), ValidationError> {
    match &command.kind {
        CommandKind::GoTo(goto) => validate_goto(goto, max_speed),
        CommandKind::Trajectory(trajectory) => validate_trajectory(trajectory, max_speed),
        CommandKind::Hold | CommandKind::Stop => Ok(()),
    }
}

fn validate_goto(command: &GoToCommand, max_speed: f64) -> Result<(), ValidationError> {
    validate_position(&command.target)?;
    if let Some(speed) = command.speed {
        validate_speed(speed, max_speed)?;
    }
    Ok(())
}

fn validate_trajectory(command: &TrajectoryCommand, max_speed: f64) -> Result<(), ValidationError> {
    if command.waypoints.is_empty() {
        return Err(ValidationError::EmptyWaypoints);
    }

    for (index, waypoint) in command.waypoints.iter().enumerate() {
        let check = validate_position(&waypoint.position).and_then(|()| match waypoint.speed {
            Some(speed) => validate_speed(speed, max_speed),
            None => Ok(()),
        });
        if let Err(source) = check {
            return Err(ValidationError::InvalidWaypoint {
                index,
                source: Box::new(source),
            });
        }
    }

    Ok(())
}
