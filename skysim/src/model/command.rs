//! Navigation command types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::state::Position;

/// A navigation command submitted to the simulation actor.
///
/// Every command carries a unique id so progress and completion can be
/// correlated in logs and snapshots. Semantic validation happens upstream
/// (see [`crate::validation`]); the actor accepts whatever reaches it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Command {
    /// Unique command identifier (UUID v4).
    pub id: String,
    /// The command payload.
    #[serde(flatten)]
    pub kind: CommandKind,
}

impl Command {
    /// Create a new command with a generated id.
    pub fn new(kind: CommandKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
        }
    }

    /// Create a command with an explicit id.
    pub fn with_id(id: impl Into<String>, kind: CommandKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

/// The command payload, tagged by type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CommandKind {
    /// Fly to a single target position.
    GoTo(GoToCommand),
    /// Follow an ordered sequence of waypoints.
    Trajectory(TrajectoryCommand),
    /// Decelerate to a standstill and maintain the current position.
    Hold,
    /// Freeze all motion until replaced by another command.
    Stop,
}

impl CommandKind {
    /// Short type name used in logs and snapshot descriptors.
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::GoTo(_) => "goto",
            CommandKind::Trajectory(_) => "trajectory",
            CommandKind::Hold => "hold",
            CommandKind::Stop => "stop",
        }
    }
}

/// Directs the aircraft to a specific point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoToCommand {
    /// Target position.
    pub target: Position,
    /// Cruise speed in m/s; the configured default speed when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

/// Directs the aircraft to follow a sequence of waypoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryCommand {
    /// Waypoints, visited in order. Must contain at least one entry.
    pub waypoints: Vec<Waypoint>,
    /// Restart from the first waypoint after reaching the last.
    #[serde(rename = "loop", default)]
    pub looped: bool,
}

/// A point in a trajectory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waypoint {
    /// Waypoint position.
    pub position: Position,
    /// Speed toward this waypoint in m/s; the default speed when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let a = Command::new(CommandKind::Hold);
        let b = Command::new(CommandKind::Hold);

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_kind_names() {
        let goto = CommandKind::GoTo(GoToCommand {
            target: Position::new(32.0, 34.0, 1000.0),
            speed: None,
        });
        assert_eq!(goto.name(), "goto");
        assert_eq!(CommandKind::Hold.name(), "hold");
        assert_eq!(CommandKind::Stop.name(), "stop");
    }

    #[test]
    fn test_goto_wire_format() {
        let cmd = Command::with_id(
            "cmd-1",
            CommandKind::GoTo(GoToCommand {
                target: Position::new(32.1, 34.1, 1500.0),
                speed: Some(120.0),
            }),
        );

        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["id"], "cmd-1");
        assert_eq!(json["type"], "goto");
        assert_eq!(json["target"]["latitude"], 32.1);
        assert_eq!(json["speed"], 120.0);
    }

    #[test]
    fn test_trajectory_loop_field_defaults_to_false() {
        let json = r#"{
            "id": "cmd-2",
            "type": "trajectory",
            "waypoints": [
                {"position": {"latitude": 32.05, "longitude": 34.05, "altitude": 1200.0}}
            ]
        }"#;

        let cmd: Command = serde_json::from_str(json).unwrap();
        match cmd.kind {
            CommandKind::Trajectory(trajectory) => {
                assert_eq!(trajectory.waypoints.len(), 1);
                assert!(!trajectory.looped);
                assert!(trajectory.waypoints[0].speed.is_none());
            }
            other => panic!("Expected trajectory, got {:?}", other),
        }
    }

    #[test]
    fn test_unit_commands_roundtrip() {
        for kind in [CommandKind::Hold, CommandKind::Stop] {
            let cmd = Command::new(kind);
            let json = serde_json::to_string(&cmd).unwrap();
            let back: Command = serde_json::from_str(&json).unwrap();
            assert_eq!(back.kind.name(), cmd.kind.name());
        }
    }
}
