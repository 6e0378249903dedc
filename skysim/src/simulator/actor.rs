//! The simulation actor.
//!
//! [`Simulator`] is the single owner of the mutable aircraft state. Its
//! loop multiplexes a fixed-period tick timer, the command intake queue,
//! and synchronous state queries; exactly one of those is serviced per
//! iteration, so no two can touch the state concurrently.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::environment::Environment;
use crate::geo;
use crate::model::{
    AircraftState, Command, CommandInfo, CommandKind, GoToCommand, TrajectoryCommand, Velocity,
};
use crate::pubsub::{StatePublisher, DEFAULT_SUBSCRIBER_BUFFER};
use crate::simulator::handle::StateRequest;
use crate::simulator::{SimulationConfig, SimulatorError, SimulatorHandle};

/// Meters per degree of latitude (spherical approximation).
const METERS_PER_DEGREE_LAT: f64 = 111_000.0;

/// The aircraft simulation engine.
///
/// Single-owner state machine: all mutation happens inside [`run`], and
/// only value snapshots leave it, via the publisher or state replies.
///
/// [`run`]: Simulator::run
pub struct Simulator {
    // State, touched only by the run loop
    state: AircraftState,
    active_command: Option<Command>,
    /// Trajectory progress; exists only while a trajectory is active.
    waypoint_index: Option<usize>,

    // Event sources
    command_rx: mpsc::Receiver<Command>,
    state_rx: mpsc::Receiver<StateRequest>,

    // Collaborators
    publisher: Arc<StatePublisher>,
    environment: Option<Environment>,

    config: SimulationConfig,
    /// Simulated seconds per tick. Nominal by design: wall-clock skew is
    /// not compensated, which keeps integration deterministic.
    dt: f64,
}

impl Simulator {
    /// Create the simulator and its handle.
    ///
    /// Fails with [`SimulatorError::InvalidConfig`] if the configuration
    /// cannot be run with; that is the only construction-time failure.
    pub fn new(
        config: SimulationConfig,
        environment: Option<Environment>,
    ) -> Result<(Self, SimulatorHandle), SimulatorError> {
        config.validate()?;

        let (command_tx, command_rx) = mpsc::channel(config.command_queue_size);
        let (state_tx, state_rx) = mpsc::channel(1);
        let publisher = Arc::new(StatePublisher::new(DEFAULT_SUBSCRIBER_BUFFER));

        let state = AircraftState {
            position: config.initial_position,
            velocity: config.initial_velocity,
            heading: geo::normalize_heading(config.initial_heading),
            timestamp: Utc::now(),
            active_command: None,
            environment: None,
        };

        info!(
            tick_rate_hz = config.tick_rate_hz,
            latitude = state.position.latitude,
            longitude = state.position.longitude,
            altitude = state.position.altitude,
            environment_enabled = environment.is_some(),
            "Simulator initialized"
        );
        if let Some(wind) = environment.as_ref().and_then(Environment::wind) {
            let vector = wind.vector();
            info!(
                direction = vector.direction,
                speed_ms = vector.speed,
                "Wind effect enabled"
            );
        }

        let handle = SimulatorHandle {
            command_tx,
            state_tx,
            publisher: Arc::clone(&publisher),
            submit_timeout: config.submit_timeout,
            state_query_timeout: config.state_query_timeout,
        };

        let dt = config.dt();
        let simulator = Self {
            state,
            active_command: None,
            waypoint_index: None,
            command_rx,
            state_rx,
            publisher,
            environment,
            config,
            dt,
        };

        Ok((simulator, handle))
    }

    /// Drive the simulation loop until the token is cancelled.
    ///
    /// Returns the cancellation cause as its only error. Commands never
    /// terminate the loop; invalid ones are rejected upstream and anything
    /// that reaches the actor is executed as-is.
    pub async fn run(mut self, cancellation: CancellationToken) -> Result<(), SimulatorError> {
        info!("Starting simulation loop");

        let mut ticker = tokio::time::interval(self.config.tick_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;

                _ = cancellation.cancelled() => {
                    info!("Simulation loop shutting down");
                    return Err(SimulatorError::Cancelled);
                }

                _ = ticker.tick() => {
                    self.tick();
                }

                Some(command) = self.command_rx.recv() => {
                    self.handle_command(command);
                }

                Some(request) = self.state_rx.recv() => {
                    // Reply is buffered; a caller that already timed out
                    // just drops the snapshot.
                    let _ = request.reply.send(self.state.clone());
                }
            }
        }
    }

    /// One simulation step of `dt` simulated seconds.
    fn tick(&mut self) {
        let dt = self.dt;

        let effective_velocity = match &self.environment {
            Some(env) => env.apply_effects(self.state.heading, self.state.velocity),
            None => self.state.velocity,
        };

        if let Some(command) = self.active_command.take() {
            let keep = match &command.kind {
                CommandKind::GoTo(goto) => self.execute_goto(&command.id, goto, dt),
                CommandKind::Trajectory(trajectory) => {
                    self.execute_trajectory(&command.id, trajectory, dt)
                }
                CommandKind::Hold => {
                    self.execute_hold(dt);
                    true
                }
                // Motion was zeroed when the command became active
                CommandKind::Stop => true,
            };
            if keep {
                self.active_command = Some(command);
            } else {
                self.waypoint_index = None;
            }
        } else {
            // No command: maintain heading and speed, drifting with the wind
            self.update_position(dt, effective_velocity);
        }

        self.state.active_command = self
            .active_command
            .as_ref()
            .map(|command| self.describe_command(command));
        self.state.environment = self.environment.as_ref().map(Environment::state);
        self.state.timestamp = Utc::now();

        self.publisher.publish(&self.state);
    }

    /// Install a newly received command as the active one.
    fn handle_command(&mut self, command: Command) {
        info!(command_id = %command.id, kind = command.kind.name(), "Command received");

        // Leaving a trajectory for anything else discards its progress
        let leaving_trajectory = matches!(
            self.active_command.as_ref().map(|c| &c.kind),
            Some(CommandKind::Trajectory(_))
        );
        match &command.kind {
            CommandKind::Trajectory(_) => self.waypoint_index = Some(0),
            _ if leaving_trajectory => self.waypoint_index = None,
            _ => {}
        }

        if matches!(command.kind, CommandKind::Stop) {
            self.state.velocity = Velocity::default();
        }

        self.active_command = Some(command);
    }

    /// Fly toward a single target. Returns false once the target is reached.
    fn execute_goto(&mut self, command_id: &str, command: &GoToCommand, dt: f64) -> bool {
        let distance = geo::haversine(
            self.state.position.latitude,
            self.state.position.longitude,
            command.target.latitude,
            command.target.longitude,
        );

        if distance < self.config.position_tolerance {
            info!(command_id = %command_id, "Target reached");
            self.state.velocity.ground_speed = 0.0;
            self.state.velocity.vertical_speed = 0.0;
            return false;
        }

        let target_heading = geo::bearing(
            self.state.position.latitude,
            self.state.position.longitude,
            command.target.latitude,
            command.target.longitude,
        );
        self.adjust_heading(target_heading, dt);

        let target_speed = command.speed.unwrap_or(self.config.default_speed);
        self.adjust_speed(target_speed, dt);

        // Vertical speed that meets the target altitude on arrival. Skipped
        // while ground speed is zero (the ETA is undefined); the next tick,
        // after acceleration, sets it.
        if self.state.velocity.ground_speed > 0.0 {
            let altitude_diff = command.target.altitude - self.state.position.altitude;
            let time_to_target = distance / self.state.velocity.ground_speed;
            self.state.velocity.vertical_speed = (altitude_diff / time_to_target)
                .clamp(-self.config.max_descent_rate, self.config.max_climb_rate);
        }

        self.update_position(dt, self.state.velocity);
        true
    }

    /// Advance along a waypoint sequence. Returns false when the last
    /// waypoint of a non-looping trajectory has been reached.
    fn execute_trajectory(
        &mut self,
        command_id: &str,
        command: &TrajectoryCommand,
        dt: f64,
    ) -> bool {
        let mut index = *self.waypoint_index.get_or_insert(0);

        if index >= command.waypoints.len() {
            if command.looped {
                info!(command_id = %command_id, "Trajectory looping");
                index = 0;
                self.waypoint_index = Some(0);
            } else {
                info!(command_id = %command_id, "Trajectory complete");
                self.state.velocity.ground_speed = 0.0;
                self.state.velocity.vertical_speed = 0.0;
                return false;
            }
        }

        let waypoint = &command.waypoints[index];
        let distance = geo::haversine(
            self.state.position.latitude,
            self.state.position.longitude,
            waypoint.position.latitude,
            waypoint.position.longitude,
        );

        // Advancing to the next waypoint keeps the command active
        if distance < self.config.position_tolerance {
            info!(command_id = %command_id, waypoint_index = index, "Waypoint reached");
            self.waypoint_index = Some(index + 1);
            return true;
        }

        let goto = GoToCommand {
            target: waypoint.position,
            speed: waypoint.speed,
        };
        self.execute_goto(command_id, &goto, dt)
    }

    /// Decelerate to a standstill at the current position.
    ///
    /// This matches the implemented behavior of the system this models:
    /// despite the name, there is no orbit pattern - the aircraft brakes to
    /// zero and hovers in place.
    fn execute_hold(&mut self, dt: f64) {
        self.adjust_speed(0.0, dt);
        self.state.velocity.vertical_speed = 0.0;
        self.update_position(dt, self.state.velocity);
    }

    /// Rotate the heading toward the target along the shorter arc, limited
    /// by the configured turn rate.
    fn adjust_heading(&mut self, target_heading: f64, dt: f64) {
        let delta = geo::shortest_angular_delta(self.state.heading, target_heading);
        let max_turn = self.config.heading_change_rate * dt;

        if delta.abs() < max_turn {
            self.state.heading = target_heading;
        } else if delta > 0.0 {
            self.state.heading += max_turn;
        } else {
            self.state.heading -= max_turn;
        }

        self.state.heading = geo::normalize_heading(self.state.heading);
    }

    /// Move the ground speed toward the target, limited by the configured
    /// acceleration and clamped to `[0, max_speed]`.
    fn adjust_speed(&mut self, target_speed: f64, dt: f64) {
        let diff = target_speed - self.state.velocity.ground_speed;
        let max_change = self.config.speed_change_rate * dt;

        if diff.abs() < max_change {
            self.state.velocity.ground_speed = target_speed;
        } else if diff > 0.0 {
            self.state.velocity.ground_speed += max_change;
        } else {
            self.state.velocity.ground_speed -= max_change;
        }

        self.state.velocity.ground_speed =
            self.state.velocity.ground_speed.clamp(0.0, self.config.max_speed);
    }

    /// Integrate motion over `dt` with the given velocity.
    ///
    /// Spherical-Earth approximation: one degree of latitude is a constant
    /// [`METERS_PER_DEGREE_LAT`], one degree of longitude shrinks with the
    /// cosine of the latitude.
    fn update_position(&mut self, dt: f64, velocity: Velocity) {
        let distance = velocity.ground_speed * dt;
        let heading_rad = self.state.heading.to_radians();
        let meters_per_degree_lon =
            METERS_PER_DEGREE_LAT * self.state.position.latitude.to_radians().cos();

        self.state.position.latitude += distance * heading_rad.cos() / METERS_PER_DEGREE_LAT;
        self.state.position.longitude += distance * heading_rad.sin() / meters_per_degree_lon;
        self.state.position.altitude += velocity.vertical_speed * dt;

        if self.state.position.altitude < 0.0 {
            self.state.position.altitude = 0.0;
            self.state.velocity.vertical_speed = 0.0;
        }
    }

    /// Build the snapshot descriptor for the active command.
    fn describe_command(&self, command: &Command) -> CommandInfo {
        let target = match &command.kind {
            CommandKind::GoTo(goto) => Some(goto.target),
            CommandKind::Trajectory(trajectory) => self
                .waypoint_index
                .and_then(|index| trajectory.waypoints.get(index))
                .map(|waypoint| waypoint.position),
            CommandKind::Hold | CommandKind::Stop => None,
        };

        let eta_seconds = target.and_then(|target| {
            if self.state.velocity.ground_speed > 0.0 {
                let distance = geo::haversine(
                    self.state.position.latitude,
                    self.state.position.longitude,
                    target.latitude,
                    target.longitude,
                );
                Some(distance / self.state.velocity.ground_speed)
            } else {
                None
            }
        });

        CommandInfo {
            kind: command.kind.name().to_string(),
            target,
            eta_seconds,
        }
    }
}
