//! Wind effect on aircraft motion.

use crate::model::{Velocity, WindVector};

/// Applies a constant wind to the aircraft's velocity.
///
/// Direction follows meteorological convention: the direction the wind is
/// coming *from*. Wind "from 270°" blows eastward, so the vector added to
/// the aircraft's motion is the negated from-direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindEffect {
    /// Direction the wind originates from, in degrees (0 = from north).
    direction: f64,
    /// Wind speed in m/s.
    speed: f64,
}

impl WindEffect {
    /// Create a new wind effect.
    pub fn new(direction: f64, speed: f64) -> Self {
        Self { direction, speed }
    }

    /// Apply the wind to the aircraft velocity, returning the effective
    /// ground velocity.
    ///
    /// The aircraft keeps its heading; the returned ground speed is the
    /// magnitude of the aircraft velocity vector plus the wind vector in
    /// the north-east plane. Vertical speed is unaffected by horizontal
    /// wind. A headwind stronger than the airspeed still yields a
    /// non-negative magnitude (the aircraft is pushed backward along its
    /// track, which this model reports as residual ground speed).
    pub fn apply(&self, heading: f64, velocity: Velocity) -> Velocity {
        let heading_rad = heading.to_radians();
        let wind_rad = self.direction.to_radians();

        // Aircraft velocity components in the NE plane
        let aircraft_north = velocity.ground_speed * heading_rad.cos();
        let aircraft_east = velocity.ground_speed * heading_rad.sin();

        // Wind blows toward the opposite of its "from" direction
        let wind_north = -self.speed * wind_rad.cos();
        let wind_east = -self.speed * wind_rad.sin();

        let ground_north = aircraft_north + wind_north;
        let ground_east = aircraft_east + wind_east;

        Velocity {
            ground_speed: (ground_north * ground_north + ground_east * ground_east).sqrt(),
            vertical_speed: velocity.vertical_speed,
        }
    }

    /// Headwind component for a given heading, in m/s.
    ///
    /// Positive values indicate headwind, negative tailwind.
    pub fn headwind_component(&self, heading: f64) -> f64 {
        let heading_rad = heading.to_radians();
        let wind_rad = self.direction.to_radians();

        let wind_north = -self.speed * wind_rad.cos();
        let wind_east = -self.speed * wind_rad.sin();

        -(wind_north * heading_rad.cos() + wind_east * heading_rad.sin())
    }

    /// Crosswind component for a given heading, in m/s.
    ///
    /// Positive values indicate wind from the right of the aircraft,
    /// negative from the left.
    pub fn crosswind_component(&self, heading: f64) -> f64 {
        let heading_rad = heading.to_radians();
        let wind_rad = self.direction.to_radians();

        let wind_north = -self.speed * wind_rad.cos();
        let wind_east = -self.speed * wind_rad.sin();

        wind_north * heading_rad.sin() + wind_east * (-heading_rad.cos())
    }

    /// The wind vector for state reporting.
    pub fn vector(&self) -> WindVector {
        WindVector {
            direction: self.direction,
            speed: self.speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ApplyCase {
        name: &'static str,
        wind_direction: f64,
        wind_speed: f64,
        heading: f64,
        airspeed: f64,
        expected_ground_speed: f64,
        tolerance: f64,
    }

    #[test]
    fn test_apply_ground_speed() {
        let cases = [
            ApplyCase {
                name: "no wind",
                wind_direction: 0.0,
                wind_speed: 0.0,
                heading: 0.0,
                airspeed: 50.0,
                expected_ground_speed: 50.0,
                tolerance: 0.1,
            },
            ApplyCase {
                name: "direct headwind (flying north, wind from north)",
                wind_direction: 0.0,
                wind_speed: 10.0,
                heading: 0.0,
                airspeed: 50.0,
                expected_ground_speed: 40.0,
                tolerance: 0.1,
            },
            ApplyCase {
                name: "direct tailwind (flying north, wind from south)",
                wind_direction: 180.0,
                wind_speed: 10.0,
                heading: 0.0,
                airspeed: 50.0,
                expected_ground_speed: 60.0,
                tolerance: 0.1,
            },
            ApplyCase {
                name: "direct headwind (flying east, wind from east)",
                wind_direction: 90.0,
                wind_speed: 15.0,
                heading: 90.0,
                airspeed: 100.0,
                expected_ground_speed: 85.0,
                tolerance: 0.1,
            },
            ApplyCase {
                name: "perpendicular crosswind (flying north, wind from east)",
                wind_direction: 90.0,
                wind_speed: 20.0,
                heading: 0.0,
                airspeed: 50.0,
                expected_ground_speed: 53.85, // sqrt(50^2 + 20^2)
                tolerance: 0.5,
            },
            ApplyCase {
                name: "45-degree wind",
                wind_direction: 45.0,
                wind_speed: 10.0,
                heading: 0.0,
                airspeed: 50.0,
                expected_ground_speed: 50.14,
                tolerance: 1.0,
            },
        ];

        for case in cases {
            let wind = WindEffect::new(case.wind_direction, case.wind_speed);
            let effective = wind.apply(case.heading, Velocity::new(case.airspeed, 0.0));
            assert!(
                (effective.ground_speed - case.expected_ground_speed).abs() < case.tolerance,
                "{}: expected {} m/s, got {} m/s",
                case.name,
                case.expected_ground_speed,
                effective.ground_speed
            );
        }
    }

    #[test]
    fn test_apply_zero_wind_is_identity() {
        let wind = WindEffect::new(135.0, 0.0);
        let velocity = Velocity::new(72.5, -3.0);
        let effective = wind.apply(42.0, velocity);

        assert!((effective.ground_speed - velocity.ground_speed).abs() < 1e-9);
        assert_eq!(effective.vertical_speed, velocity.vertical_speed);
    }

    #[test]
    fn test_apply_preserves_vertical_speed() {
        let wind = WindEffect::new(0.0, 25.0);
        let effective = wind.apply(0.0, Velocity::new(50.0, 7.5));
        assert_eq!(effective.vertical_speed, 7.5);
    }

    #[test]
    fn test_headwind_exceeding_airspeed_stays_non_negative() {
        // 60 m/s wind straight on the nose of a 50 m/s aircraft
        let wind = WindEffect::new(0.0, 60.0);
        let effective = wind.apply(0.0, Velocity::new(50.0, 0.0));

        assert!(effective.ground_speed >= 0.0);
        assert!((effective.ground_speed - 10.0).abs() < 0.1);
    }

    #[test]
    fn test_headwind_component_sign() {
        let wind = WindEffect::new(0.0, 10.0);

        // Flying north into wind from north: full headwind
        assert!((wind.headwind_component(0.0) - 10.0).abs() < 1e-9);
        // Flying south: full tailwind
        assert!((wind.headwind_component(180.0) + 10.0).abs() < 1e-9);
        // Flying east: pure crosswind, no headwind
        assert!(wind.headwind_component(90.0).abs() < 1e-9);
    }

    #[test]
    fn test_crosswind_component_sign() {
        // Wind from east, flying north: wind from the right
        let wind = WindEffect::new(90.0, 10.0);
        assert!(wind.crosswind_component(0.0) > 9.9);

        // Wind from west, flying north: wind from the left
        let wind = WindEffect::new(270.0, 10.0);
        assert!(wind.crosswind_component(0.0) < -9.9);
    }

    #[test]
    fn test_vector_reports_configuration() {
        let wind = WindEffect::new(225.0, 8.0);
        let vector = wind.vector();
        assert_eq!(vector.direction, 225.0);
        assert_eq!(vector.speed, 8.0);
    }
}
