//! Great-circle navigation primitives.
//!
//! Pure functions over geographic coordinates, treating the Earth as a
//! sphere of radius [`EARTH_RADIUS_METERS`]. These back the simulation
//! actor's distance, bearing, and heading arithmetic.

/// Mean Earth radius in meters (spherical model).
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two points, in meters.
///
/// Uses the haversine formula, which is numerically stable for both
/// short and antipodal distances.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Initial bearing from point 1 to point 2, in degrees `[0, 360)`.
///
/// 0° is true north, increasing clockwise (forward azimuth).
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let y = d_lon.sin() * lat2_rad.cos();
    let x = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * d_lon.cos();

    normalize_heading(y.atan2(x).to_degrees())
}

/// Signed shortest rotation from `from` to `to`, in degrees `(-180, 180]`.
///
/// Positive values rotate clockwise. Handles the ±180° wrap so callers can
/// turn along the shorter arc.
pub fn shortest_angular_delta(from: f64, to: f64) -> f64 {
    let delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Normalize an angle in degrees to `[0, 360)`.
pub fn normalize_heading(heading: f64) -> f64 {
    heading.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point_is_zero() {
        let d = haversine(32.0853, 34.7818, 32.0853, 34.7818);
        assert!(d < 1.0, "Same point should be ~0m, got {}", d);
    }

    #[test]
    fn test_haversine_tel_aviv_to_jerusalem() {
        // ~54km actual
        let d = haversine(32.0853, 34.7818, 31.7683, 35.2137);
        assert!((d - 54_000.0).abs() < 2_000.0, "Expected ~54km, got {}m", d);
    }

    #[test]
    fn test_haversine_one_degree_latitude() {
        // 1 degree of latitude is ~111km
        let d = haversine(32.0, 34.0, 33.0, 34.0);
        assert!((d - 111_000.0).abs() < 1_000.0, "Expected ~111km, got {}m", d);
    }

    #[test]
    fn test_haversine_equator_to_north_pole() {
        // A quarter of the meridian, ~10,000km
        let d = haversine(0.0, 0.0, 90.0, 0.0);
        assert!((d - 10_001_965.0).abs() < 10_000.0, "Expected ~10,000km, got {}m", d);
    }

    #[test]
    fn test_haversine_across_date_line() {
        // 2 degrees of longitude at the equator, ~222km
        let d = haversine(0.0, 179.0, 0.0, -179.0);
        assert!((d - 222_390.0).abs() < 5_000.0, "Expected ~222km, got {}m", d);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let forward = haversine(32.0, 34.0, 51.5074, -0.1278);
        let reverse = haversine(51.5074, -0.1278, 32.0, 34.0);
        assert!((forward - reverse).abs() < 1e-6);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        // Due north
        let north = bearing(32.0, 34.0, 33.0, 34.0);
        assert!(north < 0.5 || north > 359.5, "Expected ~0°, got {}°", north);

        // Due east (at the equator, so the great circle stays on the parallel)
        let east = bearing(0.0, 34.0, 0.0, 35.0);
        assert!((east - 90.0).abs() < 0.5, "Expected ~90°, got {}°", east);

        // Due south
        let south = bearing(33.0, 34.0, 32.0, 34.0);
        assert!((south - 180.0).abs() < 0.5, "Expected ~180°, got {}°", south);

        // Due west at the equator
        let west = bearing(0.0, 35.0, 0.0, 34.0);
        assert!((west - 270.0).abs() < 0.5, "Expected ~270°, got {}°", west);
    }

    #[test]
    fn test_bearing_reciprocal_differs_by_180() {
        let forward = bearing(32.0, 34.0, 32.5, 34.5);
        let reverse = bearing(32.5, 34.5, 32.0, 34.0);

        // Within a small geodesic correction at these distances
        let diff = shortest_angular_delta(forward, reverse).abs();
        assert!(
            (diff - 180.0).abs() < 1.0,
            "Reciprocal bearings should differ by ~180°: {} vs {}",
            forward,
            reverse
        );
    }

    #[test]
    fn test_bearing_across_date_line() {
        // Heading east across the antimeridian
        let b = bearing(0.0, 179.5, 0.0, -179.5);
        assert!((b - 90.0).abs() < 0.5, "Expected ~90°, got {}°", b);
    }

    #[test]
    fn test_shortest_angular_delta_range_and_wrap() {
        assert_eq!(shortest_angular_delta(0.0, 90.0), 90.0);
        assert_eq!(shortest_angular_delta(90.0, 0.0), -90.0);
        // Wrap through north: 350° -> 10° is +20°, not -340°
        assert!((shortest_angular_delta(350.0, 10.0) - 20.0).abs() < 1e-9);
        assert!((shortest_angular_delta(10.0, 350.0) + 20.0).abs() < 1e-9);
        // Opposite headings resolve to +180, the closed end of the interval
        assert_eq!(shortest_angular_delta(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_shortest_angular_delta_is_antisymmetric() {
        for (from, to) in [(12.0, 197.0), (300.0, 45.0), (0.1, 359.9)] {
            let ab = shortest_angular_delta(from, to);
            let ba = shortest_angular_delta(to, from);
            assert!(
                (ab + ba).abs() % 360.0 < 1e-9,
                "delta({from},{to})={ab} and delta({to},{from})={ba} should cancel"
            );
        }
    }

    #[test]
    fn test_normalize_heading() {
        assert_eq!(normalize_heading(0.0), 0.0);
        assert_eq!(normalize_heading(360.0), 0.0);
        assert_eq!(normalize_heading(-90.0), 270.0);
        assert_eq!(normalize_heading(725.0), 5.0);
    }
}
