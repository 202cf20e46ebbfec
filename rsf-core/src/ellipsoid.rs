//! Reference ellipsoid geometry

/// Equatorial radius of the reference ellipsoid (km)
pub const EQUATORIAL_RADIUS_KM: f64 = 6378.137;

/// First eccentricity of the reference ellipsoid
pub const ECCENTRICITY: f64 = 0.081819221456;

/// Squared eccentricity, derived from [`ECCENTRICITY`] rather than the
/// separately rounded value often quoted for WGS84; outputs depend on the
/// choice at the sub-millimeter level
pub const ECCENTRICITY_SQUARED: f64 = ECCENTRICITY * ECCENTRICITY;

/// Shared denominator of the curvature radii: `sqrt(1 - e^2 * sin^2(lat))`.
/// Stays positive for every latitude because `e^2 < 1`.
pub fn curvature_denom(lat_rad: f64) -> f64 {
    (1.0 - ECCENTRICITY_SQUARED * lat_rad.sin().powi(2)).sqrt()
}

/// Prime-vertical radius of curvature (km) at a geodetic latitude
pub fn prime_vertical_radius_km(lat_rad: f64) -> f64 {
    EQUATORIAL_RADIUS_KM / curvature_denom(lat_rad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_denom_at_equator() {
        // sin(0) = 0, so the denominator is exactly 1
        assert_eq!(curvature_denom(0.0), 1.0);
    }

    #[test]
    fn test_denom_positive_at_poles() {
        // sin^2(+-90 deg) = 1 leaves sqrt(1 - e^2), which must stay
        // strictly positive so the radii never divide by zero
        let at_north = curvature_denom(FRAC_PI_2);
        let at_south = curvature_denom(-FRAC_PI_2);

        assert!(at_north > 0.0);
        assert!(at_south > 0.0);
        assert!((at_north - (1.0 - ECCENTRICITY_SQUARED).sqrt()).abs() < 1e-12);
        assert!((at_north - at_south).abs() < 1e-12);
    }

    #[test]
    fn test_prime_vertical_radius_at_equator() {
        // N(0) is exactly the equatorial radius
        assert_eq!(prime_vertical_radius_km(0.0), EQUATORIAL_RADIUS_KM);
    }

    #[test]
    fn test_prime_vertical_radius_grows_toward_pole() {
        let at_equator = prime_vertical_radius_km(0.0);
        let at_mid = prime_vertical_radius_km(45.0_f64.to_radians());
        let at_pole = prime_vertical_radius_km(FRAC_PI_2);

        assert!(at_mid > at_equator);
        assert!(at_pole > at_mid);
        // N(90 deg) = a / sqrt(1 - e^2), about 6399.6 km
        assert!(at_pole > 6399.0 && at_pole < 6400.0);
    }
}
