use nalgebra::Vector3;

use crate::ellipsoid::{ECCENTRICITY_SQUARED, prime_vertical_radius_km};

use super::types::{EcefVector, ObserverSite, SezVector};

/// Rotate a SEZ offset into ECEF-aligned axes for an observer at the given
/// geodetic latitude and longitude (radians). Linear in the offset.
pub fn rotate_sez_to_ecef(lat_rad: f64, lon_rad: f64, sez: &SezVector) -> EcefVector {
    let sin_lat = lat_rad.sin();
    let cos_lat = lat_rad.cos();
    let sin_lon = lon_rad.sin();
    let cos_lon = lon_rad.cos();

    // Rotation about the East axis by the latitude
    let tilted_x = sez.south_km * sin_lat + sez.zenith_km * cos_lat;
    let tilted_y = sez.east_km;
    let tilted_z = -sez.south_km * cos_lat + sez.zenith_km * sin_lat;

    // Rotation about the polar axis by the longitude
    Vector3::new(
        tilted_x * cos_lon - tilted_y * sin_lon,
        tilted_x * sin_lon + tilted_y * cos_lon,
        tilted_z,
    )
}

/// ECEF position of the observer itself, from its geodetic coordinates
pub fn site_to_ecef(site: &ObserverSite) -> EcefVector {
    let lat_rad = site.lat_rad();
    let lon_rad = site.lon_rad();

    let sin_lat = lat_rad.sin();
    let cos_lat = lat_rad.cos();
    let sin_lon = lon_rad.sin();
    let cos_lon = lon_rad.cos();

    let n = prime_vertical_radius_km(lat_rad);

    let x = (n + site.height_km) * cos_lat * cos_lon;
    let y = (n + site.height_km) * cos_lat * sin_lon;
    let z = (n * (1.0 - ECCENTRICITY_SQUARED) + site.height_km) * sin_lat;

    Vector3::new(x, y, z)
}

/// Convert a SEZ offset observed at a site into an absolute ECEF position.
///
/// The offset is rotated into ECEF-aligned axes and added to the site's own
/// ECEF position. Pure arithmetic throughout: non-finite inputs propagate
/// into the result instead of raising an error.
pub fn sez_to_ecef(site: &ObserverSite, sez: &SezVector) -> EcefVector {
    site_to_ecef(site) + rotate_sez_to_ecef(site.lat_rad(), site.lon_rad(), sez)
}
