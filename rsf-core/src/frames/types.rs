use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{CoordinateError, Result};

/// A position in the ECEF frame, components in kilometers
pub type EcefVector = Vector3<f64>;

/// Geodetic location of a ground observer
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObserverSite {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Height above the reference ellipsoid (km)
    pub height_km: f64,
}

impl ObserverSite {
    /// Create a site, rejecting latitudes outside [-90, 90].
    /// Longitude and height are taken as given: longitude may carry any
    /// angle without wrap-around, height may be negative.
    pub fn new(latitude_deg: f64, longitude_deg: f64, height_km: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(CoordinateError::InvalidLatitude(latitude_deg));
        }

        Ok(Self {
            latitude_deg,
            longitude_deg,
            height_km,
        })
    }

    pub fn lat_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn lon_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    /// The site's own position in the ECEF frame
    pub fn to_ecef(&self) -> EcefVector {
        super::transforms::site_to_ecef(self)
    }
}

/// Topocentric South-East-Zenith offset from an observer, in kilometers
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SezVector {
    pub south_km: f64,
    pub east_km: f64,
    pub zenith_km: f64,
}

impl SezVector {
    pub fn new(south_km: f64, east_km: f64, zenith_km: f64) -> Self {
        Self {
            south_km,
            east_km,
            zenith_km,
        }
    }

    /// Straight-line range of the offset (km)
    pub fn range_km(&self) -> f64 {
        Vector3::new(self.south_km, self.east_km, self.zenith_km).norm()
    }
}
