//! Topocentric and geocentric coordinate frames

mod transforms;
mod types;

pub use transforms::{rotate_sez_to_ecef, sez_to_ecef, site_to_ecef};
pub use types::{EcefVector, ObserverSite, SezVector};
