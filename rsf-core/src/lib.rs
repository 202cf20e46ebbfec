pub mod ellipsoid;
pub mod error;
pub mod frames;

pub use error::{CoordinateError, Result};
pub use frames::{EcefVector, ObserverSite, SezVector};
pub use frames::{rotate_sez_to_ecef, sez_to_ecef, site_to_ecef};
