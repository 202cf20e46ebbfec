use thiserror::Error;

/// Errors raised while constructing observer geometry
#[derive(Error, Debug)]
pub enum CoordinateError {
    #[error("invalid latitude: {0} (must be -90 to 90)")]
    InvalidLatitude(f64),
}

pub type Result<T> = std::result::Result<T, CoordinateError>;
