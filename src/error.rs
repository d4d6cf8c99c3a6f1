/// Why a bounding rectangle could not be computed.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum BoundsError {
    #[error("invalid center coordinate ({lat}, {lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("distance must not be negative, got {0}")]
    NegativeDistance(f64),

    #[error("sphere radius must not be negative, got {0}")]
    NegativeRadius(f64),

    #[error("computation produced a non-finite bound")]
    NonFinite,
}

pub type BoundsResult<T> = Result<T, BoundsError>;
