use thiserror::Error;

/// Input validation failures. Raised before any solar computation runs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoreError {
    #[error("invalid latitude: {0} (expected -90.0..=90.0)")]
    InvalidLatitude(f64),

    #[error("invalid longitude: {0} (expected -180.0..=180.0)")]
    InvalidLongitude(f64),

    #[error("invalid elevation: {0} m (expected -500.0..=10000.0)")]
    InvalidElevation(f64),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
