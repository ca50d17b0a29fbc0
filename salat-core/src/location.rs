//! Observer coordinates.
//!
//! [`Coordinates`] is the immutable observer value consumed by the solar-day
//! solver: geodetic latitude and longitude in degrees plus elevation above
//! sea level in meters. Construction validates the ranges so downstream code
//! never re-checks them.

use crate::error::{CoreError, CoreResult};

/// A validated observer position.
///
/// Latitude is positive north, longitude positive east, elevation in meters
/// above sea level. Values are checked once at construction:
///
/// ```
/// use salat_core::Coordinates;
///
/// let makkah = Coordinates::new(21.4225, 39.8262)?;
/// assert_eq!(makkah.elevation, 0.0);
///
/// assert!(Coordinates::new(91.0, 0.0).is_err());
/// # Ok::<(), salat_core::CoreError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    /// Geodetic latitude in degrees, [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, [-180, 180], positive east.
    pub longitude: f64,
    /// Elevation above sea level in meters, [-500, 10000].
    pub elevation: f64,
}

impl Coordinates {
    /// Creates coordinates at sea level.
    pub fn new(latitude: f64, longitude: f64) -> CoreResult<Self> {
        Self::with_elevation(latitude, longitude, 0.0)
    }

    /// Creates coordinates with an explicit elevation in meters.
    pub fn with_elevation(latitude: f64, longitude: f64, elevation: f64) -> CoreResult<Self> {
        // NaN fails every range check, so it is rejected here as well.
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoreError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoreError::InvalidLongitude(longitude));
        }
        if !(-500.0..=10000.0).contains(&elevation) {
            return Err(CoreError::InvalidElevation(elevation));
        }
        Ok(Self {
            latitude,
            longitude,
            elevation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let c = Coordinates::new(35.7750, -78.6336).unwrap();
        assert_eq!(c.latitude, 35.7750);
        assert_eq!(c.longitude, -78.6336);
        assert_eq!(c.elevation, 0.0);
    }

    #[test]
    fn test_poles_and_date_line_are_valid() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_out_of_range_latitude() {
        assert_eq!(
            Coordinates::new(90.01, 0.0),
            Err(CoreError::InvalidLatitude(90.01))
        );
    }

    #[test]
    fn test_out_of_range_longitude() {
        assert_eq!(
            Coordinates::new(0.0, -180.5),
            Err(CoreError::InvalidLongitude(-180.5))
        );
    }

    #[test]
    fn test_out_of_range_elevation() {
        assert_eq!(
            Coordinates::with_elevation(0.0, 0.0, 10000.5),
            Err(CoreError::InvalidElevation(10000.5))
        );
        assert_eq!(
            Coordinates::with_elevation(0.0, 0.0, -501.0),
            Err(CoreError::InvalidElevation(-501.0))
        );
    }

    #[test]
    fn test_nan_rejected() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::NAN).is_err());
        assert!(Coordinates::with_elevation(0.0, 0.0, f64::NAN).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let original = Coordinates::with_elevation(21.4225, 39.8262, 277.0).unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let back: Coordinates = serde_json::from_str(&json).unwrap();
        assert_eq!(original, back);
    }
}
