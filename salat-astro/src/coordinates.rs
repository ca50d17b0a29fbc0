use crate::meeus;
use salat_core::julian::julian_century;
use salat_core::math::{asin_deg, atan2_deg, cos_deg, sin_deg, unwind_angle};

/// Equatorial coordinates of the sun for a Julian Day.
///
/// Derived purely from the Julian Day; there is no observer dependency.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarCoordinates {
    /// Declination in degrees.
    pub declination: f64,
    /// Right ascension in degrees, [0, 360).
    pub right_ascension: f64,
    /// Apparent sidereal time at Greenwich in degrees.
    pub apparent_sidereal_time: f64,
}

impl SolarCoordinates {
    pub fn new(julian_day: f64) -> Self {
        let t = julian_century(julian_day);

        let l0 = meeus::mean_solar_longitude(t);
        let lp = meeus::mean_lunar_longitude(t);
        let omega = meeus::ascending_lunar_node_longitude(t);
        let lambda = meeus::apparent_solar_longitude(t, l0);

        let theta0 = meeus::mean_sidereal_time(t);
        let dpsi = meeus::nutation_in_longitude(l0, lp, omega);
        let deps = meeus::nutation_in_obliquity(l0, lp, omega);

        let eps0 = meeus::mean_obliquity_of_the_ecliptic(t);
        let eps_apparent = meeus::apparent_obliquity_of_the_ecliptic(t, eps0);

        // Meeus eq. 25.6/25.7 with the apparent obliquity and longitude.
        let declination = asin_deg(sin_deg(eps_apparent) * sin_deg(lambda));
        let right_ascension = unwind_angle(atan2_deg(
            cos_deg(eps_apparent) * sin_deg(lambda),
            cos_deg(lambda),
        ));

        // Apparent sidereal time: mean value corrected by the equation of the
        // equinoxes, dPsi * cos(eps0 + dEps).
        let apparent_sidereal_time = theta0 + dpsi * cos_deg(eps0 + deps);

        Self {
            declination,
            right_ascension,
            apparent_sidereal_time,
        }
    }
}
