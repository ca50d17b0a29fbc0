//! Meeus solar series. Coefficients are fixed as published; angles in
//! degrees, time argument `t` in Julian centuries from J2000.0.

use salat_core::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD};
use salat_core::math::{asin_deg, cos_deg, normalize_to_unit, sin_deg, unwind_angle};

pub fn mean_solar_longitude(t: f64) -> f64 {
    let term1 = 280.4664567;
    let term2 = 36000.76983 * t;
    let term3 = 0.0003032 * t * t;
    unwind_angle(term1 + term2 + term3)
}

pub fn mean_lunar_longitude(t: f64) -> f64 {
    let term1 = 218.3165;
    let term2 = 481267.8813 * t;
    unwind_angle(term1 + term2)
}

pub fn ascending_lunar_node_longitude(t: f64) -> f64 {
    let term1 = 125.04452;
    let term2 = 1934.136261 * t;
    let term3 = 0.0020708 * t * t;
    let term4 = t * t * t / 450000.0;
    unwind_angle(term1 - term2 + term3 + term4)
}

pub fn mean_solar_anomaly(t: f64) -> f64 {
    let term1 = 357.52911;
    let term2 = 35999.05029 * t;
    let term3 = 0.0001537 * t * t;
    unwind_angle(term1 + term2 - term3)
}

pub fn solar_equation_of_center(t: f64, mean_anomaly: f64) -> f64 {
    let m = mean_anomaly;
    (1.914602 - 0.004817 * t - 0.000014 * t * t) * sin_deg(m)
        + (0.019993 - 0.000101 * t) * sin_deg(2.0 * m)
        + 0.000289 * sin_deg(3.0 * m)
}

pub fn apparent_solar_longitude(t: f64, mean_longitude: f64) -> f64 {
    let longitude = mean_longitude + solar_equation_of_center(t, mean_solar_anomaly(t));
    let omega = 125.04 - 1934.136 * t;
    unwind_angle(longitude - 0.00569 - 0.00478 * sin_deg(omega))
}

pub fn mean_obliquity_of_the_ecliptic(t: f64) -> f64 {
    let term1 = 23.439291;
    let term2 = 0.013004167 * t;
    let term3 = 0.0000001639 * t * t;
    let term4 = 0.0000005036 * t * t * t;
    term1 - term2 - term3 + term4
}

pub fn apparent_obliquity_of_the_ecliptic(t: f64, mean_obliquity: f64) -> f64 {
    let omega = 125.04 - 1934.136 * t;
    mean_obliquity + 0.00256 * cos_deg(omega)
}

/// Mean sidereal time at Greenwich, the full four-term expression.
pub fn mean_sidereal_time(t: f64) -> f64 {
    let jd = t * DAYS_PER_JULIAN_CENTURY + J2000_JD;
    let term1 = 280.46061837;
    let term2 = 360.98564736629 * (jd - J2000_JD);
    let term3 = 0.000387933 * t * t;
    let term4 = t * t * t / 38710000.0;
    unwind_angle(term1 + term2 + term3 - term4)
}

/// Nutation in longitude, four-term abbreviation, in degrees.
pub fn nutation_in_longitude(solar_longitude: f64, lunar_longitude: f64, ascending_node: f64) -> f64 {
    let term1 = (-17.2 / 3600.0) * sin_deg(ascending_node);
    let term2 = (1.32 / 3600.0) * sin_deg(2.0 * solar_longitude);
    let term3 = (0.23 / 3600.0) * sin_deg(2.0 * lunar_longitude);
    let term4 = (0.21 / 3600.0) * sin_deg(2.0 * ascending_node);
    term1 - term2 - term3 + term4
}

/// Nutation in obliquity, four-term abbreviation, in degrees.
pub fn nutation_in_obliquity(solar_longitude: f64, lunar_longitude: f64, ascending_node: f64) -> f64 {
    let term1 = (9.2 / 3600.0) * cos_deg(ascending_node);
    let term2 = (0.57 / 3600.0) * cos_deg(2.0 * solar_longitude);
    let term3 = (0.10 / 3600.0) * cos_deg(2.0 * lunar_longitude);
    let term4 = (0.09 / 3600.0) * cos_deg(2.0 * ascending_node);
    term1 + term2 + term3 - term4
}

/// Altitude of a celestial body above the horizon.
///
/// `observer_latitude` and `declination` in degrees, `local_hour_angle` in
/// degrees west of the meridian.
pub fn altitude_of_celestial_body(
    observer_latitude: f64,
    declination: f64,
    local_hour_angle: f64,
) -> f64 {
    asin_deg(
        sin_deg(observer_latitude) * sin_deg(declination)
            + cos_deg(observer_latitude) * cos_deg(declination) * cos_deg(local_hour_angle),
    )
}

/// Approximate transit of the sun as a fraction of the day, [0, 1).
///
/// `longitude` positive east; the formula works in west-positive longitude
/// internally, as Meeus does.
pub fn approximate_transit(longitude: f64, sidereal_time: f64, right_ascension: f64) -> f64 {
    let longitude_west = -longitude;
    normalize_to_unit((right_ascension + longitude_west - sidereal_time) / 360.0)
}
