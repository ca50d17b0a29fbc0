//! Transit, sunrise/sunset and hour-angle solver for one civil day.

use chrono::{Datelike, NaiveDate};
use salat_core::interpolate::{interpolate, interpolate_angles};
use salat_core::julian::julian_day;
use salat_core::math::{
    acos_deg, atan_deg, cos_deg, quadrant_shift, sin_deg, tan_deg, unwind_angle,
};
use salat_core::Coordinates;

use crate::meeus;
use crate::SolarCoordinates;

/// Standard depression of the solar disk at rise/set: refraction plus
/// semidiameter, 50 arcminutes.
const SOLAR_DEPRESSION: f64 = 50.0 / 60.0;

/// Additional horizon dip per square-root meter of observer elevation.
const ELEVATION_DIP: f64 = 0.0347;

/// Sidereal advance of the Greenwich meridian per day fraction (Meeus p. 103).
const SIDEREAL_RATE: f64 = 360.985647;

/// The sun's path over one civil date as seen by one observer.
///
/// Construction evaluates [`SolarCoordinates`] for days D-1, D and D+1 and
/// solves the corrected transit and the rise/set hour angles (Meeus p. 102).
/// All results are decimal UTC hours relative to midnight of the given date;
/// they may fall slightly outside [0, 24) near the date line. A result is NaN
/// when the sun never reaches the requested altitude on that date.
#[derive(Debug, Clone, Copy)]
pub struct SolarDay {
    observer: Coordinates,
    solar: SolarCoordinates,
    prev_solar: SolarCoordinates,
    next_solar: SolarCoordinates,
    approx_transit: f64,
    transit: f64,
    sunrise: f64,
    sunset: f64,
}

impl SolarDay {
    pub fn new(date: NaiveDate, observer: Coordinates) -> Self {
        let jd = julian_day(date.year(), date.month(), date.day(), 0.0);
        let solar = SolarCoordinates::new(jd);
        let prev_solar = SolarCoordinates::new(jd - 1.0);
        let next_solar = SolarCoordinates::new(jd + 1.0);

        let approx_transit = meeus::approximate_transit(
            observer.longitude,
            solar.apparent_sidereal_time,
            solar.right_ascension,
        );

        let mut day = Self {
            observer,
            solar,
            prev_solar,
            next_solar,
            approx_transit,
            transit: f64::NAN,
            sunrise: f64::NAN,
            sunset: f64::NAN,
        };
        day.transit = day.corrected_transit();

        let horizon = -day.rise_set_depression();
        day.sunrise = day.corrected_hour_angle(horizon, false);
        day.sunset = day.corrected_hour_angle(horizon, true);
        day
    }

    /// Corrected solar transit (Dhuhr) in decimal UTC hours.
    pub fn transit(&self) -> f64 {
        self.transit
    }

    /// Sunrise in decimal UTC hours; NaN on polar night/day.
    pub fn sunrise(&self) -> f64 {
        self.sunrise
    }

    /// Sunset in decimal UTC hours; NaN on polar night/day.
    pub fn sunset(&self) -> f64 {
        self.sunset
    }

    /// Today's solar declination in degrees.
    pub fn declination(&self) -> f64 {
        self.solar.declination
    }

    /// Depression angle used for sunrise/sunset, in degrees below the horizon.
    pub fn rise_set_depression(&self) -> f64 {
        SOLAR_DEPRESSION + ELEVATION_DIP * self.observer.elevation.max(0.0).sqrt()
    }

    /// Time the sun reaches `angle` degrees of altitude (negative below the
    /// horizon), before or after transit, in decimal UTC hours.
    ///
    /// NaN when the sun never reaches that altitude on this date.
    pub fn hour_angle(&self, angle: f64, after_transit: bool) -> f64 {
        self.corrected_hour_angle(angle, after_transit)
    }

    /// Afternoon time at which an object's shadow equals `shadow_length`
    /// times its height plus the noon shadow (Asr geometry).
    pub fn afternoon(&self, shadow_length: f64) -> f64 {
        let tangent = (self.observer.latitude - self.solar.declination).abs();
        let inverse = shadow_length + tan_deg(tangent);
        let angle = atan_deg(1.0 / inverse);
        self.hour_angle(angle, true)
    }

    // Meeus p. 102: refine the approximate transit with the interpolated
    // right ascension and the sidereal advance over the day fraction.
    fn corrected_transit(&self) -> f64 {
        let longitude_west = -self.observer.longitude;
        let m0 = self.approx_transit;

        let theta = unwind_angle(self.solar.apparent_sidereal_time + SIDEREAL_RATE * m0);
        let alpha = unwind_angle(interpolate_angles(
            self.solar.right_ascension,
            self.prev_solar.right_ascension,
            self.next_solar.right_ascension,
            m0,
        ));
        let local_hour_angle = quadrant_shift(theta - longitude_west - alpha);
        (m0 + local_hour_angle / -360.0) * 24.0
    }

    fn corrected_hour_angle(&self, angle: f64, after_transit: bool) -> f64 {
        let latitude = self.observer.latitude;
        let longitude_west = -self.observer.longitude;
        let declination = self.solar.declination;

        // cos H0; outside [-1, 1] the sun never reaches the altitude and the
        // NaN from acos is the in-band signal for it.
        let term = (sin_deg(angle) - sin_deg(latitude) * sin_deg(declination))
            / (cos_deg(latitude) * cos_deg(declination));
        let h0 = acos_deg(term);

        let m = if after_transit {
            self.approx_transit + h0 / 360.0
        } else {
            self.approx_transit - h0 / 360.0
        };

        let theta = unwind_angle(self.solar.apparent_sidereal_time + SIDEREAL_RATE * m);
        let alpha = unwind_angle(interpolate_angles(
            self.solar.right_ascension,
            self.prev_solar.right_ascension,
            self.next_solar.right_ascension,
            m,
        ));
        let delta = interpolate(
            self.solar.declination,
            self.prev_solar.declination,
            self.next_solar.declination,
            m,
        );

        let local_hour_angle = theta - longitude_west - alpha;
        let altitude = meeus::altitude_of_celestial_body(latitude, delta, local_hour_angle);

        let dm = (altitude - angle)
            / (360.0 * cos_deg(delta) * cos_deg(latitude) * sin_deg(local_hour_angle));
        (m + dm) * 24.0
    }
}
