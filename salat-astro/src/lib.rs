//! Solar ephemeris for prayer-time calculation.
//!
//! Implements the Jean Meeus solar model (Astronomical Algorithms, 2nd ed.)
//! with the coefficients fixed as published:
//!
//! - [`meeus`]: the raw series — mean longitudes, equation of center,
//!   obliquity, sidereal time, the four-term nutation abbreviation and the
//!   altitude formula.
//! - [`coordinates`]: [`SolarCoordinates`], the sun's declination, right
//!   ascension and apparent sidereal time for a Julian Day.
//! - [`solar_day`]: [`SolarDay`], the transit/sunrise/sunset solver with
//!   three-point interpolation across days D-1/D/D+1 (Meeus p. 102-103),
//!   plus the hour-angle and Asr shadow-geometry queries.
//!
//! Quantities that depend on an altitude the sun never reaches come back as
//! NaN; callers decide whether that is an error or a fallback trigger.

pub mod coordinates;
pub mod meeus;
pub mod solar_day;

pub use coordinates::SolarCoordinates;
pub use solar_day::SolarDay;
