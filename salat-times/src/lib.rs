//! Prayer-time calculation for any location, date and convention.
//!
//! Computes the five daily prayers plus sunrise and the derived Sunnah times
//! from a Meeus solar ephemeris ([`salat_astro`]), a closed registry of
//! calculation methods, Asr shadow geometry and high-latitude fallbacks.
//! Everything is a pure function of its inputs: no globals, no caches, no
//! mutable shared state. Results are UTC instants at whole-minute precision.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`method`] | [`Method`] registry and parameter tuples |
//! | [`settings`] | [`Settings`], [`AsrSchool`], user [`Adjustments`] |
//! | [`high_latitude`] | [`HighLatitudeRule`] night-fraction fallbacks |
//! | [`moonsighting`] | Seasonal twilight rule of the Moonsighting Committee |
//! | [`times`] | [`PrayerTimes`] orchestrator |
//! | [`sunnah`] | [`SunnahTimes`] night thirds and Duha window |
//! | [`validate`] | Plausibility diagnostics |
//! | [`error`] | [`Error`], [`Warning`], [`Severity`] |
//!
//! # Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use salat_times::{calculate, Method, Settings};
//!
//! let settings = Settings::new(Method::MuslimWorldLeague);
//! let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
//!
//! // Makkah
//! let times = calculate(date, 21.4225, 39.8262, 0.0, &settings)?;
//! assert!(times.fajr < times.sunrise);
//! assert!(times.maghrib < times.isha);
//! # Ok::<(), salat_times::Error>(())
//! ```
//!
//! # Failure behavior
//!
//! Input validation fails fast with [`Error::InvalidInput`] before any solar
//! computation. Where the sun never reaches a configured angle, the active
//! [`HighLatitudeRule`] (or the Moonsighting seasonal rule) substitutes a
//! fallback and the result carries a [`Warning`]; with the rule set to
//! `None` the calculation returns [`Error::PolarUnresolved`] instead.

pub mod error;
pub mod high_latitude;
pub mod method;
pub mod moonsighting;
pub mod settings;
pub mod sunnah;
pub mod times;
pub mod validate;

pub use error::{Error, Result, Severity, Warning};
pub use high_latitude::HighLatitudeRule;
pub use method::{
    AngleOrInterval, MaghribRule, Method, MethodOffsets, MidnightMode, Overrides, Parameters,
    Shafaq,
};
pub use settings::{Adjustments, AsrSchool, Prayer, Settings};
pub use sunnah::SunnahTimes;
pub use times::PrayerTimes;

pub use salat_core::{Coordinates, CoreError};

use chrono::NaiveDate;

/// Computes the prayer times for a date and a raw observer position.
///
/// Validates the coordinates, then delegates to [`PrayerTimes::calculate`].
/// `date` is interpreted at UTC midnight; elevation is in meters.
pub fn calculate(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    settings: &Settings,
) -> Result<PrayerTimes> {
    let coordinates = Coordinates::with_elevation(latitude, longitude, elevation)?;
    PrayerTimes::calculate(date, coordinates, settings)
}
