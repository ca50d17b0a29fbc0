//! The prayer-time orchestrator.
//!
//! [`PrayerTimes::calculate`] composes the solar-day solver with the method
//! registry and the high-latitude fallbacks:
//!
//! 1. resolve method parameters and apply caller overrides;
//! 2. solve the solar day for the date and the day after (the fallback night
//!    runs from today's sunset to tomorrow's sunrise);
//! 3. derive the six instants, substituting night-fraction or seasonal
//!    fallbacks where the twilight angles fail;
//! 4. apply built-in and caller adjustments, round to the nearest minute and
//!    attach validation diagnostics.
//!
//! Everything is UTC; rendering into a local timezone is the caller's
//! concern.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use log::{debug, warn};

use salat_astro::SolarDay;
use salat_core::julian::day_of_year;
use salat_core::Coordinates;

use crate::error::{Error, Result, Warning};
use crate::high_latitude::night_portions;
use crate::method::{AngleOrInterval, MaghribRule, Method, Parameters};
use crate::moonsighting;
use crate::settings::{Prayer, Settings};
use crate::validate;

/// Latitude at and above which the Moonsighting method switches from
/// twilight angles to the one-seventh-of-the-night rule.
const MOONSIGHTING_NIGHT_SEVENTH_LATITUDE: f64 = 55.0;

/// The six daily prayer times in UTC, rounded to whole minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerTimes {
    pub fajr: DateTime<Utc>,
    pub sunrise: DateTime<Utc>,
    pub dhuhr: DateTime<Utc>,
    pub asr: DateTime<Utc>,
    pub maghrib: DateTime<Utc>,
    pub isha: DateTime<Utc>,
    /// Diagnostics gathered while computing; they describe the result but
    /// never alter it.
    pub warnings: Vec<Warning>,
    pub(crate) raw: RawTimes,
    date: NaiveDate,
    coordinates: Coordinates,
}

/// Unrounded instants, kept for derivations that the rounding rule would
/// otherwise bias (Sunnah times, validation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RawTimes {
    pub fajr: DateTime<Utc>,
    pub sunrise: DateTime<Utc>,
    pub dhuhr: DateTime<Utc>,
    pub asr: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub maghrib: DateTime<Utc>,
    pub isha: DateTime<Utc>,
}

/// Sunrise/sunset resolved for one date, with the polar rescue applied when
/// the sun never crosses the horizon.
#[derive(Debug, Clone, Copy)]
struct Horizon {
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    rescued: bool,
}

impl PrayerTimes {
    /// Computes the times for a civil date, interpreted at UTC midnight.
    pub fn calculate(
        date: NaiveDate,
        coordinates: Coordinates,
        settings: &Settings,
    ) -> Result<Self> {
        let params = settings.method.parameters().with_overrides(&settings.overrides);
        let mut warnings = Vec::new();

        let solar = SolarDay::new(date, coordinates);
        let dhuhr = instant(date, solar.transit()).ok_or(Error::PolarUnresolved {
            prayer: Prayer::Dhuhr,
        })?;
        let horizon = resolve_horizon(date, &solar, dhuhr, coordinates);
        if horizon.rescued {
            warn!(
                "sun never crosses the horizon at ({}, {}) on {date}; approximating sunrise/sunset",
                coordinates.latitude, coordinates.longitude
            );
            warnings.push(Warning::PolarApproximation);
        }

        // The fallback night runs to tomorrow's sunrise.
        let tomorrow = date.succ_opt().ok_or(Error::DateRange(date))?;
        let tomorrow_solar = SolarDay::new(tomorrow, coordinates);
        let tomorrow_dhuhr =
            instant(tomorrow, tomorrow_solar.transit()).ok_or(Error::PolarUnresolved {
                prayer: Prayer::Dhuhr,
            })?;
        let tomorrow_horizon = resolve_horizon(tomorrow, &tomorrow_solar, tomorrow_dhuhr, coordinates);
        let night_seconds = (tomorrow_horizon.sunrise - horizon.sunset).num_seconds() as f64;

        let fajr = fajr_time(
            date,
            &solar,
            &params,
            settings,
            coordinates,
            &horizon,
            night_seconds,
            &mut warnings,
        )?;

        let asr = instant(
            date,
            solar.afternoon(settings.asr_school.shadow_length()),
        )
        .ok_or(Error::PolarUnresolved { prayer: Prayer::Asr })?;

        let isha = isha_time(
            date,
            &solar,
            &params,
            settings,
            coordinates,
            &horizon,
            night_seconds,
            &mut warnings,
        )?;

        let maghrib = maghrib_time(date, &solar, &params, &horizon, isha, &mut warnings);

        let offsets = &params.offsets;
        let user = &settings.adjustments;
        let raw = RawTimes {
            fajr: shift(fajr, offsets.fajr, user.fajr),
            sunrise: shift(horizon.sunrise, offsets.sunrise, user.sunrise),
            dhuhr: shift(dhuhr, offsets.dhuhr, user.dhuhr),
            asr: shift(asr, offsets.asr, user.asr),
            sunset: horizon.sunset,
            maghrib: shift(maghrib, offsets.maghrib, user.maghrib),
            isha: shift(isha, offsets.isha, user.isha),
        };

        warnings.extend(validate::validate(&raw, coordinates.latitude));

        Ok(Self {
            fajr: rounded_minute(raw.fajr),
            sunrise: rounded_minute(raw.sunrise),
            dhuhr: rounded_minute(raw.dhuhr),
            asr: rounded_minute(raw.asr),
            maghrib: rounded_minute(raw.maghrib),
            isha: rounded_minute(raw.isha),
            warnings,
            raw,
            date,
            coordinates,
        })
    }

    /// The civil date these times were computed for.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The observer these times were computed for.
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// The time associated with a [`Prayer`].
    pub fn time(&self, prayer: Prayer) -> DateTime<Utc> {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }
}

fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Decimal UTC hours relative to the date's midnight, as an instant.
/// `None` carries the solver's NaN through.
fn instant(date: NaiveDate, hours: f64) -> Option<DateTime<Utc>> {
    if !hours.is_finite() {
        return None;
    }
    Some(utc_midnight(date) + Duration::seconds((hours * 3600.0).round() as i64))
}

fn seconds(value: f64) -> Duration {
    Duration::seconds(value.round() as i64)
}

fn shift(time: DateTime<Utc>, method_seconds: i32, user_minutes: i32) -> DateTime<Utc> {
    time + Duration::seconds(i64::from(method_seconds) + i64::from(user_minutes) * 60)
}

/// Rounds to the nearest whole minute; 30 seconds and above round up.
pub(crate) fn rounded_minute(time: DateTime<Utc>) -> DateTime<Utc> {
    let remainder = time.timestamp().rem_euclid(60);
    let delta = if remainder >= 30 {
        60 - remainder
    } else {
        -remainder
    };
    time + Duration::seconds(delta)
}

/// Resolves sunrise/sunset, substituting the grazing approximation on polar
/// dates: in polar night the sun culminates below the horizon, so both rise
/// and set collapse onto the transit; in polar day they sit a half-day out
/// on each side.
fn resolve_horizon(
    date: NaiveDate,
    solar: &SolarDay,
    transit: DateTime<Utc>,
    coordinates: Coordinates,
) -> Horizon {
    match (instant(date, solar.sunrise()), instant(date, solar.sunset())) {
        (Some(sunrise), Some(sunset)) => Horizon {
            sunrise,
            sunset,
            rescued: false,
        },
        _ => {
            let noon_altitude = 90.0 - (coordinates.latitude - solar.declination()).abs();
            let polar_night = noon_altitude < -solar.rise_set_depression();
            if polar_night {
                Horizon {
                    sunrise: transit,
                    sunset: transit,
                    rescued: true,
                }
            } else {
                Horizon {
                    sunrise: transit - Duration::hours(12),
                    sunset: transit + Duration::hours(12),
                    rescued: true,
                }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn fajr_time(
    date: NaiveDate,
    solar: &SolarDay,
    params: &Parameters,
    settings: &Settings,
    coordinates: Coordinates,
    horizon: &Horizon,
    night_seconds: f64,
    warnings: &mut Vec<Warning>,
) -> Result<DateTime<Utc>> {
    let latitude = coordinates.latitude;
    let moonsighting = settings.method == Method::Moonsighting;

    // At |lat| >= 55 the Moonsighting committee abandons angles outright.
    if moonsighting && latitude.abs() >= MOONSIGHTING_NIGHT_SEVENTH_LATITUDE {
        return Ok(horizon.sunrise - seconds(night_seconds / 7.0));
    }

    // On a rescued horizon the angle crossing, even where it exists, is not
    // anchored to a real sunrise; the night-fraction rule takes over.
    let computed = if horizon.rescued {
        None
    } else {
        instant(date, solar.hour_angle(-params.fajr_angle, false))
    };

    let safe = if moonsighting {
        let doy = day_of_year(date.year(), date.month(), date.day());
        let offset = moonsighting::season_adjusted_morning_twilight(latitude, doy, date.year());
        Some(horizon.sunrise - seconds(offset * 60.0))
    } else {
        night_portions(settings.high_latitude_rule, params)
            .map(|portions| horizon.sunrise - seconds(night_seconds * portions.fajr))
    };

    match (computed, safe) {
        (Some(time), Some(earliest)) if time < earliest => {
            debug!("fajr clamped to the night-fraction fallback");
            warnings.push(Warning::FallbackApplied {
                prayer: Prayer::Fajr,
            });
            Ok(earliest)
        }
        (Some(time), _) => Ok(time),
        (None, Some(fallback)) => {
            warnings.push(Warning::FallbackApplied {
                prayer: Prayer::Fajr,
            });
            Ok(fallback)
        }
        (None, None) => Err(Error::PolarUnresolved {
            prayer: Prayer::Fajr,
        }),
    }
}

#[allow(clippy::too_many_arguments)]
fn isha_time(
    date: NaiveDate,
    solar: &SolarDay,
    params: &Parameters,
    settings: &Settings,
    coordinates: Coordinates,
    horizon: &Horizon,
    night_seconds: f64,
    warnings: &mut Vec<Warning>,
) -> Result<DateTime<Utc>> {
    let angle = match params.isha {
        // Fixed offset from sunset; the fallback machinery never applies.
        AngleOrInterval::MinutesAfterSunset(minutes) => {
            return Ok(horizon.sunset + seconds(minutes * 60.0));
        }
        AngleOrInterval::Degrees(angle) => angle,
    };

    let latitude = coordinates.latitude;
    let moonsighting = settings.method == Method::Moonsighting;

    if moonsighting && latitude.abs() >= MOONSIGHTING_NIGHT_SEVENTH_LATITUDE {
        return Ok(horizon.sunset + seconds(night_seconds / 7.0));
    }

    let computed = if horizon.rescued {
        None
    } else {
        instant(date, solar.hour_angle(-angle, true))
    };

    let safe = if moonsighting {
        let doy = day_of_year(date.year(), date.month(), date.day());
        let offset = moonsighting::season_adjusted_evening_twilight(
            latitude,
            doy,
            date.year(),
            params.shafaq,
        );
        Some(horizon.sunset + seconds(offset * 60.0))
    } else {
        night_portions(settings.high_latitude_rule, params)
            .map(|portions| horizon.sunset + seconds(night_seconds * portions.isha))
    };

    match (computed, safe) {
        (Some(time), Some(latest)) if time > latest => {
            debug!("isha clamped to the night-fraction fallback");
            warnings.push(Warning::FallbackApplied {
                prayer: Prayer::Isha,
            });
            Ok(latest)
        }
        (Some(time), _) => Ok(time),
        (None, Some(fallback)) => {
            warnings.push(Warning::FallbackApplied {
                prayer: Prayer::Isha,
            });
            Ok(fallback)
        }
        (None, None) => Err(Error::PolarUnresolved {
            prayer: Prayer::Isha,
        }),
    }
}

fn maghrib_time(
    date: NaiveDate,
    solar: &SolarDay,
    params: &Parameters,
    horizon: &Horizon,
    isha: DateTime<Utc>,
    warnings: &mut Vec<Warning>,
) -> DateTime<Utc> {
    match params.maghrib {
        MaghribRule::AtSunset => horizon.sunset,
        MaghribRule::MinutesAfterSunset(minutes) => horizon.sunset + seconds(minutes * 60.0),
        MaghribRule::Degrees(angle) => {
            let computed = if horizon.rescued {
                None
            } else {
                instant(date, solar.hour_angle(-angle, true))
            };
            // The angle time must fall between sunset and isha to be usable.
            match computed {
                Some(time) if horizon.sunset <= time && time < isha => time,
                _ => {
                    warnings.push(Warning::MaghribFallback);
                    horizon.sunset
                }
            }
        }
    }
}
