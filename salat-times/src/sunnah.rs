//! Sunnah observance times derived from a day's prayer times.

use chrono::{DateTime, Duration, Utc};

use crate::error::{Error, Result};
use crate::method::MidnightMode;
use crate::settings::Settings;
use crate::times::{rounded_minute, PrayerTimes};

/// Voluntary-worship times bracketing the night and the morning.
///
/// The night used for the thirds runs from today's Maghrib to tomorrow's
/// Fajr. `midnight` honors the method's midnight mode instead: Standard
/// halves sunset-to-sunrise, Jafari halves sunset-to-Fajr.
#[derive(Debug, Clone, PartialEq)]
pub struct SunnahTimes {
    pub first_third_of_night: DateTime<Utc>,
    pub middle_of_night: DateTime<Utc>,
    pub last_third_of_night: DateTime<Utc>,
    pub midnight: DateTime<Utc>,
    pub duha_start: DateTime<Utc>,
    pub duha_end: DateTime<Utc>,
    /// Length of the Maghrib-to-next-Fajr night, to the nearest minute.
    pub night_duration_minutes: i64,
}

impl SunnahTimes {
    /// Derives the Sunnah times from a computed day.
    ///
    /// Recomputes the following day with the same settings for tomorrow's
    /// Fajr and sunrise; when that day cannot be computed (polar condition
    /// with the fallback disabled), the derivation is unavailable.
    pub fn from_prayer_times(times: &PrayerTimes, settings: &Settings) -> Result<Self> {
        let date = times.date();
        let tomorrow = date.succ_opt().ok_or(Error::DateRange(date))?;
        let tomorrow_times = PrayerTimes::calculate(tomorrow, times.coordinates(), settings)
            .map_err(|e| Error::SunnahUnavailable(Box::new(e)))?;

        let maghrib = times.raw.maghrib;
        let sunset = times.raw.sunset;
        let next_fajr = tomorrow_times.raw.fajr;
        let next_sunrise = tomorrow_times.raw.sunrise;

        let night = next_fajr - maghrib;
        let night_seconds = night.num_seconds();

        let params = settings.method.parameters().with_overrides(&settings.overrides);
        let midnight = match params.midnight {
            MidnightMode::Standard => sunset + Duration::seconds((next_sunrise - sunset).num_seconds() / 2),
            MidnightMode::Jafari => sunset + Duration::seconds((next_fajr - sunset).num_seconds() / 2),
        };

        Ok(Self {
            first_third_of_night: rounded_minute(maghrib + Duration::seconds(night_seconds / 3)),
            middle_of_night: rounded_minute(maghrib + Duration::seconds(night_seconds / 2)),
            last_third_of_night: rounded_minute(maghrib + Duration::seconds(night_seconds * 2 / 3)),
            midnight: rounded_minute(midnight),
            duha_start: rounded_minute(times.raw.sunrise + Duration::minutes(15)),
            duha_end: rounded_minute(times.raw.dhuhr - Duration::minutes(15)),
            night_duration_minutes: (night_seconds + 30).div_euclid(60),
        })
    }
}
