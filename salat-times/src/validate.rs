//! Plausibility checks on a computed day.
//!
//! The checks are heuristic: ordering, twilight-gap bounds and day-length
//! sanity, with thresholds widening by latitude band. Violations never
//! change the returned times; they surface as [`Warning`]s whose severity
//! tells strict callers what to reject.

use crate::error::{Severity, Warning};
use crate::settings::Prayer;
use crate::times::{PrayerTimes, RawTimes};

/// Re-runs the plausibility checks on a computed day.
///
/// [`PrayerTimes::calculate`] already attaches these diagnostics; this is for
/// callers that post-process the times and want to re-check them.
pub fn check(times: &PrayerTimes) -> Vec<Warning> {
    validate(&times.raw, times.coordinates().latitude)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LatitudeBand {
    Moderate,
    High,
    Extreme,
}

fn band(latitude: f64) -> LatitudeBand {
    let lat = latitude.abs();
    if lat < 48.0 {
        LatitudeBand::Moderate
    } else if lat < 60.0 {
        LatitudeBand::High
    } else {
        LatitudeBand::Extreme
    }
}

pub(crate) fn validate(raw: &RawTimes, latitude: f64) -> Vec<Warning> {
    let mut warnings = Vec::new();
    let band = band(latitude);

    let ordered = [
        (Prayer::Fajr, raw.fajr, Prayer::Sunrise, raw.sunrise),
        (Prayer::Sunrise, raw.sunrise, Prayer::Dhuhr, raw.dhuhr),
        (Prayer::Dhuhr, raw.dhuhr, Prayer::Asr, raw.asr),
        (Prayer::Asr, raw.asr, Prayer::Maghrib, raw.maghrib),
        (Prayer::Maghrib, raw.maghrib, Prayer::Isha, raw.isha),
    ];
    for (earlier, a, later, b) in ordered {
        if a >= b {
            warnings.push(Warning::OutOfOrder { earlier, later });
        }
    }

    // Gap violations indicate a real defect at moderate latitudes; closer to
    // the poles the geometry genuinely stretches and they only advise.
    let gap_severity = match band {
        LatitudeBand::Moderate => Severity::Error,
        LatitudeBand::High | LatitudeBand::Extreme => Severity::Warning,
    };

    let fajr_limit = match band {
        LatitudeBand::Moderate => 180,
        LatitudeBand::High => 240,
        LatitudeBand::Extreme => 300,
    };
    let fajr_gap = (raw.sunrise - raw.fajr).num_minutes();
    if fajr_gap > fajr_limit {
        warnings.push(Warning::ExcessiveGap {
            from: Prayer::Fajr,
            to: Prayer::Sunrise,
            minutes: fajr_gap,
            limit: fajr_limit,
            severity: gap_severity,
        });
    }

    let isha_limit = match band {
        LatitudeBand::Moderate => 240,
        LatitudeBand::High => 300,
        LatitudeBand::Extreme => 360,
    };
    let isha_gap = (raw.isha - raw.maghrib).num_minutes();
    if isha_gap > isha_limit {
        warnings.push(Warning::ExcessiveGap {
            from: Prayer::Maghrib,
            to: Prayer::Isha,
            minutes: isha_gap,
            limit: isha_limit,
            severity: gap_severity,
        });
    }

    let day_minutes = (raw.sunset - raw.sunrise).num_minutes();
    let (min_day, max_day) = if band == LatitudeBand::Extreme {
        (2 * 60, 22 * 60)
    } else {
        (4 * 60, 20 * 60)
    };
    if day_minutes < min_day || day_minutes > max_day {
        warnings.push(Warning::AbnormalDayLength {
            minutes: day_minutes,
            severity: gap_severity,
        });
    }

    warnings
}
