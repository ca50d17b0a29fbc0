//! Night-fraction fallbacks for latitudes where twilight angles fail.
//!
//! When the sun never reaches a method's Fajr/Isha angle (or the result
//! drifts outside the plausible night window), the time is re-derived from a
//! fraction of the night, `N = next-day sunrise - same-day sunset`:
//! Fajr = sunrise - portion, Isha = sunset + portion.

use crate::method::Parameters;

/// Strategy for deriving Fajr/Isha when the twilight angle is unreachable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighLatitudeRule {
    /// No fallback; an unreachable angle is an error.
    None,
    /// Half of the night on each side.
    #[default]
    NightMiddle,
    /// One seventh of the night.
    OneSeventh,
    /// The twilight angle's share of the night, `angle / 60` per hour of night.
    AngleBased,
}

/// Fractions of the night bounding Fajr and Isha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NightPortions {
    pub fajr: f64,
    pub isha: f64,
}

/// Night fractions for a rule, or `None` when the rule disables fallbacks.
pub(crate) fn night_portions(rule: HighLatitudeRule, params: &Parameters) -> Option<NightPortions> {
    match rule {
        HighLatitudeRule::None => None,
        HighLatitudeRule::NightMiddle => Some(NightPortions {
            fajr: 1.0 / 2.0,
            isha: 1.0 / 2.0,
        }),
        HighLatitudeRule::OneSeventh => Some(NightPortions {
            fajr: 1.0 / 7.0,
            isha: 1.0 / 7.0,
        }),
        HighLatitudeRule::AngleBased => Some(NightPortions {
            fajr: params.fajr_angle / 60.0,
            // Interval-based isha never consults its portion; zero keeps the
            // arithmetic inert.
            isha: params.isha_angle().unwrap_or(0.0) / 60.0,
        }),
    }
}
