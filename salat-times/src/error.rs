use crate::settings::Prayer;
use chrono::NaiveDate;
use salat_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] CoreError),

    #[error("date arithmetic overflow near {0}")]
    DateRange(NaiveDate),

    #[error("polar condition: {prayer} cannot be derived and no fallback rule is active")]
    PolarUnresolved { prayer: Prayer },

    #[error("sunnah times cannot be derived")]
    SunnahUnavailable(#[source] Box<Error>),
}

pub type Result<T> = std::result::Result<T, Error>;

/// How serious a diagnostic is.
///
/// Gap and day-length violations are [`Severity::Error`] at moderate
/// latitudes, where they indicate a real defect, and [`Severity::Warning`]
/// at high and extreme latitudes, where the geometry genuinely degrades.
/// Neither fails the calculation; strict callers can reject on `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Warning,
    Error,
}

/// Diagnostics attached to an otherwise valid result.
///
/// Warnings never mutate the returned times; they describe how the times
/// were obtained or why they look unusual.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Warning {
    #[error("{prayer} was derived from a fallback; the sun never reaches the configured angle, or the angle result fell outside the safe night window")]
    FallbackApplied { prayer: Prayer },

    #[error("the sun never crosses the horizon on this date; sunrise and sunset are approximated at the transit")]
    PolarApproximation,

    #[error("the maghrib angle produced no time between sunset and isha; sunset was used")]
    MaghribFallback,

    #[error("{earlier} does not precede {later}")]
    OutOfOrder { earlier: Prayer, later: Prayer },

    #[error("{from}-{to} gap of {minutes} min exceeds the {limit} min plausibility limit")]
    ExcessiveGap {
        from: Prayer,
        to: Prayer,
        minutes: i64,
        limit: i64,
        severity: Severity,
    },

    #[error("day length of {minutes} min is implausible at this latitude")]
    AbnormalDayLength { minutes: i64, severity: Severity },
}

impl Warning {
    /// Severity of this diagnostic; plain warnings report [`Severity::Warning`].
    pub fn severity(&self) -> Severity {
        match self {
            Warning::ExcessiveGap { severity, .. } | Warning::AbnormalDayLength { severity, .. } => {
                *severity
            }
            _ => Severity::Warning,
        }
    }
}
