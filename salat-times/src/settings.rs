//! Calculation settings supplied by the caller.

use std::fmt;

use crate::high_latitude::HighLatitudeRule;
use crate::method::{Method, Overrides};

/// One of the six computed times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Prayer::Fajr => "fajr",
            Prayer::Sunrise => "sunrise",
            Prayer::Dhuhr => "dhuhr",
            Prayer::Asr => "asr",
            Prayer::Maghrib => "maghrib",
            Prayer::Isha => "isha",
        };
        f.write_str(name)
    }
}

/// Juristic school for the Asr shadow factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AsrSchool {
    /// Shadow equals the object's height (factor 1).
    #[default]
    Standard,
    /// Shadow equals twice the object's height (factor 2).
    Hanafi,
}

impl AsrSchool {
    pub fn shadow_length(self) -> f64 {
        match self {
            AsrSchool::Standard => 1.0,
            AsrSchool::Hanafi => 2.0,
        }
    }
}

/// Caller-supplied per-prayer offsets in whole minutes.
///
/// Applied additively after the method's built-in offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adjustments {
    pub fajr: i32,
    pub sunrise: i32,
    pub dhuhr: i32,
    pub asr: i32,
    pub maghrib: i32,
    pub isha: i32,
}

/// Everything the calculation needs besides the date and the observer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub method: Method,
    pub asr_school: AsrSchool,
    pub high_latitude_rule: HighLatitudeRule,
    pub overrides: Overrides,
    pub adjustments: Adjustments,
}

impl Settings {
    /// Settings for a method with every other knob at its default.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }
}
