//! The calculation-method registry.
//!
//! Every supported convention is a variant of [`Method`]; the registry is the
//! exhaustive match in [`Method::parameters`], so adding a method is a
//! compile-time event, not a runtime string lookup.
//!
//! | Method | Fajr | Isha | Maghrib |
//! |--------|------|------|---------|
//! | MuslimWorldLeague | 18° | 17° | sunset + 1 min |
//! | Isna | 15° | 15° | sunset + 1 min |
//! | Egypt | 19.5° | 17.5° | sunset + 1 min |
//! | UmmAlQura | 18.5° | sunset + 90 min | sunset + 1 min |
//! | Qatar | 18° | sunset + 90 min | sunset + 1 min |
//! | Dubai | 18.2° | 18.2° | sunset + 1 min |
//! | Jakim / JakimKn | 18° | 18° | sunset + 1 min |
//! | Kemenag | 20° | 18° | sunset + 1 min |
//! | Singapore | 20° | 18° | sunset + 1 min |
//! | France12/15/18 | 12/15/18° | 12/15/18° | sunset + 1 min |
//! | Turkey | 18° | 17° | sunset + 1 min |
//! | Russia | 16° | 15° | sunset + 1 min |
//! | Moonsighting | 18° | 18° | sunset + 1 min |
//! | Tehran | 17.7° | 14° | 4.5° below horizon |
//! | Jafari | 16° | 14° | 4° below horizon |
//! | Karachi | 18° | 18° | sunset + 1 min |
//! | Custom | 18° | 17° | sunset + 1 min |
//!
//! Built-in per-prayer offsets are carried in seconds (the published values
//! use half-minute granularity, which seconds represent exactly). `JakimKn`
//! aliases `Jakim`; `Custom` starts from the MuslimWorldLeague tuple and is
//! meant to be shaped through [`Overrides`].

/// A named calculation convention. Closed set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    #[default]
    MuslimWorldLeague,
    Isna,
    Egypt,
    UmmAlQura,
    Qatar,
    Dubai,
    Jakim,
    JakimKn,
    Kemenag,
    Singapore,
    France12,
    France15,
    France18,
    Turkey,
    Russia,
    Moonsighting,
    Tehran,
    Jafari,
    Karachi,
    Custom,
}

/// Isha defined by a twilight angle or a fixed interval after sunset.
///
/// The interval is anchored on sunset, not on Maghrib; the 90-minute
/// conventions land within a minute of "Maghrib + 90" anyway because their
/// Maghrib is sunset + 1 minute.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AngleOrInterval {
    /// Degrees below the horizon.
    Degrees(f64),
    /// Minutes after sunset.
    MinutesAfterSunset(f64),
}

/// How Maghrib relates to sunset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaghribRule {
    /// Maghrib is sunset itself.
    AtSunset,
    /// Degrees below the horizon after sunset (Shia conventions).
    Degrees(f64),
    /// Minutes after sunset.
    MinutesAfterSunset(f64),
}

/// Reference interval for the middle of the night.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MidnightMode {
    /// Sunset to next-day sunrise.
    #[default]
    Standard,
    /// Sunset to next-day Fajr.
    Jafari,
}

/// Evening twilight color, consumed only by the Moonsighting seasonal
/// fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shafaq {
    #[default]
    General,
    Ahmer,
    Abyad,
}

/// Built-in per-prayer offsets in signed seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodOffsets {
    pub fajr: i32,
    pub sunrise: i32,
    pub dhuhr: i32,
    pub asr: i32,
    pub maghrib: i32,
    pub isha: i32,
}

impl MethodOffsets {
    pub const NONE: Self = Self {
        fajr: 0,
        sunrise: 0,
        dhuhr: 0,
        asr: 0,
        maghrib: 0,
        isha: 0,
    };
}

/// The parameter tuple a method resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    /// Degrees below the horizon for Fajr.
    pub fajr_angle: f64,
    pub isha: AngleOrInterval,
    pub maghrib: MaghribRule,
    pub midnight: MidnightMode,
    pub shafaq: Shafaq,
    pub offsets: MethodOffsets,
}

impl Parameters {
    /// Applies caller overrides on top of the method defaults.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(angle) = overrides.fajr_angle {
            self.fajr_angle = angle;
        }
        if let Some(isha) = overrides.isha {
            self.isha = isha;
        }
        if let Some(maghrib) = overrides.maghrib {
            self.maghrib = maghrib;
        }
        if let Some(midnight) = overrides.midnight {
            self.midnight = midnight;
        }
        if let Some(shafaq) = overrides.shafaq {
            self.shafaq = shafaq;
        }
        self
    }

    /// The Isha twilight angle, if Isha is angle-defined.
    pub(crate) fn isha_angle(&self) -> Option<f64> {
        match self.isha {
            AngleOrInterval::Degrees(angle) => Some(angle),
            AngleOrInterval::MinutesAfterSunset(_) => None,
        }
    }
}

/// Caller replacements for individual method parameters.
///
/// Unset fields keep the method's defaults. User [`Adjustments`] compose
/// additively on top and live in [`crate::settings`].
///
/// [`Adjustments`]: crate::settings::Adjustments
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overrides {
    pub fajr_angle: Option<f64>,
    pub isha: Option<AngleOrInterval>,
    pub maghrib: Option<MaghribRule>,
    pub midnight: Option<MidnightMode>,
    pub shafaq: Option<Shafaq>,
}

impl Method {
    /// Resolves the method to its canonical parameter tuple.
    pub fn parameters(self) -> Parameters {
        let base = Parameters {
            fajr_angle: 18.0,
            isha: AngleOrInterval::Degrees(17.0),
            maghrib: MaghribRule::MinutesAfterSunset(1.0),
            midnight: MidnightMode::Standard,
            shafaq: Shafaq::General,
            offsets: MethodOffsets::NONE,
        };

        match self {
            Method::MuslimWorldLeague | Method::Custom => Parameters {
                offsets: MethodOffsets {
                    dhuhr: 60,
                    ..MethodOffsets::NONE
                },
                ..base
            },
            Method::Isna => Parameters {
                fajr_angle: 15.0,
                isha: AngleOrInterval::Degrees(15.0),
                offsets: MethodOffsets {
                    fajr: -750,
                    dhuhr: 300,
                    asr: -60,
                    maghrib: 120,
                    isha: -90,
                    ..MethodOffsets::NONE
                },
                ..base
            },
            Method::Egypt => Parameters {
                fajr_angle: 19.5,
                isha: AngleOrInterval::Degrees(17.5),
                offsets: MethodOffsets {
                    fajr: -30,
                    sunrise: -30,
                    asr: 30,
                    maghrib: -60,
                    ..MethodOffsets::NONE
                },
                ..base
            },
            Method::UmmAlQura => Parameters {
                fajr_angle: 18.5,
                isha: AngleOrInterval::MinutesAfterSunset(90.0),
                ..base
            },
            Method::Qatar => Parameters {
                fajr_angle: 18.0,
                isha: AngleOrInterval::MinutesAfterSunset(90.0),
                offsets: MethodOffsets {
                    fajr: -30,
                    maghrib: 120,
                    isha: 180,
                    ..MethodOffsets::NONE
                },
                ..base
            },
            Method::Dubai => Parameters {
                fajr_angle: 18.2,
                isha: AngleOrInterval::Degrees(18.2),
                offsets: MethodOffsets {
                    sunrise: -210,
                    dhuhr: 180,
                    asr: 90,
                    maghrib: 150,
                    isha: 30,
                    ..MethodOffsets::NONE
                },
                ..base
            },
            Method::Jakim | Method::JakimKn => Parameters {
                fajr_angle: 18.0,
                isha: AngleOrInterval::Degrees(18.0),
                offsets: MethodOffsets {
                    fajr: 60,
                    dhuhr: 120,
                    asr: 60,
                    isha: 60,
                    ..MethodOffsets::NONE
                },
                ..base
            },
            Method::Kemenag => Parameters {
                fajr_angle: 20.0,
                isha: AngleOrInterval::Degrees(18.0),
                offsets: MethodOffsets {
                    fajr: 120,
                    sunrise: -240,
                    dhuhr: 180,
                    asr: 120,
                    maghrib: 120,
                    isha: 120,
                },
                ..base
            },
            Method::Singapore => Parameters {
                fajr_angle: 20.0,
                isha: AngleOrInterval::Degrees(18.0),
                offsets: MethodOffsets {
                    fajr: 30,
                    sunrise: 30,
                    dhuhr: 60,
                    asr: 60,
                    isha: 60,
                    ..MethodOffsets::NONE
                },
                ..base
            },
            Method::France12 => Parameters {
                fajr_angle: 12.0,
                isha: AngleOrInterval::Degrees(12.0),
                ..base
            },
            Method::France15 => Parameters {
                fajr_angle: 15.0,
                isha: AngleOrInterval::Degrees(15.0),
                ..base
            },
            Method::France18 => Parameters {
                fajr_angle: 18.0,
                isha: AngleOrInterval::Degrees(18.0),
                ..base
            },
            Method::Turkey => Parameters {
                fajr_angle: 18.0,
                isha: AngleOrInterval::Degrees(17.0),
                offsets: MethodOffsets {
                    sunrise: -420,
                    dhuhr: 300,
                    asr: 330,
                    maghrib: 420,
                    isha: 90,
                    ..MethodOffsets::NONE
                },
                ..base
            },
            Method::Russia => Parameters {
                fajr_angle: 16.0,
                isha: AngleOrInterval::Degrees(15.0),
                offsets: MethodOffsets {
                    fajr: -30,
                    sunrise: -30,
                    dhuhr: -30,
                    asr: 30,
                    maghrib: -90,
                    isha: -30,
                },
                ..base
            },
            Method::Moonsighting => Parameters {
                fajr_angle: 18.0,
                isha: AngleOrInterval::Degrees(18.0),
                offsets: MethodOffsets {
                    dhuhr: 300,
                    maghrib: 180,
                    ..MethodOffsets::NONE
                },
                ..base
            },
            Method::Tehran => Parameters {
                fajr_angle: 17.7,
                isha: AngleOrInterval::Degrees(14.0),
                maghrib: MaghribRule::Degrees(4.5),
                midnight: MidnightMode::Jafari,
                ..base
            },
            Method::Jafari => Parameters {
                fajr_angle: 16.0,
                isha: AngleOrInterval::Degrees(14.0),
                maghrib: MaghribRule::Degrees(4.0),
                midnight: MidnightMode::Jafari,
                ..base
            },
            Method::Karachi => Parameters {
                fajr_angle: 18.0,
                isha: AngleOrInterval::Degrees(18.0),
                offsets: MethodOffsets {
                    dhuhr: 60,
                    ..MethodOffsets::NONE
                },
                ..base
            },
        }
    }
}
