//! Date style codes, time-of-day options and English calendar names.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;

/// Layout of the date part of a formatted [`JulianDate`](crate::JulianDate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateStyle {
    /// `DD/MM/YYYY`
    #[default]
    Dmy,
    /// `MM/DD/YYYY`
    Mdy,
    /// `DD/MM`
    Dm,
    /// `DD.MM.YYYY`
    EuroDot,
    /// `DD-MM-YYYY`
    EuroHyphen,
    /// `YYYY-MM-DD`, time separated by a space.
    Iso,
    /// `YYYY-MM-DD`, time separated by `T`.
    IsoT,
    /// `Thu, 1 Jan 1970`
    Extended,
    /// No date part; time only.
    TimeOnly,
}

impl DateStyle {
    /// Canonical code for this style.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Dmy => "dmy",
            Self::Mdy => "mdy",
            Self::Dm => "dm",
            Self::EuroDot => "euroDot",
            Self::EuroHyphen => "euroHyphen",
            Self::Iso => "iso",
            Self::IsoT => "isoT",
            Self::Extended => "extended",
            Self::TimeOnly => "-",
        }
    }

    /// Lenient lookup: unknown codes fall back to [`DateStyle::Dmy`].
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

impl FromStr for DateStyle {
    type Err = TimeError;

    /// Accepts the canonical codes plus their regional aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dmy" | "euro" | "euro1" => Ok(Self::Dmy),
            "mdy" | "us" | "usa" => Ok(Self::Mdy),
            "dm" => Ok(Self::Dm),
            "euroDot" | "eu" | "de" | "euro2" => Ok(Self::EuroDot),
            "euroHyphen" | "in" | "euro3" => Ok(Self::EuroHyphen),
            "iso" | "ymd" => Ok(Self::Iso),
            "isoT" => Ok(Self::IsoT),
            "extended" => Ok(Self::Extended),
            "-" | "" | "time" => Ok(Self::TimeOnly),
            other => Err(TimeError::UnknownDateStyle(other.to_string())),
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Whether a time suffix is appended, and whether it carries seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOptions {
    pub time: bool,
    pub seconds: bool,
}

impl Default for TimeOptions {
    fn default() -> Self {
        Self {
            time: true,
            seconds: true,
        }
    }
}

impl TimeOptions {
    /// Date only, no time suffix.
    pub const fn date_only() -> Self {
        Self {
            time: false,
            seconds: false,
        }
    }

    /// `HH:MM` suffix.
    pub const fn hours_minutes() -> Self {
        Self {
            time: true,
            seconds: false,
        }
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// English month name for a 1-based month, or `""` when out of range.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => "",
    }
}

/// English weekday name for an ISO weekday (1 = Monday), or `""` when out of range.
pub fn weekday_name(weekday: u32) -> &'static str {
    match weekday {
        1..=7 => WEEKDAY_NAMES[(weekday - 1) as usize],
        _ => "",
    }
}

/// Three-letter abbreviation of a calendar name.
pub(crate) fn abbreviate(name: &str) -> &str {
    name.get(..3).unwrap_or(name)
}

/// Zero-pad the magnitude of `num` to `places` digits, keeping a leading `-`.
pub fn zero_pad(num: i64, places: usize) -> String {
    let sign = if num < 0 { "-" } else { "" };
    format!("{sign}{:0places$}", num.unsigned_abs())
}
