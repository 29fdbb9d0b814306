//! One-call rendering of a Julian Day for display.
//!
//! Values at or below JD 1000 are treated as "not set" and render as `-`.

use crate::julian_date::JulianDate;
use crate::style::{DateStyle, TimeOptions};

/// Julian Days at or below this are rendered as a placeholder.
pub const MIN_DISPLAY_JD: f64 = 1000.0;

/// Placeholder for unset Julian Days.
pub const PLACEHOLDER: &str = "-";

/// Decompose `jd` at `tz_offset` and render it, or `-` when `jd <= 1000`.
pub fn format_julian_day(jd: f64, tz_offset: f64, style: DateStyle, options: TimeOptions) -> String {
    if jd > MIN_DISPLAY_JD {
        JulianDate::new(jd, tz_offset).format(style, options)
    } else {
        PLACEHOLDER.to_string()
    }
}

/// `DD/MM/YYYY HH:MM[:SS]`
pub fn jd_to_long_date(jd: f64, tz_offset: f64, seconds: bool) -> String {
    format_julian_day(jd, tz_offset, DateStyle::Dmy, TimeOptions { time: true, seconds })
}

/// `DD/MM/YYYY`
pub fn jd_to_date_only(jd: f64, tz_offset: f64) -> String {
    format_julian_day(jd, tz_offset, DateStyle::Dmy, TimeOptions::date_only())
}

/// `Thu, 1 Jan 1970`
pub fn jd_to_full_date_only(jd: f64, tz_offset: f64) -> String {
    format_julian_day(jd, tz_offset, DateStyle::Extended, TimeOptions::date_only())
}

/// `DD/MM`
pub fn jd_to_day_month(jd: f64, tz_offset: f64) -> String {
    format_julian_day(jd, tz_offset, DateStyle::Dm, TimeOptions::date_only())
}

/// `DD/MM/YYYY HH:MM`
pub fn jd_to_medium_date(jd: f64, tz_offset: f64) -> String {
    format_julian_day(jd, tz_offset, DateStyle::Dmy, TimeOptions::hours_minutes())
}

pub fn jd_to_hms(jd: f64, tz_offset: f64) -> String {
    format_julian_day(jd, tz_offset, DateStyle::TimeOnly, TimeOptions::default())
}

pub fn jd_to_hm(jd: f64, tz_offset: f64) -> String {
    format_julian_day(jd, tz_offset, DateStyle::TimeOnly, TimeOptions::hours_minutes())
}
