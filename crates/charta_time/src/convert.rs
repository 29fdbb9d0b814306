//! Civil date/time strings ⟷ Julian Day.
//!
//! Parsing follows the model of a browser date parser: a string with a time
//! part and no zone designator is read as host-local time, while date-only
//! strings and strings ending in `Z` (or `±HH:MM`) are read as UTC. The
//! [`OffsetMode`] then decides which offset is subtracted before the instant
//! becomes a Julian Day.
//!
//! ```
//! use charta_time::{DateStringConverter, FixedLocalOffset, JulianDate, OffsetMode};
//!
//! let conv = DateStringConverter::with_source(FixedLocalOffset(-18_000));
//! let jd = conv.date_to_julian_day("1997-05-19T02:55:14", OffsetMode::Explicit(7200.0));
//! let date = JulianDate::new(jd, 7200.0);
//! assert_eq!(date.to_iso_simple(), "1997-05-19T02:55:14");
//! ```

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::calendar::{days_from_civil, days_in_month};
use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, current_julian_day, try_unix_seconds_to_jd};
use crate::julian_date::JulianDate;
use crate::local::{LocalOffsetSource, SystemLocalOffset, local_tz_offset};

/// Largest seconds field a parsed string can carry.
const MAX_SECOND: f64 = 59.999_999_999;

static CIVIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        ^\s*
        ([+-]?\d{1,6})-(\d{1,2})-(\d{1,2})          # date
        (?:
            (?:T|\s+)
            (\d{1,2}):(\d{2})                       # hour, minute
            (?::(\d{2})(?:\.(\d+))?)?               # second, fraction
        )?
        \s*(Z|[+-]\d{2}:?\d{2})?                    # zone designator
        \s*$",
    )
    .unwrap()
});

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d{1,4}-\d\d-\d\d((T|\s)\d\d:\d\d(:\d\d)?)?").unwrap());

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*[12]\d\d\d-[0-1]?\d-[0-3]\d?\s*$").unwrap());

static DATE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*[12]\d\d\d-[0-1]?\d-[0-3]\d?(T|\s)[0-2]?\d:[0-5]?\d:[0-5]?\d(\.\d+)?Z?\s*$")
        .unwrap()
});

/// How the wall-clock fields of a parsed string are tied to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CivilZone {
    /// No designator and a time part: host-local time.
    Local,
    /// `Z`, or a date without a time part.
    Utc,
    /// `±HH:MM` designator, in seconds east of UTC.
    Fixed(i32),
}

/// Fields of a parsed `YYYY-MM-DD[THH:MM[:SS[.fff]]][Z|±HH:MM]` string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilDateTime {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    pub zone: CivilZone,
}

impl CivilDateTime {
    /// Parse and range-check a civil date/time string.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let invalid = || TimeError::InvalidDateString(s.to_string());
        let caps = CIVIL_RE.captures(s).ok_or_else(invalid)?;

        let int = |i: usize| -> Result<i64, TimeError> {
            caps.get(i)
                .map_or(Ok(0), |m| m.as_str().parse::<i64>().map_err(|_| invalid()))
        };
        let year = int(1)?;
        let month = int(2)? as u32;
        let day = int(3)? as u32;
        let has_time = caps.get(4).is_some();
        let hour = int(4)? as u32;
        let minute = int(5)? as u32;
        let whole_seconds = int(6)?;
        if whole_seconds > 59 {
            return Err(invalid());
        }
        // Long fractions can round up to a whole 60.0.
        let second = match caps.get(7) {
            Some(frac) => format!("{whole_seconds}.{}", frac.as_str())
                .parse::<f64>()
                .map_err(|_| invalid())?
                .min(MAX_SECOND),
            None => whole_seconds as f64,
        };

        if !(1..=12).contains(&month)
            || day == 0
            || day > days_in_month(year, month)
            || hour > 23
            || minute > 59
        {
            return Err(invalid());
        }

        let zone = match caps.get(8).map(|m| m.as_str()) {
            Some(z) if z.eq_ignore_ascii_case("z") => CivilZone::Utc,
            Some(z) => CivilZone::Fixed(parse_zone_designator(z).ok_or_else(invalid)?),
            None if has_time => CivilZone::Local,
            None => CivilZone::Utc,
        };

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            zone,
        })
    }

    /// Unix seconds of the fields read as if they were UTC.
    pub fn naive_seconds(&self) -> f64 {
        days_from_civil(self.year, self.month, self.day) as f64 * SECONDS_PER_DAY
            + f64::from(self.hour) * 3600.0
            + f64::from(self.minute) * 60.0
            + self.second
    }
}

impl FromStr for CivilDateTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_zone_designator(z: &str) -> Option<i32> {
    let sign = if z.starts_with('-') { -1 } else { 1 };
    let digits: String = z[1..].chars().filter(char::is_ascii_digit).collect();
    let hours: i32 = digits.get(..2)?.parse().ok()?;
    let minutes: i32 = digits.get(2..4)?.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60))
}

/// Which offset is removed from the parsed instant.
///
/// With `L` the host offset east of UTC and `p` the instant as the platform
/// parser reads it:
/// - `Auto`: `p + L`. A local-form string is read as UTC.
/// - `Explicit(o)`: `p - o + L`. A local-form string is read as local time
///   at offset `o`, whatever the host zone.
/// - `ExplicitUncompensated(o)`: `p - o`. Both the host and the caller
///   offsets apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OffsetMode {
    Auto,
    Explicit(f64),
    ExplicitUncompensated(f64),
}

impl OffsetMode {
    /// Map the `(auto_local_offset, explicit_offset_s, apply_both)` flag
    /// triple onto a mode. `auto` wins over the explicit offset.
    pub fn from_flags(auto_local_offset: bool, explicit_offset_s: f64, apply_both: bool) -> Self {
        match (auto_local_offset, apply_both) {
            (true, _) => Self::Auto,
            (false, true) => Self::Explicit(explicit_offset_s),
            (false, false) => Self::ExplicitUncompensated(explicit_offset_s),
        }
    }
}

impl Default for OffsetMode {
    fn default() -> Self {
        Self::Explicit(0.0)
    }
}

/// Converts civil date/time strings to Julian Days.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateStringConverter<S = SystemLocalOffset> {
    source: S,
}

impl DateStringConverter<SystemLocalOffset> {
    /// Converter reading the host timezone.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: LocalOffsetSource> DateStringConverter<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Fallible conversion. Unparseable strings yield
    /// [`TimeError::InvalidDateString`].
    pub fn try_date_to_julian_day(&self, s: &str, mode: OffsetMode) -> Result<f64, TimeError> {
        let civil = CivilDateTime::parse(s)?;
        let naive = civil.naive_seconds();
        let local = f64::from(self.source.offset_at(naive));
        let platform = match civil.zone {
            CivilZone::Local => naive - local,
            CivilZone::Utc => naive,
            CivilZone::Fixed(offset) => naive - f64::from(offset),
        };
        let seconds = match mode {
            OffsetMode::Auto => platform + local,
            OffsetMode::Explicit(offset) => platform - offset + local,
            OffsetMode::ExplicitUncompensated(offset) => platform - offset,
        };
        try_unix_seconds_to_jd(seconds)
    }

    /// Julian Day for a civil date/time string, or `0.0` when the string
    /// cannot be parsed.
    pub fn date_to_julian_day(&self, s: &str, mode: OffsetMode) -> f64 {
        self.try_date_to_julian_day(s, mode).unwrap_or_else(|e| {
            tracing::debug!(input = s, error = %e, "date string resolved to JD 0");
            0.0
        })
    }

    /// Parse `s` under `mode` and decompose the result at `tz_offset`.
    pub fn julian_date(&self, s: &str, mode: OffsetMode, tz_offset: f64) -> JulianDate {
        JulianDate::new(self.date_to_julian_day(s, mode), tz_offset)
    }
}

/// Julian Day for a civil date/time string using the host timezone.
///
/// `auto_local_offset` removes only the host offset; otherwise
/// `explicit_offset_s` is removed, with the host offset compensated when
/// `apply_both` is set. Returns `0.0` for unparseable input.
pub fn date_to_julian_day(
    s: &str,
    auto_local_offset: bool,
    explicit_offset_s: f64,
    apply_both: bool,
) -> f64 {
    let mode = OffsetMode::from_flags(auto_local_offset, explicit_offset_s, apply_both);
    DateStringConverter::new().date_to_julian_day(s, mode)
}

/// `YYYY-MM-DDTHH:MM:SS` wall-clock time of `jd` at `tz_offset`.
pub fn julian_day_to_iso_string(jd: f64, tz_offset: f64) -> String {
    JulianDate::new(jd, tz_offset).to_iso_simple()
}

/// The current instant, decomposed in host-local time unless `utc` is set.
pub fn current_julian_date(utc: bool) -> JulianDate {
    let offset = if utc { 0 } else { local_tz_offset() };
    JulianDate::new(current_julian_day(), f64::from(offset))
}

/// Read a string as UTC wall-clock time and decompose it at `tz_offset`.
pub fn date_string_to_julian_date(s: &str, tz_offset: f64) -> JulianDate {
    DateStringConverter::new().julian_date(s, OffsetMode::Auto, tz_offset)
}

/// Read a string as wall-clock time at `tz_offset` and decompose it there.
pub fn local_date_string_to_julian_date(s: &str, tz_offset: f64) -> JulianDate {
    DateStringConverter::new().julian_date(s, OffsetMode::Explicit(tz_offset), tz_offset)
}

/// Loose ISO check: `[-]Y{1,4}-MM-DD` optionally followed by `[T ]HH:MM[:SS]`.
pub fn valid_iso_date_string(s: &str) -> bool {
    s.trim().len() >= 4 && ISO_DATE_RE.is_match(s)
}

/// Strict check on a four-digit-year date, with a mandatory
/// `HH:MM:SS[.fff][Z]` time when `with_time` is set.
pub fn valid_date_time_string(s: &str, with_time: bool) -> bool {
    if with_time {
        DATE_TIME_RE.is_match(s)
    } else {
        DATE_RE.is_match(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedLocalOffset;
    use crate::julian::EPOCH_JD;

    fn conv(local: i32) -> DateStringConverter<FixedLocalOffset> {
        DateStringConverter::with_source(FixedLocalOffset(local))
    }

    #[test]
    fn parse_full() {
        let c = CivilDateTime::parse("1997-05-19T02:55:14.25Z").unwrap();
        assert_eq!((c.year, c.month, c.day), (1997, 5, 19));
        assert_eq!((c.hour, c.minute), (2, 55));
        assert!((c.second - 14.25).abs() < 1e-12);
        assert_eq!(c.zone, CivilZone::Utc);
    }

    #[test]
    fn parse_zone_rules() {
        assert_eq!(CivilDateTime::parse("2024-01-15").unwrap().zone, CivilZone::Utc);
        assert_eq!(
            CivilDateTime::parse("2024-01-15 10:30").unwrap().zone,
            CivilZone::Local
        );
        assert_eq!(
            CivilDateTime::parse("2024-01-15t10:30:00z").unwrap().zone,
            CivilZone::Utc
        );
        assert_eq!(
            CivilDateTime::parse("2024-01-15T10:30:00+05:30").unwrap().zone,
            CivilZone::Fixed(19_800)
        );
        assert_eq!(
            CivilDateTime::parse("2024-01-15T10:30:00-0800").unwrap().zone,
            CivilZone::Fixed(-28_800)
        );
    }

    #[test]
    fn parse_clamps_fraction_rounding_to_sixty() {
        let c = CivilDateTime::parse("2024-01-01T10:00:59.99999999999999999Z").unwrap();
        assert_eq!((c.hour, c.minute), (10, 0));
        assert!(c.second < 60.0 && c.second > 59.999);
        let jd = conv(0).date_to_julian_day("2024-01-01T10:00:59.99999999999999999", OffsetMode::Auto);
        let expected = (days_from_civil(2024, 1, 1) as f64 * 86_400.0 + 36_060.0) / 86_400.0 + EPOCH_JD;
        assert!((jd - expected).abs() < 1e-6);
        assert!(CivilDateTime::parse("2024-01-01T10:00:60.5").is_err());
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        for s in [
            "not-a-date",
            "",
            "2023-02-29",
            "2024-13-01",
            "2024-00-10",
            "2024-04-31",
            "2024-01-01T24:00",
            "2024-01-01T10:60",
            "2024-01-01T10:00:61",
        ] {
            assert!(CivilDateTime::parse(s).is_err(), "accepted {s:?}");
        }
        assert!(CivilDateTime::parse("2024-02-29").is_ok());
    }

    #[test]
    fn explicit_mode_is_host_independent() {
        let a = conv(0).date_to_julian_day("1997-05-19T02:55:14", OffsetMode::Explicit(7200.0));
        let b = conv(-18_000).date_to_julian_day("1997-05-19T02:55:14", OffsetMode::Explicit(7200.0));
        assert_eq!(a, b);
        let expected = (days_from_civil(1997, 5, 19) as f64 * 86_400.0 + 3314.0) / 86_400.0 + EPOCH_JD;
        assert!((a - expected).abs() < 1e-9);
    }

    #[test]
    fn auto_mode_reads_local_form_as_utc() {
        let jd = conv(19_800).date_to_julian_day("1970-01-02T00:00", OffsetMode::Auto);
        assert!((jd - (EPOCH_JD + 1.0)).abs() < 1e-9);
    }

    #[test]
    fn uncompensated_mode_applies_both_offsets() {
        let jd = conv(3600).date_to_julian_day(
            "1970-01-02T00:00",
            OffsetMode::ExplicitUncompensated(7200.0),
        );
        assert!((jd - (EPOCH_JD + 1.0 - 3.0 / 24.0)).abs() < 1e-9);
    }

    #[test]
    fn utc_form_with_explicit_offset() {
        // Date-only strings are UTC-form; the local parse does not apply.
        let jd = conv(0).date_to_julian_day("1970-01-02", OffsetMode::Explicit(-43_200.0));
        assert!((jd - (EPOCH_JD + 1.5)).abs() < 1e-9);
    }

    #[test]
    fn fixed_designator() {
        let jd = conv(0).date_to_julian_day("1970-01-01T05:30:00+05:30", OffsetMode::Explicit(0.0));
        assert!((jd - EPOCH_JD).abs() < 1e-9);
    }

    #[test]
    fn invalid_string_yields_zero() {
        assert_eq!(conv(0).date_to_julian_day("not-a-date", OffsetMode::Auto), 0.0);
        assert_eq!(date_to_julian_day("not-a-date", true, 0.0, true), 0.0);
        assert!(matches!(
            conv(0).try_date_to_julian_day("not-a-date", OffsetMode::Auto),
            Err(TimeError::InvalidDateString(_))
        ));
        let decomposed = conv(0).julian_date("garbage", OffsetMode::Auto, 0.0);
        assert!(!decomposed.is_valid());
    }

    #[test]
    fn flags_map_to_modes() {
        assert_eq!(OffsetMode::from_flags(true, 3600.0, false), OffsetMode::Auto);
        assert_eq!(OffsetMode::from_flags(false, 3600.0, true), OffsetMode::Explicit(3600.0));
        assert_eq!(
            OffsetMode::from_flags(false, 3600.0, false),
            OffsetMode::ExplicitUncompensated(3600.0)
        );
    }

    #[test]
    fn local_string_helper_roundtrips() {
        let d = local_date_string_to_julian_date("2001-09-09T01:46:40", 19_800.0);
        assert_eq!(d.to_iso_simple(), "2001-09-09T01:46:40");
        assert_eq!(d.offset_hm(), "UTC +05:30");
    }

    #[test]
    fn utc_string_helper_decomposes_at_offset() {
        let d = date_string_to_julian_date("2001-09-09T01:46:40", 3600.0);
        assert_eq!(d.to_iso_simple(), "2001-09-09T02:46:40");
    }

    #[test]
    fn iso_string_inverse() {
        assert_eq!(julian_day_to_iso_string(EPOCH_JD + 0.75, 0.0), "1970-01-01T18:00:00");
    }

    #[test]
    fn current_date_is_valid() {
        assert!(current_julian_date(true).is_valid());
        assert_eq!(current_julian_date(true).tz_offset, 0.0);
    }

    #[test]
    fn validators() {
        assert!(valid_iso_date_string("1997-05-19"));
        assert!(valid_iso_date_string("-44-03-15"));
        assert!(valid_iso_date_string("1997-05-19T02:55"));
        assert!(!valid_iso_date_string("19/05/1997"));
        assert!(!valid_iso_date_string("97"));

        assert!(valid_date_time_string("1997-05-19", false));
        assert!(valid_date_time_string(" 1997-5-19 ", false));
        assert!(!valid_date_time_string("1997-05-19T02:55:14", false));
        assert!(valid_date_time_string("1997-05-19T02:55:14", true));
        assert!(valid_date_time_string("1997-05-19 02:55:14.123z", true));
        assert!(!valid_date_time_string("1997-05-19T02:55", true));
        assert!(!valid_date_time_string("0997-05-19", false));
    }
}
