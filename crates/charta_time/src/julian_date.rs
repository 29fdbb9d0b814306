//! Decomposition of a Julian Day into civil calendar fields.
//!
//! A [`JulianDate`] is built once from a `(jd, tz_offset)` pair and then
//! only read. The calendar fields are a pure function of the reference day
//! `jd + tz_offset / 86400 - 2440587.5`, so the same Julian Day renders as
//! local wall-clock time for any fixed offset without consulting a timezone
//! database.
//!
//! ```
//! use charta_time::JulianDate;
//!
//! let date = JulianDate::new(2_450_587.538_363_563, 7200.0);
//! assert_eq!(date.to_iso_string(), "1997-05-19T02:55:14.000Z");
//! assert_eq!(date.to_iso_simple(), "1997-05-19T02:55:14");
//! assert_eq!(date.to_string(), "1997-05-19 02:55:14");
//! assert_eq!(date.dmy_date(), "19/05/1997");
//! assert_eq!(date.hm(), "02:55");
//! ```

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::calendar::{month_day_from_day_of_year, year_item_from_ref_day};
use crate::error::TimeError;
use crate::julian::{
    DEFAULT_SECOND_BIAS_S, EPOCH_JD, EPOCH_WEEKDAY, SECONDS_PER_DAY, jd_to_unix_seconds,
};
use crate::style::{DateStyle, TimeOptions, abbreviate, month_name, weekday_name, zero_pad};

/// Rounding bias applied to the time of day before flooring to seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SecondBias {
    /// [`DEFAULT_SECOND_BIAS_S`].
    #[default]
    Standard,
    /// Caller-supplied bias in milliseconds, within (-1000, 1000).
    Millis(f64),
}

impl SecondBias {
    /// Bias from a millisecond value. Values outside (-1000, 1000), and the
    /// sentinel -1000 itself, select [`SecondBias::Standard`].
    pub fn from_millis(ms: f64) -> Self {
        if ms.is_finite() && ms > -1000.0 && ms < 1000.0 {
            Self::Millis(ms)
        } else {
            Self::Standard
        }
    }

    /// Bias in seconds.
    pub fn seconds(self) -> f64 {
        match self {
            Self::Standard => DEFAULT_SECOND_BIAS_S,
            Self::Millis(ms) => ms / 1000.0,
        }
    }
}

/// Options controlling decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DecomposeOptions {
    pub second_bias: SecondBias,
}

impl DecomposeOptions {
    pub fn with_second_bias(mut self, bias: SecondBias) -> Self {
        self.second_bias = bias;
        self
    }
}

/// Civil calendar fields decomposed from a Julian Day under a fixed offset.
///
/// Built from a non-positive or non-finite Julian Day, every field stays at
/// zero; check [`JulianDate::is_valid`] before trusting the fields.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct JulianDate {
    pub year: i64,
    /// 1..=12 (0 when invalid).
    pub month: u32,
    /// 1..=31 (0 when invalid).
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// 0-based day index within the year.
    pub day_of_year: u32,
    /// 365 or 366 (0 when invalid).
    pub year_length: u32,
    /// Day offset from the epoch of January 1 of `year`.
    pub year_start_offset: f64,
    /// The Julian Day this value was built from.
    pub jd: f64,
    /// Offset east of UTC in seconds.
    pub tz_offset: f64,
    /// `jd + tz_offset / 86400 - 2440587.5`.
    pub ref_day: f64,
}

impl JulianDate {
    /// Decompose `jd` as wall-clock time at `tz_offset` seconds east of UTC,
    /// with the standard second bias.
    pub fn new(jd: f64, tz_offset: f64) -> Self {
        Self::with_options(jd, tz_offset, DecomposeOptions::default())
    }

    /// Decompose with a caller-chosen millisecond bias (see [`SecondBias::from_millis`]).
    pub fn with_bias_millis(jd: f64, tz_offset: f64, bias_ms: f64) -> Self {
        let options = DecomposeOptions::default().with_second_bias(SecondBias::from_millis(bias_ms));
        Self::with_options(jd, tz_offset, options)
    }

    /// Decompose with explicit options. Invalid input yields [`JulianDate::default`].
    pub fn with_options(jd: f64, tz_offset: f64, options: DecomposeOptions) -> Self {
        match Self::try_with_options(jd, tz_offset, options) {
            Ok(date) => date,
            Err(e) => {
                tracing::debug!(jd, error = %e, "julian day not decomposed");
                Self::default()
            }
        }
    }

    /// Decompose, rejecting non-finite or non-positive Julian Days.
    pub fn try_new(jd: f64, tz_offset: f64) -> Result<Self, TimeError> {
        Self::try_with_options(jd, tz_offset, DecomposeOptions::default())
    }

    /// Fallible form of [`JulianDate::with_options`].
    pub fn try_with_options(
        jd: f64,
        tz_offset: f64,
        options: DecomposeOptions,
    ) -> Result<Self, TimeError> {
        if !jd.is_finite() {
            return Err(TimeError::NonFiniteJulianDay(jd));
        }
        if jd <= 0.0 {
            return Err(TimeError::NonPositiveJulianDay(jd));
        }
        let tz_offset = if tz_offset.is_finite() { tz_offset } else { 0.0 };
        Ok(Self::build(jd, tz_offset, options.second_bias))
    }

    fn build(jd: f64, tz_offset: f64, bias: SecondBias) -> Self {
        let ref_day = jd + tz_offset / SECONDS_PER_DAY - EPOCH_JD;
        let day_num = ref_day.floor();

        // Julian Days start at noon, so the wall-clock fraction of the day is
        // the fraction of (jd - 0.5), which equals the fraction of ref_day.
        let fl_hours = (ref_day - day_num) * 24.0 + bias.seconds() / 3600.0;
        let mut hours = fl_hours.floor();
        let fl_mins = (fl_hours - hours) * 60.0;
        let minutes = fl_mins.floor().min(59.0);
        let seconds = ((fl_mins - minutes) * 60.0).floor().min(59.0);

        // The bias can push the time across midnight in either direction.
        let mut carry = 0.0;
        if hours >= 24.0 {
            hours -= 24.0;
            carry = 1.0;
        } else if hours < 0.0 {
            hours += 24.0;
            carry = -1.0;
        }

        let year_item = year_item_from_ref_day(day_num + carry);
        let month_day = month_day_from_day_of_year(year_item.day_of_year, year_item.year_length);

        Self {
            year: year_item.year,
            month: month_day.month,
            day: month_day.day,
            hour: hours as u32,
            minute: minutes as u32,
            second: seconds as u32,
            day_of_year: year_item.day_of_year,
            year_length: year_item.year_length,
            year_start_offset: year_item.year_start_offset,
            jd,
            tz_offset,
            ref_day,
        }
    }

    /// True when the value was decomposed from a positive, finite Julian Day.
    pub fn is_valid(&self) -> bool {
        self.jd > 0.0 && self.jd.is_finite()
    }

    /// Unix seconds of the Julian Day. Ignores the offset.
    pub fn unix_time(&self) -> f64 {
        jd_to_unix_seconds(self.jd, 0.0)
    }

    /// Unix milliseconds of the Julian Day. Ignores the offset.
    pub fn unix_millis(&self) -> f64 {
        self.unix_time() * 1000.0
    }

    /// Whole days since the epoch in local time.
    pub fn ref_day_num(&self) -> i64 {
        self.ref_day.floor() as i64
    }

    /// Fraction of the local day elapsed, in [0, 1).
    pub fn decimal_time(&self) -> f64 {
        self.ref_day - self.ref_day.floor()
    }

    /// ISO weekday of the decomposed date, 1 = Monday .. 7 = Sunday.
    pub fn weekday(&self) -> u32 {
        let day = self.year_start_offset as i64 + i64::from(self.day_of_year);
        ((day + EPOCH_WEEKDAY - 1).rem_euclid(7) + 1) as u32
    }

    /// 1-based day of the year.
    pub fn year_day(&self) -> u32 {
        self.day_of_year + 1
    }

    pub fn days_in_year(&self) -> u32 {
        self.year_length
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    pub fn short_month_name(&self) -> &'static str {
        abbreviate(month_name(self.month))
    }

    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday())
    }

    pub fn short_weekday_name(&self) -> &'static str {
        abbreviate(weekday_name(self.weekday()))
    }

    /// `Thu, 1 Jan 1970`
    pub fn extended(&self) -> String {
        format!(
            "{}, {} {} {}",
            self.short_weekday_name(),
            self.day,
            self.short_month_name(),
            self.year
        )
    }

    /// Render the date in `style`, with an optional `HH:MM[:SS]` suffix.
    pub fn format(&self, style: DateStyle, options: TimeOptions) -> String {
        let (y, m, d) = (
            zero_pad(self.year, 4),
            zero_pad(i64::from(self.month), 2),
            zero_pad(i64::from(self.day), 2),
        );
        let date_part = match style {
            DateStyle::Dmy => Some([d, m, y].join("/")),
            DateStyle::Mdy => Some([m, d, y].join("/")),
            DateStyle::Dm => Some([d, m].join("/")),
            DateStyle::EuroDot => Some([d, m, y].join(".")),
            DateStyle::EuroHyphen => Some([d, m, y].join("-")),
            DateStyle::Iso | DateStyle::IsoT => Some([y, m, d].join("-")),
            DateStyle::Extended => Some(self.extended()),
            DateStyle::TimeOnly => None,
        };

        let mut parts: Vec<String> = date_part.into_iter().collect();
        if options.time {
            parts.push(self.clock(options.seconds));
        }
        let separator = if style == DateStyle::IsoT { "T" } else { " " };
        parts.join(separator)
    }

    fn clock(&self, seconds: bool) -> String {
        let hm = format!("{:02}:{:02}", self.hour, self.minute);
        if seconds {
            format!("{hm}:{:02}", self.second)
        } else {
            hm
        }
    }

    /// `YYYY-MM-DDTHH:MM:SS.000Z`. The suffix is literal: the fields are
    /// local to `tz_offset`, not UTC, unless the offset is zero.
    pub fn to_iso_string(&self) -> String {
        format!("{}.000Z", self.to_iso_simple())
    }

    /// `YYYY-MM-DDTHH:MM:SS`
    pub fn to_iso_simple(&self) -> String {
        self.format(DateStyle::IsoT, TimeOptions::default())
    }

    pub fn iso_date(&self) -> String {
        self.format(DateStyle::Iso, TimeOptions::date_only())
    }

    pub fn dmy_date(&self) -> String {
        self.format(DateStyle::Dmy, TimeOptions::date_only())
    }

    pub fn mdy_date(&self) -> String {
        self.format(DateStyle::Mdy, TimeOptions::date_only())
    }

    pub fn eu_date(&self) -> String {
        self.format(DateStyle::EuroDot, TimeOptions::date_only())
    }

    /// `MM/YYYY`
    pub fn month_year(&self) -> String {
        format!(
            "{}/{}",
            zero_pad(i64::from(self.month), 2),
            self.year
        )
    }

    /// Time only, `HH:MM:SS` or `HH:MM`.
    pub fn time_string(&self, seconds: bool) -> String {
        self.format(
            DateStyle::TimeOnly,
            TimeOptions {
                time: true,
                seconds,
            },
        )
    }

    pub fn hms(&self) -> String {
        self.time_string(true)
    }

    pub fn hm(&self) -> String {
        self.time_string(false)
    }

    pub fn dmy_hm(&self) -> String {
        self.format(DateStyle::Dmy, TimeOptions::hours_minutes())
    }

    pub fn dmy_hms(&self) -> String {
        self.format(DateStyle::Dmy, TimeOptions::default())
    }

    /// `UTC ±H[:MM]`. `padded` zero-pads the hours; minutes are shown when
    /// non-zero or when `always_minutes` is set.
    pub fn offset_display(&self, padded: bool, always_minutes: bool) -> String {
        format_utc_offset(self.tz_offset, padded, always_minutes)
    }

    /// `UTC +5:30`, `UTC +1`
    pub fn offset_hrs(&self) -> String {
        self.offset_display(false, false)
    }

    /// `UTC +05:30`, `UTC +01:00`
    pub fn offset_hm(&self) -> String {
        self.offset_display(true, true)
    }
}

impl Display for JulianDate {
    /// `YYYY-MM-DD HH:MM:SS`
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(DateStyle::Iso, TimeOptions::default()))
    }
}

/// Render an offset in seconds as `UTC ±H[:MM]`.
pub fn format_utc_offset(offset_s: f64, padded: bool, always_minutes: bool) -> String {
    let total_minutes = (offset_s.abs() / 60.0).floor() as i64;
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);
    let sign = if offset_s < 0.0 { '-' } else { '+' };
    let hours = if padded {
        zero_pad(hours, 2)
    } else {
        hours.to_string()
    };
    if always_minutes || minutes > 0 {
        format!("UTC {sign}{hours}:{minutes:02}")
    } else {
        format!("UTC {sign}{hours}")
    }
}
