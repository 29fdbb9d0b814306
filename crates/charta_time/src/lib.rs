//! Julian Day ⟷ civil calendar conversion.
//!
//! This crate provides:
//! - Julian Day ⟷ Unix time conversion and the epoch constants
//! - Proleptic Gregorian year and month/day resolution
//! - [`JulianDate`], a Julian Day decomposed at a fixed UTC offset, with
//!   date-style formatting
//! - [`DateStringConverter`], civil date/time strings → Julian Day under a
//!   chosen [`OffsetMode`]
//! - Day-boundary helpers anchored to an offset or a longitude
//!
//! Every conversion that can fail has an infallible form, which resolves the
//! failure to a neutral default, and a `try_*` form returning [`TimeError`].

pub mod calendar;
pub mod convert;
pub mod error;
pub mod geo;
pub mod julian;
pub mod julian_date;
pub mod local;
pub mod render;
pub mod style;

pub use calendar::{
    MonthDay, YearItem, civil_from_days, days_from_civil, days_in_month, days_in_year,
    is_leap_year, month_day_from_day_of_year, year_item_from_ref_day,
};
pub use convert::{
    CivilDateTime, CivilZone, DateStringConverter, OffsetMode, current_julian_date,
    date_string_to_julian_date, date_to_julian_day, julian_day_to_iso_string,
    local_date_string_to_julian_date, valid_date_time_string, valid_iso_date_string,
};
pub use error::TimeError;
pub use geo::{
    julian_day_geo_offset_to_noon, julian_day_geo_offset_to_start, julian_day_offset_to_noon,
    longitude_day_fraction, natural_tz_offset,
};
pub use julian::{
    DEFAULT_SECOND_BIAS_S, EPOCH_JD, EPOCH_WEEKDAY, EPOCH_YEAR, SECONDS_PER_DAY,
    current_julian_day, jd_to_unix_millis, jd_to_unix_seconds, try_unix_seconds_to_jd,
    unix_seconds_to_jd,
};
pub use julian_date::{DecomposeOptions, JulianDate, SecondBias, format_utc_offset};
pub use local::{FixedLocalOffset, LocalOffsetSource, SystemLocalOffset, local_tz_offset};
pub use render::{
    format_julian_day, jd_to_date_only, jd_to_day_month, jd_to_full_date_only, jd_to_hm,
    jd_to_hms, jd_to_long_date, jd_to_medium_date,
};
pub use style::{DateStyle, TimeOptions, month_name, weekday_name, zero_pad};
