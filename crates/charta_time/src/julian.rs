//! Epoch constants and Julian Day ⟷ Unix time conversion.
//!
//! The Julian Day count runs from noon, so the Unix epoch
//! 1970-01-01T00:00:00Z falls on JD 2440587.5.

use crate::error::TimeError;

/// Julian Day of 1970-01-01T00:00:00Z.
pub const EPOCH_JD: f64 = 2_440_587.5;

/// Calendar year of the epoch.
pub const EPOCH_YEAR: i64 = 1970;

/// ISO weekday of 1970-01-01 (1 = Monday .. 7 = Sunday).
pub const EPOCH_WEEKDAY: i64 = 4;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Empirical bias, in seconds, added to the fractional time of day before
/// flooring to whole seconds.
///
/// Absorbs the drift between the continuous day count and ISO seconds so
/// that times written as whole seconds decompose back to the same second for
/// most 20th and 21st century dates. Approximate: there is no leap-second
/// table behind it.
pub const DEFAULT_SECOND_BIAS_S: f64 = 0.3333;

/// Days elapsed since the epoch for a Julian Day.
pub fn jd_to_epoch_days(jd: f64) -> f64 {
    jd - EPOCH_JD
}

/// Unix seconds for a Julian Day, shifted by `offset_s`.
pub fn jd_to_unix_seconds(jd: f64, offset_s: f64) -> f64 {
    (jd - EPOCH_JD) * SECONDS_PER_DAY + offset_s
}

/// Unix milliseconds for a Julian Day, shifted by `offset_s` seconds.
pub fn jd_to_unix_millis(jd: f64, offset_s: f64) -> f64 {
    jd_to_unix_seconds(jd, offset_s) * 1000.0
}

/// Julian Day for a Unix timestamp in seconds.
///
/// Returns `0.0` for NaN or infinite input.
pub fn unix_seconds_to_jd(seconds: f64) -> f64 {
    try_unix_seconds_to_jd(seconds).unwrap_or(0.0)
}

/// Julian Day for a Unix timestamp in seconds, rejecting non-finite input.
pub fn try_unix_seconds_to_jd(seconds: f64) -> Result<f64, TimeError> {
    if seconds.is_finite() {
        Ok(seconds / SECONDS_PER_DAY + EPOCH_JD)
    } else {
        Err(TimeError::NonFiniteSeconds(seconds))
    }
}

/// Current Unix time in fractional seconds, read from the system clock.
pub fn now_unix_seconds() -> f64 {
    let now = time::OffsetDateTime::now_utc();
    now.unix_timestamp() as f64 + f64::from(now.nanosecond()) / 1e9
}

/// Julian Day of the current instant. Always UTC-referenced.
pub fn current_julian_day() -> f64 {
    unix_seconds_to_jd(now_unix_seconds())
}
