//! Error types for Julian Day and calendar conversions.

/// Errors from the fallible (`try_*`) conversion entry points.
///
/// The infallible entry points never return these; they resolve the same
/// conditions to a neutral default value instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Date/time text did not match `YYYY-MM-DD[THH:MM[:SS[.fff]]][Z]`
    /// or named an impossible calendar date.
    #[error("invalid date string: {0:?}")]
    InvalidDateString(String),
    /// Julian Day is NaN or infinite.
    #[error("Julian Day is not finite: {0}")]
    NonFiniteJulianDay(f64),
    /// Julian Day is zero or negative.
    #[error("Julian Day must be positive, got {0}")]
    NonPositiveJulianDay(f64),
    /// Unix seconds value is NaN or infinite.
    #[error("seconds value is not finite: {0}")]
    NonFiniteSeconds(f64),
    /// The host timezone offset could not be determined.
    #[error("local offset unavailable: {0}")]
    LocalOffsetUnavailable(String),
    /// Unrecognised date style code.
    #[error("unknown date style: {0:?}")]
    UnknownDateStyle(String),
}
