//! Host timezone offset lookup.
//!
//! The host zone is the only environmental input to the converters besides
//! the clock. It sits behind [`LocalOffsetSource`] so callers that need
//! deterministic output can pin it with [`FixedLocalOffset`].

use time::{OffsetDateTime, UtcOffset};

use crate::error::TimeError;

/// Supplies the local offset east of UTC, in seconds, at a given instant.
pub trait LocalOffsetSource {
    fn offset_at(&self, unix_seconds: f64) -> i32;
}

/// The host's configured timezone, resolved through the `time` crate.
///
/// Falls back to UTC when the platform cannot report an offset (for example
/// on Unix when other threads are running).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocalOffset;

impl LocalOffsetSource for SystemLocalOffset {
    fn offset_at(&self, unix_seconds: f64) -> i32 {
        try_local_offset_at(unix_seconds).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to UTC for local offset");
            0
        })
    }
}

/// A constant offset, independent of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedLocalOffset(pub i32);

impl LocalOffsetSource for FixedLocalOffset {
    fn offset_at(&self, _unix_seconds: f64) -> i32 {
        self.0
    }
}

/// Host offset east of UTC at `unix_seconds`.
pub fn try_local_offset_at(unix_seconds: f64) -> Result<i32, TimeError> {
    if !unix_seconds.is_finite() {
        return Err(TimeError::NonFiniteSeconds(unix_seconds));
    }
    let instant = OffsetDateTime::from_unix_timestamp(unix_seconds.floor() as i64)
        .map_err(|e| TimeError::LocalOffsetUnavailable(e.to_string()))?;
    UtcOffset::local_offset_at(instant)
        .map(UtcOffset::whole_seconds)
        .map_err(|e| TimeError::LocalOffsetUnavailable(e.to_string()))
}

/// Host offset east of UTC right now, or 0 when it cannot be determined.
pub fn local_tz_offset() -> i32 {
    SystemLocalOffset.offset_at(crate::julian::now_unix_seconds())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_source_ignores_instant() {
        let src = FixedLocalOffset(19_800);
        assert_eq!(src.offset_at(0.0), 19_800);
        assert_eq!(src.offset_at(1.0e9), 19_800);
    }

    #[test]
    fn system_offset_is_plausible() {
        // Either the real zone or the UTC fallback; both lie within ±18 h.
        let offset = SystemLocalOffset.offset_at(0.0);
        assert!(offset.abs() <= 18 * 3600);
    }

    #[test]
    fn non_finite_instant_rejected() {
        assert!(matches!(
            try_local_offset_at(f64::NAN),
            Err(TimeError::NonFiniteSeconds(_))
        ));
    }
}
