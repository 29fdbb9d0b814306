//! Decimal degrees ⟷ degrees-minutes-seconds.

use serde::Serialize;

use crate::error::AngleError;

/// An angle split into whole degrees, whole minutes and fractional seconds.
///
/// The sign is held in `negative`; the other fields are magnitudes, so
/// -10.25° is `-10º 15' 0"` rather than `-11º 45'`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Dms {
    pub negative: bool,
    pub degrees: u32,
    /// 0..=59
    pub minutes: u32,
    /// [0, 60)
    pub seconds: f64,
}

impl Dms {
    pub fn new(negative: bool, degrees: u32, minutes: u32, seconds: f64) -> Self {
        Self {
            negative,
            degrees,
            minutes,
            seconds,
        }
    }

    /// Signed decimal degrees.
    pub fn to_decimal(&self) -> f64 {
        let magnitude =
            f64::from(self.degrees) + f64::from(self.minutes) / 60.0 + self.seconds / 3600.0;
        if self.negative { -magnitude } else { magnitude }
    }

    /// Degrees with the sign applied.
    pub fn signed_degrees(&self) -> i64 {
        let d = i64::from(self.degrees);
        if self.negative { -d } else { d }
    }

    /// Round seconds to `places` decimals. Seconds that round up to 60 carry
    /// into the minutes, and 60 minutes carry into the degrees.
    pub fn rounded(&self, places: u32) -> Self {
        let factor = 10f64.powi(places.min(9) as i32);
        let mut seconds = (self.seconds * factor).round() / factor;
        let mut minutes = self.minutes;
        let mut degrees = self.degrees;
        if seconds >= 60.0 {
            seconds -= 60.0;
            minutes += 1;
        }
        if minutes >= 60 {
            minutes -= 60;
            degrees = degrees.saturating_add(1);
        }
        Self {
            negative: self.negative,
            degrees,
            minutes,
            seconds,
        }
    }
}

/// Split decimal degrees into [`Dms`]. Non-finite input yields all zeros.
///
/// Degrees beyond `u32::MAX` saturate.
pub fn decimal_to_dms(value: f64) -> Dms {
    try_decimal_to_dms(value).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "angle resolved to zero");
        Dms::default()
    })
}

/// Fallible form of [`decimal_to_dms`].
pub fn try_decimal_to_dms(value: f64) -> Result<Dms, AngleError> {
    if !value.is_finite() {
        return Err(AngleError::NonFinite(value));
    }
    let magnitude = value.abs();
    let degrees = magnitude.floor();
    let fl_minutes = (magnitude - degrees) * 60.0;
    let mut minutes = fl_minutes.floor() as u32;
    let mut seconds = (fl_minutes - f64::from(minutes)) * 60.0;
    if seconds >= 60.0 {
        minutes += 1;
        seconds %= 60.0;
    }
    Ok(Dms {
        negative: value < 0.0,
        degrees: degrees as u32,
        minutes,
        seconds,
    })
}

/// Signed decimal degrees of a [`Dms`].
pub fn dms_to_decimal(dms: &Dms) -> f64 {
    dms.to_decimal()
}

/// `degrees + minutes/60 + seconds/3600`, absent parts counting as zero.
pub fn dms_parts_to_decimal(degrees: Option<f64>, minutes: Option<f64>, seconds: Option<f64>) -> f64 {
    degrees.unwrap_or(0.0) + minutes.unwrap_or(0.0) / 60.0 + seconds.unwrap_or(0.0) / 3600.0
}
