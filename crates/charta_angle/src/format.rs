//! DMS display strings.
//!
//! ```
//! use charta_angle::{AngleKind, DmsFormat, format_dms, lat_string};
//!
//! assert_eq!(lat_string(51.5), "51º 30' 00\" N");
//! assert_eq!(format_dms(-10.25, &DmsFormat::default()), "-10º 15' 00\"");
//! let flexi = DmsFormat::default().with_kind(AngleKind::Lng).with_full_mode(false);
//! assert_eq!(format_dms(15.0, &flexi), "15º E");
//! ```

use crate::dms::decimal_to_dms;
use crate::error::AngleError;
use crate::kind::{AngleKind, compass_letter};

/// Rendering options for [`format_dms`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DmsFormat {
    pub kind: AngleKind,
    /// Decimal places of the seconds, with trailing zeros trimmed. `None`
    /// drops the seconds.
    pub precision: Option<u32>,
    /// Pad degrees to two digits.
    pub zero_pad_degrees: bool,
    /// Always show minutes and seconds, even when both are zero.
    pub full_mode: bool,
}

impl Default for DmsFormat {
    fn default() -> Self {
        Self {
            kind: AngleKind::Raw,
            precision: Some(3),
            zero_pad_degrees: false,
            full_mode: true,
        }
    }
}

impl DmsFormat {
    pub fn with_kind(mut self, kind: AngleKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_precision(mut self, precision: Option<u32>) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_zero_pad_degrees(mut self, pad: bool) -> Self {
        self.zero_pad_degrees = pad;
        self
    }

    pub fn with_full_mode(mut self, full: bool) -> Self {
        self.full_mode = full;
        self
    }
}

/// Render `value` degrees as DMS text. Non-finite values render as zero.
pub fn format_dms(value: f64, format: &DmsFormat) -> String {
    try_format_dms(value, format).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "formatting angle as zero");
        render(0.0, format)
    })
}

/// Fallible form of [`format_dms`].
pub fn try_format_dms(value: f64, format: &DmsFormat) -> Result<String, AngleError> {
    if value.is_finite() {
        Ok(render(value, format))
    } else {
        Err(AngleError::NonFinite(value))
    }
}

fn render(value: f64, format: &DmsFormat) -> String {
    let mut dms = decimal_to_dms(value % 360.0);
    if let Some(places) = format.precision {
        dms = dms.rounded(places);
    }
    // A carry out of 359º 59' wraps the circle.
    if dms.degrees >= 360 {
        dms.degrees -= 360;
    }

    let letter = compass_letter(value, format.kind).filter(|_| value != 0.0);
    let sign = if format.kind == AngleKind::Prefix || (value < 0.0 && letter.is_none()) {
        if value < 0.0 { "-" } else { "+" }
    } else {
        ""
    };
    let degrees = if format.zero_pad_degrees {
        format!("{:02}", dms.degrees)
    } else {
        dms.degrees.to_string()
    };

    let mut parts = vec![format!("{sign}{degrees}º")];
    if format.full_mode || dms.minutes > 0 || dms.seconds > 0.0 {
        if let Some(letter) = letter.filter(|_| format.kind.letter_in_middle()) {
            parts.push(letter.to_string());
        }
        parts.push(format!("{:02}'", dms.minutes));
        if let Some(places) = format.precision {
            parts.push(format!("{}\"", seconds_text(dms.seconds, places)));
        }
    }
    if let Some(letter) = letter.filter(|_| !format.kind.letter_in_middle()) {
        parts.push(letter.to_string());
    }
    parts.join(" ")
}

/// Seconds to `places` decimals, trailing zeros trimmed, integer part
/// padded to two digits.
fn seconds_text(seconds: f64, places: u32) -> String {
    let fixed = format!("{seconds:.prec$}", prec = places as usize);
    let trimmed = if places > 0 {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    match trimmed.split_once('.') {
        Some((int, frac)) => format!("{int:0>2}.{frac}"),
        None => format!("{trimmed:0>2}"),
    }
}

/// Compact rendering: minutes and seconds are omitted when both are zero.
pub fn format_dms_flexi(value: f64, kind: AngleKind, precision: u32, zero_pad_degrees: bool) -> String {
    let format = DmsFormat {
        kind,
        precision: Some(precision),
        zero_pad_degrees,
        full_mode: false,
    };
    format_dms(value, &format)
}

/// Latitude with a trailing N/S.
pub fn lat_string(value: f64) -> String {
    format_dms(value, &DmsFormat::default().with_kind(AngleKind::Lat))
}

/// Longitude with a trailing E/W.
pub fn lng_string(value: f64) -> String {
    format_dms(value, &DmsFormat::default().with_kind(AngleKind::Lng))
}

/// Degrees and minutes only.
pub fn format_dm(value: f64, kind: AngleKind, zero_pad_degrees: bool) -> String {
    let format = DmsFormat {
        kind,
        precision: None,
        zero_pad_degrees,
        full_mode: true,
    };
    format_dms(value, &format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_default() {
        assert_eq!(format_dms(23.853, &DmsFormat::default()), "23º 51' 10.8\"");
        assert_eq!(format_dms(-10.25, &DmsFormat::default()), "-10º 15' 00\"");
        assert_eq!(format_dms(0.0, &DmsFormat::default()), "0º 00' 00\"");
    }

    #[test]
    fn seconds_carry_into_minutes() {
        let value = 10.0 + 29.0 / 60.0 + 59.996 / 3600.0;
        let format = DmsFormat::default().with_precision(Some(2));
        assert_eq!(format_dms(value, &format), "10º 30' 00\"");
    }

    #[test]
    fn minutes_carry_into_degrees() {
        let value = 44.0 + 59.0 / 60.0 + 59.9999 / 3600.0;
        assert_eq!(format_dms(value, &DmsFormat::default()), "45º 00' 00\"");
    }

    #[test]
    fn prefix_kind() {
        let format = DmsFormat::default().with_kind(AngleKind::Prefix);
        assert_eq!(format_dms(5.5, &format), "+5º 30' 00\"");
        assert_eq!(format_dms(-5.5, &format), "-5º 30' 00\"");
    }

    #[test]
    fn compass_kinds() {
        assert_eq!(lat_string(-33.5), "33º 30' 00\" S");
        assert_eq!(lng_string(-0.1275), "0º 07' 39\" W");
        let mid = DmsFormat::default().with_kind(AngleKind::MidLat);
        assert_eq!(format_dms(51.5, &mid), "51º N 30' 00\"");
        // Zero has no letter.
        assert_eq!(lat_string(0.0), "0º 00' 00\"");
    }

    #[test]
    fn zero_padded_degrees() {
        let format = DmsFormat::default().with_zero_pad_degrees(true);
        assert_eq!(format_dms(5.0, &format), "05º 00' 00\"");
        assert_eq!(format_dms(123.0, &format), "123º 00' 00\"");
    }

    #[test]
    fn wraps_at_360() {
        assert_eq!(format_dms(370.5, &DmsFormat::default()), "10º 30' 00\"");
        assert_eq!(format_dms(-370.5, &DmsFormat::default()), "-10º 30' 00\"");
    }

    #[test]
    fn carry_past_359_wraps_to_zero() {
        assert_eq!(format_dms(359.9999999, &DmsFormat::default()), "0º 00' 00\"");
        assert_eq!(lng_string(359.99999999), "0º 00' 00\" E");
        assert_eq!(format_dms(359.5, &DmsFormat::default()), "359º 30' 00\"");
    }

    #[test]
    fn flexi_drops_empty_parts() {
        assert_eq!(format_dms_flexi(15.0, AngleKind::Raw, 3, false), "15º");
        assert_eq!(format_dms_flexi(-15.0, AngleKind::Lng, 3, false), "15º W");
        assert_eq!(format_dms_flexi(15.5, AngleKind::Raw, 3, false), "15º 30' 00\"");
    }

    #[test]
    fn degrees_minutes_only() {
        assert_eq!(format_dm(12.345, AngleKind::Raw, false), "12º 20'");
        assert_eq!(format_dm(-12.345, AngleKind::Lat, true), "12º 20' S");
    }

    #[test]
    fn seconds_text_padding() {
        assert_eq!(seconds_text(5.25, 3), "05.25");
        assert_eq!(seconds_text(0.0, 3), "00");
        assert_eq!(seconds_text(59.4, 0), "59");
        assert_eq!(seconds_text(10.0, 2), "10");
        assert_eq!(seconds_text(7.125, 1), "07.1");
    }

    #[test]
    fn non_finite_renders_zero() {
        assert_eq!(format_dms(f64::NAN, &DmsFormat::default()), "0º 00' 00\"");
        assert!(try_format_dms(f64::INFINITY, &DmsFormat::default()).is_err());
    }
}
