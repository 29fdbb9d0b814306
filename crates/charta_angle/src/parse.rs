//! Tolerant DMS text parsing.
//!
//! Accepts degrees, minutes and seconds separated by any run of spaces and
//! `º ° ' "` marks, with an optional compass letter before or after the
//! numbers (attached or free-standing):
//!
//! ```text
//! 51º 30' 26" N
//! -0 07 39
//! 51N 30 26
//! W 122 25 09.5
//! ```
//!
//! Tokens that are neither numbers nor compass letters (`deg`, `N.`, stray
//! words) are skipped. A leading `-` on the first number negates the whole
//! value. A compass letter overrides the sign (S and W are negative) and
//! clamps the result to the axis range in that direction.

use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::dms::{Dms, decimal_to_dms};
use crate::error::AngleError;
use crate::kind::{Axis, Compass};

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[º°'"′″\s]+"#).unwrap());

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([NSEW])?([+-]?(?:\d+(?:\.\d*)?|\.\d+))?([NSEW])?$").unwrap()
});

static UNSIGNED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());

/// Result of parsing DMS text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ParsedDms {
    /// Signed decimal degrees after direction and clamping.
    pub value: f64,
    pub dms: Dms,
    pub direction: Option<Compass>,
}

/// Parse DMS text, rejecting text with no number.
pub fn try_parse_dms_string(text: &str) -> Result<ParsedDms, AngleError> {
    let malformed = || AngleError::Malformed(text.to_string());

    let mut direction = None;
    let mut numbers: Vec<&str> = Vec::with_capacity(3);
    for token in SEPARATOR_RE.split(text.trim()).filter(|t| !t.is_empty()) {
        let Some(caps) = TOKEN_RE.captures(token) else {
            tracing::trace!(token, "skipping non-DMS token");
            continue;
        };
        let letter = caps.get(1).or_else(|| caps.get(3));
        if direction.is_none() {
            direction = letter
                .and_then(|m| m.as_str().chars().next())
                .and_then(Compass::from_char);
        }
        if let Some(num) = caps.get(2) {
            numbers.push(num.as_str());
        }
    }

    let first = numbers.first().ok_or_else(malformed)?;
    let negative = first.starts_with('-');
    let mut magnitude = 0.0;
    for (num, scale) in numbers.iter().zip([1.0, 60.0, 3600.0]) {
        let n: f64 = num.parse().map_err(|_| malformed())?;
        magnitude += n.abs() / scale;
    }

    let mut value = if negative { -magnitude } else { magnitude };
    if let Some(dir) = direction {
        value = dir.apply(value);
    }

    Ok(ParsedDms {
        value,
        dms: decimal_to_dms(value),
        direction,
    })
}

/// Parse DMS text. Malformed text yields zero with no direction.
pub fn parse_dms_string(text: &str) -> ParsedDms {
    try_parse_dms_string(text).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "DMS text resolved to zero");
        ParsedDms::default()
    })
}

/// Signed decimal degrees of DMS text, or `0.0` when malformed.
pub fn dms_string_to_decimal(text: &str) -> f64 {
    parse_dms_string(text).value
}

/// Whole-number DMS fields read from free-form input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DmsParts {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub direction: Option<Compass>,
}

impl DmsParts {
    /// Signed decimal degrees, negative for S or W.
    pub fn to_decimal(&self) -> f64 {
        let magnitude = f64::from(self.degrees)
            + f64::from(self.minutes) / 60.0
            + f64::from(self.seconds) / 3600.0;
        match self.direction {
            Some(dir) if dir.is_negative() => -magnitude,
            _ => magnitude,
        }
    }
}

impl Display for DmsParts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&dms_units_to_string(
            self.degrees,
            self.minutes,
            self.seconds,
            self.direction,
        ))
    }
}

/// Pull up to three whole numbers from `text` as degrees, minutes and
/// seconds. The direction is the first letter in the text when it belongs to
/// `axis` (N/S for latitude, E/W for longitude).
pub fn dms_string_to_parts(text: &str, axis: Axis) -> DmsParts {
    let direction = text
        .chars()
        .find(char::is_ascii_alphabetic)
        .and_then(Compass::from_char)
        .filter(|c| c.axis() == axis);

    let mut whole = UNSIGNED_RE
        .find_iter(text)
        .map(|m| m.as_str().parse::<f64>().map_or(0, |n| n.floor() as u32));

    DmsParts {
        degrees: whole.next().unwrap_or(0),
        minutes: whole.next().unwrap_or(0),
        seconds: whole.next().unwrap_or(0),
        direction,
    }
}

/// `Dº MM' SS" DIR`, without the trailing space when there is no direction.
pub fn dms_units_to_string(degrees: u32, minutes: u32, seconds: u32, direction: Option<Compass>) -> String {
    match direction {
        Some(dir) => format!("{degrees}º {minutes:02}' {seconds:02}\" {dir}"),
        None => format!("{degrees}º {minutes:02}' {seconds:02}\""),
    }
}
