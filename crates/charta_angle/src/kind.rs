//! Compass directions and angle kinds.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::AngleError;

/// Geographic axis of a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Lat,
    Lng,
}

impl Axis {
    /// Letter for a value on this axis: N/S for latitude, E/W for longitude.
    pub fn compass(self, negative: bool) -> Compass {
        match (self, negative) {
            (Self::Lat, false) => Compass::N,
            (Self::Lat, true) => Compass::S,
            (Self::Lng, false) => Compass::E,
            (Self::Lng, true) => Compass::W,
        }
    }

    /// Largest magnitude on the axis.
    pub fn limit(self) -> f64 {
        match self {
            Self::Lat => 90.0,
            Self::Lng => 180.0,
        }
    }
}

impl FromStr for Axis {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lat" => Ok(Self::Lat),
            "lng" | "lon" => Ok(Self::Lng),
            other => Err(AngleError::UnknownKind(other.to_string())),
        }
    }
}

/// Compass direction letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Compass {
    N,
    S,
    E,
    W,
}

impl Compass {
    /// Case-insensitive lookup from a single character.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Self::N),
            'S' => Some(Self::S),
            'E' => Some(Self::E),
            'W' => Some(Self::W),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::N => 'N',
            Self::S => 'S',
            Self::E => 'E',
            Self::W => 'W',
        }
    }

    /// South and west are negative.
    pub fn is_negative(self) -> bool {
        matches!(self, Self::S | Self::W)
    }

    pub fn axis(self) -> Axis {
        match self {
            Self::N | Self::S => Axis::Lat,
            Self::E | Self::W => Axis::Lng,
        }
    }

    /// Apply the direction to a magnitude and clamp it to the axis range
    /// in that direction.
    pub fn apply(self, value: f64) -> f64 {
        let limit = self.axis().limit();
        if self.is_negative() {
            (-value.abs()).max(-limit)
        } else {
            value.abs().min(limit)
        }
    }
}

impl Display for Compass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// How a formatted angle shows its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AngleKind {
    /// `-` for negative values only.
    #[default]
    Raw,
    /// Always `+` or `-`.
    Prefix,
    /// Trailing N/S.
    Lat,
    /// Trailing E/W.
    Lng,
    /// N/S between degrees and minutes.
    MidLat,
    /// E/W between degrees and minutes.
    MidLng,
}

impl AngleKind {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Prefix => "prefix",
            Self::Lat => "lat",
            Self::Lng => "lng",
            Self::MidLat => "mlat",
            Self::MidLng => "mlng",
        }
    }

    /// Axis of the compass letter, if the kind shows one.
    pub fn axis(self) -> Option<Axis> {
        match self {
            Self::Lat | Self::MidLat => Some(Axis::Lat),
            Self::Lng | Self::MidLng => Some(Axis::Lng),
            Self::Raw | Self::Prefix => None,
        }
    }

    pub fn letter_in_middle(self) -> bool {
        matches!(self, Self::MidLat | Self::MidLng)
    }
}

impl FromStr for AngleKind {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "raw" => Ok(Self::Raw),
            "prefix" => Ok(Self::Prefix),
            "lat" => Ok(Self::Lat),
            "lng" | "lon" => Ok(Self::Lng),
            "mlat" => Ok(Self::MidLat),
            "mlng" | "mlon" => Ok(Self::MidLng),
            other => Err(AngleError::UnknownKind(other.to_string())),
        }
    }
}

impl Display for AngleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Compass letter for `value` under `kind`, or `None` for kinds without one.
pub fn compass_letter(value: f64, kind: AngleKind) -> Option<Compass> {
    kind.axis().map(|axis| axis.compass(value < 0.0))
}
