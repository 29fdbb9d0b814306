//! Decimal degrees ⟷ degrees-minutes-seconds for coordinate display.
//!
//! - [`Dms`] and the decimal conversions in both directions
//! - A tolerant parser for hand-typed DMS text with compass letters
//! - DMS rendering for raw angles, signed angles, latitudes and longitudes
//!
//! Malformed input never panics. The plain functions fall back to zero and
//! the `try_*` functions return an [`AngleError`].

pub mod dms;
pub mod error;
pub mod format;
pub mod kind;
pub mod parse;
pub mod util;

pub use dms::{Dms, decimal_to_dms, dms_parts_to_decimal, dms_to_decimal, try_decimal_to_dms};
pub use error::AngleError;
pub use format::{
    DmsFormat, format_dm, format_dms, format_dms_flexi, lat_string, lng_string, try_format_dms,
};
pub use kind::{AngleKind, Axis, Compass, compass_letter};
pub use parse::{
    DmsParts, ParsedDms, dms_string_to_decimal, dms_string_to_parts, dms_units_to_string,
    parse_dms_string, try_parse_dms_string,
};
pub use util::{dec_places, relative_angle};
