//! Day boundaries anchored to an offset or a longitude.
//!
//! Julian Days change at Greenwich noon. These helpers snap a Julian Day to
//! the nearest noon (or midnight) and shift it so that the boundary falls at
//! local noon for a timezone offset or a longitude.

use crate::julian::SECONDS_PER_DAY;

/// Round half up, matching the usual browser rounding (`-0.5` → `0`).
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Nearest Greenwich noon to `jd`, shifted back by `offset_s` seconds so it
/// falls on local noon at that offset.
pub fn julian_day_offset_to_noon(jd: f64, offset_s: f64) -> f64 {
    round_half_up(jd) - offset_s / SECONDS_PER_DAY
}

/// Fraction of a day that local solar time leads Greenwich by at `lng`
/// degrees east.
pub fn longitude_day_fraction(lng: f64) -> f64 {
    lng / 360.0
}

/// Nearest day boundary to `jd` in local solar time at `lng`: noon when
/// `noon` is set, otherwise midnight.
pub fn julian_day_geo_offset_to_start(jd: f64, lng: f64, noon: bool) -> f64 {
    let start_offset = if noon { 0.0 } else { -0.5 };
    round_half_up(jd - start_offset) - longitude_day_fraction(lng) + start_offset
}

/// Nearest local solar noon to `jd` at `lng`.
pub fn julian_day_geo_offset_to_noon(jd: f64, lng: f64) -> f64 {
    julian_day_geo_offset_to_start(jd, lng, true)
}

/// Offset in seconds of the 15° zone containing `lng` (centred on
/// multiples of 15°).
pub fn natural_tz_offset(lng: f64) -> i32 {
    ((lng + 7.5) / 15.0).floor() as i32 * 3600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_noon() {
        assert_eq!(julian_day_offset_to_noon(2_451_545.3, 0.0), 2_451_545.0);
        assert_eq!(julian_day_offset_to_noon(2_451_544.6, 0.0), 2_451_545.0);
        assert_eq!(julian_day_offset_to_noon(2_451_544.5, 0.0), 2_451_545.0);
        assert!((julian_day_offset_to_noon(2_451_545.2, 21_600.0) - 2_451_544.75).abs() < 1e-9);
    }

    #[test]
    fn longitude_fraction() {
        assert_eq!(longitude_day_fraction(0.0), 0.0);
        assert_eq!(longitude_day_fraction(90.0), 0.25);
        assert_eq!(longitude_day_fraction(-180.0), -0.5);
    }

    #[test]
    fn geo_noon_and_midnight() {
        let noon = julian_day_geo_offset_to_noon(2_451_545.1, 90.0);
        assert!((noon - 2_451_544.75).abs() < 1e-9);

        // Nearest Greenwich midnight to 2451545.1 is 2451545.5.
        let start = julian_day_geo_offset_to_start(2_451_545.1, 0.0, false);
        assert!((start - 2_451_545.5).abs() < 1e-9);
        let start = julian_day_geo_offset_to_start(2_451_545.1, -90.0, false);
        assert!((start - 2_451_545.75).abs() < 1e-9);
    }

    #[test]
    fn natural_offsets() {
        assert_eq!(natural_tz_offset(0.0), 0);
        assert_eq!(natural_tz_offset(7.4), 0);
        assert_eq!(natural_tz_offset(7.5), 3600);
        assert_eq!(natural_tz_offset(77.2), 18_000);
        assert_eq!(natural_tz_offset(-73.9), -18_000);
        assert_eq!(natural_tz_offset(-7.6), -3600);
        assert_eq!(natural_tz_offset(180.0), 43_200);
    }
}
