//! Proleptic Gregorian calendar arithmetic.
//!
//! Day offsets are counted from 1970-01-01 (offset 0); negative offsets are
//! days before the epoch. Year resolution is closed-form: an estimate from
//! the mean Gregorian year is corrected against exact year starts, so any
//! offset inside the supported range resolves in constant time.

use serde::Serialize;

use crate::julian::EPOCH_YEAR;

const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Mean length of a Gregorian year in days (400-year cycle).
const MEAN_YEAR_DAYS: f64 = 365.2425;

/// Largest reference-day magnitude resolved exactly (about ±2.7 billion
/// years). Larger offsets are clamped to keep the day arithmetic in `i64`.
pub const MAX_REF_DAYS: f64 = 1.0e12;

/// The calendar year containing a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct YearItem {
    /// Gregorian year (astronomical numbering: year 0 exists).
    pub year: i64,
    /// 0-based day index within the year, in `[0, year_length)`.
    pub day_of_year: u32,
    /// Day offset from the epoch of the year's first day.
    pub year_start_offset: f64,
    /// 365 or 366.
    pub year_length: u32,
}

/// Month and day-of-month for a day-of-year index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MonthDay {
    /// 1-based month, or 0 when the day index is past the end of the year.
    pub month: u32,
    /// 1-based day of month, or 0 when the day index is past the end of the year.
    pub day: u32,
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `year` (365 or 366).
pub const fn days_in_year(year: i64) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Number of days in `month` (1-based) of `year`. Returns 0 for an invalid month.
pub fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => MONTH_LENGTHS[(month - 1) as usize],
        _ => 0,
    }
}

/// Day offset from 1970-01-01 of a civil date.
///
/// Howard Hinnant's `days_from_civil`; month and day are not range-checked,
/// out-of-range values roll over arithmetically.
pub fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let m = i64::from(month);
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Civil date `(year, month, day)` of a day offset from 1970-01-01.
///
/// Inverse of [`days_from_civil`] (Howard Hinnant's `civil_from_days`).
pub fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

/// Resolve the calendar year containing a (possibly fractional, possibly
/// negative) day offset from the epoch.
///
/// Non-finite input resolves to the epoch year.
pub fn year_item_from_ref_day(ref_day: f64) -> YearItem {
    let day = if ref_day.is_finite() {
        ref_day.clamp(-MAX_REF_DAYS, MAX_REF_DAYS).floor() as i64
    } else {
        0
    };

    // The mean-year estimate is never more than one year off.
    let mut year = EPOCH_YEAR + (day as f64 / MEAN_YEAR_DAYS).floor() as i64;
    let mut start = days_from_civil(year, 1, 1);
    while start > day {
        year -= 1;
        start = days_from_civil(year, 1, 1);
    }
    loop {
        let len = i64::from(days_in_year(year));
        if day < start + len {
            break;
        }
        start += len;
        year += 1;
    }

    YearItem {
        year,
        day_of_year: (day - start) as u32,
        year_start_offset: start as f64,
        year_length: days_in_year(year),
    }
}

/// Month and day for a 0-based day-of-year index.
///
/// `year_length` selects the February length (366 → 29 days). An index past
/// the end of the year yields month 0, day 0.
pub fn month_day_from_day_of_year(day_of_year: u32, year_length: u32) -> MonthDay {
    let mut days = 0;
    for (i, &len) in MONTH_LENGTHS.iter().enumerate() {
        let len = if i == 1 && year_length == 366 { 29 } else { len };
        days += len;
        if days > day_of_year {
            return MonthDay {
                month: i as u32 + 1,
                day: day_of_year - (days - len) + 1,
            };
        }
    }
    MonthDay::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2023, 13), 0);
        assert_eq!(days_in_month(2023, 0), 0);
    }

    #[test]
    fn days_from_civil_known() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(2024, 1, 1), 19_723);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(days_from_civil(1997, 5, 19), 10_000);
    }

    #[test]
    fn civil_days_roundtrip() {
        for days in [-1_000_000, -719_468, -366, -1, 0, 1, 365, 10_000, 19_723, 2_932_896] {
            let (y, m, d) = civil_from_days(days);
            assert_eq!(days_from_civil(y, m, d), days, "roundtrip failed for day {days}");
        }
    }

    #[test]
    fn year_item_epoch() {
        let item = year_item_from_ref_day(0.0);
        assert_eq!(item.year, 1970);
        assert_eq!(item.day_of_year, 0);
        assert_eq!(item.year_start_offset, 0.0);
        assert_eq!(item.year_length, 365);
    }

    #[test]
    fn year_item_last_day_before_epoch() {
        let item = year_item_from_ref_day(-0.25);
        assert_eq!(item.year, 1969);
        assert_eq!(item.day_of_year, 364);
        assert_eq!(item.year_start_offset, -365.0);
    }

    #[test]
    fn year_item_leap_year_end() {
        // 2024-12-31 is day 365 of a 366-day year.
        let day = days_from_civil(2024, 12, 31) as f64 + 0.9;
        let item = year_item_from_ref_day(day);
        assert_eq!(item.year, 2024);
        assert_eq!(item.day_of_year, 365);
        assert_eq!(item.year_length, 366);
    }

    #[test]
    fn year_item_year_boundaries() {
        for year in [1600, 1899, 1900, 1969, 1970, 2000, 2001, 2100, 2400] {
            let start = days_from_civil(year, 1, 1) as f64;
            assert_eq!(year_item_from_ref_day(start).year, year);
            assert_eq!(year_item_from_ref_day(start - 0.000_01).year, year - 1);
        }
    }

    #[test]
    fn year_item_extreme_years() {
        for year in [-1_000_000, -10_001, 10_001, 1_000_000] {
            let start = days_from_civil(year, 3, 1) as f64;
            let item = year_item_from_ref_day(start);
            assert_eq!(item.year, year);
            assert_eq!(item.year_start_offset, days_from_civil(year, 1, 1) as f64);
        }
    }

    #[test]
    fn year_item_non_finite() {
        assert_eq!(year_item_from_ref_day(f64::NAN).year, 1970);
        assert_eq!(year_item_from_ref_day(f64::INFINITY).year, 1970);
    }

    #[test]
    fn month_day_common_year() {
        assert_eq!(month_day_from_day_of_year(0, 365), MonthDay { month: 1, day: 1 });
        assert_eq!(month_day_from_day_of_year(31, 365), MonthDay { month: 2, day: 1 });
        assert_eq!(month_day_from_day_of_year(59, 365), MonthDay { month: 3, day: 1 });
        assert_eq!(month_day_from_day_of_year(364, 365), MonthDay { month: 12, day: 31 });
    }

    #[test]
    fn month_day_leap_year() {
        assert_eq!(month_day_from_day_of_year(59, 366), MonthDay { month: 2, day: 29 });
        assert_eq!(month_day_from_day_of_year(60, 366), MonthDay { month: 3, day: 1 });
        assert_eq!(month_day_from_day_of_year(365, 366), MonthDay { month: 12, day: 31 });
    }

    #[test]
    fn month_day_past_end() {
        assert_eq!(month_day_from_day_of_year(365, 365), MonthDay::default());
    }
}
