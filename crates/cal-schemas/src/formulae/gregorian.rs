//! Gregorian formulae over 64-bit day counts.
//!
//! These are the entry points used by `DayNumber`, whose year range
//! (±5 000 000) needs 64-bit intermediates.  Day `0` is `0001-01-01`.
//!
//! The forward and backward conversions shift the year to start in March so
//! that the leap day is the last day of the shifted year and every month
//! length before it follows the `(153 m + 2) / 5` pattern.

use cal_core::math;

/// Days between 1 March of year 0 and 1 January of year 1.
const DAYS_FROM_MARCH_TO_JANUARY: i64 = 306;

const DAYS_PER_400_YEAR_CYCLE: i64 = 146_097;

/// Return `true` if `y` is a Gregorian leap year.
#[inline]
pub fn is_leap_year(y: i64) -> bool {
    (y & 3) == 0 && (y % 100 != 0 || y % 400 == 0)
}

/// Number of days in month `m` of year `y`.
#[inline]
pub fn count_days_in_month(y: i64, m: i32) -> i32 {
    if m == 2 {
        if is_leap_year(y) {
            29
        } else {
            28
        }
    } else {
        30 + ((m + (m >> 3)) & 1)
    }
}

/// Number of days in year `y`.
#[inline]
pub fn count_days_in_year(y: i64) -> i32 {
    if is_leap_year(y) {
        366
    } else {
        365
    }
}

/// Days since `0001-01-01` of `(y, m, d)`.
pub fn count_days_since_epoch(y: i64, m: i32, d: i32) -> i64 {
    let (y, m) = if m < 3 {
        (y - 1, i64::from(m) + 9)
    } else {
        (y, i64::from(m) - 3)
    };
    365 * y + math::divide(y, 4) - math::divide(y, 100) + math::divide(y, 400)
        + (153 * m + 2) / 5
        + i64::from(d)
        - 1
        - DAYS_FROM_MARCH_TO_JANUARY
}

/// Days since `0001-01-01` of `(y, doy)`.
pub fn count_days_since_epoch_ordinal(y: i64, doy: i32) -> i64 {
    get_start_of_year(y) + i64::from(doy) - 1
}

/// Days since `0001-01-01` of the first day of year `y`.
pub fn get_start_of_year(y: i64) -> i64 {
    let y = y - 1;
    365 * y + math::divide(y, 4) - math::divide(y, 100) + math::divide(y, 400)
}

/// `(year, month, day)` of the day `days_since_epoch`.
pub fn get_date_parts(days_since_epoch: i64) -> (i64, i32, i32) {
    let days = days_since_epoch + DAYS_FROM_MARCH_TO_JANUARY;
    let c = math::divide(4 * days + 3, DAYS_PER_400_YEAR_CYCLE);
    let d = days - math::divide(DAYS_PER_400_YEAR_CYCLE * c, 4);
    // 0 <= d < 146_097: plain division from here on.
    let y = (4 * d + 3) / 1461;
    let d = d - 1461 * y / 4;
    let m = (5 * d + 2) / 153;
    let day = d - (153 * m + 2) / 5 + 1;
    let (month, carry) = if m < 10 { (m + 3, 0) } else { (m - 9, 1) };
    // m < 12 and day <= 31: the narrowing cannot truncate.
    (100 * c + y + carry, month as i32, day as i32)
}

/// Year of the day `days_since_epoch`.
pub fn get_year(days_since_epoch: i64) -> i64 {
    get_date_parts(days_since_epoch).0
}

/// `(year, day_of_year)` of the day `days_since_epoch`.
pub fn get_ordinal_parts(days_since_epoch: i64) -> (i64, i32) {
    let y = get_year(days_since_epoch);
    // 0 <= days - start < 366.
    (y, (days_since_epoch - get_start_of_year(y)) as i32 + 1)
}
