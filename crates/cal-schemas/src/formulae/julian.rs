//! Julian formulae over 64-bit day counts.  Day `0` is Julian `0001-01-01`.

use cal_core::math;

const DAYS_FROM_MARCH_TO_JANUARY: i64 = 306;

/// Return `true` if `y` is a Julian leap year.
#[inline]
pub fn is_leap_year(y: i64) -> bool {
    (y & 3) == 0
}

/// Number of days in month `m` of year `y`.
#[inline]
pub fn count_days_in_month(y: i64, m: i32) -> i32 {
    if m == 2 {
        28 + i32::from(is_leap_year(y))
    } else {
        30 + ((m + (m >> 3)) & 1)
    }
}

/// Days since Julian `0001-01-01` of `(y, m, d)`.
pub fn count_days_since_epoch(y: i64, m: i32, d: i32) -> i64 {
    let (y, m) = if m < 3 {
        (y - 1, i64::from(m) + 9)
    } else {
        (y, i64::from(m) - 3)
    };
    365 * y + math::divide(y, 4) + (153 * m + 2) / 5 + i64::from(d) - 1 - DAYS_FROM_MARCH_TO_JANUARY
}

/// Days since Julian `0001-01-01` of the first day of year `y`.
pub fn get_start_of_year(y: i64) -> i64 {
    let y = y - 1;
    365 * y + math::divide(y, 4)
}

/// `(year, month, day)` of the day `days_since_epoch`.
pub fn get_date_parts(days_since_epoch: i64) -> (i64, i32, i32) {
    let days = days_since_epoch + DAYS_FROM_MARCH_TO_JANUARY;
    let y = math::divide(4 * days + 3, 1461);
    let d = days - math::divide(1461 * y, 4);
    let m = (5 * d + 2) / 153;
    let day = d - (153 * m + 2) / 5 + 1;
    let (month, carry) = if m < 10 { (m + 3, 0) } else { (m - 9, 1) };
    (y + carry, month as i32, day as i32)
}

/// Year of the day `days_since_epoch`.
pub fn get_year(days_since_epoch: i64) -> i64 {
    math::divide(4 * days_since_epoch + 3, 1461) + 1
}
