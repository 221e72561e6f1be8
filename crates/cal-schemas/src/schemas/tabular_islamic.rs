//! The tabular Islamic schema.
//!
//! A 30-year cycle with eleven leap years; year `y` is leap when
//! `(14 + 11 y) mod 30 < 11`.  Months alternate between 30 and 29 days,
//! the last month receiving a 30th day in leap years.

use cal_core::math;

use crate::constants::{DAYS_IN_LUNAR_COMMON_YEAR, DAYS_PER_30_YEAR_LUNAR_CYCLE};
use crate::profile::CalendricalProfile;
use crate::schema::{regular_month_counting, CalendricalSchema};

/// Days before the last month.
const DAYS_BEFORE_LAST_MONTH: i32 = 325;

/// The tabular Islamic calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularIslamicSchema;

impl CalendricalSchema for TabularIslamicSchema {
    regular_month_counting!(12);

    fn profile(&self) -> CalendricalProfile {
        CalendricalProfile::Lunar
    }

    fn min_days_in_year(&self) -> i32 {
        DAYS_IN_LUNAR_COMMON_YEAR
    }

    fn min_days_in_month(&self) -> i32 {
        29
    }

    fn is_leap_year(&self, y: i32) -> bool {
        math::modulo(14 + 11 * y, 30) < 11
    }

    fn is_intercalary_day(&self, _y: i32, m: i32, d: i32) -> bool {
        m == 12 && d == 30
    }

    fn is_supplementary_day(&self, _y: i32, _m: i32, _d: i32) -> bool {
        false
    }

    fn count_days_in_year(&self, y: i32) -> i32 {
        DAYS_IN_LUNAR_COMMON_YEAR + i32::from(self.is_leap_year(y))
    }

    fn count_days_in_month(&self, y: i32, m: i32) -> i32 {
        if m == 12 {
            29 + i32::from(self.is_leap_year(y))
        } else {
            29 + (m & 1)
        }
    }

    fn count_days_in_year_before_month(&self, _y: i32, m: i32) -> i32 {
        29 * (m - 1) + m / 2
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        // 30 · days exceeds the range of i32.
        let days = i64::from(days_since_epoch);
        let y = math::divide(30 * days + 10_646, i64::from(DAYS_PER_30_YEAR_LUNAR_CYCLE));
        // |y| < |days| / 354 + 1: the narrowing cannot truncate.
        let y = y as i32;
        (y, days_since_epoch - self.get_start_of_year(y) + 1)
    }

    fn get_month(&self, _y: i32, doy: i32) -> (i32, i32) {
        if doy > DAYS_BEFORE_LAST_MONTH {
            return (12, doy - DAYS_BEFORE_LAST_MONTH);
        }
        // Pairs of months span 59 days.
        let d0 = doy - 1;
        let m = 2 * (d0 / 59) + 1 + i32::from(d0 % 59 >= 30);
        (m, doy - self.count_days_in_year_before_month(0, m))
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        DAYS_IN_LUNAR_COMMON_YEAR * (y - 1) + math::divide(3 + 11 * y, 30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_year_cycle() {
        let s = TabularIslamicSchema;
        let leaps: Vec<i32> = (1..=30).filter(|&y| s.is_leap_year(y)).collect();
        assert_eq!(leaps, [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29]);
        assert_eq!(s.get_start_of_year(31), DAYS_PER_30_YEAR_LUNAR_CYCLE);
        assert_eq!(s.get_year(708), (2, 355));
        assert_eq!(s.get_year(709), (3, 1));
    }
}
