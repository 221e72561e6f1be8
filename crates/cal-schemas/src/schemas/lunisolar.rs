//! A simple lunisolar schema.
//!
//! A fictional four-year cycle: every fourth year receives a thirteenth
//! month of 30 days.  Months alternate between 30 and 29 days, so common
//! years have 354 days and leap years 384.

use cal_core::math;

use crate::constants::DAYS_IN_LUNAR_COMMON_YEAR;
use crate::parts::MonthParts;
use crate::profile::CalendricalProfile;
use crate::schema::CalendricalSchema;

const DAYS_IN_LEAP_YEAR: i32 = DAYS_IN_LUNAR_COMMON_YEAR + 30;
const DAYS_PER_CYCLE: i32 = 4 * DAYS_IN_LUNAR_COMMON_YEAR + 30;
const MONTHS_PER_CYCLE: i32 = 4 * 12 + 1;

/// The lunisolar schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct LunisolarSchema;

impl CalendricalSchema for LunisolarSchema {
    fn profile(&self) -> CalendricalProfile {
        CalendricalProfile::Lunisolar
    }

    fn min_days_in_year(&self) -> i32 {
        DAYS_IN_LUNAR_COMMON_YEAR
    }

    fn min_days_in_month(&self) -> i32 {
        29
    }

    fn is_regular(&self) -> Option<i32> {
        None
    }

    fn is_leap_year(&self, y: i32) -> bool {
        (y & 3) == 0
    }

    fn is_intercalary_day(&self, _y: i32, m: i32, _d: i32) -> bool {
        m == 13
    }

    fn is_supplementary_day(&self, _y: i32, _m: i32, _d: i32) -> bool {
        false
    }

    fn count_months_in_year(&self, y: i32) -> i32 {
        12 + i32::from(self.is_leap_year(y))
    }

    fn count_days_in_year(&self, y: i32) -> i32 {
        if self.is_leap_year(y) {
            DAYS_IN_LEAP_YEAR
        } else {
            DAYS_IN_LUNAR_COMMON_YEAR
        }
    }

    fn count_days_in_month(&self, _y: i32, m: i32) -> i32 {
        29 + (m & 1)
    }

    fn count_days_in_year_before_month(&self, _y: i32, m: i32) -> i32 {
        29 * (m - 1) + m / 2
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        let (cycles, rem) = math::divide_rem(days_since_epoch, DAYS_PER_CYCLE);
        let year_of_cycle = (rem / DAYS_IN_LUNAR_COMMON_YEAR).min(3);
        (
            4 * cycles + year_of_cycle + 1,
            rem - DAYS_IN_LUNAR_COMMON_YEAR * year_of_cycle + 1,
        )
    }

    fn get_month(&self, _y: i32, doy: i32) -> (i32, i32) {
        let d0 = doy - 1;
        let m = 2 * (d0 / 59) + 1 + i32::from(d0 % 59 >= 30);
        (m, doy - self.count_days_in_year_before_month(0, m))
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        let y = y - 1;
        DAYS_IN_LUNAR_COMMON_YEAR * y + 30 * math::divide(y, 4)
    }

    fn count_months_since_epoch(&self, y: i32, m: i32) -> i32 {
        let y = y - 1;
        12 * y + math::divide(y, 4) + m - 1
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts {
        let (cycles, rem) = math::divide_rem(months_since_epoch, MONTHS_PER_CYCLE);
        let year_of_cycle = (rem / 12).min(3);
        MonthParts::new(4 * cycles + year_of_cycle + 1, rem - 12 * year_of_cycle + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteenth_month() {
        let s = LunisolarSchema;
        assert_eq!(s.count_months_in_year(4), 13);
        assert_eq!(s.count_days_in_year_before_month(4, 13), 354);
        assert_eq!(s.get_month(4, 384), (13, 30));
        assert_eq!(s.get_year(DAYS_PER_CYCLE - 1), (4, 384));
        assert_eq!(s.get_month_parts(MONTHS_PER_CYCLE - 1), MonthParts::new(4, 13));
        assert_eq!(s.get_month_parts(-1), MonthParts::new(0, 13));
    }
}
