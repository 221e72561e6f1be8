//! The Gregorian schema.

use crate::constants::{DAYS_IN_SOLAR_COMMON_YEAR, DAYS_IN_SOLAR_LEAP_YEAR};
use crate::formulae::GregorianRule;
use crate::profile::CalendricalProfile;
use crate::schema::{regular_month_counting, CalendricalSchema};

/// Days before each month of a common year.
const DAYS_BEFORE_MONTH: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// The proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct GregorianSchema;

impl CalendricalSchema for GregorianSchema {
    regular_month_counting!(12);

    fn profile(&self) -> CalendricalProfile {
        CalendricalProfile::Solar12
    }

    fn min_days_in_year(&self) -> i32 {
        DAYS_IN_SOLAR_COMMON_YEAR
    }

    fn min_days_in_month(&self) -> i32 {
        28
    }

    fn is_leap_year(&self, y: i32) -> bool {
        GregorianRule::is_leap_year(y)
    }

    fn is_intercalary_day(&self, _y: i32, m: i32, d: i32) -> bool {
        m == 2 && d == 29
    }

    fn is_supplementary_day(&self, _y: i32, _m: i32, _d: i32) -> bool {
        false
    }

    fn count_days_in_year(&self, y: i32) -> i32 {
        if GregorianRule::is_leap_year(y) {
            DAYS_IN_SOLAR_LEAP_YEAR
        } else {
            DAYS_IN_SOLAR_COMMON_YEAR
        }
    }

    fn count_days_in_month(&self, y: i32, m: i32) -> i32 {
        if m == 2 {
            28 + i32::from(GregorianRule::is_leap_year(y))
        } else {
            30 + ((m + (m >> 3)) & 1)
        }
    }

    fn count_days_in_year_before_month(&self, y: i32, m: i32) -> i32 {
        let before = DAYS_BEFORE_MONTH[(m - 1) as usize];
        if m > 2 && GregorianRule::is_leap_year(y) {
            before + 1
        } else {
            before
        }
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        GregorianRule::get_year(days_since_epoch)
    }

    fn get_month(&self, y: i32, doy: i32) -> (i32, i32) {
        let leap = GregorianRule::is_leap_year(y);
        // Pretend February has 30 days; then month lengths alternate
        // regularly enough for the 367/12 approximation.
        let correction = if doy < 60 + i32::from(leap) {
            0
        } else if leap {
            1
        } else {
            2
        };
        let m = (12 * (doy - 1 + correction) + 373) / 367;
        (m, doy - self.count_days_in_year_before_month(y, m))
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        GregorianRule::start_of_year(y)
    }
}
