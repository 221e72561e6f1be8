//! The Positivist schema.
//!
//! Thirteen months of 28 days; the last month receives the Festival of All
//! the Dead (day 29) and, in leap years, the Festival of Holy Women
//! (day 30).  The year number follows the Gregorian leap rule.

use crate::constants::{DAYS_IN_SOLAR_COMMON_YEAR, DAYS_IN_SOLAR_LEAP_YEAR};
use crate::formulae::GregorianRule;
use crate::profile::CalendricalProfile;
use crate::schema::{regular_month_counting, CalendricalSchema};

const DAYS_IN_MONTH: i32 = 28;

/// The Positivist calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositivistSchema;

impl CalendricalSchema for PositivistSchema {
    regular_month_counting!(13);

    fn profile(&self) -> CalendricalProfile {
        CalendricalProfile::Solar13
    }

    fn min_days_in_year(&self) -> i32 {
        DAYS_IN_SOLAR_COMMON_YEAR
    }

    fn min_days_in_month(&self) -> i32 {
        DAYS_IN_MONTH
    }

    fn is_leap_year(&self, y: i32) -> bool {
        GregorianRule::is_leap_year(y)
    }

    fn is_intercalary_day(&self, _y: i32, m: i32, d: i32) -> bool {
        m == 13 && d == 30
    }

    fn is_supplementary_day(&self, _y: i32, m: i32, d: i32) -> bool {
        m == 13 && d > DAYS_IN_MONTH
    }

    fn count_days_in_year(&self, y: i32) -> i32 {
        if GregorianRule::is_leap_year(y) {
            DAYS_IN_SOLAR_LEAP_YEAR
        } else {
            DAYS_IN_SOLAR_COMMON_YEAR
        }
    }

    fn count_days_in_month(&self, y: i32, m: i32) -> i32 {
        if m == 13 {
            29 + i32::from(GregorianRule::is_leap_year(y))
        } else {
            DAYS_IN_MONTH
        }
    }

    fn count_days_in_year_before_month(&self, _y: i32, m: i32) -> i32 {
        DAYS_IN_MONTH * (m - 1)
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        GregorianRule::get_year(days_since_epoch)
    }

    fn get_month(&self, _y: i32, doy: i32) -> (i32, i32) {
        let m = ((doy - 1) / DAYS_IN_MONTH + 1).min(13);
        (m, doy - DAYS_IN_MONTH * (m - 1))
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        GregorianRule::start_of_year(y)
    }
}
