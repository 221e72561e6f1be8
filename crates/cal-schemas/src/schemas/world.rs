//! The World calendar schema.
//!
//! Four identical quarters of 91 days (31, 30, 30).  Worldsday closes the
//! year as the 31st of December and, in leap years, Leapyear Day is added
//! as the 31st of June.

use crate::constants::{DAYS_IN_SOLAR_COMMON_YEAR, DAYS_IN_SOLAR_LEAP_YEAR};
use crate::formulae::GregorianRule;
use crate::month_table::MonthTable;
use crate::profile::CalendricalProfile;
use crate::schema::{regular_month_counting, CalendricalSchema};

static TABLE: MonthTable<12> = MonthTable::new(
    [31, 30, 30, 31, 30, 30, 31, 30, 30, 31, 30, 31],
    [31, 30, 30, 31, 30, 31, 31, 30, 30, 31, 30, 31],
);

/// The World calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldSchema;

impl CalendricalSchema for WorldSchema {
    regular_month_counting!(12);

    fn profile(&self) -> CalendricalProfile {
        CalendricalProfile::Solar12
    }

    fn min_days_in_year(&self) -> i32 {
        DAYS_IN_SOLAR_COMMON_YEAR
    }

    fn min_days_in_month(&self) -> i32 {
        30
    }

    fn is_leap_year(&self, y: i32) -> bool {
        GregorianRule::is_leap_year(y)
    }

    fn is_intercalary_day(&self, _y: i32, m: i32, d: i32) -> bool {
        m == 6 && d == 31
    }

    fn is_supplementary_day(&self, _y: i32, m: i32, d: i32) -> bool {
        d == 31 && (m == 6 || m == 12)
    }

    fn count_days_in_year(&self, y: i32) -> i32 {
        if GregorianRule::is_leap_year(y) {
            DAYS_IN_SOLAR_LEAP_YEAR
        } else {
            DAYS_IN_SOLAR_COMMON_YEAR
        }
    }

    fn count_days_in_month(&self, y: i32, m: i32) -> i32 {
        TABLE.count_days_in_month(GregorianRule::is_leap_year(y), m)
    }

    fn count_days_in_year_before_month(&self, y: i32, m: i32) -> i32 {
        TABLE.count_days_in_year_before_month(GregorianRule::is_leap_year(y), m)
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        GregorianRule::get_year(days_since_epoch)
    }

    fn get_month(&self, y: i32, doy: i32) -> (i32, i32) {
        TABLE.get_month(GregorianRule::is_leap_year(y), doy)
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        GregorianRule::start_of_year(y)
    }
}
