//! The International Fixed schema.
//!
//! Thirteen months of 28 days.  Year Day, the 29th of the last month, ends
//! every year; in leap years Leap Day is added as the 29th of June.

use crate::constants::{DAYS_IN_SOLAR_COMMON_YEAR, DAYS_IN_SOLAR_LEAP_YEAR};
use crate::formulae::GregorianRule;
use crate::month_table::MonthTable;
use crate::profile::CalendricalProfile;
use crate::schema::{regular_month_counting, CalendricalSchema};

static TABLE: MonthTable<13> = MonthTable::new(
    [28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 29],
    [28, 28, 28, 28, 28, 29, 28, 28, 28, 28, 28, 28, 29],
);

/// The International Fixed calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct InternationalFixedSchema;

impl CalendricalSchema for InternationalFixedSchema {
    regular_month_counting!(13);

    fn profile(&self) -> CalendricalProfile {
        CalendricalProfile::Solar13
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
        m == 6 && d == 29
    }

    fn is_supplementary_day(&self, _y: i32, m: i32, d: i32) -> bool {
        d == 29 && (m == 6 || m == 13)
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
