//! The Tropicália schemas.
//!
//! A 128-year cycle of Julian leap years minus one: `y` is leap when it is
//! divisible by 4 but not by 128.  The cycle has 46 751 days, so the mean
//! year (365.2421875 days) is closer to the tropical year than the
//! Gregorian one.
//!
//! Three month layouts share the cycle: the Gregorian one, and two with
//! alternating 30/31 and 31/30 months where December absorbs the leap day.

use cal_core::math;

use crate::constants::{
    DAYS_IN_SOLAR_COMMON_YEAR, DAYS_IN_SOLAR_LEAP_YEAR, DAYS_PER_128_YEAR_CYCLE,
    DAYS_PER_4_YEAR_SUBCYCLE, GREGORIAN_DAYS_IN_MONTHS_OF_COMMON_YEAR,
    GREGORIAN_DAYS_IN_MONTHS_OF_LEAP_YEAR,
};
use crate::month_table::MonthTable;
use crate::profile::CalendricalProfile;
use crate::schema::{regular_month_counting, CalendricalSchema};

#[inline]
fn is_leap(y: i32) -> bool {
    (y & 3) == 0 && (y & 127) != 0
}

#[inline]
fn days_in_year(y: i32) -> i32 {
    if is_leap(y) {
        DAYS_IN_SOLAR_LEAP_YEAR
    } else {
        DAYS_IN_SOLAR_COMMON_YEAR
    }
}

#[inline]
fn start_of_year(y: i32) -> i32 {
    let y = y - 1;
    // Arithmetic shift: floor division by 128.
    let cycles = y >> 7;
    let year_of_cycle = y & 127;
    DAYS_PER_128_YEAR_CYCLE * cycles + DAYS_IN_SOLAR_COMMON_YEAR * year_of_cycle + (year_of_cycle >> 2)
}

#[inline]
fn get_year(days: i32) -> (i32, i32) {
    let (cycles, rem) = math::divide_rem(days, DAYS_PER_128_YEAR_CYCLE);
    // Within a cycle the pattern is plain Julian.
    let year_of_cycle = (4 * rem + 3) / DAYS_PER_4_YEAR_SUBCYCLE;
    let doy = rem - DAYS_IN_SOLAR_COMMON_YEAR * year_of_cycle - (year_of_cycle >> 2) + 1;
    ((cycles << 7) + year_of_cycle + 1, doy)
}

macro_rules! tropicalia_common {
    () => {
        regular_month_counting!(12);

        fn profile(&self) -> CalendricalProfile {
            CalendricalProfile::Solar12
        }

        fn min_days_in_year(&self) -> i32 {
            DAYS_IN_SOLAR_COMMON_YEAR
        }

        fn is_leap_year(&self, y: i32) -> bool {
            is_leap(y)
        }

        fn count_days_in_year(&self, y: i32) -> i32 {
            days_in_year(y)
        }

        fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
            get_year(days_since_epoch)
        }

        fn get_start_of_year(&self, y: i32) -> i32 {
            start_of_year(y)
        }
    };
}

// ── Gregorian months ─────────────────────────────────────────────────────────

static TABLE: MonthTable<12> = MonthTable::new(
    GREGORIAN_DAYS_IN_MONTHS_OF_COMMON_YEAR,
    GREGORIAN_DAYS_IN_MONTHS_OF_LEAP_YEAR,
);

/// The Tropicália calendar with Gregorian month lengths.
#[derive(Debug, Clone, Copy, Default)]
pub struct TropicaliaSchema;

impl CalendricalSchema for TropicaliaSchema {
    tropicalia_common!();

    fn min_days_in_month(&self) -> i32 {
        28
    }

    fn is_intercalary_day(&self, _y: i32, m: i32, d: i32) -> bool {
        m == 2 && d == 29
    }

    fn is_supplementary_day(&self, _y: i32, _m: i32, _d: i32) -> bool {
        false
    }

    fn count_days_in_month(&self, y: i32, m: i32) -> i32 {
        TABLE.count_days_in_month(is_leap(y), m)
    }

    fn count_days_in_year_before_month(&self, y: i32, m: i32) -> i32 {
        TABLE.count_days_in_year_before_month(is_leap(y), m)
    }

    fn get_month(&self, y: i32, doy: i32) -> (i32, i32) {
        TABLE.get_month(is_leap(y), doy)
    }
}

// ── 30/31 months ─────────────────────────────────────────────────────────────

/// The Tropicália calendar with months of 30 and 31 days alternately;
/// December has 30 days, 31 in leap years.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tropicalia3031Schema;

impl CalendricalSchema for Tropicalia3031Schema {
    tropicalia_common!();

    fn min_days_in_month(&self) -> i32 {
        30
    }

    fn is_intercalary_day(&self, _y: i32, m: i32, d: i32) -> bool {
        m == 12 && d == 31
    }

    fn is_supplementary_day(&self, _y: i32, _m: i32, _d: i32) -> bool {
        false
    }

    fn count_days_in_month(&self, y: i32, m: i32) -> i32 {
        if m == 12 {
            30 + i32::from(is_leap(y))
        } else {
            30 + ((m + 1) & 1)
        }
    }

    fn count_days_in_year_before_month(&self, _y: i32, m: i32) -> i32 {
        30 * (m - 1) + (m - 1) / 2
    }

    fn get_month(&self, _y: i32, doy: i32) -> (i32, i32) {
        // Pairs of months span 61 days.
        let d0 = doy - 1;
        let m = 2 * (d0 / 61) + 1 + i32::from(d0 % 61 >= 30);
        (m, doy - self.count_days_in_year_before_month(0, m))
    }
}

// ── 31/30 months ─────────────────────────────────────────────────────────────

/// The Tropicália calendar with months of 31 and 30 days alternately;
/// December has 29 days, 30 in leap years.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tropicalia3130Schema;

impl CalendricalSchema for Tropicalia3130Schema {
    tropicalia_common!();

    fn min_days_in_month(&self) -> i32 {
        29
    }

    fn is_intercalary_day(&self, _y: i32, m: i32, d: i32) -> bool {
        m == 12 && d == 30
    }

    fn is_supplementary_day(&self, _y: i32, _m: i32, _d: i32) -> bool {
        false
    }

    fn count_days_in_month(&self, y: i32, m: i32) -> i32 {
        if m == 12 {
            29 + i32::from(is_leap(y))
        } else {
            30 + (m & 1)
        }
    }

    fn count_days_in_year_before_month(&self, _y: i32, m: i32) -> i32 {
        30 * (m - 1) + m / 2
    }

    fn get_month(&self, _y: i32, doy: i32) -> (i32, i32) {
        let d0 = doy - 1;
        let m = 2 * (d0 / 61) + 1 + i32::from(d0 % 61 >= 31);
        (m, doy - self.count_days_in_year_before_month(0, m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle() {
        assert!(is_leap(4));
        assert!(!is_leap(128));
        assert!(!is_leap(0));
        assert!(is_leap(-4));
        assert_eq!(start_of_year(129), DAYS_PER_128_YEAR_CYCLE);
        assert_eq!(get_year(DAYS_PER_128_YEAR_CYCLE - 1), (128, 365));
        assert_eq!(get_year(-1), (0, 365));
        assert_eq!(start_of_year(-127), -DAYS_PER_128_YEAR_CYCLE);
    }

    #[test]
    fn month_layouts_sum_to_year() {
        for y in [1, 4] {
            let s = Tropicalia3031Schema;
            let total: i32 = (1..=12).map(|m| s.count_days_in_month(y, m)).sum();
            assert_eq!(total, s.count_days_in_year(y));
            let s = Tropicalia3130Schema;
            let total: i32 = (1..=12).map(|m| s.count_days_in_month(y, m)).sum();
            assert_eq!(total, s.count_days_in_year(y));
        }
    }
}
