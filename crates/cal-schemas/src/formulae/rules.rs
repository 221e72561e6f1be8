//! Year-level arithmetic of the Julian and Gregorian leap rules.

use cal_core::math;

use crate::constants::{
    DAYS_IN_SOLAR_COMMON_YEAR, DAYS_PER_100_YEAR_SUBCYCLE, DAYS_PER_400_YEAR_CYCLE,
    DAYS_PER_4_YEAR_SUBCYCLE,
};

/// Leap years every four years.
pub(crate) struct JulianRule;

/// Leap years every four years except centuries not divisible by 400.
pub(crate) struct GregorianRule;

impl JulianRule {
    #[inline]
    pub(crate) const fn is_leap_year(y: i32) -> bool {
        (y & 3) == 0
    }

    #[inline]
    pub(crate) fn start_of_year(y: i32) -> i32 {
        let y = y - 1;
        DAYS_IN_SOLAR_COMMON_YEAR * y + math::divide(y, 4)
    }

    /// `(year, day_of_year)` of the day `days`.
    #[inline]
    pub(crate) fn get_year(days: i32) -> (i32, i32) {
        let y = math::divide(4 * days + 3, DAYS_PER_4_YEAR_SUBCYCLE) + 1;
        (y, days - Self::start_of_year(y) + 1)
    }
}

impl GregorianRule {
    #[inline]
    pub(crate) const fn is_leap_year(y: i32) -> bool {
        (y & 3) == 0 && (y % 100 != 0 || y % 400 == 0)
    }

    #[inline]
    pub(crate) fn start_of_year(y: i32) -> i32 {
        let y = y - 1;
        DAYS_IN_SOLAR_COMMON_YEAR * y + math::divide(y, 4) - math::divide(y, 100)
            + math::divide(y, 400)
    }

    /// `(year, day_of_year)` of the day `days`.
    pub(crate) fn get_year(days: i32) -> (i32, i32) {
        let (cycles, rem) = math::divide_rem(days, DAYS_PER_400_YEAR_CYCLE);
        // The last day of a cycle would give a fourth century.
        let centuries = (rem / DAYS_PER_100_YEAR_SUBCYCLE).min(3);
        let rem = rem - centuries * DAYS_PER_100_YEAR_SUBCYCLE;
        let quads = rem / DAYS_PER_4_YEAR_SUBCYCLE;
        let rem = rem - quads * DAYS_PER_4_YEAR_SUBCYCLE;
        let years = (rem / DAYS_IN_SOLAR_COMMON_YEAR).min(3);
        let y = 400 * cycles + 100 * centuries + 4 * quads + years + 1;
        (y, rem - years * DAYS_IN_SOLAR_COMMON_YEAR + 1)
    }
}
