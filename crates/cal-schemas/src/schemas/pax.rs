//! The Pax schema.
//!
//! Common years have thirteen months of 28 days (364 days).  Leap years
//! insert the seven-day Pax week as month 13 before the last month, which
//! then becomes month 14.  A year is leap when its last two digits are 99 or
//! a multiple of 6, except for the years divisible by 400.
//!
//! Year starts and month counts are closed form.  Their inverses estimate
//! the year from the mean year (or mean number of months per year) over the
//! 400-year cycle and correct the estimate by at most one year in either
//! direction.

use cal_core::math;

use crate::constants::DAYS_PER_400_YEAR_CYCLE;
use crate::parts::MonthParts;
use crate::profile::CalendricalProfile;
use crate::schema::CalendricalSchema;

const DAYS_IN_MONTH: i32 = 28;
const DAYS_IN_COMMON_YEAR: i32 = 13 * DAYS_IN_MONTH;
const DAYS_IN_PAX_WEEK: i32 = 7;

/// The month number of the Pax week in a leap year.
pub const PAX_MONTH: i32 = 13;

/// Days before the Pax week in a leap year.
const DAYS_BEFORE_PAX_WEEK: i32 = (PAX_MONTH - 1) * DAYS_IN_MONTH;

/// Leap years in a 400-year cycle.
const LEAP_YEARS_PER_CYCLE: i32 = 71;

const MONTHS_PER_CYCLE: i32 = 400 * 13 + LEAP_YEARS_PER_CYCLE;

/// Number of leap years in `[1, n]` (negative when `n < 0`).
fn count_leap_years(n: i32) -> i32 {
    let (c, r) = math::divide_rem(n, 100);
    18 * c + r / 6 + 1 + i32::from(r == 99) - math::divide(n, 400) - 1
}

/// The Pax leap-week calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaxSchema;

impl CalendricalSchema for PaxSchema {
    fn profile(&self) -> CalendricalProfile {
        CalendricalProfile::Other
    }

    fn min_days_in_year(&self) -> i32 {
        DAYS_IN_COMMON_YEAR
    }

    fn min_days_in_month(&self) -> i32 {
        DAYS_IN_PAX_WEEK
    }

    fn is_regular(&self) -> Option<i32> {
        None
    }

    fn is_leap_year(&self, y: i32) -> bool {
        let r = math::modulo(y, 100);
        (r == 99 || r % 6 == 0) && math::modulo(y, 400) != 0
    }

    fn is_intercalary_day(&self, y: i32, m: i32, _d: i32) -> bool {
        m == PAX_MONTH && self.is_leap_year(y)
    }

    fn is_supplementary_day(&self, _y: i32, _m: i32, _d: i32) -> bool {
        false
    }

    fn count_months_in_year(&self, y: i32) -> i32 {
        13 + i32::from(self.is_leap_year(y))
    }

    fn count_days_in_year(&self, y: i32) -> i32 {
        DAYS_IN_COMMON_YEAR + DAYS_IN_PAX_WEEK * i32::from(self.is_leap_year(y))
    }

    fn count_days_in_month(&self, y: i32, m: i32) -> i32 {
        if m == PAX_MONTH && self.is_leap_year(y) {
            DAYS_IN_PAX_WEEK
        } else {
            DAYS_IN_MONTH
        }
    }

    fn get_matching_month(&self, from: i32, m: i32, to: i32) -> Option<i32> {
        if m < PAX_MONTH {
            return Some(m);
        }
        match (self.is_leap_year(from), self.is_leap_year(to)) {
            (true, false) if m == PAX_MONTH => None,
            (true, false) => Some(PAX_MONTH),
            (false, true) => Some(PAX_MONTH + 1),
            _ => Some(m),
        }
    }

    fn count_days_in_year_before_month(&self, _y: i32, m: i32) -> i32 {
        let before = DAYS_IN_MONTH * (m - 1);
        if m > PAX_MONTH {
            // Only reachable in leap years: month 13 was the Pax week.
            before - (DAYS_IN_MONTH - DAYS_IN_PAX_WEEK)
        } else {
            before
        }
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        let estimate = math::divide(
            400 * i64::from(days_since_epoch),
            i64::from(DAYS_PER_400_YEAR_CYCLE),
        );
        // |estimate| < |days| / 364 + 1: the narrowing cannot truncate.
        let mut y = estimate as i32 + 1;
        let mut start = self.get_start_of_year(y);
        if start > days_since_epoch {
            y -= 1;
            start = self.get_start_of_year(y);
        } else {
            let next = start + self.count_days_in_year(y);
            if next <= days_since_epoch {
                y += 1;
                start = next;
            }
        }
        (y, days_since_epoch - start + 1)
    }

    fn get_month(&self, y: i32, doy: i32) -> (i32, i32) {
        let d0 = doy - 1;
        if d0 < DAYS_BEFORE_PAX_WEEK || !self.is_leap_year(y) {
            let m = d0 / DAYS_IN_MONTH + 1;
            (m, d0 - DAYS_IN_MONTH * (m - 1) + 1)
        } else if d0 < DAYS_BEFORE_PAX_WEEK + DAYS_IN_PAX_WEEK {
            (PAX_MONTH, d0 - DAYS_BEFORE_PAX_WEEK + 1)
        } else {
            (PAX_MONTH + 1, d0 - DAYS_BEFORE_PAX_WEEK - DAYS_IN_PAX_WEEK + 1)
        }
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        let y = y - 1;
        DAYS_IN_COMMON_YEAR * y + DAYS_IN_PAX_WEEK * count_leap_years(y)
    }

    fn count_months_since_epoch(&self, y: i32, m: i32) -> i32 {
        let y = y - 1;
        13 * y + count_leap_years(y) + m - 1
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts {
        let estimate = math::divide(400 * i64::from(months_since_epoch), i64::from(MONTHS_PER_CYCLE));
        let mut y = estimate as i32 + 1;
        let mut start = self.count_months_since_epoch(y, 1);
        if start > months_since_epoch {
            y -= 1;
            start = self.count_months_since_epoch(y, 1);
        } else {
            let next = start + self.count_months_in_year(y);
            if next <= months_since_epoch {
                y += 1;
                start = next;
            }
        }
        MonthParts::new(y, months_since_epoch - start + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        let s = PaxSchema;
        assert!(s.is_leap_year(6));
        assert!(s.is_leap_year(99));
        assert!(s.is_leap_year(100));
        assert!(!s.is_leap_year(400));
        assert!(!s.is_leap_year(0));
        assert!(!s.is_leap_year(2001));
        assert_eq!((1..=400).filter(|&y| s.is_leap_year(y)).count(), 71);
    }

    #[test]
    fn leap_count_formula() {
        let s = PaxSchema;
        let mut count = 0;
        for n in 1..=1_200 {
            count += i32::from(s.is_leap_year(n));
            assert_eq!(count_leap_years(n), count, "n = {n}");
        }
        assert_eq!(count_leap_years(0), 0);
        assert_eq!(count_leap_years(-1), 0);
    }

    #[test]
    fn cycle_has_gregorian_length() {
        assert_eq!(PaxSchema.get_start_of_year(401), DAYS_PER_400_YEAR_CYCLE);
    }

    #[test]
    fn pax_week() {
        let s = PaxSchema;
        assert_eq!(s.get_month(6, 336), (12, 28));
        assert_eq!(s.get_month(6, 337), (13, 1));
        assert_eq!(s.get_month(6, 343), (13, 7));
        assert_eq!(s.get_month(6, 344), (14, 1));
        assert_eq!(s.get_month(6, 371), (14, 28));
        assert_eq!(s.get_month(5, 364), (13, 28));
        assert_eq!(s.count_days_in_year_before_month(6, 14), 343);
    }

    #[test]
    fn matching_months_skip_the_pax_week() {
        let s = PaxSchema;
        // 6 and 12 are leap years, 5 and 7 are not.
        assert_eq!(s.get_matching_month(6, 12, 7), Some(12));
        assert_eq!(s.get_matching_month(6, PAX_MONTH, 7), None);
        assert_eq!(s.get_matching_month(6, 14, 7), Some(13));
        assert_eq!(s.get_matching_month(5, 13, 6), Some(14));
        assert_eq!(s.get_matching_month(6, PAX_MONTH, 12), Some(PAX_MONTH));
        assert_eq!(s.get_matching_month(6, 14, 12), Some(14));
        assert_eq!(s.get_matching_month(5, 13, 7), Some(13));
    }
}
