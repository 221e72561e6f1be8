//! Table-driven month arithmetic.
//!
//! For calendars whose month lengths are fully described by one table for
//! common years and one for leap years, every month query becomes a table
//! lookup.  The cumulative and day-to-month tables are built at compile time.

/// Month lengths of a calendar with `N` months, plus derived lookups.
#[derive(Debug)]
pub(crate) struct MonthTable<const N: usize> {
    days_in_month: [[u8; N]; 2],
    days_before_month: [[u16; N]; 2],
    // Indexed by day of year (1-based); entry 0 is unused.
    month_of_day: [[u8; 367]; 2],
}

impl<const N: usize> MonthTable<N> {
    /// Build the table from the month lengths of a common and a leap year.
    ///
    /// Panics at compile time if a year exceeds 366 days.
    pub(crate) const fn new(common: [u8; N], leap: [u8; N]) -> Self {
        let days_in_month = [common, leap];
        let mut days_before_month = [[0_u16; N]; 2];
        let mut month_of_day = [[0_u8; 367]; 2];
        let mut k = 0;
        while k < 2 {
            let mut before: u16 = 0;
            let mut m = 0;
            while m < N {
                days_before_month[k][m] = before;
                let mut d = 1;
                while d <= days_in_month[k][m] as u16 {
                    month_of_day[k][(before + d) as usize] = (m + 1) as u8;
                    d += 1;
                }
                before += days_in_month[k][m] as u16;
                m += 1;
            }
            k += 1;
        }
        Self {
            days_in_month,
            days_before_month,
            month_of_day,
        }
    }

    #[inline]
    pub(crate) fn count_days_in_month(&self, leap: bool, m: i32) -> i32 {
        i32::from(self.days_in_month[usize::from(leap)][(m - 1) as usize])
    }

    #[inline]
    pub(crate) fn count_days_in_year_before_month(&self, leap: bool, m: i32) -> i32 {
        i32::from(self.days_before_month[usize::from(leap)][(m - 1) as usize])
    }

    /// `(month, day)` of the day `doy`.
    #[inline]
    pub(crate) fn get_month(&self, leap: bool, doy: i32) -> (i32, i32) {
        let m = i32::from(self.month_of_day[usize::from(leap)][doy as usize]);
        (m, doy - self.count_days_in_year_before_month(leap, m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        GREGORIAN_DAYS_IN_MONTHS_OF_COMMON_YEAR, GREGORIAN_DAYS_IN_MONTHS_OF_LEAP_YEAR,
    };

    static TABLE: MonthTable<12> = MonthTable::new(
        GREGORIAN_DAYS_IN_MONTHS_OF_COMMON_YEAR,
        GREGORIAN_DAYS_IN_MONTHS_OF_LEAP_YEAR,
    );

    #[test]
    fn lookups() {
        assert_eq!(TABLE.count_days_in_year_before_month(false, 3), 59);
        assert_eq!(TABLE.count_days_in_year_before_month(true, 3), 60);
        assert_eq!(TABLE.get_month(false, 60), (3, 1));
        assert_eq!(TABLE.get_month(true, 60), (2, 29));
        assert_eq!(TABLE.get_month(true, 366), (12, 31));
        assert_eq!(TABLE.count_days_in_month(true, 2), 29);
    }
}
