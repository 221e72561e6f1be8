//! Month arithmetic shared by the calendars made of twelve 30-day months
//! followed by five or six epagomenal days.
//!
//! The epagomenal days either form a short thirteenth month or are appended
//! to the twelfth one.

/// Days in each of the twelve regular months.
pub(super) const DAYS_IN_REGULAR_MONTH: i32 = 30;

/// Month and day when the epagomenal days form a thirteenth month.
#[inline]
pub(super) fn get_month_13(doy: i32) -> (i32, i32) {
    let m = (doy - 1) / DAYS_IN_REGULAR_MONTH + 1;
    (m, doy - DAYS_IN_REGULAR_MONTH * (m - 1))
}

/// Month and day when the epagomenal days extend the twelfth month.
#[inline]
pub(super) fn get_month_12(doy: i32) -> (i32, i32) {
    let m = ((doy - 1) / DAYS_IN_REGULAR_MONTH + 1).min(12);
    (m, doy - DAYS_IN_REGULAR_MONTH * (m - 1))
}

#[inline]
pub(super) fn count_days_in_year_before_month(m: i32) -> i32 {
    DAYS_IN_REGULAR_MONTH * (m - 1)
}

/// Days in month `m` of a thirteen-month year.
#[inline]
pub(super) fn count_days_in_month_13(leap: bool, m: i32) -> i32 {
    if m == 13 {
        5 + i32::from(leap)
    } else {
        DAYS_IN_REGULAR_MONTH
    }
}

/// Days in month `m` of a twelve-month year.
#[inline]
pub(super) fn count_days_in_month_12(leap: bool, m: i32) -> i32 {
    if m == 12 {
        35 + i32::from(leap)
    } else {
        DAYS_IN_REGULAR_MONTH
    }
}

/// Implement the parts of `CalendricalSchema` that only depend on the
/// month layout, for a schema with a `leap(y)` predicate.
macro_rules! epagomenal_months {
    (12, $leap:expr) => {
        $crate::schema::regular_month_counting!(12);

        fn min_days_in_month(&self) -> i32 {
            $crate::schemas::epagomenal::DAYS_IN_REGULAR_MONTH
        }

        fn is_intercalary_day(&self, y: i32, m: i32, d: i32) -> bool {
            m == 12 && d == 36 && $leap(y)
        }

        fn is_supplementary_day(&self, _y: i32, m: i32, d: i32) -> bool {
            m == 12 && d > $crate::schemas::epagomenal::DAYS_IN_REGULAR_MONTH
        }

        fn count_days_in_month(&self, y: i32, m: i32) -> i32 {
            $crate::schemas::epagomenal::count_days_in_month_12($leap(y), m)
        }

        fn count_days_in_year_before_month(&self, _y: i32, m: i32) -> i32 {
            $crate::schemas::epagomenal::count_days_in_year_before_month(m)
        }

        fn get_month(&self, _y: i32, doy: i32) -> (i32, i32) {
            $crate::schemas::epagomenal::get_month_12(doy)
        }
    };
    (13, $leap:expr) => {
        $crate::schema::regular_month_counting!(13);

        fn min_days_in_month(&self) -> i32 {
            5
        }

        fn is_intercalary_day(&self, y: i32, m: i32, d: i32) -> bool {
            m == 13 && d == 6 && $leap(y)
        }

        fn is_supplementary_day(&self, _y: i32, m: i32, _d: i32) -> bool {
            m == 13
        }

        fn count_days_in_month(&self, y: i32, m: i32) -> i32 {
            $crate::schemas::epagomenal::count_days_in_month_13($leap(y), m)
        }

        fn count_days_in_year_before_month(&self, _y: i32, m: i32) -> i32 {
            $crate::schemas::epagomenal::count_days_in_year_before_month(m)
        }

        fn get_month(&self, _y: i32, doy: i32) -> (i32, i32) {
            $crate::schemas::epagomenal::get_month_13(doy)
        }
    };
}

pub(crate) use epagomenal_months;
