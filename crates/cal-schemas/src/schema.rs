//! The `CalendricalSchema` trait.
//!
//! A schema encodes the rules of one calendar system: month and year
//! lengths, the leap-year pattern, and the conversions between
//! `(year, month, day)`, `(year, day_of_year)` and the number of days since
//! the calendar's own epoch (its first day, `(1, 1, 1)`, is day `0`).
//!
//! # Contract
//!
//! Schemas are the innermost layer.  Every method assumes its arguments are
//! already valid (see [`crate::validation`]) and never checks them: passing
//! a month or day outside the schema's bounds yields an unspecified result,
//! and schemas backed by month tables panic on an out-of-bounds index.
//! Implementations are closed-form; none iterates over the days or the
//! months of a year.  All divisions on signed quantities are floor divisions
//! so that proleptic years are handled like any other.

use std::fmt;

use cal_core::math;
use cal_intervals::Segment;

use crate::parts::{DateParts, MonthParts, OrdinalParts};
use crate::profile::CalendricalProfile;

/// Default earliest supported year.
pub const DEFAULT_MIN_YEAR: i32 = -999_998;

/// Default latest supported year.
pub const DEFAULT_MAX_YEAR: i32 = 999_999;

/// Arithmetic rules of a calendar system.
///
/// The trait is object-safe; the date-math layer and the validators operate
/// on `&dyn CalendricalSchema`.
pub trait CalendricalSchema: Send + Sync + fmt::Debug {
    // ── Characteristics ──────────────────────────────────────────────────────

    /// The profile this schema conforms to.
    fn profile(&self) -> CalendricalProfile;

    /// Lower bound on the length of a year.
    fn min_days_in_year(&self) -> i32;

    /// Lower bound on the length of a month.
    fn min_days_in_month(&self) -> i32;

    /// The number of months in a year if it never varies.
    fn is_regular(&self) -> Option<i32>;

    /// Years for which the schema's formulae are exact and do not overflow.
    fn supported_years(&self) -> Segment<i32> {
        Segment::new_unchecked(DEFAULT_MIN_YEAR, DEFAULT_MAX_YEAR)
    }

    /// Days since epoch covered by [`supported_years`](Self::supported_years).
    fn supported_days(&self) -> Segment<i32> {
        let (lo, hi) = self.supported_years().endpoints();
        Segment::new_unchecked(self.get_start_of_year(lo), self.get_end_of_year(hi))
    }

    // ── Day roles ────────────────────────────────────────────────────────────

    /// Return `true` if `y` is a leap year.
    fn is_leap_year(&self, y: i32) -> bool;

    /// Return `true` if the day only exists in leap years.
    fn is_intercalary_day(&self, y: i32, m: i32, d: i32) -> bool;

    /// Return `true` if the day lies outside the regular weekly or monthly
    /// structure (epagomenal days, blank days).
    fn is_supplementary_day(&self, y: i32, m: i32, d: i32) -> bool;

    // ── Counting ─────────────────────────────────────────────────────────────

    /// Number of months in year `y`.
    fn count_months_in_year(&self, y: i32) -> i32;

    /// Number of days in year `y`.
    fn count_days_in_year(&self, y: i32) -> i32;

    /// Number of days in month `m` of year `y`.
    fn count_days_in_month(&self, y: i32, m: i32) -> i32;

    /// The month of year `to` matching month `m` of the year `_from`, or
    /// `None` if year `to` has no such month.
    ///
    /// By default months match by number.  Schemas whose leap month is not
    /// the last one map the months that follow it.
    fn get_matching_month(&self, _from: i32, m: i32, to: i32) -> Option<i32> {
        (m <= self.count_months_in_year(to)).then_some(m)
    }

    /// Number of days in year `y` before the first day of month `m`.
    fn count_days_in_year_before_month(&self, y: i32, m: i32) -> i32;

    /// Number of days in year `y` after the last day of month `m`.
    fn count_days_in_year_after_month(&self, y: i32, m: i32) -> i32 {
        self.count_days_in_year(y)
            - self.count_days_in_year_before_month(y, m)
            - self.count_days_in_month(y, m)
    }

    /// Number of days in year `y` before `(y, m, d)`.
    fn count_days_in_year_before(&self, y: i32, m: i32, d: i32) -> i32 {
        self.count_days_in_year_before_month(y, m) + d - 1
    }

    /// Number of days in year `y` after `(y, m, d)`.
    fn count_days_in_year_after(&self, y: i32, m: i32, d: i32) -> i32 {
        self.count_days_in_year(y) - self.count_days_in_year_before(y, m, d) - 1
    }

    /// Number of days in month `m` after `(y, m, d)`.
    fn count_days_in_month_after(&self, y: i32, m: i32, d: i32) -> i32 {
        self.count_days_in_month(y, m) - d
    }

    // ── Days since epoch ─────────────────────────────────────────────────────

    /// Days since the epoch of `(y, m, d)`.
    fn count_days_since_epoch(&self, y: i32, m: i32, d: i32) -> i32 {
        self.get_start_of_year(y) + self.count_days_in_year_before_month(y, m) + d - 1
    }

    /// Days since the epoch of `(y, doy)`.
    fn count_days_since_epoch_ordinal(&self, y: i32, doy: i32) -> i32 {
        self.get_start_of_year(y) + doy - 1
    }

    /// Date parts of the day `days_since_epoch`.
    fn get_date_parts(&self, days_since_epoch: i32) -> DateParts {
        let (y, doy) = self.get_year(days_since_epoch);
        let (m, d) = self.get_month(y, doy);
        DateParts::new(y, m, d)
    }

    /// Ordinal parts of the day `days_since_epoch`.
    fn get_ordinal_parts(&self, days_since_epoch: i32) -> OrdinalParts {
        let (y, doy) = self.get_year(days_since_epoch);
        OrdinalParts::new(y, doy)
    }

    /// `(year, day_of_year)` of the day `days_since_epoch`.
    fn get_year(&self, days_since_epoch: i32) -> (i32, i32);

    /// `(month, day)` of the day `doy` of year `y`.
    fn get_month(&self, y: i32, doy: i32) -> (i32, i32);

    // ── Ordinal conversions ──────────────────────────────────────────────────

    /// Ordinal parts of `(y, m, d)`.
    fn get_ordinal_parts_from_date(&self, y: i32, m: i32, d: i32) -> OrdinalParts {
        OrdinalParts::new(y, self.count_days_in_year_before_month(y, m) + d)
    }

    /// Date parts of `(y, doy)`.
    fn get_date_parts_from_ordinal(&self, y: i32, doy: i32) -> DateParts {
        let (m, d) = self.get_month(y, doy);
        DateParts::new(y, m, d)
    }

    // ── Start and end of periods ─────────────────────────────────────────────

    /// Days since the epoch of the first day of year `y`.
    fn get_start_of_year(&self, y: i32) -> i32;

    /// Days since the epoch of the last day of year `y`.
    fn get_end_of_year(&self, y: i32) -> i32 {
        self.get_start_of_year(y) + self.count_days_in_year(y) - 1
    }

    /// Days since the epoch of the first day of month `m` of year `y`.
    fn get_start_of_month(&self, y: i32, m: i32) -> i32 {
        self.get_start_of_year(y) + self.count_days_in_year_before_month(y, m)
    }

    /// Days since the epoch of the last day of month `m` of year `y`.
    fn get_end_of_month(&self, y: i32, m: i32) -> i32 {
        self.get_start_of_month(y, m) + self.count_days_in_month(y, m) - 1
    }

    // ── Months since epoch ───────────────────────────────────────────────────

    /// Months since the epoch of `(y, m)`; month `(1, 1)` is month `0`.
    fn count_months_since_epoch(&self, y: i32, m: i32) -> i32;

    /// Month parts of the month `months_since_epoch`.
    fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts;
}

/// Months since epoch for a schema with `months_in_year` months every year.
#[inline]
pub(crate) fn regular_months_since_epoch(months_in_year: i32, y: i32, m: i32) -> i32 {
    months_in_year * (y - 1) + m - 1
}

/// Inverse of [`regular_months_since_epoch`].
#[inline]
pub(crate) fn regular_month_parts(months_in_year: i32, months_since_epoch: i32) -> MonthParts {
    let (y0, m0) = math::divide_rem(months_since_epoch, months_in_year);
    MonthParts::new(y0 + 1, m0 + 1)
}

/// Implement the month-counting pair for a schema with a fixed number of
/// months per year.
macro_rules! regular_month_counting {
    ($months:expr) => {
        fn is_regular(&self) -> Option<i32> {
            Some($months)
        }

        fn count_months_in_year(&self, _y: i32) -> i32 {
            $months
        }

        fn count_months_since_epoch(&self, y: i32, m: i32) -> i32 {
            $crate::schema::regular_months_since_epoch($months, y, m)
        }

        fn get_month_parts(&self, months_since_epoch: i32) -> $crate::parts::MonthParts {
            $crate::schema::regular_month_parts($months, months_since_epoch)
        }
    };
}

pub(crate) use regular_month_counting;
