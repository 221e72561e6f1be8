//! Absolute day numbers.
//!
//! Day `0` is Monday, Gregorian `0001-01-01`.  The stored count lies in
//! `[i32::MIN + 1, i32::MAX - 1]`: the two extreme `i32` values are never
//! valid, so an overflowing `± 1` is always detectable.
//!
//! Gregorian and Julian parts are supported for the years
//! `[-4_999_999, 5_000_000]`.  The corresponding day numbers form a
//! sub-range of the full range; converting a day number outside it back to
//! parts reports an overflow.

use cal_core::errors::Result;
use cal_core::{ensure_in_range, ensure_no_overflow, Error};
use cal_intervals::{Discrete, Segment};
use cal_schemas::formulae::{gregorian, julian};
use cal_schemas::validation::{CalendricalPreValidator, GregorianPreValidator, JulianPreValidator};
use cal_schemas::{DateParts, OrdinalParts};
use tracing::trace;

use crate::day_of_week::DayOfWeek;
use crate::day_zero::DayZero;

const fn gregorian_start_of_year(y: i64) -> i64 {
    let y = y - 1;
    365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

const fn julian_start_of_year(y: i64) -> i64 {
    let y = y - 1;
    365 * y + y.div_euclid(4)
}

/// An absolute day count since Gregorian `0001-01-01`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DayNumber(i32);

impl DayNumber {
    /// Smallest valid count of days since zero.
    pub const MIN_DAYS_SINCE_ZERO: i32 = i32::MIN + 1;

    /// Largest valid count of days since zero.
    pub const MAX_DAYS_SINCE_ZERO: i32 = i32::MAX - 1;

    /// Earliest year accepted by the Gregorian and Julian conversions.
    pub const MIN_SUPPORTED_YEAR: i32 = -4_999_999;

    /// Latest year accepted by the Gregorian and Julian conversions.
    pub const MAX_SUPPORTED_YEAR: i32 = 5_000_000;

    /// Day zero, Gregorian `0001-01-01`.
    pub const ZERO: DayNumber = DayNumber(0);

    /// Smallest day number.
    pub const MIN_VALUE: DayNumber = DayNumber(Self::MIN_DAYS_SINCE_ZERO);

    /// Largest day number.
    pub const MAX_VALUE: DayNumber = DayNumber(Self::MAX_DAYS_SINCE_ZERO);

    /// First day of the Gregorian year `MIN_SUPPORTED_YEAR`.
    const MIN_GREGORIAN_DAYS: i32 =
        gregorian_start_of_year(Self::MIN_SUPPORTED_YEAR as i64) as i32;

    /// Last day of the Gregorian year `MAX_SUPPORTED_YEAR`.
    const MAX_GREGORIAN_DAYS: i32 =
        (gregorian_start_of_year(Self::MAX_SUPPORTED_YEAR as i64 + 1) - 1) as i32;

    const OLD_STYLE_OFFSET: i64 = DayZero::OLD_STYLE.0 as i64;

    /// First day of the Julian year `MIN_SUPPORTED_YEAR`.
    const MIN_JULIAN_DAYS: i32 =
        (julian_start_of_year(Self::MIN_SUPPORTED_YEAR as i64) + Self::OLD_STYLE_OFFSET) as i32;

    /// Last day of the Julian year `MAX_SUPPORTED_YEAR`.
    const MAX_JULIAN_DAYS: i32 = (julian_start_of_year(Self::MAX_SUPPORTED_YEAR as i64 + 1) - 1
        + Self::OLD_STYLE_OFFSET) as i32;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a day number from a count of days since zero.
    ///
    /// # Errors
    /// Returns an argument-range error on `days_since_zero` outside
    /// `[MIN_DAYS_SINCE_ZERO, MAX_DAYS_SINCE_ZERO]`.
    pub fn from_days_since_zero(days_since_zero: i32) -> Result<Self> {
        ensure_in_range!(
            (Self::MIN_DAYS_SINCE_ZERO..=Self::MAX_DAYS_SINCE_ZERO).contains(&days_since_zero),
            "days_since_zero",
            days_since_zero
        );
        Ok(Self(days_since_zero))
    }

    /// Constant constructor; `days_since_zero` must be in range.
    pub(crate) const fn from_days_since_zero_const(days_since_zero: i32) -> Self {
        assert!(days_since_zero > i32::MIN && days_since_zero < i32::MAX);
        Self(days_since_zero)
    }

    /// The day number `days_since_epoch` days after `epoch`.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the result is out of range.
    pub fn from_days_since_epoch(epoch: DayNumber, days_since_epoch: i32) -> Result<Self> {
        epoch.plus_days(days_since_epoch)
    }

    /// Create a day number from Gregorian parts.
    ///
    /// # Errors
    /// Returns an argument-range error naming `year`, `month` or `day` if
    /// the date does not exist or is outside the supported years.
    pub fn from_gregorian_parts(year: i32, month: i32, day: i32) -> Result<Self> {
        Self::validate_year(year)?;
        GregorianPreValidator.validate_month_day(year, month, day, None)?;
        let days = gregorian::count_days_since_epoch(year.into(), month, day);
        // Within the Gregorian domain, hence within i32.
        Ok(Self(days as i32))
    }

    /// Create a day number from Gregorian ordinal parts.
    ///
    /// # Errors
    /// Returns an argument-range error naming `year` or `day_of_year`.
    pub fn from_gregorian_ordinal_parts(year: i32, day_of_year: i32) -> Result<Self> {
        Self::validate_year(year)?;
        GregorianPreValidator.validate_day_of_year(year, day_of_year, None)?;
        let days = gregorian::count_days_since_epoch_ordinal(year.into(), day_of_year);
        Ok(Self(days as i32))
    }

    /// Create a day number from Julian parts.
    ///
    /// # Errors
    /// Returns an argument-range error naming `year`, `month` or `day`.
    pub fn from_julian_parts(year: i32, month: i32, day: i32) -> Result<Self> {
        Self::validate_year(year)?;
        JulianPreValidator.validate_month_day(year, month, day, None)?;
        let days = julian::count_days_since_epoch(year.into(), month, day) + Self::OLD_STYLE_OFFSET;
        Ok(Self(days as i32))
    }

    /// Create a day number from Julian ordinal parts.
    ///
    /// # Errors
    /// Returns an argument-range error naming `year` or `day_of_year`.
    pub fn from_julian_ordinal_parts(year: i32, day_of_year: i32) -> Result<Self> {
        Self::validate_year(year)?;
        JulianPreValidator.validate_day_of_year(year, day_of_year, None)?;
        let days = julian::get_start_of_year(year.into()) + i64::from(day_of_year) - 1
            + Self::OLD_STYLE_OFFSET;
        Ok(Self(days as i32))
    }

    fn validate_year(year: i32) -> Result<()> {
        ensure_in_range!(
            (Self::MIN_SUPPORTED_YEAR..=Self::MAX_SUPPORTED_YEAR).contains(&year),
            "year",
            year
        );
        Ok(())
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// Days since zero.
    #[inline]
    pub const fn days_since_zero(&self) -> i32 {
        self.0
    }

    /// Day numbers with Gregorian parts.
    pub fn gregorian_domain() -> Segment<DayNumber> {
        Segment::new_unchecked(
            DayNumber(Self::MIN_GREGORIAN_DAYS),
            DayNumber(Self::MAX_GREGORIAN_DAYS),
        )
    }

    /// Day numbers with Julian parts.
    pub fn julian_domain() -> Segment<DayNumber> {
        Segment::new_unchecked(DayNumber(Self::MIN_JULIAN_DAYS), DayNumber(Self::MAX_JULIAN_DAYS))
    }

    /// Gregorian parts of this day.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] outside [`gregorian_domain`](Self::gregorian_domain).
    pub fn get_gregorian_parts(&self) -> Result<DateParts> {
        ensure_no_overflow!((Self::MIN_GREGORIAN_DAYS..=Self::MAX_GREGORIAN_DAYS).contains(&self.0));
        let (y, m, d) = gregorian::get_date_parts(self.0.into());
        Ok(DateParts::new(y as i32, m, d))
    }

    /// Gregorian ordinal parts of this day.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] outside [`gregorian_domain`](Self::gregorian_domain).
    pub fn get_gregorian_ordinal_parts(&self) -> Result<OrdinalParts> {
        ensure_no_overflow!((Self::MIN_GREGORIAN_DAYS..=Self::MAX_GREGORIAN_DAYS).contains(&self.0));
        let (y, doy) = gregorian::get_ordinal_parts(self.0.into());
        Ok(OrdinalParts::new(y as i32, doy))
    }

    /// Julian parts of this day.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] outside [`julian_domain`](Self::julian_domain).
    pub fn get_julian_parts(&self) -> Result<DateParts> {
        ensure_no_overflow!((Self::MIN_JULIAN_DAYS..=Self::MAX_JULIAN_DAYS).contains(&self.0));
        let (y, m, d) = julian::get_date_parts(i64::from(self.0) - Self::OLD_STYLE_OFFSET);
        Ok(DateParts::new(y as i32, m, d))
    }

    /// Julian ordinal parts of this day.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] outside [`julian_domain`](Self::julian_domain).
    pub fn get_julian_ordinal_parts(&self) -> Result<OrdinalParts> {
        ensure_no_overflow!((Self::MIN_JULIAN_DAYS..=Self::MAX_JULIAN_DAYS).contains(&self.0));
        let days = i64::from(self.0) - Self::OLD_STYLE_OFFSET;
        let y = julian::get_year(days);
        Ok(OrdinalParts::new(y as i32, (days - julian::get_start_of_year(y)) as i32 + 1))
    }

    /// Day of the week; day zero is a Monday.
    pub fn day_of_week(&self) -> DayOfWeek {
        DayOfWeek::from_monday_offset(self.0)
    }

    // ── Arithmetic ───────────────────────────────────────────────────────────

    /// The day `days` days later (earlier if negative).
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the result is out of range.
    pub fn plus_days(&self, days: i32) -> Result<Self> {
        match self.0.checked_add(days) {
            Some(n) if (Self::MIN_DAYS_SINCE_ZERO..=Self::MAX_DAYS_SINCE_ZERO).contains(&n) => {
                Ok(Self(n))
            }
            _ => {
                trace!(day_number = self.0, days, "day number overflow");
                Err(Error::Overflow)
            }
        }
    }

    /// The next day.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] at [`MAX_VALUE`](Self::MAX_VALUE).
    pub fn next_day(&self) -> Result<Self> {
        ensure_no_overflow!(self.0 < Self::MAX_DAYS_SINCE_ZERO);
        Ok(Self(self.0 + 1))
    }

    /// The previous day.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] at [`MIN_VALUE`](Self::MIN_VALUE).
    pub fn previous_day(&self) -> Result<Self> {
        ensure_no_overflow!(self.0 > Self::MIN_DAYS_SINCE_ZERO);
        Ok(Self(self.0 - 1))
    }

    /// Number of days from `other` to `self`.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the difference does not fit in `i32`.
    pub fn count_days_since(&self, other: DayNumber) -> Result<i32> {
        i32::try_from(*self - other).map_err(|_| {
            trace!(from = other.0, to = self.0, "day difference overflow");
            Error::Overflow
        })
    }

    // ── Adjustment to a day of the week ──────────────────────────────────────
    //
    // `offset` is the position of `self` in its week, Monday = 0.  Each
    // adjuster shifts `self` by a single modulo-7 correction.

    fn week_offset(&self) -> i32 {
        self.0.rem_euclid(7)
    }

    /// The nearest `dow` strictly before `self`.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the result is out of range.
    pub fn previous(&self, dow: DayOfWeek) -> Result<Self> {
        let back = (self.week_offset() - (dow.iso() - 1) - 1).rem_euclid(7) + 1;
        self.plus_days(-back)
    }

    /// The nearest `dow` on or before `self`.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the result is out of range.
    pub fn previous_or_same(&self, dow: DayOfWeek) -> Result<Self> {
        let back = (self.week_offset() - (dow.iso() - 1)).rem_euclid(7);
        self.plus_days(-back)
    }

    /// The `dow` closest to `self`, at most three days away.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the result is out of range.
    pub fn nearest(&self, dow: DayOfWeek) -> Result<Self> {
        // Search from the side that cannot overflow on the intermediate day.
        if self.0 <= Self::MAX_DAYS_SINCE_ZERO - 3 {
            Self(self.0 + 3).previous_or_same(dow)
        } else {
            Self(self.0 - 3).next_or_same(dow)
        }
    }

    /// The nearest `dow` on or after `self`.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the result is out of range.
    pub fn next_or_same(&self, dow: DayOfWeek) -> Result<Self> {
        let forward = ((dow.iso() - 1) - self.week_offset()).rem_euclid(7);
        self.plus_days(forward)
    }

    /// The nearest `dow` strictly after `self`.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the result is out of range.
    pub fn next(&self, dow: DayOfWeek) -> Result<Self> {
        let forward = ((dow.iso() - 1) - self.week_offset() - 1).rem_euclid(7) + 1;
        self.plus_days(forward)
    }
}

// ── Operators ────────────────────────────────────────────────────────────────

impl std::ops::Sub<DayNumber> for DayNumber {
    type Output = i64;

    fn sub(self, rhs: DayNumber) -> i64 {
        i64::from(self.0) - i64::from(rhs.0)
    }
}

// ── Interval endpoint ────────────────────────────────────────────────────────

impl Discrete for DayNumber {
    const MIN_VALUE: Self = DayNumber::MIN_VALUE;
    const MAX_VALUE: Self = DayNumber::MAX_VALUE;

    fn widen(self) -> i128 {
        i128::from(self.0)
    }

    fn from_widened(value: i128) -> Option<Self> {
        i32::try_from(value)
            .ok()
            .filter(|n| (Self::MIN_DAYS_SINCE_ZERO..=Self::MAX_DAYS_SINCE_ZERO).contains(n))
            .map(Self)
    }
}

// ── Display ──────────────────────────────────────────────────────────────────

impl std::fmt::Display for DayNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.get_gregorian_parts() {
            Ok(parts) => write!(f, "{parts}"),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

impl std::fmt::Debug for DayNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DayNumber({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domains() {
        assert_eq!(DayNumber::MIN_GREGORIAN_DAYS, -1_826_212_500);
        assert_eq!(DayNumber::MAX_GREGORIAN_DAYS, 1_826_212_499);
        assert_eq!(DayNumber::MIN_JULIAN_DAYS, -1_826_250_002);
        assert_eq!(DayNumber::MAX_JULIAN_DAYS, 1_826_249_997);
    }

    #[test]
    fn domain_edges_round_trip() {
        let first = DayNumber::from_gregorian_parts(-4_999_999, 1, 1).unwrap();
        assert_eq!(first, DayNumber::gregorian_domain().min());
        let last = DayNumber::from_gregorian_parts(5_000_000, 12, 31).unwrap();
        assert_eq!(last, DayNumber::gregorian_domain().max());
        assert_eq!(last.get_gregorian_parts().unwrap(), DateParts::new(5_000_000, 12, 31));
        assert!(last.next_day().unwrap().get_gregorian_parts().unwrap_err().is_overflow());

        let first = DayNumber::from_julian_parts(-4_999_999, 1, 1).unwrap();
        assert_eq!(first, DayNumber::julian_domain().min());
        assert!(first.previous_day().unwrap().get_julian_parts().unwrap_err().is_overflow());
        let last = DayNumber::from_julian_parts(5_000_000, 12, 31).unwrap();
        assert_eq!(last, DayNumber::julian_domain().max());
    }

    #[test]
    fn sentinels_are_unreachable() {
        assert!(DayNumber::from_days_since_zero(i32::MAX).is_err());
        assert!(DayNumber::from_days_since_zero(i32::MIN).is_err());
        assert!(DayNumber::MAX_VALUE.next_day().unwrap_err().is_overflow());
        assert!(DayNumber::MIN_VALUE.previous_day().unwrap_err().is_overflow());
        assert!(DayNumber::MAX_VALUE.plus_days(1).unwrap_err().is_overflow());
        assert!(DayNumber::ZERO.plus_days(i32::MIN).unwrap_err().is_overflow());
        assert!(DayNumber::MAX_VALUE.count_days_since(DayNumber::MIN_VALUE).is_err());
        assert_eq!(DayNumber::MAX_VALUE.successor(), None);
        assert_eq!(DayNumber::from_widened(i128::from(i32::MAX)), None);
    }
}
