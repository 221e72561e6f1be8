//! Date, ordinal and month parts.
//!
//! These are plain value tuples compared lexicographically.  They are *not*
//! validated dates: a schema produces them from a day count, and the
//! pre-validators check them before they are fed back into a schema.

use std::fmt;
use std::str::FromStr;

use cal_core::errors::{Error, Result};
use cal_core::utilities::data_formatters::{format_date_parts, format_ordinal_parts, format_year};
use cal_core::utilities::data_parsers::{parse_date_parts, parse_ordinal_parts};

/// A `(year, month, day)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DateParts {
    year: i32,
    month: i32,
    day: i32,
}

/// A `(year, day_of_year)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OrdinalParts {
    year: i32,
    day_of_year: i32,
}

/// A `(year, month)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MonthParts {
    year: i32,
    month: i32,
}

impl DateParts {
    /// Create a triple; no validation is performed.
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// The first day of `year`.
    pub const fn at_start_of_year(year: i32) -> Self {
        Self::new(year, 1, 1)
    }

    /// The year.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The month of the year.
    #[inline]
    pub const fn month(&self) -> i32 {
        self.month
    }

    /// The day of the month.
    #[inline]
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// `(year, month, day)`.
    #[inline]
    pub const fn deconstruct(&self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }

    /// The `(year, month)` part.
    pub const fn month_parts(&self) -> MonthParts {
        MonthParts::new(self.year, self.month)
    }
}

impl OrdinalParts {
    /// Create a pair; no validation is performed.
    pub const fn new(year: i32, day_of_year: i32) -> Self {
        Self { year, day_of_year }
    }

    /// The first day of `year`.
    pub const fn at_start_of_year(year: i32) -> Self {
        Self::new(year, 1)
    }

    /// The year.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The day of the year.
    #[inline]
    pub const fn day_of_year(&self) -> i32 {
        self.day_of_year
    }

    /// `(year, day_of_year)`.
    #[inline]
    pub const fn deconstruct(&self) -> (i32, i32) {
        (self.year, self.day_of_year)
    }
}

impl MonthParts {
    /// Create a pair; no validation is performed.
    pub const fn new(year: i32, month: i32) -> Self {
        Self { year, month }
    }

    /// The first month of `year`.
    pub const fn at_start_of_year(year: i32) -> Self {
        Self::new(year, 1)
    }

    /// The year.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The month of the year.
    #[inline]
    pub const fn month(&self) -> i32 {
        self.month
    }

    /// `(year, month)`.
    #[inline]
    pub const fn deconstruct(&self) -> (i32, i32) {
        (self.year, self.month)
    }
}

// ── Display / FromStr ────────────────────────────────────────────────────────

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = format_date_parts(self.year.into(), self.month.into(), self.day.into());
        f.write_str(&s)
    }
}

impl fmt::Display for OrdinalParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_ordinal_parts(self.year.into(), self.day_of_year.into()))
    }
}

impl fmt::Display for MonthParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", format_year(self.year.into()), self.month)
    }
}

impl FromStr for DateParts {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parse_date_parts(s)
            .ok_or_else(|| Error::InvalidArgument(format!("malformed date parts: {s:?}")))?;
        Ok(Self::new(y, m, d))
    }
}

impl FromStr for OrdinalParts {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (y, doy) = parse_ordinal_parts(s)
            .ok_or_else(|| Error::InvalidArgument(format!("malformed ordinal parts: {s:?}")))?;
        Ok(Self::new(y, doy))
    }
}

impl From<(i32, i32, i32)> for DateParts {
    fn from((y, m, d): (i32, i32, i32)) -> Self {
        Self::new(y, m, d)
    }
}

impl From<(i32, i32)> for OrdinalParts {
    fn from((y, doy): (i32, i32)) -> Self {
        Self::new(y, doy)
    }
}

impl From<(i32, i32)> for MonthParts {
    fn from((y, m): (i32, i32)) -> Self {
        Self::new(y, m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicographic_order() {
        assert!(DateParts::new(2000, 12, 31) < DateParts::new(2001, 1, 1));
        assert!(DateParts::new(2001, 1, 31) < DateParts::new(2001, 2, 1));
        assert!(DateParts::new(-1, 12, 31) < DateParts::new(0, 1, 1));
        assert!(OrdinalParts::new(1, 365) < OrdinalParts::new(2, 1));
        assert!(MonthParts::new(1, 13) < MonthParts::new(2, 1));
    }

    #[test]
    fn display_and_parse() {
        let parts = DateParts::new(-44, 3, 15);
        assert_eq!(parts.to_string(), "-0044-03-15");
        assert_eq!("-0044-03-15".parse::<DateParts>().unwrap(), parts);
        assert_eq!(OrdinalParts::new(2017, 5).to_string(), "2017-005");
        assert_eq!("2017-005".parse::<OrdinalParts>().unwrap(), OrdinalParts::new(2017, 5));
        assert_eq!(MonthParts::new(7, 2).to_string(), "0007-02");
        assert!("2017/1/1".parse::<DateParts>().is_err());
    }
}
