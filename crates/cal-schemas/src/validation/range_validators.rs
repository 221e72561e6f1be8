//! Range validators: bounds checks over a [`Segment`].
//!
//! `validate` is for caller-supplied values and names the offending
//! parameter.  The `check_*` methods are for the results of arithmetic and
//! report a parameterless overflow.

use cal_core::errors::Result;
use cal_core::{ensure_in_range, Error};
use cal_intervals::{Discrete, Segment};
use tracing::trace;

use crate::schema::CalendricalSchema;

/// Bounds checks against a fixed range of values.
pub trait RangeValidation<T: Discrete> {
    /// The accepted range.
    fn range(&self) -> Segment<T>;

    /// Return an argument-range error on `param` if `value` is out of range.
    fn validate(&self, value: T, param: &'static str) -> Result<()> {
        ensure_in_range!(self.range().contains(value), param, value);
        Ok(())
    }

    /// Return [`Error::Overflow`] if `value` is out of range.
    fn check_overflow(&self, value: T) -> Result<()> {
        if self.range().contains(value) {
            Ok(())
        } else {
            trace!(value = %value, range = %self.range(), "value out of range");
            Err(Error::Overflow)
        }
    }

    /// Return [`Error::Overflow`] if `value` is above the range.
    fn check_upper_bound(&self, value: T) -> Result<()> {
        if value <= self.range().max() {
            Ok(())
        } else {
            trace!(value = %value, max = %self.range().max(), "value above range");
            Err(Error::Overflow)
        }
    }

    /// Return [`Error::Overflow`] if `value` is below the range.
    fn check_lower_bound(&self, value: T) -> Result<()> {
        if value >= self.range().min() {
            Ok(())
        } else {
            trace!(value = %value, min = %self.range().min(), "value below range");
            Err(Error::Overflow)
        }
    }

    /// Return `true` if `value` is in range.
    fn contains(&self, value: T) -> bool {
        self.range().contains(value)
    }
}

/// A validator over an arbitrary range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeValidator<T: Discrete> {
    range: Segment<T>,
}

impl<T: Discrete> RangeValidator<T> {
    /// Create a validator accepting the values of `range`.
    pub fn new(range: Segment<T>) -> Self {
        Self { range }
    }
}

impl<T: Discrete> RangeValidation<T> for RangeValidator<T> {
    fn range(&self) -> Segment<T> {
        self.range
    }
}

/// A validator for years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearsValidator {
    range: Segment<i32>,
}

impl YearsValidator {
    /// Create a validator accepting the years of `range`.
    pub fn new(range: Segment<i32>) -> Self {
        Self { range }
    }

    /// The validator for the supported years of `schema`.
    pub fn for_schema(schema: &dyn CalendricalSchema) -> Self {
        Self::new(schema.supported_years())
    }

    /// Validate a caller-supplied year, reported as `"year"`.
    pub fn validate_year(&self, year: i32) -> Result<()> {
        self.validate(year, "year")
    }
}

impl RangeValidation<i32> for YearsValidator {
    fn range(&self) -> Segment<i32> {
        self.range
    }
}

/// A validator for days since an epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaysValidator {
    range: Segment<i32>,
}

impl DaysValidator {
    /// Create a validator accepting the day counts of `range`.
    pub fn new(range: Segment<i32>) -> Self {
        Self { range }
    }

    /// The validator for the supported days of `schema`.
    pub fn for_schema(schema: &dyn CalendricalSchema) -> Self {
        Self::new(schema.supported_days())
    }
}

impl RangeValidation<i32> for DaysValidator {
    fn range(&self) -> Segment<i32> {
        self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::GregorianSchema;

    #[test]
    fn validate_names_the_parameter() {
        let v = RangeValidator::new(Segment::new(1, 12).unwrap());
        assert!(v.validate(12, "month").is_ok());
        let err = v.validate(13, "month").unwrap_err();
        assert_eq!(err.param_name(), Some("month"));
        assert_eq!(format!("{v:?}"), "RangeValidator { range: Segment[1..12] }");
    }

    #[test]
    fn checks_report_overflow() {
        let v = YearsValidator::new(Segment::new(-10, 10).unwrap());
        assert!(v.check_overflow(11).unwrap_err().is_overflow());
        assert!(v.check_upper_bound(11).unwrap_err().is_overflow());
        assert!(v.check_upper_bound(-11).is_ok());
        assert!(v.check_lower_bound(-11).unwrap_err().is_overflow());
        assert!(v.check_lower_bound(11).is_ok());
        assert_eq!(v.validate_year(-11).unwrap_err().param_name(), Some("year"));
    }

    #[test]
    fn schema_ranges() {
        let years = YearsValidator::for_schema(&GregorianSchema);
        assert!(years.contains(-999_998) && years.contains(999_999));
        assert!(!years.contains(1_000_000));
        let days = DaysValidator::for_schema(&GregorianSchema);
        assert_eq!(days.range().min(), GregorianSchema.get_start_of_year(-999_998));
        assert!(days.contains(0));
    }
}
