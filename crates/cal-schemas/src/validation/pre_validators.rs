//! Pre-validators: checks of month and day components against a schema.
//!
//! The year is assumed to have been validated first (see
//! [`YearsValidator`](super::YearsValidator)).  Each profile-specific
//! validator accepts every input below the profile's guaranteed minimum
//! (e.g. `day <= 28` for any solar month) without querying the schema, and
//! falls back to the exact schema count otherwise.  Both paths report the
//! same error for the same input.

use std::fmt;

use cal_core::errors::Result;
use cal_core::Error;

use crate::formulae::{gregorian, julian};
use crate::profile::CalendricalProfile;
use crate::schema::CalendricalSchema;

/// Checks of month and day components.
///
/// `validate_*` methods return an argument-range error naming `param`, or
/// the offending component (`"month"`, `"day"` or `"day_of_year"`) when
/// `param` is `None`; `check_*` methods are the non-failing variants for
/// speculative checks.
pub trait CalendricalPreValidator: Send + Sync + fmt::Debug {
    /// Validate the month `m` of year `y`.
    fn validate_month(&self, y: i32, m: i32, param: Option<&'static str>) -> Result<()>;

    /// Validate the month `m` and the day `d` of year `y`.
    fn validate_month_day(
        &self,
        y: i32,
        m: i32,
        d: i32,
        param: Option<&'static str>,
    ) -> Result<()> {
        self.validate_month(y, m, param)?;
        self.validate_day_of_month(y, m, d, param)
    }

    /// Validate the day of the year `doy` of year `y`.
    fn validate_day_of_year(&self, y: i32, doy: i32, param: Option<&'static str>) -> Result<()>;

    /// Validate the day `d` of a month `m` already known to be valid.
    fn validate_day_of_month(
        &self,
        y: i32,
        m: i32,
        d: i32,
        param: Option<&'static str>,
    ) -> Result<()>;

    /// Return `true` if the month `m` exists in year `y`.
    fn check_month(&self, y: i32, m: i32) -> bool {
        self.validate_month(y, m, None).is_ok()
    }

    /// Return `true` if `(y, m, d)` exists.
    fn check_month_day(&self, y: i32, m: i32, d: i32) -> bool {
        self.validate_month_day(y, m, d, None).is_ok()
    }

    /// Return `true` if `(y, doy)` exists.
    fn check_day_of_year(&self, y: i32, doy: i32) -> bool {
        self.validate_day_of_year(y, doy, None).is_ok()
    }
}

fn month_error(m: i32, param: Option<&'static str>) -> Error {
    Error::out_of_range(param.unwrap_or("month"), m)
}

fn day_error(d: i32, param: Option<&'static str>) -> Error {
    Error::out_of_range(param.unwrap_or("day"), d)
}

fn day_of_year_error(doy: i32, param: Option<&'static str>) -> Error {
    Error::out_of_range(param.unwrap_or("day_of_year"), doy)
}

/// Build the pre-validator matching the profile of `schema`.
pub fn pre_validator_for<'a>(
    schema: &'a dyn CalendricalSchema,
) -> Box<dyn CalendricalPreValidator + 'a> {
    match schema.profile() {
        CalendricalProfile::Solar12 => Box::new(Solar12PreValidator::new(schema)),
        CalendricalProfile::Solar13 => Box::new(Solar13PreValidator::new(schema)),
        CalendricalProfile::Lunar => Box::new(LunarPreValidator::new(schema)),
        CalendricalProfile::Lunisolar => Box::new(LunisolarPreValidator::new(schema)),
        CalendricalProfile::Other => Box::new(PlainPreValidator::new(schema)),
    }
}

// ── Plain ────────────────────────────────────────────────────────────────────

/// Pre-validator with no fast path: every check queries the schema.
#[derive(Debug, Clone, Copy)]
pub struct PlainPreValidator<'a> {
    schema: &'a dyn CalendricalSchema,
}

impl<'a> PlainPreValidator<'a> {
    /// Create a pre-validator for `schema`.
    pub fn new(schema: &'a dyn CalendricalSchema) -> Self {
        Self { schema }
    }
}

impl CalendricalPreValidator for PlainPreValidator<'_> {
    fn validate_month(&self, y: i32, m: i32, param: Option<&'static str>) -> Result<()> {
        if m < 1 || m > self.schema.count_months_in_year(y) {
            return Err(month_error(m, param));
        }
        Ok(())
    }

    fn validate_day_of_year(&self, y: i32, doy: i32, param: Option<&'static str>) -> Result<()> {
        if doy < 1 || doy > self.schema.count_days_in_year(y) {
            return Err(day_of_year_error(doy, param));
        }
        Ok(())
    }

    fn validate_day_of_month(
        &self,
        y: i32,
        m: i32,
        d: i32,
        param: Option<&'static str>,
    ) -> Result<()> {
        if d < 1 || d > self.schema.count_days_in_month(y, m) {
            return Err(day_error(d, param));
        }
        Ok(())
    }
}

// ── Profile-specific validators ──────────────────────────────────────────────

/// Implement a pre-validator for a schema-backed profile with a fixed
/// minimum month length and year length.
macro_rules! profile_pre_validator {
    (
        $(#[$meta:meta])*
        $name:ident, min_days_in_month = $min_month:expr, min_days_in_year = $min_year:expr,
        validate_month = |$this:ident, $y:ident, $m:ident, $param:ident| $validate_month:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            schema: &'a dyn CalendricalSchema,
        }

        impl<'a> $name<'a> {
            /// Smallest month length of the profile.
            pub const MIN_DAYS_IN_MONTH: i32 = $min_month;
            /// Smallest year length of the profile.
            pub const MIN_DAYS_IN_YEAR: i32 = $min_year;

            /// Create a pre-validator for `schema`.
            pub fn new(schema: &'a dyn CalendricalSchema) -> Self {
                debug_assert!(schema.min_days_in_month() >= $min_month);
                debug_assert!(schema.min_days_in_year() >= $min_year);
                Self { schema }
            }
        }

        impl CalendricalPreValidator for $name<'_> {
            fn validate_month(
                &self,
                $y: i32,
                $m: i32,
                $param: Option<&'static str>,
            ) -> Result<()> {
                let $this = self;
                $validate_month
            }

            fn validate_day_of_year(
                &self,
                y: i32,
                doy: i32,
                param: Option<&'static str>,
            ) -> Result<()> {
                if doy < 1 {
                    return Err(day_of_year_error(doy, param));
                }
                if doy > Self::MIN_DAYS_IN_YEAR && doy > self.schema.count_days_in_year(y) {
                    return Err(day_of_year_error(doy, param));
                }
                Ok(())
            }

            fn validate_day_of_month(
                &self,
                y: i32,
                m: i32,
                d: i32,
                param: Option<&'static str>,
            ) -> Result<()> {
                if d < 1 {
                    return Err(day_error(d, param));
                }
                if d > Self::MIN_DAYS_IN_MONTH && d > self.schema.count_days_in_month(y, m) {
                    return Err(day_error(d, param));
                }
                Ok(())
            }
        }
    };
}

profile_pre_validator!(
    /// Pre-validator for the [`Solar12`](CalendricalProfile::Solar12) profile.
    Solar12PreValidator, min_days_in_month = 28, min_days_in_year = 365,
    validate_month = |_this, _y, m, param| {
        if !(1..=12).contains(&m) {
            return Err(month_error(m, param));
        }
        Ok(())
    }
);

profile_pre_validator!(
    /// Pre-validator for the [`Solar13`](CalendricalProfile::Solar13) profile.
    Solar13PreValidator, min_days_in_month = 28, min_days_in_year = 365,
    validate_month = |_this, _y, m, param| {
        if !(1..=13).contains(&m) {
            return Err(month_error(m, param));
        }
        Ok(())
    }
);

profile_pre_validator!(
    /// Pre-validator for the [`Lunar`](CalendricalProfile::Lunar) profile.
    LunarPreValidator, min_days_in_month = 29, min_days_in_year = 354,
    validate_month = |_this, _y, m, param| {
        if !(1..=12).contains(&m) {
            return Err(month_error(m, param));
        }
        Ok(())
    }
);

profile_pre_validator!(
    /// Pre-validator for the [`Lunisolar`](CalendricalProfile::Lunisolar)
    /// profile: only the thirteenth month needs the schema.
    LunisolarPreValidator, min_days_in_month = 29, min_days_in_year = 354,
    validate_month = |this, y, m, param| {
        if m < 1 || m > 13 || (m == 13 && this.schema.count_months_in_year(y) < 13) {
            return Err(month_error(m, param));
        }
        Ok(())
    }
);

// ── Gregorian and Julian ─────────────────────────────────────────────────────

/// Implement a schema-free pre-validator for a calendar with Gregorian
/// month lengths and the given leap rule.
macro_rules! julian_like_pre_validator {
    ($(#[$meta:meta])* $name:ident, $formulae:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl CalendricalPreValidator for $name {
            fn validate_month(
                &self,
                _y: i32,
                m: i32,
                param: Option<&'static str>,
            ) -> Result<()> {
                if !(1..=12).contains(&m) {
                    return Err(month_error(m, param));
                }
                Ok(())
            }

            fn validate_day_of_year(
                &self,
                y: i32,
                doy: i32,
                param: Option<&'static str>,
            ) -> Result<()> {
                if doy < 1 {
                    return Err(day_of_year_error(doy, param));
                }
                if doy > 365 && (doy > 366 || !$formulae::is_leap_year(i64::from(y))) {
                    return Err(day_of_year_error(doy, param));
                }
                Ok(())
            }

            fn validate_day_of_month(
                &self,
                y: i32,
                m: i32,
                d: i32,
                param: Option<&'static str>,
            ) -> Result<()> {
                if d < 1 {
                    return Err(day_error(d, param));
                }
                if d > 28 && d > $formulae::count_days_in_month(i64::from(y), m) {
                    return Err(day_error(d, param));
                }
                Ok(())
            }
        }
    };
}

julian_like_pre_validator!(
    /// Pre-validator for the Gregorian calendar; needs no schema.
    GregorianPreValidator,
    gregorian
);

julian_like_pre_validator!(
    /// Pre-validator for the Julian calendar; needs no schema.
    JulianPreValidator,
    julian
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{GregorianSchema, LunisolarSchema, PaxSchema};

    #[test]
    fn fast_and_slow_paths_agree() {
        let schema = GregorianSchema;
        let plain = PlainPreValidator::new(&schema);
        let solar = Solar12PreValidator::new(&schema);
        let greg = GregorianPreValidator;
        for y in [1900, 2000, 2017, -4] {
            for m in -1..=14 {
                for d in -1..=33 {
                    let expected = plain.validate_month_day(y, m, d, None);
                    assert_eq!(solar.validate_month_day(y, m, d, None), expected, "{y}-{m}-{d}");
                    assert_eq!(greg.validate_month_day(y, m, d, None), expected, "{y}-{m}-{d}");
                }
            }
            for doy in -1..=368 {
                let expected = plain.validate_day_of_year(y, doy, None);
                assert_eq!(solar.validate_day_of_year(y, doy, None), expected);
                assert_eq!(greg.validate_day_of_year(y, doy, None), expected);
            }
        }
    }

    #[test]
    fn error_names_the_component() {
        let v = GregorianPreValidator;
        let param = |r: Result<()>| r.unwrap_err().param_name();
        assert_eq!(param(v.validate_month_day(2017, 13, 1, None)), Some("month"));
        assert_eq!(param(v.validate_month_day(2017, 2, 29, None)), Some("day"));
        assert!(v.validate_month_day(2016, 2, 29, None).is_ok());
        assert_eq!(param(v.validate_day_of_year(2017, 366, None)), Some("day_of_year"));
        assert!(!v.check_month_day(2017, 4, 31));
    }

    #[test]
    fn error_names_the_caller_parameter() {
        let schema = LunisolarSchema;
        let validators: [Box<dyn CalendricalPreValidator + '_>; 3] = [
            Box::new(GregorianPreValidator),
            Box::new(PlainPreValidator::new(&schema)),
            Box::new(LunisolarPreValidator::new(&schema)),
        ];
        let param = |r: Result<()>| r.unwrap_err().param_name();
        for v in &validators {
            assert_eq!(param(v.validate_month(5, 14, Some("parts"))), Some("parts"), "{v:?}");
            assert_eq!(param(v.validate_month_day(5, 2, 31, Some("parts"))), Some("parts"));
            assert_eq!(param(v.validate_day_of_month(5, 1, 0, Some("date"))), Some("date"));
            assert_eq!(param(v.validate_day_of_year(5, 400, Some("ordinal"))), Some("ordinal"));
            assert_eq!(param(v.validate_day_of_year(5, 0, None)), Some("day_of_year"));
        }
    }

    #[test]
    fn lunisolar_thirteenth_month() {
        let schema = LunisolarSchema;
        let v = LunisolarPreValidator::new(&schema);
        assert!(v.check_month(4, 13));
        assert!(!v.check_month(5, 13));
        assert!(v.check_month_day(5, 1, 30));
        assert!(!v.check_month_day(5, 2, 30));
    }

    #[test]
    fn profile_dispatch() {
        let schema = PaxSchema;
        let v = pre_validator_for(&schema);
        assert!(v.check_month_day(6, 13, 7));
        assert!(!v.check_month_day(6, 13, 8));
        assert!(!v.check_month(5, 14));
        assert!(v.check_month(6, 14));
    }
}
