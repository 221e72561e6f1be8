//! Calendrical arithmetic: adding years, months and days to parts, and
//! counting whole units between two dates.
//!
//! Adding years or months may land on a day that does not exist, e.g.
//! `2016-02-29 + 1 year`.  The excess over the length of the target month
//! is the *roundoff*, and the configured [`AdditionRule`] decides the
//! result:
//!
//! | rule        | `2016-02-29 + 1 year` |
//! |-------------|-----------------------|
//! | `Truncate`  | `2017-02-28`          |
//! | `Overspill` | `2017-03-01`          |
//! | `Exact`     | `2017-03-01`          |
//! | `Overflow`  | `Err(Overflow)`       |
//!
//! Adding years keeps the month by name, not by number: in a Pax leap year
//! December is month 14, in a common year month 13.  When the month itself
//! is missing from the target year (the Pax week or a lunisolar embolismic
//! month carried into a common year), it is treated as empty: the roundoff
//! is the day of the month and the result is resolved from the end of the
//! target year.
//!
//! All inputs are assumed valid for the schema; results outside the
//! supported years report [`Error::Overflow`].

use cal_core::errors::Result;
use cal_core::{AdditionRule, Error, Settings};
use cal_schemas::{
    CalendricalSchema, DateParts, DaysValidator, OrdinalParts, RangeValidation, YearsValidator,
};
use tracing::trace;

/// Date arithmetic over a schema with a fixed ambiguity-resolution rule.
#[derive(Debug, Clone, Copy)]
pub struct DateMath<'a> {
    schema: &'a dyn CalendricalSchema,
    rule: AdditionRule,
    years: YearsValidator,
    days: DaysValidator,
}

impl<'a> DateMath<'a> {
    /// Arithmetic with the current default rule from [`Settings`].
    pub fn new(schema: &'a dyn CalendricalSchema) -> Self {
        Self::with_rule(schema, Settings::instance().default_addition_rule())
    }

    /// Arithmetic with an explicit rule.
    pub fn with_rule(schema: &'a dyn CalendricalSchema, rule: AdditionRule) -> Self {
        Self {
            schema,
            rule,
            years: YearsValidator::for_schema(schema),
            days: DaysValidator::for_schema(schema),
        }
    }

    /// The underlying schema.
    pub fn schema(&self) -> &'a dyn CalendricalSchema {
        self.schema
    }

    /// The ambiguity-resolution rule.
    pub fn rule(&self) -> AdditionRule {
        self.rule
    }

    // ── Years and months on date parts ───────────────────────────────────────

    /// Add `years` years to `parts`.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the result is outside the supported
    /// years, or if the result is ambiguous under [`AdditionRule::Overflow`].
    pub fn add_years(&self, parts: DateParts, years: i32) -> Result<DateParts> {
        let (from, m, d) = parts.deconstruct();
        let y = self.shift_year(from, years)?;
        let (m, d) = self.fit_month(from, y, m, d);
        self.resolve(y, m, d)
    }

    /// Add `years` years to `parts`, truncating an ambiguous result and
    /// reporting the number of days cut off.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the result is outside the supported
    /// years.
    pub fn add_years_with_roundoff(
        &self,
        parts: DateParts,
        years: i32,
    ) -> Result<(DateParts, i32)> {
        let (from, m, d) = parts.deconstruct();
        let y = self.shift_year(from, years)?;
        let (m, d) = self.fit_month(from, y, m, d);
        Ok(self.truncate(y, m, d))
    }

    /// Add `months` months to `parts`.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the result is outside the supported
    /// years, or if the result is ambiguous under [`AdditionRule::Overflow`].
    pub fn add_months(&self, parts: DateParts, months: i32) -> Result<DateParts> {
        let (y, m, d) = self.shift_month(parts, months)?;
        self.resolve(y, m, d)
    }

    /// Add `months` months to `parts`, truncating an ambiguous result and
    /// reporting the number of days cut off.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the result is outside the supported
    /// years.
    pub fn add_months_with_roundoff(
        &self,
        parts: DateParts,
        months: i32,
    ) -> Result<(DateParts, i32)> {
        let (y, m, d) = self.shift_month(parts, months)?;
        Ok(self.truncate(y, m, d))
    }

    // ── Days ─────────────────────────────────────────────────────────────────

    /// Add `days` days to `parts`.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the result is outside the supported
    /// days.
    pub fn add_days(&self, parts: DateParts, days: i32) -> Result<DateParts> {
        let (y, m, d) = parts.deconstruct();
        let days_since_epoch = self.shift_days(self.schema.count_days_since_epoch(y, m, d), days)?;
        Ok(self.schema.get_date_parts(days_since_epoch))
    }

    /// Add `days` days to ordinal `parts`.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the result is outside the supported
    /// days.
    pub fn add_days_ordinal(&self, parts: OrdinalParts, days: i32) -> Result<OrdinalParts> {
        let (y, doy) = parts.deconstruct();
        let days_since_epoch =
            self.shift_days(self.schema.count_days_since_epoch_ordinal(y, doy), days)?;
        Ok(self.schema.get_ordinal_parts(days_since_epoch))
    }

    /// Add `years` years to ordinal `parts`.  The roundoff is the excess of
    /// the day of the year over the length of the target year.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the result is outside the supported
    /// years, or if the result is ambiguous under [`AdditionRule::Overflow`].
    pub fn add_years_ordinal(&self, parts: OrdinalParts, years: i32) -> Result<OrdinalParts> {
        let (y, doy) = parts.deconstruct();
        let y = self.shift_year(y, years)?;
        let days_in_year = self.schema.count_days_in_year(y);
        let roundoff = doy - days_in_year;
        if roundoff <= 0 {
            return Ok(OrdinalParts::new(y, doy));
        }
        trace!(rule = %self.rule, year = y, day_of_year = doy, roundoff, "ambiguous year addition");
        match self.rule {
            AdditionRule::Truncate => Ok(OrdinalParts::new(y, days_in_year)),
            AdditionRule::Overspill => {
                self.years.check_upper_bound(y + 1)?;
                Ok(OrdinalParts::at_start_of_year(y + 1))
            }
            AdditionRule::Exact => {
                let days_since_epoch = self.shift_days(self.schema.get_end_of_year(y), roundoff)?;
                Ok(self.schema.get_ordinal_parts(days_since_epoch))
            }
            AdditionRule::Overflow => Err(Error::Overflow),
        }
    }

    // ── Differences ──────────────────────────────────────────────────────────

    /// Count whole years from `start` to `end`.
    ///
    /// Returns the count together with `start` plus that many years
    /// (truncated), which lies between `start` and `end` inclusive.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] only for inputs outside the supported
    /// years.
    pub fn count_years_between(
        &self,
        start: DateParts,
        end: DateParts,
    ) -> Result<(i32, DateParts)> {
        let mut years = end.year() - start.year();
        let mut new_start = self.add_years_with_roundoff(start, years)?.0;
        if start <= end {
            if new_start > end {
                years -= 1;
                new_start = self.add_years_with_roundoff(start, years)?.0;
            }
        } else if new_start < end {
            years += 1;
            new_start = self.add_years_with_roundoff(start, years)?.0;
        }
        Ok((years, new_start))
    }

    /// Count whole months from `start` to `end`.
    ///
    /// Returns the count together with `start` plus that many months
    /// (truncated), which lies between `start` and `end` inclusive.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] only for inputs outside the supported
    /// years.
    pub fn count_months_between(
        &self,
        start: DateParts,
        end: DateParts,
    ) -> Result<(i32, DateParts)> {
        let mut months = self.schema.count_months_since_epoch(end.year(), end.month())
            - self.schema.count_months_since_epoch(start.year(), start.month());
        let mut new_start = self.add_months_with_roundoff(start, months)?.0;
        if start <= end {
            if new_start > end {
                months -= 1;
                new_start = self.add_months_with_roundoff(start, months)?.0;
            }
        } else if new_start < end {
            months += 1;
            new_start = self.add_months_with_roundoff(start, months)?.0;
        }
        Ok((months, new_start))
    }

    /// Count days from `start` to `end`.
    pub fn count_days_between(&self, start: DateParts, end: DateParts) -> i32 {
        let (y0, m0, d0) = start.deconstruct();
        let (y1, m1, d1) = end.deconstruct();
        self.schema.count_days_since_epoch(y1, m1, d1)
            - self.schema.count_days_since_epoch(y0, m0, d0)
    }

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn shift_year(&self, y: i32, years: i32) -> Result<i32> {
        let y = y.checked_add(years).ok_or(Error::Overflow)?;
        self.years.check_overflow(y)?;
        Ok(y)
    }

    fn shift_days(&self, days_since_epoch: i32, days: i32) -> Result<i32> {
        let days_since_epoch = days_since_epoch.checked_add(days).ok_or(Error::Overflow)?;
        self.days.check_overflow(days_since_epoch)?;
        Ok(days_since_epoch)
    }

    /// Target (year, month, day) of a month addition.  The month always
    /// exists.
    fn shift_month(&self, parts: DateParts, months: i32) -> Result<(i32, i32, i32)> {
        let (y, m, d) = parts.deconstruct();
        let months_since_epoch = self
            .schema
            .count_months_since_epoch(y, m)
            .checked_add(months)
            .ok_or(Error::Overflow)?;
        let (min_year, max_year) = self.years.range().endpoints();
        let first = self.schema.count_months_since_epoch(min_year, 1);
        let last = self
            .schema
            .count_months_since_epoch(max_year, self.schema.count_months_in_year(max_year));
        if months_since_epoch < first || months_since_epoch > last {
            trace!(months_since_epoch, first, last, "month count out of range");
            return Err(Error::Overflow);
        }
        let (y, m) = self.schema.get_month_parts(months_since_epoch).deconstruct();
        Ok((y, m, d))
    }

    /// Map month `m` of year `from` onto year `y`.  A month missing from
    /// year `y` lands on its last month, carrying the whole of that month
    /// plus `d` as the day.
    fn fit_month(&self, from: i32, y: i32, m: i32, d: i32) -> (i32, i32) {
        match self.schema.get_matching_month(from, m, y) {
            Some(m) => (m, d),
            None => {
                let last = self.schema.count_months_in_year(y);
                (last, self.schema.count_days_in_month(y, last) + d)
            }
        }
    }

    fn truncate(&self, y: i32, m: i32, d: i32) -> (DateParts, i32) {
        let days_in_month = self.schema.count_days_in_month(y, m);
        if d <= days_in_month {
            (DateParts::new(y, m, d), 0)
        } else {
            (DateParts::new(y, m, days_in_month), d - days_in_month)
        }
    }

    /// Resolve a possibly ambiguous `(y, m, d)` where the month exists.
    fn resolve(&self, y: i32, m: i32, d: i32) -> Result<DateParts> {
        let days_in_month = self.schema.count_days_in_month(y, m);
        let roundoff = d - days_in_month;
        if roundoff <= 0 {
            return Ok(DateParts::new(y, m, d));
        }
        trace!(rule = %self.rule, year = y, month = m, day = d, roundoff, "ambiguous addition");
        match self.rule {
            AdditionRule::Truncate => Ok(DateParts::new(y, m, days_in_month)),
            AdditionRule::Overspill => {
                if m < self.schema.count_months_in_year(y) {
                    Ok(DateParts::new(y, m + 1, 1))
                } else {
                    self.years.check_upper_bound(y + 1)?;
                    Ok(DateParts::at_start_of_year(y + 1))
                }
            }
            AdditionRule::Exact => {
                let days_since_epoch =
                    self.shift_days(self.schema.get_end_of_month(y, m), roundoff)?;
                Ok(self.schema.get_date_parts(days_since_epoch))
            }
            AdditionRule::Overflow => Err(Error::Overflow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cal_schemas::SchemaId;

    fn gregorian(rule: AdditionRule) -> DateMath<'static> {
        DateMath::with_rule(SchemaId::Gregorian.schema(), rule)
    }

    #[test]
    fn leap_day_plus_one_year() {
        let leap_day = DateParts::new(2016, 2, 29);
        let cases = [
            (AdditionRule::Truncate, DateParts::new(2017, 2, 28)),
            (AdditionRule::Overspill, DateParts::new(2017, 3, 1)),
            (AdditionRule::Exact, DateParts::new(2017, 3, 1)),
        ];
        for (rule, expected) in cases {
            assert_eq!(gregorian(rule).add_years(leap_day, 1).unwrap(), expected, "{rule}");
        }
        let err = gregorian(AdditionRule::Overflow).add_years(leap_day, 1).unwrap_err();
        assert!(err.is_overflow());
        let math = gregorian(AdditionRule::Overflow);
        assert_eq!(math.add_years(leap_day, 4).unwrap(), DateParts::new(2020, 2, 29));
    }

    #[test]
    fn exact_keeps_the_whole_roundoff() {
        let math = gregorian(AdditionRule::Exact);
        let end_of_january = DateParts::new(2017, 1, 31);
        assert_eq!(math.add_months(end_of_january, 1).unwrap(), DateParts::new(2017, 3, 3));
        assert_eq!(
            math.add_months_with_roundoff(end_of_january, 1).unwrap(),
            (DateParts::new(2017, 2, 28), 3)
        );
        let math = gregorian(AdditionRule::Overspill);
        let add = |y, m, d, n| math.add_months(DateParts::new(y, m, d), n).unwrap();
        assert_eq!(add(2017, 12, 31, -3), DateParts::new(2017, 10, 1));
        assert_eq!(add(2016, 11, 30, 1), DateParts::new(2016, 12, 30));
    }

    #[test]
    fn pax_december_keeps_its_name() {
        // Pax 1999 is a leap year (14 months), 1998 and 2000 are common.
        let pax = SchemaId::Pax.schema();
        let add = |rule, parts: (i32, i32, i32), n| {
            let math = DateMath::with_rule(pax, rule);
            let parts = DateParts::from(parts);
            (
                math.add_years(parts, n).unwrap(),
                math.add_years_with_roundoff(parts, n).unwrap(),
            )
        };
        for rule in AdditionRule::ALL {
            let (result, truncated) = add(rule, (1999, 14, 1), 1);
            assert_eq!(result, DateParts::new(2000, 13, 1), "{rule}");
            assert_eq!(truncated, (DateParts::new(2000, 13, 1), 0), "{rule}");
            let (result, _) = add(rule, (1999, 14, 28), 1);
            assert_eq!(result, DateParts::new(2000, 13, 28), "{rule}");
            let (result, truncated) = add(rule, (1998, 13, 10), 1);
            assert_eq!(result, DateParts::new(1999, 14, 10), "{rule}");
            assert_eq!(truncated.1, 0, "{rule}");
            let (result, _) = add(rule, (2000, 13, 10), -1);
            assert_eq!(result, DateParts::new(1999, 14, 10), "{rule}");
        }
    }

    #[test]
    fn pax_week_resolves_from_end_of_year() {
        let pax = SchemaId::Pax.schema();
        let pax_week_day = DateParts::new(1999, 13, 5);
        let math = |rule| DateMath::with_rule(pax, rule);
        assert_eq!(
            math(AdditionRule::Truncate).add_years_with_roundoff(pax_week_day, 1).unwrap(),
            (DateParts::new(2000, 13, 28), 5)
        );
        let cases = [
            (AdditionRule::Truncate, DateParts::new(2000, 13, 28)),
            (AdditionRule::Overspill, DateParts::new(2001, 1, 1)),
            (AdditionRule::Exact, DateParts::new(2001, 1, 5)),
        ];
        for (rule, expected) in cases {
            assert_eq!(math(rule).add_years(pax_week_day, 1).unwrap(), expected, "{rule}");
        }
        let err = math(AdditionRule::Overflow).add_years(pax_week_day, 1).unwrap_err();
        assert!(err.is_overflow());
        // Into another leap year the Pax week survives.
        let math = math(AdditionRule::Overflow);
        assert_eq!(math.add_years(pax_week_day, 7).unwrap(), DateParts::new(2006, 13, 5));
    }

    #[test]
    fn embolismic_month_resolves_from_end_of_year() {
        // Lunisolar year 4 has 13 months, year 5 has 12.
        let lunisolar = SchemaId::Lunisolar.schema();
        let last_day = DateParts::new(4, 13, 30);
        let math = |rule| DateMath::with_rule(lunisolar, rule);
        assert_eq!(
            math(AdditionRule::Truncate).add_years_with_roundoff(last_day, 1).unwrap(),
            (DateParts::new(5, 12, 29), 30)
        );
        let cases = [
            (AdditionRule::Overspill, DateParts::new(6, 1, 1)),
            (AdditionRule::Exact, DateParts::new(6, 1, 30)),
        ];
        for (rule, expected) in cases {
            assert_eq!(math(rule).add_years(last_day, 1).unwrap(), expected, "{rule}");
        }
    }

    #[test]
    fn ordinal_arithmetic() {
        let math = gregorian(AdditionRule::Truncate);
        let last = OrdinalParts::new(2016, 366);
        assert_eq!(math.add_years_ordinal(last, 1).unwrap(), OrdinalParts::new(2017, 365));
        assert_eq!(math.add_days_ordinal(last, 1).unwrap(), OrdinalParts::new(2017, 1));
        let math = gregorian(AdditionRule::Exact);
        assert_eq!(math.add_years_ordinal(last, 1).unwrap(), OrdinalParts::new(2018, 1));
        let math = gregorian(AdditionRule::Overflow);
        assert!(math.add_years_ordinal(last, 1).unwrap_err().is_overflow());
    }

    #[test]
    fn out_of_range_is_overflow() {
        let math = gregorian(AdditionRule::Truncate);
        let start = DateParts::new(999_999, 12, 31);
        assert!(math.add_years(start, 1).unwrap_err().is_overflow());
        assert!(math.add_months(start, 1).unwrap_err().is_overflow());
        assert!(math.add_days(start, 1).unwrap_err().is_overflow());
        assert!(math.add_years(start, i32::MAX).unwrap_err().is_overflow());
        assert!(gregorian(AdditionRule::Overspill)
            .add_months(DateParts::new(999_999, 11, 30), 1)
            .is_ok());
    }

    #[test]
    fn counting() {
        let math = gregorian(AdditionRule::Truncate);
        let start = DateParts::new(2016, 2, 29);
        assert_eq!(
            math.count_years_between(start, DateParts::new(2017, 2, 28)).unwrap(),
            (1, DateParts::new(2017, 2, 28))
        );
        assert_eq!(
            math.count_years_between(start, DateParts::new(2017, 2, 27)).unwrap(),
            (0, start)
        );
        let months = |a: (i32, i32, i32), b: (i32, i32, i32)| {
            math.count_months_between(a.into(), b.into()).unwrap()
        };
        assert_eq!(months((2017, 1, 31), (2017, 3, 30)), (1, DateParts::new(2017, 2, 28)));
        assert_eq!(months((2017, 3, 15), (2017, 1, 16)), (-1, DateParts::new(2017, 2, 15)));
        assert_eq!(math.count_days_between(start, DateParts::new(2017, 2, 28)), 365);
    }
}
