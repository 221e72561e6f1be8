//! Date arithmetic across every schema: addition rules agree with each
//! other, and counting between two dates stays between them.

use cal_core::{AdditionRule, ScopedAdditionRule};
use cal_schemas::{CalendricalSchema, DateParts, SchemaId};
use cal_time::DateMath;
use proptest::prelude::*;

fn schema_id() -> impl Strategy<Value = SchemaId> {
    proptest::sample::select(SchemaId::ALL.to_vec())
}

fn days() -> impl Strategy<Value = i32> {
    prop_oneof![-5_000..5_000_i32, -100_000_000..100_000_000_i32]
}

fn days_of(schema: &dyn CalendricalSchema, parts: DateParts) -> i32 {
    let (y, m, d) = parts.deconstruct();
    schema.count_days_since_epoch(y, m, d)
}

proptest! {
    #[test]
    fn rules_agree_on_the_roundoff(id in schema_id(), days in days(), n in -1_000..1_000_i32) {
        let s = id.schema();
        let start = s.get_date_parts(days);
        let math = |rule| DateMath::with_rule(s, rule);

        let (truncated, roundoff) =
            math(AdditionRule::Truncate).add_years_with_roundoff(start, n).unwrap();
        prop_assert!(roundoff >= 0);
        prop_assert_eq!(math(AdditionRule::Truncate).add_years(start, n).unwrap(), truncated);
        let (y, m, d) = truncated.deconstruct();
        prop_assert!(id.pre_validator().check_month_day(y, m, d), "{} {}", id, truncated);

        let exact = math(AdditionRule::Exact).add_years(start, n).unwrap();
        prop_assert_eq!(days_of(s, exact), days_of(s, truncated) + roundoff);

        let overspill = math(AdditionRule::Overspill).add_years(start, n).unwrap();
        let overflow = math(AdditionRule::Overflow).add_years(start, n);
        if roundoff == 0 {
            prop_assert_eq!(overspill, truncated);
            prop_assert_eq!(overflow.unwrap(), truncated);
        } else {
            prop_assert_eq!(days_of(s, overspill), days_of(s, truncated) + 1);
            prop_assert!(overflow.unwrap_err().is_overflow());
        }
    }

    #[test]
    fn month_addition_rules(id in schema_id(), days in days(), n in -10_000..10_000_i32) {
        let s = id.schema();
        let start = s.get_date_parts(days);
        let truncate = DateMath::with_rule(s, AdditionRule::Truncate);
        let (truncated, roundoff) = truncate.add_months_with_roundoff(start, n).unwrap();
        let exact = DateMath::with_rule(s, AdditionRule::Exact).add_months(start, n).unwrap();
        prop_assert_eq!(days_of(s, exact), days_of(s, truncated) + roundoff);
        prop_assert_eq!(
            s.count_months_since_epoch(truncated.year(), truncated.month()),
            s.count_months_since_epoch(start.year(), start.month()) + n
        );
    }

    #[test]
    fn counting_stays_between_the_dates(id in schema_id(), a in days(), b in days()) {
        let s = id.schema();
        let (start, end) = (s.get_date_parts(a), s.get_date_parts(b));
        let math = DateMath::with_rule(s, AdditionRule::Truncate);
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };

        let (years, new_start) = math.count_years_between(start, end).unwrap();
        prop_assert!(lo <= new_start && new_start <= hi, "{} {} {} {}", id, start, end, new_start);
        prop_assert_eq!(math.add_years_with_roundoff(start, years).unwrap().0, new_start);

        let (months, new_start) = math.count_months_between(start, end).unwrap();
        prop_assert!(lo <= new_start && new_start <= hi, "{} {} {} {}", id, start, end, new_start);
        prop_assert_eq!(math.add_months_with_roundoff(start, months).unwrap().0, new_start);

        prop_assert_eq!(math.count_days_between(start, end), b - a);
        prop_assert_eq!(math.add_days(start, b - a).unwrap(), end);
    }
}

#[test]
fn leap_day_plus_one_year() {
    let s = SchemaId::Gregorian.schema();
    let leap_day = DateParts::new(2016, 2, 29);
    let truncated = DateMath::with_rule(s, AdditionRule::Truncate).add_years(leap_day, 1);
    assert_eq!(truncated.unwrap(), DateParts::new(2017, 2, 28));
    let err = DateMath::with_rule(s, AdditionRule::Overflow).add_years(leap_day, 1).unwrap_err();
    assert!(err.is_overflow());
}

#[test]
fn default_rule_comes_from_settings() {
    let s = SchemaId::Julian.schema();
    let _guard = ScopedAdditionRule::new(AdditionRule::Overspill);
    let math = DateMath::new(s);
    assert_eq!(math.rule(), AdditionRule::Overspill);
    let end_of_march = DateParts::new(1900, 3, 31);
    assert_eq!(math.add_months(end_of_march, 1).unwrap(), DateParts::new(1900, 5, 1));
}

#[test]
fn pax_december_stays_december() {
    let s = SchemaId::Pax.schema();
    for y in 1990..2010 {
        let december = DateParts::new(y, s.count_months_in_year(y), 15);
        for n in -12..=12 {
            for rule in AdditionRule::ALL {
                let result = DateMath::with_rule(s, rule).add_years(december, n).unwrap();
                let expected = DateParts::new(y + n, s.count_months_in_year(y + n), 15);
                assert_eq!(result, expected, "{december} + {n} under {rule}");
            }
        }
    }
}
