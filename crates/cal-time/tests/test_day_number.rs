//! `DayNumber`: Gregorian/Julian interconversion, checked arithmetic, and
//! day-of-week adjusters.

use cal_schemas::formulae::gregorian;
use cal_schemas::{DateParts, SchemaId};
use cal_time::{DayNumber, DayOfWeek, DayZero};
use proptest::prelude::*;

fn day_of_week() -> impl Strategy<Value = DayOfWeek> {
    proptest::sample::select(DayOfWeek::ALL.to_vec())
}

fn gregorian_day() -> impl Strategy<Value = DayNumber> {
    let (lo, hi) = DayNumber::gregorian_domain().endpoints();
    (lo.days_since_zero()..=hi.days_since_zero())
        .prop_map(|n| DayNumber::from_days_since_zero(n).unwrap())
}

fn julian_day() -> impl Strategy<Value = DayNumber> {
    let (lo, hi) = DayNumber::julian_domain().endpoints();
    (lo.days_since_zero()..=hi.days_since_zero())
        .prop_map(|n| DayNumber::from_days_since_zero(n).unwrap())
}

fn any_day() -> impl Strategy<Value = DayNumber> {
    (DayNumber::MIN_DAYS_SINCE_ZERO..=DayNumber::MAX_DAYS_SINCE_ZERO)
        .prop_map(|n| DayNumber::from_days_since_zero(n).unwrap())
}

proptest! {
    #[test]
    fn gregorian_round_trip(day in gregorian_day()) {
        let (y, m, d) = day.get_gregorian_parts().unwrap().deconstruct();
        prop_assert_eq!(DayNumber::from_gregorian_parts(y, m, d).unwrap(), day);
        let (y, doy) = day.get_gregorian_ordinal_parts().unwrap().deconstruct();
        prop_assert_eq!(DayNumber::from_gregorian_ordinal_parts(y, doy).unwrap(), day);
    }

    #[test]
    fn julian_round_trip(day in julian_day()) {
        let (y, m, d) = day.get_julian_parts().unwrap().deconstruct();
        prop_assert_eq!(DayNumber::from_julian_parts(y, m, d).unwrap(), day);
        let (y, doy) = day.get_julian_ordinal_parts().unwrap().deconstruct();
        prop_assert_eq!(DayNumber::from_julian_ordinal_parts(y, doy).unwrap(), day);
    }

    #[test]
    fn gregorian_agrees_with_schema(days in -300_000_000..300_000_000_i32) {
        let day = DayNumber::from_days_since_zero(days).unwrap();
        let schema = SchemaId::Gregorian.schema();
        prop_assert_eq!(day.get_gregorian_parts().unwrap(), schema.get_date_parts(days));
        let julian = SchemaId::Julian.schema();
        prop_assert_eq!(
            day.get_julian_parts().unwrap(),
            julian.get_date_parts(day.count_days_since(DayZero::OLD_STYLE).unwrap())
        );
    }

    #[test]
    fn adjusters_land_on_the_requested_day(day in any_day(), dow in day_of_week()) {
        if let Ok(prev) = day.previous(dow) {
            prop_assert_eq!(prev.day_of_week(), dow);
            prop_assert!((1..=7).contains(&(day - prev)));
        }
        if let Ok(prev) = day.previous_or_same(dow) {
            prop_assert_eq!(prev.day_of_week(), dow);
            prop_assert!((0..=6).contains(&(day - prev)));
        }
        if let Ok(next) = day.next_or_same(dow) {
            prop_assert_eq!(next.day_of_week(), dow);
            prop_assert!((0..=6).contains(&(next - day)));
        }
        if let Ok(next) = day.next(dow) {
            prop_assert_eq!(next.day_of_week(), dow);
            prop_assert!((1..=7).contains(&(next - day)));
        }
        match day.nearest(dow) {
            Ok(nearest) => {
                prop_assert_eq!(nearest.day_of_week(), dow);
                prop_assert!((-3..=3).contains(&(nearest - day)));
            }
            Err(err) => prop_assert!(err.is_overflow()),
        }
    }

    #[test]
    fn plus_days_is_additive(
        day in gregorian_day(),
        a in -1_000..1_000_i32,
        b in -1_000..1_000_i32,
    ) {
        let stepwise = day.plus_days(a).and_then(|x| x.plus_days(b));
        if let (Ok(x), Ok(y)) = (stepwise, day.plus_days(a + b)) {
            prop_assert_eq!(x, y);
            prop_assert_eq!(x.count_days_since(day).unwrap(), a + b);
        }
    }
}

#[test]
fn known_day_number() {
    let day = DayNumber::from_gregorian_parts(2017, 11, 19).unwrap();
    assert_eq!(day.days_since_zero(), 736_651);
    assert_eq!(day.day_of_week(), DayOfWeek::Sunday);
    assert_eq!(gregorian::get_year(736_651), 2017);
    assert_eq!(day.to_string(), "2017-11-19");
    assert_eq!(DayNumber::ZERO.day_of_week(), DayOfWeek::Monday);
    assert_eq!(DayZero::NEW_STYLE.get_gregorian_parts().unwrap(), DateParts::new(1, 1, 1));
    assert_eq!(DayZero::OLD_STYLE.get_julian_parts().unwrap(), DateParts::new(1, 1, 1));
}

#[test]
fn plus_days_chain_matches_formula() {
    let day = DayNumber::from_gregorian_parts(2017, 11, 19).unwrap();
    let later = day.plus_days(7).unwrap().plus_days(30).unwrap().plus_days(401).unwrap();
    let expected = gregorian::count_days_since_epoch(2017, 11, 19) + 7 + 30 + 401;
    assert_eq!(i64::from(later.days_since_zero()), expected);
    assert_eq!(later.get_gregorian_parts().unwrap(), DateParts::new(2019, 1, 31));
    assert_eq!(later.count_days_since(day).unwrap(), 438);
}

#[test]
fn positivist_epoch() {
    let day = DayNumber::from_days_since_zero(653_054).unwrap();
    assert_eq!(day, DayZero::POSITIVIST);
    let schema = SchemaId::Positivist.schema();
    let days = day.count_days_since(DayZero::POSITIVIST).unwrap();
    assert_eq!(schema.get_date_parts(days), DateParts::new(1, 1, 1));
    assert_eq!(DayNumber::from_days_since_epoch(DayZero::POSITIVIST, 0).unwrap(), day);
}

#[test]
fn invalid_parts_name_the_parameter() {
    let param = |r: cal_core::Result<DayNumber>| r.unwrap_err().param_name();
    assert_eq!(param(DayNumber::from_gregorian_parts(5_000_001, 1, 1)), Some("year"));
    assert_eq!(param(DayNumber::from_gregorian_parts(2017, 13, 1)), Some("month"));
    assert_eq!(param(DayNumber::from_gregorian_parts(2017, 2, 29)), Some("day"));
    assert_eq!(param(DayNumber::from_julian_parts(1900, 2, 30)), Some("day"));
    assert!(DayNumber::from_julian_parts(1900, 2, 29).is_ok());
    assert_eq!(param(DayNumber::from_gregorian_ordinal_parts(2017, 366)), Some("day_of_year"));
}

#[test]
fn arithmetic_overflow_at_the_bounds() {
    assert!(DayNumber::MAX_VALUE.plus_days(1).unwrap_err().is_overflow());
    assert!(DayNumber::MIN_VALUE.plus_days(-1).unwrap_err().is_overflow());
    assert!(DayNumber::MAX_VALUE.next_day().unwrap_err().is_overflow());
    assert!(DayNumber::MIN_VALUE.previous_day().unwrap_err().is_overflow());
    assert!(DayNumber::MAX_VALUE.get_gregorian_parts().unwrap_err().is_overflow());
    assert!(DayNumber::MIN_VALUE.get_julian_parts().unwrap_err().is_overflow());
    assert_eq!(DayNumber::MAX_VALUE - DayNumber::MIN_VALUE, i64::from(u32::MAX) - 2);
}

#[test]
fn nearest_near_the_bounds() {
    // MAX_VALUE is a Monday, MIN_VALUE a Sunday.
    let max = DayNumber::MAX_VALUE;
    assert_eq!(max.day_of_week(), DayOfWeek::Monday);
    assert_eq!(max.nearest(DayOfWeek::Monday).unwrap(), max);
    assert_eq!(max.nearest(DayOfWeek::Friday).unwrap(), max.plus_days(-3).unwrap());
    assert!(max.nearest(DayOfWeek::Thursday).unwrap_err().is_overflow());

    let min = DayNumber::MIN_VALUE;
    assert_eq!(min.day_of_week(), DayOfWeek::Sunday);
    assert_eq!(min.nearest(DayOfWeek::Sunday).unwrap(), min);
    assert_eq!(min.nearest(DayOfWeek::Wednesday).unwrap(), min.plus_days(3).unwrap());
    assert!(min.nearest(DayOfWeek::Thursday).unwrap_err().is_overflow());
}
