//! The Coptic schemas.
//!
//! Twelve months of 30 days followed by five epagomenal days, six in leap
//! years.  A year `y` is leap when `y mod 4 == 3`.

use cal_core::math;

use crate::constants::{DAYS_IN_SOLAR_COMMON_YEAR, DAYS_PER_4_YEAR_SUBCYCLE};
use crate::profile::CalendricalProfile;
use crate::schema::CalendricalSchema;
use crate::schemas::epagomenal::epagomenal_months;

#[inline]
fn is_leap(y: i32) -> bool {
    math::modulo(y, 4) == 3
}

#[inline]
fn start_of_year(y: i32) -> i32 {
    DAYS_IN_SOLAR_COMMON_YEAR * (y - 1) + math::divide(y, 4)
}

#[inline]
fn get_year(days: i32) -> (i32, i32) {
    let y = math::divide(4 * days + 1463, DAYS_PER_4_YEAR_SUBCYCLE);
    (y, days - start_of_year(y) + 1)
}

#[inline]
fn days_in_year(y: i32) -> i32 {
    DAYS_IN_SOLAR_COMMON_YEAR + i32::from(is_leap(y))
}

/// The Coptic calendar with the epagomenal days as a thirteenth month.
#[derive(Debug, Clone, Copy, Default)]
pub struct Coptic13Schema;

/// The Coptic calendar with the epagomenal days appended to the twelfth
/// month.
#[derive(Debug, Clone, Copy, Default)]
pub struct Coptic12Schema;

impl CalendricalSchema for Coptic13Schema {
    epagomenal_months!(13, is_leap);

    fn profile(&self) -> CalendricalProfile {
        CalendricalProfile::Other
    }

    fn min_days_in_year(&self) -> i32 {
        DAYS_IN_SOLAR_COMMON_YEAR
    }

    fn is_leap_year(&self, y: i32) -> bool {
        is_leap(y)
    }

    fn count_days_in_year(&self, y: i32) -> i32 {
        days_in_year(y)
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        get_year(days_since_epoch)
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        start_of_year(y)
    }
}

impl CalendricalSchema for Coptic12Schema {
    epagomenal_months!(12, is_leap);

    fn profile(&self) -> CalendricalProfile {
        CalendricalProfile::Solar12
    }

    fn min_days_in_year(&self) -> i32 {
        DAYS_IN_SOLAR_COMMON_YEAR
    }

    fn is_leap_year(&self, y: i32) -> bool {
        is_leap(y)
    }

    fn count_days_in_year(&self, y: i32) -> i32 {
        days_in_year(y)
    }

    fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
        get_year(days_since_epoch)
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        start_of_year(y)
    }
}
