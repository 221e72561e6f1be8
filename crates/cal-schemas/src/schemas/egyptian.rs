//! The Egyptian schemas: the Coptic month layout without leap years.

use cal_core::math;

use crate::constants::DAYS_IN_SOLAR_COMMON_YEAR;
use crate::profile::CalendricalProfile;
use crate::schema::CalendricalSchema;
use crate::schemas::epagomenal::epagomenal_months;

#[inline]
fn never_leap(_y: i32) -> bool {
    false
}

/// The Egyptian calendar with the epagomenal days as a thirteenth month.
#[derive(Debug, Clone, Copy, Default)]
pub struct Egyptian13Schema;

/// The Egyptian calendar with the epagomenal days appended to the twelfth
/// month.
#[derive(Debug, Clone, Copy, Default)]
pub struct Egyptian12Schema;

macro_rules! impl_egyptian {
    ($schema:ident, $months:tt, $profile:expr) => {
        impl CalendricalSchema for $schema {
            epagomenal_months!($months, never_leap);

            fn profile(&self) -> CalendricalProfile {
                $profile
            }

            fn min_days_in_year(&self) -> i32 {
                DAYS_IN_SOLAR_COMMON_YEAR
            }

            fn is_leap_year(&self, _y: i32) -> bool {
                false
            }

            fn count_days_in_year(&self, _y: i32) -> i32 {
                DAYS_IN_SOLAR_COMMON_YEAR
            }

            fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
                let (y0, doy0) = math::divide_rem(days_since_epoch, DAYS_IN_SOLAR_COMMON_YEAR);
                (y0 + 1, doy0 + 1)
            }

            fn get_start_of_year(&self, y: i32) -> i32 {
                DAYS_IN_SOLAR_COMMON_YEAR * (y - 1)
            }
        }
    };
}

impl_egyptian!(Egyptian13Schema, 13, CalendricalProfile::Other);
impl_egyptian!(Egyptian12Schema, 12, CalendricalProfile::Solar12);
