//! The French republican schemas.
//!
//! The Coptic month layout with the Gregorian leap rule applied to the
//! republican year number.

use crate::constants::DAYS_IN_SOLAR_COMMON_YEAR;
use crate::formulae::GregorianRule;
use crate::profile::CalendricalProfile;
use crate::schema::CalendricalSchema;
use crate::schemas::epagomenal::epagomenal_months;

#[inline]
fn is_leap(y: i32) -> bool {
    GregorianRule::is_leap_year(y)
}

/// The French republican calendar with the complementary days as a
/// thirteenth month.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchRepublican13Schema;

/// The French republican calendar with the complementary days appended to
/// the twelfth month.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchRepublican12Schema;

macro_rules! impl_french_republican {
    ($schema:ident, $months:tt, $profile:expr) => {
        impl CalendricalSchema for $schema {
            epagomenal_months!($months, is_leap);

            fn profile(&self) -> CalendricalProfile {
                $profile
            }

            fn min_days_in_year(&self) -> i32 {
                DAYS_IN_SOLAR_COMMON_YEAR
            }

            fn is_leap_year(&self, y: i32) -> bool {
                is_leap(y)
            }

            fn count_days_in_year(&self, y: i32) -> i32 {
                DAYS_IN_SOLAR_COMMON_YEAR + i32::from(is_leap(y))
            }

            fn get_year(&self, days_since_epoch: i32) -> (i32, i32) {
                GregorianRule::get_year(days_since_epoch)
            }

            fn get_start_of_year(&self, y: i32) -> i32 {
                GregorianRule::start_of_year(y)
            }
        }
    };
}

impl_french_republican!(FrenchRepublican13Schema, 13, CalendricalProfile::Other);
impl_french_republican!(FrenchRepublican12Schema, 12, CalendricalProfile::Solar12);
