//! Calendrical constants shared by several schemas.

/// Days in a common solar year.
pub const DAYS_IN_SOLAR_COMMON_YEAR: i32 = 365;

/// Days in a leap solar year.
pub const DAYS_IN_SOLAR_LEAP_YEAR: i32 = 366;

/// Days in a four-year cycle with one leap year (Julian rule).
pub const DAYS_PER_4_YEAR_SUBCYCLE: i32 = 4 * DAYS_IN_SOLAR_COMMON_YEAR + 1;

/// Days in a Gregorian century that does not start with a leap year.
pub const DAYS_PER_100_YEAR_SUBCYCLE: i32 = 25 * DAYS_PER_4_YEAR_SUBCYCLE - 1;

/// Days in a full Gregorian cycle.
pub const DAYS_PER_400_YEAR_CYCLE: i32 = 4 * DAYS_PER_100_YEAR_SUBCYCLE + 1;

/// Days in a 128-year cycle with the Julian rule minus one leap year.
pub const DAYS_PER_128_YEAR_CYCLE: i32 = 32 * DAYS_PER_4_YEAR_SUBCYCLE - 1;

/// Days in a common lunar year.
pub const DAYS_IN_LUNAR_COMMON_YEAR: i32 = 354;

/// Days in a 30-year tabular Islamic cycle.
pub const DAYS_PER_30_YEAR_LUNAR_CYCLE: i32 = 30 * DAYS_IN_LUNAR_COMMON_YEAR + 11;

/// Gregorian-style month lengths in a common year.
pub const GREGORIAN_DAYS_IN_MONTHS_OF_COMMON_YEAR: [u8; 12] =
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian-style month lengths in a leap year.
pub const GREGORIAN_DAYS_IN_MONTHS_OF_LEAP_YEAR: [u8; 12] =
    [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_lengths() {
        assert_eq!(DAYS_PER_4_YEAR_SUBCYCLE, 1461);
        assert_eq!(DAYS_PER_100_YEAR_SUBCYCLE, 36_524);
        assert_eq!(DAYS_PER_400_YEAR_CYCLE, 146_097);
        assert_eq!(DAYS_PER_128_YEAR_CYCLE, 46_751);
        assert_eq!(DAYS_PER_30_YEAR_LUNAR_CYCLE, 10_631);
    }
}
