//! # cal-time
//!
//! Absolute day numbers, ordinal numerals, and date/month arithmetic.
//!
//! ```
//! use cal_time::{DayNumber, DayOfWeek};
//!
//! let day = DayNumber::from_gregorian_parts(2017, 11, 19).unwrap();
//! assert_eq!(day.days_since_zero(), 736_651);
//! assert_eq!(day.day_of_week(), DayOfWeek::Sunday);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Adding years, months and days to parts; counting between dates.
pub mod date_math;

/// `DayNumber`: days since Gregorian `0001-01-01`.
pub mod day_number;

/// `DayOfWeek`: ISO day of the week.
pub mod day_of_week;

/// `DayZero`: epochs of the built-in calendars.
pub mod day_zero;

/// `Ord`: ordinal numerals.
pub mod ord;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date_math::DateMath;
pub use day_number::DayNumber;
pub use day_of_week::DayOfWeek;
pub use day_zero::DayZero;
pub use ord::Ord;
