//! `DayZero`: epochs of the built-in calendars, as day numbers.
//!
//! A schema counts days from its own epoch (its `(1, 1, 1)`).  The day
//! number of that epoch converts between the two coordinates:
//! `day_number = epoch + days_since_epoch`.

use crate::day_number::DayNumber;

/// Well-known epochs.
pub struct DayZero;

impl DayZero {
    /// Gregorian `0001-01-01`, the origin of day numbers.
    pub const NEW_STYLE: DayNumber = DayNumber::ZERO;

    /// Julian `0001-01-01` (Gregorian `0000-12-30`).
    pub const OLD_STYLE: DayNumber = DayNumber::from_days_since_zero_const(-2);

    /// Coptic `0001-01-01` (Julian `0284-08-29`).
    pub const COPTIC: DayNumber = DayNumber::from_days_since_zero_const(103_604);

    /// Ethiopic `0001-01-01` (Julian `0008-08-29`).
    pub const ETHIOPIC: DayNumber = DayNumber::from_days_since_zero_const(2_795);

    /// French republican `0001-01-01` (Gregorian `1792-09-22`).
    pub const FRENCH_REPUBLICAN: DayNumber = DayNumber::from_days_since_zero_const(654_414);

    /// Positivist `0001-01-01` (Gregorian `1789-01-01`).
    pub const POSITIVIST: DayNumber = DayNumber::from_days_since_zero_const(653_054);

    /// Tabular Islamic `0001-01-01` (Julian `0622-07-16`).
    pub const TABULAR_ISLAMIC: DayNumber = DayNumber::from_days_since_zero_const(227_014);
}
