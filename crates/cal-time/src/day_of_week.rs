//! `DayOfWeek`: ISO day of the week.

use cal_core::errors::{Error, Result};
use cal_core::utilities::data_parsers::normalize_identifier;

/// Day of the week.
///
/// Variants are numbered 1–7 following ISO 8601 (Monday = 1, Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DayOfWeek {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl DayOfWeek {
    /// All days, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Construct from the ISO number (1 = Monday … 7 = Sunday).
    ///
    /// # Errors
    /// Returns an argument-range error on `iso` outside `1..=7`.
    pub fn from_iso(iso: i32) -> Result<Self> {
        match iso {
            1..=7 => Ok(Self::ALL[(iso - 1) as usize]),
            _ => Err(Error::out_of_range("iso", iso)),
        }
    }

    /// Day of the week `offset` days after a Monday, for any `offset`.
    pub(crate) fn from_monday_offset(offset: i32) -> Self {
        Self::ALL[offset.rem_euclid(7) as usize]
    }

    /// Return the ISO number (1 = Monday … 7 = Sunday).
    pub fn iso(&self) -> i32 {
        *self as i32
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, DayOfWeek::Saturday | DayOfWeek::Sunday)
    }

    /// Return the English name.
    pub fn name(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DayOfWeek {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize_identifier(s);
        DayOfWeek::ALL
            .into_iter()
            .find(|dow| dow.name().eq_ignore_ascii_case(&key))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown day of the week: {s:?}")))
    }
}
