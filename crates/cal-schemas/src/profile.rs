//! Calendrical profiles.

use std::fmt;

/// A classification of schemas sharing known lower bounds on their month
/// and year lengths.
///
/// The bounds are what the pre-validators rely on to accept most inputs
/// without querying the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendricalProfile {
    /// Twelve months, years of at least 365 days, months of at least 28.
    Solar12,
    /// Thirteen months, years of at least 365 days, months of at least 28.
    Solar13,
    /// Twelve months, years of at least 354 days, months of at least 29.
    Lunar,
    /// Twelve or thirteen months, years of at least 354 days, months of at
    /// least 29.
    Lunisolar,
    /// No usable bound.
    Other,
}

impl CalendricalProfile {
    /// Minimum number of months in a year, `None` for [`Other`](Self::Other).
    pub const fn min_months_in_year(self) -> Option<i32> {
        match self {
            Self::Solar12 | Self::Lunar | Self::Lunisolar => Some(12),
            Self::Solar13 => Some(13),
            Self::Other => None,
        }
    }

    /// Maximum number of months in a year, `None` for [`Other`](Self::Other).
    pub const fn max_months_in_year(self) -> Option<i32> {
        match self {
            Self::Solar12 | Self::Lunar => Some(12),
            Self::Solar13 | Self::Lunisolar => Some(13),
            Self::Other => None,
        }
    }

    /// Minimum number of days in a year.
    pub const fn min_days_in_year(self) -> Option<i32> {
        match self {
            Self::Solar12 | Self::Solar13 => Some(365),
            Self::Lunar | Self::Lunisolar => Some(354),
            Self::Other => None,
        }
    }

    /// Minimum number of days in a month.
    pub const fn min_days_in_month(self) -> Option<i32> {
        match self {
            Self::Solar12 | Self::Solar13 => Some(28),
            Self::Lunar | Self::Lunisolar => Some(29),
            Self::Other => None,
        }
    }
}

impl fmt::Display for CalendricalProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Solar12 => "Solar12",
            Self::Solar13 => "Solar13",
            Self::Lunar => "Lunar",
            Self::Lunisolar => "Lunisolar",
            Self::Other => "Other",
        };
        f.write_str(name)
    }
}
