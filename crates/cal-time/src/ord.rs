//! `Ord`: ordinal numerals for centuries, millennia and eras.
//!
//! An ordinal is stored as an *algebraic* value, where `0` is a legitimate
//! position (the "zeroth", displayed as `-1st`).  The *rank* view skips zero:
//!
//! | algebraic | … | -1    | 0     | 1     | 2     | … |
//! |-----------|---|-------|-------|-------|-------|---|
//! | rank      | … | -2nd  | -1st  | 1st   | 2nd   | … |
//!
//! Algebraic values live in `[i32::MIN + 2, i32::MAX]`, which makes
//! [`Ord::negate`] total over the range (`negate(v) = 1 - v`).

use cal_core::errors::Result;
use cal_core::math::divide;
use cal_core::utilities::data_formatters::format_ordinal;
use cal_core::{ensure_in_range, Error};
use tracing::trace;

/// An ordinal numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ord(i32);

impl Ord {
    /// Smallest algebraic value.
    pub const MIN_ALGEBRAIC_VALUE: i32 = i32::MIN + 2;

    /// Largest algebraic value.
    pub const MAX_ALGEBRAIC_VALUE: i32 = i32::MAX;

    /// The zeroth ordinal, rank `-1`.
    pub const ZEROTH: Ord = Ord(0);

    /// The first ordinal.
    pub const FIRST: Ord = Ord(1);

    /// Smallest ordinal.
    pub const MIN_VALUE: Ord = Ord(Self::MIN_ALGEBRAIC_VALUE);

    /// Largest ordinal.
    pub const MAX_VALUE: Ord = Ord(Self::MAX_ALGEBRAIC_VALUE);

    /// Create an ordinal from its rank.
    ///
    /// # Errors
    /// Returns an argument-range error naming `rank` if it is zero or
    /// `i32::MIN`.
    pub fn from_rank(rank: i32) -> Result<Self> {
        ensure_in_range!(rank != 0 && rank > i32::MIN, "rank", rank);
        Ok(Self(if rank > 0 { rank } else { rank + 1 }))
    }

    /// Create an ordinal from its algebraic value.
    ///
    /// # Errors
    /// Returns an argument-range error naming `value` below
    /// [`MIN_ALGEBRAIC_VALUE`](Self::MIN_ALGEBRAIC_VALUE).
    pub fn from_algebraic(value: i32) -> Result<Self> {
        ensure_in_range!(value >= Self::MIN_ALGEBRAIC_VALUE, "value", value);
        Ok(Self(value))
    }

    /// Rank: the algebraic value with zero skipped.
    pub fn rank(&self) -> i32 {
        if self.0 > 0 {
            self.0
        } else {
            self.0 - 1
        }
    }

    /// Algebraic value.
    #[inline]
    pub fn algebraic_value(&self) -> i32 {
        self.0
    }

    /// `true` for the first ordinal and above.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    // ── Arithmetic ───────────────────────────────────────────────────────────

    fn checked(value: Option<i32>) -> Result<Self> {
        match value {
            Some(v) if v >= Self::MIN_ALGEBRAIC_VALUE => Ok(Self(v)),
            _ => {
                trace!(?value, "ordinal overflow");
                Err(Error::Overflow)
            }
        }
    }

    /// The next ordinal.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] at [`MAX_VALUE`](Self::MAX_VALUE).
    pub fn increment(&self) -> Result<Self> {
        Self::checked(self.0.checked_add(1))
    }

    /// The previous ordinal.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] at [`MIN_VALUE`](Self::MIN_VALUE).
    pub fn decrement(&self) -> Result<Self> {
        Self::checked(self.0.checked_sub(1))
    }

    /// The ordinal `n` positions later (earlier if negative).
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the result is out of range.
    pub fn plus(&self, n: i32) -> Result<Self> {
        Self::checked(self.0.checked_add(n))
    }

    /// The ordinal `n` positions earlier (later if negative).
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if the result is out of range.
    pub fn minus(&self, n: i32) -> Result<Self> {
        Self::checked(self.0.checked_sub(n))
    }

    /// The mirror image around the zeroth/first boundary: `1st ↔ -1st`.
    pub fn negate(&self) -> Self {
        // 1 - v stays in range for every v in [MIN + 2, MAX].
        Self(1 - self.0)
    }

    // ── Year numbering ───────────────────────────────────────────────────────

    /// Century of a year: years `1..=100` are the 1st century, `-99..=0`
    /// the zeroth (`-1st`).
    pub fn century_of_year(year: i32) -> Self {
        Self(divide(i64::from(year) - 1, 100) as i32 + 1)
    }

    /// Millennium of a year: years `1..=1000` are the 1st millennium.
    pub fn millennium_of_year(year: i32) -> Self {
        Self(divide(i64::from(year) - 1, 1000) as i32 + 1)
    }

    /// Year of the era: the algebraic year `0` is `-1st`, i.e. 1 BCE.
    ///
    /// # Errors
    /// Returns an argument-range error naming `year` below
    /// [`MIN_ALGEBRAIC_VALUE`](Self::MIN_ALGEBRAIC_VALUE).
    pub fn year_of_era(year: i32) -> Result<Self> {
        ensure_in_range!(year >= Self::MIN_ALGEBRAIC_VALUE, "year", year);
        Ok(Self(year))
    }
}

impl std::ops::Sub<Ord> for Ord {
    type Output = i64;

    /// Number of positions from `rhs` to `self`.
    fn sub(self, rhs: Ord) -> i64 {
        i64::from(self.0) - i64::from(rhs.0)
    }
}

impl std::fmt::Display for Ord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_ordinal(self.rank().into()))
    }
}
