//! `Segment`: a closed, bounded, non-empty interval `[min, max]`.

use cal_core::errors::Result;
use cal_core::{ensure_in_range, Error};

use crate::discrete::Discrete;
use crate::segment_set::SegmentSet;

/// A closed bounded interval `[min, max]` with `min <= max`.
///
/// A segment is never empty; operations whose result may be empty
/// (intersection, gap) return a [`SegmentSet`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<T> {
    min: T,
    max: T,
}

impl<T: Discrete> Segment<T> {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create the segment `[min, max]`.
    ///
    /// # Errors
    /// Returns an argument-range error on `max` if `max < min`.
    pub fn new(min: T, max: T) -> Result<Self> {
        ensure_in_range!(max >= min, "max", max);
        Ok(Self { min, max })
    }

    /// Create `[min, max]` without checking the ordering.
    ///
    /// Reserved for call sites that have already established `min <= max`.
    #[inline]
    pub fn new_unchecked(min: T, max: T) -> Self {
        debug_assert!(min <= max, "invalid segment [{min:?}, {max:?}]");
        Self { min, max }
    }

    /// The segment `[value, value]`.
    pub fn singleton(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// The segment covering every value of `T`.
    pub fn maximal() -> Self {
        Self {
            min: T::MIN_VALUE,
            max: T::MAX_VALUE,
        }
    }

    /// The segment of `length` values starting at `min`.
    ///
    /// # Errors
    /// Returns an argument-range error on `length` if it is zero or if the
    /// segment would extend past `T::MAX_VALUE`.
    pub fn starting_at(min: T, length: u64) -> Result<Self> {
        ensure_in_range!(length > 0, "length", length);
        let max = T::from_widened(min.widen() + i128::from(length) - 1)
            .ok_or_else(|| Error::out_of_range("length", length))?;
        Ok(Self { min, max })
    }

    /// The segment of `length` values ending at `max`.
    ///
    /// # Errors
    /// Returns an argument-range error on `length` if it is zero or if the
    /// segment would extend below `T::MIN_VALUE`.
    pub fn ending_at(max: T, length: u64) -> Result<Self> {
        ensure_in_range!(length > 0, "length", length);
        let min = T::from_widened(max.widen() - i128::from(length) + 1)
            .ok_or_else(|| Error::out_of_range("length", length))?;
        Ok(Self { min, max })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Lower endpoint.
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper endpoint.
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    /// `(min, max)`.
    #[inline]
    pub fn endpoints(&self) -> (T, T) {
        (self.min, self.max)
    }

    /// Number of values in the segment (always at least 1).
    pub fn count(&self) -> u128 {
        (self.max.widen() - self.min.widen() + 1).unsigned_abs()
    }

    /// Return `true` if the segment holds a single value.
    pub fn is_singleton(&self) -> bool {
        self.min == self.max
    }

    /// Return `true` if the segment covers every value of `T`.
    pub fn is_maximal(&self) -> bool {
        self.min == T::MIN_VALUE && self.max == T::MAX_VALUE
    }

    /// Return `true` if `value` lies in `[min, max]`.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Return `true` if every value of `self` lies in `other`.
    pub fn is_subset_of(&self, other: &Segment<T>) -> bool {
        other.min <= self.min && self.max <= other.max
    }

    /// Return `true` if every value of `other` lies in `self`.
    pub fn is_superset_of(&self, other: &Segment<T>) -> bool {
        other.is_subset_of(self)
    }

    // ── Set operations ────────────────────────────────────────────────────────

    /// Smallest segment containing both `self` and `other` (convex hull).
    pub fn span(&self, other: &Segment<T>) -> Segment<T> {
        Segment {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// The largest interval strictly between two disjoint segments.
    ///
    /// Empty when the segments overlap or are adjacent.
    pub fn gap(&self, other: &Segment<T>) -> SegmentSet<T> {
        let (left, right) = if self.max < other.min {
            (self, other)
        } else if other.max < self.min {
            (other, self)
        } else {
            return SegmentSet::EMPTY;
        };
        // left.max < right.min, so both neighbours exist.
        match (left.max.successor(), right.min.predecessor()) {
            (Some(lo), Some(hi)) if lo <= hi => SegmentSet::new_unchecked(lo, hi),
            _ => SegmentSet::EMPTY,
        }
    }

    /// Return `true` if the segments share no value.
    pub fn is_disjoint(&self, other: &Segment<T>) -> bool {
        self.max < other.min || other.max < self.min
    }

    /// Return `true` if the segments are disjoint and nothing lies between
    /// them (`x.max + 1 == y.min` or the reverse).
    pub fn is_adjacent(&self, other: &Segment<T>) -> bool {
        self.max.widen() + 1 == other.min.widen() || other.max.widen() + 1 == self.min.widen()
    }

    /// Return `true` if the union of the segments is a segment, i.e. they
    /// overlap or are adjacent.
    pub fn is_connected(&self, other: &Segment<T>) -> bool {
        !self.is_disjoint(other) || self.is_adjacent(other)
    }

    /// Union of two connected segments; `None` if they are not connected.
    pub fn union(&self, other: &Segment<T>) -> Option<Segment<T>> {
        self.is_connected(other).then(|| self.span(other))
    }
}

impl<T: Discrete> From<T> for Segment<T> {
    fn from(value: T) -> Self {
        Segment::singleton(value)
    }
}

impl<T: Discrete> From<Segment<T>> for std::ops::RangeInclusive<T> {
    fn from(segment: Segment<T>) -> Self {
        segment.min..=segment.max
    }
}

impl<T: Discrete> std::fmt::Display for Segment<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}..{}]", self.min, self.max)
    }
}

impl<T: Discrete> std::fmt::Debug for Segment<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Segment[{:?}..{:?}]", self.min, self.max)
    }
}
