//! `SegmentSet`: a closed bounded interval that may be empty.

use cal_core::errors::Result;

use crate::discrete::Discrete;
use crate::segment::Segment;

/// Either the empty set or a [`Segment`].
///
/// This is the only interval type able to represent "no interval", and the
/// result type of intersections and gaps.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentSet<T> {
    segment: Option<Segment<T>>,
}

impl<T> SegmentSet<T> {
    /// The empty set.
    pub const EMPTY: Self = Self { segment: None };
}

impl<T: Discrete> SegmentSet<T> {
    /// Create the non-empty set `[min, max]`.
    ///
    /// # Errors
    /// Returns an argument-range error on `max` if `max < min`.
    pub fn new(min: T, max: T) -> Result<Self> {
        Segment::new(min, max).map(Self::from)
    }

    /// Create `[min, max]` without checking the ordering.
    #[inline]
    pub fn new_unchecked(min: T, max: T) -> Self {
        Self::from(Segment::new_unchecked(min, max))
    }

    /// Return `true` for the empty set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segment.is_none()
    }

    /// The underlying segment, `None` for the empty set.
    #[inline]
    pub fn segment(&self) -> Option<Segment<T>> {
        self.segment
    }

    /// Lower endpoint, `None` for the empty set.
    pub fn min(&self) -> Option<T> {
        self.segment.map(|s| s.min())
    }

    /// Upper endpoint, `None` for the empty set.
    pub fn max(&self) -> Option<T> {
        self.segment.map(|s| s.max())
    }

    /// Number of values (0 for the empty set).
    pub fn count(&self) -> u128 {
        self.segment.map_or(0, |s| s.count())
    }

    /// Return `true` if `value` belongs to the set.
    pub fn contains(&self, value: T) -> bool {
        self.segment.is_some_and(|s| s.contains(value))
    }

    /// Convex hull of two sets; the empty set is the identity.
    pub fn span(&self, other: &SegmentSet<T>) -> SegmentSet<T> {
        match (self.segment, other.segment) {
            (Some(x), Some(y)) => SegmentSet::from(x.span(&y)),
            (Some(x), None) | (None, Some(x)) => SegmentSet::from(x),
            (None, None) => SegmentSet::EMPTY,
        }
    }
}

impl<T> Default for SegmentSet<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T: Discrete> From<Segment<T>> for SegmentSet<T> {
    fn from(segment: Segment<T>) -> Self {
        Self {
            segment: Some(segment),
        }
    }
}

impl<T: Discrete> From<SegmentSet<T>> for Option<Segment<T>> {
    fn from(set: SegmentSet<T>) -> Self {
        set.segment
    }
}

impl<T: Discrete> std::fmt::Display for SegmentSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.segment {
            Some(s) => write!(f, "{s}"),
            None => write!(f, "[]"),
        }
    }
}

impl<T: Discrete> std::fmt::Debug for SegmentSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.segment {
            Some(s) => write!(f, "SegmentSet[{:?}..{:?}]", s.min(), s.max()),
            None => write!(f, "SegmentSet(empty)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let e = SegmentSet::<i32>::EMPTY;
        assert!(e.is_empty());
        assert_eq!(e.min(), None);
        assert_eq!(e.count(), 0);
        assert!(!e.contains(0));
        assert_eq!(e.to_string(), "[]");
        assert_eq!(SegmentSet::<i32>::default(), e);
    }

    #[test]
    fn span_with_empty_is_identity() {
        let x = SegmentSet::new(1, 4).unwrap();
        assert_eq!(x.span(&SegmentSet::EMPTY), x);
        assert_eq!(SegmentSet::EMPTY.span(&x), x);
        assert_eq!(x.span(&SegmentSet::new(9, 9).unwrap()), SegmentSet::new(1, 9).unwrap());
    }

    #[test]
    fn new_validates() {
        assert!(SegmentSet::new(2, 1).is_err());
        assert_eq!(SegmentSet::new(1, 2).unwrap().max(), Some(2));
    }
}
