//! Set operations across the interval types.
//!
//! Intersections are total: whenever the result may be empty the output is a
//! [`SegmentSet`]. Union is only provided for rays of the same orientation,
//! where the result is always a ray; the union of two segments is not always
//! an interval (use [`Segment::union`] or [`Segment::span`]).

use crate::discrete::Discrete;
use crate::ray::{LowerRay, UpperRay};
use crate::segment::Segment;
use crate::segment_set::SegmentSet;

/// Set intersection.
pub trait Intersect<Rhs = Self> {
    /// Result type.
    type Output;

    /// Values belonging to both `self` and `other`.
    fn intersect(&self, other: &Rhs) -> Self::Output;
}

/// Set union, for the pairs whose union is always an interval.
pub trait Union<Rhs = Self> {
    /// Result type.
    type Output;

    /// Values belonging to `self` or `other`.
    fn union(&self, other: &Rhs) -> Self::Output;
}

/// `[lo, hi]` when ordered, the empty set otherwise.
fn clamp<T: Discrete>(lo: T, hi: T) -> SegmentSet<T> {
    if lo <= hi {
        SegmentSet::new_unchecked(lo, hi)
    } else {
        SegmentSet::EMPTY
    }
}

impl<T: Discrete> Intersect for Segment<T> {
    type Output = SegmentSet<T>;

    fn intersect(&self, other: &Segment<T>) -> SegmentSet<T> {
        clamp(self.min().max(other.min()), self.max().min(other.max()))
    }
}

impl<T: Discrete> Intersect<LowerRay<T>> for Segment<T> {
    type Output = SegmentSet<T>;

    fn intersect(&self, other: &LowerRay<T>) -> SegmentSet<T> {
        clamp(self.min(), self.max().min(other.max()))
    }
}

impl<T: Discrete> Intersect<UpperRay<T>> for Segment<T> {
    type Output = SegmentSet<T>;

    fn intersect(&self, other: &UpperRay<T>) -> SegmentSet<T> {
        clamp(self.min().max(other.min()), self.max())
    }
}

impl<T: Discrete> Intersect<SegmentSet<T>> for Segment<T> {
    type Output = SegmentSet<T>;

    fn intersect(&self, other: &SegmentSet<T>) -> SegmentSet<T> {
        match other.segment() {
            Some(s) => self.intersect(&s),
            None => SegmentSet::EMPTY,
        }
    }
}

impl<T: Discrete> Intersect for SegmentSet<T> {
    type Output = SegmentSet<T>;

    fn intersect(&self, other: &SegmentSet<T>) -> SegmentSet<T> {
        match self.segment() {
            Some(s) => s.intersect(other),
            None => SegmentSet::EMPTY,
        }
    }
}

impl<T: Discrete> Intersect for LowerRay<T> {
    type Output = LowerRay<T>;

    fn intersect(&self, other: &LowerRay<T>) -> LowerRay<T> {
        LowerRay::ending_at(self.max().min(other.max()))
    }
}

impl<T: Discrete> Intersect for UpperRay<T> {
    type Output = UpperRay<T>;

    fn intersect(&self, other: &UpperRay<T>) -> UpperRay<T> {
        UpperRay::starting_at(self.min().max(other.min()))
    }
}

impl<T: Discrete> Intersect<UpperRay<T>> for LowerRay<T> {
    type Output = SegmentSet<T>;

    fn intersect(&self, other: &UpperRay<T>) -> SegmentSet<T> {
        clamp(other.min(), self.max())
    }
}

// Mirrored pairs.
macro_rules! mirror_intersect {
    ($lhs:ident, $rhs:ident) => {
        impl<T: Discrete> Intersect<$rhs<T>> for $lhs<T> {
            type Output = <$rhs<T> as Intersect<$lhs<T>>>::Output;

            fn intersect(&self, other: &$rhs<T>) -> Self::Output {
                other.intersect(self)
            }
        }
    };
}

mirror_intersect!(LowerRay, Segment);
mirror_intersect!(UpperRay, Segment);
mirror_intersect!(SegmentSet, Segment);
mirror_intersect!(UpperRay, LowerRay);

impl<T: Discrete> Union for LowerRay<T> {
    type Output = LowerRay<T>;

    fn union(&self, other: &LowerRay<T>) -> LowerRay<T> {
        LowerRay::ending_at(self.max().max(other.max()))
    }
}

impl<T: Discrete> Union for UpperRay<T> {
    type Output = UpperRay<T>;

    fn union(&self, other: &UpperRay<T>) -> UpperRay<T> {
        UpperRay::starting_at(self.min().min(other.min()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(min: i32, max: i32) -> Segment<i32> {
        Segment::new(min, max).unwrap()
    }

    #[test]
    fn segment_intersections() {
        assert_eq!(seg(1, 5).intersect(&seg(3, 9)), SegmentSet::new(3, 5).unwrap());
        assert!(seg(1, 2).intersect(&seg(3, 9)).is_empty());
        assert_eq!(seg(1, 3).intersect(&seg(3, 9)), SegmentSet::new(3, 3).unwrap());
    }

    #[test]
    fn ray_intersections() {
        let lo = LowerRay::ending_at(4);
        let hi = UpperRay::starting_at(2);
        assert_eq!(lo.intersect(&hi), SegmentSet::new(2, 4).unwrap());
        assert_eq!(hi.intersect(&lo), SegmentSet::new(2, 4).unwrap());
        assert!(LowerRay::ending_at(1).intersect(&hi).is_empty());
        assert_eq!(seg(0, 10).intersect(&lo), SegmentSet::new(0, 4).unwrap());
        assert_eq!(hi.intersect(&seg(0, 10)), SegmentSet::new(2, 10).unwrap());
        assert_eq!(lo.intersect(&LowerRay::ending_at(9)), lo);
    }

    #[test]
    fn empty_is_absorbing() {
        let e = SegmentSet::<i32>::EMPTY;
        assert!(seg(1, 3).intersect(&e).is_empty());
        assert!(e.intersect(&seg(1, 3)).is_empty());
        assert!(e.intersect(&e).is_empty());
    }

    #[test]
    fn ray_unions() {
        assert_eq!(
            LowerRay::ending_at(1).union(&LowerRay::ending_at(7)),
            LowerRay::ending_at(7)
        );
        assert_eq!(
            UpperRay::starting_at(1).union(&UpperRay::starting_at(7)),
            UpperRay::starting_at(1)
        );
    }
}
