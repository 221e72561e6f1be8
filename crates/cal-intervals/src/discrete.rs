//! `Discrete`: ordered types with a successor and a predecessor.

use std::fmt;

/// A totally ordered, bounded, discrete type usable as an interval endpoint.
///
/// Edge arithmetic (adjacency, gaps, lengths) is performed on the widened
/// `i128` image of a value, so that `max + 1` is never computed in the
/// narrow type and cannot wrap around.
pub trait Discrete: Copy + Ord + fmt::Debug + fmt::Display {
    /// Smallest value of the type.
    const MIN_VALUE: Self;
    /// Largest value of the type.
    const MAX_VALUE: Self;

    /// Lossless image of `self` in `i128`.
    fn widen(self) -> i128;

    /// Inverse of [`widen`](Discrete::widen); `None` outside the type's range.
    fn from_widened(value: i128) -> Option<Self>;

    /// The next value, `None` at [`MAX_VALUE`](Discrete::MAX_VALUE).
    fn successor(self) -> Option<Self> {
        Self::from_widened(self.widen() + 1)
    }

    /// The previous value, `None` at [`MIN_VALUE`](Discrete::MIN_VALUE).
    fn predecessor(self) -> Option<Self> {
        Self::from_widened(self.widen() - 1)
    }
}

macro_rules! impl_discrete {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Discrete for $ty {
                const MIN_VALUE: Self = <$ty>::MIN;
                const MAX_VALUE: Self = <$ty>::MAX;

                #[inline]
                fn widen(self) -> i128 {
                    i128::from(self)
                }

                #[inline]
                fn from_widened(value: i128) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }
            }
        )*
    };
}

impl_discrete!(i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        assert_eq!(i32::MAX.successor(), None);
        assert_eq!(i32::MIN.predecessor(), None);
        assert_eq!(41_i32.successor(), Some(42));
        assert_eq!(0_u8.predecessor(), None);
        assert_eq!(i64::MAX.widen() + 1, i128::from(i64::MAX) + 1);
    }
}
