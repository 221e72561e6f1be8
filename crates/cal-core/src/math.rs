//! Floor-division helpers.
//!
//! Calendrical formulas must round toward negative infinity so that proleptic
//! (negative) years and days before an epoch land in the right cycle.  Rust's
//! `/` and `%` truncate toward zero; these helpers do not.
//!
//! All functions require a strictly positive divisor.

use num_traits::{Euclid, PrimInt, Signed};

/// Floor division `⌊m / n⌋` for `n > 0`.
#[inline]
pub fn divide<T>(m: T, n: T) -> T
where
    T: PrimInt + Signed + Euclid,
{
    debug_assert!(n > T::zero());
    m.div_euclid(&n)
}

/// Floor modulo: `m - n·⌊m / n⌋`, always in `[0, n)` for `n > 0`.
#[inline]
pub fn modulo<T>(m: T, n: T) -> T
where
    T: PrimInt + Signed + Euclid,
{
    debug_assert!(n > T::zero());
    m.rem_euclid(&n)
}

/// Floor division together with the matching floor modulo.
#[inline]
pub fn divide_rem<T>(m: T, n: T) -> (T, T)
where
    T: PrimInt + Signed + Euclid,
{
    (divide(m, n), modulo(m, n))
}

/// Adjusted modulo, in `[1, n]` instead of `[0, n)`.
///
/// `adjusted_modulo(n, n) == n` where `modulo(n, n) == 0`.
#[inline]
pub fn adjusted_modulo<T>(m: T, n: T) -> T
where
    T: PrimInt + Signed + Euclid,
{
    let r = modulo(m, n);
    if r.is_zero() {
        n
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn floor_not_truncate() {
        assert_eq!(divide(-1, 4), -1);
        assert_eq!(divide(-4, 4), -1);
        assert_eq!(divide(-5, 4), -2);
        assert_eq!(modulo(-1, 4), 3);
        assert_eq!(modulo(-4_i64, 4), 0);
        assert_eq!(divide_rem(-146_098_i64, 146_097), (-2, 146_096));
    }

    #[test]
    fn adjusted() {
        assert_eq!(adjusted_modulo(7, 7), 7);
        assert_eq!(adjusted_modulo(0, 7), 7);
        assert_eq!(adjusted_modulo(8, 7), 1);
        assert_eq!(adjusted_modulo(-1, 7), 6);
    }

    proptest! {
        #[test]
        fn division_identity(m in any::<i32>(), n in 1..10_000_i32) {
            let (q, r) = divide_rem(m as i64, n as i64);
            prop_assert!(r >= 0 && r < n as i64);
            prop_assert_eq!(q * n as i64 + r, m as i64);
        }
    }
}
