//! One-sided unbounded intervals.

use crate::discrete::Discrete;

/// The interval `]-∞, max]`: every value up to and including `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LowerRay<T> {
    max: T,
}

/// The interval `[min, +∞[`: every value from `min` onwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UpperRay<T> {
    min: T,
}

impl<T: Discrete> LowerRay<T> {
    /// The ray ending at `max`.
    pub fn ending_at(max: T) -> Self {
        Self { max }
    }

    /// Upper endpoint.
    pub fn max(&self) -> T {
        self.max
    }

    /// Return `true` if `value <= max`.
    pub fn contains(&self, value: T) -> bool {
        value <= self.max
    }

    /// The ray complementing `self`, `None` when `self` covers every value.
    pub fn complement(&self) -> Option<UpperRay<T>> {
        self.max.successor().map(UpperRay::starting_at)
    }
}

impl<T: Discrete> UpperRay<T> {
    /// The ray starting at `min`.
    pub fn starting_at(min: T) -> Self {
        Self { min }
    }

    /// Lower endpoint.
    pub fn min(&self) -> T {
        self.min
    }

    /// Return `true` if `value >= min`.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value
    }

    /// The ray complementing `self`, `None` when `self` covers every value.
    pub fn complement(&self) -> Option<LowerRay<T>> {
        self.min.predecessor().map(LowerRay::ending_at)
    }
}

impl<T: Discrete> std::fmt::Display for LowerRay<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "]-∞..{}]", self.max)
    }
}

impl<T: Discrete> std::fmt::Display for UpperRay<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}..+∞[", self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complement() {
        assert_eq!(
            LowerRay::ending_at(3).complement(),
            Some(UpperRay::starting_at(4))
        );
        assert_eq!(LowerRay::ending_at(i32::MAX).complement(), None);
        assert_eq!(UpperRay::starting_at(i32::MIN).complement(), None);
    }

    #[test]
    fn display() {
        assert_eq!(LowerRay::ending_at(5).to_string(), "]-∞..5]");
        assert_eq!(UpperRay::starting_at(-5).to_string(), "[-5..+∞[");
    }
}
