//! Error types for calendrical.
//!
//! Two disjoint failure kinds run through the whole workspace:
//!
//! * [`Error::ArgumentOutOfRange`]: a caller-supplied value (a month, a day,
//!   a year outside a calendar's supported span, an interval whose `max` is
//!   below its `min`) is rejected before any arithmetic is attempted.  The
//!   variant names the offending parameter.
//! * [`Error::Overflow`]: a valid start value combined with a valid delta
//!   would leave the representable domain.  There is no single bad argument,
//!   so the variant carries no payload.
//!
//! The `ensure_in_range!`, `ensure_no_overflow!` and `fail_overflow!` macros
//! are the early-return shorthands used throughout the workspace.

use thiserror::Error;

/// The top-level error type used throughout calendrical.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A supplied value lies outside the range accepted for `param`.
    #[error("argument out of range: {param} = {value}")]
    ArgumentOutOfRange {
        /// Name of the offending parameter.
        param: &'static str,
        /// The rejected value, rendered as text.
        value: String,
    },

    /// The result of an arithmetic operation is outside the supported domain.
    #[error("arithmetic overflow: the result is outside the supported range")]
    Overflow,

    /// Malformed textual input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Build an [`Error::ArgumentOutOfRange`] for `param`.
    pub fn out_of_range(param: &'static str, value: impl std::fmt::Display) -> Self {
        Error::ArgumentOutOfRange {
            param,
            value: value.to_string(),
        }
    }

    /// Return `true` for [`Error::Overflow`].
    pub fn is_overflow(&self) -> bool {
        matches!(self, Error::Overflow)
    }

    /// Return the parameter name carried by an argument-range error.
    pub fn param_name(&self) -> Option<&'static str> {
        match self {
            Error::ArgumentOutOfRange { param, .. } => Some(param),
            _ => None,
        }
    }
}

/// Shorthand `Result` type used throughout calendrical.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::ArgumentOutOfRange { .. })` if `$cond` is false.
///
/// # Example
/// ```
/// use cal_core::{ensure_in_range, errors::Result};
/// fn month(m: i32) -> Result<i32> {
///     ensure_in_range!((1..=12).contains(&m), "month", m);
///     Ok(m)
/// }
/// assert!(month(12).is_ok());
/// assert_eq!(month(13).unwrap_err().param_name(), Some("month"));
/// ```
#[macro_export]
macro_rules! ensure_in_range {
    ($cond:expr, $param:expr, $value:expr) => {
        if !$cond {
            return Err($crate::errors::Error::out_of_range($param, $value));
        }
    };
}

/// Return `Err(Error::Overflow)` if `$cond` is false.
///
/// # Example
/// ```
/// use cal_core::{ensure_no_overflow, errors::Result};
/// fn next(x: i32) -> Result<i32> {
///     ensure_no_overflow!(x < i32::MAX);
///     Ok(x + 1)
/// }
/// assert!(next(0).is_ok());
/// assert!(next(i32::MAX).unwrap_err().is_overflow());
/// ```
#[macro_export]
macro_rules! ensure_no_overflow {
    ($cond:expr) => {
        if !$cond {
            return Err($crate::errors::Error::Overflow);
        }
    };
}

/// Return `Err(Error::Overflow)` immediately.
///
/// # Example
/// ```
/// use cal_core::{fail_overflow, errors::Result};
/// fn always_err() -> Result<()> {
///     fail_overflow!();
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail_overflow {
    () => {
        return Err($crate::errors::Error::Overflow)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Error::out_of_range("day", 32).to_string(),
            "argument out of range: day = 32"
        );
        assert!(Error::Overflow.to_string().contains("overflow"));
    }

    #[test]
    fn kinds_are_disjoint() {
        let range = Error::out_of_range("year", -1);
        assert!(!range.is_overflow());
        assert_eq!(range.param_name(), Some("year"));
        assert!(Error::Overflow.is_overflow());
        assert_eq!(Error::Overflow.param_name(), None);
    }
}
