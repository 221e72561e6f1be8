//! Singleton pattern.
//!
//! Stateless schemas and the validators built over them are shared
//! process-wide.  They are initialised at most once, on first read, through
//! `std::sync::LazyLock`; construction has no observable side effect beyond a
//! `debug` trace event.

/// Re-export `LazyLock` as the canonical singleton container.
pub use std::sync::LazyLock;

/// Define a lazily-initialised singleton instance of type `$ty`.
///
/// Attributes and visibility are forwarded to the `static`.  The initialiser
/// runs on first access and emits a `debug` event naming the singleton.
///
/// # Example
/// ```
/// use cal_core::define_singleton;
///
/// struct Table { data: Vec<u8> }
/// define_singleton!(pub TABLE, Table, Table { data: vec![31, 28, 31] });
///
/// assert_eq!(TABLE.data.len(), 3);
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($(#[$meta:meta])* $vis:vis $name:ident, $ty:ty, $init:expr) => {
        $(#[$meta])*
        $vis static $name: std::sync::LazyLock<$ty> = std::sync::LazyLock::new(|| {
            $crate::__tracing::debug!(singleton = stringify!($name), "initialising singleton");
            $init
        });
    };
}
