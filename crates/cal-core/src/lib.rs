//! # cal-core
//!
//! Core types, error definitions, and settings for calendrical.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – the error type and its early-return
//! macros, floor-division math, the [`AdditionRule`] policy, the global
//! [`Settings`], and the singleton macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Ambiguity-resolution policy for year/month additions.
pub mod addition_rule;

/// Error types and the `ensure_in_range!` / `ensure_no_overflow!` /
/// `fail_overflow!` macros.
pub mod errors;

/// Floor division and modulo.
pub mod math;

/// Design patterns: singleton.
pub mod patterns;

/// Global library settings (default addition rule).
pub mod settings;

/// Miscellaneous utilities.
pub mod utilities;

#[doc(hidden)]
pub use tracing as __tracing;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use addition_rule::AdditionRule;
pub use errors::{Error, Result};
pub use settings::{ScopedAdditionRule, Settings};
