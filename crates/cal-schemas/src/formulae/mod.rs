//! Closed-form formulae.
//!
//! [`gregorian`] and [`julian`] work on 64-bit quantities and back the
//! `DayNumber` conversions.  The leap rules below are their 32-bit
//! counterparts shared by the schemas whose years follow the same pattern.

pub mod gregorian;
pub mod julian;

mod rules;

pub(crate) use rules::{GregorianRule, JulianRule};
