//! # calendrical
//!
//! Closed-form calendrical arithmetic.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `cal-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! calendrical = "0.1"
//! ```
//!
//! ```rust
//! use calendrical::prelude::*;
//!
//! // Gregorian 2017-11-19 in the Coptic calendar.
//! let day = DayNumber::from_gregorian_parts(2017, 11, 19).unwrap();
//! let coptic = SchemaId::Coptic12.schema();
//! let parts = coptic.get_date_parts(day.count_days_since(DayZero::COPTIC).unwrap());
//! assert_eq!(parts, DateParts::new(1734, 3, 10));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, floor-division math, addition rules, and settings.
pub use cal_core as core;

/// Segments, rays, and segment sets over discrete values.
pub use cal_intervals as intervals;

/// Calendrical schemas and validators.
pub use cal_schemas as schemas;

/// Day numbers, ordinals, and date arithmetic.
pub use cal_time as time;

/// The most commonly used items.
pub mod prelude {
    pub use cal_core::{AdditionRule, Error, ScopedAdditionRule, Settings};
    pub use cal_intervals::{Intersect, LowerRay, Segment, SegmentSet, Union, UpperRay};
    pub use cal_schemas::{
        CalendricalPreValidator, CalendricalProfile, CalendricalSchema, DateParts, MonthParts,
        OrdinalParts, RangeValidation, SchemaId, YearsValidator,
    };
    pub use cal_time::{DateMath, DayNumber, DayOfWeek, DayZero};
}
