//! # cal-intervals
//!
//! Interval algebra over discrete ordered types.
//!
//! * [`Segment`]: closed, bounded and never empty.
//! * [`LowerRay`] / [`UpperRay`]: unbounded on one side.
//! * [`SegmentSet`]: closed and bounded, possibly empty; the result type of
//!   every operation that may produce "no interval".
//!
//! Edge arithmetic (adjacency, gaps, lengths) is carried out on widened
//! values so that it never wraps at the bounds of the endpoint type.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Discrete endpoint types.
pub mod discrete;

/// Intersection and union across interval types.
pub mod interval;

/// One-sided rays.
pub mod ray;

/// Closed bounded segments.
pub mod segment;

/// Possibly empty segments.
pub mod segment_set;

pub use discrete::Discrete;
pub use interval::{Intersect, Union};
pub use ray::{LowerRay, UpperRay};
pub use segment::Segment;
pub use segment_set::SegmentSet;
