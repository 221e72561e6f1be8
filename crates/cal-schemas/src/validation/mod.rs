//! Validation of caller-supplied values before they reach a schema.
//!
//! Schemas never check their inputs.  Range validators bound years and day
//! counts; pre-validators check months and days against the schema.

pub mod pre_validators;
pub mod range_validators;

pub use pre_validators::{
    pre_validator_for, CalendricalPreValidator, GregorianPreValidator, JulianPreValidator,
    LunarPreValidator, LunisolarPreValidator, PlainPreValidator, Solar12PreValidator,
    Solar13PreValidator,
};
pub use range_validators::{DaysValidator, RangeValidation, RangeValidator, YearsValidator};
