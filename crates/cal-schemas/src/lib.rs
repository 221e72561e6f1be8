//! # cal-schemas
//!
//! Calendrical schemas and the validation layer in front of them.
//!
//! A [`CalendricalSchema`] is a stateless description of one calendar
//! system.  It converts between `(year, month, day)`, `(year, day_of_year)`
//! and the number of days since its epoch with closed-form integer formulae
//! that are exact for proleptic (zero and negative) years.
//!
//! Schemas trust their inputs.  Values coming from outside are checked first
//! by the [`validation`] layer: a [`YearsValidator`] bounds the year, then a
//! [`CalendricalPreValidator`] checks the month and day, accepting most
//! inputs from the schema's profile alone.
//!
//! ```
//! use cal_schemas::{CalendricalSchema, DateParts, SchemaId};
//!
//! let schema = SchemaId::Gregorian.schema();
//! let days = schema.count_days_since_epoch(2017, 11, 19);
//! assert_eq!(days, 736_651);
//! assert_eq!(schema.get_date_parts(days), DateParts::new(2017, 11, 19));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod constants;
pub mod formulae;
pub mod parts;
pub mod profile;
pub mod schema;
pub mod schema_id;
pub mod schemas;
pub mod validation;

mod month_table;

pub use parts::{DateParts, MonthParts, OrdinalParts};
pub use profile::CalendricalProfile;
pub use schema::CalendricalSchema;
pub use schema_id::SchemaId;
pub use validation::{
    CalendricalPreValidator, DaysValidator, RangeValidation, RangeValidator, YearsValidator,
};
