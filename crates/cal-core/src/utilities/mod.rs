//! Formatting and parsing helpers.

pub mod data_formatters;
pub mod data_parsers;
