//! DTO modules that bridge domain values with templates.

pub mod results;
