//! Domain types exchanged with the search endpoint.

pub mod funder;
pub mod query;
