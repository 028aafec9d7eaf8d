//! Runtime models shared across the front end.

pub mod config;
