//! Shipped row sources.
//!
//! - [`memory`] - in-memory rows over JSON values, for tests and fixtures
//! - [`csv`] - CSV files or bytes, with encoding and delimiter detection

pub mod csv;
pub mod memory;
