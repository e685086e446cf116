//! Test utilities
//!
//! Fixtures shared by unit and integration tests.

pub mod fixtures;

pub use fixtures::*;
