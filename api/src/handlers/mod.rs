//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod pricing;

pub use pricing::calculate_price;
