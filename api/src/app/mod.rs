//! Application layer
//!
//! Contains use cases and service orchestration.

pub mod price_calculator;
pub mod pricing_config;

pub use price_calculator::PriceCalculator;
