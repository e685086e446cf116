//! Pricing configuration constants
//!
//! Fixed inputs to the sticker pricing formula.

/// Material cost per square centimetre
pub const COST_PER_CM2: f64 = 0.002299857628;

/// Flat cost added to every sticker regardless of size
pub const BASE_COST: f64 = 0.05;

/// Profit margin per square centimetre
pub const PROFIT_MARGIN_PER_CM2: f64 = 0.005;

/// Quantity factor for a single sticker
pub const QUANTITY_FACTOR_BASE: f64 = 0.98;

/// Divisor applied to ln(quantity) when computing the quantity factor
pub const QUANTITY_LOG_DIVISOR: f64 = 100.0;

/// Minimum quantity for the bulk discount
pub const BULK_THRESHOLD: u32 = 500;

/// Share of the total taken off bulk orders
pub const BULK_DISCOUNT_RATE: f64 = 0.05;

pub const BULK_DISCOUNT_EXPLANATION: &str =
    "5% bulk discount applied for ordering 500 or more stickers";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_cm2_rates_are_positive() {
        assert!(COST_PER_CM2 > 0.0);
        assert!(PROFIT_MARGIN_PER_CM2 > 0.0);
        assert!(BASE_COST > 0.0);
    }

    #[test]
    fn quantity_factor_base_below_one() {
        assert!(QUANTITY_FACTOR_BASE < 1.0);
    }

    #[test]
    fn bulk_explanation_matches_threshold_and_rate() {
        assert!(BULK_DISCOUNT_EXPLANATION.contains(&BULK_THRESHOLD.to_string()));
        let percent = format!("{}%", (BULK_DISCOUNT_RATE * 100.0).round());
        assert!(BULK_DISCOUNT_EXPLANATION.starts_with(&percent));
    }
}
