//! Price calculator
//!
//! Turns a validated sticker specification into a price quote.
//!
//! The formula, in order:
//! 1. `unit_price = BASE_COST + area * (COST_PER_CM2 + PROFIT_MARGIN_PER_CM2)`
//! 2. multiply by the material markup (1.1 holographic, 1.0 vinyl)
//! 3. `quantity_factor = 0.98 - ln(quantity) / 100`
//! 4. `discounted_unit_price = unit_price * quantity_factor`
//! 5. `total = discounted_unit_price * quantity`
//! 6. orders of 500 or more lose 5% of the total
//!
//! Intermediate values are never rounded. Rounding to cents happens once,
//! in [`Quote::breakdown`].

use crate::app::pricing_config::{
    BASE_COST, BULK_DISCOUNT_EXPLANATION, BULK_DISCOUNT_RATE, BULK_THRESHOLD, COST_PER_CM2,
    PROFIT_MARGIN_PER_CM2, QUANTITY_FACTOR_BASE, QUANTITY_LOG_DIVISOR,
};
use crate::domain::entities::{Material, PriceBreakdown, Quote, StickerSpec};

/// Stateless sticker pricing service
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceCalculator;

impl PriceCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Price a sticker order and round the result for clients
    pub fn compute(&self, spec: &StickerSpec) -> PriceBreakdown {
        self.quote(spec).breakdown()
    }

    /// Price a sticker order at full precision
    pub fn quote(&self, spec: &StickerSpec) -> Quote {
        let quantity = spec.quantity();
        let unit_price = unit_price(spec.width(), spec.height(), spec.material());
        let quantity_factor = quantity_factor(quantity);

        let discounted_unit_price = unit_price * quantity_factor;
        let subtotal = discounted_unit_price * f64::from(quantity);

        let (bulk_discount, total_price, discount_explanation) = if quantity >= BULK_THRESHOLD {
            let discount = subtotal * BULK_DISCOUNT_RATE;
            (
                discount,
                subtotal - discount,
                Some(BULK_DISCOUNT_EXPLANATION.to_string()),
            )
        } else {
            (0.0, subtotal, None)
        };

        Quote {
            area: spec.area(),
            unit_price,
            quantity_factor,
            discounted_unit_price,
            subtotal,
            bulk_discount,
            total_price,
            discount_explanation,
        }
    }
}

/// Per-sticker price from size and material, before any quantity pricing
pub fn unit_price(width: f64, height: f64, material: Material) -> f64 {
    let area = width * height;
    let size_factor = area * (COST_PER_CM2 + PROFIT_MARGIN_PER_CM2);
    let unit_price = BASE_COST + size_factor;

    unit_price * material.markup()
}

/// Quantity pricing multiplier: 0.98 for one sticker, falling with ln(quantity)
///
/// Callers must pass `quantity >= 1`; [`StickerSpec`] guarantees this.
pub fn quantity_factor(quantity: u32) -> f64 {
    QUANTITY_FACTOR_BASE - f64::from(quantity).ln() / QUANTITY_LOG_DIVISOR
}
