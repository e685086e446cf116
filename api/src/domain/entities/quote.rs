//! Quote domain entity
//!
//! The result of pricing a sticker order, before and after rounding.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Unrounded result of a pricing calculation
///
/// Every field carries full `f64` precision. Use [`Quote::breakdown`] to get
/// the client-facing figures.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Printable area in square centimetres
    pub area: f64,
    /// Per-sticker price after the material markup, before quantity pricing
    pub unit_price: f64,
    /// Multiplier derived from the order quantity
    pub quantity_factor: f64,
    pub discounted_unit_price: f64,
    /// Total before the bulk discount
    pub subtotal: f64,
    pub bulk_discount: f64,
    /// Total after the bulk discount
    pub total_price: f64,
    pub discount_explanation: Option<String>,
}

impl Quote {
    /// Round the monetary fields to cents
    pub fn breakdown(&self) -> PriceBreakdown {
        PriceBreakdown {
            base_unit_price: round_to_cents(self.unit_price),
            discounted_unit_price: round_to_cents(self.discounted_unit_price),
            total_price: round_to_cents(self.total_price),
            bulk_discount: round_to_cents(self.bulk_discount),
            discount_explanation: self.discount_explanation.clone(),
        }
    }
}

/// Client-facing price breakdown, rounded to 2 decimal places
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_unit_price: f64,
    pub discounted_unit_price: f64,
    pub total_price: f64,
    pub bulk_discount: f64,
    /// Always serialized; `null` when no bulk discount applies
    pub discount_explanation: Option<String>,
}

/// Round to 2 decimal places, halves away from zero
///
/// Rounds the exact binary value of `value`, so `0.015` (stored as
/// 0.01499999...) rounds down. Values beyond `Decimal`'s range have no
/// fractional digits in `f64` and come back unchanged.
pub fn round_to_cents(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}
