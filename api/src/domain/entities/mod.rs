//! Domain entities
//!
//! Pure domain models for sticker pricing.

pub mod quote;
pub mod sticker;

pub use quote::{PriceBreakdown, Quote};
pub use sticker::{Material, StickerSpec};
