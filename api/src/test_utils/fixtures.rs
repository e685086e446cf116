//! Test fixtures
//!
//! Factory functions for creating valid sticker specifications and request bodies.

use serde_json::{json, Value};

use crate::domain::entities::{Material, StickerSpec};

/// Create a valid vinyl sticker spec
pub fn vinyl_spec(width: f64, height: f64, quantity: u32) -> StickerSpec {
    StickerSpec::new(width, height, quantity, Material::Vinyl).expect("valid vinyl spec")
}

/// Create a valid holographic sticker spec
pub fn holographic_spec(width: f64, height: f64, quantity: u32) -> StickerSpec {
    StickerSpec::new(width, height, quantity, Material::Holographic)
        .expect("valid holographic spec")
}

/// JSON body for `POST /calculate-price`
pub fn price_request_body(width: f64, height: f64, quantity: u32, material: &str) -> Value {
    json!({
        "width": width,
        "height": height,
        "quantity": quantity,
        "material": material,
    })
}
