//! Sticker domain entity
//!
//! Describes a custom sticker order line: its size, how many, and what it is printed on.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Markup applied to the unit price of holographic stickers
pub const HOLOGRAPHIC_MARKUP: f64 = 1.1;

/// Sticker material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Vinyl,
    Holographic,
}

impl Material {
    /// Multiplier applied to the unit price for this material
    pub fn markup(self) -> f64 {
        match self {
            Material::Vinyl => 1.0,
            Material::Holographic => HOLOGRAPHIC_MARKUP,
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Material::Vinyl => write!(f, "vinyl"),
            Material::Holographic => write!(f, "holographic"),
        }
    }
}

/// A validated sticker specification
///
/// Width and height are in centimetres. Fields are private so that every
/// value in circulation has passed [`StickerSpec::new`]: both dimensions are
/// finite and positive, quantity is at least 1, and `area * quantity` is
/// finite, which bounds every price derived from the spec.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickerSpec {
    width: f64,
    height: f64,
    quantity: u32,
    material: Material,
}

impl StickerSpec {
    pub fn new(
        width: f64,
        height: f64,
        quantity: u32,
        material: Material,
    ) -> Result<Self, DomainError> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;
        if quantity < 1 {
            return Err(DomainError::Validation(
                "quantity must be a positive integer".to_string(),
            ));
        }

        let area = width * height;
        if !area.is_finite() {
            return Err(DomainError::Validation(format!(
                "area {} x {} is too large to price",
                width, height
            )));
        }
        if !(area * f64::from(quantity)).is_finite() {
            return Err(DomainError::Validation(format!(
                "order of {} stickers at {} square cm is too large to price",
                quantity, area
            )));
        }

        Ok(Self {
            width,
            height,
            quantity,
            material,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn material(&self) -> Material {
        self.material
    }

    /// Printable area in square centimetres
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

fn validate_dimension(name: &str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DomainError::Validation(format!(
            "{} must be a positive number, got {}",
            name, value
        )));
    }
    Ok(())
}
