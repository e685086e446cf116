//! Pricing handlers
//!
//! Endpoint for quoting custom sticker orders.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::domain::entities::{Material, PriceBreakdown, StickerSpec};
use crate::error::{AppError, DomainError};
use crate::AppState;

/// Request body for a price quote
#[derive(Debug, Deserialize)]
pub struct PriceRequest {
    /// Sticker width in centimetres
    pub width: f64,
    /// Sticker height in centimetres
    pub height: f64,
    pub quantity: u32,
    pub material: Material,
}

impl TryFrom<PriceRequest> for StickerSpec {
    type Error = DomainError;

    fn try_from(request: PriceRequest) -> Result<Self, Self::Error> {
        StickerSpec::new(
            request.width,
            request.height,
            request.quantity,
            request.material,
        )
    }
}

/// POST /calculate-price
///
/// Quote a sticker order. Returns unit, discounted unit, and total prices
/// rounded to cents, plus any bulk discount.
pub async fn calculate_price(
    State(state): State<AppState>,
    payload: Result<Json<PriceRequest>, JsonRejection>,
) -> Result<Json<PriceBreakdown>, AppError> {
    let Json(request) = payload?;
    let spec = StickerSpec::try_from(request)?;

    let breakdown = state.calculator.compute(&spec);
    tracing::debug!(
        width = spec.width(),
        height = spec.height(),
        quantity = spec.quantity(),
        material = %spec.material(),
        total_price = breakdown.total_price,
        bulk_discount = breakdown.bulk_discount,
        "Computed sticker quote"
    );

    Ok(Json(breakdown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_request_valid() {
        let json = r#"{"width": 10, "height": 7.5, "quantity": 3, "material": "holographic"}"#;
        let request: PriceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.width, 10.0);
        assert_eq!(request.height, 7.5);
        assert_eq!(request.quantity, 3);
        assert_eq!(request.material, Material::Holographic);
    }

    #[test]
    fn parse_price_request_ignores_unknown_fields() {
        let json = r#"{"width": 1, "height": 1, "quantity": 1, "material": "vinyl", "note": "hi"}"#;
        assert!(serde_json::from_str::<PriceRequest>(json).is_ok());
    }

    #[test]
    fn parse_price_request_missing_material() {
        let json = r#"{"width": 10, "height": 10, "quantity": 1}"#;
        let result: Result<PriceRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn parse_price_request_rejects_non_integer_quantity() {
        let fractional = r#"{"width": 10, "height": 10, "quantity": 1.5, "material": "vinyl"}"#;
        assert!(serde_json::from_str::<PriceRequest>(fractional).is_err());

        let negative = r#"{"width": 10, "height": 10, "quantity": -3, "material": "vinyl"}"#;
        assert!(serde_json::from_str::<PriceRequest>(negative).is_err());

        let largest = r#"{"width": 1, "height": 1, "quantity": 4294967295, "material": "vinyl"}"#;
        let request: PriceRequest = serde_json::from_str(largest).unwrap();
        assert_eq!(request.quantity, u32::MAX);

        let too_many = r#"{"width": 1, "height": 1, "quantity": 4294967296, "material": "vinyl"}"#;
        assert!(serde_json::from_str::<PriceRequest>(too_many).is_err());
    }

    #[test]
    fn parse_price_request_rejects_unknown_material() {
        let json = r#"{"width": 10, "height": 10, "quantity": 1, "material": "paper"}"#;
        assert!(serde_json::from_str::<PriceRequest>(json).is_err());
    }

    #[test]
    fn request_converts_to_spec() {
        let request = PriceRequest {
            width: 4.0,
            height: 2.0,
            quantity: 12,
            material: Material::Vinyl,
        };
        let spec = StickerSpec::try_from(request).unwrap();
        assert_eq!(spec.area(), 8.0);
        assert_eq!(spec.quantity(), 12);
    }

    #[test]
    fn request_with_zero_quantity_is_rejected() {
        let request = PriceRequest {
            width: 4.0,
            height: 2.0,
            quantity: 0,
            material: Material::Vinyl,
        };
        assert!(matches!(
            StickerSpec::try_from(request),
            Err(DomainError::Validation(_))
        ));
    }
}
