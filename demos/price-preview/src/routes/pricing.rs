use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use jewel_storefront_sdk::models::MetalType;
use jewel_storefront_sdk::money::format_inr;
use jewel_storefront_sdk::pricing::{self, PricingInputs};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PreviewRequest {
    pub metal: MetalType,
    pub weight: Option<Decimal>,
    pub making_charge: Option<Decimal>,
    pub gst_val: Option<Decimal>,
    pub other_charges: Option<Decimal>,
}

/// POST /api/price/preview
///
/// Price a piece against the live rates. `final_price` is an empty string
/// when the weight is missing.
pub async fn preview(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PreviewRequest>,
) -> Result<Json<Value>, AppError> {
    let rates = state.sdk.metal_rates().await?;
    let price_per_gram = pricing::price_per_gram_from(Some(req.metal), Some(&rates))
        .ok_or_else(|| AppError::bad_gateway(format!("No rate available for {}", req.metal)))?;

    let inputs = PricingInputs {
        price_per_gram: Some(price_per_gram),
        weight: req.weight,
        making_charge_percent: req.making_charge,
        tax_percent: req.gst_val,
        other_charges: req.other_charges,
    };
    let quote = pricing::quote(&inputs);

    Ok(Json(json!({
        "price_per_gram": price_per_gram,
        "base_amount": quote.map(|q| q.base_amount),
        "making_amount": quote.map(|q| q.making_amount),
        "tax_amount": quote.map(|q| q.tax_amount),
        "final_price": quote.map(|q| q.final_price),
        "display": format_inr(quote.map(|q| q.final_price)),
    })))
}

/// GET /api/products/{id}/breakdown
///
/// Decomposition of a product's stored price, or `null` when the product
/// lacks a rate or weight.
pub async fn breakdown(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let breakdown = state.sdk.run(move |s| s.price_breakdown(&id)).await?;
    let Some(b) = breakdown else {
        return Ok(Json(Value::Null));
    };
    let lines: Vec<Value> = b
        .lines()
        .into_iter()
        .map(|l| json!({ "label": l.label, "value": l.value }))
        .collect();
    Ok(Json(json!({ "lines": lines, "total": b.total })))
}
