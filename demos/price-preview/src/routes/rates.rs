use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use jewel_storefront_sdk::models::MetalRates;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/metal-rates
///
/// Live metal rates, proxied from the storefront backend.
pub async fn get_rates(State(state): State<Arc<AppState>>) -> Result<Json<MetalRates>, AppError> {
    Ok(Json(state.sdk.metal_rates().await?))
}
