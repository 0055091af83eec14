use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use jewel_storefront_sdk::checkout::{self, GateState};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// POST /api/checkout/validate
///
/// Run the checkout gate against the signed-in user's cart.
pub async fn validate(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let cart = state.sdk.cart().await?;
    let body = match checkout::evaluate(&cart) {
        GateState::Blocked(block) => json!({
            "allowed": false,
            "total_quantity": block.total_quantity,
            "min_required": block.min_required,
            "message": block.message,
        }),
        _ => json!({
            "allowed": true,
            "total_quantity": cart.total_quantity(),
            "min_required": checkout::min_required(&cart),
        }),
    };
    Ok(Json(body))
}
