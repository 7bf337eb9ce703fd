//! Order creation handler.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

use crate::{services::razorpay::CURRENCY, AppState};

/// Request to create a new order.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    /// Amount in major currency units (rupees).
    pub amount: Option<f64>,
}

/// Response after creating an order.
#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    /// Razorpay order ID (use this in frontend checkout).
    pub order_id: String,
    /// Amount in major currency units, as echoed back by the provider.
    pub amount: f64,
    /// Currency code.
    pub currency: String,
    /// Razorpay key ID (for frontend initialization).
    pub razorpay_key_id: String,
}

/// Convert a major-unit amount to paise, rounding to the nearest paise.
fn rupees_to_paise(amount: f64) -> u64 {
    (amount * 100.0).round() as u64
}

/// Create a new Razorpay order for the requested amount.
///
/// The amount must be present and strictly positive; anything else is
/// rejected before the provider is contacted.
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<Json<CreateOrderResponse>, AppError> {
    let amount = match payload.amount {
        Some(amount) if amount > 0.0 => amount,
        _ => return Err(AppError::ValidationError("Amount required".to_string())),
    };

    tracing::info!(amount, currency = CURRENCY, "Creating Razorpay order");

    let order = state
        .razorpay
        .create_order(rupees_to_paise(amount), CURRENCY)
        .await?;

    Ok(Json(CreateOrderResponse {
        order_id: order.id,
        amount: order.amount as f64 / 100.0,
        currency: CURRENCY.to_string(),
        razorpay_key_id: state.config.razorpay.key_id.clone(),
    }))
}
