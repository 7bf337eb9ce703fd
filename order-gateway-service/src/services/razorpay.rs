//! Razorpay payment provider client.
//!
//! Implements the slice of Razorpay's Orders API used for payment
//! initiation: order creation with automatic capture.

use crate::config::RazorpayConfig;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use thiserror::Error;

/// Currency code sent with every order; the gateway only deals in INR.
pub const CURRENCY: &str = "INR";

/// Failure at the provider boundary.
///
/// Every underlying failure of the Razorpay call is translated into one of
/// these variants, so callers reason about a single error type rather than
/// whatever reqwest or serde happened to raise.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to payment provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Razorpay error: {code} - {description}")]
    Api { code: String, description: String },

    #[error("unexpected provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::ProviderError(err.into())
    }
}

/// Razorpay client for interacting with the Razorpay API.
#[derive(Clone)]
pub struct RazorpayClient {
    client: Client,
    config: RazorpayConfig,
}

/// Request to create a Razorpay order.
#[derive(Debug, Serialize)]
pub struct CreateOrderRequest {
    /// Amount in smallest currency unit (paise for INR).
    pub amount: u64,
    /// Currency code (e.g., "INR").
    pub currency: String,
    /// 1 instructs Razorpay to capture the payment on authorization.
    pub payment_capture: u8,
}

/// Response from Razorpay order creation.
///
/// Only `id` and `amount` are required; the rest of the order entity is
/// optional so a minimal provider response still parses.
#[derive(Debug, Deserialize)]
pub struct RazorpayOrder {
    /// Razorpay order ID.
    pub id: String,
    /// Amount in smallest currency unit.
    pub amount: u64,
    /// Currency code.
    pub currency: Option<String>,
    /// Receipt ID.
    pub receipt: Option<String>,
    /// Order status.
    pub status: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<u64>,
}

/// Razorpay API error response.
#[derive(Debug, Deserialize)]
pub struct RazorpayError {
    pub error: RazorpayErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct RazorpayErrorDetail {
    pub code: String,
    pub description: String,
    pub source: Option<String>,
    pub step: Option<String>,
    pub reason: Option<String>,
}

impl RazorpayClient {
    /// Create a new Razorpay client.
    pub fn new(config: RazorpayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Create a new order in Razorpay with automatic capture.
    ///
    /// # Arguments
    /// * `amount` - Amount in smallest currency unit (paise for INR)
    /// * `currency` - Currency code (e.g., "INR")
    pub async fn create_order(
        &self,
        amount: u64,
        currency: &str,
    ) -> Result<RazorpayOrder, ProviderError> {
        let request = CreateOrderRequest {
            amount,
            currency: currency.to_string(),
            payment_capture: 1,
        };

        let url = format!("{}/orders", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .basic_auth(
                &self.config.key_id,
                Some(self.config.key_secret.expose_secret()),
            )
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, body = %body, "Razorpay create_order response");

        if status.is_success() {
            let order: RazorpayOrder = serde_json::from_str(&body)?;
            tracing::info!(
                order_id = %order.id,
                amount = order.amount,
                "Razorpay order created"
            );
            Ok(order)
        } else {
            let error: RazorpayError =
                serde_json::from_str(&body).unwrap_or_else(|_| RazorpayError {
                    error: RazorpayErrorDetail {
                        code: "UNKNOWN".to_string(),
                        description: body.clone(),
                        source: None,
                        step: None,
                        reason: None,
                    },
                });
            tracing::error!(
                code = %error.error.code,
                description = %error.error.description,
                "Razorpay order creation failed"
            );
            Err(ProviderError::Api {
                code: error.error.code,
                description: error.error.description,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_order_body_parses() {
        let order: RazorpayOrder =
            serde_json::from_str(r#"{"id":"order_ABC123","amount":50000}"#).unwrap();
        assert_eq!(order.id, "order_ABC123");
        assert_eq!(order.amount, 50000);
        assert!(order.currency.is_none());
        assert!(order.status.is_none());
    }

    #[test]
    fn order_request_serializes_capture_flag() {
        let request = CreateOrderRequest {
            amount: 50000,
            currency: CURRENCY.to_string(),
            payment_capture: 1,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "amount": 50000, "currency": "INR", "payment_capture": 1 })
        );
    }

    #[test]
    fn api_error_display_carries_provider_description() {
        let err = ProviderError::Api {
            code: "BAD_REQUEST_ERROR".to_string(),
            description: "Authentication failed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Razorpay error: BAD_REQUEST_ERROR - Authentication failed"
        );
    }
}
