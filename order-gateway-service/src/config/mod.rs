use anyhow::{anyhow, Result};
use dotenvy::dotenv;
use secrecy::Secret;
use serde::Deserialize;
use std::env;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub razorpay: RazorpayConfig,
    pub service_name: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct RazorpayConfig {
    /// Public key identifier, safe to hand to clients for checkout.
    pub key_id: String,
    pub key_secret: Secret<String>,
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let host = env::var("ORDER_GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("ORDER_GATEWAY_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()?;

        let key_id =
            env::var("RAZORPAY_KEY_ID").map_err(|_| anyhow!("RAZORPAY_KEY_ID must be set"))?;
        let key_secret = env::var("RAZORPAY_KEY_SECRET")
            .map_err(|_| anyhow!("RAZORPAY_KEY_SECRET must be set"))?;
        let api_base_url = env::var("RAZORPAY_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.razorpay.com/v1".to_string());

        Ok(Self {
            server: ServerConfig { host, port },
            razorpay: RazorpayConfig {
                key_id,
                key_secret: Secret::new(key_secret),
                api_base_url,
            },
            service_name: "order-gateway-service".to_string(),
        })
    }
}
