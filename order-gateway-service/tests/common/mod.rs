use order_gateway_service::config::{Config, RazorpayConfig, ServerConfig};
use order_gateway_service::Application;
use secrecy::Secret;

pub const TEST_KEY_ID: &str = "rzp_test_key";

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the application on a random port, with the Razorpay client
    /// pointed at `provider_base_url`.
    pub async fn spawn(provider_base_url: &str) -> Self {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
            },
            razorpay: RazorpayConfig {
                key_id: TEST_KEY_ID.to_string(),
                key_secret: Secret::new("test_key_secret".to_string()),
                api_base_url: provider_base_url.to_string(),
            },
            service_name: "order-gateway-service-test".to_string(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the liveness endpoint
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(&address).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
