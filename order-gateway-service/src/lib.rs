pub mod config;
pub mod handlers;
pub mod services;

use axum::middleware::from_fn;
use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::tracing::{request_id_middleware, REQUEST_ID_HEADER};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use services::RazorpayClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub razorpay: RazorpayClient,
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(config: Config) -> Result<Self, AppError> {
        // Initialize Razorpay client (one instance for the process lifetime)
        let razorpay = RazorpayClient::new(config.razorpay.clone());
        tracing::info!("Razorpay client initialized");

        let state = AppState {
            config: config.clone(),
            razorpay,
        };

        // Any origin, with credentials. A wildcard origin cannot be combined
        // with credentials, so the request origin is mirrored instead.
        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true);

        let router = Router::new()
            .route("/", get(handlers::health_check))
            .route(
                "/create-order",
                post(handlers::orders::create_order).options(handlers::preflight),
            )
            .layer(cors)
            .layer(from_fn(request_id_middleware))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");

                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                }),
            )
            .with_state(state);

        // Bind the listener here (port 0 = random port for testing)
        let listener = TcpListener::bind(format!(
            "{}:{}",
            config.server.host, config.server.port
        ))
        .await?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub async fn run_until_stopped(self) -> Result<(), AppError> {
        tracing::info!("Listening on port {}", self.port);
        axum::serve(self.listener, self.router).await?;

        Ok(())
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}
