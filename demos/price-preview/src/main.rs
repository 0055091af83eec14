mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let sdk = match jewel_storefront_sdk::AsyncStorefrontSdk::builder()
        .from_env()
        .build()
        .await
    {
        Ok(sdk) => sdk,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize storefront SDK");
            return;
        }
    };

    let state = Arc::new(AppState { sdk });

    let app = Router::new()
        .route("/api/metal-rates", get(routes::rates::get_rates))
        .route("/api/price/preview", post(routes::pricing::preview))
        .route("/api/products/{id}/breakdown", get(routes::pricing::breakdown))
        .route("/api/checkout/validate", post(routes::checkout::validate))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::env::var("PREVIEW_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            return;
        }
    };
    tracing::info!("Listening on http://{addr}");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
    }
}
