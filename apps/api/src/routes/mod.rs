pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::review::handlers;
use crate::state::AppState;

/// Action routes accept POST only; other methods get 405 from the router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handlers::handle_analyze))
        .route(
            "/suggest-achievements",
            post(handlers::handle_suggest_achievements),
        )
        .route("/improve", post(handlers::handle_improve))
        .with_state(state)
}

/// Cross-origin access for the single configured origin.
pub fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(&config.cors_origin)
        .with_context(|| format!("CORS_ORIGIN is not a valid origin: '{}'", config.cors_origin))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
