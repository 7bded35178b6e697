pub mod directions;
pub mod geocode;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::{config::Config, services::mapbox::MapboxClient};

pub use directions::directions;
pub use geocode::geocode;

pub const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
pub const CORS_ALLOW_METHODS: &str = "POST, OPTIONS";

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "maps-proxy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// CORS preflight; the headers come from the router's layers
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Build the HTTP router with permissive CORS headers on every response
pub fn router(config: Config, mapbox: MapboxClient) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/health", get(health))
        .route("/api/directions", post(directions).options(preflight))
        .route("/api/geocode", post(geocode).options(preflight))
        .with_state((config, mapbox))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        ))
        .layer(TraceLayer::new_for_http())
}
