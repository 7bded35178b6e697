use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, warn};

use crate::{
    config::Config,
    error::ProxyError,
    libraries::route_format::{distance_km, duration_minutes, format_distance, format_duration},
    models::{DirectionsRequest, DirectionsResult},
    services::mapbox::MapboxClient,
};

/// Driving directions between two points.
///
/// Every failure, including a missing credential, is answered with 400.
pub async fn directions(
    State((config, mapbox)): State<(Config, MapboxClient)>,
    payload: Result<Json<DirectionsRequest>, JsonRejection>,
) -> Response {
    match plan_route(&config, &mapbox, payload).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            warn!("Directions request failed: {}", e);
            e.with_status(StatusCode::BAD_REQUEST)
        }
    }
}

async fn plan_route(
    config: &Config,
    mapbox: &MapboxClient,
    payload: Result<Json<DirectionsRequest>, JsonRejection>,
) -> Result<DirectionsResult, ProxyError> {
    let Json(request) = payload.map_err(|e| ProxyError::Validation(e.body_text()))?;
    let endpoints = request.validate()?;
    let access_token = config.access_token().ok_or(ProxyError::MissingToken)?;

    let response = mapbox.directions(&endpoints, access_token).await?;
    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(ProxyError::NoRoute)?;

    let km = distance_km(route.distance);
    let minutes = duration_minutes(route.duration);
    debug!("Route found: {:.1} km, {} min", km, minutes);

    Ok(DirectionsResult {
        distance_km: km,
        distance_label: format_distance(km),
        duration_minutes: minutes,
        duration_label: format_duration(minutes),
        route_geometry: route.geometry,
    })
}
