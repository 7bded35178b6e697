use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::warn;

use crate::{
    config::Config, error::ProxyError, models::GeocodeRequest, services::mapbox::MapboxClient,
};

/// Place search scoped to a country; the upstream payload is returned as-is
pub async fn geocode(
    State((config, mapbox)): State<(Config, MapboxClient)>,
    payload: Result<Json<GeocodeRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ProxyError> {
    let Json(request) = payload.map_err(|e| ProxyError::Validation(e.body_text()))?;
    let query = request.validate()?;
    let access_token = config.access_token().ok_or_else(|| {
        warn!("Geocoding requested without a configured access token");
        ProxyError::MissingToken
    })?;

    let payload = mapbox.geocode(&request, query, access_token).await?;
    Ok(Json(payload))
}
