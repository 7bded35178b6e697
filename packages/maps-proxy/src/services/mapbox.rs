use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use std::time::Duration;

use crate::{
    config::Config,
    error::ProxyError,
    models::{GeocodeRequest, RouteEndpoints},
};

/// Feature types a place search is limited to
pub const GEOCODE_TYPES: &str = "place,locality,neighborhood,address,poi";

pub const GEOCODE_LANGUAGE: &str = "ar";

/// Proximity bias for place search ranking (central Saudi Arabia, lng/lat)
pub const REFERENCE_POINT: (f64, f64) = (45.0792, 23.8859);

// Everything except A-Z a-z 0-9 - _ . ! ~ * ' ( ), matching encodeURIComponent
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
pub struct Route {
    pub distance: f64, // meters
    pub duration: f64, // seconds
    #[serde(default)]
    pub geometry: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct MapboxErrorPayload {
    message: String,
}

/// Thin client for the Mapbox geocoding and directions APIs
#[derive(Debug, Clone)]
pub struct MapboxClient {
    client: Client,
    base_url: Url,
}

impl MapboxClient {
    /// Fails with a configuration error when `base_url` is not an absolute URL
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ProxyError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ProxyError::Configuration(format!("Invalid Mapbox API URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ProxyError::Configuration(format!(
                "Invalid Mapbox API URL: {}",
                base_url
            )));
        }

        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ProxyError> {
        Self::new(
            &config.mapbox_api_url,
            config.upstream_timeout_secs.map(Duration::from_secs),
        )
    }

    /// Request a driving route with full GeoJSON geometry
    pub async fn directions(
        &self,
        endpoints: &RouteEndpoints,
        access_token: &str,
    ) -> Result<DirectionsResponse, ProxyError> {
        let RouteEndpoints {
            origin,
            destination,
        } = endpoints;
        let url = self.url(&[
            "directions",
            "v5",
            "mapbox",
            "driving",
            &format!(
                "{},{};{},{}",
                origin.lng, origin.lat, destination.lng, destination.lat
            ),
        ]);

        tracing::info!(
            "🚗 Requesting directions ({}, {}) -> ({}, {})",
            origin.lat,
            origin.lng,
            destination.lat,
            destination.lng
        );

        let response = self
            .client
            .get(url)
            .query(&[
                ("geometries", "geojson"),
                ("overview", "full"),
                ("access_token", access_token),
            ])
            .send()
            .await?;

        let response = check_status(response).await?;
        let data: DirectionsResponse = response.json().await?;

        tracing::debug!("✅ Mapbox returned {} route(s)", data.routes.len());
        Ok(data)
    }

    /// Forward a place search and return the payload untouched
    pub async fn geocode(
        &self,
        request: &GeocodeRequest,
        query: &str,
        access_token: &str,
    ) -> Result<serde_json::Value, ProxyError> {
        let url = self.search_url(query);
        let proximity = format!("{},{}", REFERENCE_POINT.0, REFERENCE_POINT.1);
        let limit = request.limit.to_string();
        let country = request.country_code.to_lowercase();

        tracing::info!("🔎 Geocoding \"{}\" in {}", query, request.country_code);

        let response = self
            .client
            .get(url)
            .query(&[
                ("access_token", access_token),
                ("country", country.as_str()),
                ("language", GEOCODE_LANGUAGE),
                ("limit", limit.as_str()),
                ("types", GEOCODE_TYPES),
                ("proximity", proximity.as_str()),
            ])
            .send()
            .await?;

        let response = check_status(response).await?;
        let payload = response.json().await?;

        tracing::debug!("✅ Mapbox geocoding responded successfully");
        Ok(payload)
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Place search URL; the query is encoded as one path component so `;`
    /// can't turn it into a batch request
    fn search_url(&self, query: &str) -> Url {
        let mut url = self.url(&["geocoding", "v5", "mapbox.places"]);
        let path = format!(
            "{}/{}.json",
            url.path(),
            utf8_percent_encode(query, QUERY_COMPONENT)
        );
        url.set_path(&path);
        url
    }
}

async fn check_status(response: Response) -> Result<Response, ProxyError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<MapboxErrorPayload>(&body)
        .map(|payload| payload.message)
        .unwrap_or(body);

    tracing::warn!("Mapbox API returned HTTP {}: {}", status, message);
    Err(ProxyError::Upstream {
        status,
        message,
    })
}
