use serde::{Deserialize, Serialize};

use crate::error::ProxyError;

pub const DEFAULT_COUNTRY: &str = "SA";
pub const DEFAULT_LIMIT: u32 = 10;

/// A longitude/latitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lng: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsRequest {
    #[serde(default)]
    pub origin_lng: Option<f64>,
    #[serde(default)]
    pub origin_lat: Option<f64>,
    #[serde(default)]
    pub dest_lng: Option<f64>,
    #[serde(default)]
    pub dest_lat: Option<f64>,
}

/// Validated start and end of a route
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteEndpoints {
    pub origin: Coordinates,
    pub destination: Coordinates,
}

impl DirectionsRequest {
    /// All four coordinates are required and non-null
    pub fn validate(&self) -> Result<RouteEndpoints, ProxyError> {
        match (self.origin_lng, self.origin_lat, self.dest_lng, self.dest_lat) {
            (Some(origin_lng), Some(origin_lat), Some(dest_lng), Some(dest_lat)) => {
                Ok(RouteEndpoints {
                    origin: Coordinates {
                        lng: origin_lng,
                        lat: origin_lat,
                    },
                    destination: Coordinates {
                        lng: dest_lng,
                        lat: dest_lat,
                    },
                })
            }
            _ => Err(ProxyError::Validation("Missing coordinates".to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsResult {
    pub distance_km: f64,
    pub distance_label: String,
    pub duration_minutes: i64,
    pub duration_label: String,
    // GeoJSON LineString as returned upstream
    pub route_geometry: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeRequest {
    #[serde(default)]
    pub query: String,
    #[serde(rename = "country", default = "default_country")]
    pub country_code: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl GeocodeRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            country_code: default_country(),
            limit: default_limit(),
        }
    }

    /// Returns the trimmed query, rejecting blank input
    pub fn validate(&self) -> Result<&str, ProxyError> {
        let query = self.query.trim();
        if query.is_empty() {
            return Err(ProxyError::Validation("Query is required".to_string()));
        }
        Ok(query)
    }
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}
