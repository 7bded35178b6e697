use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// JSON body returned for every failed proxy request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("{0}")]
    Validation(String),

    #[error("Mapbox access token is not configured")]
    MissingToken,

    #[error("{0}")]
    Configuration(String),

    #[error("Mapbox API returned error: {status} {message}")]
    Upstream { status: StatusCode, message: String },

    #[error("No route found")]
    NoRoute,

    #[error("Mapbox request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl ProxyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Validation(_) | ProxyError::NoRoute => StatusCode::BAD_REQUEST,
            ProxyError::MissingToken
            | ProxyError::Configuration(_)
            | ProxyError::Upstream { .. }
            | ProxyError::Request(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render with a fixed status instead of the per-variant one
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        self.with_status(status)
    }
}
