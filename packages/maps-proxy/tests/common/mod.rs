#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use axum_test::TestServer;
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tokio::net::TcpListener;

use maps_proxy::{router, Config, MapboxClient};

pub const TEST_TOKEN: &str = "pk.test-token";

/// A request the fake upstream received
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub path: String,
    pub query: HashMap<String, String>,
}

#[derive(Clone)]
struct Upstream {
    status: StatusCode,
    body: Value,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// In-process stand-in for the Mapbox API
pub struct FakeMapbox {
    pub base_url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl FakeMapbox {
    pub async fn spawn(status: StatusCode, body: Value) -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/directions/v5/mapbox/driving/:coords", get(respond))
            .route("/geocoding/v5/mapbox.places/:query", get(respond))
            .with_state(Upstream {
                status,
                body,
                calls: calls.clone(),
            });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            calls,
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn config(&self, token: Option<&str>) -> Config {
        Config {
            mapbox_access_token: token.map(str::to_string),
            mapbox_api_url: self.base_url.clone(),
            ..Default::default()
        }
    }

    /// Proxy server wired to this fake upstream
    pub fn proxy(&self, token: Option<&str>) -> TestServer {
        let config = self.config(token);
        let mapbox = MapboxClient::from_config(&config).unwrap();
        TestServer::new(router(config, mapbox)).unwrap()
    }
}

async fn respond(
    State(upstream): State<Upstream>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    upstream.calls.lock().unwrap().push(RecordedCall {
        path: uri.path().to_string(),
        query,
    });
    (upstream.status, Json(upstream.body.clone()))
}
