pub mod config;
pub mod error;
pub mod handlers;
pub mod libraries;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{ErrorBody, ProxyError};
pub use handlers::router;
pub use services::{
    geolocation::{GeolocationPlatform, Notifier, TracingNotifier, UnsupportedPlatform},
    location::{LocationProvider, LocationState, WatchHandle},
    mapbox::MapboxClient,
};
