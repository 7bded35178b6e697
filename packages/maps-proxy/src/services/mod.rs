pub mod geolocation;
pub mod location;
pub mod mapbox;
