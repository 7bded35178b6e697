pub mod location;
pub mod requests;

// Re-export commonly used types
pub use location::{Position, PositionError, PositionOptions};
pub use requests::{
    Coordinates, DirectionsRequest, DirectionsResult, GeocodeRequest, RouteEndpoints,
};
