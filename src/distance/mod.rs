//! Geodesic distances between the depot and customer locations.
//!
//! Provides the haversine great-circle formula and a dense distance matrix
//! built once per planning request.

mod haversine;
mod matrix;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
