//! Great-circle distance between geographic coordinates.
//!
//! # Algorithm
//!
//! Haversine formula over a sphere of radius 6371 km:
//!
//! ```text
//! a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
//! d = 2R·asin(√a)
//! ```
//!
//! Inputs are decimal degrees; the computation converts to radians. The
//! result is symmetric and zero for identical points.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Returns the great-circle distance in kilometres between two points
/// given as decimal-degree latitude/longitude pairs.
///
/// # Examples
///
/// ```
/// use irp_planner::distance::haversine_km;
///
/// // New York City to Los Angeles, roughly 3936 km.
/// let d = haversine_km(40.7128, -74.0060, 34.0522, -118.2437);
/// assert!((d - 3936.0).abs() < 50.0);
///
/// // Same point.
/// assert_eq!(haversine_km(40.7128, -74.0060, 40.7128, -74.0060), 0.0);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1) = (lat1.to_radians(), lon1.to_radians());
    let (lat2, lon2) = (lat2.to_radians(), lon2.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}
