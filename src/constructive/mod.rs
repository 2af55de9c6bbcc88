//! Constructive tour building.
//!
//! - [`build_route`] — per-vehicle nearest-neighbor insertion with capacity
//!   and range feasibility, sizing each delivery at commitment time

mod nearest_neighbor;

pub use nearest_neighbor::build_route;
