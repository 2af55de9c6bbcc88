//! Report types returned to the caller.

use serde::{Deserialize, Serialize};

/// Rounds a report value to two decimals, half away from zero.
///
/// Arithmetic elsewhere runs in full precision; rounding happens only when
/// report fields are populated.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One customer visit within a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// External customer identifier.
    pub customer_id: i64,
    /// 1-based position within the route.
    pub sequence: u32,
    /// Units delivered at this stop; always positive.
    pub quantity: f64,
    /// Wall-clock arrival, "HH:MM".
    pub arrival_time: String,
}

/// One vehicle tour on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// 1-based day within the horizon.
    pub day: u32,
    /// Calendar date, "YYYY-MM-DD".
    pub date: String,
    /// External vehicle identifier.
    pub vehicle_id: i64,
    /// Tour length in km, rounded to 2 decimals.
    pub total_distance: f64,
    /// Fixed cost plus distance cost, rounded to 2 decimals.
    pub total_cost: f64,
    /// Sum of stop quantities, rounded to 2 decimals.
    pub total_load: f64,
    /// Visits in tour order.
    pub stops: Vec<Stop>,
}

/// The full planning report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Whether planning ran; `false` only for rejected requests.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// Aggregate cost over all routes, rounded to 2 decimals.
    pub total_cost: f64,
    /// Aggregate distance over all routes, rounded to 2 decimals.
    pub total_distance: f64,
    /// All routes, ascending by day, vehicle-input order within a day.
    pub routes: Vec<Route>,
}

impl PlanResponse {
    /// A rejection response: no routes, zero aggregates.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            total_cost: 0.0,
            total_distance: 0.0,
            routes: Vec::new(),
        }
    }
}
