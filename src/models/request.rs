//! Planning request types.

use serde::{Deserialize, Serialize};

use super::{Customer, Vehicle};

/// The single depot all routes start and end at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    /// External warehouse identifier.
    pub id: i64,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Advisory on-hand stock at the depot; not consulted by the planner.
    pub stock: f64,
}

/// A complete planning request: one depot, the customer set, the fleet,
/// and the horizon to plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    /// The depot.
    pub warehouse: Warehouse,
    /// Customer sites, in input order.
    pub customers: Vec<Customer>,
    /// Fleet, in the order vehicles are offered work each day.
    pub vehicles: Vec<Vehicle>,
    /// Number of consecutive days to plan (>= 0).
    pub planning_horizon: u32,
    /// First day of the horizon, "YYYY-MM-DD".
    pub start_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_round_trip() {
        let json = r#"{
            "warehouse": {"id": 1, "latitude": 40.7128, "longitude": -74.006, "stock": 10000.0},
            "customers": [{
                "id": 1, "latitude": 40.758, "longitude": -73.9855,
                "demand_rate": 50.0, "max_inventory": 1000.0,
                "current_inventory": 200.0, "min_inventory": 100.0, "priority": 2
            }],
            "vehicles": [{
                "id": 1, "capacity": 5000.0, "cost_per_km": 1.0,
                "fixed_cost": 100.0, "max_distance": 0.0
            }],
            "planning_horizon": 7,
            "start_date": "2024-01-01"
        }"#;
        let request: PlanRequest = serde_json::from_str(json).expect("valid request");
        assert_eq!(request.customers.len(), 1);
        assert_eq!(request.vehicles.len(), 1);
        assert_eq!(request.planning_horizon, 7);
        assert_eq!(request.start_date, "2024-01-01");

        let back = serde_json::to_string(&request).expect("serializable");
        let again: PlanRequest = serde_json::from_str(&back).expect("round trip");
        assert_eq!(again.warehouse.id, 1);
        assert_eq!(again.customers[0].priority, 2);
    }
}
