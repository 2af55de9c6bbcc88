//! Vehicle type with capacity and cost parameters.

use serde::{Deserialize, Serialize};

/// A delivery vehicle stationed at the depot.
///
/// # Examples
///
/// ```
/// use irp_planner::models::Vehicle;
///
/// let v = Vehicle {
///     id: 1,
///     capacity: 5000.0,
///     cost_per_km: 1.0,
///     fixed_cost: 100.0,
///     max_distance: 0.0,
/// };
/// assert_eq!(v.range_limit(), None); // 0 means unbounded
/// assert_eq!(v.route_cost(40.0), 140.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// External vehicle identifier.
    pub id: i64,
    /// Maximum load per tour (> 0).
    pub capacity: f64,
    /// Variable cost per kilometre travelled.
    pub cost_per_km: f64,
    /// Fixed cost charged once per tour the vehicle runs.
    pub fixed_cost: f64,
    /// Maximum tour length in kilometres; zero or negative means unbounded.
    pub max_distance: f64,
}

impl Vehicle {
    /// The tour length bound, or `None` when the vehicle is unbounded.
    pub fn range_limit(&self) -> Option<f64> {
        (self.max_distance > 0.0).then_some(self.max_distance)
    }

    /// Total cost of a tour of the given length.
    pub fn route_cost(&self, distance_km: f64) -> f64 {
        self.fixed_cost + distance_km * self.cost_per_km
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(max_distance: f64) -> Vehicle {
        Vehicle {
            id: 1,
            capacity: 5000.0,
            cost_per_km: 1.5,
            fixed_cost: 80.0,
            max_distance,
        }
    }

    #[test]
    fn test_range_limit_bounded() {
        assert_eq!(vehicle(200.0).range_limit(), Some(200.0));
    }

    #[test]
    fn test_range_limit_unbounded() {
        assert_eq!(vehicle(0.0).range_limit(), None);
        assert_eq!(vehicle(-1.0).range_limit(), None);
    }

    #[test]
    fn test_route_cost() {
        let v = vehicle(0.0);
        assert!((v.route_cost(100.0) - 230.0).abs() < 1e-10);
        assert!((v.route_cost(0.0) - 80.0).abs() < 1e-10);
    }
}
