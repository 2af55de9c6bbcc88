//! Nearest-neighbor tour construction with delivery sizing.
//!
//! # Algorithm
//!
//! Starting from the depot, repeatedly visit the nearest candidate the
//! vehicle can still serve and return home from. The delivery quantity for a
//! visit is fixed at commitment time:
//!
//! ```text
//! q(c) = min(max_inventory[c] - level[c], remaining_capacity)
//! ```
//!
//! and is never recomputed within the tour. Candidates with no storage
//! headroom drop out of the tour permanently; candidates whose visit plus
//! return leg would exceed the vehicle's remaining range are skipped, and the
//! tour ends when none fits.
//!
//! # Complexity
//!
//! O(k²) for k candidate customers.

use crate::distance::DistanceMatrix;
use crate::inventory::InventoryState;
use crate::models::{Customer, Vehicle};

/// Builds one tour for `vehicle` over the candidate customers.
///
/// `candidates` holds dense customer indices into `customers`; the returned
/// visit order uses the same indices, with delivery quantities aligned
/// position for position. Ties on distance break to the lowest external
/// customer id, so construction is deterministic regardless of candidate
/// order.
///
/// Inventory is read only; the horizon driver commits deliveries after the
/// day's routes are final.
pub fn build_route(
    vehicle: &Vehicle,
    candidates: &[usize],
    customers: &[Customer],
    inventory: &InventoryState,
    distances: &DistanceMatrix,
) -> (Vec<usize>, Vec<f64>) {
    let mut available = candidates.to_vec();
    let mut route = Vec::new();
    let mut deliveries = Vec::new();
    let mut remaining_capacity = vehicle.capacity;
    let mut remaining_range = vehicle.range_limit().unwrap_or(f64::INFINITY);
    // None = at the depot.
    let mut current: Option<usize> = None;

    while !available.is_empty() && remaining_capacity > 0.0 {
        // Customers already at their storage ceiling get no stop this tour.
        available.retain(|&ci| customers[ci].headroom(inventory.level(ci)) > 0.0);

        let mut best: Option<(usize, f64)> = None;
        for &ci in &available {
            let leg = match current {
                None => distances.from_depot(ci),
                Some(prev) => distances.between(prev, ci),
            };
            if leg + distances.from_depot(ci) > remaining_range {
                continue;
            }
            best = match best {
                None => Some((ci, leg)),
                Some((best_ci, best_leg)) => {
                    if leg < best_leg
                        || (leg == best_leg && customers[ci].id < customers[best_ci].id)
                    {
                        Some((ci, leg))
                    } else {
                        Some((best_ci, best_leg))
                    }
                }
            };
        }

        let Some((ci, leg)) = best else {
            break;
        };

        let quantity = customers[ci]
            .headroom(inventory.level(ci))
            .min(remaining_capacity);
        route.push(ci);
        deliveries.push(quantity);
        remaining_capacity -= quantity;
        remaining_range -= leg;
        current = Some(ci);
        available.retain(|&x| x != ci);
    }

    (route, deliveries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Warehouse;

    fn customer(id: i64, lat: f64, lon: f64, current: f64, max: f64) -> Customer {
        Customer {
            id,
            latitude: lat,
            longitude: lon,
            demand_rate: 50.0,
            max_inventory: max,
            current_inventory: current,
            min_inventory: 100.0,
            priority: 1,
        }
    }

    fn vehicle(capacity: f64, max_distance: f64) -> Vehicle {
        Vehicle {
            id: 1,
            capacity,
            cost_per_km: 1.0,
            fixed_cost: 100.0,
            max_distance,
        }
    }

    // Depot in lower Manhattan; customers at increasing distance north.
    fn setup() -> (Warehouse, Vec<Customer>) {
        let depot = Warehouse {
            id: 1,
            latitude: 40.7128,
            longitude: -74.0060,
            stock: 10_000.0,
        };
        let customers = vec![
            customer(1, 40.7282, -73.9942, 200.0, 1000.0),
            customer(2, 40.7505, -73.9934, 200.0, 1000.0),
            customer(3, 40.7580, -73.9855, 200.0, 1000.0),
        ];
        (depot, customers)
    }

    #[test]
    fn test_visits_nearest_first() {
        let (depot, customers) = setup();
        let dm = DistanceMatrix::from_instance(&depot, &customers);
        let inv = InventoryState::new(&customers);
        let (route, deliveries) =
            build_route(&vehicle(10_000.0, 0.0), &[0, 1, 2], &customers, &inv, &dm);
        assert_eq!(route, vec![0, 1, 2]);
        assert_eq!(deliveries, vec![800.0, 800.0, 800.0]);
    }

    #[test]
    fn test_capacity_limits_quantities() {
        let (depot, customers) = setup();
        let dm = DistanceMatrix::from_instance(&depot, &customers);
        let inv = InventoryState::new(&customers);
        // Room for one full delivery plus a partial second.
        let (route, deliveries) =
            build_route(&vehicle(1000.0, 0.0), &[0, 1, 2], &customers, &inv, &dm);
        assert_eq!(route, vec![0, 1]);
        assert_eq!(deliveries, vec![800.0, 200.0]);
        let total: f64 = deliveries.iter().sum();
        assert!(total <= 1000.0);
    }

    #[test]
    fn test_full_customer_is_skipped() {
        let (depot, mut customers) = setup();
        customers[0].current_inventory = 1000.0; // already at ceiling
        let dm = DistanceMatrix::from_instance(&depot, &customers);
        let inv = InventoryState::new(&customers);
        let (route, deliveries) =
            build_route(&vehicle(10_000.0, 0.0), &[0, 1, 2], &customers, &inv, &dm);
        assert_eq!(route, vec![1, 2]);
        assert!(deliveries.iter().all(|&q| q > 0.0));
    }

    #[test]
    fn test_range_bound_blocks_unreachable_tour() {
        let (depot, customers) = setup();
        let dm = DistanceMatrix::from_instance(&depot, &customers);
        let inv = InventoryState::new(&customers);
        // Shorter than any depot round trip.
        let (route, deliveries) =
            build_route(&vehicle(10_000.0, 0.5), &[0, 1, 2], &customers, &inv, &dm);
        assert!(route.is_empty());
        assert!(deliveries.is_empty());
    }

    #[test]
    fn test_range_bound_accounts_for_return_leg() {
        let (depot, customers) = setup();
        let dm = DistanceMatrix::from_instance(&depot, &customers);
        let inv = InventoryState::new(&customers);
        // Enough for the nearest round trip only.
        let limit = dm.from_depot(0) * 2.0 + 0.1;
        let (route, _) =
            build_route(&vehicle(10_000.0, limit), &[0, 1, 2], &customers, &inv, &dm);
        assert_eq!(route, vec![0]);
        let tour = dm.from_depot(0) * 2.0;
        assert!(tour <= limit);
    }

    #[test]
    fn test_distance_tie_breaks_to_lowest_id() {
        let depot = Warehouse {
            id: 1,
            latitude: 40.7128,
            longitude: -74.0060,
            stock: 0.0,
        };
        // Co-located customers; the lower id must win regardless of order.
        let customers = vec![
            customer(8, 40.7580, -73.9855, 200.0, 1000.0),
            customer(3, 40.7580, -73.9855, 200.0, 1000.0),
        ];
        let dm = DistanceMatrix::from_instance(&depot, &customers);
        let inv = InventoryState::new(&customers);
        let (route, _) = build_route(&vehicle(800.0, 0.0), &[0, 1], &customers, &inv, &dm);
        assert_eq!(route, vec![1]); // id 3
    }

    #[test]
    fn test_no_candidates() {
        let (depot, customers) = setup();
        let dm = DistanceMatrix::from_instance(&depot, &customers);
        let inv = InventoryState::new(&customers);
        let (route, deliveries) = build_route(&vehicle(1000.0, 0.0), &[], &customers, &inv, &dm);
        assert!(route.is_empty());
        assert!(deliveries.is_empty());
    }
}
