//! Intra-tour 2-opt improvement.
//!
//! # Algorithm
//!
//! For each index pair (i, j) with i < j, reverse the segment `[i..=j]` of
//! the tour (implicitly bracketed by the depot) and keep the reversal when it
//! strictly shortens the tour:
//!
//! ```text
//! delta = d(prev_i, t[j]) + d(t[i], next_j) - d(prev_i, t[i]) - d(t[j], next_j)
//! ```
//!
//! First-improvement: every accepted reversal restarts the scan from the
//! beginning. The search terminates when a full scan finds no improving pair,
//! so the result is never longer than the input. The visit set and delivery
//! quantities are untouched.
//!
//! # Complexity
//!
//! O(k²) per scan, with one scan per accepted improvement.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;

/// Total length of the tour depot → `route[0]` → … → `route[k-1]` → depot.
///
/// `route` holds dense customer indices.
pub fn route_distance(route: &[usize], distances: &DistanceMatrix) -> f64 {
    let Some((&first, rest)) = route.split_first() else {
        return 0.0;
    };
    let mut total = distances.from_depot(first);
    let mut prev = first;
    for &ci in rest {
        total += distances.between(prev, ci);
        prev = ci;
    }
    total + distances.from_depot(prev)
}

/// Applies 2-opt to one tour, returning the improved visit order and its
/// total distance.
///
/// # Examples
///
/// ```
/// use irp_planner::distance::DistanceMatrix;
/// use irp_planner::local_search::{route_distance, two_opt_improve};
/// use irp_planner::models::{Customer, Warehouse};
///
/// let depot = Warehouse { id: 1, latitude: 40.7128, longitude: -74.0060, stock: 0.0 };
/// let site = |id, lat, lon| Customer {
///     id, latitude: lat, longitude: lon,
///     demand_rate: 0.0, max_inventory: 100.0,
///     current_inventory: 0.0, min_inventory: 0.0, priority: 1,
/// };
/// // Three sites north of the depot, visited in a zig-zag order.
/// let customers = vec![
///     site(1, 40.7282, -73.9942),
///     site(2, 40.7505, -73.9934),
///     site(3, 40.7580, -73.9855),
/// ];
/// let dm = DistanceMatrix::from_instance(&depot, &customers);
///
/// let crossed = vec![0, 2, 1];
/// let (improved, dist) = two_opt_improve(&crossed, &dm);
/// assert!(dist <= route_distance(&crossed, &dm) + 1e-10);
/// let mut sorted = improved.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![0, 1, 2]); // same visit set
/// ```
pub fn two_opt_improve(route: &[usize], distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    let mut current = route.to_vec();
    if current.len() < 2 {
        let dist = route_distance(&current, distances);
        return (current, dist);
    }

    let n = current.len();
    'restart: loop {
        for i in 0..n - 1 {
            for j in i + 1..n {
                if improvement_delta(&current, distances, i, j) < -1e-10 {
                    current[i..=j].reverse();
                    continue 'restart;
                }
            }
        }
        break;
    }

    let dist = route_distance(&current, distances);
    (current, dist)
}

/// Distance change from reversing `route[i..=j]`.
///
/// Only the two boundary edges change; interior edges are traversed in the
/// opposite direction at identical cost (the matrix is symmetric).
fn improvement_delta(route: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let n = route.len();
    let edge_in = |ci: usize| distances.from_depot(ci);

    let old_head = if i == 0 {
        edge_in(route[i])
    } else {
        distances.between(route[i - 1], route[i])
    };
    let old_tail = if j == n - 1 {
        edge_in(route[j])
    } else {
        distances.between(route[j], route[j + 1])
    };
    let new_head = if i == 0 {
        edge_in(route[j])
    } else {
        distances.between(route[i - 1], route[j])
    };
    let new_tail = if j == n - 1 {
        edge_in(route[i])
    } else {
        distances.between(route[i], route[j + 1])
    };

    new_head + new_tail - old_head - old_tail
}
