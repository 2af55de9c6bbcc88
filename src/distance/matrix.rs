//! Dense geographic distance matrix.

use crate::models::{Customer, Warehouse};

use super::haversine_km;

/// A dense (n+1)×(n+1) distance matrix over the depot and customer set,
/// stored in row-major order.
///
/// Node 0 is the depot; the customer at dense index `ci` in the request's
/// customer list is node `ci + 1`. All pairwise great-circle distances are
/// computed once at construction; lookup is O(1). The matrix is symmetric
/// with a zero diagonal.
///
/// # Examples
///
/// ```
/// use irp_planner::distance::DistanceMatrix;
/// use irp_planner::models::{Customer, Warehouse};
///
/// let depot = Warehouse { id: 1, latitude: 40.7128, longitude: -74.0060, stock: 0.0 };
/// let customers = vec![Customer {
///     id: 7,
///     latitude: 40.7580,
///     longitude: -73.9855,
///     demand_rate: 50.0,
///     max_inventory: 1000.0,
///     current_inventory: 200.0,
///     min_inventory: 100.0,
///     priority: 1,
/// }];
/// let dm = DistanceMatrix::from_instance(&depot, &customers);
/// assert_eq!(dm.size(), 2);
/// assert!(dm.from_depot(0) > 0.0);
/// assert_eq!(dm.get(0, 0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the distance matrix for a depot and its customers.
    pub fn from_instance(warehouse: &Warehouse, customers: &[Customer]) -> Self {
        let coords: Vec<(f64, f64)> = std::iter::once((warehouse.latitude, warehouse.longitude))
            .chain(customers.iter().map(|c| (c.latitude, c.longitude)))
            .collect();

        let n = coords.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine_km(coords[i].0, coords[i].1, coords[j].0, coords[j].1);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Returns the distance between two matrix nodes.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Distance between the depot and the customer at dense index `ci`.
    pub fn from_depot(&self, ci: usize) -> f64 {
        self.get(0, ci + 1)
    }

    /// Distance between two customers given by dense index.
    pub fn between(&self, a: usize, b: usize) -> f64 {
        self.get(a + 1, b + 1)
    }

    /// Number of nodes (customers + depot).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: i64, lat: f64, lon: f64) -> Customer {
        Customer {
            id,
            latitude: lat,
            longitude: lon,
            demand_rate: 50.0,
            max_inventory: 1000.0,
            current_inventory: 500.0,
            min_inventory: 100.0,
            priority: 1,
        }
    }

    fn sample() -> (Warehouse, Vec<Customer>) {
        let depot = Warehouse {
            id: 1,
            latitude: 40.7128,
            longitude: -74.0060,
            stock: 10_000.0,
        };
        let customers = vec![
            customer(1, 40.7580, -73.9855),
            customer(2, 40.7505, -73.9934),
            customer(3, 40.7282, -73.9942),
        ];
        (depot, customers)
    }

    #[test]
    fn test_size_includes_depot() {
        let (depot, customers) = sample();
        let dm = DistanceMatrix::from_instance(&depot, &customers);
        assert_eq!(dm.size(), customers.len() + 1);
    }

    #[test]
    fn test_diagonal_is_zero() {
        let (depot, customers) = sample();
        let dm = DistanceMatrix::from_instance(&depot, &customers);
        for i in 0..dm.size() {
            assert_eq!(dm.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_symmetric() {
        let (depot, customers) = sample();
        let dm = DistanceMatrix::from_instance(&depot, &customers);
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_customer_accessors_match_nodes() {
        let (depot, customers) = sample();
        let dm = DistanceMatrix::from_instance(&depot, &customers);
        assert_eq!(dm.from_depot(0), dm.get(0, 1));
        assert_eq!(dm.between(0, 2), dm.get(1, 3));
    }

    #[test]
    fn test_positive_off_diagonal() {
        let (depot, customers) = sample();
        let dm = DistanceMatrix::from_instance(&depot, &customers);
        for ci in 0..customers.len() {
            assert!(dm.from_depot(ci) > 0.0);
        }
    }

    #[test]
    fn test_depot_only() {
        let (depot, _) = sample();
        let dm = DistanceMatrix::from_instance(&depot, &[]);
        assert_eq!(dm.size(), 1);
        assert_eq!(dm.get(0, 0), 0.0);
    }
}
