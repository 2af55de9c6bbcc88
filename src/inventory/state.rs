//! Projected on-hand inventory for one planning request.

use std::collections::HashMap;

use crate::models::Customer;

/// Projected on-hand quantity per customer, owned by one planner instance.
///
/// Levels live in a dense `Vec<f64>` aligned with the request's customer
/// list, so the selector and route builder index directly; the side map from
/// external id is consulted only where the report boundary hands back
/// external identifiers.
///
/// The only mutations are the two the horizon driver applies in order at the
/// end of each day: committing emitted deliveries, then consuming daily
/// demand (floored at zero). Selection and delivery sizing always read the
/// pre-delivery value.
///
/// # Examples
///
/// ```
/// use irp_planner::inventory::InventoryState;
/// use irp_planner::models::Customer;
///
/// let customers = vec![Customer {
///     id: 9,
///     latitude: 40.0,
///     longitude: -74.0,
///     demand_rate: 50.0,
///     max_inventory: 1000.0,
///     current_inventory: 200.0,
///     min_inventory: 100.0,
///     priority: 1,
/// }];
/// let mut inv = InventoryState::new(&customers);
/// assert_eq!(inv.level(0), 200.0);
///
/// inv.commit_delivery(0, 800.0);
/// inv.consume_daily_demand(&customers);
/// assert_eq!(inv.level(0), 950.0);
/// assert_eq!(inv.level_of(9), Some(950.0));
/// ```
#[derive(Debug, Clone)]
pub struct InventoryState {
    levels: Vec<f64>,
    index_of: HashMap<i64, usize>,
}

impl InventoryState {
    /// Seeds levels from each customer's `current_inventory`.
    pub fn new(customers: &[Customer]) -> Self {
        Self {
            levels: customers.iter().map(|c| c.current_inventory).collect(),
            index_of: customers
                .iter()
                .enumerate()
                .map(|(ci, c)| (c.id, ci))
                .collect(),
        }
    }

    /// On-hand level of the customer at dense index `ci`.
    ///
    /// # Panics
    ///
    /// Panics if `ci` is out of bounds.
    pub fn level(&self, ci: usize) -> f64 {
        self.levels[ci]
    }

    /// On-hand level looked up by external customer id.
    pub fn level_of(&self, customer_id: i64) -> Option<f64> {
        self.index_of.get(&customer_id).map(|&ci| self.levels[ci])
    }

    /// Dense index of an external customer id.
    pub fn index_of(&self, customer_id: i64) -> Option<usize> {
        self.index_of.get(&customer_id).copied()
    }

    /// Adds a delivered quantity to a customer's level.
    pub fn commit_delivery(&mut self, ci: usize, quantity: f64) {
        self.levels[ci] += quantity;
    }

    /// Consumes one day of demand for every customer, flooring at zero.
    pub fn consume_daily_demand(&mut self, customers: &[Customer]) {
        for (level, customer) in self.levels.iter_mut().zip(customers) {
            *level = (*level - customer.demand_rate).max(0.0);
        }
    }

    /// Number of tracked customers.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns `true` if no customers are tracked.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
