//! Customer type with inventory and consumption parameters.

use serde::{Deserialize, Serialize};

fn default_priority() -> i32 {
    1
}

/// A customer site replenished from the depot.
///
/// Carries the geographic location, the daily consumption rate, and the
/// reorder band `[min_inventory, max_inventory]` that delivery sizing fills
/// up to. `current_inventory` seeds the planner's inventory state; after
/// that the projected level lives in
/// [`InventoryState`](crate::inventory::InventoryState), not here.
///
/// # Examples
///
/// ```
/// use irp_planner::models::Customer;
///
/// let c = Customer {
///     id: 1,
///     latitude: 40.7580,
///     longitude: -73.9855,
///     demand_rate: 50.0,
///     max_inventory: 1000.0,
///     current_inventory: 200.0,
///     min_inventory: 100.0,
///     priority: 1,
/// };
/// // (200 - 100) / 50 = 2 days of cover above the reorder point.
/// assert_eq!(c.days_until_stockout(200.0), Some(2.0));
/// assert_eq!(c.headroom(200.0), 800.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// External customer identifier.
    pub id: i64,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Units consumed per day (>= 0).
    pub demand_rate: f64,
    /// Storage ceiling; deliveries never push the level above this.
    pub max_inventory: f64,
    /// On-hand quantity at the start of the horizon.
    pub current_inventory: f64,
    /// Reorder point; projected levels at or below it trigger delivery.
    pub min_inventory: f64,
    /// Larger values are served earlier on a day. Defaults to 1.
    #[serde(default = "default_priority")]
    pub priority: i32,
}

impl Customer {
    /// Days until the given on-hand level reaches the reorder point at the
    /// customer's consumption rate.
    ///
    /// `None` when the customer does not consume (`demand_rate <= 0`).
    /// Negative values mean the level is already below the reorder point.
    pub fn days_until_stockout(&self, on_hand: f64) -> Option<f64> {
        if self.demand_rate > 0.0 {
            Some((on_hand - self.min_inventory) / self.demand_rate)
        } else {
            None
        }
    }

    /// Storage room left at the given on-hand level; the upper bound on a
    /// delivery quantity.
    pub fn headroom(&self, on_hand: f64) -> f64 {
        self.max_inventory - on_hand
    }
}
