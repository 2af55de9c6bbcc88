//! Urgency-driven customer selection.

use crate::inventory::InventoryState;
use crate::models::Customer;

/// A customer becomes due when its projected level would cross the reorder
/// point within this many days.
const STOCKOUT_WINDOW_DAYS: f64 = 2.0;

/// Returns the dense indices of customers due for delivery today, most
/// urgent first.
///
/// A consuming customer is due when it will hit its reorder point within the
/// two-day stockout window or already sits at or below it; a non-consuming
/// customer only when it sits at or below the reorder point. Levels are read
/// pre-delivery.
///
/// Ordering: priority descending, then demand rate descending, then external
/// id ascending. Vehicle state is not consulted; the day planner decides who
/// actually gets served.
pub fn customers_due(customers: &[Customer], inventory: &InventoryState) -> Vec<usize> {
    let mut due: Vec<usize> = customers
        .iter()
        .enumerate()
        .filter(|(ci, customer)| is_due(customer, inventory.level(*ci)))
        .map(|(ci, _)| ci)
        .collect();

    due.sort_by(|&a, &b| {
        let (ca, cb) = (&customers[a], &customers[b]);
        cb.priority
            .cmp(&ca.priority)
            .then_with(|| cb.demand_rate.total_cmp(&ca.demand_rate))
            .then_with(|| ca.id.cmp(&cb.id))
    });
    due
}

fn is_due(customer: &Customer, level: f64) -> bool {
    match customer.days_until_stockout(level) {
        Some(days) => days <= STOCKOUT_WINDOW_DAYS || level <= customer.min_inventory,
        None => level <= customer.min_inventory,
    }
}
