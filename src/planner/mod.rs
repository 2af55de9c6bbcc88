//! Day planning and the horizon driver.
//!
//! A [`Planner`] owns the distance matrix, the inventory state, and the
//! accumulating route list for exactly one request. Each day it selects due
//! customers ([`selection`]), packs them into vehicles in input order with
//! the nearest-neighbor builder, improves each tour with 2-opt, and emits
//! stops with wall-clock arrival times; deliveries are then committed and
//! daily demand consumed before the next day begins.
//!
//! The whole pass is single-threaded and deterministic: identical requests
//! produce identical reports.

pub mod selection;

use chrono::{Days, NaiveDate};

use crate::constructive::build_route;
use crate::distance::DistanceMatrix;
use crate::error::PlanError;
use crate::inventory::InventoryState;
use crate::local_search::two_opt_improve;
use crate::models::{round2, PlanRequest, PlanResponse, Route, Stop};

/// Depot departure time, minutes from midnight (08:00).
const DEPOT_DEPARTURE_MIN: u32 = 8 * 60;
/// Assumed travel speed for arrival-time estimates.
const AVG_SPEED_KMH: f64 = 50.0;
/// Unloading time added after every stop.
const SERVICE_TIME_MIN: u32 = 15;

/// Whole minutes spent driving the given leg, rounded down.
fn travel_minutes(km: f64) -> u32 {
    (km / AVG_SPEED_KMH * 60.0).floor() as u32
}

/// Formats minutes-from-midnight as "HH:MM", wrapping past midnight.
fn format_clock(minutes: u32) -> String {
    format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
}

/// Plans delivery routes for one request.
///
/// Rejects empty customer or vehicle lists with a structured `success:
/// false` response; fails with [`PlanError::MalformedDate`] when
/// `start_date` does not parse. Otherwise runs the full horizon and reports
/// every route.
///
/// # Examples
///
/// ```
/// use irp_planner::models::{Customer, PlanRequest, Vehicle, Warehouse};
///
/// let request = PlanRequest {
///     warehouse: Warehouse { id: 1, latitude: 40.7128, longitude: -74.0060, stock: 10000.0 },
///     customers: vec![Customer {
///         id: 1,
///         latitude: 40.7580,
///         longitude: -73.9855,
///         demand_rate: 50.0,
///         max_inventory: 1000.0,
///         current_inventory: 50.0,
///         min_inventory: 100.0,
///         priority: 1,
///     }],
///     vehicles: vec![Vehicle {
///         id: 1,
///         capacity: 5000.0,
///         cost_per_km: 1.0,
///         fixed_cost: 100.0,
///         max_distance: 0.0,
///     }],
///     planning_horizon: 1,
///     start_date: "2024-01-01".into(),
/// };
///
/// let response = irp_planner::plan(&request).unwrap();
/// assert!(response.success);
/// assert_eq!(response.routes.len(), 1);
/// assert_eq!(response.routes[0].stops[0].quantity, 950.0);
/// ```
pub fn plan(request: &PlanRequest) -> Result<PlanResponse, PlanError> {
    log::info!(
        "planning request: {} customers, {} vehicles, {} day horizon",
        request.customers.len(),
        request.vehicles.len(),
        request.planning_horizon
    );

    if request.customers.is_empty() {
        return Ok(PlanResponse::rejected("No customers provided"));
    }
    if request.vehicles.is_empty() {
        return Ok(PlanResponse::rejected("No vehicles provided"));
    }

    let mut planner = Planner::new(request)?;
    let response = planner.solve();
    log::info!(
        "planning complete: cost {:.2}, distance {:.2} km, {} routes",
        response.total_cost,
        response.total_distance,
        response.routes.len()
    );
    Ok(response)
}

/// One planning pass over one request.
///
/// Owns the distance matrix and inventory state exclusively; the request
/// data is borrowed read-only. Instantiate one planner per request; planners
/// share nothing, so a host may run many in parallel.
pub struct Planner<'a> {
    request: &'a PlanRequest,
    start_date: NaiveDate,
    distances: DistanceMatrix,
    inventory: InventoryState,
}

impl<'a> Planner<'a> {
    /// Builds the distance matrix and seeds inventory for a request.
    pub fn new(request: &'a PlanRequest) -> Result<Self, PlanError> {
        let start_date = NaiveDate::parse_from_str(&request.start_date, "%Y-%m-%d").map_err(
            |source| PlanError::MalformedDate {
                value: request.start_date.clone(),
                source,
            },
        )?;
        Ok(Self {
            request,
            start_date,
            distances: DistanceMatrix::from_instance(&request.warehouse, &request.customers),
            inventory: InventoryState::new(&request.customers),
        })
    }

    /// Runs the full horizon and returns the report.
    ///
    /// Per day: select due customers, plan routes, commit the emitted
    /// deliveries, consume daily demand. Days with nothing due still consume
    /// demand and advance the calendar.
    pub fn solve(&mut self) -> PlanResponse {
        let mut routes: Vec<Route> = Vec::new();
        let mut total_cost = 0.0;
        let mut total_distance = 0.0;

        for day in 0..self.request.planning_horizon {
            let date = self.start_date + Days::new(u64::from(day));
            let due = selection::customers_due(&self.request.customers, &self.inventory);
            log::debug!("day {} ({date}): {} customers due", day + 1, due.len());

            if !due.is_empty() {
                for route in self.plan_day(day, date, &due) {
                    total_cost += route.total_cost;
                    total_distance += route.total_distance;
                    for stop in &route.stops {
                        let ci = self
                            .inventory
                            .index_of(stop.customer_id)
                            .expect("emitted stop for unknown customer");
                        self.inventory.commit_delivery(ci, stop.quantity);
                    }
                    routes.push(route);
                }
            }

            self.inventory.consume_daily_demand(&self.request.customers);
        }

        PlanResponse {
            success: true,
            message: format!("Planning complete: {} routes generated", routes.len()),
            total_cost: round2(total_cost),
            total_distance: round2(total_distance),
            routes,
        }
    }

    /// Projected on-hand level for a customer, by external id.
    ///
    /// Reflects the state after the last planned day once [`solve`]
    /// returns.
    ///
    /// [`solve`]: Planner::solve
    pub fn inventory_level(&self, customer_id: i64) -> Option<f64> {
        self.inventory.level_of(customer_id)
    }

    /// Packs due customers into vehicles for one day.
    ///
    /// Vehicles are tried in input order; each gets one tour from the
    /// builder, improved by 2-opt. Customers the fleet cannot take today are
    /// left for the selector to resurface tomorrow.
    fn plan_day(&self, day: u32, date: NaiveDate, due: &[usize]) -> Vec<Route> {
        let customers = &self.request.customers;
        let mut unassigned = due.to_vec();
        let mut routes = Vec::new();

        for vehicle in &self.request.vehicles {
            if unassigned.is_empty() {
                break;
            }

            let (order, deliveries) = build_route(
                vehicle,
                &unassigned,
                customers,
                &self.inventory,
                &self.distances,
            );
            if order.is_empty() {
                continue;
            }
            unassigned.retain(|ci| !order.contains(ci));

            let quantities: Vec<(usize, f64)> =
                order.iter().copied().zip(deliveries.iter().copied()).collect();
            let total_load: f64 = deliveries.iter().sum();

            let (improved, total_distance) = two_opt_improve(&order, &self.distances);

            let mut stops = Vec::with_capacity(improved.len());
            let mut clock = DEPOT_DEPARTURE_MIN;
            let mut prev: Option<usize> = None;
            for (position, &ci) in improved.iter().enumerate() {
                let leg = match prev {
                    None => self.distances.from_depot(ci),
                    Some(p) => self.distances.between(p, ci),
                };
                clock += travel_minutes(leg);
                let quantity = quantities
                    .iter()
                    .find(|(qci, _)| *qci == ci)
                    .map(|(_, q)| *q)
                    .expect("improved tour visits a customer the builder never chose");
                stops.push(Stop {
                    customer_id: customers[ci].id,
                    sequence: (position + 1) as u32,
                    quantity: round2(quantity),
                    arrival_time: format_clock(clock),
                });
                clock += SERVICE_TIME_MIN;
                prev = Some(ci);
            }

            routes.push(Route {
                day: day + 1,
                date: date.format("%Y-%m-%d").to_string(),
                vehicle_id: vehicle.id,
                total_distance: round2(total_distance),
                total_cost: round2(vehicle.route_cost(total_distance)),
                total_load: round2(total_load),
                stops,
            });
        }

        routes
    }
}
