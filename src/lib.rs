//! # irp-planner
//!
//! Multi-day inventory routing: a single depot replenishes a fixed set of
//! customers with a heterogeneous fleet over a finite horizon. For each day
//! the planner projects customer inventory, selects who is due, builds
//! capacity- and range-feasible tours with nearest-neighbor insertion,
//! shortens them with 2-opt, and reports routes with per-stop delivery
//! quantities and arrival times. Deliveries and daily consumption feed the
//! next day's projection.
//!
//! The entry point is [`plan`]; [`planner::Planner`] exposes the same pass
//! with access to the projected inventory afterwards.
//!
//! ## Modules
//!
//! - [`models`] — Request and report types (Warehouse, Customer, Vehicle, Stop, Route)
//! - [`distance`] — Haversine formula and the dense distance matrix
//! - [`inventory`] — Projected on-hand state, one instance per request
//! - [`constructive`] — Nearest-neighbor tour construction with delivery sizing
//! - [`local_search`] — 2-opt tour improvement
//! - [`planner`] — Customer selection, day packing, and the horizon driver

pub mod constructive;
pub mod distance;
pub mod error;
pub mod inventory;
pub mod local_search;
pub mod models;
pub mod planner;

pub use error::PlanError;
pub use planner::{plan, Planner};
