//! Domain model types for inventory routing.
//!
//! Request-side types (`Warehouse`, `Customer`, `Vehicle`, `PlanRequest`)
//! mirror the wire format field for field; report-side types (`Stop`,
//! `Route`, `PlanResponse`) are the plain data carriers the planner emits.

mod customer;
mod report;
mod request;
mod vehicle;

pub use customer::Customer;
pub use report::{round2, PlanResponse, Route, Stop};
pub use request::{PlanRequest, Warehouse};
pub use vehicle::Vehicle;
