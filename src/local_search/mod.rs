//! Local search over constructed tours.
//!
//! - [`two_opt_improve`] — intra-tour 2-opt edge reversal, first-improvement
//!   with scan restart
//! - [`route_distance`] — depot-bracketed tour length

mod two_opt;

pub use two_opt::{route_distance, two_opt_improve};
