#![deny(warnings)]
//! Formula stages for the rooftop rainwater harvesting estimator.
//!
//! Every stage is a pure function over the submitted input and the static
//! reference tables. The feasibility stage is built from independent
//! `ScoringRule`s registered in a `RuleSet`, so new heuristics can be added
//! without touching the others.

pub mod constants;
pub mod cost;
pub mod demand;
pub mod feasibility;
pub mod potential;
pub mod recharge;
pub mod tank;

pub use cost::analyze_cost;
pub use demand::{coverage_percentage, household_demand, purpose_multiplier};
pub use feasibility::{FeasibilityScorer, RuleOutcome, RuleSet, ScoringContext, ScoringRule};
pub use potential::{RainwaterPotential, first_flush_liters, rainwater_potential};
pub use recharge::{open_space_warning, pit_depth, recharge_volume, size_pit, soil_factor};
pub use tank::size_tank;

/// Round `value` to `places` decimal places, half away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
