//! RTRWH Types
//!
//! This crate defines the data model shared across the estimator workspace
//! (`rtrwh-calculator`, `rtrwh-core` and `rtrwh-api`): the submitted
//! `UserInput`, the static reference tables, and the `CalculationResults`
//! produced by the engine.

#![deny(warnings)]
#![deny(missing_docs)]

mod input;
mod reference;
mod results;

pub use input::{
    BudgetTier, CalculationType, EnvironmentType, RoofType, SoilType, UsagePurpose, UserInput,
};
pub use reference::{
    BudgetMultipliers, CityData, Coefficients, CostFactors, InfiltrationRates, MONTH_NAMES,
    RunoffCoefficients,
};
pub use results::{
    CalculationResults, CityMatch, CostAnalysis, Feasibility, FeasibilityLevel, MatchedBy,
    MonthlyPotential, PitDimensions, TankRecommendation, UserSubmission,
};
