#![deny(warnings)]
//! Calculation engine for rooftop rainwater harvesting (RTRWH) and artificial
//! recharge (AR) sizing.
//!
//! The engine resolves a city climate record for the submitted location, then
//! runs the formula stages from `rtrwh-calculator` in a fixed order and
//! assembles one immutable `CalculationResults`.

pub mod city_resolver;
pub mod constants;
pub mod engine;
pub mod error;
pub mod reference_data;

pub use city_resolver::{CityResolution, resolve_city};
pub use engine::CalculationEngine;
pub use error::{EngineError, EngineResult};
pub use reference_data::ReferenceData;

pub use rtrwh_types as types;
