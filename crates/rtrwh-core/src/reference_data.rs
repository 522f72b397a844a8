//! Static reference tables: city climate records and material coefficients.
//!
//! Tables are loaded once at start-up, validated, and then shared read-only
//! (normally behind an `Arc`) by every calculation. A built-in data set is
//! compiled into the crate; deployments can point at their own JSON files.

use std::fs;
use std::path::Path;

use rtrwh_types::{CityData, Coefficients};
use tracing::{info, warn};

use crate::constants::{ANNUAL_RAINFALL_TOLERANCE_MM, PINCODE_PREFIX_LEN};
use crate::error::{EngineError, EngineResult};

const BUILTIN_CITIES: &str = include_str!("../data/cities.json");
const BUILTIN_COEFFICIENTS: &str = include_str!("../data/coefficients.json");

/// Validated, immutable lookup tables
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    cities: Vec<CityData>,
    coefficients: Coefficients,
}

impl ReferenceData {
    /// Validate and wrap the given tables.
    ///
    /// An empty city list is accepted here; calculations against it fail with
    /// `EngineError::NoCityData`.
    pub fn new(cities: Vec<CityData>, coefficients: Coefficients) -> EngineResult<Self> {
        for city in &cities {
            validate_city(city)?;
        }
        validate_coefficients(&coefficients)?;

        if cities.is_empty() {
            warn!("Reference data loaded with an empty city table");
        }

        Ok(Self { cities, coefficients })
    }

    /// The data set compiled into the crate
    pub fn builtin() -> EngineResult<Self> {
        Self::from_json(BUILTIN_CITIES, BUILTIN_COEFFICIENTS)
    }

    /// Parse both tables from JSON text
    pub fn from_json(cities_json: &str, coefficients_json: &str) -> EngineResult<Self> {
        let cities: Vec<CityData> = serde_json::from_str(cities_json)
            .map_err(|source| EngineError::Parse { table: "city", source })?;
        let coefficients: Coefficients = serde_json::from_str(coefficients_json)
            .map_err(|source| EngineError::Parse { table: "coefficient", source })?;
        Self::new(cities, coefficients)
    }

    /// Load tables from files, falling back to the built-in table for any
    /// path that is not given.
    pub fn load(
        cities_path: Option<&Path>,
        coefficients_path: Option<&Path>,
    ) -> EngineResult<Self> {
        let cities_json = match cities_path {
            Some(path) => read_table("city", path)?,
            None => BUILTIN_CITIES.to_string(),
        };
        let coefficients_json = match coefficients_path {
            Some(path) => read_table("coefficient", path)?,
            None => BUILTIN_COEFFICIENTS.to_string(),
        };

        let data = Self::from_json(&cities_json, &coefficients_json)?;
        info!(
            cities = data.cities.len(),
            custom_cities = cities_path.is_some(),
            custom_coefficients = coefficients_path.is_some(),
            "Reference data loaded"
        );
        Ok(data)
    }

    pub fn cities(&self) -> &[CityData] {
        &self.cities
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Case-insensitive lookup by city name
    pub fn find_city(&self, name: &str) -> Option<&CityData> {
        self.cities.iter().find(|c| c.city.eq_ignore_ascii_case(name))
    }
}

fn read_table(table: &'static str, path: &Path) -> EngineResult<String> {
    fs::read_to_string(path).map_err(|source| EngineError::Io {
        table,
        path: path.display().to_string(),
        source,
    })
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn validate_city(city: &CityData) -> EngineResult<()> {
    if city.city.trim().is_empty() {
        return Err(EngineError::reference_data("city record with an empty name"));
    }
    if city.state.trim().is_empty() {
        return Err(EngineError::reference_data(format!(
            "city '{}' has an empty state",
            city.city
        )));
    }
    if city.pincode_prefix.len() != PINCODE_PREFIX_LEN
        || !city.pincode_prefix.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(EngineError::reference_data(format!(
            "city '{}' has pincode prefix '{}', expected {} digits",
            city.city, city.pincode_prefix, PINCODE_PREFIX_LEN
        )));
    }
    if !city.monthly_rainfall.iter().all(|&r| is_non_negative(r)) {
        return Err(EngineError::reference_data(format!(
            "city '{}' has negative or non-finite monthly rainfall",
            city.city
        )));
    }
    if !is_non_negative(city.annual_rainfall) || !is_non_negative(city.groundwater_depth) {
        return Err(EngineError::reference_data(format!(
            "city '{}' has negative or non-finite annual rainfall or groundwater depth",
            city.city
        )));
    }

    let monthly_total: f64 = city.monthly_rainfall.iter().sum();
    if (monthly_total - city.annual_rainfall).abs() > ANNUAL_RAINFALL_TOLERANCE_MM {
        warn!(
            city = %city.city,
            annual = city.annual_rainfall,
            monthly_total,
            "Annual rainfall does not match the sum of monthly figures"
        );
    }
    Ok(())
}

fn validate_coefficients(coefficients: &Coefficients) -> EngineResult<()> {
    let runoff = &coefficients.runoff;
    for (name, value) in [
        ("rcc", runoff.rcc),
        ("gi", runoff.gi),
        ("asbestos", runoff.asbestos),
        ("tiles", runoff.tiles),
    ] {
        if !(value > 0.0 && value <= 1.0) {
            return Err(EngineError::reference_data(format!(
                "runoff coefficient '{name}' must be in (0, 1], got {value}"
            )));
        }
    }

    let infiltration = &coefficients.infiltration;
    for (name, value) in [
        ("sandy", infiltration.sandy),
        ("loamy", infiltration.loamy),
        ("clayey", infiltration.clayey),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(EngineError::reference_data(format!(
                "infiltration rate '{name}' must be positive, got {value}"
            )));
        }
    }

    let cost = &coefficients.cost;
    let multipliers = &cost.budget_multipliers;
    for (name, value) in [
        ("baseCostPerSqm", cost.base_cost_per_sqm),
        ("tankCostPerLiter", cost.tank_cost_per_liter),
        ("rechargeCostPerSqm", cost.recharge_cost_per_sqm),
        ("budgetMultipliers.low", multipliers.low),
        ("budgetMultipliers.medium", multipliers.medium),
        ("budgetMultipliers.high", multipliers.high),
        ("waterRatePerLiter", coefficients.water_rate_per_liter),
    ] {
        if !is_non_negative(value) {
            return Err(EngineError::reference_data(format!(
                "cost factor '{name}' must be non-negative, got {value}"
            )));
        }
    }

    if !(coefficients.daily_consumption_per_person.is_finite()
        && coefficients.daily_consumption_per_person > 0.0)
    {
        return Err(EngineError::reference_data(
            "dailyConsumptionPerPerson must be positive",
        ));
    }
    Ok(())
}
