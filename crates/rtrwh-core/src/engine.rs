use std::sync::Arc;

use rtrwh_calculator::{
    FeasibilityScorer, ScoringContext, analyze_cost, coverage_percentage, first_flush_liters,
    household_demand, open_space_warning, rainwater_potential, recharge_volume, size_pit,
    size_tank,
};
use rtrwh_types::{CalculationResults, CalculationType, CityMatch, UserInput};
use tracing::{debug, info, instrument};

use crate::city_resolver::resolve_city;
use crate::error::{EngineError, EngineResult};
use crate::reference_data::ReferenceData;

/// Stateless calculation engine over shared reference tables.
///
/// Cheap to share: wrap it in an `Arc` and call `calculate` from any thread.
pub struct CalculationEngine {
    reference: Arc<ReferenceData>,
    scorer: FeasibilityScorer,
}

impl std::fmt::Debug for CalculationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalculationEngine")
            .field("cities", &self.reference.cities().len())
            .field("scoring_rules", &self.scorer.rules().len())
            .finish()
    }
}

impl CalculationEngine {
    /// Create an engine with the standard feasibility rules
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference, scorer: FeasibilityScorer::new() }
    }

    /// Create an engine with a custom scorer
    pub fn with_scorer(reference: Arc<ReferenceData>, scorer: FeasibilityScorer) -> Self {
        Self { reference, scorer }
    }

    pub fn reference_data(&self) -> &ReferenceData {
        &self.reference
    }

    /// Run every stage for one submission.
    ///
    /// Stages run in a fixed order: city resolution, potential, demand,
    /// coverage, first flush, tank, cost, feasibility, and in recharge mode the
    /// recharge volume and pit.
    #[instrument(skip(self, input), fields(pincode = %input.pincode, calculation_type = %calculation_type))]
    pub fn calculate(
        &self,
        input: &UserInput,
        calculation_type: CalculationType,
    ) -> EngineResult<CalculationResults> {
        let coefficients = self.reference.coefficients();

        let resolution = resolve_city(self.reference.cities(), &input.location, &input.pincode)
            .ok_or(EngineError::NoCityData)?;
        let city = resolution.city;
        debug!(city = %city.city, matched_by = ?resolution.matched_by, "City resolved");

        let runoff = coefficients.runoff.for_roof(input.roof_type);
        let potential = rainwater_potential(input.roof_area, &city.monthly_rainfall, runoff);

        let demand = household_demand(
            input.dwellers,
            coefficients.daily_consumption_per_person,
            input.usage_purpose,
        );
        let coverage = coverage_percentage(potential.annual, demand);
        let first_flush = first_flush_liters(input.roof_area);
        let tank = size_tank(demand, potential.annual);

        let cost = analyze_cost(
            input.roof_area,
            tank.capacity_liters,
            demand,
            calculation_type,
            input.budget,
            &coefficients.cost,
            coefficients.water_rate_per_liter,
        );

        let mut feasibility = self.scorer.score(&ScoringContext {
            input,
            city,
            coverage_percentage: coverage,
        });

        let (recharge, pit) = if calculation_type.includes_recharge() {
            let volume = recharge_volume(potential.annual, input.soil_type);
            let pit = size_pit(
                volume,
                coefficients.infiltration.for_soil(input.soil_type),
                input.groundwater_depth,
            );
            if let Some(warning) = open_space_warning(input, &pit) {
                feasibility.warnings.push(warning);
            }
            (Some(volume), Some(pit))
        } else {
            (None, None)
        };

        info!(
            city = %city.city,
            annual_potential = potential.annual,
            household_demand = demand,
            tank_capacity = tank.capacity_liters,
            score = feasibility.score,
            "Calculation completed"
        );

        Ok(CalculationResults {
            city: CityMatch {
                city: city.city.clone(),
                state: city.state.clone(),
                region: city.region.clone(),
                aquifer_type: city.aquifer_type.clone(),
                annual_rainfall: city.annual_rainfall,
                matched_by: resolution.matched_by,
            },
            monthly_potential: potential.monthly,
            annual_potential: potential.annual,
            household_demand: demand,
            coverage_percentage: coverage,
            first_flush_liters: first_flush,
            tank,
            cost,
            feasibility,
            recharge_volume: recharge,
            pit_dimensions: pit,
        })
    }
}
