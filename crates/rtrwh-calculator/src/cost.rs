use rtrwh_types::{BudgetTier, CalculationType, CostAnalysis, CostFactors};

use crate::constants::cost::{MAX_PAYBACK_YEARS, REFILLS_PER_YEAR};
use crate::round_to;

/// Estimate installation cost per budget tier and the payback period.
///
/// Savings assume the tank is refilled ten times a year, limited by what the
/// household actually uses. Payback is measured against the medium tier.
pub fn analyze_cost(
    roof_area: f64,
    tank_capacity: u64,
    household_demand: u64,
    calculation_type: CalculationType,
    budget: BudgetTier,
    factors: &CostFactors,
    water_rate_per_liter: f64,
) -> CostAnalysis {
    let mut base_cost =
        roof_area * factors.base_cost_per_sqm + tank_capacity as f64 * factors.tank_cost_per_liter;
    if calculation_type.includes_recharge() {
        base_cost += roof_area * factors.recharge_cost_per_sqm;
    }
    let base_cost = base_cost.round();

    let multipliers = &factors.budget_multipliers;
    let low = (base_cost * multipliers.low).round();
    let medium = (base_cost * multipliers.medium).round();
    let high = (base_cost * multipliers.high).round();
    let selected_estimate = (base_cost * multipliers.for_tier(budget)).round();

    let harvested_use = (household_demand as f64).min(tank_capacity as f64 * REFILLS_PER_YEAR);
    let annual_savings = round_to(harvested_use * water_rate_per_liter, 2);

    let payback_years = round_to((medium / annual_savings.max(1.0)).min(MAX_PAYBACK_YEARS), 1);

    CostAnalysis {
        base_cost,
        low,
        medium,
        high,
        selected_tier: budget,
        selected_estimate,
        annual_savings,
        payback_years,
    }
}
