//! Built-in feasibility rules.
//!
//! Weighted rules (rainfall, roof, soil, groundwater, coverage) contribute up
//! to 85 points on top of the base score. The fixed rules only add warnings.

use rtrwh_types::{EnvironmentType, RoofType, SoilType};

use super::{RuleOutcome, ScoringContext, ScoringRule};
use crate::constants::scoring::MONSOON_CONCENTRATION_LIMIT;

/// Annual rainfall adequacy, up to +25
#[derive(Debug, Default)]
pub struct RainfallAdequacyRule;

impl ScoringRule for RainfallAdequacyRule {
    fn name(&self) -> &str {
        "rainfall_adequacy"
    }

    fn evaluate(&self, ctx: &ScoringContext<'_>) -> RuleOutcome {
        let annual = ctx.city.annual_rainfall;
        if annual >= 1200.0 {
            RuleOutcome::recommend(
                25,
                format!("Excellent rainfall of {annual:.0} mm/year makes harvesting highly productive"),
            )
        } else if annual >= 800.0 {
            RuleOutcome::recommend(
                20,
                format!("Good rainfall of {annual:.0} mm/year supports rainwater harvesting"),
            )
        } else if annual >= 500.0 {
            RuleOutcome::recommend(
                10,
                format!("Moderate rainfall of {annual:.0} mm/year; size storage to carry over dry months"),
            )
        } else {
            RuleOutcome::warn(
                0,
                format!("Low rainfall of {annual:.0} mm/year limits harvesting yield"),
            )
        }
    }
}

/// Roof material suitability, up to +20
#[derive(Debug, Default)]
pub struct RoofSuitabilityRule;

impl ScoringRule for RoofSuitabilityRule {
    fn name(&self) -> &str {
        "roof_suitability"
    }

    fn evaluate(&self, ctx: &ScoringContext<'_>) -> RuleOutcome {
        match ctx.input.roof_type {
            RoofType::Rcc => RuleOutcome::recommend(
                20,
                "RCC roof is ideal for collection; keep the surface clean and slopes towards outlets",
            ),
            RoofType::Gi => RuleOutcome::recommend(
                18,
                "GI sheet roof gives high runoff; fit gutters along the full eave length",
            ),
            RoofType::Tiles => RuleOutcome::recommend(
                12,
                "Tiled roof is suitable; check for broken tiles and moss before the monsoon",
            ),
            RoofType::Asbestos => RuleOutcome::warn(
                5,
                "Asbestos roof: use harvested water for non-potable purposes only and plan a roof replacement",
            ),
        }
    }
}

/// Soil suitability for recharge, up to +15
#[derive(Debug, Default)]
pub struct SoilSuitabilityRule;

impl ScoringRule for SoilSuitabilityRule {
    fn name(&self) -> &str {
        "soil_suitability"
    }

    fn evaluate(&self, ctx: &ScoringContext<'_>) -> RuleOutcome {
        match ctx.input.soil_type {
            SoilType::Sandy => RuleOutcome::recommend(
                15,
                "Sandy soil infiltrates quickly and is excellent for groundwater recharge",
            ),
            SoilType::Loamy => RuleOutcome::recommend(
                12,
                "Loamy soil offers good infiltration for recharge structures",
            ),
            SoilType::Clayey => RuleOutcome::warn(
                5,
                "Clayey soil drains slowly; recharge pits need a larger footprint or a recharge shaft",
            ),
        }
    }
}

/// Groundwater depth band, up to +15
#[derive(Debug, Default)]
pub struct GroundwaterDepthRule;

impl ScoringRule for GroundwaterDepthRule {
    fn name(&self) -> &str {
        "groundwater_depth"
    }

    fn evaluate(&self, ctx: &ScoringContext<'_>) -> RuleOutcome {
        let depth = ctx.input.groundwater_depth;
        if depth > 20.0 {
            RuleOutcome::recommend(
                15,
                format!("Deep water table at {depth:.1} m; artificial recharge is strongly beneficial"),
            )
        } else if depth > 10.0 {
            RuleOutcome::recommend(
                12,
                format!("Water table at {depth:.1} m is well suited to recharge"),
            )
        } else if depth >= 5.0 {
            RuleOutcome::recommend(
                8,
                format!("Moderate water table at {depth:.1} m; recharge is feasible with shallow pits"),
            )
        } else {
            RuleOutcome::warn(
                3,
                format!("Shallow water table at {depth:.1} m; recharge may cause waterlogging, prefer storage"),
            )
        }
    }
}

/// Share of demand met by harvesting, up to +10
#[derive(Debug, Default)]
pub struct CoverageRule;

impl ScoringRule for CoverageRule {
    fn name(&self) -> &str {
        "coverage"
    }

    fn evaluate(&self, ctx: &ScoringContext<'_>) -> RuleOutcome {
        let coverage = ctx.coverage_percentage;
        if coverage >= 100.0 {
            RuleOutcome::recommend(10, "Harvested water can meet the full annual demand")
        } else if coverage >= 75.0 {
            RuleOutcome::recommend(
                8,
                format!("Harvesting covers {coverage:.1}% of annual demand"),
            )
        } else if coverage >= 50.0 {
            RuleOutcome::recommend(
                5,
                format!("Harvesting covers {coverage:.1}% of annual demand; use it to supplement mains supply"),
            )
        } else {
            RuleOutcome::recommend(
                2,
                format!("Harvesting covers only {coverage:.1}% of demand; prioritise recharge or non-potable uses"),
            )
        }
    }
}

/// Warns about roof contamination from nesting birds
#[derive(Debug, Default)]
pub struct BirdNestingRule;

impl ScoringRule for BirdNestingRule {
    fn name(&self) -> &str {
        "bird_nesting"
    }

    fn evaluate(&self, ctx: &ScoringContext<'_>) -> RuleOutcome {
        if ctx.input.bird_nesting {
            RuleOutcome::warn(
                0,
                "Bird nesting on the roof: install mesh guards on outlets and a first-flush diverter",
            )
        } else {
            RuleOutcome::none()
        }
    }
}

/// Warns about pollutant load in industrial areas
#[derive(Debug, Default)]
pub struct IndustrialEnvironmentRule;

impl ScoringRule for IndustrialEnvironmentRule {
    fn name(&self) -> &str {
        "industrial_environment"
    }

    fn evaluate(&self, ctx: &ScoringContext<'_>) -> RuleOutcome {
        if ctx.input.environment == EnvironmentType::Industrial {
            RuleOutcome::warn(
                0,
                "Industrial surroundings: test water quality and add filtration before any use",
            )
        } else {
            RuleOutcome::none()
        }
    }
}

/// Warns when most rain falls between June and September
#[derive(Debug, Default)]
pub struct MonsoonConcentrationRule;

impl ScoringRule for MonsoonConcentrationRule {
    fn name(&self) -> &str {
        "monsoon_concentration"
    }

    fn evaluate(&self, ctx: &ScoringContext<'_>) -> RuleOutcome {
        let annual = ctx.city.annual_rainfall;
        if annual <= 0.0 {
            return RuleOutcome::none();
        }
        let share = ctx.city.monsoon_rainfall() / annual;
        if share > MONSOON_CONCENTRATION_LIMIT {
            RuleOutcome::warn(
                0,
                format!(
                    "{:.0}% of rainfall arrives June to September; divert surplus monsoon runoff to recharge",
                    share * 100.0
                ),
            )
        } else {
            RuleOutcome::none()
        }
    }
}
