use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::input::{BudgetTier, CalculationType, UserInput};

/// How the city record was chosen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchedBy {
    /// First three pincode digits matched a known prefix
    Pincode,
    /// Location text matched a city or state name
    Location,
    /// Nothing matched; the default city was used
    Fallback,
}

/// The city record the calculation ran against
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityMatch {
    /// City name
    pub city: String,
    /// State name
    pub state: String,
    /// Broad geographic region
    pub region: String,
    /// Principal aquifer formation
    pub aquifer_type: String,
    /// Average annual rainfall in millimetres
    pub annual_rainfall: f64,
    /// How the record was chosen
    pub matched_by: MatchedBy,
}

/// Harvestable volume for one month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPotential {
    /// Month label
    #[schema(example = "Jul")]
    pub month: String,
    /// Rainfall for the month in millimetres
    pub rainfall_mm: f64,
    /// Harvestable litres
    pub liters: u64,
}

/// Recommended cylindrical storage tank
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TankRecommendation {
    /// Capacity in litres
    pub capacity_liters: u64,
    /// Diameter in metres
    pub diameter_m: f64,
    /// Height in metres
    pub height_m: f64,
}

/// Installation cost estimates and payback
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostAnalysis {
    /// Cost before tier multipliers
    pub base_cost: f64,
    /// Low tier estimate
    pub low: f64,
    /// Medium tier estimate
    pub medium: f64,
    /// High tier estimate
    pub high: f64,
    /// Tier chosen by the user
    pub selected_tier: BudgetTier,
    /// Estimate for the chosen tier
    pub selected_estimate: f64,
    /// Yearly savings on municipal water
    pub annual_savings: f64,
    /// Years to recover the medium tier cost
    pub payback_years: f64,
}

/// Overall feasibility band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum FeasibilityLevel {
    /// Score of 80 or more
    High,
    /// Score of 60 or more
    Medium,
    /// Anything lower
    Low,
}

impl FeasibilityLevel {
    /// Band for a 0-100 score
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::High,
            60..=79 => Self::Medium,
            _ => Self::Low,
        }
    }
}

/// Scored feasibility assessment with advice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Feasibility {
    /// Score from 0 to 100
    pub score: u8,
    /// Band derived from the score
    pub level: FeasibilityLevel,
    /// Positive guidance
    pub recommendations: Vec<String>,
    /// Risks the user should address
    pub warnings: Vec<String>,
}

/// Square recharge pit dimensions in metres
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PitDimensions {
    /// Side length
    pub length_m: f64,
    /// Side width
    pub width_m: f64,
    /// Depth below ground
    pub depth_m: f64,
}

impl PitDimensions {
    /// Footprint in square metres
    pub fn footprint(&self) -> f64 {
        self.length_m * self.width_m
    }
}

/// Complete output of one engine run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResults {
    /// City record used
    pub city: CityMatch,
    /// Harvestable litres per month, January first
    pub monthly_potential: Vec<MonthlyPotential>,
    /// Harvestable litres per year
    pub annual_potential: u64,
    /// Household demand in litres per year
    pub household_demand: u64,
    /// Share of demand met by harvesting, 0-100
    pub coverage_percentage: f64,
    /// First-flush volume to divert, in litres
    pub first_flush_liters: f64,
    /// Storage tank recommendation
    pub tank: TankRecommendation,
    /// Cost estimates and payback
    pub cost: CostAnalysis,
    /// Feasibility assessment
    pub feasibility: Feasibility,
    /// Annual recharge volume in cubic metres (recharge mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recharge_volume: Option<f64>,
    /// Recharge pit dimensions (recharge mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pit_dimensions: Option<PitDimensions>,
}

/// A stored calculation, as kept by the submission store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSubmission {
    /// Generated identifier
    pub id: Uuid,
    /// Submitted input
    pub input: UserInput,
    /// Calculation mode
    pub calculation_type: CalculationType,
    /// Engine output
    pub results: CalculationResults,
    /// Time the submission was stored
    pub created_at: DateTime<Utc>,
}
