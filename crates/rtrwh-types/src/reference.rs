use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::input::{BudgetTier, RoofType, SoilType};

/// Month labels in calendar order, January first
pub const MONTH_NAMES: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Climate record for one city, loaded from the static city table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityData {
    /// City name
    #[schema(example = "Bengaluru")]
    pub city: String,
    /// State name
    #[schema(example = "Karnataka")]
    pub state: String,
    /// First three digits of the postal codes served
    #[schema(example = "560")]
    pub pincode_prefix: String,
    /// Average rainfall per month in millimetres, January first
    #[schema(value_type = Vec<f64>)]
    pub monthly_rainfall: [f64; 12],
    /// Average annual rainfall in millimetres
    pub annual_rainfall: f64,
    /// Typical depth to groundwater in metres
    pub groundwater_depth: f64,
    /// Principal aquifer formation
    pub aquifer_type: String,
    /// Broad geographic region
    pub region: String,
}

impl CityData {
    /// Sum of the June to September monthly figures
    pub fn monsoon_rainfall(&self) -> f64 {
        self.monthly_rainfall[5..9].iter().sum()
    }
}

/// Fraction of rainfall that runs off each roof material
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunoffCoefficients {
    /// Reinforced cement concrete
    pub rcc: f64,
    /// Galvanised iron
    pub gi: f64,
    /// Asbestos cement
    pub asbestos: f64,
    /// Tiles
    pub tiles: f64,
}

impl RunoffCoefficients {
    /// Coefficient for the given roof material
    pub fn for_roof(&self, roof: RoofType) -> f64 {
        match roof {
            RoofType::Rcc => self.rcc,
            RoofType::Gi => self.gi,
            RoofType::Asbestos => self.asbestos,
            RoofType::Tiles => self.tiles,
        }
    }
}

/// Soil infiltration rates in millimetres per hour
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfiltrationRates {
    /// Sandy soil
    pub sandy: f64,
    /// Loamy soil
    pub loamy: f64,
    /// Clayey soil
    pub clayey: f64,
}

impl InfiltrationRates {
    /// Rate for the given soil class
    pub fn for_soil(&self, soil: SoilType) -> f64 {
        match soil {
            SoilType::Sandy => self.sandy,
            SoilType::Loamy => self.loamy,
            SoilType::Clayey => self.clayey,
        }
    }
}

/// Cost multipliers applied to the base installation cost
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BudgetMultipliers {
    /// Low tier
    pub low: f64,
    /// Medium tier
    pub medium: f64,
    /// High tier
    pub high: f64,
}

impl BudgetMultipliers {
    /// Multiplier for the given tier
    pub fn for_tier(&self, tier: BudgetTier) -> f64 {
        match tier {
            BudgetTier::Low => self.low,
            BudgetTier::Medium => self.medium,
            BudgetTier::High => self.high,
        }
    }
}

/// Unit costs used by the cost analysis stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostFactors {
    /// Conveyance and filtration cost per square metre of roof
    pub base_cost_per_sqm: f64,
    /// Storage tank cost per litre of capacity
    pub tank_cost_per_liter: f64,
    /// Recharge structure cost per square metre of roof
    pub recharge_cost_per_sqm: f64,
    /// Tier multipliers
    pub budget_multipliers: BudgetMultipliers,
}

/// Static coefficient set used by every formula stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Coefficients {
    /// Runoff coefficient per roof material
    pub runoff: RunoffCoefficients,
    /// Infiltration rate per soil class
    pub infiltration: InfiltrationRates,
    /// Installation cost factors
    pub cost: CostFactors,
    /// Municipal water tariff per litre
    pub water_rate_per_liter: f64,
    /// Domestic consumption per person per day in litres
    pub daily_consumption_per_person: f64,
}
