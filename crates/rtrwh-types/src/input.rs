use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Roofing material of the catchment surface
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub enum RoofType {
    /// Reinforced cement concrete
    #[serde(rename = "RCC", alias = "rcc")]
    Rcc,
    /// Galvanised iron sheets
    #[serde(rename = "GI", alias = "gi")]
    Gi,
    /// Asbestos cement sheets
    #[serde(alias = "asbestos")]
    Asbestos,
    /// Clay or concrete tiles
    #[serde(alias = "tiles")]
    Tiles,
}

/// Surroundings of the building, used for water-quality warnings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub enum EnvironmentType {
    /// Residential neighbourhood
    #[serde(alias = "residential")]
    Residential,
    /// Industrial area
    #[serde(alias = "industrial")]
    Industrial,
    /// Agricultural land
    #[serde(alias = "agricultural")]
    Agricultural,
}

/// What the harvested water will be used for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub enum UsagePurpose {
    /// Household use
    #[serde(alias = "domestic")]
    Domestic,
    /// Garden or field irrigation
    #[serde(alias = "irrigation")]
    Irrigation,
    /// Process or industrial use
    #[serde(alias = "industrial")]
    Industrial,
}

/// Dominant soil class at the site
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub enum SoilType {
    /// Sandy soil, fast infiltration
    #[serde(alias = "sandy")]
    Sandy,
    /// Loamy soil, moderate infiltration
    #[serde(alias = "loamy")]
    Loamy,
    /// Clayey soil, slow infiltration
    #[serde(alias = "clayey")]
    Clayey,
}

/// Budget tier the user intends to spend in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub enum BudgetTier {
    /// Minimal installation
    #[serde(alias = "low")]
    Low,
    /// Standard installation
    #[serde(alias = "medium")]
    Medium,
    /// Premium installation
    #[serde(alias = "high")]
    High,
}

/// Calculation mode requested by the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CalculationType {
    /// Storage-oriented rainwater harvesting
    Rainwater,
    /// Rainwater harvesting plus artificial groundwater recharge
    Recharge,
}

impl CalculationType {
    /// Whether recharge-only stages run for this mode
    pub fn includes_recharge(self) -> bool {
        matches!(self, Self::Recharge)
    }
}

impl fmt::Display for CalculationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rainwater => write!(f, "rainwater"),
            Self::Recharge => write!(f, "recharge"),
        }
    }
}

impl FromStr for CalculationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rainwater" => Ok(Self::Rainwater),
            "recharge" => Ok(Self::Recharge),
            other => Err(format!(
                "unknown calculation type '{other}', expected 'rainwater' or 'recharge'"
            )),
        }
    }
}

/// A single estimator submission as entered by the user.
///
/// Values are expected to have passed boundary validation before they reach
/// the engine; nothing here enforces ranges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    /// Name of the person submitting
    #[schema(example = "Asha Verma")]
    pub name: String,

    /// Free-text location (city, locality or state)
    #[schema(example = "Bengaluru, Karnataka")]
    pub location: String,

    /// Six digit postal code
    #[schema(example = "560001")]
    pub pincode: String,

    /// Roof catchment area in square metres
    #[schema(example = 120.0)]
    pub roof_area: f64,

    /// Roofing material
    pub roof_type: RoofType,

    /// Surroundings of the building
    pub environment: EnvironmentType,

    /// Whether birds nest on the roof
    #[serde(default)]
    pub bird_nesting: bool,

    /// Number of people living in the building
    #[schema(example = 4)]
    pub dwellers: u32,

    /// Intended use of harvested water
    pub usage_purpose: UsagePurpose,

    /// Whether open ground is available for a recharge pit
    #[serde(default)]
    pub has_open_space: bool,

    /// Open ground area in square metres, when available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_space_area: Option<f64>,

    /// Depth to groundwater in metres
    #[schema(example = 15.0)]
    pub groundwater_depth: f64,

    /// Dominant soil class
    pub soil_type: SoilType,

    /// Budget tier
    pub budget: BudgetTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_input_json_shape() {
        let json = r#"{
            "name": "Asha",
            "location": "Pune",
            "pincode": "411001",
            "roofArea": 80.5,
            "roofType": "RCC",
            "environment": "Residential",
            "birdNesting": true,
            "dwellers": 5,
            "usagePurpose": "Domestic",
            "hasOpenSpace": true,
            "openSpaceArea": 40.0,
            "groundwaterDepth": 12.0,
            "soilType": "Loamy",
            "budget": "Medium"
        }"#;

        let input: UserInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.roof_type, RoofType::Rcc);
        assert_eq!(input.open_space_area, Some(40.0));
        assert_eq!(input.soil_type, SoilType::Loamy);

        let back = serde_json::to_value(&input).unwrap();
        assert_eq!(back["roofType"], "RCC");
        assert_eq!(back["usagePurpose"], "Domestic");
    }

    #[test]
    fn test_calculation_type_parsing() {
        assert_eq!("recharge".parse::<CalculationType>(), Ok(CalculationType::Recharge));
        assert_eq!(" Rainwater ".parse::<CalculationType>(), Ok(CalculationType::Rainwater));
        assert!("storage".parse::<CalculationType>().is_err());
        assert!(CalculationType::Recharge.includes_recharge());
        assert!(!CalculationType::Rainwater.includes_recharge());
    }

    #[test]
    fn test_lowercase_enum_aliases() {
        let roof: RoofType = serde_json::from_str("\"gi\"").unwrap();
        assert_eq!(roof, RoofType::Gi);
        let soil: SoilType = serde_json::from_str("\"clayey\"").unwrap();
        assert_eq!(soil, SoilType::Clayey);
    }
}
