//! Request and response bodies of the HTTP API, plus the OpenAPI document.

use rtrwh_types::{
    BudgetTier, CalculationResults, CalculationType, CityData, CityMatch, CostAnalysis,
    EnvironmentType, Feasibility, FeasibilityLevel, MatchedBy, MonthlyPotential, PitDimensions,
    RoofType, SoilType, TankRecommendation, UsagePurpose, UserInput, UserSubmission,
};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::error::ApiErrorResponse;

/// Body of `POST /api/calculate`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    pub input: UserInput,
    pub calculation_type: CalculationType,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "healthy")]
    pub status: String,

    /// Service version
    #[schema(example = "0.1.0")]
    pub version: String,

    pub uptime_seconds: u64,

    /// Cities in the loaded reference table
    pub cities_loaded: usize,

    /// Submissions currently stored
    pub submissions: usize,
}

/// One row of `GET /api/cities`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CitySummary {
    #[schema(example = "Chennai")]
    pub city: String,
    pub state: String,
    pub pincode_prefix: String,
    pub annual_rainfall: f64,
    pub groundwater_depth: f64,
    pub region: String,
}

impl From<&CityData> for CitySummary {
    fn from(city: &CityData) -> Self {
        Self {
            city: city.city.clone(),
            state: city.state.clone(),
            pincode_prefix: city.pincode_prefix.clone(),
            annual_rainfall: city.annual_rainfall,
            groundwater_depth: city.groundwater_depth,
            region: city.region.clone(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RTRWH/AR Estimator API",
        description = "Rooftop rainwater harvesting and artificial recharge sizing"
    ),
    paths(
        crate::handlers::health,
        crate::handlers::list_cities,
        crate::handlers::calculate,
        crate::handlers::list_submissions,
        crate::handlers::get_submission,
    ),
    components(schemas(
        CalculateRequest,
        HealthResponse,
        CitySummary,
        ApiErrorResponse,
        UserInput,
        UserSubmission,
        CalculationResults,
        CalculationType,
        RoofType,
        EnvironmentType,
        UsagePurpose,
        SoilType,
        BudgetTier,
        CityMatch,
        MatchedBy,
        MonthlyPotential,
        TankRecommendation,
        CostAnalysis,
        Feasibility,
        FeasibilityLevel,
        PitDimensions,
    ))
)]
pub struct ApiDoc;
