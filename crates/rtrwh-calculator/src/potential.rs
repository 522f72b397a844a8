//! Rainwater potential
//!
//! Monthly litres = roof area (m²) × rainfall (mm) × runoff coefficient, since
//! one millimetre over one square metre is one litre.

use rtrwh_types::{MONTH_NAMES, MonthlyPotential};

use crate::constants::FIRST_FLUSH_MM;

/// Harvestable volume broken down by month
#[derive(Debug, Clone, PartialEq)]
pub struct RainwaterPotential {
    /// One entry per month, January first
    pub monthly: Vec<MonthlyPotential>,
    /// Exact sum of the monthly litres
    pub annual: u64,
}

/// Compute monthly and annual harvestable litres.
///
/// Each month is rounded on its own and the annual figure is the sum of the
/// rounded months, so the two always agree.
pub fn rainwater_potential(
    roof_area: f64,
    monthly_rainfall: &[f64; 12],
    runoff_coefficient: f64,
) -> RainwaterPotential {
    let monthly: Vec<MonthlyPotential> = MONTH_NAMES
        .iter()
        .zip(monthly_rainfall.iter())
        .map(|(month, &rainfall)| MonthlyPotential {
            month: (*month).to_string(),
            rainfall_mm: rainfall,
            liters: (roof_area * rainfall * runoff_coefficient).round().max(0.0) as u64,
        })
        .collect();

    let annual = monthly.iter().map(|m| m.liters).sum();

    RainwaterPotential { monthly, annual }
}

/// Volume to divert before storage, in litres
pub fn first_flush_liters(roof_area: f64) -> f64 {
    roof_area * FIRST_FLUSH_MM
}
