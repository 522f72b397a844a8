//! Storage tank sizing
//!
//! Capacity is the smallest of 35 days of demand, a fifth of the annual
//! potential and the 15 000 L ceiling, but never below 2 000 L. The tank is
//! modelled as a 2 m tall cylinder.

use std::f64::consts::PI;

use rtrwh_types::TankRecommendation;

use crate::constants::demand::DAYS_PER_YEAR;
use crate::constants::tank::{
    HEIGHT_M, MAX_CAPACITY_LITERS, MIN_CAPACITY_LITERS, POTENTIAL_FRACTION, STORAGE_DAYS,
};
use crate::round_to;

/// Recommend a storage tank for the given yearly demand and potential
pub fn size_tank(household_demand: u64, annual_potential: u64) -> TankRecommendation {
    let demand_based = household_demand as f64 / DAYS_PER_YEAR * STORAGE_DAYS;
    let potential_based = annual_potential as f64 * POTENTIAL_FRACTION;

    let capacity = demand_based
        .min(potential_based)
        .min(MAX_CAPACITY_LITERS)
        .max(MIN_CAPACITY_LITERS)
        .round();

    // V = π r² h with V in cubic metres
    let volume_m3 = capacity / 1000.0;
    let radius = (volume_m3 / (PI * HEIGHT_M)).sqrt();

    TankRecommendation {
        capacity_liters: capacity as u64,
        diameter_m: round_to(radius * 2.0, 1),
        height_m: HEIGHT_M,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_hits_ceiling() {
        let tank = size_tank(1_000_000, 1_000_000);
        assert_eq!(tank.capacity_liters, 15_000);
        // r = sqrt(15 / 2π) ≈ 1.545, d ≈ 3.09
        assert_eq!(tank.diameter_m, 3.1);
        assert_eq!(tank.height_m, 2.0);
    }

    #[test]
    fn test_capacity_floor() {
        let tank = size_tank(1_000, 1_000);
        assert_eq!(tank.capacity_liters, 2_000);
        assert_eq!(tank.diameter_m, 1.1);
    }

    #[test]
    fn test_potential_limits_capacity() {
        // 35 days of 197 100 L/yr = 18 900 L, 20 % of 40 000 = 8 000 L
        let tank = size_tank(197_100, 40_000);
        assert_eq!(tank.capacity_liters, 8_000);
    }

    #[test]
    fn test_demand_limits_capacity() {
        // 35 days of 73 000 L/yr = 7 000 L
        let tank = size_tank(73_000, 500_000);
        assert_eq!(tank.capacity_liters, 7_000);
    }
}
