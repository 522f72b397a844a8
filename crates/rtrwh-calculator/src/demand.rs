use rtrwh_types::UsagePurpose;

use crate::constants::demand::{
    DAYS_PER_YEAR, DOMESTIC_MULTIPLIER, INDUSTRIAL_MULTIPLIER, IRRIGATION_MULTIPLIER,
};
use crate::round_to;

/// Demand multiplier for the intended use
pub fn purpose_multiplier(purpose: UsagePurpose) -> f64 {
    match purpose {
        UsagePurpose::Domestic => DOMESTIC_MULTIPLIER,
        UsagePurpose::Irrigation => IRRIGATION_MULTIPLIER,
        UsagePurpose::Industrial => INDUSTRIAL_MULTIPLIER,
    }
}

/// Yearly water demand in litres
pub fn household_demand(dwellers: u32, daily_per_person: f64, purpose: UsagePurpose) -> u64 {
    let demand = f64::from(dwellers) * daily_per_person * DAYS_PER_YEAR * purpose_multiplier(purpose);
    demand.round().max(0.0) as u64
}

/// Share of demand covered by the annual potential, capped at 100 and
/// rounded to one decimal. Zero demand counts as fully covered.
pub fn coverage_percentage(annual_potential: u64, demand: u64) -> f64 {
    if demand == 0 {
        return 100.0;
    }
    let ratio = annual_potential as f64 / demand as f64 * 100.0;
    round_to(ratio.min(100.0), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domestic_demand() {
        // 4 × 135 × 365
        assert_eq!(household_demand(4, 135.0, UsagePurpose::Domestic), 197_100);
    }

    #[test]
    fn test_purpose_multipliers_scale_demand() {
        let domestic = household_demand(2, 100.0, UsagePurpose::Domestic);
        assert_eq!(household_demand(2, 100.0, UsagePurpose::Irrigation), domestic * 3 / 2);
        assert_eq!(household_demand(2, 100.0, UsagePurpose::Industrial), domestic * 2);
    }

    #[test]
    fn test_coverage_is_capped() {
        assert_eq!(coverage_percentage(300_000, 100_000), 100.0);
        assert_eq!(coverage_percentage(50_000, 200_000), 25.0);
        assert_eq!(coverage_percentage(1, 3), 33.3);
        assert_eq!(coverage_percentage(0, 0), 100.0);
    }
}
