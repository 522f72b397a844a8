//! Artificial recharge sizing
//!
//! The recharge volume is the harvested potential scaled by how much of it the
//! soil is expected to take. The pit is square; its footprint must be large
//! enough both to infiltrate the design daily volume and to hold it, with a
//! 20 % margin, at the chosen depth.

use rtrwh_types::{PitDimensions, SoilType, UserInput};

use crate::constants::recharge::{
    CLAYEY_FACTOR, DEPTH_FRACTION, LOAMY_FACTOR, MAX_DEPTH_M, MIN_DEPTH_M, MIN_SIDE_M,
    RECHARGE_DAYS, SANDY_FACTOR, STORAGE_MARGIN,
};
use crate::round_to;

/// Fraction of harvested water expected to reach the aquifer
pub fn soil_factor(soil: SoilType) -> f64 {
    match soil {
        SoilType::Clayey => CLAYEY_FACTOR,
        SoilType::Loamy => LOAMY_FACTOR,
        SoilType::Sandy => SANDY_FACTOR,
    }
}

/// Annual recharge volume in cubic metres, two decimals
pub fn recharge_volume(annual_potential_liters: u64, soil: SoilType) -> f64 {
    round_to(annual_potential_liters as f64 / 1000.0 * soil_factor(soil), 2)
}

/// Pit depth: 30 % of the groundwater depth, between 2 and 4 m
pub fn pit_depth(groundwater_depth: f64) -> f64 {
    round_to((groundwater_depth * DEPTH_FRACTION).clamp(MIN_DEPTH_M, MAX_DEPTH_M), 1)
}

/// Size a square recharge pit for the given annual volume.
pub fn size_pit(
    recharge_volume_m3: f64,
    infiltration_rate_mm_hr: f64,
    groundwater_depth: f64,
) -> PitDimensions {
    let depth = pit_depth(groundwater_depth);
    let daily_volume = recharge_volume_m3 / RECHARGE_DAYS;

    // mm/hr to m/day
    let infiltration_m_per_day = infiltration_rate_mm_hr / 1000.0 * 24.0;
    let infiltration_area = if infiltration_m_per_day > 0.0 {
        daily_volume / infiltration_m_per_day
    } else {
        0.0
    };
    let storage_area = daily_volume * STORAGE_MARGIN / depth;

    let side = infiltration_area.max(storage_area).sqrt().ceil().max(MIN_SIDE_M);

    PitDimensions { length_m: side, width_m: side, depth_m: depth }
}

/// Warn when the site cannot host the pit.
pub fn open_space_warning(input: &UserInput, pit: &PitDimensions) -> Option<String> {
    let footprint = pit.footprint();
    match (input.has_open_space, input.open_space_area) {
        (false, _) => Some(format!(
            "No open space reported: a {footprint:.0} m² recharge pit needs open ground; \
             consider recharge through an existing borewell or a shared community pit"
        )),
        (true, Some(area)) if area < footprint => Some(format!(
            "Open space of {area:.0} m² is smaller than the {footprint:.0} m² recharge pit; \
             consider a recharge trench or several smaller pits"
        )),
        _ => None,
    }
}
