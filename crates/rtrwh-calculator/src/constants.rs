//! Fixed design constants used by the formula stages.
//!
//! Values that vary by site or material live in the reference tables; the
//! ones here are engineering rules of thumb that apply everywhere.

/// Storage sizing constants
pub mod tank {
    /// Days of household demand the tank should be able to hold
    pub const STORAGE_DAYS: f64 = 35.0;

    /// Share of annual potential worth storing at once
    pub const POTENTIAL_FRACTION: f64 = 0.2;

    /// Largest recommended tank in litres
    pub const MAX_CAPACITY_LITERS: f64 = 15_000.0;

    /// Smallest recommended tank in litres
    pub const MIN_CAPACITY_LITERS: f64 = 2_000.0;

    /// Fixed cylinder height in metres
    pub const HEIGHT_M: f64 = 2.0;
}

/// Demand constants
pub mod demand {
    /// Days per year used for annualising daily consumption
    pub const DAYS_PER_YEAR: f64 = 365.0;

    /// Usage multiplier for domestic use
    pub const DOMESTIC_MULTIPLIER: f64 = 1.0;

    /// Usage multiplier for irrigation
    pub const IRRIGATION_MULTIPLIER: f64 = 1.5;

    /// Usage multiplier for industrial use
    pub const INDUSTRIAL_MULTIPLIER: f64 = 2.0;
}

/// First-flush diversion depth in millimetres of rain over the roof
pub const FIRST_FLUSH_MM: f64 = 2.0;

/// Recharge pit constants
pub mod recharge {
    /// Recharge factor for clayey soil
    pub const CLAYEY_FACTOR: f64 = 0.7;

    /// Recharge factor for loamy soil
    pub const LOAMY_FACTOR: f64 = 0.8;

    /// Recharge factor for sandy soil
    pub const SANDY_FACTOR: f64 = 0.9;

    /// Days over which the annual recharge volume is assumed to arrive
    pub const RECHARGE_DAYS: f64 = 120.0;

    /// Extra storage allowance on the pit volume
    pub const STORAGE_MARGIN: f64 = 1.2;

    /// Minimum pit side in metres
    pub const MIN_SIDE_M: f64 = 3.0;

    /// Pit depth as a fraction of the groundwater depth
    pub const DEPTH_FRACTION: f64 = 0.3;

    /// Shallowest pit in metres
    pub const MIN_DEPTH_M: f64 = 2.0;

    /// Deepest pit in metres
    pub const MAX_DEPTH_M: f64 = 4.0;
}

/// Cost and payback constants
pub mod cost {
    /// Tank refills per year assumed when estimating savings
    pub const REFILLS_PER_YEAR: f64 = 10.0;

    /// Payback periods are reported up to this many years
    pub const MAX_PAYBACK_YEARS: f64 = 20.0;
}

/// Feasibility scoring constants
pub mod scoring {
    /// Starting score before any rule contributes
    pub const BASE_SCORE: u32 = 50;

    /// Highest reportable score
    pub const MAX_SCORE: u32 = 100;

    /// Monsoon share of annual rainfall above which storage needs care
    pub const MONSOON_CONCENTRATION_LIMIT: f64 = 0.7;
}
