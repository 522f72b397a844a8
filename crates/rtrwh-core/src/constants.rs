//! Engine-level constants

/// City used when neither pincode nor location matches anything
pub const FALLBACK_CITY: &str = "Delhi";

/// Number of leading pincode digits that identify a postal region
pub const PINCODE_PREFIX_LEN: usize = 3;

/// Tolerance in millimetres between the stored annual rainfall and the sum of
/// its monthly figures before a table entry is reported
pub const ANNUAL_RAINFALL_TOLERANCE_MM: f64 = 1.0;

/// Shortest location text allowed to match as a fragment of a city or state
/// name
pub const MIN_LOCATION_FRAGMENT_LEN: usize = 3;
