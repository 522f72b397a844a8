//! Field-level checks on a submitted `UserInput` before it reaches the engine.

use std::fmt;

use rtrwh_types::UserInput;
use serde::Serialize;
use thiserror::Error;

const PINCODE_LEN: usize = 6;
const MAX_ROOF_AREA_SQM: f64 = 100_000.0;
const MAX_DWELLERS: u32 = 1_000;
const MAX_GROUNDWATER_DEPTH_M: f64 = 500.0;

/// One rejected field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All violations found in one input, in field order
#[derive(Debug, Clone, Error)]
#[error("invalid input: {}", join_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Check every field and report all violations at once.
pub fn validate_input(input: &UserInput) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    if input.name.trim().is_empty() {
        violations.push(FieldViolation::new("name", "must not be empty"));
    }
    if input.location.trim().is_empty() {
        violations.push(FieldViolation::new("location", "must not be empty"));
    }
    if input.pincode.len() != PINCODE_LEN || !input.pincode.bytes().all(|b| b.is_ascii_digit()) {
        violations.push(FieldViolation::new("pincode", "must be exactly 6 digits"));
    }
    if !input.roof_area.is_finite() || input.roof_area <= 0.0 || input.roof_area > MAX_ROOF_AREA_SQM
    {
        violations.push(FieldViolation::new(
            "roofArea",
            format!("must be greater than 0 and at most {MAX_ROOF_AREA_SQM} m²"),
        ));
    }
    if input.dwellers == 0 || input.dwellers > MAX_DWELLERS {
        violations.push(FieldViolation::new(
            "dwellers",
            format!("must be between 1 and {MAX_DWELLERS}"),
        ));
    }
    if !input.groundwater_depth.is_finite()
        || !(0.0..=MAX_GROUNDWATER_DEPTH_M).contains(&input.groundwater_depth)
    {
        violations.push(FieldViolation::new(
            "groundwaterDepth",
            format!("must be between 0 and {MAX_GROUNDWATER_DEPTH_M} m"),
        ));
    }
    if input.has_open_space {
        match input.open_space_area {
            Some(area) if area.is_finite() && area > 0.0 => {}
            Some(_) => violations
                .push(FieldViolation::new("openSpaceArea", "must be greater than 0")),
            None => violations.push(FieldViolation::new(
                "openSpaceArea",
                "is required when hasOpenSpace is set",
            )),
        }
    }

    if violations.is_empty() { Ok(()) } else { Err(ValidationError { violations }) }
}
