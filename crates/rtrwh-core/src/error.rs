//! Error types for the calculation engine
//!
//! Only one failure reaches callers of `calculate`: no city record could be
//! resolved. The remaining variants come from loading reference tables.

use thiserror::Error;

/// Errors produced by the engine and the reference data loader
#[derive(Error, Debug)]
pub enum EngineError {
    /// The city table is empty, so no climate record can be resolved
    #[error("No city data available to resolve a location")]
    NoCityData,

    /// A reference table file could not be read
    #[error("Failed to read {table} table from '{path}': {source}")]
    Io {
        table: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A reference table could not be parsed
    #[error("Failed to parse {table} table: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A reference table parsed but holds values the formulas cannot use
    #[error("Invalid reference data: {message}")]
    ReferenceData { message: String },
}

impl EngineError {
    /// Create an invalid reference data error
    pub fn reference_data(message: impl Into<String>) -> Self {
        Self::ReferenceData { message: message.into() }
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
