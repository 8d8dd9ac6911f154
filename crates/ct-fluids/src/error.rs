//! Property table errors.

use ct_core::DegC;
use thiserror::Error;

/// Result type for property table operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur while building or querying saturation data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Requested temperature has no row in the table.
    #[error("No saturation record for {temperature_c} °C")]
    NotFound { temperature_c: DegC },

    /// Two rows share the same temperature key.
    #[error("Duplicate saturation record for {temperature_c} °C")]
    DuplicateTemperature { temperature_c: DegC },

    /// Non-physical value in a row (negative volume, NaN pressure, etc.).
    #[error("Non-physical {what} in record for {temperature_c} °C")]
    NonPhysical {
        temperature_c: DegC,
        what: &'static str,
    },

    /// Malformed tabular input.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Table file extension not recognised.
    #[error("Unsupported table format: '{extension}'")]
    UnsupportedFormat { extension: String },

    /// Reading the table file failed.
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// JSON/YAML deserialization failed.
    #[error("Deserialization error: {message}")]
    Serde { message: String },
}
