//! Error types for the marching sweep.

use ct_components::ComponentError;
use ct_core::error::CtError;
use ct_core::units::DegC;
use ct_fluids::FluidError;
use thiserror::Error;

/// Errors that abort a sweep.
///
/// Step failures carry the saturation temperature of the failing step so a
/// report can name both the step and the offending quantity.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid run parameters: {what}")]
    InvalidParams { what: String },

    #[error("Property lookup failed at {temperature_c} °C: {source}")]
    Fluid {
        temperature_c: DegC,
        #[source]
        source: FluidError,
    },

    #[error("Flow model failed at {temperature_c} °C: {source}")]
    Component {
        temperature_c: DegC,
        #[source]
        source: ComponentError,
    },

    #[error("Non-finite {what} at {temperature_c} °C: {value}")]
    NonFinite {
        temperature_c: DegC,
        what: &'static str,
        value: f64,
    },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl SolverError {
    /// Temperature of the failing step, if the error came from a step.
    pub fn temperature_c(&self) -> Option<DegC> {
        match self {
            SolverError::InvalidParams { .. } => None,
            SolverError::Fluid { temperature_c, .. }
            | SolverError::Component { temperature_c, .. }
            | SolverError::NonFinite { temperature_c, .. } => Some(*temperature_c),
        }
    }

    pub(crate) fn fluid(temperature_c: DegC) -> impl FnOnce(FluidError) -> Self {
        move |source| SolverError::Fluid {
            temperature_c,
            source,
        }
    }

    pub(crate) fn component(temperature_c: DegC) -> impl FnOnce(ComponentError) -> Self {
        move |source| SolverError::Component {
            temperature_c,
            source,
        }
    }
}

impl From<CtError> for SolverError {
    fn from(e: CtError) -> Self {
        SolverError::InvalidParams {
            what: e.to_string(),
        }
    }
}
