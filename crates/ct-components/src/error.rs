//! Error types for component calculations.

use ct_core::error::CtError;
use thiserror::Error;

/// Errors that can occur in the friction, quality or flow-state models.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    /// Input outside the domain of a correlation (e.g. Re <= 0).
    #[error("Domain error: {what} = {value}")]
    Domain { what: &'static str, value: f64 },

    /// No physically admissible solution exists for this state.
    #[error("Infeasible state: {what} (discriminant = {discriminant:e})")]
    Infeasible {
        what: &'static str,
        discriminant: f64,
    },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<CtError> for ComponentError {
    fn from(e: CtError) -> Self {
        match e {
            CtError::NonFinite { what, .. } => ComponentError::NonPhysical { what },
            CtError::NonPositive { what, value } => ComponentError::Domain { what, value },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ComponentError::Domain {
            what: "Reynolds number",
            value: -5.0,
        };
        assert!(err.to_string().contains("Reynolds number"));

        let err = ComponentError::Infeasible {
            what: "negative discriminant",
            discriminant: -2.5e3,
        };
        assert!(err.to_string().contains("negative discriminant"));
    }

    #[test]
    fn error_conversion() {
        let core_err = CtError::NonPositive {
            what: "diameter",
            value: 0.0,
        };
        let err: ComponentError = core_err.into();
        assert!(matches!(err, ComponentError::Domain { what: "diameter", .. }));
    }
}
