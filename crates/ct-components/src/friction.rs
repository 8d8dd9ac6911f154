//! Two-phase Darcy friction factor.

use crate::common::check_finite;
use crate::error::{ComponentError, ComponentResult};
use ct_core::units::Length;

/// Explicit Colebrook-type approximation used for the friction factor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FrictionCorrelation {
    /// `f = 0.25 / ln(e / (3.7 D) + 5.74 / Re^0.9)^2`.
    ///
    /// Natural log with Euler's number standing in for the roughness term.
    /// Reproduces the legacy sizing sheet; the roughness term dominates for
    /// capillary bores, so `f` is nearly independent of `Re`.
    #[default]
    Legacy,
    /// Swamee-Jain: `f = 0.25 / log10(eps / (3.7 D) + 5.74 / Re^0.9)^2`.
    SwameeJain {
        /// Absolute wall roughness.
        roughness: Length,
    },
}

/// Friction factor model for a tube of fixed internal diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionModel {
    diameter: Length,
    correlation: FrictionCorrelation,
}

impl FrictionModel {
    /// Create a friction model.
    ///
    /// Diameter must be positive and finite; a Swamee-Jain roughness must be
    /// finite and non-negative.
    pub fn new(diameter: Length, correlation: FrictionCorrelation) -> ComponentResult<Self> {
        let d = check_finite(diameter.value, "tube diameter")?;
        if d <= 0.0 {
            return Err(ComponentError::Domain {
                what: "tube diameter",
                value: d,
            });
        }
        if let FrictionCorrelation::SwameeJain { roughness } = correlation {
            let eps = check_finite(roughness.value, "wall roughness")?;
            if eps < 0.0 {
                return Err(ComponentError::Domain {
                    what: "wall roughness",
                    value: eps,
                });
            }
        }
        Ok(Self {
            diameter,
            correlation,
        })
    }

    /// Legacy correlation for the given diameter.
    pub fn legacy(diameter: Length) -> ComponentResult<Self> {
        Self::new(diameter, FrictionCorrelation::Legacy)
    }

    pub fn diameter(&self) -> Length {
        self.diameter
    }

    pub fn correlation(&self) -> FrictionCorrelation {
        self.correlation
    }

    /// Darcy friction factor at Reynolds number `reynolds`.
    ///
    /// Fails with `ComponentError::Domain` for `Re <= 0`, non-finite `Re`, or
    /// a log term that vanishes.
    pub fn friction_factor(&self, reynolds: f64) -> ComponentResult<f64> {
        if !reynolds.is_finite() || reynolds <= 0.0 {
            return Err(ComponentError::Domain {
                what: "Reynolds number",
                value: reynolds,
            });
        }

        let d = self.diameter.value;
        let turbulent = 5.74 / reynolds.powf(0.9);
        let log_term = match self.correlation {
            FrictionCorrelation::Legacy => (std::f64::consts::E / (3.7 * d) + turbulent).ln(),
            FrictionCorrelation::SwameeJain { roughness } => {
                (roughness.value / (3.7 * d) + turbulent).log10()
            }
        };

        if !log_term.is_finite() || log_term == 0.0 {
            return Err(ComponentError::Domain {
                what: "friction log term",
                value: log_term,
            });
        }

        let f = 0.25 / log_term.powi(2);
        check_finite(f, "friction factor")
    }
}

/// Reynolds number `V D / (mu v)` from velocity, diameter, dynamic viscosity
/// and specific volume (all SI).
pub fn reynolds_number(velocity: f64, diameter: f64, viscosity: f64, specific_volume: f64) -> f64 {
    velocity * diameter / (viscosity * specific_volume)
}
