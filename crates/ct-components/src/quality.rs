//! Vapor quality from the adiabatic energy balance.
//!
//! For homogeneous flow at constant mass flux `G` the stagnation enthalpy is
//! conserved along the tube:
//!
//! ```text
//! h1 + V1^2 / 2 = h2 + V2^2 / 2,   h2 = hf + x (hg - hf),   V2 = G (vf + x (vg - vf))
//! ```
//!
//! which is quadratic in the downstream quality `x`:
//!
//! ```text
//! a = 0.5 (vg - vf)^2 G^2
//! b = (hg - hf) + vf (vg - vf) G^2
//! c = (hf - h1) + 0.5 vf^2 G^2 - V1^2 / 2
//! ```

use crate::common::{admissible_quality, check_finite};
use crate::error::{ComponentError, ComponentResult};
use ct_core::units::{MassFlux, SpecEnthalpy};
use ct_fluids::SaturationRecord;

/// Coefficients of `a x^2 + b x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadraticCoefficients {
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Residual `a x^2 + b x + c`.
    pub fn eval(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }
}

/// Smallest strictly positive root in range; a root at or just below zero
/// is only taken when no positive root qualifies.
fn smallest_admissible(roots: [f64; 2]) -> Option<f64> {
    roots
        .into_iter()
        .filter(|&x| x > 0.0)
        .filter_map(admissible_quality)
        .min_by(f64::total_cmp)
        .or_else(|| {
            roots
                .into_iter()
                .filter(|&x| x <= 0.0)
                .find_map(admissible_quality)
        })
}

/// Select the physical quality root.
///
/// Returns the smallest positive root in `(0, 1]`, snapped onto the interval
/// within `QUALITY_TOLERANCE`. A zero root (saturated liquid, as at the inlet
/// step) is accepted only when there is no positive one. A negative
/// discriminant, or no root in range, is an infeasible state; there is no
/// silent fallback value.
pub fn select_quality_root(coeffs: QuadraticCoefficients) -> ComponentResult<f64> {
    let QuadraticCoefficients { a, b, c } = coeffs;
    check_finite(a, "quadratic coefficient a")?;
    check_finite(b, "quadratic coefficient b")?;
    check_finite(c, "quadratic coefficient c")?;

    // vg == vf: the balance is linear in x
    if a == 0.0 {
        if b == 0.0 {
            return Err(ComponentError::Infeasible {
                what: "degenerate energy balance",
                discriminant: 0.0,
            });
        }
        return admissible_quality(-c / b).ok_or(ComponentError::Infeasible {
            what: "no quality root in [0, 1]",
            discriminant: b * b,
        });
    }

    let disc = coeffs.discriminant();
    if disc < 0.0 {
        return Err(ComponentError::Infeasible {
            what: "negative discriminant",
            discriminant: disc,
        });
    }

    if disc == 0.0 {
        return admissible_quality(-b / (2.0 * a)).ok_or(ComponentError::Infeasible {
            what: "no quality root in [0, 1]",
            discriminant: disc,
        });
    }

    // Cancellation-free pair: q = -(b + sign(b) sqrt(D)) / 2, roots q/a and c/q.
    let q = -0.5 * (b + b.signum() * disc.sqrt());

    smallest_admissible([q / a, c / q]).ok_or(ComponentError::Infeasible {
        what: "no quality root in [0, 1]",
        discriminant: disc,
    })
}

/// Energy-balance quality solver anchored to a fixed upstream state.
///
/// The reference enthalpy and velocity are taken once at the tube inlet and
/// are not advanced during a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualitySolver {
    inlet_enthalpy: SpecEnthalpy,
    inlet_velocity: f64,
    mass_flux: MassFlux,
}

impl QualitySolver {
    pub fn new(
        inlet_enthalpy: SpecEnthalpy,
        inlet_velocity: f64,
        mass_flux: MassFlux,
    ) -> ComponentResult<Self> {
        check_finite(inlet_enthalpy, "inlet enthalpy")?;
        check_finite(inlet_velocity, "inlet velocity")?;
        let g = check_finite(mass_flux, "mass flux")?;
        if g <= 0.0 {
            return Err(ComponentError::Domain {
                what: "mass flux",
                value: g,
            });
        }
        Ok(Self {
            inlet_enthalpy,
            inlet_velocity,
            mass_flux,
        })
    }

    /// Anchor to saturated liquid at the inlet record.
    pub fn from_inlet(record: &SaturationRecord, mass_flux: MassFlux) -> ComponentResult<Self> {
        Self::new(
            record.enthalpy_liquid,
            mass_flux * record.specific_volume_liquid,
            mass_flux,
        )
    }

    pub fn inlet_enthalpy(&self) -> SpecEnthalpy {
        self.inlet_enthalpy
    }

    pub fn inlet_velocity(&self) -> f64 {
        self.inlet_velocity
    }

    pub fn mass_flux(&self) -> MassFlux {
        self.mass_flux
    }

    /// Energy-balance coefficients against the downstream saturation record.
    pub fn coefficients(&self, record: &SaturationRecord) -> QuadraticCoefficients {
        let g2 = self.mass_flux * self.mass_flux;
        let vf = record.specific_volume_liquid;
        let dv = record.volume_change();
        QuadraticCoefficients {
            a: 0.5 * dv * dv * g2,
            b: record.latent_heat() + vf * dv * g2,
            c: (record.enthalpy_liquid - self.inlet_enthalpy) + 0.5 * vf * vf * g2
                - 0.5 * self.inlet_velocity * self.inlet_velocity,
        }
    }

    /// Downstream quality at `record`.
    pub fn solve(&self, record: &SaturationRecord) -> ComponentResult<f64> {
        select_quality_root(self.coefficients(record))
    }
}
