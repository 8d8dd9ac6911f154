//! Homogeneous two-phase flow state at one saturation temperature.

use crate::common::check_finite;
use crate::error::{ComponentError, ComponentResult};
use crate::friction::{FrictionModel, reynolds_number};
use ct_core::units::{DegC, DynVisc, MassFlux, Pressure, SpecEnthalpy, SpecVolume};
use ct_fluids::SaturationRecord;

/// Flow state built from a saturation record and a quality.
///
/// Transient: created for one marching step and dropped once the length
/// increment has been computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    pub temperature_c: DegC,
    pub pressure: Pressure,
    pub quality: f64,
    pub specific_volume: SpecVolume,
    pub specific_enthalpy: SpecEnthalpy,
    pub viscosity: DynVisc,
    /// Mean velocity G·v [m/s]
    pub velocity: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
}

impl FlowState {
    /// Blend the record at `quality` and evaluate velocity, Re and f.
    pub fn evaluate(
        record: &SaturationRecord,
        quality: f64,
        mass_flux: MassFlux,
        friction: &FrictionModel,
    ) -> ComponentResult<Self> {
        if !(0.0..=1.0).contains(&quality) {
            return Err(ComponentError::Domain {
                what: "vapor quality",
                value: quality,
            });
        }

        let mix = record.at_quality(quality);
        let velocity = check_finite(mass_flux * mix.specific_volume, "velocity")?;
        let reynolds = check_finite(
            reynolds_number(
                velocity,
                friction.diameter().value,
                mix.viscosity.value,
                mix.specific_volume,
            ),
            "Reynolds number",
        )?;
        let friction_factor = friction.friction_factor(reynolds)?;

        Ok(Self {
            temperature_c: record.temperature_c,
            pressure: record.pressure,
            quality,
            specific_volume: mix.specific_volume,
            specific_enthalpy: mix.enthalpy,
            viscosity: mix.viscosity,
            velocity,
            reynolds,
            friction_factor,
        })
    }

    /// Saturated liquid at `record`: the tube inlet state.
    pub fn saturated_liquid(
        record: &SaturationRecord,
        mass_flux: MassFlux,
        friction: &FrictionModel,
    ) -> ComponentResult<Self> {
        Self::evaluate(record, 0.0, mass_flux, friction)
    }
}
