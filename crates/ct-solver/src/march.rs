//! Temperature-marching integration of tube length.
//!
//! Starting from saturated liquid at the condensing temperature, each whole
//! degree down to the evaporating temperature is one step:
//!
//! 1. quality from the energy balance against the fixed inlet state
//! 2. blended properties, velocity, Re and friction factor
//! 3. `dL = 2 D ((p1 - p2) - G (V2 - V1)) / (fm Vm G)` with step-mean `Vm`, `fm`
//! 4. `(p2, V2, f2)` become the reference for the next step
//!
//! Enthalpy and velocity in the energy balance always refer to the inlet.

use crate::error::{SolverError, SolverResult};
use crate::params::{MissingRecordPolicy, RunParameters};
use crate::result::{InletState, MarchResult, MarchStep};
use ct_components::{FlowState, FrictionModel, QualitySolver};
use ct_core::numeric::midpoint;
use ct_core::units::{DegC, MassFlux};
use ct_fluids::{FluidError, SaturationModel};
use tracing::{debug, info, warn};

/// Upstream values carried from one step to the next.
#[derive(Debug, Clone, Copy)]
struct StepReference {
    temperature_c: DegC,
    pressure: f64,
    velocity: f64,
    friction_factor: f64,
}

impl From<&FlowState> for StepReference {
    fn from(state: &FlowState) -> Self {
        Self {
            temperature_c: state.temperature_c,
            pressure: state.pressure.value,
            velocity: state.velocity,
            friction_factor: state.friction_factor,
        }
    }
}

/// Marching integrator over a saturation model.
///
/// Holds only validated parameters and borrowed properties; every call to
/// `run` starts from the inlet, so repeated runs give identical results.
pub struct MarchingIntegrator<'a, M: SaturationModel + ?Sized> {
    model: &'a M,
    params: RunParameters,
    friction: FrictionModel,
    mass_flux: MassFlux,
}

impl<'a, M: SaturationModel + ?Sized> MarchingIntegrator<'a, M> {
    pub fn new(model: &'a M, params: RunParameters) -> SolverResult<Self> {
        params.validate()?;
        let friction = FrictionModel::new(params.diameter, params.friction).map_err(|e| {
            SolverError::InvalidParams {
                what: e.to_string(),
            }
        })?;
        Ok(Self {
            model,
            params,
            friction,
            mass_flux: params.mass_flux(),
        })
    }

    pub fn params(&self) -> &RunParameters {
        &self.params
    }

    pub fn mass_flux(&self) -> MassFlux {
        self.mass_flux
    }

    /// Run the sweep from the condensing to the evaporating temperature.
    pub fn run(&self) -> SolverResult<MarchResult> {
        let p = &self.params;
        let g = self.mass_flux;
        let d = self.friction.diameter().value;
        let tc = p.condensing_c;

        info!(
            condensing_c = tc,
            evaporating_c = p.evaporating_c,
            mass_flux = g,
            diameter_m = d,
            "starting capillary march"
        );

        let inlet_record = self.model.lookup(tc).map_err(SolverError::fluid(tc))?;
        let inlet_state = FlowState::saturated_liquid(&inlet_record, g, &self.friction)
            .map_err(SolverError::component(tc))?;
        let quality_solver =
            QualitySolver::from_inlet(&inlet_record, g).map_err(SolverError::component(tc))?;

        let inlet = InletState {
            temperature_c: tc,
            pressure: inlet_state.pressure.value,
            specific_enthalpy: inlet_state.specific_enthalpy,
            specific_volume: inlet_state.specific_volume,
            velocity: inlet_state.velocity,
            reynolds: inlet_state.reynolds,
            friction_factor: inlet_state.friction_factor,
            mass_flux: g,
        };

        let mut reference = StepReference::from(&inlet_state);
        let mut length = 0.0;
        let mut steps = Vec::with_capacity(p.step_count());
        let mut skipped = Vec::new();

        for t in p.temperatures() {
            let record = match self.model.lookup(t) {
                Ok(record) => record,
                Err(FluidError::NotFound { .. })
                    if p.missing_records == MissingRecordPolicy::Skip =>
                {
                    warn!(temperature_c = t, "no saturation record, skipping step");
                    skipped.push(t);
                    continue;
                }
                Err(source) => return Err(SolverError::Fluid { temperature_c: t, source }),
            };

            let quality = quality_solver
                .solve(&record)
                .map_err(SolverError::component(t))?;
            let state = FlowState::evaluate(&record, quality, g, &self.friction)
                .map_err(SolverError::component(t))?;

            if t != tc && state.pressure.value >= reference.pressure {
                warn!(
                    temperature_c = t,
                    upstream_c = reference.temperature_c,
                    "saturation pressure does not decrease with temperature"
                );
            }

            let mean_velocity = midpoint(reference.velocity, state.velocity);
            let mean_friction = midpoint(reference.friction_factor, state.friction_factor);
            let dl = length_increment(&reference, &state, mean_velocity, mean_friction, g, d);

            if !dl.is_finite() {
                return Err(SolverError::NonFinite {
                    temperature_c: t,
                    what: "length increment",
                    value: dl,
                });
            }
            if dl < 0.0 {
                warn!(temperature_c = t, dl, "negative length increment");
            }

            length += dl;
            debug!(temperature_c = t, quality, dl, length, "march step");

            steps.push(MarchStep {
                temperature_c: t,
                quality,
                length,
                length_increment: dl,
                velocity: mean_velocity,
                pressure: state.pressure.value,
                reynolds: state.reynolds,
                specific_volume: state.specific_volume,
                specific_enthalpy: state.specific_enthalpy,
                viscosity: state.viscosity.value,
                friction_factor: state.friction_factor,
            });

            reference = StepReference::from(&state);
        }

        info!(
            steps = steps.len(),
            skipped = skipped.len(),
            total_length_m = length,
            "capillary march finished"
        );

        Ok(MarchResult::new(inlet, steps, skipped))
    }
}

/// Homogeneous-flow momentum balance over one step.
fn length_increment(
    upstream: &StepReference,
    downstream: &FlowState,
    mean_velocity: f64,
    mean_friction: f64,
    mass_flux: MassFlux,
    diameter: f64,
) -> f64 {
    let pressure_drop = upstream.pressure - downstream.pressure.value;
    let acceleration = mass_flux * (downstream.velocity - upstream.velocity);
    2.0 * diameter * (pressure_drop - acceleration) / (mean_friction * mean_velocity * mass_flux)
}

/// Validate `params` and run one sweep over `model`.
pub fn march<M: SaturationModel + ?Sized>(
    model: &M,
    params: RunParameters,
) -> SolverResult<MarchResult> {
    MarchingIntegrator::new(model, params)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_core::units::{inch, kgps};
    use ct_fluids::sample_table;

    fn params(tc: DegC, te: DegC) -> RunParameters {
        RunParameters::new(tc, te, kgps(0.0256), inch(0.094))
    }

    #[test]
    fn first_step_adds_no_length() {
        let table = sample_table().unwrap();
        let result = march(&table, params(40, 18)).unwrap();
        let first = result.steps()[0];
        assert_eq!(first.temperature_c, 40);
        assert!(first.quality.abs() < 1e-12);
        assert!(first.length_increment.abs() < 1e-9);
    }

    #[test]
    fn inlet_is_saturated_liquid() {
        let table = sample_table().unwrap();
        let record = table.lookup(40).unwrap();
        let result = march(&table, params(40, 18)).unwrap();
        let inlet = result.inlet();
        assert_eq!(inlet.specific_enthalpy, record.enthalpy_liquid);
        assert_eq!(inlet.specific_volume, record.specific_volume_liquid);
        assert!((inlet.velocity - inlet.mass_flux * record.specific_volume_liquid).abs() < 1e-12);
    }

    #[test]
    fn step_velocity_is_mean_of_bracketing_states() {
        let table = sample_table().unwrap();
        let integrator = MarchingIntegrator::new(&table, params(40, 38)).unwrap();
        let result = integrator.run().unwrap();
        let g = integrator.mass_flux();

        let v39 = g * result.steps()[1].specific_volume;
        let v38 = g * result.steps()[2].specific_volume;
        assert!((result.steps()[2].velocity - 0.5 * (v39 + v38)).abs() < 1e-9);
    }

    #[test]
    fn missing_inlet_is_fatal_even_when_skipping() {
        let table = sample_table().unwrap();
        let p = params(60, 40).with_missing_records(MissingRecordPolicy::Skip);
        let err = march(&table, p).unwrap_err();
        assert_eq!(err.temperature_c(), Some(60));
        assert!(matches!(
            err,
            SolverError::Fluid {
                source: FluidError::NotFound { temperature_c: 60 },
                ..
            }
        ));
    }
}
