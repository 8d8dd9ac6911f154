//! Immutable run configuration for one sweep.

use crate::error::{SolverError, SolverResult};
use ct_components::FrictionCorrelation;
use ct_core::numeric::ensure_positive;
use ct_core::units::{Area, DegC, Length, MassFlux, MassRate, circle_area};
use serde::{Deserialize, Serialize};

/// What to do when an intermediate temperature has no table record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissingRecordPolicy {
    /// Abort the sweep with `SolverError::Fluid`.
    #[default]
    Abort,
    /// Skip the step; the next present record spans the gap.
    Skip,
}

/// Fixed run parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunParameters {
    /// Condensing (inlet) saturation temperature [°C]
    pub condensing_c: DegC,
    /// Evaporating (outlet) saturation temperature [°C]
    pub evaporating_c: DegC,
    pub mass_flow: MassRate,
    /// Tube internal diameter
    pub diameter: Length,
    pub friction: FrictionCorrelation,
    pub missing_records: MissingRecordPolicy,
}

impl RunParameters {
    /// Parameters with the legacy friction correlation and abort-on-missing policy.
    pub fn new(
        condensing_c: DegC,
        evaporating_c: DegC,
        mass_flow: MassRate,
        diameter: Length,
    ) -> Self {
        Self {
            condensing_c,
            evaporating_c,
            mass_flow,
            diameter,
            friction: FrictionCorrelation::default(),
            missing_records: MissingRecordPolicy::default(),
        }
    }

    pub fn with_friction(mut self, friction: FrictionCorrelation) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_missing_records(mut self, policy: MissingRecordPolicy) -> Self {
        self.missing_records = policy;
        self
    }

    /// Check physical sanity before a sweep.
    ///
    /// Equal temperatures are accepted and give a single zero-length step.
    pub fn validate(&self) -> SolverResult<()> {
        ensure_positive(self.mass_flow.value, "mass flow rate")?;
        ensure_positive(self.diameter.value, "tube diameter")?;

        if let FrictionCorrelation::SwameeJain { roughness } = self.friction
            && (!roughness.value.is_finite() || roughness.value < 0.0)
        {
            return Err(SolverError::InvalidParams {
                what: format!("wall roughness must be finite and >= 0, got {}", roughness.value),
            });
        }

        if self.condensing_c < self.evaporating_c {
            return Err(SolverError::InvalidParams {
                what: format!(
                    "condensing temperature {} °C is below evaporating temperature {} °C",
                    self.condensing_c, self.evaporating_c
                ),
            });
        }

        Ok(())
    }

    pub fn flow_area(&self) -> Area {
        circle_area(self.diameter)
    }

    /// Mass flux G = m / A [kg/(m²·s)].
    pub fn mass_flux(&self) -> MassFlux {
        self.mass_flow.value / self.flow_area().value
    }

    /// Number of whole-degree steps, both ends included.
    pub fn step_count(&self) -> usize {
        usize::try_from(i64::from(self.condensing_c) - i64::from(self.evaporating_c) + 1)
            .unwrap_or(0)
    }

    /// Sweep temperatures, condensing down to evaporating.
    pub fn temperatures(&self) -> impl Iterator<Item = DegC> {
        (self.evaporating_c..=self.condensing_c).rev()
    }
}
