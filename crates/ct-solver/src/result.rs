//! Per-step records and the completed sweep.

use ct_core::units::DegC;
use serde::{Deserialize, Serialize};

/// Reference state at the tube inlet (saturated liquid at the condensing
/// temperature). All values SI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InletState {
    pub temperature_c: DegC,
    /// [Pa]
    pub pressure: f64,
    /// [J/kg]
    pub specific_enthalpy: f64,
    /// [m³/kg]
    pub specific_volume: f64,
    /// [m/s]
    pub velocity: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    /// [kg/(m²·s)]
    pub mass_flux: f64,
}

/// One marching step. All values SI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarchStep {
    pub temperature_c: DegC,
    /// Vapor quality at this temperature
    pub quality: f64,
    /// Cumulative tube length [m]
    pub length: f64,
    /// Length added by this step [m]
    pub length_increment: f64,
    /// Mean velocity over the step [m/s]
    pub velocity: f64,
    /// Downstream saturation pressure [Pa]
    pub pressure: f64,
    pub reynolds: f64,
    /// [m³/kg]
    pub specific_volume: f64,
    /// [J/kg]
    pub specific_enthalpy: f64,
    /// [Pa·s]
    pub viscosity: f64,
    /// Local friction factor at this temperature
    pub friction_factor: f64,
}

/// Completed sweep: inlet reference plus one step per visited temperature,
/// in marching order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarchResult {
    inlet: InletState,
    steps: Vec<MarchStep>,
    #[serde(default)]
    skipped: Vec<DegC>,
}

impl MarchResult {
    pub fn new(inlet: InletState, steps: Vec<MarchStep>, skipped: Vec<DegC>) -> Self {
        Self {
            inlet,
            steps,
            skipped,
        }
    }

    /// Final cumulative length [m]; zero for an empty sweep.
    pub fn total_length(&self) -> f64 {
        self.steps.last().map_or(0.0, |s| s.length)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[MarchStep] {
        &self.steps
    }

    pub fn inlet(&self) -> &InletState {
        &self.inlet
    }

    /// Temperatures skipped for lack of a table record.
    pub fn skipped(&self) -> &[DegC] {
        &self.skipped
    }

    pub fn temperatures(&self) -> Vec<DegC> {
        self.steps.iter().map(|s| s.temperature_c).collect()
    }

    pub fn lengths(&self) -> Vec<f64> {
        self.series(|s| s.length)
    }

    pub fn velocities(&self) -> Vec<f64> {
        self.series(|s| s.velocity)
    }

    pub fn pressures(&self) -> Vec<f64> {
        self.series(|s| s.pressure)
    }

    pub fn reynolds_numbers(&self) -> Vec<f64> {
        self.series(|s| s.reynolds)
    }

    pub fn specific_volumes(&self) -> Vec<f64> {
        self.series(|s| s.specific_volume)
    }

    pub fn specific_enthalpies(&self) -> Vec<f64> {
        self.series(|s| s.specific_enthalpy)
    }

    pub fn viscosities(&self) -> Vec<f64> {
        self.series(|s| s.viscosity)
    }

    pub fn qualities(&self) -> Vec<f64> {
        self.series(|s| s.quality)
    }

    pub fn friction_factors(&self) -> Vec<f64> {
        self.series(|s| s.friction_factor)
    }

    fn series(&self, f: impl Fn(&MarchStep) -> f64) -> Vec<f64> {
        self.steps.iter().map(f).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inlet() -> InletState {
        InletState {
            temperature_c: 40,
            pressure: 2.075e6,
            specific_enthalpy: 250_000.0,
            specific_volume: 0.0011,
            velocity: 6.29,
            reynolds: 9.0e5,
            friction_factor: 0.0076,
            mass_flux: 5717.9,
        }
    }

    fn step(t: DegC, length: f64) -> MarchStep {
        MarchStep {
            temperature_c: t,
            quality: 0.1,
            length,
            length_increment: 0.2,
            velocity: 10.0,
            pressure: 2.0e6,
            reynolds: 9.0e5,
            specific_volume: 0.004,
            specific_enthalpy: 250_000.0,
            viscosity: 1.6e-5,
            friction_factor: 0.0076,
        }
    }

    #[test]
    fn empty_result_has_zero_length() {
        let r = MarchResult::new(inlet(), Vec::new(), Vec::new());
        assert!(r.is_empty());
        assert_eq!(r.total_length(), 0.0);
    }

    #[test]
    fn series_are_aligned() {
        let r = MarchResult::new(inlet(), vec![step(40, 0.0), step(39, 0.4)], vec![]);
        assert_eq!(r.len(), 2);
        assert_eq!(r.temperatures(), vec![40, 39]);
        assert_eq!(r.lengths(), vec![0.0, 0.4]);
        assert_eq!(r.total_length(), 0.4);
        assert_eq!(r.velocities().len(), r.len());
    }

    #[test]
    fn json_round_trip() {
        let r = MarchResult::new(inlet(), vec![step(40, 0.0)], vec![39]);
        let json = serde_json::to_string(&r).unwrap();
        let back: MarchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
