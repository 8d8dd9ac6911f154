//! Per-step series extraction for external plotting.

use crate::{ResultsError, ResultsResult};
use ct_solver::{MarchResult, MarchStep};
use std::fmt::Write;
use std::str::FromStr;

/// Quantity recorded at each marching step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesVariable {
    Length,
    Velocity,
    Pressure,
    Reynolds,
    SpecificVolume,
    SpecificEnthalpy,
    Viscosity,
    Quality,
    FrictionFactor,
}

impl SeriesVariable {
    pub const ALL: [SeriesVariable; 9] = [
        SeriesVariable::Length,
        SeriesVariable::Velocity,
        SeriesVariable::Pressure,
        SeriesVariable::Reynolds,
        SeriesVariable::SpecificVolume,
        SeriesVariable::SpecificEnthalpy,
        SeriesVariable::Viscosity,
        SeriesVariable::Quality,
        SeriesVariable::FrictionFactor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SeriesVariable::Length => "length",
            SeriesVariable::Velocity => "velocity",
            SeriesVariable::Pressure => "pressure",
            SeriesVariable::Reynolds => "reynolds",
            SeriesVariable::SpecificVolume => "specific_volume",
            SeriesVariable::SpecificEnthalpy => "specific_enthalpy",
            SeriesVariable::Viscosity => "viscosity",
            SeriesVariable::Quality => "quality",
            SeriesVariable::FrictionFactor => "friction_factor",
        }
    }

    /// Column label with SI unit.
    pub fn label(self) -> &'static str {
        match self {
            SeriesVariable::Length => "length_m",
            SeriesVariable::Velocity => "velocity_m_s",
            SeriesVariable::Pressure => "pressure_pa",
            SeriesVariable::Reynolds => "reynolds",
            SeriesVariable::SpecificVolume => "specific_volume_m3_kg",
            SeriesVariable::SpecificEnthalpy => "specific_enthalpy_j_kg",
            SeriesVariable::Viscosity => "viscosity_pa_s",
            SeriesVariable::Quality => "quality",
            SeriesVariable::FrictionFactor => "friction_factor",
        }
    }

    fn value(self, step: &MarchStep) -> f64 {
        match self {
            SeriesVariable::Length => step.length,
            SeriesVariable::Velocity => step.velocity,
            SeriesVariable::Pressure => step.pressure,
            SeriesVariable::Reynolds => step.reynolds,
            SeriesVariable::SpecificVolume => step.specific_volume,
            SeriesVariable::SpecificEnthalpy => step.specific_enthalpy,
            SeriesVariable::Viscosity => step.viscosity,
            SeriesVariable::Quality => step.quality,
            SeriesVariable::FrictionFactor => step.friction_factor,
        }
    }
}

impl FromStr for SeriesVariable {
    type Err = ResultsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        SeriesVariable::ALL
            .into_iter()
            .find(|v| v.name() == key)
            .ok_or_else(|| ResultsError::UnknownVariable {
                name: s.to_string(),
            })
    }
}

/// Independent axis of an exported series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesAxis {
    #[default]
    Temperature,
    Length,
}

impl SeriesAxis {
    pub fn label(self) -> &'static str {
        match self {
            SeriesAxis::Temperature => "temperature_c",
            SeriesAxis::Length => "length_m",
        }
    }
}

impl FromStr for SeriesAxis {
    type Err = ResultsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "temperature" | "temp" => Ok(SeriesAxis::Temperature),
            "length" => Ok(SeriesAxis::Length),
            _ => Err(ResultsError::UnknownVariable {
                name: s.to_string(),
            }),
        }
    }
}

/// `(x, y)` pairs in marching order.
pub fn extract_series(
    result: &MarchResult,
    variable: SeriesVariable,
    axis: SeriesAxis,
) -> Vec<(f64, f64)> {
    result
        .steps()
        .iter()
        .map(|step| {
            let x = match axis {
                SeriesAxis::Temperature => f64::from(step.temperature_c),
                SeriesAxis::Length => step.length,
            };
            (x, variable.value(step))
        })
        .collect()
}

/// Two-column CSV with a header row.
pub fn series_csv(
    points: &[(f64, f64)],
    variable: SeriesVariable,
    axis: SeriesAxis,
) -> ResultsResult<String> {
    let mut csv = String::new();
    writeln!(csv, "{},{}", axis.label(), variable.label())?;
    for (x, y) in points {
        writeln!(csv, "{x},{y}")?;
    }
    Ok(csv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_solver::InletState;

    fn result() -> MarchResult {
        let inlet = InletState {
            temperature_c: 40,
            pressure: 2.075e6,
            specific_enthalpy: 250_000.0,
            specific_volume: 0.0011,
            velocity: 6.29,
            reynolds: 8.3e5,
            friction_factor: 0.0076,
            mass_flux: 5717.9,
        };
        let step = |t: i32, length: f64, quality: f64| MarchStep {
            temperature_c: t,
            quality,
            length,
            length_increment: 0.0,
            velocity: 6.29,
            pressure: 2.0e6,
            reynolds: 8.3e5,
            specific_volume: 0.0011,
            specific_enthalpy: 250_000.0,
            viscosity: 1.65e-5,
            friction_factor: 0.0076,
        };
        MarchResult::new(inlet, vec![step(40, 0.0, 0.0), step(39, 0.5, 0.02)], vec![])
    }

    #[test]
    fn parses_variable_names() {
        assert_eq!(
            "specific-volume".parse::<SeriesVariable>().unwrap(),
            SeriesVariable::SpecificVolume
        );
        assert_eq!(
            "Quality".parse::<SeriesVariable>().unwrap(),
            SeriesVariable::Quality
        );
        assert!("density".parse::<SeriesVariable>().is_err());
        for v in SeriesVariable::ALL {
            assert_eq!(v.name().parse::<SeriesVariable>().unwrap(), v);
        }
    }

    #[test]
    fn extracts_against_either_axis() {
        let r = result();
        let by_temp = extract_series(&r, SeriesVariable::Quality, SeriesAxis::Temperature);
        assert_eq!(by_temp, vec![(40.0, 0.0), (39.0, 0.02)]);

        let by_length = extract_series(&r, SeriesVariable::Quality, SeriesAxis::Length);
        assert_eq!(by_length, vec![(0.0, 0.0), (0.5, 0.02)]);
    }

    #[test]
    fn csv_has_header_and_rows() {
        let r = result();
        let points = extract_series(&r, SeriesVariable::Length, SeriesAxis::Temperature);
        let csv = series_csv(&points, SeriesVariable::Length, SeriesAxis::Temperature).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "temperature_c,length_m");
        assert_eq!(lines[1], "40,0");
        assert_eq!(lines[2], "39,0.5");
    }
}
