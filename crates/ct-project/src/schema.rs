//! Project schema definitions.

use ct_fluids::EnthalpyUnit;
use ct_solver::MissingRecordPolicy;
use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub run: RunDef,
    pub table: TableDef,
}

/// Sizing run inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunDef {
    pub condensing_c: i32,
    pub evaporating_c: i32,
    pub mass_flow_kg_s: f64,
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub diameter: DiameterDef,
    #[serde(default)]
    pub friction: FrictionDef,
    #[serde(default)]
    pub missing_records: MissingRecordPolicy,
}

/// Tube internal diameter, `{ inch: 0.094 }` or `{ meter: 0.0023876 }`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum DiameterDef {
    Inch(f64),
    Meter(f64),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "type")]
pub enum FrictionDef {
    #[default]
    Legacy,
    SwameeJain {
        roughness_m: f64,
    },
}

/// Saturation property table reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableDef {
    /// CSV, JSON or YAML file, relative to the project file.
    pub path: String,
    #[serde(default)]
    pub liquid_enthalpy_unit: EnthalpyUnit,
}
