//! Conversion of project definitions into solver inputs.

use crate::ProjectResult;
use crate::schema::{DiameterDef, FrictionDef, Project, RunDef, TableDef};
use ct_components::FrictionCorrelation;
use ct_core::units::{Length, inch, kgps, m};
use ct_fluids::{PropertyTable, TableUnits, load_table};
use ct_solver::RunParameters;
use std::path::{Path, PathBuf};

impl DiameterDef {
    pub fn to_length(self) -> Length {
        match self {
            DiameterDef::Inch(v) => inch(v),
            DiameterDef::Meter(v) => m(v),
        }
    }
}

impl FrictionDef {
    pub fn to_correlation(self) -> FrictionCorrelation {
        match self {
            FrictionDef::Legacy => FrictionCorrelation::Legacy,
            FrictionDef::SwameeJain { roughness_m } => FrictionCorrelation::SwameeJain {
                roughness: m(roughness_m),
            },
        }
    }
}

impl RunDef {
    pub fn to_run_parameters(&self) -> RunParameters {
        RunParameters::new(
            self.condensing_c,
            self.evaporating_c,
            kgps(self.mass_flow_kg_s),
            self.diameter.to_length(),
        )
        .with_friction(self.friction.to_correlation())
        .with_missing_records(self.missing_records)
    }
}

impl TableDef {
    pub fn units(&self) -> TableUnits {
        TableUnits {
            liquid_enthalpy: self.liquid_enthalpy_unit,
        }
    }

    /// Table file location; relative paths resolve against the project file's directory.
    pub fn resolve_path(&self, project_path: &Path) -> PathBuf {
        let path = Path::new(&self.path);
        if path.is_absolute() {
            return path.to_path_buf();
        }
        project_path
            .parent()
            .map(|dir| dir.join(path))
            .unwrap_or_else(|| path.to_path_buf())
    }
}

/// Load the property table a project refers to.
pub fn load_project_table(project_path: &Path, project: &Project) -> ProjectResult<PropertyTable> {
    let table_path = project.table.resolve_path(project_path);
    Ok(load_table(&table_path, project.table.units())?)
}
