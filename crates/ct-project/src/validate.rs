//! Project validation logic.

use crate::schema::{DiameterDef, FrictionDef, LATEST_VERSION, Project, RunDef, TableDef};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing value: {field}")]
    Missing { field: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    if project.name.trim().is_empty() {
        return Err(ValidationError::Missing {
            field: "name".to_string(),
        });
    }

    validate_run(&project.run)?;
    validate_table(&project.table)?;
    Ok(())
}

fn validate_run(run: &RunDef) -> Result<(), ValidationError> {
    positive("run.mass_flow_kg_s", run.mass_flow_kg_s)?;

    match run.diameter {
        DiameterDef::Inch(v) => positive("run.diameter.inch", v)?,
        DiameterDef::Meter(v) => positive("run.diameter.meter", v)?,
    }

    if let FrictionDef::SwameeJain { roughness_m } = run.friction
        && (!roughness_m.is_finite() || roughness_m < 0.0)
    {
        return Err(ValidationError::InvalidValue {
            field: "run.friction.roughness_m".to_string(),
            value: roughness_m.to_string(),
            reason: "must be finite and non-negative".to_string(),
        });
    }

    if run.condensing_c < run.evaporating_c {
        return Err(ValidationError::InvalidValue {
            field: "run.condensing_c".to_string(),
            value: run.condensing_c.to_string(),
            reason: format!(
                "must not be below evaporating_c ({})",
                run.evaporating_c
            ),
        });
    }

    Ok(())
}

fn validate_table(table: &TableDef) -> Result<(), ValidationError> {
    if table.path.trim().is_empty() {
        return Err(ValidationError::Missing {
            field: "table.path".to_string(),
        });
    }
    Ok(())
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be finite and positive".to_string(),
        })
    }
}
