//! Result data types.

use ct_core::units::DegC;
use ct_project::schema::RunDef;
use ct_solver::{InletState, MarchResult};
use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    pub run_id: RunId,
    pub project_name: String,
    pub timestamp: String,
    pub solver_version: String,
    pub run: RunDef,
    pub inlet: InletState,
    pub total_length_m: f64,
    pub step_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_c: Vec<DegC>,
}

impl RunManifest {
    /// Manifest for a finished sweep, stamped with the current UTC time.
    pub fn for_result(
        run_id: &str,
        project_name: &str,
        run: &RunDef,
        result: &MarchResult,
    ) -> Self {
        Self {
            run_id: run_id.to_string(),
            project_name: project_name.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            solver_version: ct_solver::SOLVER_VERSION.to_string(),
            run: run.clone(),
            inlet: *result.inlet(),
            total_length_m: result.total_length(),
            step_count: result.len(),
            skipped_c: result.skipped().to_vec(),
        }
    }
}
