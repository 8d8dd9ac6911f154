//! Project runs with the on-disk cache.

use crate::error::CliResult;
use ct_fluids::{PropertyTable, load_rows};
use ct_project::Project;
use ct_results::{RunManifest, RunStore, compute_run_id};
use ct_solver::{MarchResult, SOLVER_VERSION, march};
use std::path::Path;
use tracing::{info, warn};

pub struct RunResponse {
    pub manifest: RunManifest,
    pub result: MarchResult,
    pub loaded_from_cache: bool,
}

/// Size the tube described by a project, reusing a cached run with the same id.
pub fn run_project(project_path: &Path, use_cache: bool) -> CliResult<RunResponse> {
    let project = ct_project::load_project(project_path)?;
    let units = project.table.units();
    let rows = load_rows(&project.table.resolve_path(project_path))?;
    let run_id = compute_run_id(&project.run, &rows, units, SOLVER_VERSION);

    let store = RunStore::for_project(project_path)?;
    if use_cache && store.has_run(&run_id) {
        info!(run_id = %run_id, "loading cached run");
        let (manifest, result) = store.load_result(&run_id)?;
        return Ok(RunResponse {
            manifest,
            result,
            loaded_from_cache: true,
        });
    }

    let table = PropertyTable::from_raw_rows(&rows, units)?;
    let result = execute(&project, &table)?;
    let manifest = RunManifest::for_result(&run_id, &project.name, &project.run, &result);
    store.save_run(&manifest, result.steps())?;
    info!(run_id = %run_id, "run saved");

    Ok(RunResponse {
        manifest,
        result,
        loaded_from_cache: false,
    })
}

fn execute(project: &Project, table: &PropertyTable) -> CliResult<MarchResult> {
    if !table.is_monotonic() {
        warn!("saturation pressure is not monotonic across the table");
    }
    Ok(march(table, project.run.to_run_parameters())?)
}

pub fn list_runs(project_path: &Path) -> CliResult<Vec<RunManifest>> {
    let store = RunStore::for_project(project_path)?;
    Ok(store.list_runs()?)
}

pub fn load_run(project_path: &Path, run_id: &str) -> CliResult<(RunManifest, MarchResult)> {
    let store = RunStore::for_project(project_path)?;
    Ok(store.load_result(run_id)?)
}
