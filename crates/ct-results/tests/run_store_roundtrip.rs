use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use ct_fluids::{TableUnits, sample_table, sample_table_rows};
use ct_project::schema::{DiameterDef, FrictionDef, RunDef};
use ct_results::{
    ResultsError, RunManifest, RunStore, SeriesAxis, SeriesVariable, compute_run_id,
    extract_series,
};
use ct_solver::{MissingRecordPolicy, march};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn run_def() -> RunDef {
    RunDef {
        condensing_c: 40,
        evaporating_c: 18,
        mass_flow_kg_s: 0.0256,
        diameter: DiameterDef::Inch(0.094),
        friction: FrictionDef::Legacy,
        missing_records: MissingRecordPolicy::Abort,
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn save_list_load_roundtrip() {
    let project_dir = unique_temp_dir("ct_results_project");
    fs::create_dir_all(&project_dir).expect("failed to create temp project dir");
    let project_path = project_dir.join("project.yaml");

    let store = RunStore::for_project(&project_path).expect("failed to create run store");
    assert!(store.root_dir().ends_with(".capflow/runs"));

    let table = sample_table().unwrap();
    let run = run_def();
    let result = march(&table, run.to_run_parameters()).unwrap();
    let run_id = compute_run_id(
        &run,
        &sample_table_rows(),
        TableUnits::default(),
        ct_solver::SOLVER_VERSION,
    );

    assert!(!store.has_run(&run_id));
    let manifest = RunManifest::for_result(&run_id, "R410A capillary", &run, &result);
    store
        .save_run(&manifest, result.steps())
        .expect("failed to save run");
    assert!(store.has_run(&run_id));

    let runs = store.list_runs().expect("failed to list runs");
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].run_id, run_id);
    assert_eq!(runs[0].step_count, 23);

    let (loaded_manifest, loaded) = store.load_result(&run_id).expect("failed to load run");
    assert_eq!(loaded_manifest.run, run);
    assert_eq!(loaded.len(), result.len());
    assert!(close(loaded.total_length(), result.total_length()));
    assert_eq!(loaded.temperatures(), result.temperatures());
    for (a, b) in loaded.steps().iter().zip(result.steps()) {
        assert!(close(a.pressure, b.pressure));
        assert!(close(a.quality, b.quality));
    }

    let series = extract_series(&loaded, SeriesVariable::Length, SeriesAxis::Temperature);
    assert_eq!(series.first().map(|p| p.0), Some(40.0));
    assert_eq!(series.last().map(|p| p.0), Some(18.0));

    store.delete_run(&run_id).unwrap();
    assert!(!store.has_run(&run_id));
    let _ = fs::remove_dir_all(&project_dir);
}

#[test]
fn missing_run_is_reported() {
    let store = RunStore::new(unique_temp_dir("ct_results_empty")).unwrap();
    assert!(store.list_runs().unwrap().is_empty());
    assert!(matches!(
        store.load_manifest("nope"),
        Err(ResultsError::RunNotFound { .. })
    ));
    assert!(matches!(
        store.load_steps("nope"),
        Err(ResultsError::RunNotFound { .. })
    ));
}

#[test]
fn truncated_steps_are_detected() {
    let store = RunStore::new(unique_temp_dir("ct_results_corrupt")).unwrap();
    let table = sample_table().unwrap();
    let run = run_def();
    let result = march(&table, run.to_run_parameters()).unwrap();

    let manifest = RunManifest::for_result("corrupt", "R410A capillary", &run, &result);
    store.save_run(&manifest, &result.steps()[..5]).unwrap();

    assert!(matches!(
        store.load_result("corrupt"),
        Err(ResultsError::Corrupt { .. })
    ));
}
