//! Content-based hashing for run IDs.

use ct_fluids::{RawSaturationRow, TableUnits};
use ct_project::schema::RunDef;
use sha2::{Digest, Sha256};

/// Run id from everything that determines a sweep: run inputs, the table
/// rows as loaded, their unit convention and the solver version.
pub fn compute_run_id(
    run: &RunDef,
    rows: &[RawSaturationRow],
    units: TableUnits,
    solver_version: &str,
) -> String {
    let mut hasher = Sha256::new();

    let run_json = serde_json::to_string(run).unwrap_or_default();
    hasher.update(run_json.as_bytes());

    let rows_json = serde_json::to_string(rows).unwrap_or_default();
    hasher.update(rows_json.as_bytes());

    let units_json = serde_json::to_string(&units).unwrap_or_default();
    hasher.update(units_json.as_bytes());

    hasher.update(solver_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_fluids::{EnthalpyUnit, sample_table_rows};
    use ct_project::schema::{DiameterDef, FrictionDef};
    use ct_solver::MissingRecordPolicy;

    fn run() -> RunDef {
        RunDef {
            condensing_c: 40,
            evaporating_c: 18,
            mass_flow_kg_s: 0.0256,
            diameter: DiameterDef::Inch(0.094),
            friction: FrictionDef::Legacy,
            missing_records: MissingRecordPolicy::Abort,
        }
    }

    #[test]
    fn hash_stability() {
        let rows = sample_table_rows();
        let hash1 = compute_run_id(&run(), &rows, TableUnits::default(), "v1");
        let hash2 = compute_run_id(&run(), &rows, TableUnits::default(), "v1");
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn hash_differs_for_different_inputs() {
        let rows = sample_table_rows();
        let base = compute_run_id(&run(), &rows, TableUnits::default(), "v1");

        let mut other = run();
        other.evaporating_c = 17;
        assert_ne!(base, compute_run_id(&other, &rows, TableUnits::default(), "v1"));

        let mut edited = rows.clone();
        edited[0].pressure_mpa += 0.01;
        assert_ne!(base, compute_run_id(&run(), &edited, TableUnits::default(), "v1"));

        let si = TableUnits {
            liquid_enthalpy: EnthalpyUnit::JoulePerKg,
        };
        assert_ne!(base, compute_run_id(&run(), &rows, si, "v1"));
        assert_ne!(base, compute_run_id(&run(), &rows, TableUnits::default(), "v2"));
    }
}
