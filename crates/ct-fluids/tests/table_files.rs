//! Table file loading tests.
//!
//! Files are written to the system temp directory and read back through the
//! extension-dispatching loader.

use ct_fluids::{
    EnthalpyUnit, FluidError, SaturationModel, TableUnits, load_table, sample_table_rows,
    write_csv,
};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

#[test]
fn csv_file_loads_into_si_table() {
    let path = temp_path("ct_fluids_sample.csv");
    std::fs::write(&path, write_csv(&sample_table_rows())).unwrap();

    let table = load_table(&path, TableUnits::default()).unwrap();
    assert_eq!(table.len(), 41);

    let rec = table.lookup(40).unwrap();
    assert_eq!(rec.temperature_c, 40);
    // 0.5 + 30 * 0.0525 MPa
    assert!((rec.pressure.value - 2.075e6).abs() < 1e-3);
    // 100 + 30 * 5 kJ/kg
    assert!((rec.enthalpy_liquid - 250_000.0).abs() < 1e-6);
    assert!((rec.enthalpy_vapor - 550_000.0).abs() < 1e-6);
}

#[test]
fn json_file_loads() {
    let path = temp_path("ct_fluids_sample.json");
    let rows = sample_table_rows();
    std::fs::write(&path, serde_json::to_string_pretty(&rows).unwrap()).unwrap();

    let table = load_table(&path, TableUnits::default()).unwrap();
    assert_eq!(table.temperature_range(), Some((10, 50)));
}

#[test]
fn yaml_file_with_si_liquid_enthalpy() {
    let path = temp_path("ct_fluids_si_hf.yaml");
    let yaml = "\
- temperature_c: 20
  pressure_mpa: 1.4
  enthalpy_liquid: 230000.0
  enthalpy_vapor_kj_kg: 425.0
  specific_volume_liquid: 0.00093
  specific_volume_vapor: 0.0175
  viscosity_liquid: 1.3e-4
  viscosity_vapor: 1.3e-5
";
    std::fs::write(&path, yaml).unwrap();

    let units = TableUnits {
        liquid_enthalpy: EnthalpyUnit::JoulePerKg,
    };
    let table = load_table(&path, units).unwrap();
    let rec = table.lookup(20).unwrap();
    assert_eq!(rec.enthalpy_liquid, 230_000.0);
    assert!((rec.enthalpy_vapor - 425_000.0).abs() < 1e-6);
}

#[test]
fn missing_file_is_io_error() {
    let path = temp_path("ct_fluids_does_not_exist.csv");
    let _ = std::fs::remove_file(&path);
    let err = load_table(&path, TableUnits::default()).unwrap_err();
    assert!(matches!(err, FluidError::Io { .. }));
}

#[test]
fn malformed_json_is_serde_error() {
    let path = temp_path("ct_fluids_bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = load_table(&path, TableUnits::default()).unwrap_err();
    assert!(matches!(err, FluidError::Serde { .. }));
}
