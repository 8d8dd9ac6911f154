//! Synthetic saturation table.
//!
//! Linearly spaced placeholder data covering 10..=50 °C, written out when no
//! measured table is available. The values follow a physically monotonic
//! curve (pressure rises with temperature, vg >> vf, hg > hf) but are not
//! real refrigerant properties.

use crate::error::FluidResult;
use crate::saturation::{RawSaturationRow, TableUnits};
use crate::table::PropertyTable;
use ct_core::DegC;

pub const SAMPLE_FIRST_C: DegC = 10;
pub const SAMPLE_LAST_C: DegC = 50;

/// `n` evenly spaced values from `start` to `stop`, both ends included.
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }
    let step = (stop - start) / (n - 1) as f64;
    let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
    if let Some(last) = values.last_mut() {
        *last = stop;
    }
    values
}

/// Sample rows in stored units (liquid enthalpy in kJ/kg).
pub fn sample_table_rows() -> Vec<RawSaturationRow> {
    let n = (SAMPLE_LAST_C - SAMPLE_FIRST_C + 1) as usize;
    let p = linspace(0.5, 2.6, n);
    let hf = linspace(100.0, 300.0, n);
    let hg = linspace(400.0, 600.0, n);
    let vf = linspace(0.0008, 0.0012, n);
    let vg = linspace(0.02, 0.04, n);
    let muf = linspace(1.2e-5, 1.8e-5, n);
    let mug = linspace(9e-6, 1.1e-5, n);

    (SAMPLE_FIRST_C..=SAMPLE_LAST_C)
        .enumerate()
        .map(|(i, t)| RawSaturationRow {
            temperature_c: t,
            pressure_mpa: p[i],
            enthalpy_liquid: hf[i],
            enthalpy_vapor_kj_kg: hg[i],
            specific_volume_liquid: vf[i],
            specific_volume_vapor: vg[i],
            viscosity_liquid: muf[i],
            viscosity_vapor: mug[i],
        })
        .collect()
}

/// Sample rows converted into a table.
pub fn sample_table() -> FluidResult<PropertyTable> {
    PropertyTable::from_raw_rows(&sample_table_rows(), TableUnits::default())
}
