//! ct-fluids: saturation property data for capflow.
//!
//! Provides:
//! - Per-temperature saturation records in SI units
//! - An ordered property table with exact-match lookup
//! - Quality-weighted two-phase property blending
//! - Table loaders for the tabulated CSV layout and for JSON/YAML
//! - A synthetic, linearly spaced sample table
//!
//! # Architecture
//!
//! Consumers depend on the `SaturationModel` trait rather than on the table
//! type, so the marching integrator only ever sees SI-unit records. Unit
//! conversion from the stored column units happens exactly once, when a
//! `PropertyTable` is built from raw rows.
//!
//! # Example
//!
//! ```no_run
//! use ct_fluids::{SaturationModel, TableUnits, load_table};
//!
//! let table = load_table("R410.csv".as_ref(), TableUnits::default()).unwrap();
//! let rec = table.lookup(40).unwrap();
//! println!("p_sat(40 °C) = {} Pa", rec.pressure.value);
//! ```

pub mod error;
pub mod loader;
pub mod model;
pub mod sample;
pub mod saturation;
pub mod table;

// Re-exports for ergonomics
pub use error::{FluidError, FluidResult};
pub use loader::{TableFormat, load_rows, load_table, parse_csv, write_csv};
pub use model::SaturationModel;
pub use sample::{sample_table, sample_table_rows};
pub use saturation::{
    EnthalpyUnit, MixtureProperties, RawSaturationRow, SaturationRecord, TableUnits,
};
pub use table::PropertyTable;
