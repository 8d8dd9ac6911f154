//! Saturation property source trait.

use crate::error::FluidResult;
use crate::saturation::SaturationRecord;
use ct_core::DegC;

/// Source of saturation properties keyed by whole-degree temperature.
///
/// Lookups are exact-match: implementations must not interpolate between
/// tabulated temperatures, and the returned record's `temperature_c` must
/// equal the requested key.
pub trait SaturationModel {
    /// Saturation record at `temperature_c`, or `FluidError::NotFound`.
    fn lookup(&self, temperature_c: DegC) -> FluidResult<SaturationRecord>;

    /// Whether a record exists for `temperature_c`.
    fn contains(&self, temperature_c: DegC) -> bool {
        self.lookup(temperature_c).is_ok()
    }
}
