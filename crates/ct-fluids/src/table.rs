//! Ordered saturation property table.

use crate::error::{FluidError, FluidResult};
use crate::model::SaturationModel;
use crate::saturation::{RawSaturationRow, SaturationRecord, TableUnits};
use ct_core::DegC;
use std::collections::BTreeMap;

/// Saturation records keyed by whole-degree Celsius temperature.
///
/// Immutable once built. All records are in SI units and have passed
/// `SaturationRecord::validate`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyTable {
    records: BTreeMap<DegC, SaturationRecord>,
}

impl PropertyTable {
    /// Build a table from SI records.
    ///
    /// Rejects duplicate temperatures and records failing validation.
    pub fn from_records<I>(records: I) -> FluidResult<Self>
    where
        I: IntoIterator<Item = SaturationRecord>,
    {
        let mut map = BTreeMap::new();
        for record in records {
            record.validate()?;
            let t = record.temperature_c;
            if map.insert(t, record).is_some() {
                return Err(FluidError::DuplicateTemperature { temperature_c: t });
            }
        }
        Ok(Self { records: map })
    }

    /// Build a table from rows in stored units, converting to SI once.
    pub fn from_raw_rows(rows: &[RawSaturationRow], units: TableUnits) -> FluidResult<Self> {
        Self::from_records(rows.iter().map(|row| row.to_record(units)))
    }

    /// Exact-match lookup.
    pub fn get(&self, temperature_c: DegC) -> Option<&SaturationRecord> {
        self.records.get(&temperature_c)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in ascending temperature order.
    pub fn iter(&self) -> impl Iterator<Item = &SaturationRecord> {
        self.records.values()
    }

    /// Tabulated temperatures in ascending order.
    pub fn temperatures(&self) -> impl Iterator<Item = DegC> + '_ {
        self.records.keys().copied()
    }

    /// Lowest and highest tabulated temperature.
    pub fn temperature_range(&self) -> Option<(DegC, DegC)> {
        let lo = self.records.keys().next()?;
        let hi = self.records.keys().next_back()?;
        Some((*lo, *hi))
    }

    /// Temperatures in `[low, high]` with no record.
    pub fn missing_in(&self, low: DegC, high: DegC) -> Vec<DegC> {
        (low..=high).filter(|t| !self.records.contains_key(t)).collect()
    }

    /// Saturation pressure strictly increases with temperature across the table.
    pub fn is_monotonic(&self) -> bool {
        self.records
            .values()
            .zip(self.records.values().skip(1))
            .all(|(lower, upper)| upper.pressure.value > lower.pressure.value)
    }

    /// Temperatures whose rows break vg >= vf or hg >= hf.
    pub fn non_physical_rows(&self) -> Vec<DegC> {
        self.records
            .values()
            .filter(|r| !r.is_physical())
            .map(|r| r.temperature_c)
            .collect()
    }
}

impl SaturationModel for PropertyTable {
    fn lookup(&self, temperature_c: DegC) -> FluidResult<SaturationRecord> {
        self.get(temperature_c)
            .copied()
            .ok_or(FluidError::NotFound { temperature_c })
    }

    fn contains(&self, temperature_c: DegC) -> bool {
        self.records.contains_key(&temperature_c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(t: DegC, p_mpa: f64) -> RawSaturationRow {
        RawSaturationRow {
            temperature_c: t,
            pressure_mpa: p_mpa,
            enthalpy_liquid: 200.0 + t as f64,
            enthalpy_vapor_kj_kg: 500.0 + t as f64,
            specific_volume_liquid: 0.001,
            specific_volume_vapor: 0.03,
            viscosity_liquid: 1.5e-5,
            viscosity_vapor: 1.0e-5,
        }
    }

    fn table() -> PropertyTable {
        let rows = vec![row(20, 1.4), row(21, 1.45), row(22, 1.5)];
        PropertyTable::from_raw_rows(&rows, TableUnits::default()).unwrap()
    }

    #[test]
    fn lookup_returns_requested_key() {
        let t = table();
        for key in 20..=22 {
            assert_eq!(t.lookup(key).unwrap().temperature_c, key);
        }
    }

    #[test]
    fn lookup_missing_is_not_found() {
        let t = table();
        assert_eq!(
            t.lookup(23).unwrap_err(),
            FluidError::NotFound { temperature_c: 23 }
        );
        assert!(!t.contains(19));
    }

    #[test]
    fn pressures_converted_once() {
        let t = table();
        assert!((t.lookup(21).unwrap().pressure.value - 1.45e6).abs() < 1e-6);
    }

    #[test]
    fn rejects_duplicate_temperature() {
        let rows = vec![row(20, 1.4), row(20, 1.41)];
        let err = PropertyTable::from_raw_rows(&rows, TableUnits::default()).unwrap_err();
        assert_eq!(err, FluidError::DuplicateTemperature { temperature_c: 20 });
    }

    #[test]
    fn rejects_negative_pressure() {
        let rows = vec![row(20, -1.0)];
        assert!(PropertyTable::from_raw_rows(&rows, TableUnits::default()).is_err());
    }

    #[test]
    fn unordered_input_is_sorted() {
        let rows = vec![row(22, 1.5), row(20, 1.4), row(21, 1.45)];
        let t = PropertyTable::from_raw_rows(&rows, TableUnits::default()).unwrap();
        let temps: Vec<DegC> = t.temperatures().collect();
        assert_eq!(temps, vec![20, 21, 22]);
        assert_eq!(t.temperature_range(), Some((20, 22)));
    }

    #[test]
    fn monotonic_detection() {
        assert!(table().is_monotonic());

        let rows = vec![row(20, 1.4), row(21, 1.3)];
        let t = PropertyTable::from_raw_rows(&rows, TableUnits::default()).unwrap();
        assert!(!t.is_monotonic());
    }

    #[test]
    fn reports_gaps() {
        let rows = vec![row(20, 1.4), row(22, 1.5)];
        let t = PropertyTable::from_raw_rows(&rows, TableUnits::default()).unwrap();
        assert_eq!(t.missing_in(19, 22), vec![19, 21]);
    }

    #[test]
    fn empty_table() {
        let t = PropertyTable::default();
        assert!(t.is_empty());
        assert_eq!(t.temperature_range(), None);
        assert!(t.is_monotonic());
    }
}
