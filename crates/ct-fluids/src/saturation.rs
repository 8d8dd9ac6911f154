//! Saturation record definitions.

use crate::error::{FluidError, FluidResult};
use ct_core::constants::{J_PER_KJ, PA_PER_MPA};
use ct_core::numeric::blend;
use ct_core::units::{DegC, DynVisc, Pressure, SpecEnthalpy, SpecVolume, pa, pas};
use serde::{Deserialize, Serialize};

/// Unit of a tabulated enthalpy column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnthalpyUnit {
    /// kJ/kg, scaled by 1e3 on load.
    #[default]
    KiloJoulePerKg,
    /// Already SI.
    JoulePerKg,
}

impl EnthalpyUnit {
    /// Convert a stored value to J/kg.
    pub fn to_si(self, value: f64) -> SpecEnthalpy {
        match self {
            EnthalpyUnit::KiloJoulePerKg => value * J_PER_KJ,
            EnthalpyUnit::JoulePerKg => value,
        }
    }
}

/// Column unit conventions of a stored table.
///
/// Pressure is always MPa and vapor enthalpy always kJ/kg; only the liquid
/// enthalpy column varies between data sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableUnits {
    pub liquid_enthalpy: EnthalpyUnit,
}

/// One tabulated row in stored units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSaturationRow {
    pub temperature_c: DegC,
    /// Saturation pressure [MPa]
    pub pressure_mpa: f64,
    /// Saturated-liquid enthalpy, unit given by `TableUnits::liquid_enthalpy`
    pub enthalpy_liquid: f64,
    /// Saturated-vapor enthalpy [kJ/kg]
    pub enthalpy_vapor_kj_kg: f64,
    /// [m³/kg]
    pub specific_volume_liquid: f64,
    /// [m³/kg]
    pub specific_volume_vapor: f64,
    /// [Pa·s]
    pub viscosity_liquid: f64,
    /// [Pa·s]
    pub viscosity_vapor: f64,
}

impl RawSaturationRow {
    /// Convert to an SI record. Validation happens in `SaturationRecord::validate`.
    pub fn to_record(&self, units: TableUnits) -> SaturationRecord {
        SaturationRecord {
            temperature_c: self.temperature_c,
            pressure: pa(self.pressure_mpa * PA_PER_MPA),
            enthalpy_liquid: units.liquid_enthalpy.to_si(self.enthalpy_liquid),
            enthalpy_vapor: EnthalpyUnit::KiloJoulePerKg.to_si(self.enthalpy_vapor_kj_kg),
            specific_volume_liquid: self.specific_volume_liquid,
            specific_volume_vapor: self.specific_volume_vapor,
            viscosity_liquid: pas(self.viscosity_liquid),
            viscosity_vapor: pas(self.viscosity_vapor),
        }
    }
}

/// Saturation properties at one whole-degree temperature, SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationRecord {
    pub temperature_c: DegC,
    pub pressure: Pressure,
    pub enthalpy_liquid: SpecEnthalpy,
    pub enthalpy_vapor: SpecEnthalpy,
    pub specific_volume_liquid: SpecVolume,
    pub specific_volume_vapor: SpecVolume,
    pub viscosity_liquid: DynVisc,
    pub viscosity_vapor: DynVisc,
}

/// Homogeneous two-phase properties at a given quality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixtureProperties {
    pub quality: f64,
    pub specific_volume: SpecVolume,
    pub enthalpy: SpecEnthalpy,
    pub viscosity: DynVisc,
}

impl SaturationRecord {
    /// Check that every stored value is usable by the flow model.
    ///
    /// Pressure, specific volumes and viscosities must be finite and positive;
    /// enthalpies must be finite (their datum is arbitrary). The saturation
    /// curve relations (vg >= vf, hg >= hf) are reported by `is_physical`
    /// and not enforced here.
    pub fn validate(&self) -> FluidResult<()> {
        let t = self.temperature_c;
        let positive = [
            (self.pressure.value, "saturation pressure"),
            (self.specific_volume_liquid, "liquid specific volume"),
            (self.specific_volume_vapor, "vapor specific volume"),
            (self.viscosity_liquid.value, "liquid viscosity"),
            (self.viscosity_vapor.value, "vapor viscosity"),
        ];
        for (value, what) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(FluidError::NonPhysical {
                    temperature_c: t,
                    what,
                });
            }
        }

        let finite = [
            (self.enthalpy_liquid, "liquid enthalpy"),
            (self.enthalpy_vapor, "vapor enthalpy"),
        ];
        for (value, what) in finite {
            if !value.is_finite() {
                return Err(FluidError::NonPhysical {
                    temperature_c: t,
                    what,
                });
            }
        }

        Ok(())
    }

    /// vg >= vf and hg >= hf.
    pub fn is_physical(&self) -> bool {
        self.specific_volume_vapor >= self.specific_volume_liquid
            && self.enthalpy_vapor >= self.enthalpy_liquid
    }

    /// Latent heat hg - hf [J/kg].
    pub fn latent_heat(&self) -> SpecEnthalpy {
        self.enthalpy_vapor - self.enthalpy_liquid
    }

    /// Volume change on evaporation vg - vf [m³/kg].
    pub fn volume_change(&self) -> SpecVolume {
        self.specific_volume_vapor - self.specific_volume_liquid
    }

    /// Quality-weighted blend of the liquid and vapor properties.
    ///
    /// `quality` is taken as given; callers are responsible for keeping it in [0, 1].
    pub fn at_quality(&self, quality: f64) -> MixtureProperties {
        MixtureProperties {
            quality,
            specific_volume: blend(
                self.specific_volume_liquid,
                self.specific_volume_vapor,
                quality,
            ),
            enthalpy: blend(self.enthalpy_liquid, self.enthalpy_vapor, quality),
            viscosity: pas(blend(
                self.viscosity_liquid.value,
                self.viscosity_vapor.value,
                quality,
            )),
        }
    }
}
