// ct-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, DynamicViscosity as UomDynamicViscosity, Length as UomLength,
    MassRate as UomMassRate, Pressure as UomPressure,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type MassRate = UomMassRate;
pub type Pressure = UomPressure;

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific volume [m³/kg].
pub type SpecVolume = f64;

/// Mass flux [kg/(m²·s)].
pub type MassFlux = f64;

/// Saturation temperature key [°C]. Property tables are tabulated per whole degree.
pub type DegC = i32;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn inch(v: f64) -> Length {
    use uom::si::length::inch;
    Length::new::<inch>(v)
}

#[inline]
pub fn pas(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

/// Circular cross-section for an internal diameter.
#[inline]
pub fn circle_area(diameter: Length) -> Area {
    use uom::si::area::square_meter;
    let d = diameter.value;
    Area::new::<square_meter>(std::f64::consts::PI * d * d / 4.0)
}

pub mod constants {
    /// Conversion factor for tabulated pressures (MPa -> Pa).
    pub const PA_PER_MPA: f64 = 1.0e6;

    /// Conversion factor for tabulated enthalpies (kJ/kg -> J/kg).
    pub const J_PER_KJ: f64 = 1.0e3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _mdot = kgps(0.0256);
        let _l = m(2.0);
        let _mu = pas(1.5e-5);
    }

    #[test]
    fn inch_to_meter() {
        assert!((inch(0.094).value - 0.0023876).abs() < 1e-12);
    }

    #[test]
    fn area_of_capillary_bore() {
        let area = circle_area(m(0.0023876));
        assert!((area.value - 4.477e-6).abs() < 1e-9);
    }
}
