// sg-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, TemperatureInterval as UomTemperatureInterval,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type TempInterval = UomTemperatureInterval;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn delta_degc(v: f64) -> TempInterval {
    use uom::si::temperature_interval::degree_celsius;
    TempInterval::new::<degree_celsius>(v)
}

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

/// Absolute pressure from a gauge reading in kg/cm²g.
#[inline]
pub fn kgf_cm2_gauge(v: f64) -> Pressure {
    pa((v + constants::ATM_KGF_CM2) * constants::KGF_CM2_PA)
}

pub mod constants {
    /// Ideal-gas normal molar volume, Nm³ per kgmol.
    pub const NM3_PER_KGMOL: f64 = 22.414;

    /// Molar mass used to convert steam mass flow to kgmol.
    pub const WATER_KG_PER_KGMOL: f64 = 18.0;

    pub const KG_PER_TONNE: f64 = 1000.0;

    pub const HOURS_PER_DAY: f64 = 24.0;

    /// Standard atmosphere in hPa (mbar).
    pub const ATM_HPA: f64 = 1013.25;

    /// Standard atmosphere in kg/cm².
    pub const ATM_KGF_CM2: f64 = 1.033_227;

    pub const KGF_CM2_PA: f64 = 98_066.5;

    #[inline]
    pub fn nm3_to_kgmol(nm3: f64) -> f64 {
        nm3 / NM3_PER_KGMOL
    }

    #[inline]
    pub fn kgmol_to_nm3(kgmol: f64) -> f64 {
        kgmol * NM3_PER_KGMOL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn constructors_smoke() {
        let _t = degc(25.0);
        let _dt = delta_degc(10.0);
        let _p = pa(101_325.0);
    }

    #[test]
    fn zero_gauge_is_one_atmosphere() {
        let p = kgf_cm2_gauge(0.0);
        let tol = Tolerances {
            abs: 1.0,
            rel: 1e-5,
        };
        assert!(nearly_equal(p.value, 101_325.0, tol));
    }

    #[test]
    fn molar_volume_round_trip() {
        let kgmol = constants::nm3_to_kgmol(22_414.0);
        assert!(nearly_equal(kgmol, 1000.0, Tolerances::default()));
        assert!(nearly_equal(
            constants::kgmol_to_nm3(kgmol),
            22_414.0,
            Tolerances::default()
        ));
    }
}
