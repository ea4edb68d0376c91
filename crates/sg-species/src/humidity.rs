//! Humid air: water carried by ambient air at a given humidity.
//!
//! Saturation pressure from the Magnus-type correlation
//! `Psat[hPa] = 6.112 · exp(17.67·T / (T + 243.5))`, T in °C.

use crate::species::Species;
use crate::vector::ComponentVector;
use serde::Serialize;
use sg_core::constants::ATM_HPA;

const MAGNUS_A_HPA: f64 = 6.112;
const MAGNUS_B: f64 = 17.67;
const MAGNUS_C_DEGC: f64 = 243.5;

/// Water loading of an air stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HumidAir {
    pub saturation_pressure_hpa: f64,
    pub vapor_pressure_hpa: f64,
    /// Mole fraction of water in the humid air.
    pub water_mole_fraction: f64,
    /// Water carried along with the dry air [kgmol/hr].
    pub water_moles: f64,
}

pub fn saturation_pressure_hpa(t_c: f64) -> f64 {
    MAGNUS_A_HPA * (MAGNUS_B * t_c / (t_c + MAGNUS_C_DEGC)).exp()
}

impl HumidAir {
    /// Water carried by `dry_moles` kgmol/hr of air at `relative_humidity_pct`
    /// and `ambient_c`, at one standard atmosphere.
    ///
    /// No clamping: RH outside 0..=100 or a saturation pressure above one
    /// atmosphere give non-physical results that the caller must reject.
    pub fn at(dry_moles: f64, relative_humidity_pct: f64, ambient_c: f64) -> Self {
        let saturation_pressure_hpa = saturation_pressure_hpa(ambient_c);
        let vapor_pressure_hpa = relative_humidity_pct / 100.0 * saturation_pressure_hpa;
        let water_mole_fraction = vapor_pressure_hpa / ATM_HPA;
        let water_moles = dry_moles * water_mole_fraction / (1.0 - water_mole_fraction);
        Self {
            saturation_pressure_hpa,
            vapor_pressure_hpa,
            water_mole_fraction,
            water_moles,
        }
    }
}

/// Dry air vector plus the water it carries.
pub fn humidify(
    dry_air: &ComponentVector,
    relative_humidity_pct: f64,
    ambient_c: f64,
) -> (ComponentVector, HumidAir) {
    let humid = HumidAir::at(dry_air.dry_total(), relative_humidity_pct, ambient_c);
    let mut wet = *dry_air;
    wet[Species::H2O] += humid.water_moles;
    (wet, humid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sg_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn saturation_pressure_at_reference_points() {
        assert!(nearly_equal(
            saturation_pressure_hpa(0.0),
            6.112,
            Tolerances::default()
        ));
        // ~42.4 hPa at 30 °C
        let p30 = saturation_pressure_hpa(30.0);
        assert!(p30 > 42.0 && p30 < 42.8, "{p30}");
    }

    #[test]
    fn dry_air_carries_no_water() {
        let humid = HumidAir::at(100.0, 0.0, 30.0);
        assert_eq!(humid.water_moles, 0.0);
        assert_eq!(humid.water_mole_fraction, 0.0);
    }

    #[test]
    fn water_fraction_of_humid_air_matches_vapor_pressure() {
        let humid = HumidAir::at(100.0, 60.0, 30.0);
        let y = humid.water_moles / (100.0 + humid.water_moles);
        assert!(nearly_equal(
            y,
            humid.vapor_pressure_hpa / ATM_HPA,
            Tolerances {
                abs: 1e-12,
                rel: 1e-9
            }
        ));
    }

    #[test]
    fn humidify_only_adds_water() {
        let dry = ComponentVector::from_pairs(&[
            (Species::N2, 78.08),
            (Species::O2, 20.92),
            (Species::Ar, 0.97),
            (Species::CO2, 0.03),
        ]);
        let (wet, humid) = humidify(&dry, 60.0, 30.0);
        for species in Species::ALL {
            if species == Species::H2O {
                assert_eq!(wet[species], humid.water_moles);
            } else {
                assert_eq!(wet[species], dry[species]);
            }
        }
        assert!(humid.water_moles > 0.0);
    }
}
