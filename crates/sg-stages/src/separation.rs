//! Separation units: condensate knock-out, CO2 absorber and stripper.
//!
//! These are simplified stubs, not rigorous separations. The absorber's
//! bottom product carries only the absorbed CO2, and the stripper passes
//! its feed through unchanged.

use serde::{Deserialize, Serialize};
use sg_species::{ComponentVector, Species};

/// Removes a fraction of the water; everything else passes through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Condensate {
    pub h2o_removal_efficiency: f64,
}

impl Condensate {
    pub fn new(h2o_removal_efficiency: f64) -> Self {
        Self {
            h2o_removal_efficiency,
        }
    }

    pub fn outlet(&self, inlet: &ComponentVector) -> ComponentVector {
        let mut out = *inlet;
        out[Species::H2O] *= 1.0 - self.h2o_removal_efficiency;
        out
    }
}

/// Gas (top) and solvent (bottom) products of the absorber.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbsorberProducts {
    pub top: ComponentVector,
    pub bottom: ComponentVector,
}

/// Scrubs CO2 down to a target dry-basis mole percent in the top product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Absorber {
    pub target_dry_co2_percent: f64,
}

impl Absorber {
    pub fn new(target_dry_co2_percent: f64) -> Self {
        Self {
            target_dry_co2_percent,
        }
    }

    /// CO2 left in the gas to hit the target, never more than the inlet holds.
    pub fn retained_co2(&self, inlet: &ComponentVector) -> f64 {
        let inlet_co2 = inlet[Species::CO2];
        let target = self.target_dry_co2_percent / 100.0;
        if target >= 1.0 {
            return inlet_co2;
        }
        let non_co2_dry: f64 = inlet
            .iter()
            .filter(|(s, _)| s.is_dry() && *s != Species::CO2)
            .map(|(_, v)| v)
            .sum();
        let retained = target * non_co2_dry / (1.0 - target);
        retained.min(inlet_co2)
    }

    pub fn separate(&self, inlet: &ComponentVector) -> AbsorberProducts {
        let retained = self.retained_co2(inlet);
        let absorbed = (inlet[Species::CO2] - retained).max(0.0);
        AbsorberProducts {
            top: inlet.with(Species::CO2, retained),
            bottom: ComponentVector::zero().with(Species::CO2, absorbed),
        }
    }
}

/// Solvent regenerator; currently a pass-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stripper;

impl Stripper {
    pub fn outlet(&self, inlet: &ComponentVector) -> ComponentVector {
        *inlet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sg_core::numeric::{Tolerances, nearly_equal};

    fn lts_gas() -> ComponentVector {
        ComponentVector::from_pairs(&[
            (Species::H2, 70.0),
            (Species::N2, 23.0),
            (Species::CH4, 0.5),
            (Species::Ar, 0.3),
            (Species::CO, 0.2),
            (Species::CO2, 18.0),
            (Species::H2O, 40.0),
        ])
    }

    #[test]
    fn condensate_only_touches_water() {
        let out = Condensate::new(0.75).outlet(&lts_gas());
        assert_eq!(out[Species::H2O], 10.0);
        assert_eq!(out.with(Species::H2O, 40.0), lts_gas());
    }

    #[test]
    fn absorber_hits_dry_target() {
        let gas = lts_gas();
        let products = Absorber::new(0.1).separate(&gas);
        let top = products.top;
        let dry_co2 = top[Species::CO2] / top.dry_total();
        assert!(nearly_equal(dry_co2, 0.001, Tolerances::default()));
        assert!(nearly_equal(
            top[Species::CO2] + products.bottom[Species::CO2],
            gas[Species::CO2],
            Tolerances::default()
        ));
        assert_eq!(products.bottom.total(), products.bottom[Species::CO2]);
    }

    #[test]
    fn absorber_never_adds_co2() {
        let gas = lts_gas().with(Species::CO2, 0.01);
        let products = Absorber::new(5.0).separate(&gas);
        assert_eq!(products.top[Species::CO2], 0.01);
        assert_eq!(products.bottom[Species::CO2], 0.0);
    }

    #[test]
    fn absorber_full_target_keeps_everything() {
        let products = Absorber::new(100.0).separate(&lts_gas());
        assert_eq!(products.top, lts_gas());
        assert_eq!(products.bottom, ComponentVector::zero());
    }

    #[test]
    fn stripper_is_identity() {
        assert_eq!(Stripper.outlet(&lts_gas()), lts_gas());
    }
}
