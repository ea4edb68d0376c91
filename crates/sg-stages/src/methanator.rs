//! Methanator: converts residual carbon oxides back to methane.

use crate::traits::{Stage, StageId};
use sg_species::reaction::{CO2_METHANATION, CO_METHANATION};
use sg_species::{ComponentVector, Species};

/// CO + 3H2 → CH4 + H2O and CO2 + 4H2 → CH4 + 2H2O.
///
/// Both extents are taken from the untouched inlet and applied to one
/// accumulator. Hydrogen is not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Methanator {
    pub co_conversion: f64,
    pub co2_conversion: f64,
}

impl Methanator {
    pub fn new(co_conversion: f64, co2_conversion: f64) -> Self {
        Self {
            co_conversion,
            co2_conversion,
        }
    }
}

impl Stage for Methanator {
    fn id(&self) -> StageId {
        StageId::Methanator
    }

    fn outlet(&self, inlet: &ComponentVector) -> ComponentVector {
        let co_extent = inlet[Species::CO] * self.co_conversion;
        let co2_extent = inlet[Species::CO2] * self.co2_conversion;

        let mut out = *inlet;
        CO_METHANATION.apply(&mut out, co_extent);
        CO2_METHANATION.apply(&mut out, co2_extent);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_oxides_convert_from_inlet() {
        let inlet = ComponentVector::from_pairs(&[
            (Species::CO, 2.0),
            (Species::CO2, 1.0),
            (Species::H2, 100.0),
            (Species::CH4, 0.5),
        ]);
        let out = Methanator::new(1.0, 1.0).outlet(&inlet);
        assert_eq!(out[Species::CO], 0.0);
        assert_eq!(out[Species::CO2], 0.0);
        assert_eq!(out[Species::CH4], 3.5);
        assert_eq!(out[Species::H2], 100.0 - 6.0 - 4.0);
        assert_eq!(out[Species::H2O], 2.0 + 2.0);
    }

    #[test]
    fn hydrogen_can_go_negative() {
        let inlet = ComponentVector::from_pairs(&[(Species::CO, 10.0), (Species::H2, 5.0)]);
        let out = Methanator::new(1.0, 1.0).outlet(&inlet);
        assert_eq!(out[Species::H2], -25.0);
        assert_eq!(out.negative_species(), vec![Species::H2]);
    }
}
