//! Water-gas shift converter, used for both HTS and LTS.

use crate::traits::{Stage, StageId};
use sg_species::reaction::WATER_GAS_SHIFT;
use sg_species::{ComponentVector, Species};

/// CO + H2O → CO2 + H2 with extent = `co_conversion` × inlet CO.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftConverter {
    id: StageId,
    pub co_conversion: f64,
}

impl ShiftConverter {
    pub fn hts(co_conversion: f64) -> Self {
        Self {
            id: StageId::Hts,
            co_conversion,
        }
    }

    pub fn lts(co_conversion: f64) -> Self {
        Self {
            id: StageId::Lts,
            co_conversion,
        }
    }
}

impl Stage for ShiftConverter {
    fn id(&self) -> StageId {
        self.id
    }

    fn outlet(&self, inlet: &ComponentVector) -> ComponentVector {
        let mut out = *inlet;
        WATER_GAS_SHIFT.apply(&mut out, inlet[Species::CO] * self.co_conversion);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hts_and_lts_share_the_transform() {
        let inlet = ComponentVector::from_pairs(&[
            (Species::CO, 20.0),
            (Species::CO2, 5.0),
            (Species::H2, 60.0),
            (Species::H2O, 80.0),
        ]);
        let hts = ShiftConverter::hts(0.75);
        let lts = ShiftConverter::lts(0.75);
        assert_eq!(hts.outlet(&inlet), lts.outlet(&inlet));
        assert_eq!(hts.id(), StageId::Hts);
        assert_eq!(lts.name(), "LTS");

        let out = hts.outlet(&inlet);
        assert_eq!(out[Species::CO], 5.0);
        assert_eq!(out[Species::CO2], 20.0);
        assert_eq!(out[Species::H2], 75.0);
        assert_eq!(out[Species::H2O], 65.0);
    }

    #[test]
    fn no_co_no_change() {
        let inlet = ComponentVector::from_pairs(&[(Species::N2, 10.0), (Species::H2O, 3.0)]);
        assert_eq!(ShiftConverter::lts(0.95).outlet(&inlet), inlet);
    }
}
