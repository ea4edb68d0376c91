//! Primary (steam) reformer.

use crate::traits::{Stage, StageId};
use sg_species::reaction::{ETHANE_REFORMING, METHANE_REFORMING, WATER_GAS_SHIFT};
use sg_species::{ComponentVector, Species};

/// Tubular steam reformer.
///
/// Reactions, in order:
/// 1. C2H6 + 2H2O → 2CO + 5H2, extent = `c2h6_conversion` × inlet C2H6
/// 2. CH4 + H2O → CO + 3H2, extent = `ch4_conversion` × inlet CH4
/// 3. CO + H2O → CO2 + H2, extent = `co_conversion` × CO after steps 1–2
///
/// The reforming extents reference the stage's inlet, not the depleted
/// intermediate; only the shift sees the CO produced upstream of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimaryReformer {
    pub ch4_conversion: f64,
    pub c2h6_conversion: f64,
    pub co_conversion: f64,
}

impl PrimaryReformer {
    pub fn new(ch4_conversion: f64, c2h6_conversion: f64, co_conversion: f64) -> Self {
        Self {
            ch4_conversion,
            c2h6_conversion,
            co_conversion,
        }
    }
}

impl Stage for PrimaryReformer {
    fn id(&self) -> StageId {
        StageId::PrimaryReformer
    }

    fn outlet(&self, inlet: &ComponentVector) -> ComponentVector {
        let mut out = *inlet;

        ETHANE_REFORMING.apply(&mut out, inlet[Species::C2H6] * self.c2h6_conversion);
        METHANE_REFORMING.apply(&mut out, inlet[Species::CH4] * self.ch4_conversion);

        let shifted = out[Species::CO] * self.co_conversion;
        WATER_GAS_SHIFT.apply(&mut out, shifted);

        out
    }
}
