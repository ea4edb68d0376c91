//! Secondary (autothermal) reformer.
//!
//! Air is mixed into the primary effluent, part of the hydrogen burns with the
//! air's oxygen, and the remaining methane and CO react further. Combustion is
//! limited by hydrogen availability; that is the only clamp in the train.

use crate::traits::{Stage, StageId};
use serde::{Deserialize, Serialize};
use sg_species::reaction::{HYDROGEN_COMBUSTION, METHANE_REFORMING, WATER_GAS_SHIFT};
use sg_species::{ComponentVector, Species};

/// Combustion bookkeeping for one evaluation [kgmol/hr].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Combustion {
    /// O2 the extent asks for: `o2_conversion` × O2 after mixing.
    pub requested_o2: f64,
    /// H2 needed to burn `requested_o2`.
    pub required_h2: f64,
    /// H2 present after mixing.
    pub available_h2: f64,
    pub burned_h2: f64,
    pub burned_o2: f64,
    /// True when the available hydrogen capped the burn.
    pub h2_limited: bool,
}

impl Combustion {
    /// Resolve the burn for a mixed stream.
    ///
    /// `burned_h2 = min(available, 2 × requested_o2)`, and the oxygen actually
    /// consumed is derived back from it.
    pub fn resolve(mixed: &ComponentVector, o2_conversion: f64) -> Self {
        let requested_o2 = o2_conversion * mixed[Species::O2];
        let required_h2 = 2.0 * requested_o2;
        let available_h2 = mixed[Species::H2];
        let burned_h2 = available_h2.min(required_h2);
        Self {
            requested_o2,
            required_h2,
            available_h2,
            burned_h2,
            burned_o2: burned_h2 / 2.0,
            h2_limited: required_h2 > available_h2,
        }
    }

    /// Realized O2 conversion, as a fraction of the O2 after mixing.
    pub fn realized_o2_conversion(&self, mixed_o2: f64) -> f64 {
        sg_core::numeric::ratio_or_zero(self.burned_o2, mixed_o2)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryReformer {
    /// Humid process air added at the inlet.
    pub air: ComponentVector,
    pub ch4_conversion: f64,
    pub co_conversion: f64,
    pub o2_conversion: f64,
}

impl SecondaryReformer {
    pub fn new(
        air: ComponentVector,
        ch4_conversion: f64,
        co_conversion: f64,
        o2_conversion: f64,
    ) -> Self {
        Self {
            air,
            ch4_conversion,
            co_conversion,
            o2_conversion,
        }
    }

    /// Outlet plus the combustion record.
    ///
    /// Reforming and shift extents reference the current (post-mixing,
    /// post-combustion) quantities, unlike the primary reformer.
    pub fn react(&self, inlet: &ComponentVector) -> (ComponentVector, Combustion) {
        let mut out = *inlet + self.air;

        let combustion = Combustion::resolve(&out, self.o2_conversion);
        HYDROGEN_COMBUSTION.apply(&mut out, combustion.burned_h2);

        let reformed = out[Species::CH4] * self.ch4_conversion;
        METHANE_REFORMING.apply(&mut out, reformed);

        let shifted = out[Species::CO] * self.co_conversion;
        WATER_GAS_SHIFT.apply(&mut out, shifted);

        (out, combustion)
    }
}

impl Stage for SecondaryReformer {
    fn id(&self) -> StageId {
        StageId::SecondaryReformer
    }

    fn outlet(&self, inlet: &ComponentVector) -> ComponentVector {
        self.react(inlet).0
    }
}
