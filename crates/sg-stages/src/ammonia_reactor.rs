//! Single-pass ammonia converter.

use crate::traits::{Stage, StageId};
use sg_species::reaction::AMMONIA_SYNTHESIS;
use sg_species::{ComponentVector, Species};

/// N2 + 3H2 → 2NH3 with extent = `n2_conversion` × inlet N2. No recycle loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmmoniaReactor {
    pub n2_conversion: f64,
}

impl AmmoniaReactor {
    pub fn new(n2_conversion: f64) -> Self {
        Self { n2_conversion }
    }
}

impl Stage for AmmoniaReactor {
    fn id(&self) -> StageId {
        StageId::AmmoniaReactor
    }

    fn outlet(&self, inlet: &ComponentVector) -> ComponentVector {
        let mut out = *inlet;
        AMMONIA_SYNTHESIS.apply(&mut out, inlet[Species::N2] * self.n2_conversion);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stoichiometric_syngas() {
        let inlet = ComponentVector::from_pairs(&[
            (Species::N2, 100.0),
            (Species::H2, 300.0),
            (Species::CH4, 4.0),
            (Species::Ar, 1.0),
        ]);
        let out = AmmoniaReactor::new(0.25).outlet(&inlet);
        assert_eq!(out[Species::N2], 75.0);
        assert_eq!(out[Species::H2], 225.0);
        assert_eq!(out[Species::NH3], 50.0);
        assert_eq!(out[Species::CH4], 4.0);
        assert_eq!(out[Species::Ar], 1.0);
    }
}
