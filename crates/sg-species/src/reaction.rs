//! Reaction stoichiometry.
//!
//! A reaction is a list of signed coefficients (reactants negative, products
//! positive). Applying it with extent ξ adds ξ·ν to every participant, so any
//! atom-balanced reaction conserves elements for every extent.

use crate::element::ElementCounts;
use crate::species::Species;
use crate::vector::ComponentVector;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reaction {
    pub name: &'static str,
    pub terms: &'static [(Species, f64)],
}

impl Reaction {
    /// Apply `extent` kgmol/hr of this reaction in place.
    #[inline]
    pub fn apply(&self, moles: &mut ComponentVector, extent: f64) {
        for &(species, nu) in self.terms {
            moles[species] += nu * extent;
        }
    }

    /// Net atoms created per unit extent; all zero for a balanced reaction.
    pub fn element_change(&self) -> ElementCounts {
        self.terms
            .iter()
            .fold(ElementCounts::default(), |acc, &(s, nu)| {
                acc + s.elements().scaled(nu)
            })
    }

    pub fn is_balanced(&self) -> bool {
        self.element_change().max_abs() < 1e-12
    }
}

/// C2H6 + 2H2O → 2CO + 5H2
pub const ETHANE_REFORMING: Reaction = Reaction {
    name: "ethane steam reforming",
    terms: &[
        (Species::C2H6, -1.0),
        (Species::H2O, -2.0),
        (Species::CO, 2.0),
        (Species::H2, 5.0),
    ],
};

/// CH4 + H2O → CO + 3H2
pub const METHANE_REFORMING: Reaction = Reaction {
    name: "methane steam reforming",
    terms: &[
        (Species::CH4, -1.0),
        (Species::H2O, -1.0),
        (Species::CO, 1.0),
        (Species::H2, 3.0),
    ],
};

/// CO + H2O → CO2 + H2
pub const WATER_GAS_SHIFT: Reaction = Reaction {
    name: "water-gas shift",
    terms: &[
        (Species::CO, -1.0),
        (Species::H2O, -1.0),
        (Species::CO2, 1.0),
        (Species::H2, 1.0),
    ],
};

/// H2 + ½O2 → H2O, extent counted in H2 burned.
pub const HYDROGEN_COMBUSTION: Reaction = Reaction {
    name: "hydrogen combustion",
    terms: &[
        (Species::H2, -1.0),
        (Species::O2, -0.5),
        (Species::H2O, 1.0),
    ],
};

/// CO + 3H2 → CH4 + H2O
pub const CO_METHANATION: Reaction = Reaction {
    name: "CO methanation",
    terms: &[
        (Species::CO, -1.0),
        (Species::H2, -3.0),
        (Species::CH4, 1.0),
        (Species::H2O, 1.0),
    ],
};

/// CO2 + 4H2 → CH4 + 2H2O
pub const CO2_METHANATION: Reaction = Reaction {
    name: "CO2 methanation",
    terms: &[
        (Species::CO2, -1.0),
        (Species::H2, -4.0),
        (Species::CH4, 1.0),
        (Species::H2O, 2.0),
    ],
};

/// N2 + 3H2 → 2NH3
pub const AMMONIA_SYNTHESIS: Reaction = Reaction {
    name: "ammonia synthesis",
    terms: &[
        (Species::N2, -1.0),
        (Species::H2, -3.0),
        (Species::NH3, 2.0),
    ],
};

pub const ALL: [Reaction; 7] = [
    ETHANE_REFORMING,
    METHANE_REFORMING,
    WATER_GAS_SHIFT,
    HYDROGEN_COMBUSTION,
    CO_METHANATION,
    CO2_METHANATION,
    AMMONIA_SYNTHESIS,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reaction_is_atom_balanced() {
        for reaction in ALL {
            assert!(
                reaction.is_balanced(),
                "{} is not balanced: {:?}",
                reaction.name,
                reaction.element_change()
            );
        }
    }

    #[test]
    fn apply_moves_moles_by_coefficients() {
        let mut v = ComponentVector::from_pairs(&[(Species::CO, 10.0), (Species::H2O, 10.0)]);
        WATER_GAS_SHIFT.apply(&mut v, 4.0);
        assert_eq!(v[Species::CO], 6.0);
        assert_eq!(v[Species::H2O], 6.0);
        assert_eq!(v[Species::CO2], 4.0);
        assert_eq!(v[Species::H2], 4.0);
    }

    #[test]
    fn zero_extent_is_identity() {
        let base = ComponentVector::from_fn(|s| s.index() as f64 + 0.25);
        for reaction in ALL {
            let mut v = base;
            reaction.apply(&mut v, 0.0);
            assert_eq!(v, base, "{}", reaction.name);
        }
    }
}
