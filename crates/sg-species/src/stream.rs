//! Derived stream record (totals, fractions, mass flows).

use crate::element::ElementCounts;
use crate::species::Species;
use crate::vector::ComponentVector;
use serde::Serialize;
use sg_core::constants::kgmol_to_nm3;
use sg_core::numeric::ratio_or_zero;

/// Immutable view of a molar flow vector plus everything derived from it.
///
/// A `Stream` is a pure function of its vector. Division by a zero total
/// yields zero fractions, never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stream {
    moles: ComponentVector,
    total_moles: f64,
    total_volume: f64,
    mole_fractions: ComponentVector,
    dry_total_moles: f64,
    dry_fractions: ComponentVector,
    mass_flows: ComponentVector,
    total_mass: f64,
}

impl Stream {
    pub fn from_vector(moles: ComponentVector) -> Self {
        let total_moles = moles.total();
        let dry_total_moles = moles.dry_total();

        let mole_fractions = moles.map(|_, v| ratio_or_zero(v, total_moles));
        let dry_fractions = moles.map(|s, v| {
            if s.is_dry() {
                ratio_or_zero(v, dry_total_moles)
            } else {
                0.0
            }
        });
        let mass_flows = moles.map(|s, v| v * s.molar_mass());

        Self {
            moles,
            total_moles,
            total_volume: kgmol_to_nm3(total_moles),
            mole_fractions,
            dry_total_moles,
            dry_fractions,
            total_mass: mass_flows.total(),
            mass_flows,
        }
    }

    /// Molar flows [kgmol/hr].
    pub fn moles(&self) -> &ComponentVector {
        &self.moles
    }

    /// Σ moles [kgmol/hr].
    pub fn total_moles(&self) -> f64 {
        self.total_moles
    }

    /// Total volumetric flow [Nm³/hr].
    pub fn total_volume(&self) -> f64 {
        self.total_volume
    }

    /// Wet-basis mole fractions (all zero when the total is zero).
    pub fn mole_fractions(&self) -> &ComponentVector {
        &self.mole_fractions
    }

    pub fn mole_fraction(&self, species: Species) -> f64 {
        self.mole_fractions[species]
    }

    pub fn dry_total_moles(&self) -> f64 {
        self.dry_total_moles
    }

    /// Dry-basis mole fractions; H2O is always 0 here.
    pub fn dry_fractions(&self) -> &ComponentVector {
        &self.dry_fractions
    }

    pub fn dry_fraction(&self, species: Species) -> f64 {
        self.dry_fractions[species]
    }

    /// Volumetric flow of one species [Nm³/hr].
    pub fn volume(&self, species: Species) -> f64 {
        kgmol_to_nm3(self.moles[species])
    }

    /// Mass flows [kg/hr].
    pub fn mass_flows(&self) -> &ComponentVector {
        &self.mass_flows
    }

    pub fn total_mass(&self) -> f64 {
        self.total_mass
    }

    pub fn elements(&self) -> ElementCounts {
        self.moles.elements()
    }
}

impl From<ComponentVector> for Stream {
    fn from(moles: ComponentVector) -> Self {
        Self::from_vector(moles)
    }
}
