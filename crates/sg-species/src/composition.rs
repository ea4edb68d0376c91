//! Dry-basis gas compositions given in mole percent.

use crate::species::Species;
use crate::vector::ComponentVector;
use serde::{Deserialize, Serialize};
use sg_core::constants::nm3_to_kgmol;

/// Composition in mole percent, as entered for a feed gas.
///
/// Percentages are used as given (`%/100`); they are not normalized, so a
/// composition summing to 99 % yields 99 % of the nominal flow in moles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DryComposition {
    percent: ComponentVector,
}

impl DryComposition {
    pub fn from_percent(percent: ComponentVector) -> Self {
        Self { percent }
    }

    pub fn from_pairs(pairs: &[(Species, f64)]) -> Self {
        Self::from_percent(ComponentVector::from_pairs(pairs))
    }

    pub fn percent(&self, species: Species) -> f64 {
        self.percent[species]
    }

    pub fn percents(&self) -> &ComponentVector {
        &self.percent
    }

    /// Fraction of one species (`% / 100`).
    pub fn fraction(&self, species: Species) -> f64 {
        self.percent[species] / 100.0
    }

    pub fn sum_percent(&self) -> f64 {
        self.percent.total()
    }

    /// Molar flows for a total volumetric flow in Nm³/hr.
    pub fn to_moles(&self, total_nm3_per_hr: f64) -> ComponentVector {
        let total_kgmol = nm3_to_kgmol(total_nm3_per_hr);
        self.percent.map(|_, pct| pct / 100.0 * total_kgmol)
    }

    /// Σ carbon atoms × fraction over the carbon-bearing species.
    ///
    /// For {CH4 95, C2H6 2.5, CO2 0.5, H2 2} this is 1.005.
    pub fn carbon_number(&self) -> f64 {
        Species::ALL
            .iter()
            .map(|s| s.carbon_atoms() * self.fraction(*s))
            .sum()
    }
}
