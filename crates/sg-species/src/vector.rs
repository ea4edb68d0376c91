//! Fixed-size molar flow vector indexed by `Species`.

use crate::element::ElementCounts;
use crate::error::SpeciesError;
use crate::species::Species;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Add, AddAssign, Index, IndexMut};

/// Molar flow per species [kgmol/hr].
///
/// Entries are not constrained to be non-negative: aggressive conversion
/// extents can legally drive a species below zero, and that is left for the
/// caller to inspect (see [`ComponentVector::negative_species`]).
///
/// Serializes as a complete `{key: value}` map; deserializing a map that lacks
/// any species fails, so partially specified vectors cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<Species, f64>",
    try_from = "BTreeMap<Species, f64>"
)]
pub struct ComponentVector([f64; Species::COUNT]);

impl ComponentVector {
    pub const fn zero() -> Self {
        Self([0.0; Species::COUNT])
    }

    pub fn from_fn(mut f: impl FnMut(Species) -> f64) -> Self {
        let mut out = Self::zero();
        for species in Species::ALL {
            out.0[species.index()] = f(species);
        }
        out
    }

    /// Vector with the given entries, every other species zero.
    ///
    /// Repeated species accumulate.
    pub fn from_pairs(pairs: &[(Species, f64)]) -> Self {
        let mut out = Self::zero();
        for &(species, value) in pairs {
            out[species] += value;
        }
        out
    }

    #[inline]
    pub fn get(&self, species: Species) -> f64 {
        self.0[species.index()]
    }

    #[inline]
    pub fn set(&mut self, species: Species, value: f64) {
        self.0[species.index()] = value;
    }

    /// Copy of `self` with one species replaced (base + patch).
    #[must_use]
    pub fn with(mut self, species: Species, value: f64) -> Self {
        self.set(species, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Species, f64)> + '_ {
        Species::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    pub fn as_array(&self) -> &[f64; Species::COUNT] {
        &self.0
    }

    /// Σ of all entries.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Σ of every species except H2O.
    pub fn dry_total(&self) -> f64 {
        self.iter()
            .filter(|(s, _)| s.is_dry())
            .map(|(_, v)| v)
            .sum()
    }

    #[must_use]
    pub fn map(&self, mut f: impl FnMut(Species, f64) -> f64) -> Self {
        Self::from_fn(|s| f(s, self.get(s)))
    }

    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        self.map(|_, v| v * factor)
    }

    /// Species whose flow is below zero.
    pub fn negative_species(&self) -> Vec<Species> {
        self.iter()
            .filter(|(_, v)| *v < 0.0)
            .map(|(s, _)| s)
            .collect()
    }

    /// Atom flows carried by this vector.
    pub fn elements(&self) -> ElementCounts {
        self.iter()
            .fold(ElementCounts::default(), |acc, (s, v)| {
                acc + s.elements().scaled(v)
            })
    }
}

impl Index<Species> for ComponentVector {
    type Output = f64;

    fn index(&self, species: Species) -> &f64 {
        &self.0[species.index()]
    }
}

impl IndexMut<Species> for ComponentVector {
    fn index_mut(&mut self, species: Species) -> &mut f64 {
        &mut self.0[species.index()]
    }
}

impl Add for ComponentVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|s| self.get(s) + rhs.get(s))
    }
}

impl AddAssign for ComponentVector {
    fn add_assign(&mut self, rhs: Self) {
        for species in Species::ALL {
            self[species] += rhs[species];
        }
    }
}

impl From<ComponentVector> for BTreeMap<Species, f64> {
    fn from(v: ComponentVector) -> Self {
        v.iter().collect()
    }
}

impl TryFrom<BTreeMap<Species, f64>> for ComponentVector {
    type Error = SpeciesError;

    fn try_from(map: BTreeMap<Species, f64>) -> Result<Self, Self::Error> {
        let missing: Vec<&str> = Species::ALL
            .iter()
            .filter(|s| !map.contains_key(s))
            .map(|s| s.key())
            .collect();
        if !missing.is_empty() {
            return Err(SpeciesError::IncompleteVector {
                missing: missing.join(", "),
            });
        }
        Ok(Self::from_fn(|s| map[&s]))
    }
}
