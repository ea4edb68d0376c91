//! Override anchors: manually edited stage inlets.
//!
//! An anchor holds a complete vector that replaces the stage's derived inlet.
//! Edits patch one species over a base (the existing anchor, else the derived
//! inlet) and always store the full result.

use crate::error::{PlantError, PlantResult};
use serde::{Deserialize, Serialize};
use sg_core::constants::nm3_to_kgmol;
use sg_core::numeric::coerce_finite;
use sg_species::{ComponentVector, Species};
use sg_stages::StageId;

/// Stages whose inlet may be overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    Methanator,
    AmmoniaReactor,
}

impl Anchor {
    pub const ALL: [Anchor; 2] = [Anchor::Methanator, Anchor::AmmoniaReactor];

    /// The stage whose inlet this anchor replaces.
    pub fn stage(self) -> StageId {
        match self {
            Anchor::Methanator => StageId::Methanator,
            Anchor::AmmoniaReactor => StageId::AmmoniaReactor,
        }
    }

    /// The stage whose outlet feeds the anchored stage.
    pub fn upstream(self) -> StageId {
        match self {
            Anchor::Methanator => StageId::Lts,
            Anchor::AmmoniaReactor => StageId::Methanator,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Anchor::Methanator => "methanator",
            Anchor::AmmoniaReactor => "ammonia-reactor",
        }
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Anchor {
    type Err = PlantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "methanator" => Ok(Anchor::Methanator),
            "ammonia-reactor" | "reactor" | "converter" => Ok(Anchor::AmmoniaReactor),
            _ => Err(PlantError::UnknownAnchor(s.to_string())),
        }
    }
}

/// One species edit, in the unit it was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum OverrideEdit {
    /// kgmol/hr.
    Moles(f64),
    /// Nm³/hr.
    Volume(f64),
    /// Percent of the base's total moles.
    WetPercent(f64),
    /// Percent of the base's dry total. Ignored for H2O.
    DryPercent(f64),
}

impl OverrideEdit {
    /// Parse a unit keyword and value, as typed on the command line.
    pub fn parse(unit: &str, value: f64) -> PlantResult<Self> {
        match unit.trim().to_ascii_lowercase().as_str() {
            "moles" | "kgmol" => Ok(OverrideEdit::Moles(value)),
            "volume" | "nm3" => Ok(OverrideEdit::Volume(value)),
            "wet" | "wet%" => Ok(OverrideEdit::WetPercent(value)),
            "dry" | "dry%" => Ok(OverrideEdit::DryPercent(value)),
            _ => Err(PlantError::UnknownUnit(unit.to_string())),
        }
    }

    /// Molar flow this edit asks for against `base`, or `None` when ignored.
    pub fn resolve(self, base: &ComponentVector, species: Species) -> Option<f64> {
        match self {
            OverrideEdit::Moles(v) => Some(coerce_finite(v)),
            OverrideEdit::Volume(v) => Some(nm3_to_kgmol(coerce_finite(v))),
            OverrideEdit::WetPercent(p) => Some(coerce_finite(p) / 100.0 * base.total()),
            OverrideEdit::DryPercent(_) if !species.is_dry() => None,
            OverrideEdit::DryPercent(p) => Some(coerce_finite(p) / 100.0 * base.dry_total()),
        }
    }
}

/// Complete vector after applying `edit` for `species` over `base`.
pub fn apply_edit(base: &ComponentVector, species: Species, edit: OverrideEdit) -> ComponentVector {
    match edit.resolve(base, species) {
        Some(moles) => base.with(species, moles),
        None => *base,
    }
}

/// The two optional anchors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Overrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methanator: Option<ComponentVector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ammonia_reactor: Option<ComponentVector>,
}

impl Overrides {
    pub fn get(&self, anchor: Anchor) -> Option<&ComponentVector> {
        match anchor {
            Anchor::Methanator => self.methanator.as_ref(),
            Anchor::AmmoniaReactor => self.ammonia_reactor.as_ref(),
        }
    }

    fn slot(&mut self, anchor: Anchor) -> &mut Option<ComponentVector> {
        match anchor {
            Anchor::Methanator => &mut self.methanator,
            Anchor::AmmoniaReactor => &mut self.ammonia_reactor,
        }
    }

    pub fn set(&mut self, anchor: Anchor, vector: ComponentVector) {
        *self.slot(anchor) = Some(vector);
    }

    /// Remove an anchor; returns the vector it held.
    pub fn clear(&mut self, anchor: Anchor) -> Option<ComponentVector> {
        self.slot(anchor).take()
    }

    /// Patch one species of an anchor, creating it from `derived` when absent.
    pub fn edit(
        &mut self,
        anchor: Anchor,
        derived: &ComponentVector,
        species: Species,
        edit: OverrideEdit,
    ) -> ComponentVector {
        let base = self.get(anchor).copied().unwrap_or(*derived);
        let patched = apply_edit(&base, species, edit);
        self.set(anchor, patched);
        patched
    }

    pub fn is_empty(&self) -> bool {
        self.methanator.is_none() && self.ammonia_reactor.is_none()
    }
}
