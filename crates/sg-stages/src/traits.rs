//! Core traits for stage models.

use serde::{Deserialize, Serialize};
use sg_species::ComponentVector;

/// The six reaction stages of the train, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageId {
    PrimaryReformer,
    SecondaryReformer,
    Hts,
    Lts,
    Methanator,
    AmmoniaReactor,
}

impl StageId {
    pub const COUNT: usize = 6;

    pub const ALL: [StageId; StageId::COUNT] = [
        StageId::PrimaryReformer,
        StageId::SecondaryReformer,
        StageId::Hts,
        StageId::Lts,
        StageId::Methanator,
        StageId::AmmoniaReactor,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn key(&self) -> &'static str {
        match self {
            StageId::PrimaryReformer => "primary",
            StageId::SecondaryReformer => "secondary",
            StageId::Hts => "hts",
            StageId::Lts => "lts",
            StageId::Methanator => "methanator",
            StageId::AmmoniaReactor => "ammonia_reactor",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StageId::PrimaryReformer => "Primary Reformer",
            StageId::SecondaryReformer => "Secondary Reformer",
            StageId::Hts => "HTS",
            StageId::Lts => "LTS",
            StageId::Methanator => "Methanator",
            StageId::AmmoniaReactor => "Ammonia Reactor",
        }
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for StageId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "primary" | "primary_reformer" => Ok(StageId::PrimaryReformer),
            "secondary" | "secondary_reformer" => Ok(StageId::SecondaryReformer),
            "hts" => Ok(StageId::Hts),
            "lts" => Ok(StageId::Lts),
            "methanator" => Ok(StageId::Methanator),
            "ammonia_reactor" | "reactor" | "converter" => Ok(StageId::AmmoniaReactor),
            _ => Err(format!("unknown stage: {s}")),
        }
    }
}

/// A reaction stage: inlet molar flows in, outlet molar flows out.
///
/// Stages are deterministic, side-effect free, and never fail. Outlet entries
/// may be negative when extents are aggressive; that is reported, not fixed.
pub trait Stage: Send + Sync {
    /// Which slot of the train this stage fills.
    fn id(&self) -> StageId;

    /// Stage name for logs and tables.
    fn name(&self) -> &str {
        self.id().display_name()
    }

    /// Outlet molar flows for the given inlet.
    fn outlet(&self, inlet: &ComponentVector) -> ComponentVector;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_roundtrip() {
        for id in StageId::ALL {
            assert_eq!(id.key().parse::<StageId>().unwrap(), id);
        }
        assert_eq!(
            "ammonia-reactor".parse::<StageId>().unwrap(),
            StageId::AmmoniaReactor
        );
        assert!("absorber".parse::<StageId>().is_err());
    }

    #[test]
    fn order_matches_index() {
        for (i, id) in StageId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }
}
