//! Chemical species definitions.

use crate::element::ElementCounts;
use crate::error::SpeciesError;
use serde::{Deserialize, Serialize};

/// Chemical species tracked through the reforming and synthesis train.
///
/// The set is closed: every `ComponentVector` carries exactly these ten entries,
/// in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Species {
    /// Argon (Ar)
    #[serde(rename = "AR")]
    Ar,
    /// Ethane (C₂H₆)
    C2H6,
    /// Methane (CH₄)
    CH4,
    /// Carbon monoxide (CO)
    CO,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Hydrogen (H₂)
    H2,
    /// Nitrogen (N₂)
    N2,
    /// Ammonia (NH₃)
    NH3,
    /// Oxygen (O₂)
    O2,
    /// Water (H₂O)
    H2O,
}

impl Species {
    pub const COUNT: usize = 10;

    pub const ALL: [Species; Species::COUNT] = [
        Species::Ar,
        Species::C2H6,
        Species::CH4,
        Species::CO,
        Species::CO2,
        Species::H2,
        Species::N2,
        Species::NH3,
        Species::O2,
        Species::H2O,
    ];

    /// Position of this species inside a `ComponentVector`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn key(&self) -> &'static str {
        match self {
            Species::Ar => "AR",
            Species::C2H6 => "C2H6",
            Species::CH4 => "CH4",
            Species::CO => "CO",
            Species::CO2 => "CO2",
            Species::H2 => "H2",
            Species::N2 => "N2",
            Species::NH3 => "NH3",
            Species::O2 => "O2",
            Species::H2O => "H2O",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::Ar => "Argon",
            Species::C2H6 => "Ethane",
            Species::CH4 => "Methane",
            Species::CO => "Carbon Monoxide",
            Species::CO2 => "Carbon Dioxide",
            Species::H2 => "Hydrogen",
            Species::N2 => "Nitrogen",
            Species::NH3 => "Ammonia",
            Species::O2 => "Oxygen",
            Species::H2O => "Water",
        }
    }

    /// Molar mass [kg/kgmol] as used by the plant calculator.
    ///
    /// Rounded plant values; steam conversion relies on H2O = 18 exactly.
    pub fn molar_mass(&self) -> f64 {
        match self {
            Species::Ar => 39.0,
            Species::C2H6 => 30.0,
            Species::CH4 => 16.0,
            Species::CO => 28.0,
            Species::CO2 => 44.0,
            Species::H2 => 2.0,
            Species::N2 => 28.0,
            Species::NH3 => 17.0,
            Species::O2 => 32.0,
            Species::H2O => 18.0,
        }
    }

    /// Atoms per molecule.
    pub fn elements(&self) -> ElementCounts {
        let (c, h, n, o, ar) = match self {
            Species::Ar => (0, 0, 0, 0, 1),
            Species::C2H6 => (2, 6, 0, 0, 0),
            Species::CH4 => (1, 4, 0, 0, 0),
            Species::CO => (1, 0, 0, 1, 0),
            Species::CO2 => (1, 0, 0, 2, 0),
            Species::H2 => (0, 2, 0, 0, 0),
            Species::N2 => (0, 0, 2, 0, 0),
            Species::NH3 => (0, 3, 1, 0, 0),
            Species::O2 => (0, 0, 0, 2, 0),
            Species::H2O => (0, 2, 0, 1, 0),
        };
        ElementCounts::new(c as f64, h as f64, n as f64, o as f64, ar as f64)
    }

    /// Carbon atoms per molecule, the weight used by carbon-number KPIs.
    pub fn carbon_atoms(&self) -> f64 {
        self.elements().c
    }

    /// Only water is excluded from the dry basis.
    #[inline]
    pub fn is_dry(&self) -> bool {
        !matches!(self, Species::H2O)
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Species {
    type Err = SpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AR" | "ARGON" => Ok(Species::Ar),
            "C2H6" | "ETHANE" => Ok(Species::C2H6),
            "CH4" | "METHANE" => Ok(Species::CH4),
            "CO" | "CARBONMONOXIDE" | "CARBON MONOXIDE" => Ok(Species::CO),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Species::CO2),
            "H2" | "HYDROGEN" => Ok(Species::H2),
            "N2" | "NITROGEN" => Ok(Species::N2),
            "NH3" | "AMMONIA" => Ok(Species::NH3),
            "O2" | "OXYGEN" => Ok(Species::O2),
            "H2O" | "WATER" | "STEAM" => Ok(Species::H2O),
            _ => Err(SpeciesError::UnknownSpecies { key: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_all_order() {
        for (i, species) in Species::ALL.iter().enumerate() {
            assert_eq!(species.index(), i);
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("ar".parse::<Species>().unwrap(), Species::Ar);
        assert_eq!("Methane".parse::<Species>().unwrap(), Species::CH4);
        assert_eq!(
            "carbon dioxide".parse::<Species>().unwrap(),
            Species::CO2
        );
        assert_eq!("steam".parse::<Species>().unwrap(), Species::H2O);
        assert!("He".parse::<Species>().is_err());
    }

    #[test]
    fn canonical_key_roundtrip() {
        for species in Species::ALL {
            let parsed = species
                .key()
                .parse::<Species>()
                .expect("canonical key should parse");
            assert_eq!(parsed, species);
        }
    }

    #[test]
    fn serde_uses_canonical_keys() {
        let json = serde_json::to_string(&Species::Ar).unwrap();
        assert_eq!(json, "\"AR\"");
        let back: Species = serde_json::from_str("\"C2H6\"").unwrap();
        assert_eq!(back, Species::C2H6);
    }

    #[test]
    fn only_water_is_wet() {
        let wet: Vec<Species> = Species::ALL.into_iter().filter(|s| !s.is_dry()).collect();
        assert_eq!(wet, vec![Species::H2O]);
    }

    #[test]
    fn ethane_carries_two_carbons() {
        assert_eq!(Species::C2H6.carbon_atoms(), 2.0);
        assert_eq!(Species::CO2.carbon_atoms(), 1.0);
        assert_eq!(Species::NH3.carbon_atoms(), 0.0);
    }
}
