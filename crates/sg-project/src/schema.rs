//! Project schema definitions.
//!
//! Every section falls back to the calculator's factory defaults when it is
//! missing from the file, so a project holding only `version` and `name` is
//! a complete plant.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Species key → value. Keys are canonical species keys ("CH4", "AR", ...).
pub type SpeciesMap = BTreeMap<String, f64>;

fn species_map(pairs: &[(&str, f64)]) -> SpeciesMap {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub feed: FeedDef,
    #[serde(default)]
    pub design: DesignDef,
    #[serde(default)]
    pub conditions: ConditionsDef,
    #[serde(default)]
    pub conversions: ConversionsDef,
    /// Version 0 stored extents as percentages under this key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_percent: Option<ConversionsDef>,
    #[serde(default)]
    pub overrides: OverridesDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separation: Option<SeparationDef>,
}

impl Project {
    /// A project at the latest schema version with factory defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: crate::migrate::LATEST_VERSION,
            name: name.into(),
            feed: FeedDef::default(),
            design: DesignDef::default(),
            conditions: ConditionsDef::default(),
            conversions: ConversionsDef::default(),
            conversion_percent: None,
            overrides: OverridesDef::default(),
            separation: None,
        }
    }
}

/// A dry gas given as mole percentages and a total flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GasDef {
    pub composition_pct: SpeciesMap,
    pub flow_nm3_per_hr: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AirDef {
    pub composition_pct: SpeciesMap,
    pub flow_nm3_per_hr: f64,
    pub relative_humidity_pct: f64,
    pub ambient_temp_c: f64,
}

impl Default for AirDef {
    fn default() -> Self {
        Self {
            composition_pct: species_map(&[
                ("N2", 78.08),
                ("O2", 20.92),
                ("AR", 0.97),
                ("CO2", 0.03),
            ]),
            flow_nm3_per_hr: 15_000.0,
            relative_humidity_pct: 60.0,
            ambient_temp_c: 30.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeedDef {
    pub process_gas: GasDef,
    pub recycle_gas: GasDef,
    pub steam_t_per_hr: f64,
    pub air: AirDef,
}

impl Default for FeedDef {
    fn default() -> Self {
        Self {
            process_gas: GasDef {
                composition_pct: species_map(&[
                    ("CH4", 95.0),
                    ("C2H6", 2.5),
                    ("CO2", 0.5),
                    ("H2", 2.0),
                ]),
                flow_nm3_per_hr: 100_000.0,
            },
            recycle_gas: GasDef {
                composition_pct: species_map(&[("H2", 75.0), ("N2", 25.0)]),
                flow_nm3_per_hr: 5_000.0,
            },
            steam_t_per_hr: 250.0,
            air: AirDef::default(),
        }
    }
}

/// Design basis for the front-end load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DesignDef {
    pub flow_nm3_per_hr: f64,
    pub carbon_number: f64,
}

impl Default for DesignDef {
    fn default() -> Self {
        Self {
            flow_nm3_per_hr: 110_000.0,
            carbon_number: 1.05,
        }
    }
}

/// Temperatures in °C, pressures in kg/cm² gauge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StageConditionsDef {
    pub inlet_temp_c: f64,
    pub outlet_temp_c: f64,
    pub inlet_pressure_kgf_cm2g: f64,
    pub outlet_pressure_kgf_cm2g: f64,
}

impl StageConditionsDef {
    const fn new(t_in: f64, t_out: f64, p_in: f64, p_out: f64) -> Self {
        Self {
            inlet_temp_c: t_in,
            outlet_temp_c: t_out,
            inlet_pressure_kgf_cm2g: p_in,
            outlet_pressure_kgf_cm2g: p_out,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConditionsDef {
    pub primary: StageConditionsDef,
    pub secondary: StageConditionsDef,
    pub hts: StageConditionsDef,
    pub lts: StageConditionsDef,
    pub methanator: StageConditionsDef,
    pub ammonia_reactor: StageConditionsDef,
}

impl Default for ConditionsDef {
    fn default() -> Self {
        Self {
            primary: StageConditionsDef::new(520.0, 810.0, 35.0, 32.5),
            secondary: StageConditionsDef::new(810.0, 980.0, 32.0, 31.0),
            hts: StageConditionsDef::new(360.0, 420.0, 30.5, 29.8),
            lts: StageConditionsDef::new(200.0, 225.0, 29.5, 28.5),
            methanator: StageConditionsDef::new(280.0, 320.0, 27.5, 26.8),
            ammonia_reactor: StageConditionsDef::new(380.0, 450.0, 150.0, 145.0),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PrimaryConversionDef {
    pub ch4: f64,
    pub c2h6: f64,
    pub co: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SecondaryConversionDef {
    pub ch4: f64,
    pub co: f64,
    pub o2: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ShiftConversionDef {
    pub co: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MethanatorConversionDef {
    pub co: f64,
    pub co2: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AmmoniaConversionDef {
    pub n2: f64,
}

/// Reaction extents as fractions of the reference reagent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConversionsDef {
    pub primary: PrimaryConversionDef,
    pub secondary: SecondaryConversionDef,
    pub hts: ShiftConversionDef,
    pub lts: ShiftConversionDef,
    pub methanator: MethanatorConversionDef,
    pub ammonia_reactor: AmmoniaConversionDef,
}

impl Default for ConversionsDef {
    fn default() -> Self {
        Self {
            primary: PrimaryConversionDef {
                ch4: 0.85,
                c2h6: 1.0,
                co: 0.5,
            },
            secondary: SecondaryConversionDef {
                ch4: 0.95,
                co: 0.3,
                o2: 1.0,
            },
            hts: ShiftConversionDef { co: 0.90 },
            lts: ShiftConversionDef { co: 0.95 },
            methanator: MethanatorConversionDef {
                co: 0.9999,
                co2: 0.9999,
            },
            ammonia_reactor: AmmoniaConversionDef { n2: 0.15 },
        }
    }
}

impl ConversionsDef {
    /// Every extent multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            primary: PrimaryConversionDef {
                ch4: self.primary.ch4 * factor,
                c2h6: self.primary.c2h6 * factor,
                co: self.primary.co * factor,
            },
            secondary: SecondaryConversionDef {
                ch4: self.secondary.ch4 * factor,
                co: self.secondary.co * factor,
                o2: self.secondary.o2 * factor,
            },
            hts: ShiftConversionDef {
                co: self.hts.co * factor,
            },
            lts: ShiftConversionDef {
                co: self.lts.co * factor,
            },
            methanator: MethanatorConversionDef {
                co: self.methanator.co * factor,
                co2: self.methanator.co2 * factor,
            },
            ammonia_reactor: AmmoniaConversionDef {
                n2: self.ammonia_reactor.n2 * factor,
            },
        }
    }

    /// (field, value) for every extent, for reporting.
    pub fn entries(&self) -> [(&'static str, f64); 11] {
        [
            ("conversions.primary.ch4", self.primary.ch4),
            ("conversions.primary.c2h6", self.primary.c2h6),
            ("conversions.primary.co", self.primary.co),
            ("conversions.secondary.ch4", self.secondary.ch4),
            ("conversions.secondary.co", self.secondary.co),
            ("conversions.secondary.o2", self.secondary.o2),
            ("conversions.hts.co", self.hts.co),
            ("conversions.lts.co", self.lts.co),
            ("conversions.methanator.co", self.methanator.co),
            ("conversions.methanator.co2", self.methanator.co2),
            ("conversions.ammonia_reactor.n2", self.ammonia_reactor.n2),
        ]
    }
}

/// Manually edited stage inlets, stored as complete species maps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OverridesDef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methanator: Option<SpeciesMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ammonia_reactor: Option<SpeciesMap>,
}

/// Settings for the optional separation side branch on the LTS outlet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SeparationDef {
    pub condensate_h2o_removal: f64,
    pub absorber_target_dry_co2_pct: f64,
}

impl Default for SeparationDef {
    fn default() -> Self {
        Self {
            condensate_h2o_removal: 0.95,
            absorber_target_dry_co2_pct: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_yaml_gets_factory_defaults() {
        let project: Project = serde_yaml::from_str("version: 1\nname: Plant\n").unwrap();
        assert_eq!(project, Project::new("Plant"));
        assert_eq!(project.feed.process_gas.flow_nm3_per_hr, 100_000.0);
        assert_eq!(project.conversions.ammonia_reactor.n2, 0.15);
        assert_eq!(project.conditions.ammonia_reactor.inlet_pressure_kgf_cm2g, 150.0);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let yaml = "version: 1\nname: P\nconversions:\n  hts:\n    co: 0.8\n";
        let project: Project = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(project.conversions.hts.co, 0.8);
        assert_eq!(project.conversions.lts.co, 0.95);
        assert_eq!(project.design, DesignDef::default());
    }

    #[test]
    fn absent_overrides_are_not_written() {
        let yaml = serde_yaml::to_string(&Project::new("P")).unwrap();
        assert!(yaml.contains("overrides: {}"));
        assert!(!yaml.contains("conversion_percent"));
        assert!(!yaml.contains("separation"));
    }
}
