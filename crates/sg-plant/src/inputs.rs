//! Typed evaluation inputs.
//!
//! `PlantInputs` is an immutable snapshot: the pipeline reads it, never
//! writes it. Its `Default` is the calculator's factory configuration.

use crate::overrides::Overrides;
use serde::{Deserialize, Serialize};
use sg_core::units::{Pressure, TempInterval, Temperature, degc, delta_degc, kgf_cm2_gauge};
use sg_species::DryComposition;
use sg_stages::StageId;

/// Dry gas feed: composition in mole percent plus total flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasFeed {
    pub composition: DryComposition,
    pub flow_nm3_per_hr: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirFeed {
    pub composition: DryComposition,
    pub flow_nm3_per_hr: f64,
    pub relative_humidity_pct: f64,
    pub ambient_temp_c: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantFeedSpec {
    pub process_gas: GasFeed,
    pub recycle_gas: GasFeed,
    pub steam_t_per_hr: f64,
    pub air: AirFeed,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrimaryConversions {
    pub ch4: f64,
    pub c2h6: f64,
    pub co: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecondaryConversions {
    pub ch4: f64,
    pub co: f64,
    pub o2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethanatorConversions {
    pub co: f64,
    pub co2: f64,
}

/// One extent per reaction. Not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionParameters {
    pub primary: PrimaryConversions,
    pub secondary: SecondaryConversions,
    pub hts_co: f64,
    pub lts_co: f64,
    pub methanator: MethanatorConversions,
    pub ammonia_n2: f64,
}

/// Inlet/outlet temperature [°C] and pressure [kg/cm² gauge] of one stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageConditions {
    pub inlet_temp_c: f64,
    pub outlet_temp_c: f64,
    pub inlet_pressure_kgf_cm2g: f64,
    pub outlet_pressure_kgf_cm2g: f64,
}

impl StageConditions {
    pub fn inlet_temperature(&self) -> Temperature {
        degc(self.inlet_temp_c)
    }

    pub fn outlet_temperature(&self) -> Temperature {
        degc(self.outlet_temp_c)
    }

    /// Absolute inlet pressure.
    pub fn inlet_pressure(&self) -> Pressure {
        kgf_cm2_gauge(self.inlet_pressure_kgf_cm2g)
    }

    /// Absolute outlet pressure.
    pub fn outlet_pressure(&self) -> Pressure {
        kgf_cm2_gauge(self.outlet_pressure_kgf_cm2g)
    }

    pub fn temperature_rise(&self) -> TempInterval {
        delta_degc(self.delta_t_c())
    }

    pub fn pressure_drop(&self) -> Pressure {
        self.inlet_pressure() - self.outlet_pressure()
    }

    /// T_out − T_in [°C].
    pub fn delta_t_c(&self) -> f64 {
        self.outlet_temp_c - self.inlet_temp_c
    }

    /// P_out − P_in [kg/cm²].
    pub fn delta_p_kgf_cm2(&self) -> f64 {
        self.outlet_pressure_kgf_cm2g - self.inlet_pressure_kgf_cm2g
    }
}

/// Per-stage operating conditions, metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingConditions {
    stages: [StageConditions; StageId::COUNT],
}

impl OperatingConditions {
    pub fn new(stages: [StageConditions; StageId::COUNT]) -> Self {
        Self { stages }
    }

    pub fn get(&self, id: StageId) -> &StageConditions {
        &self.stages[id.index()]
    }

    pub fn set(&mut self, id: StageId, conditions: StageConditions) {
        self.stages[id.index()] = conditions;
    }

    pub fn iter(&self) -> impl Iterator<Item = (StageId, &StageConditions)> + '_ {
        StageId::ALL.into_iter().zip(self.stages.iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignBasis {
    pub flow_nm3_per_hr: f64,
    pub carbon_number: f64,
}

/// Settings for the separation side branch on the LTS outlet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeparationSpec {
    pub condensate_h2o_removal: f64,
    pub absorber_target_dry_co2_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantInputs {
    pub feed: PlantFeedSpec,
    pub design: DesignBasis,
    pub conditions: OperatingConditions,
    pub conversions: ConversionParameters,
    pub overrides: Overrides,
    pub separation: Option<SeparationSpec>,
}

impl Default for PlantInputs {
    fn default() -> Self {
        crate::compile::build_inputs(&sg_project::Project::new("default"))
    }
}
