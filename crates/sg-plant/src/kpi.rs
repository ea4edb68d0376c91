//! Plant KPIs derived from the feed spec and the evaluated streams.

use crate::feed::{AssembledFeed, steam_kgmol};
use crate::inputs::{DesignBasis, PlantInputs};
use serde::Serialize;
use sg_core::constants::{HOURS_PER_DAY, KG_PER_TONNE, kgmol_to_nm3, nm3_to_kgmol};
use sg_core::numeric::ratio_or_zero;
use sg_species::{ComponentVector, Species};
use sg_stages::StageId;

/// Σ carbon atoms × fraction.
pub fn carbon_number(fractions: &ComponentVector) -> f64 {
    fractions.iter().map(|(s, x)| s.carbon_atoms() * x).sum()
}

/// Steam kgmol/hr over carbon kgmol/hr in the process gas.
pub fn steam_to_carbon(
    steam_t_per_hr: f64,
    carbon_number: f64,
    process_gas_nm3_per_hr: f64,
) -> f64 {
    if carbon_number <= 0.0 || process_gas_nm3_per_hr <= 0.0 {
        return 0.0;
    }
    steam_kgmol(steam_t_per_hr) / (carbon_number * nm3_to_kgmol(process_gas_nm3_per_hr))
}

/// (flow × carbon number) over the design product, as a fraction.
pub fn front_end_load(
    process_gas_nm3_per_hr: f64,
    carbon_number: f64,
    design: &DesignBasis,
) -> f64 {
    ratio_or_zero(
        process_gas_nm3_per_hr * carbon_number,
        design.flow_nm3_per_hr * design.carbon_number,
    )
}

/// H2/N2 of a stream; 0 without nitrogen.
pub fn h_to_n(moles: &ComponentVector) -> f64 {
    let n2 = moles[Species::N2];
    if n2 == 0.0 { 0.0 } else { moles[Species::H2] / n2 }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageDelta {
    pub stage: StageId,
    pub delta_t_c: f64,
    pub delta_p_kgf_cm2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub process_gas_carbon_number: f64,
    /// Carbon number of the assembled primary inlet, dry basis. Steam to
    /// carbon and front end load are based on this one.
    pub feed_carbon_number: f64,
    pub steam_to_carbon: f64,
    pub front_end_load: f64,
    /// At the ammonia-reactor inlet actually consumed.
    pub h_to_n: f64,
    pub gas_to_air: f64,
    pub ammonia_kgmol_per_hr: f64,
    pub ammonia_t_per_day: f64,
    pub stage_deltas: Vec<StageDelta>,
}

impl Kpis {
    pub fn compute(
        inputs: &PlantInputs,
        feed: &AssembledFeed,
        ammonia_inlet: &ComponentVector,
        ammonia_outlet: &ComponentVector,
    ) -> Self {
        let pg = &inputs.feed.process_gas;
        let pg_cn = pg.composition.carbon_number();

        let primary_dry = feed.primary_inlet.dry_total();
        let feed_carbon_number = if primary_dry > 0.0 {
            carbon_number(&feed.primary_inlet.map(|s, v| {
                if s.is_dry() { v / primary_dry } else { 0.0 }
            }))
        } else {
            0.0
        };

        let air_dry_nm3 = kgmol_to_nm3(feed.air.dry_total());
        let ammonia_kgmol_per_hr = ammonia_outlet[Species::NH3] - ammonia_inlet[Species::NH3];

        Self {
            process_gas_carbon_number: pg_cn,
            feed_carbon_number,
            steam_to_carbon: steam_to_carbon(
                inputs.feed.steam_t_per_hr,
                feed_carbon_number,
                pg.flow_nm3_per_hr,
            ),
            front_end_load: front_end_load(pg.flow_nm3_per_hr, feed_carbon_number, &inputs.design),
            h_to_n: h_to_n(ammonia_inlet),
            gas_to_air: ratio_or_zero(pg.flow_nm3_per_hr, air_dry_nm3),
            ammonia_kgmol_per_hr,
            ammonia_t_per_day: ammonia_kgmol_per_hr * Species::NH3.molar_mass() * HOURS_PER_DAY
                / KG_PER_TONNE,
            stage_deltas: inputs
                .conditions
                .iter()
                .map(|(stage, c)| StageDelta {
                    stage,
                    delta_t_c: c.delta_t_c(),
                    delta_p_kgf_cm2: c.delta_p_kgf_cm2(),
                })
                .collect(),
        }
    }
}
