//! Whole-plant scenarios.

use sg_core::numeric::{Tolerances, nearly_equal};
use sg_plant::{PlantInputs, PlantSession, evaluate_pipeline};
use sg_species::{ComponentVector, DryComposition, Species};
use sg_stages::StageId;

fn scenario_inputs() -> PlantInputs {
    let mut inputs = PlantInputs::default();
    inputs.feed.process_gas.composition = DryComposition::from_pairs(&[
        (Species::CH4, 95.0),
        (Species::C2H6, 2.5),
        (Species::CO2, 0.5),
        (Species::H2, 2.0),
    ]);
    inputs.feed.process_gas.flow_nm3_per_hr = 100_000.0;
    inputs.feed.recycle_gas.flow_nm3_per_hr = 0.0;
    inputs.feed.steam_t_per_hr = 130.0;
    inputs.conversions.primary.ch4 = 0.65;
    inputs.conversions.primary.c2h6 = 1.0;
    inputs.conversions.primary.co = 0.1;
    inputs
}

#[test]
fn primary_methane_follows_inlet_extent() {
    let outputs = evaluate_pipeline(&scenario_inputs());
    let primary = outputs.stage(StageId::PrimaryReformer);

    let inlet_ch4 = primary.inlet.moles()[Species::CH4];
    assert!(nearly_equal(
        inlet_ch4,
        0.95 * 100_000.0 / 22.414,
        Tolerances::default()
    ));
    assert!(nearly_equal(
        primary.outlet.moles()[Species::CH4],
        inlet_ch4 * (1.0 - 0.65),
        Tolerances::default()
    ));
    assert_eq!(primary.outlet.moles()[Species::C2H6], 0.0);
}

#[test]
fn process_gas_carbon_number() {
    let outputs = evaluate_pipeline(&scenario_inputs());
    assert!(nearly_equal(
        outputs.kpis.process_gas_carbon_number,
        1.005,
        Tolerances::default()
    ));
    // Without recycle the primary inlet's dry basis is the process gas itself.
    assert!(nearly_equal(
        outputs.kpis.feed_carbon_number,
        1.005,
        Tolerances {
            abs: 1e-12,
            rel: 1e-9
        }
    ));
}

#[test]
fn default_plant_kpis() {
    let outputs = evaluate_pipeline(&PlantInputs::default());
    let kpis = &outputs.kpis;
    let tol = Tolerances::default();

    // 5 000 Nm³/hr of carbon-free recycle dilutes the dry primary inlet.
    let feed_cn = 1.005 * 100_000.0 / 105_000.0;
    assert!(nearly_equal(
        kpis.feed_carbon_number,
        feed_cn,
        Tolerances {
            abs: 1e-12,
            rel: 1e-9
        }
    ));
    assert!(nearly_equal(
        kpis.steam_to_carbon,
        250.0 * 1000.0 / 18.0 / (feed_cn * 100_000.0 / 22.414),
        Tolerances {
            abs: 1e-12,
            rel: 1e-9
        }
    ));
    assert!(nearly_equal(
        kpis.front_end_load,
        (100_000.0 * feed_cn) / (110_000.0 * 1.05),
        Tolerances {
            abs: 1e-12,
            rel: 1e-9
        }
    ));
    assert!(nearly_equal(
        kpis.gas_to_air,
        100_000.0 / 15_000.0,
        Tolerances {
            abs: 1e-9,
            rel: 1e-9
        }
    ));
    assert!(kpis.ammonia_kgmol_per_hr > 0.0);
    assert!(nearly_equal(
        kpis.ammonia_t_per_day,
        kpis.ammonia_kgmol_per_hr * 17.0 * 24.0 / 1000.0,
        tol
    ));
    assert_eq!(kpis.stage_deltas.len(), StageId::COUNT);
    assert_eq!(kpis.stage_deltas[0].delta_t_c, 290.0);
}

#[test]
fn plant_conserves_atoms_without_overrides() {
    let outputs = evaluate_pipeline(&PlantInputs::default());
    let fed = outputs.feed.primary_inlet.elements() + outputs.feed.air.elements();
    let out = outputs.stage(StageId::AmmoniaReactor).outlet.elements();
    let scale = fed.max_abs();
    assert!(fed.nearly_equal(
        &out,
        Tolerances {
            abs: 1e-9 * scale,
            rel: 1e-9
        }
    ));
}

#[test]
fn combustion_clamp_engages_with_oxygen_rich_air() {
    let mut inputs = PlantInputs::default();
    inputs.feed.air.composition = DryComposition::from_pairs(&[(Species::O2, 100.0)]);
    inputs.feed.air.flow_nm3_per_hr = 1.0e6;

    let outputs = evaluate_pipeline(&inputs);
    let combustion = outputs.diagnostics.combustion;
    let primary_h2 = outputs.stage(StageId::PrimaryReformer).outlet.moles()[Species::H2];

    assert!(combustion.h2_limited);
    assert_eq!(combustion.burned_h2, primary_h2);
    assert_eq!(combustion.burned_o2, primary_h2 / 2.0);
    assert!(combustion.burned_o2 < combustion.requested_o2);
}

#[test]
fn aggressive_methanation_reports_negative_hydrogen() {
    let mut inputs = PlantInputs::default();
    inputs.overrides.methanator = Some(ComponentVector::from_pairs(&[
        (Species::CO2, 50.0),
        (Species::H2, 1.0),
    ]));
    let outputs = evaluate_pipeline(&inputs);
    assert!(outputs.stage(StageId::Methanator).outlet.moles()[Species::H2] < 0.0);
    assert!(!outputs.diagnostics.negative_flows.is_empty());
}

#[test]
fn session_override_clear_restores_derived_inlet() {
    let mut session = PlantSession::default();
    let lts_out = *session.outputs().stage(StageId::Lts).outlet.moles();

    session.set_override(
        sg_plant::Anchor::Methanator,
        ComponentVector::from_pairs(&[(Species::N2, 1.0)]),
    );
    assert_ne!(
        session.outputs().stage(StageId::Methanator).inlet.moles(),
        &lts_out
    );

    session.clear_override(sg_plant::Anchor::Methanator);
    assert_eq!(
        session.outputs().stage(StageId::Methanator).inlet.moles(),
        &lts_out
    );
    assert!(!session.outputs().stage(StageId::Methanator).overridden);
}

#[test]
fn recycle_changes_steam_to_carbon_but_not_process_gas_carbon_number() {
    let lean = scenario_inputs();
    let mut diluted = scenario_inputs();
    diluted.feed.recycle_gas.flow_nm3_per_hr = 20_000.0;

    let lean_kpis = evaluate_pipeline(&lean).kpis;
    let diluted_kpis = evaluate_pipeline(&diluted).kpis;

    assert_eq!(
        lean_kpis.process_gas_carbon_number,
        diluted_kpis.process_gas_carbon_number
    );
    assert!(diluted_kpis.feed_carbon_number < lean_kpis.feed_carbon_number);
    assert!(diluted_kpis.steam_to_carbon > lean_kpis.steam_to_carbon);
    assert!(diluted_kpis.front_end_load < lean_kpis.front_end_load);
}
