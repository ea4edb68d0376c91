//! Compilation of a persisted `Project` into typed `PlantInputs`, and back.

use crate::error::PlantResult;
use crate::inputs::{
    AirFeed, ConversionParameters, DesignBasis, GasFeed, MethanatorConversions,
    OperatingConditions, PlantFeedSpec, PlantInputs, PrimaryConversions, SecondaryConversions,
    SeparationSpec, StageConditions,
};
use crate::overrides::{Anchor, Overrides};
use sg_core::numeric::coerce_finite;
use sg_project::schema::{Project, SpeciesMap, StageConditionsDef};
use sg_species::{ComponentVector, DryComposition, Species};
use tracing::warn;

/// Validate `project` and build evaluation inputs from it.
pub fn compile_project(project: &Project) -> PlantResult<PlantInputs> {
    sg_project::validate_project(project)?;
    Ok(build_inputs(project))
}

/// Non-finite numbers become 0 on the way in.
fn num(value: f64, field: &str) -> f64 {
    if !value.is_finite() {
        warn!(field, value, "non-finite input coerced to 0");
    }
    coerce_finite(value)
}

/// Species map → vector. Unknown keys are skipped; `validate_project` rejects
/// them before this point.
fn species_vector(map: &SpeciesMap, field: &str) -> ComponentVector {
    let mut vector = ComponentVector::zero();
    for (key, value) in map {
        if let Ok(species) = key.parse::<Species>() {
            vector[species] += num(*value, field);
        }
    }
    vector
}

fn stage_conditions(def: &StageConditionsDef) -> StageConditions {
    StageConditions {
        inlet_temp_c: num(def.inlet_temp_c, "inlet_temp_c"),
        outlet_temp_c: num(def.outlet_temp_c, "outlet_temp_c"),
        inlet_pressure_kgf_cm2g: num(def.inlet_pressure_kgf_cm2g, "inlet_pressure_kgf_cm2g"),
        outlet_pressure_kgf_cm2g: num(def.outlet_pressure_kgf_cm2g, "outlet_pressure_kgf_cm2g"),
    }
}

/// Build inputs without validating. Used for the factory default and after
/// `compile_project` has validated.
pub(crate) fn build_inputs(project: &Project) -> PlantInputs {
    let f = &project.feed;
    let feed = PlantFeedSpec {
        process_gas: GasFeed {
            composition: DryComposition::from_percent(species_vector(
                &f.process_gas.composition_pct,
                "feed.process_gas.composition_pct",
            )),
            flow_nm3_per_hr: num(f.process_gas.flow_nm3_per_hr, "feed.process_gas.flow"),
        },
        recycle_gas: GasFeed {
            composition: DryComposition::from_percent(species_vector(
                &f.recycle_gas.composition_pct,
                "feed.recycle_gas.composition_pct",
            )),
            flow_nm3_per_hr: num(f.recycle_gas.flow_nm3_per_hr, "feed.recycle_gas.flow"),
        },
        steam_t_per_hr: num(f.steam_t_per_hr, "feed.steam_t_per_hr"),
        air: AirFeed {
            composition: DryComposition::from_percent(species_vector(
                &f.air.composition_pct,
                "feed.air.composition_pct",
            )),
            flow_nm3_per_hr: num(f.air.flow_nm3_per_hr, "feed.air.flow"),
            relative_humidity_pct: num(f.air.relative_humidity_pct, "feed.air.relative_humidity"),
            ambient_temp_c: num(f.air.ambient_temp_c, "feed.air.ambient_temp_c"),
        },
    };

    let c = &project.conversions;
    let conversions = ConversionParameters {
        primary: PrimaryConversions {
            ch4: num(c.primary.ch4, "conversions.primary.ch4"),
            c2h6: num(c.primary.c2h6, "conversions.primary.c2h6"),
            co: num(c.primary.co, "conversions.primary.co"),
        },
        secondary: SecondaryConversions {
            ch4: num(c.secondary.ch4, "conversions.secondary.ch4"),
            co: num(c.secondary.co, "conversions.secondary.co"),
            o2: num(c.secondary.o2, "conversions.secondary.o2"),
        },
        hts_co: num(c.hts.co, "conversions.hts.co"),
        lts_co: num(c.lts.co, "conversions.lts.co"),
        methanator: MethanatorConversions {
            co: num(c.methanator.co, "conversions.methanator.co"),
            co2: num(c.methanator.co2, "conversions.methanator.co2"),
        },
        ammonia_n2: num(c.ammonia_reactor.n2, "conversions.ammonia_reactor.n2"),
    };

    let k = &project.conditions;
    let conditions = OperatingConditions::new([
        stage_conditions(&k.primary),
        stage_conditions(&k.secondary),
        stage_conditions(&k.hts),
        stage_conditions(&k.lts),
        stage_conditions(&k.methanator),
        stage_conditions(&k.ammonia_reactor),
    ]);

    let overrides = Overrides {
        methanator: project
            .overrides
            .methanator
            .as_ref()
            .map(|m| species_vector(m, "overrides.methanator")),
        ammonia_reactor: project
            .overrides
            .ammonia_reactor
            .as_ref()
            .map(|m| species_vector(m, "overrides.ammonia_reactor")),
    };

    PlantInputs {
        feed,
        design: DesignBasis {
            flow_nm3_per_hr: num(project.design.flow_nm3_per_hr, "design.flow_nm3_per_hr"),
            carbon_number: num(project.design.carbon_number, "design.carbon_number"),
        },
        conditions,
        conversions,
        overrides,
        separation: project.separation.map(|s| SeparationSpec {
            condensate_h2o_removal: num(s.condensate_h2o_removal, "separation.condensate"),
            absorber_target_dry_co2_pct: num(s.absorber_target_dry_co2_pct, "separation.absorber"),
        }),
    }
}

/// Complete species map, all ten keys, for persisting an anchor.
pub fn vector_to_species_map(vector: &ComponentVector) -> SpeciesMap {
    vector
        .iter()
        .map(|(species, value)| (species.key().to_string(), value))
        .collect()
}

/// Write one anchor back into the project (or remove it).
pub fn store_override(project: &mut Project, anchor: Anchor, vector: Option<&ComponentVector>) {
    let map = vector.map(vector_to_species_map);
    match anchor {
        Anchor::Methanator => project.overrides.methanator = map,
        Anchor::AmmoniaReactor => project.overrides.ammonia_reactor = map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_values_become_zero() {
        let mut project = Project::new("P");
        project.feed.steam_t_per_hr = f64::NAN;
        project.conversions.hts.co = f64::INFINITY;
        project
            .feed
            .process_gas
            .composition_pct
            .insert("N2".to_string(), f64::NAN);

        let inputs = compile_project(&project).unwrap();
        assert_eq!(inputs.feed.steam_t_per_hr, 0.0);
        assert_eq!(inputs.conversions.hts_co, 0.0);
        assert_eq!(inputs.feed.process_gas.composition.percent(Species::N2), 0.0);
        assert_eq!(inputs.feed.process_gas.composition.percent(Species::CH4), 95.0);
    }

    #[test]
    fn aliases_resolve_to_species() {
        let mut project = Project::new("P");
        project.feed.recycle_gas.composition_pct =
            [("hydrogen".to_string(), 70.0), ("nitrogen".to_string(), 30.0)]
                .into_iter()
                .collect();
        let inputs = compile_project(&project).unwrap();
        assert_eq!(inputs.feed.recycle_gas.composition.percent(Species::H2), 70.0);
        assert_eq!(inputs.feed.recycle_gas.composition.percent(Species::N2), 30.0);
    }

    #[test]
    fn override_store_and_compile_roundtrip() {
        let mut project = Project::new("P");
        let vector = ComponentVector::from_fn(|s| s.index() as f64 + 0.5);
        store_override(&mut project, Anchor::AmmoniaReactor, Some(&vector));
        assert_eq!(
            project.overrides.ammonia_reactor.as_ref().map(|m| m.len()),
            Some(Species::COUNT)
        );

        let inputs = compile_project(&project).unwrap();
        assert_eq!(inputs.overrides.ammonia_reactor, Some(vector));
        assert!(inputs.overrides.methanator.is_none());

        store_override(&mut project, Anchor::AmmoniaReactor, None);
        assert!(project.overrides.ammonia_reactor.is_none());
    }

    #[test]
    fn unknown_species_fails_compile() {
        let mut project = Project::new("P");
        project
            .feed
            .air
            .composition_pct
            .insert("helium".to_string(), 1.0);
        assert!(compile_project(&project).is_err());
    }
}
