//! Project validation logic.
//!
//! `validate_project` checks structure and runs on every load and save.
//! `check_values` reports numeric findings (non-finite entries, extents
//! outside 0..=1, negative flows) without rejecting the project; the engine
//! coerces non-finite inputs to zero and evaluates the rest as given.

use crate::schema::{Project, SpeciesMap, StageConditionsDef};
use sg_core::CoreError;
use sg_core::numeric::{ensure_finite, ensure_in_range};
use sg_species::Species;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unknown species '{key}' in {context}")]
    UnknownSpecies { key: String, context: String },

    #[error("Duplicate species {species} in {context}")]
    DuplicateSpecies { species: String, context: String },

    #[error("Incomplete override for {anchor}: missing {missing}")]
    IncompleteOverride { anchor: String, missing: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    if project.version == crate::migrate::LATEST_VERSION && project.conversion_percent.is_some() {
        return Err(ValidationError::InvalidValue {
            field: "conversion_percent".to_string(),
            value: "present".to_string(),
            reason: format!(
                "only valid in version 0 projects; use 'conversions' in version {}",
                crate::migrate::LATEST_VERSION
            ),
        });
    }

    let feed = &project.feed;
    validate_species_keys(&feed.process_gas.composition_pct, "feed.process_gas")?;
    validate_species_keys(&feed.recycle_gas.composition_pct, "feed.recycle_gas")?;
    validate_species_keys(&feed.air.composition_pct, "feed.air")?;

    let overrides = &project.overrides;
    for (anchor, map) in [
        ("methanator", &overrides.methanator),
        ("ammonia_reactor", &overrides.ammonia_reactor),
    ] {
        if let Some(map) = map {
            validate_override(anchor, map)?;
        }
    }

    Ok(())
}

fn parse_key(key: &str, context: &str) -> Result<Species, ValidationError> {
    key.parse::<Species>()
        .map_err(|_| ValidationError::UnknownSpecies {
            key: key.to_string(),
            context: context.to_string(),
        })
}

/// Every key names a species, and no species is named twice (e.g. "AR" and "argon").
fn validate_species_keys(map: &SpeciesMap, context: &str) -> Result<Vec<Species>, ValidationError> {
    let mut seen = Vec::with_capacity(map.len());
    for key in map.keys() {
        let species = parse_key(key, context)?;
        if seen.contains(&species) {
            return Err(ValidationError::DuplicateSpecies {
                species: species.key().to_string(),
                context: context.to_string(),
            });
        }
        seen.push(species);
    }
    Ok(seen)
}

fn validate_override(anchor: &str, map: &SpeciesMap) -> Result<(), ValidationError> {
    let context = format!("overrides.{anchor}");
    let present = validate_species_keys(map, &context)?;
    let missing: Vec<&str> = Species::ALL
        .iter()
        .filter(|s| !present.contains(*s))
        .map(|s| s.key())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::IncompleteOverride {
            anchor: anchor.to_string(),
            missing: missing.join(", "),
        });
    }
    Ok(())
}

/// Numeric findings that do not make the project unusable.
pub fn check_values(project: &Project) -> Vec<CoreError> {
    let mut findings = Vec::new();
    let mut push = |result: Result<f64, CoreError>| {
        if let Err(e) = result {
            findings.push(e);
        }
    };

    let feed = &project.feed;
    push(ensure_in_range(
        feed.process_gas.flow_nm3_per_hr,
        0.0,
        f64::MAX,
        "feed.process_gas.flow_nm3_per_hr",
    ));
    push(ensure_in_range(
        feed.recycle_gas.flow_nm3_per_hr,
        0.0,
        f64::MAX,
        "feed.recycle_gas.flow_nm3_per_hr",
    ));
    push(ensure_in_range(feed.steam_t_per_hr, 0.0, f64::MAX, "feed.steam_t_per_hr"));
    push(ensure_in_range(
        feed.air.flow_nm3_per_hr,
        0.0,
        f64::MAX,
        "feed.air.flow_nm3_per_hr",
    ));
    push(ensure_in_range(
        feed.air.relative_humidity_pct,
        0.0,
        100.0,
        "feed.air.relative_humidity_pct",
    ));
    push(ensure_finite(feed.air.ambient_temp_c, "feed.air.ambient_temp_c"));

    for (what, map) in [
        ("feed.process_gas.composition_pct", &feed.process_gas.composition_pct),
        ("feed.recycle_gas.composition_pct", &feed.recycle_gas.composition_pct),
        ("feed.air.composition_pct", &feed.air.composition_pct),
    ] {
        for value in map.values() {
            push(ensure_in_range(*value, 0.0, 100.0, what));
        }
    }

    push(ensure_finite(project.design.flow_nm3_per_hr, "design.flow_nm3_per_hr"));
    push(ensure_finite(project.design.carbon_number, "design.carbon_number"));

    for (what, value) in project.conversions.entries() {
        push(ensure_in_range(value, 0.0, 1.0, what));
    }

    let c = &project.conditions;
    for (what, stage) in [
        ("conditions.primary", &c.primary),
        ("conditions.secondary", &c.secondary),
        ("conditions.hts", &c.hts),
        ("conditions.lts", &c.lts),
        ("conditions.methanator", &c.methanator),
        ("conditions.ammonia_reactor", &c.ammonia_reactor),
    ] {
        for value in condition_values(stage) {
            push(ensure_finite(value, what));
        }
    }

    for (what, map) in [
        ("overrides.methanator", &project.overrides.methanator),
        ("overrides.ammonia_reactor", &project.overrides.ammonia_reactor),
    ] {
        for value in map.iter().flat_map(|m| m.values()) {
            push(ensure_finite(*value, what));
        }
    }

    if let Some(sep) = &project.separation {
        push(ensure_in_range(
            sep.condensate_h2o_removal,
            0.0,
            1.0,
            "separation.condensate_h2o_removal",
        ));
        push(ensure_in_range(
            sep.absorber_target_dry_co2_pct,
            0.0,
            100.0,
            "separation.absorber_target_dry_co2_pct",
        ));
    }

    findings
}

fn condition_values(stage: &StageConditionsDef) -> [f64; 4] {
    [
        stage.inlet_temp_c,
        stage.outlet_temp_c,
        stage.inlet_pressure_kgf_cm2g,
        stage.outlet_pressure_kgf_cm2g,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_override(value: f64) -> SpeciesMap {
        Species::ALL
            .iter()
            .map(|s| (s.key().to_string(), value))
            .collect()
    }

    #[test]
    fn defaults_are_valid() {
        let project = Project::new("P");
        validate_project(&project).unwrap();
        assert!(check_values(&project).is_empty());
    }

    #[test]
    fn unknown_species_rejected() {
        let mut project = Project::new("P");
        project
            .feed
            .process_gas
            .composition_pct
            .insert("XE".to_string(), 1.0);
        let err = validate_project(&project).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownSpecies { .. }));
    }

    #[test]
    fn aliased_duplicate_rejected() {
        let mut project = Project::new("P");
        project
            .feed
            .air
            .composition_pct
            .insert("argon".to_string(), 0.5);
        let err = validate_project(&project).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateSpecies { .. }));
    }

    #[test]
    fn partial_override_rejected() {
        let mut project = Project::new("P");
        let mut partial = full_override(1.0);
        partial.remove("NH3");
        partial.remove("O2");
        project.overrides.methanator = Some(partial);

        match validate_project(&project).unwrap_err() {
            ValidationError::IncompleteOverride { anchor, missing } => {
                assert_eq!(anchor, "methanator");
                assert_eq!(missing, "NH3, O2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn complete_override_accepted() {
        let mut project = Project::new("P");
        project.overrides.ammonia_reactor = Some(full_override(2.0));
        validate_project(&project).unwrap();
    }

    #[test]
    fn future_version_rejected() {
        let mut project = Project::new("P");
        project.version = crate::migrate::LATEST_VERSION + 1;
        assert!(matches!(
            validate_project(&project),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn value_findings_are_reported_not_fatal() {
        let mut project = Project::new("P");
        project.conversions.hts.co = 1.2;
        project.feed.steam_t_per_hr = f64::NAN;
        project.feed.air.relative_humidity_pct = 120.0;

        validate_project(&project).unwrap();
        let findings = check_values(&project);
        assert_eq!(findings.len(), 3);
        assert!(findings.iter().any(|e| matches!(
            e,
            CoreError::NonFinite {
                what: "feed.steam_t_per_hr",
                ..
            }
        )));
        assert!(findings.iter().any(|e| matches!(
            e,
            CoreError::OutOfRange {
                what: "conversions.hts.co",
                ..
            }
        )));
    }
}
