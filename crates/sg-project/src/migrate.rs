//! Schema migration framework.

use crate::ProjectError;
use crate::schema::Project;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut project: Project) -> Result<Project, ProjectError> {
    while project.version < LATEST_VERSION {
        project = migrate_one_version(project)?;
    }
    Ok(project)
}

fn migrate_one_version(project: Project) -> Result<Project, ProjectError> {
    match project.version {
        0 => migrate_v0_to_v1(project),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 kept extents as percentages (0–100) under `conversion_percent`.
fn migrate_v0_to_v1(mut project: Project) -> Result<Project, ProjectError> {
    if let Some(percent) = project.conversion_percent.take() {
        project.conversions = percent.scaled(0.01);
    }
    project.version = 1;
    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ConversionsDef, ShiftConversionDef};
    use sg_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn migrate_latest_is_noop() {
        let project = Project::new("test");
        let migrated = migrate_to_latest(project.clone()).unwrap();
        assert_eq!(migrated, project);
    }

    #[test]
    fn migrate_percent_extents_to_fractions() {
        let mut project = Project::new("legacy");
        project.version = 0;
        project.conversion_percent = Some(ConversionsDef {
            hts: ShiftConversionDef { co: 85.0 },
            ..ConversionsDef::default().scaled(100.0)
        });

        let migrated = migrate_to_latest(project).unwrap();
        assert_eq!(migrated.version, LATEST_VERSION);
        assert!(migrated.conversion_percent.is_none());

        let tol = Tolerances::default();
        assert!(nearly_equal(migrated.conversions.hts.co, 0.85, tol));
        assert!(nearly_equal(migrated.conversions.primary.ch4, 0.85, tol));
        assert!(nearly_equal(migrated.conversions.methanator.co2, 0.9999, tol));
    }

    #[test]
    fn v0_without_percent_section_keeps_fractions() {
        let mut project = Project::new("legacy");
        project.version = 0;
        let migrated = migrate_to_latest(project).unwrap();
        assert_eq!(migrated.conversions, ConversionsDef::default());
    }
}
