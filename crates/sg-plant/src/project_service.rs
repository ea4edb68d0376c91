//! Project loading, saving, validation, and override persistence.

use std::path::Path;

use sg_core::CoreError;
use sg_project::schema::Project;
use sg_species::{ComponentVector, Species};

use crate::compile::{compile_project, store_override};
use crate::error::{PlantError, PlantResult};
use crate::overrides::{Anchor, OverrideEdit};
use crate::pipeline::{PlantOutputs, evaluate_pipeline};

/// Load, migrate and validate a project (YAML or JSON by extension).
pub fn load_project(path: &Path) -> PlantResult<Project> {
    Ok(sg_project::load(path)?)
}

/// Validate and save a project (YAML or JSON by extension).
pub fn save_project(path: &Path, project: &Project) -> PlantResult<()> {
    Ok(sg_project::save(path, project)?)
}

/// Write a factory-default project; refuses to overwrite.
pub fn init_project(path: &Path, name: &str) -> PlantResult<Project> {
    if path.exists() {
        return Err(PlantError::ProjectExists {
            path: path.to_path_buf(),
        });
    }
    let project = Project::new(name);
    save_project(path, &project)?;
    Ok(project)
}

/// Structural validation plus the list of numeric findings.
pub fn validate_project(project: &Project) -> PlantResult<Vec<CoreError>> {
    sg_project::validate_project(project)?;
    Ok(sg_project::check_values(project))
}

/// Compile and evaluate a project.
pub fn evaluate_project(project: &Project) -> PlantResult<PlantOutputs> {
    let inputs = compile_project(project)?;
    Ok(evaluate_pipeline(&inputs))
}

/// Apply one override edit to the project and return the stored vector.
///
/// The base is the stored anchor when present, else the inlet the stage
/// derives from the current project.
pub fn edit_project_override(
    project: &mut Project,
    anchor: Anchor,
    species: Species,
    edit: OverrideEdit,
) -> PlantResult<ComponentVector> {
    let mut inputs = compile_project(project)?;
    let outputs = evaluate_pipeline(&inputs);
    let patched = inputs
        .overrides
        .edit(anchor, outputs.derived_inlet(anchor), species, edit);
    store_override(project, anchor, Some(&patched));
    Ok(patched)
}

/// Remove an override from the project. Returns false when none was set.
pub fn clear_project_override(project: &mut Project, anchor: Anchor) -> bool {
    let had = match anchor {
        Anchor::Methanator => project.overrides.methanator.is_some(),
        Anchor::AmmoniaReactor => project.overrides.ammonia_reactor.is_some(),
    };
    store_override(project, anchor, None);
    had
}
