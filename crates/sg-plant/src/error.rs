//! Error types for the sg-plant service layer.

use std::path::PathBuf;

/// Error type shared by the CLI and any other front end.
#[derive(Debug, thiserror::Error)]
pub enum PlantError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Project file already exists: {path}")]
    ProjectExists { path: PathBuf },

    #[error("Species error: {0}")]
    Species(String),

    #[error("Unknown override anchor: {0} (expected 'methanator' or 'ammonia-reactor')")]
    UnknownAnchor(String),

    #[error("Unknown edit unit: {0} (expected moles, volume, wet or dry)")]
    UnknownUnit(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sg-plant operations.
pub type PlantResult<T> = Result<T, PlantError>;

impl From<sg_project::ProjectError> for PlantError {
    fn from(err: sg_project::ProjectError) -> Self {
        PlantError::Project(err.to_string())
    }
}

impl From<sg_project::ValidationError> for PlantError {
    fn from(err: sg_project::ValidationError) -> Self {
        PlantError::Project(err.to_string())
    }
}

impl From<sg_species::SpeciesError> for PlantError {
    fn from(err: sg_species::SpeciesError) -> Self {
        PlantError::Species(err.to_string())
    }
}

impl From<serde_json::Error> for PlantError {
    fn from(err: serde_json::Error) -> Self {
        PlantError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for PlantError {
    fn from(err: serde_yaml::Error) -> Self {
        PlantError::Serialization(err.to_string())
    }
}
