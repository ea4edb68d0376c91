//! Plant evaluation service layer for the syngas balance.
//!
//! Turns a persisted project into typed `PlantInputs`, runs the stage train
//! through a pure `evaluate_pipeline`, and derives KPIs. Front ends (the CLI,
//! tests) drive it through `PlantSession` or the project service functions.

pub mod cache;
pub mod compile;
pub mod error;
pub mod feed;
pub mod inputs;
pub mod kpi;
pub mod overrides;
pub mod pipeline;
pub mod project_service;
pub mod session;

// Re-export key types for convenience
pub use cache::{EvaluationCache, inputs_digest};
pub use compile::{compile_project, store_override, vector_to_species_map};
pub use error::{PlantError, PlantResult};
pub use feed::{AssembledFeed, assemble_feed, steam_kgmol};
pub use inputs::{
    AirFeed, ConversionParameters, DesignBasis, GasFeed, MethanatorConversions,
    OperatingConditions, PlantFeedSpec, PlantInputs, PrimaryConversions, SecondaryConversions,
    SeparationSpec, StageConditions,
};
pub use kpi::{Kpis, StageDelta};
pub use overrides::{Anchor, OverrideEdit, Overrides, apply_edit};
pub use pipeline::{
    Diagnostics, NegativeFlow, PlantOutputs, SeparationStreams, StageStreams, evaluate_pipeline,
};
pub use project_service::{
    clear_project_override, edit_project_override, evaluate_project, init_project, load_project,
    save_project, validate_project,
};
pub use session::PlantSession;
