//! Species bookkeeping errors.

use sg_core::CoreError;
use thiserror::Error;

/// Result type for species operations.
pub type SpeciesResult<T> = Result<T, SpeciesError>;

/// Errors raised at the species boundary (parsing keys, loading vectors).
///
/// Arithmetic on vectors never fails; these only come from text or maps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpeciesError {
    /// Species key not in the tracked set.
    #[error("Unknown species: {key}")]
    UnknownSpecies { key: String },

    /// A full vector was expected but some species were absent.
    #[error("Incomplete component vector, missing: {missing}")]
    IncompleteVector { missing: String },
}

impl From<SpeciesError> for CoreError {
    fn from(err: SpeciesError) -> Self {
        match err {
            SpeciesError::UnknownSpecies { .. } => CoreError::InvalidArg {
                what: "unknown species",
            },
            SpeciesError::IncompleteVector { .. } => CoreError::InvalidArg {
                what: "incomplete component vector",
            },
        }
    }
}
