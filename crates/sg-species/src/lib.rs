//! sg-species: species bookkeeping for the syngas balance.
//!
//! Provides:
//! - The closed set of ten tracked species (AR, C2H6, CH4, CO, CO2, H2, N2, NH3, O2, H2O)
//! - `ComponentVector`, a fixed-size molar-flow container indexed by `Species`
//! - `Stream`, the derived totals/fractions record built from a vector
//! - Reaction stoichiometry and element (atom) bookkeeping
//! - Dry-composition feed assembly and the humid-air water correlation
//!
//! # Example
//!
//! ```
//! use sg_species::{ComponentVector, Species, Stream};
//!
//! let feed = ComponentVector::from_pairs(&[(Species::CH4, 95.0), (Species::H2O, 300.0)]);
//! let stream = Stream::from_vector(feed);
//! assert!((stream.total_moles() - 395.0).abs() < 1e-12);
//! assert!(stream.mole_fraction(Species::CO) == 0.0);
//! ```

pub mod composition;
pub mod element;
pub mod error;
pub mod humidity;
pub mod reaction;
pub mod species;
pub mod stream;
pub mod vector;

// Re-exports for ergonomics
pub use composition::DryComposition;
pub use element::ElementCounts;
pub use error::{SpeciesError, SpeciesResult};
pub use humidity::{HumidAir, humidify, saturation_pressure_hpa};
pub use reaction::Reaction;
pub use species::Species;
pub use stream::Stream;
pub use vector::ComponentVector;
