//! sg-stages: unit-operation transforms for the reforming and synthesis train.
//!
//! Provides the reaction stages, in plant order:
//! - Primary reformer (ethane + methane steam reforming, internal shift)
//! - Secondary reformer (air mixing, H2 combustion, residual reforming, shift)
//! - High- and low-temperature shift converters
//! - Methanator
//! - Single-pass ammonia reactor
//!
//! plus the separation units (condensate knock-out, CO2 absorber, stripper).
//!
//! Every stage implements [`Stage`] and is a pure, total function of its inlet
//! vector and parameters. Extents are not range-checked and no stage clamps
//! its outlet, except for the H2-availability limit on secondary-reformer
//! combustion.
//!
//! # Example
//!
//! ```
//! use sg_species::{ComponentVector, Species};
//! use sg_stages::{ShiftConverter, Stage};
//!
//! let inlet = ComponentVector::from_pairs(&[(Species::CO, 10.0), (Species::H2O, 30.0)]);
//! let hts = ShiftConverter::hts(0.9);
//! let outlet = hts.outlet(&inlet);
//! assert!((outlet[Species::CO] - 1.0).abs() < 1e-12);
//! ```

pub mod ammonia_reactor;
pub mod methanator;
pub mod primary_reformer;
pub mod secondary_reformer;
pub mod separation;
pub mod shift;
pub mod traits;

// Re-exports
pub use ammonia_reactor::AmmoniaReactor;
pub use methanator::Methanator;
pub use primary_reformer::PrimaryReformer;
pub use secondary_reformer::{Combustion, SecondaryReformer};
pub use separation::{Absorber, AbsorberProducts, Condensate, Stripper};
pub use shift::ShiftConverter;
pub use traits::{Stage, StageId};
