//! Core types for the soilmix bioturbation model.
//!
//! A soil column is discretized into a stack of [`Layer`]s, ordered from the
//! surface down. A [`Profile`] owns that stack and advances it in time with a
//! sequential, pairwise exchange between adjacent layers (see
//! [`Profile::mix`]). Solvers in `soilmix-solvers` drive the profile until
//! the column is uniform.
//!
//! - [`ColumnParams`] — named, validated input for building a profile
//! - [`Layer`] — one depth interval with its concentration and transport rate
//! - [`Profile`] — the ordered stack of layers and the step operator
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`constraint`] — numeric checks shared by layers and solver configs

pub mod constraint;

mod error;
mod layer;
mod observer;
mod params;
mod profile;

pub use error::{InvalidParameter, LayerError};
pub use layer::Layer;
pub use observer::Observer;
pub use params::{ColumnParams, LayerDepth, MixingCoefficient};
pub use profile::{Profile, spread};
