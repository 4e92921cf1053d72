//! Solvers for soilmix profiles.
//!
//! # Solvers
//!
//! - [`steady_state`] — steps a profile with explicit bioturbation mixing
//!   until every layer holds the same concentration, or a step budget runs out

pub mod steady_state;
