//! Reusable observers for the soilmix steady-state solver.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any event carrying concentrations or a spread.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for events and actions
//!   ([`HasStep`], [`HasConcentrations`], [`HasSpread`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`MassTracker`] — records the column total at every step
//! - [`LogProgress`] — logs the spread at a fixed step interval
//! - [`StallGuard`] — stops a run whose spread has stopped shrinking
//!
//! Each observer can be passed by value or as `&mut`, so its state remains
//! available after the solve.
//!
//! [`Observer`]: soilmix_core::Observer
//! [`HasStep`]: traits::HasStep
//! [`HasConcentrations`]: traits::HasConcentrations
//! [`HasSpread`]: traits::HasSpread
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod mass;
mod progress;
mod stall;

pub use mass::MassTracker;
pub use progress::LogProgress;
pub use stall::StallGuard;
