//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so the
//! observers in this crate do not depend on a particular solver.
//!
//! # Example
//!
//! ```rust
//! use soilmix_core::Observer;
//! use soilmix_observers::traits::{CanStopEarly, HasSpread};
//!
//! struct CloseEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasSpread, A: CanStopEarly> Observer<E, A> for CloseEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.spread() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use soilmix_solvers::steady_state;

/// An event tagged with a step number.
pub trait HasStep {
    /// Returns the step number, 0 for the initial state.
    fn step(&self) -> usize;
}

/// An event that carries the concentration of every layer.
pub trait HasConcentrations {
    /// Returns the layer concentrations, top first.
    fn concentrations(&self) -> &[f64];
}

/// An event that carries the spread (`max − min`) of the concentrations.
pub trait HasSpread {
    /// Returns the spread for this event.
    fn spread(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasStep for steady_state::Event<'_> {
    fn step(&self) -> usize {
        self.step
    }
}

impl HasConcentrations for steady_state::Event<'_> {
    fn concentrations(&self) -> &[f64] {
        self.concentrations
    }
}

impl HasSpread for steady_state::Event<'_> {
    fn spread(&self) -> f64 {
        self.spread
    }
}

impl CanStopEarly for steady_state::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
