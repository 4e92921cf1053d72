//! Steady-state solver for bioturbation mixing.
//!
//! # Algorithm
//!
//! The solver applies [`Profile::mix`] with a fixed time step until the
//! column is uniform:
//!
//! ```text
//! while not is_uniform(c, tol) and steps < max_iters:
//!     profile.mix(dt)
//!     record c
//! ```
//!
//! Uniformity is an absolute test on the range of the current concentrations,
//! `max(c) − min(c) < tol`, evaluated on the initial state and after every
//! step. A single-layer profile, or one that starts uniform, converges with
//! zero steps.
//!
//! Running out of steps is not an error. The solver logs a warning and
//! returns the history with [`Status::MaxIters`], so callers can branch on
//! the status instead of parsing messages.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] for the initial state (step 0) and one after
//! every mixing step. Observers can return [`Action::StopEarly`] to halt; the
//! history then ends at that step with [`Status::StoppedByObserver`]. A state
//! that is already uniform is reported as [`Status::Converged`] regardless of
//! the observer's action.
//!
//! # Example
//!
//! ```
//! use soilmix_core::ColumnParams;
//! use soilmix_solvers::steady_state::{self, Config, Status};
//!
//! let params = ColumnParams::new(4, 0.1, vec![4e-9, 0.0, 0.0, 0.0], vec![20.0; 4], 1e-8);
//! let solution = steady_state::solve_unobserved(&params, &Config::default())?;
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert_eq!(solution.history.as_array().dim(), (4, solution.steps + 1));
//! # Ok::<(), steady_state::Error>(())
//! ```

mod action;
mod config;
mod error;
mod event;
mod history;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use history::{History, Table};
pub use solution::{Solution, Status};

use log::{debug, warn};
use soilmix_core::{ColumnParams, Observer, Profile};

/// Builds a profile from `params` and mixes it to steady state.
///
/// The observer receives an [`Event`] for the initial state and after every
/// step. See the [module docs](self) for details on termination.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the column parameters are invalid.
/// No stepping takes place in that case.
pub fn solve<Obs>(params: &ColumnParams, config: &Config, observer: Obs) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let profile = Profile::new(params)?;
    Ok(solve_profile(profile, config, observer))
}

/// Builds a profile from `params` and mixes it to steady state without
/// observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the column parameters are invalid.
pub fn solve_unobserved(params: &ColumnParams, config: &Config) -> Result<Solution, Error> {
    solve(params, config, ())
}

/// Mixes an already built profile to steady state.
///
/// The profile is consumed; its state after the last step is the final
/// column of the returned history.
pub fn solve_profile<Obs>(mut profile: Profile, config: &Config, mut observer: Obs) -> Solution
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let n_layers = profile.layer_count();
    let dt = config.dt_seconds();
    let tol = config.steady_state_tol();
    let max_iters = config.max_iters();

    debug!("mixing {n_layers} layers: dt = {dt} s, tol = {tol:e}, max_iters = {max_iters}");

    let mut current: Vec<f64> = profile.concentrations().collect();
    let mut recorded = current.clone();
    let mut steps = 0;

    let status = loop {
        let converged = is_uniform(&current, tol);
        let event = Event {
            step: steps,
            concentrations: &current,
            spread: spread(&current),
        };
        let action = observer.observe(&event);

        if converged {
            debug!("steady state reached after {steps} steps");
            break Status::Converged;
        }
        if let Some(Action::StopEarly) = action {
            debug!("stopped by observer after {steps} steps");
            break Status::StoppedByObserver;
        }
        if steps == max_iters {
            warn!("steady state not reached after {max_iters} steps");
            break Status::MaxIters;
        }

        profile.mix(dt);
        steps += 1;

        current.clear();
        current.extend(profile.concentrations());
        recorded.extend_from_slice(&current);
    };

    Solution {
        status,
        history: History::from_step_major(n_layers, &recorded),
        steps,
        dt: config.dt(),
    }
}

/// Returns `true` if all values lie within `tol` of each other.
///
/// The test is absolute: `max − min < tol`. An empty slice is uniform; a slice
/// holding NaN never is.
#[must_use]
pub fn is_uniform(values: &[f64], tol: f64) -> bool {
    values.is_empty() || spread(values) < tol
}

/// Returns `max − min` of the values, zero for an empty slice, and NaN if any
/// value is NaN.
#[must_use]
pub fn spread(values: &[f64]) -> f64 {
    soilmix_core::spread(values.iter().copied())
}
