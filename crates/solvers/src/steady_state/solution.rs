use uom::si::f64::Time;

use super::History;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every layer holds the same concentration within the tolerance.
    Converged,

    /// Took the maximum number of steps without reaching steady state.
    MaxIters,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a steady-state run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Concentration of every layer at every recorded step.
    pub history: History,

    /// Number of mixing steps taken.
    pub steps: usize,

    /// Length of each mixing step.
    pub dt: Time,
}

impl Solution {
    /// Returns `true` if the run ended at steady state.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the simulated time covered by the run.
    #[must_use]
    pub fn elapsed(&self) -> Time {
        self.dt * self.steps as f64
    }
}
