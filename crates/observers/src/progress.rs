use log::debug;
use soilmix_core::Observer;

use crate::traits::{HasSpread, HasStep};

/// Logs the step number and spread every `every` steps at `debug` level.
///
/// Step 0 is always logged. The observer never requests an action.
#[derive(Debug, Clone, Copy)]
pub struct LogProgress {
    every: usize,
}

impl LogProgress {
    /// Creates a logger that reports every `every` steps.
    ///
    /// An interval of zero is treated as one.
    #[must_use]
    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
        }
    }

    /// Returns `true` if the given step would be logged.
    #[must_use]
    pub fn reports(&self, step: usize) -> bool {
        step % self.every == 0
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new(100)
    }
}

impl<E, A> Observer<E, A> for LogProgress
where
    E: HasStep + HasSpread,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let step = event.step();
        if self.reports(step) {
            debug!("step {step}: spread = {:e}", event.spread());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_on_interval() {
        let progress = LogProgress::new(10);

        assert!(progress.reports(0));
        assert!(!progress.reports(5));
        assert!(progress.reports(20));
    }

    #[test]
    fn zero_interval_reports_every_step() {
        let progress = LogProgress::new(0);
        assert!((0..5).all(|step| progress.reports(step)));
    }
}
