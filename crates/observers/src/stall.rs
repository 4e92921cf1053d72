use std::collections::VecDeque;

use log::debug;
use soilmix_core::Observer;

use crate::traits::{CanStopEarly, HasSpread};

/// Stops a run whose spread has stopped shrinking.
///
/// Keeps the spreads of the last `patience` steps. Once the window is full,
/// the run is stopped if the current spread is not at least
/// `min_reduction` (relative) below the spread `patience` steps ago:
///
/// ```text
/// stop if spread_now > (1 − min_reduction) · spread_then
/// ```
///
/// A layer without organisms blocks all exchange below it, and the spread
/// then settles at a non-zero value; this guard ends such runs long before
/// the step budget does.
#[derive(Debug, Clone)]
pub struct StallGuard {
    patience: usize,
    min_reduction: f64,
    window: VecDeque<f64>,
}

impl StallGuard {
    /// Creates a guard comparing spreads `patience` steps apart.
    ///
    /// A patience of zero is treated as one. `min_reduction` is clamped to
    /// `[0, 1)`, and NaN is treated as zero; with zero, only a growing spread
    /// stops the run.
    #[must_use]
    pub fn new(patience: usize, min_reduction: f64) -> Self {
        let patience = patience.max(1);
        let min_reduction = if min_reduction.is_nan() {
            0.0
        } else {
            min_reduction.clamp(0.0, 1.0 - f64::EPSILON)
        };
        Self {
            patience,
            min_reduction,
            window: VecDeque::with_capacity(patience + 1),
        }
    }

    fn is_stalled(&mut self, spread: f64) -> bool {
        self.window.push_back(spread);
        if self.window.len() <= self.patience {
            return false;
        }

        let then = self.window.pop_front().unwrap_or(spread);
        spread > (1.0 - self.min_reduction) * then
    }
}

impl<E, A> Observer<E, A> for StallGuard
where
    E: HasSpread,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let spread = event.spread();
        if self.is_stalled(spread) {
            debug!("spread stalled at {spread:e}");
            return Some(A::stop_early());
        }
        None
    }
}

impl<E, A> Observer<E, A> for &mut StallGuard
where
    E: HasSpread,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Spread(f64);

    impl HasSpread for Spread {
        fn spread(&self) -> f64 {
            self.0
        }
    }

    struct Stop;

    impl CanStopEarly for Stop {
        fn stop_early() -> Self {
            Stop
        }
    }

    fn run(guard: &mut StallGuard, spreads: &[f64]) -> Option<usize> {
        spreads.iter().position(|&s| {
            let action: Option<Stop> = guard.observe(&Spread(s));
            action.is_some()
        })
    }

    #[test]
    fn shrinking_spread_keeps_running() {
        let mut guard = StallGuard::new(2, 0.1);
        assert_eq!(run(&mut guard, &[8.0, 4.0, 2.0, 1.0, 0.5]), None);
    }

    #[test]
    fn flat_spread_stops_after_patience() {
        let mut guard = StallGuard::new(3, 0.01);
        assert_eq!(run(&mut guard, &[1.0, 0.9, 0.9, 0.9, 0.9, 0.9]), Some(4));
    }

    #[test]
    fn needs_a_full_window() {
        let mut guard = StallGuard::new(5, 0.5);
        assert_eq!(run(&mut guard, &[1.0, 1.0, 1.0, 1.0, 1.0]), None);
    }

    #[test]
    fn nan_reduction_stops_only_on_growth() {
        let mut guard = StallGuard::new(1, f64::NAN);
        assert_eq!(run(&mut guard, &[1.0, 1.0, 1.0]), None);

        let mut guard = StallGuard::new(1, f64::NAN);
        assert_eq!(run(&mut guard, &[1.0, 1.0, 2.0]), Some(2));
    }

    #[test]
    fn reduction_is_clamped_below_one() {
        let mut guard = StallGuard::new(1, 5.0);
        assert!(guard.min_reduction < 1.0);
        assert_eq!(run(&mut guard, &[8.0, 0.0]), None);

        let guard = StallGuard::new(1, -0.5);
        assert_eq!(guard.min_reduction, 0.0);
    }
}
