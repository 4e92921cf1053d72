use soilmix_core::Observer;

use crate::traits::HasConcentrations;

/// Records the sum of layer concentrations at every observed step.
///
/// The pairwise mixing scheme is not mass conserving, so the recorded totals
/// drift as the run proceeds. [`MassTracker::drift`] reports by how much.
#[derive(Debug, Clone, Default)]
pub struct MassTracker {
    totals: Vec<f64>,
}

impl MassTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the totals recorded so far, one per observed step.
    #[must_use]
    pub fn totals(&self) -> &[f64] {
        &self.totals
    }

    /// Returns `latest − initial`, or `None` before any step is observed.
    #[must_use]
    pub fn drift(&self) -> Option<f64> {
        let first = self.totals.first()?;
        let last = self.totals.last()?;
        Some(last - first)
    }

    /// Returns the drift relative to the initial total.
    ///
    /// Returns `None` before any step is observed or if the initial total is zero.
    #[must_use]
    pub fn relative_drift(&self) -> Option<f64> {
        let first = *self.totals.first()?;
        if first == 0.0 {
            return None;
        }
        self.drift().map(|drift| drift / first)
    }
}

impl<E, A> Observer<E, A> for MassTracker
where
    E: HasConcentrations,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.totals.push(event.concentrations().iter().sum());
        None
    }
}

impl<E, A> Observer<E, A> for &mut MassTracker
where
    E: HasConcentrations,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
