use crate::{ColumnParams, InvalidParameter, Layer};

/// An ordered stack of soil layers, top first.
///
/// The stack is fixed at construction: layers are never added, removed, or
/// reordered, and adjacency in the stack is physical adjacency in the column.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    layers: Vec<Layer>,
}

impl Profile {
    /// Builds a profile from column parameters.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidParameter`] if the parameters are inconsistent or
    /// out of range. See [`ColumnParams::layers`].
    pub fn new(params: &ColumnParams) -> Result<Self, InvalidParameter> {
        Self::from_layers(params.layers()?)
    }

    /// Builds a profile from already validated layers, top first.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter::NoLayers`] if `layers` is empty.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, InvalidParameter> {
        if layers.is_empty() {
            return Err(InvalidParameter::NoLayers);
        }
        Ok(Self { layers })
    }

    /// Advances every layer by one explicit time step `dt`.
    ///
    /// Adjacent pairs `(i, i + 1)` are processed top to bottom. For each pair,
    /// with `f = k_i · dt` taken from the upper layer's transport rate:
    ///
    /// ```text
    /// c_i     ← c_i     + f · (c_{i+1} − c_i)
    /// c_{i+1} ← c_{i+1} + f · (c_i − c_{i+1})
    /// ```
    ///
    /// The second update reads the already updated `c_i`, and a layer is
    /// touched twice per step (once as the lower member of a pair, once as the
    /// upper member of the next). The result depends on this ordering and is
    /// not mass conserving in general.
    ///
    /// `f` is not bounded: a `dt` with `f > 1` overshoots and oscillates.
    pub fn mix(&mut self, dt: f64) {
        for i in 1..self.layers.len() {
            let (above, below) = self.layers.split_at_mut(i);
            let upper = &mut above[i - 1];
            let lower = &mut below[0];

            let fraction = upper.transport_rate() * dt;
            upper.concentration += fraction * (lower.concentration - upper.concentration);
            lower.concentration += fraction * (upper.concentration - lower.concentration);
        }
    }

    /// Returns the layers, top first.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns the number of layers (always at least one).
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Returns the current concentrations, top first.
    pub fn concentrations(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.layers.iter().map(Layer::concentration)
    }

    /// Returns the sum of all layer concentrations.
    #[must_use]
    pub fn total_concentration(&self) -> f64 {
        self.concentrations().sum()
    }

    /// Returns `max − min` of the current concentrations.
    ///
    /// See [`spread`] for NaN handling.
    #[must_use]
    pub fn spread(&self) -> f64 {
        spread(self.concentrations())
    }
}

/// Returns `max − min` of the values, or zero if there are none.
///
/// NaN propagates: if any value is NaN, or the range is `∞ − ∞`, the result
/// is NaN, so no tolerance test on it can pass.
#[must_use]
pub fn spread(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut bounds: Option<(f64, f64)> = None;
    for value in values {
        if value.is_nan() {
            return f64::NAN;
        }
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(value), max.max(value)),
            None => (value, value),
        });
    }
    bounds.map_or(0.0, |(min, max)| max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn profile(concentrations: &[f64], densities: &[f64]) -> Profile {
        let params = ColumnParams::new(
            concentrations.len(),
            0.1,
            concentrations.to_vec(),
            densities.to_vec(),
            1e-8,
        );
        Profile::new(&params).unwrap()
    }

    #[test]
    fn empty_layers_are_rejected() {
        assert_eq!(Profile::from_layers(vec![]), Err(InvalidParameter::NoLayers));
    }

    #[test]
    fn single_layer_is_unchanged_by_mixing() {
        let mut profile = profile(&[3.0], &[20.0]);
        profile.mix(86_400.0);

        assert_eq!(profile.concentrations().collect::<Vec<_>>(), vec![3.0]);
        assert_eq!(profile.spread(), 0.0);
    }

    #[test]
    fn first_step_updates_pairs_sequentially() {
        // f = 20 · 1e-8 / 0.1 · 86400 = 0.1728
        let mut profile = profile(&[4e-9, 0.0, 0.0, 0.0], &[20.0; 4]);
        profile.mix(86_400.0);

        let f: f64 = 0.1728;
        let c0 = 4e-9 * (1.0 - f);
        let c1_first = f * c0;
        let c1 = c1_first * (1.0 - f);
        let c2_first = f * c1;
        let c2 = c2_first * (1.0 - f);
        let c3 = f * c2;

        let c: Vec<f64> = profile.concentrations().collect();
        assert_relative_eq!(c[0], c0, max_relative = 1e-12);
        assert_relative_eq!(c[1], c1, max_relative = 1e-12);
        assert_relative_eq!(c[2], c2, max_relative = 1e-12);
        assert_relative_eq!(c[3], c3, max_relative = 1e-12);
    }

    #[test]
    fn mixing_loses_mass() {
        let mut profile = profile(&[4e-9, 0.0, 0.0, 0.0], &[20.0; 4]);
        let before = profile.total_concentration();
        profile.mix(86_400.0);

        assert_relative_eq!(
            profile.total_concentration(),
            3.861_047_586_984_844e-9,
            max_relative = 1e-12
        );
        assert!(profile.total_concentration() < before);
    }

    #[test]
    fn upper_layer_rate_governs_each_pair() {
        // Zero density in the middle layer blocks exchange with the bottom.
        let mut profile = profile(&[1.0, 0.0, 0.0], &[20.0, 0.0, 20.0]);
        for _ in 0..5 {
            profile.mix(86_400.0);
        }

        let c: Vec<f64> = profile.concentrations().collect();
        assert!(c[1] > 0.0);
        assert_eq!(c[2], 0.0);
    }

    #[test]
    fn uniform_profile_stays_uniform() {
        let mut profile = profile(&[2.0, 2.0, 2.0], &[20.0, 5.0, 1.0]);
        profile.mix(86_400.0);

        assert_eq!(profile.concentrations().collect::<Vec<_>>(), vec![2.0; 3]);
    }

    #[test]
    fn spread_is_max_minus_min() {
        let profile = profile(&[1.0, 5.0, -2.0], &[20.0; 3]);
        assert_relative_eq!(profile.spread(), 7.0);
    }

    #[test]
    fn spread_of_nothing_is_zero() {
        assert_eq!(spread(Vec::new()), 0.0);
        assert_eq!(spread([4.0]), 0.0);
    }

    #[test]
    fn spread_propagates_nan() {
        assert!(spread([f64::NAN, 1.0, 0.0]).is_nan());
        assert!(spread([1.0, 0.0, f64::NAN]).is_nan());
        assert!(spread([f64::NAN; 3]).is_nan());
        assert!(spread([f64::INFINITY, f64::INFINITY]).is_nan());
        assert!(profile(&[f64::NAN, 1.0], &[20.0; 2]).spread().is_nan());
    }
}
