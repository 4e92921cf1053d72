use crate::{InvalidParameter, Layer};

/// Depth of the layers in a column.
///
/// With the `serde` feature, a bare number deserializes to [`Uniform`] and
/// an array to [`PerLayer`].
///
/// [`Uniform`]: LayerDepth::Uniform
/// [`PerLayer`]: LayerDepth::PerLayer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum LayerDepth {
    /// Every layer has the same depth.
    Uniform(f64),

    /// One depth per layer, top first.
    PerLayer(Vec<f64>),
}

/// Empirical mixing coefficient (β) relating biological density and layer
/// depth to a transport rate.
///
/// Deserializes like [`LayerDepth`]: a number is shared, an array is per layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum MixingCoefficient {
    /// One coefficient shared by every layer.
    Shared(f64),

    /// One coefficient per layer, top first.
    PerLayer(Vec<f64>),
}

/// Parameters describing one soil column at the start of a run.
///
/// Every per-layer field must have exactly `n_layers` entries; scalar depths
/// and shared coefficients are broadcast. Validation happens when the
/// parameters are turned into layers (see [`ColumnParams::layers`] and
/// [`Profile::new`](crate::Profile::new)).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnParams {
    /// Number of layers in the column, at least one.
    pub n_layers: usize,

    /// Layer depth in m, shared or per layer.
    pub layer_depth: LayerDepth,

    /// Starting concentration of each layer, top first, in any consistent unit.
    pub initial_concentration: Vec<f64>,

    /// Mixing organisms per unit volume in each layer, top first.
    pub biological_density: Vec<f64>,

    /// Mixing coefficient β, chosen so that `ρ_bio · β / d` is in 1/s.
    pub mixing_coefficient: MixingCoefficient,
}

impl ColumnParams {
    /// Creates column parameters from their parts.
    ///
    /// Scalars convert into [`LayerDepth::Uniform`] and
    /// [`MixingCoefficient::Shared`]; vectors into the per-layer variants.
    pub fn new(
        n_layers: usize,
        layer_depth: impl Into<LayerDepth>,
        initial_concentration: Vec<f64>,
        biological_density: Vec<f64>,
        mixing_coefficient: impl Into<MixingCoefficient>,
    ) -> Self {
        Self {
            n_layers,
            layer_depth: layer_depth.into(),
            initial_concentration,
            biological_density,
            mixing_coefficient: mixing_coefficient.into(),
        }
    }

    /// Builds the validated layers described by these parameters, top first.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter::NoLayers`] if `n_layers` is zero,
    /// [`InvalidParameter::LengthMismatch`] if a per-layer field does not have
    /// `n_layers` entries, or [`InvalidParameter::Layer`] for the first layer
    /// whose parameters are out of range.
    pub fn layers(&self) -> Result<Vec<Layer>, InvalidParameter> {
        let n = self.n_layers;
        if n == 0 {
            return Err(InvalidParameter::NoLayers);
        }

        check_len("initial_concentration", n, self.initial_concentration.len())?;
        check_len("biological_density", n, self.biological_density.len())?;
        if let LayerDepth::PerLayer(depths) = &self.layer_depth {
            check_len("layer_depth", n, depths.len())?;
        }
        if let MixingCoefficient::PerLayer(betas) = &self.mixing_coefficient {
            check_len("mixing_coefficient", n, betas.len())?;
        }

        (0..n)
            .map(|index| {
                Layer::new(
                    self.layer_depth.at(index),
                    self.initial_concentration[index],
                    self.biological_density[index],
                    self.mixing_coefficient.at(index),
                )
                .map_err(|source| InvalidParameter::Layer { index, source })
            })
            .collect()
    }
}

impl LayerDepth {
    /// Depth of the layer at `index`; callers check the length first.
    fn at(&self, index: usize) -> f64 {
        match self {
            Self::Uniform(depth) => *depth,
            Self::PerLayer(depths) => depths[index],
        }
    }
}

impl MixingCoefficient {
    fn at(&self, index: usize) -> f64 {
        match self {
            Self::Shared(beta) => *beta,
            Self::PerLayer(betas) => betas[index],
        }
    }
}

impl From<f64> for LayerDepth {
    fn from(depth: f64) -> Self {
        Self::Uniform(depth)
    }
}

impl From<Vec<f64>> for LayerDepth {
    fn from(depths: Vec<f64>) -> Self {
        Self::PerLayer(depths)
    }
}

impl From<f64> for MixingCoefficient {
    fn from(beta: f64) -> Self {
        Self::Shared(beta)
    }
}

impl From<Vec<f64>> for MixingCoefficient {
    fn from(betas: Vec<f64>) -> Self {
        Self::PerLayer(betas)
    }
}

fn check_len(field: &'static str, expected: usize, found: usize) -> Result<(), InvalidParameter> {
    if found == expected {
        Ok(())
    } else {
        Err(InvalidParameter::LengthMismatch {
            field,
            expected,
            found,
        })
    }
}
