use crate::{
    LayerError,
    constraint::{Constraint, NonNegative, StrictlyPositive},
};

/// One depth interval of the soil column.
///
/// The physical parameters are fixed at construction; only the concentration
/// changes, and only a [`Profile`](crate::Profile) changes it.
///
/// The transport rate is derived once:
///
/// ```text
/// k = (ρ_bio · β) / d
/// ```
///
/// where `ρ_bio` is the biological density, `β` the mixing coefficient and `d`
/// the layer depth. It governs how fast this layer exchanges with the layer
/// below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    depth: f64,
    pub(crate) concentration: f64,
    biological_density: f64,
    mixing_coefficient: f64,
    transport_rate: f64,
}

impl Layer {
    /// Creates a layer, validating its physical parameters.
    ///
    /// The initial concentration is not validated.
    ///
    /// # Errors
    ///
    /// Returns a [`LayerError`] if `depth` is not strictly positive,
    /// `biological_density` is negative, or `mixing_coefficient` is not
    /// strictly positive. NaN is rejected for all three.
    pub fn new(
        depth: f64,
        concentration: f64,
        biological_density: f64,
        mixing_coefficient: f64,
    ) -> Result<Self, LayerError> {
        check::<StrictlyPositive>("depth", depth)?;
        check::<NonNegative>("biological_density", biological_density)?;
        check::<StrictlyPositive>("mixing_coefficient", mixing_coefficient)?;

        Ok(Self {
            depth,
            concentration,
            biological_density,
            mixing_coefficient,
            transport_rate: (biological_density * mixing_coefficient) / depth,
        })
    }

    /// Returns the layer depth.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Returns the current concentration.
    #[must_use]
    pub fn concentration(&self) -> f64 {
        self.concentration
    }

    /// Returns the density of mixing organisms in this layer.
    #[must_use]
    pub fn biological_density(&self) -> f64 {
        self.biological_density
    }

    /// Returns the mixing coefficient (β) used by this layer.
    #[must_use]
    pub fn mixing_coefficient(&self) -> f64 {
        self.mixing_coefficient
    }

    /// Returns the transport rate toward the layer below, in 1/time.
    #[must_use]
    pub fn transport_rate(&self) -> f64 {
        self.transport_rate
    }
}

fn check<C: Constraint<f64>>(field: &'static str, value: f64) -> Result<(), LayerError> {
    C::check(&value).map_err(|source| LayerError {
        field,
        value,
        source,
    })
}
