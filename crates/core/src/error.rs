use thiserror::Error;

use crate::constraint::ConstraintError;

/// A layer parameter that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("`{field}` = {value}: {source}")]
pub struct LayerError {
    /// Name of the offending parameter.
    pub field: &'static str,

    /// The rejected value.
    pub value: f64,

    /// The violated constraint.
    #[source]
    pub source: ConstraintError,
}

/// Errors raised while building a profile from caller-supplied parameters.
///
/// These are fatal to a run: no stepping happens and no partial result is
/// produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameter {
    #[error("a profile needs at least one layer")]
    NoLayers,

    #[error("`{field}` has {found} values but the profile has {expected} layers")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("layer {index}: {source}")]
    Layer {
        index: usize,
        #[source]
        source: LayerError,
    },
}
