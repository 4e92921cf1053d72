use soilmix_core::InvalidParameter;

/// Errors that can occur before a steady-state run starts stepping.
///
/// Stepping itself never fails; running out of steps is reported through
/// [`Status::MaxIters`](super::Status::MaxIters).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid column parameters: {0}")]
    InvalidParameter(#[from] InvalidParameter),
}
