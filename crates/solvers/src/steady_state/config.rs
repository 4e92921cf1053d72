use soilmix_core::constraint::{Constraint, FinitePositive};
use thiserror::Error;
use uom::si::{
    f64::Time,
    time::{day, second},
};

/// Configuration for the steady-state solver.
///
/// Defaults to a one-day step, an absolute uniformity tolerance of `1e-12`,
/// and at most 10 000 steps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(try_from = "ConfigFields")
)]
pub struct Config {
    dt: Time,
    steady_state_tol: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a steady-state solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("dt must be finite and positive")]
    TimeStep,

    #[error("steady_state_tol must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dt: Time::new::<day>(1.0),
            steady_state_tol: 1e-12,
            max_iters: 10_000,
        }
    }
}

impl Config {
    /// Creates a new config with a validated step, tolerance, and budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` or `steady_state_tol` is not finite and
    /// positive, or if `max_iters` is zero.
    pub fn new(dt: Time, steady_state_tol: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if FinitePositive::check(&dt.get::<second>()).is_err() {
            return Err(ConfigError::TimeStep);
        }
        if FinitePositive::check(&steady_state_tol).is_err() {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            dt,
            steady_state_tol,
            max_iters,
        })
    }

    /// Returns the mixing time step.
    #[must_use]
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// Returns the mixing time step in seconds, the unit the transport rates
    /// are expressed in.
    #[must_use]
    pub fn dt_seconds(&self) -> f64 {
        self.dt.get::<second>()
    }

    /// Returns the absolute tolerance on `max − min` for a uniform column.
    #[must_use]
    pub fn steady_state_tol(&self) -> f64 {
        self.steady_state_tol
    }

    /// Returns the maximum number of mixing steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

/// Serialized form of [`Config`]; `dt` is in seconds and every field is optional.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFields {
    dt: f64,
    steady_state_tol: f64,
    max_iterations: usize,
}

#[cfg(feature = "serde")]
impl Default for ConfigFields {
    fn default() -> Self {
        let config = Config::default();
        Self {
            dt: config.dt_seconds(),
            steady_state_tol: config.steady_state_tol,
            max_iterations: config.max_iters,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<ConfigFields> for Config {
    type Error = ConfigError;

    fn try_from(fields: ConfigFields) -> Result<Self, Self::Error> {
        Self::new(
            Time::new::<second>(fields.dt),
            fields.steady_state_tol,
            fields.max_iterations,
        )
    }
}
