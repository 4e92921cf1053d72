//! Numeric constraints checked at construction time.
//!
//! Physical parameters of a soil column must satisfy simple sign rules:
//! layer depths and mixing coefficients are strictly positive, biological
//! densities are non-negative. Each rule is a zero-sized marker implementing
//! [`Constraint`], so callers can write `StrictlyPositive::check(&depth)`.
//!
//! NaN never satisfies a constraint.

use thiserror::Error;

/// A trait for enforcing numeric invariants.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    Infinite,
}

/// Zero or greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonNegative;

impl Constraint<f64> for NonNegative {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if *value < 0.0 {
            Err(ConstraintError::Negative)
        } else {
            Ok(())
        }
    }
}

/// Greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictlyPositive;

impl Constraint<f64> for StrictlyPositive {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        NonNegative::check(value)?;
        if *value == 0.0 {
            Err(ConstraintError::Zero)
        } else {
            Ok(())
        }
    }
}

/// Greater than zero and finite.
///
/// Used for solver settings such as time steps and tolerances, where an
/// infinite value would make the run meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinitePositive;

impl Constraint<f64> for FinitePositive {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        StrictlyPositive::check(value)?;
        if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_accepts_zero_and_positive() {
        assert!(NonNegative::check(&0.0).is_ok());
        assert!(NonNegative::check(&-0.0).is_ok());
        assert!(NonNegative::check(&20.0).is_ok());
        assert!(NonNegative::check(&f64::INFINITY).is_ok());
    }

    #[test]
    fn non_negative_rejects_negative_and_nan() {
        assert_eq!(NonNegative::check(&-1e-30), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::check(&f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn strictly_positive_rejects_zero() {
        assert!(StrictlyPositive::check(&1e-8).is_ok());
        assert_eq!(StrictlyPositive::check(&0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::check(&-0.1), Err(ConstraintError::Negative));
    }

    #[test]
    fn finite_positive_rejects_infinity() {
        assert!(FinitePositive::check(&86_400.0).is_ok());
        assert_eq!(
            FinitePositive::check(&f64::INFINITY),
            Err(ConstraintError::Infinite)
        );
        assert_eq!(FinitePositive::check(&0.0), Err(ConstraintError::Zero));
    }
}
