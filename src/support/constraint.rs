//! Type-level numeric constraints checked once, at construction.
//!
//! A [`Constrained<T, C>`] can only be built from a value that satisfies the
//! marker constraint `C`, so code holding one never needs to re-check it.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: Greater than zero (durations)
//! - [`UnitIntervalOpen`]: Open unit interval `0 < x < 1` (cooling constants)
//! - [`UnitIntervalLowerOpen`]: Lower-open unit interval `0 < x ≤ 1`
//!   (fraction of the initial temperature excess still remaining)
//!
//! Each marker also provides an associated `new()` constructor
//! (e.g., `StrictlyPositive::new(30.0)`).
//!
//! # Extending
//!
//! Custom invariants are added by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitIntervalLowerOpen, UnitIntervalOpen};

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use coffee_cooling::support::constraint::{Constrained, StrictlyPositive};
///
/// let minutes = Constrained::<_, StrictlyPositive>::new(30.0).unwrap();
/// assert_eq!(minutes.into_inner(), 30.0);
///
/// assert!(Constrained::<_, StrictlyPositive>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Wraps a value without checking it, for use in constant tables.
    ///
    /// The caller must ensure the value satisfies `C`; tables built this way
    /// should be covered by a test that runs [`Constraint::check`] on each entry.
    pub(crate) const fn new_unchecked(value: T) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct BelowBoiling;

    impl Constraint<f64> for BelowBoiling {
        fn check(value: &f64) -> Result<(), ConstraintError> {
            match value.partial_cmp(&100.0) {
                Some(std::cmp::Ordering::Less) => Ok(()),
                Some(_) => Err(ConstraintError::AboveMaximum),
                None => Err(ConstraintError::NotANumber),
            }
        }
    }

    #[test]
    fn custom_constraint() {
        let coffee = Constrained::<f64, BelowBoiling>::new(92.0).unwrap();
        assert_eq!(coffee.as_ref(), &92.0);

        assert_eq!(
            Constrained::<f64, BelowBoiling>::new(100.0),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            Constrained::<f64, BelowBoiling>::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn unchecked_values_are_kept_as_is() {
        const K: Constrained<f64, UnitIntervalOpen> = Constrained::new_unchecked(0.05);
        assert!(UnitIntervalOpen::check(K.as_ref()).is_ok());
        assert_eq!(K.into_inner(), 0.05);
    }
}
