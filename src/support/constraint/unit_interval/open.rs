use std::cmp::Ordering;

use crate::support::constraint::{Constrained, Constraint, ConstraintError, UnitBounds};

/// Marker type enforcing that a value lies in the open unit interval: `0 < x < 1`.
///
/// Cooling constants (per minute) live here: zero would mean a perfect
/// insulator and anything at or above one would overshoot room temperature
/// within a single minute.
///
/// # Examples
///
/// ```
/// use coffee_cooling::support::constraint::{Constrained, UnitIntervalOpen};
///
/// let ceramic = Constrained::<_, UnitIntervalOpen>::new(0.05).unwrap();
/// assert_eq!(ceramic.into_inner(), 0.05);
///
/// let paper = UnitIntervalOpen::new(0.12).unwrap();
/// assert_eq!(paper.as_ref(), &0.12);
///
/// assert!(UnitIntervalOpen::new(0.0).is_err());
/// assert!(UnitIntervalOpen::new(1.0).is_err());
/// assert!(UnitIntervalOpen::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalOpen;

impl UnitIntervalOpen {
    /// Constructs `Constrained<T, UnitIntervalOpen>` if 0 < value < 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than or equal to one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalOpen>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater | Ordering::Equal)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::support::constraint::*;

    #[test]
    fn cooling_constants() {
        for k in [0.025, 0.03, 0.05, 0.08, 0.12] {
            assert!(UnitIntervalOpen::new(k).is_ok(), "{k} should be accepted");
        }
        assert!(UnitIntervalOpen::new(0.5_f32).is_ok());
    }

    #[test]
    fn endpoints_are_excluded() {
        assert_eq!(
            UnitIntervalOpen::new(0.0),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            UnitIntervalOpen::new(-0.05),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            UnitIntervalOpen::new(1.0),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            UnitIntervalOpen::new(f64::INFINITY),
            Err(ConstraintError::AboveMaximum)
        );
    }

    #[test]
    fn nan_is_not_a_number() {
        assert_eq!(
            UnitIntervalOpen::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
