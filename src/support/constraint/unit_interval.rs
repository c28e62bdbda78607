mod lower_open;
mod open;

pub use lower_open::UnitIntervalLowerOpen;
pub use open::UnitIntervalOpen;

/// Supplies 0 and 1 for types bounded by the unit interval.
///
/// Implementations should ensure that `zero() < one()` under the type's
/// `PartialOrd`.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}
