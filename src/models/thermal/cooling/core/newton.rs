use crate::support::constraint::{Constrained, UnitIntervalLowerOpen, UnitIntervalOpen};

/// Closed-form solution of Newton's Law of Cooling.
///
/// Describes exponential decay of the beverage temperature from `initial`
/// toward `ambient` at rate `k` (1/minute).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonCooling {
    initial: f64,
    ambient: f64,
    k: Constrained<f64, UnitIntervalOpen>,
}

impl NewtonCooling {
    /// Creates the cooling law for a beverage starting at `initial` °C in a
    /// room at `ambient` °C.
    #[must_use]
    pub fn new(initial: f64, ambient: f64, k: Constrained<f64, UnitIntervalOpen>) -> Self {
        Self {
            initial,
            ambient,
            k,
        }
    }

    /// Returns the cooling constant in 1/minute.
    #[must_use]
    pub fn k(&self) -> f64 {
        *self.k.as_ref()
    }

    /// Returns the temperature (°C) after `minutes`.
    ///
    /// The start of the curve is exactly the initial temperature, and the
    /// curve never rises above it.
    #[must_use]
    pub fn temperature_at(&self, minutes: f64) -> f64 {
        if minutes == 0.0 {
            return self.initial;
        }
        // Blended so that no intermediate difference can overflow.
        let decay = (-self.k() * minutes).exp();
        (self.ambient * (1.0 - decay) + self.initial * decay).min(self.initial)
    }

    /// Returns the time (minutes) at which the curve first reaches `target`.
    ///
    /// Returns `None` when the target is never reached: the beverage starts
    /// below it, or the room is at or above it.
    #[must_use]
    pub fn time_to_reach(&self, target: f64) -> Option<f64> {
        let fraction = (target - self.ambient) / (self.initial - self.ambient);
        let fraction = UnitIntervalLowerOpen::new(fraction).ok()?.into_inner();

        // Adding zero turns the -0.0 from ln(1) into 0.0.
        Some(-fraction.ln() / self.k() + 0.0)
    }
}
