use serde::Serialize;

/// Ideal drinking temperature in degrees Celsius.
pub const IDEAL_DRINKING_TEMP: f64 = 65.0;

/// Number of timeline samples produced by the default model resolution.
///
/// Samples are evenly spaced over `[0, duration]`, so 51 samples give 50 equal
/// intervals regardless of the requested duration.
pub const TIMELINE_SAMPLES: usize = 51;

/// Decimal places used for displayed summary values.
pub const DISPLAY_DECIMALS: u8 = 1;

/// Key times, in minutes, reported as rounded checkpoints when within the window.
pub const CHECKPOINT_MINUTES: [f64; 7] = [0.0, 5.0, 10.0, 15.0, 30.0, 45.0, 60.0];

/// Configuration for cooling computations.
///
/// These values are fixed by the application rather than the person asking
/// for a cooling curve; the defaults are the documented constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingConfig {
    /// Temperature (°C) whose first crossing is reported as the time to ideal.
    pub ideal_temp: f64,

    /// Decimal places for the rounded summary values.
    pub decimals: u8,
}

impl Default for CoolingConfig {
    fn default() -> Self {
        Self {
            ideal_temp: IDEAL_DRINKING_TEMP,
            decimals: DISPLAY_DECIMALS,
        }
    }
}

impl CoolingConfig {
    /// Rounds a value to the configured display precision, half away from zero.
    ///
    /// Values too large to scale are returned as is; they have no fractional part.
    pub(super) fn round(&self, value: f64) -> f64 {
        let scale = 10_f64.powi(i32::from(self.decimals));
        let scaled = value * scale;
        if scaled.is_finite() {
            scaled.round() / scale
        } else {
            value
        }
    }
}

/// Physics constants and input defaults offered to front ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicsDefaults {
    /// Ideal drinking temperature (°C).
    pub ideal_drinking_temp: f64,

    /// Suggested initial beverage temperature (°C).
    pub default_coffee_temp: f64,

    /// Suggested room temperature (°C).
    pub default_room_temp: f64,

    /// Suggested duration (minutes).
    pub default_duration: f64,
}

impl Default for PhysicsDefaults {
    fn default() -> Self {
        Self {
            ideal_drinking_temp: IDEAL_DRINKING_TEMP,
            default_coffee_temp: 85.0,
            default_room_temp: 22.0,
            default_duration: 60.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rounds_half_away_from_zero() {
        let config = CoolingConfig::default();

        assert_relative_eq!(config.round(35.619_1), 35.6);
        assert_relative_eq!(config.round(62.45), 62.5);
        assert_relative_eq!(config.round(-1.25), -1.3);
        assert_relative_eq!(config.round(20.0), 20.0);
    }

    #[test]
    fn precision_is_configurable() {
        let config = CoolingConfig {
            decimals: 2,
            ..CoolingConfig::default()
        };
        assert_relative_eq!(config.round(62.457_146), 62.46);

        let config = CoolingConfig {
            decimals: 0,
            ..CoolingConfig::default()
        };
        assert_relative_eq!(config.round(62.5), 63.0);
    }

    #[test]
    fn huge_values_are_left_alone() {
        let config = CoolingConfig::default();

        assert_eq!(config.round(1e308), 1e308);
        assert_eq!(config.round(-f64::MAX), -f64::MAX);
        assert!(config.round(9.95e307).is_finite());
    }
}
