//! Results of a cooling computation.

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature, Time},
    temperature_interval::degree_celsius as delta_celsius,
    thermodynamic_temperature::degree_celsius,
    time::minute,
};

use super::{
    CHECKPOINT_MINUTES, Container, ContainerProfile, CoolingConfig, NewtonCooling, Sample,
};

/// Cooling curve and summary metrics for a validated request.
///
/// Summary values (`final_temp`, `temp_drop`, `time_to_ideal`) are rounded to
/// the configured display precision. Timeline temperatures are not rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct CoolingResults<const N: usize> {
    /// Container the beverage cooled in.
    pub container: Container,

    /// Initial beverage temperature (°C), as requested.
    pub coffee_temp: f64,

    /// Ambient temperature (°C), as requested.
    pub room_temp: f64,

    /// Cooling window (minutes), as requested.
    pub duration: f64,

    /// Ideal drinking temperature (°C) used for [`Self::time_to_ideal`].
    pub ideal_temp: f64,

    /// Container cooling constant `k` (1/minute).
    pub cooling_constant: f64,

    /// Temperature (°C) at the end of the window.
    pub final_temp: f64,

    /// Temperature lost over the window (°C), `coffee_temp - final_temp`.
    pub temp_drop: f64,

    /// Minutes until the beverage first reaches the ideal temperature.
    ///
    /// `None` when it stays above the ideal temperature for the whole window,
    /// or never gets there at all.
    pub time_to_ideal: Option<f64>,

    /// Evenly spaced samples from time zero to the end of the window.
    pub timeline: [Sample; N],

    /// Short description of the model and the container's behavior.
    pub physics_explanation: String,

    pub(super) law: NewtonCooling,
    pub(super) config: CoolingConfig,
}

impl<const N: usize> CoolingResults<N> {
    /// Returns the profile of the container used.
    #[must_use]
    pub fn profile(&self) -> &'static ContainerProfile {
        self.container.profile()
    }

    /// Returns the container's display name.
    #[must_use]
    pub fn mug_name(&self) -> &'static str {
        self.profile().name()
    }

    /// Returns the container's chart color.
    #[must_use]
    pub fn mug_color(&self) -> &'static str {
        self.profile().color()
    }

    /// Returns the unrounded temperature (°C) at any time in minutes.
    #[must_use]
    pub fn temperature_at(&self, minutes: f64) -> f64 {
        self.law.temperature_at(minutes)
    }

    /// Returns rounded temperatures at the key checkpoint times within the window.
    ///
    /// See [`CHECKPOINT_MINUTES`].
    #[must_use]
    pub fn checkpoints(&self) -> Vec<Sample> {
        CHECKPOINT_MINUTES
            .into_iter()
            .take_while(|&time| time <= self.duration)
            .map(|time| Sample {
                time,
                temperature: self.config.round(self.law.temperature_at(time)),
            })
            .collect()
    }

    /// Returns the final temperature as a quantity.
    #[must_use]
    pub fn final_temperature(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(self.final_temp)
    }

    /// Returns the temperature drop as a quantity.
    #[must_use]
    pub fn temperature_drop(&self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_celsius>(self.temp_drop)
    }

    /// Returns the time to the ideal temperature as a quantity.
    #[must_use]
    pub fn time_to_ideal_quantity(&self) -> Option<Time> {
        self.time_to_ideal.map(|t| Time::new::<minute>(t))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::kelvin,
        time::second,
    };

    use crate::models::thermal::cooling::core::{
        CoolingConfig, CoolingResults, compute, test_support::request,
    };

    fn results(duration: f64) -> CoolingResults<11> {
        compute(&request(90.0, 20.0, duration, "ceramic"), &CoolingConfig::default())
            .expect("valid request")
    }

    #[test]
    fn checkpoints_within_window() {
        let checkpoints = results(30.0).checkpoints();

        let times: Vec<f64> = checkpoints.iter().map(|c| c.time).collect();
        assert_eq!(times, [0.0, 5.0, 10.0, 15.0, 30.0]);

        assert_relative_eq!(checkpoints[0].temperature, 90.0);
        assert_relative_eq!(checkpoints[2].temperature, 62.5);
        assert_relative_eq!(checkpoints[4].temperature, 35.6);
    }

    #[test]
    fn checkpoints_for_short_and_long_windows() {
        assert_eq!(results(4.0).checkpoints().len(), 1);
        assert_eq!(results(60.0).checkpoints().len(), 7);
        assert_eq!(results(240.0).checkpoints().len(), 7);
    }

    #[test]
    fn quantities_match_plain_values() {
        let results = results(30.0);

        assert_relative_eq!(results.final_temperature().get::<kelvin>(), 308.75, epsilon = 1e-9);
        assert_relative_eq!(
            results.temperature_drop().get::<delta_kelvin>(),
            54.4,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            results.time_to_ideal_quantity().unwrap().get::<second>(),
            528.0,
            epsilon = 1e-9
        );
    }
}
