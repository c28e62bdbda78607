use serde::Serialize;

use super::NewtonCooling;

/// One point on a cooling curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Elapsed time (minutes).
    pub time: f64,

    /// Beverage temperature (°C).
    pub temperature: f64,
}

/// Samples the curve at `N` evenly spaced times covering `[0, duration]`.
///
/// The first sample is at exactly zero and the last at exactly `duration`.
pub(super) fn sample<const N: usize>(law: &NewtonCooling, duration: f64) -> [Sample; N] {
    let intervals = (N - 1) as f64;
    std::array::from_fn(|i| {
        let time = (i as f64 / intervals) * duration;
        Sample {
            time,
            temperature: law.temperature_at(time),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::UnitIntervalOpen;

    #[test]
    fn covers_window_inclusively() {
        let law = NewtonCooling::new(90.0, 20.0, UnitIntervalOpen::new(0.08).unwrap());
        let samples = sample::<5>(&law, 20.0);

        let times: Vec<f64> = samples.iter().map(|s| s.time).collect();
        assert_eq!(times, [0.0, 5.0, 10.0, 15.0, 20.0]);

        assert_eq!(samples[0].temperature, 90.0);
        // 20 + 70 e^(-1.6)
        assert_relative_eq!(samples[4].temperature, 34.132_756, epsilon = 1e-6);
    }

    #[test]
    fn two_samples_are_the_endpoints() {
        let law = NewtonCooling::new(80.0, 25.0, UnitIntervalOpen::new(0.12).unwrap());
        let [start, end] = sample::<2>(&law, 7.5);

        assert_eq!(start.time, 0.0);
        assert_eq!(end.time, 7.5);
        assert_relative_eq!(end.temperature, law.temperature_at(7.5));
    }
}
