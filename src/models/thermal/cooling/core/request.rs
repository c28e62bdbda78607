use uom::si::{
    f64::{ThermodynamicTemperature, Time},
    thermodynamic_temperature::degree_celsius,
    time::minute,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{Container, Field, ValidationError};

/// Inputs for a cooling computation.
///
/// Temperatures are in degrees Celsius and the duration is in minutes.
/// Values are checked by the model, not on construction, so a request may
/// carry whatever a caller received.
#[derive(Debug, Clone, PartialEq)]
pub struct CoolingRequest {
    /// Initial beverage temperature (°C).
    pub coffee_temp: f64,

    /// Ambient temperature (°C).
    pub room_temp: f64,

    /// Length of the cooling window (minutes).
    pub duration: f64,

    /// Container identifier key, such as `"ceramic"`.
    pub container: String,
}

impl CoolingRequest {
    #[must_use]
    pub fn new(
        coffee_temp: f64,
        room_temp: f64,
        duration: f64,
        container: impl Into<String>,
    ) -> Self {
        Self {
            coffee_temp,
            room_temp,
            duration,
            container: container.into(),
        }
    }

    /// Creates a request from unit-aware quantities.
    ///
    /// ```
    /// use coffee_cooling::models::thermal::cooling::CoolingRequest;
    /// use uom::si::{
    ///     f64::{ThermodynamicTemperature, Time},
    ///     thermodynamic_temperature::degree_fahrenheit,
    ///     time::hour,
    /// };
    ///
    /// let request = CoolingRequest::from_quantities(
    ///     ThermodynamicTemperature::new::<degree_fahrenheit>(194.0),
    ///     ThermodynamicTemperature::new::<degree_fahrenheit>(68.0),
    ///     Time::new::<hour>(0.5),
    ///     "glass",
    /// );
    ///
    /// assert!((request.coffee_temp - 90.0).abs() < 1e-9);
    /// assert!((request.room_temp - 20.0).abs() < 1e-9);
    /// assert!((request.duration - 30.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn from_quantities(
        coffee_temp: ThermodynamicTemperature,
        room_temp: ThermodynamicTemperature,
        duration: Time,
        container: impl Into<String>,
    ) -> Self {
        Self::new(
            coffee_temp.get::<degree_celsius>(),
            room_temp.get::<degree_celsius>(),
            duration.get::<minute>(),
            container,
        )
    }

    /// Checks every input constraint, in a fixed order.
    ///
    /// Non-finite numbers are reported first (including a coffee-to-room
    /// difference too large to represent), then the temperature gradient,
    /// the container, and finally the duration.
    pub(super) fn validate(&self) -> Result<Conditions, ValidationError> {
        let coffee_temp = finite(Field::CoffeeTemp, self.coffee_temp)?;
        let room_temp = finite(Field::RoomTemp, self.room_temp)?;
        let duration = finite(Field::Duration, self.duration)?;

        // The excess over room temperature must itself be representable.
        if !(coffee_temp - room_temp).is_finite() {
            return Err(ValidationError::InvalidNumber {
                field: Field::CoffeeTemp,
                value: coffee_temp,
            });
        }

        if coffee_temp <= room_temp {
            return Err(ValidationError::NonPositiveGradient {
                coffee_temp,
                room_temp,
            });
        }

        let container = self.container.parse::<Container>()?;

        let duration = StrictlyPositive::new(duration)
            .map_err(|_| ValidationError::InvalidDuration { duration })?;

        Ok(Conditions {
            coffee_temp,
            room_temp,
            duration,
            container,
        })
    }
}

/// A request that passed validation.
#[derive(Debug, Clone, Copy)]
pub(super) struct Conditions {
    pub(super) coffee_temp: f64,
    pub(super) room_temp: f64,
    pub(super) duration: Constrained<f64, StrictlyPositive>,
    pub(super) container: Container,
}

fn finite(field: Field, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::InvalidNumber { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::thermal::cooling::core::test_support::request;

    #[test]
    fn accepts_valid_request() {
        let conditions = request(90.0, 20.0, 30.0, "ceramic")
            .validate()
            .expect("valid request");

        assert_relative_eq!(conditions.coffee_temp, 90.0);
        assert_relative_eq!(conditions.room_temp, 20.0);
        assert_relative_eq!(conditions.duration.into_inner(), 30.0);
        assert_eq!(conditions.container, Container::Ceramic);
    }

    #[test]
    fn non_finite_numbers() {
        let cases = [
            (request(f64::NAN, 20.0, 30.0, "ceramic"), Field::CoffeeTemp),
            (request(90.0, f64::INFINITY, 30.0, "ceramic"), Field::RoomTemp),
            (request(90.0, 20.0, f64::NEG_INFINITY, "ceramic"), Field::Duration),
        ];

        for (request, expected) in cases {
            match request.validate() {
                Err(ValidationError::InvalidNumber { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected InvalidNumber for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn temperature_excess_must_be_representable() {
        assert!(matches!(
            request(1e308, -1e308, 10.0, "paper").validate(),
            Err(ValidationError::InvalidNumber {
                field: Field::CoffeeTemp,
                ..
            })
        ));
        assert!(request(1e308, 20.0, 10.0, "paper").validate().is_ok());
    }

    #[test]
    fn coffee_must_be_hotter_than_room() {
        assert!(matches!(
            request(80.0, 85.0, 10.0, "ceramic").validate(),
            Err(ValidationError::NonPositiveGradient { .. })
        ));
        assert!(matches!(
            request(22.0, 22.0, 10.0, "ceramic").validate(),
            Err(ValidationError::NonPositiveGradient { .. })
        ));

        // Barely hotter is still a valid gradient.
        assert!(request(90.0, 85.0, 10.0, "ceramic").validate().is_ok());
    }

    #[test]
    fn unknown_container() {
        assert_eq!(
            request(90.0, 20.0, 10.0, "styrofoam").validate().unwrap_err(),
            ValidationError::UnknownContainer {
                id: "styrofoam".into()
            }
        );
    }

    #[test]
    fn duration_must_be_positive() {
        for duration in [0.0, -0.0, -5.0] {
            assert!(matches!(
                request(90.0, 20.0, duration, "glass").validate(),
                Err(ValidationError::InvalidDuration { .. })
            ));
        }
    }

    #[test]
    fn checks_run_in_documented_order() {
        // Non-finite beats every other failure.
        assert!(matches!(
            request(80.0, 85.0, f64::NAN, "styrofoam").validate(),
            Err(ValidationError::InvalidNumber {
                field: Field::Duration,
                ..
            })
        ));

        // Gradient beats container and duration.
        assert!(matches!(
            request(80.0, 85.0, -1.0, "styrofoam").validate(),
            Err(ValidationError::NonPositiveGradient { .. })
        ));

        // Container beats duration.
        assert!(matches!(
            request(90.0, 20.0, -1.0, "styrofoam").validate(),
            Err(ValidationError::UnknownContainer { .. })
        ));
    }

    #[test]
    fn converts_quantities_to_celsius_and_minutes() {
        use uom::si::{thermodynamic_temperature::kelvin, time::second};

        let request = CoolingRequest::from_quantities(
            ThermodynamicTemperature::new::<kelvin>(363.15),
            ThermodynamicTemperature::new::<kelvin>(293.15),
            Time::new::<second>(1800.0),
            "metal",
        );

        assert_relative_eq!(request.coffee_temp, 90.0, epsilon = 1e-9);
        assert_relative_eq!(request.room_temp, 20.0, epsilon = 1e-9);
        assert_relative_eq!(request.duration, 30.0, epsilon = 1e-9);
        assert_eq!(request.container, "metal");
    }
}
