use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Numeric request fields, named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CoffeeTemp,
    RoomTemp,
    Duration,
}

impl Field {
    /// Returns the field's wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Field::CoffeeTemp => "coffee_temp",
            Field::RoomTemp => "room_temp",
            Field::Duration => "duration",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned when a cooling request fails validation.
///
/// Every variant is a user-input problem the caller can recover from by
/// correcting the request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A numeric field is missing, unparseable, NaN, or infinite.
    #[error("please enter valid numbers for all parameters ({field} is {value})")]
    InvalidNumber {
        /// The offending field.
        field: Field,

        /// The value as received.
        value: f64,
    },

    /// The coffee is not hotter than the room.
    #[error(
        "coffee temperature ({coffee_temp}°C) must be higher than room temperature ({room_temp}°C)"
    )]
    NonPositiveGradient { coffee_temp: f64, room_temp: f64 },

    /// The duration is zero or negative.
    #[error("duration must be greater than zero minutes (got {duration})")]
    InvalidDuration { duration: f64 },

    /// The container identifier is not in the profile table.
    #[error("unknown container type {id:?}")]
    UnknownContainer { id: String },
}

impl ValidationError {
    /// Returns the kind of validation failure, without its payload.
    #[must_use]
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::InvalidNumber { .. } => ValidationErrorKind::InvalidNumber,
            Self::NonPositiveGradient { .. } => ValidationErrorKind::NonPositiveGradient,
            Self::InvalidDuration { .. } => ValidationErrorKind::InvalidDuration,
            Self::UnknownContainer { .. } => ValidationErrorKind::UnknownContainer,
        }
    }
}

/// Distinguishable kinds of [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    InvalidNumber,
    NonPositiveGradient,
    InvalidDuration,
    UnknownContainer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = ValidationError::InvalidNumber {
            field: Field::RoomTemp,
            value: f64::INFINITY,
        };
        assert_eq!(
            err.to_string(),
            "please enter valid numbers for all parameters (room_temp is inf)"
        );

        let err = ValidationError::NonPositiveGradient {
            coffee_temp: 80.0,
            room_temp: 85.0,
        };
        assert_eq!(
            err.to_string(),
            "coffee temperature (80°C) must be higher than room temperature (85°C)"
        );

        let err = ValidationError::UnknownContainer {
            id: "styrofoam".into(),
        };
        assert_eq!(err.to_string(), r#"unknown container type "styrofoam""#);
    }

    #[test]
    fn kinds_serialize_as_snake_case() {
        let err = ValidationError::InvalidDuration { duration: -1.0 };
        assert_eq!(err.kind(), ValidationErrorKind::InvalidDuration);
        assert_eq!(
            serde_json::to_value(err.kind()).unwrap(),
            serde_json::json!("invalid_duration")
        );
    }
}
