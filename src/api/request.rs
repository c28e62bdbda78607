use serde::Deserialize;

use crate::models::thermal::cooling::CoolingRequest;

/// A cooling calculation request as received on the wire.
///
/// Every field is optional so that missing values are reported by the
/// cooling model's validation rather than as a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CalculateRequest {
    pub coffee_temp: Option<NumericInput>,
    pub room_temp: Option<NumericInput>,
    pub duration: Option<NumericInput>,
    pub mug_type: Option<String>,
}

/// A numeric field that may arrive as a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl NumericInput {
    /// Returns the value as a float, or NaN when it is not numeric.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            NumericInput::Number(value) => *value,
            NumericInput::Text(text) => text.trim().parse().unwrap_or(f64::NAN),
            NumericInput::Other(_) => f64::NAN,
        }
    }
}

impl CalculateRequest {
    /// Converts to a model request.
    ///
    /// Missing or non-numeric values become NaN and a missing container
    /// becomes an empty identifier, so the model reports them.
    #[must_use]
    pub fn to_cooling_request(&self) -> CoolingRequest {
        let number = |input: &Option<NumericInput>| {
            input.as_ref().map_or(f64::NAN, NumericInput::value)
        };

        CoolingRequest::new(
            number(&self.coffee_temp),
            number(&self.room_temp),
            number(&self.duration),
            self.mug_type.clone().unwrap_or_default(),
        )
    }
}
