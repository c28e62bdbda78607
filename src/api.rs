//! JSON boundary for cooling calculations.
//!
//! Hosts such as a web handler or CLI parse a [`CalculateRequest`], hand it to
//! [`calculate`], and serialize the returned [`CalculateResponse`]. All input
//! checks happen in the cooling model; this module only coerces wire values
//! and shapes the output for chart rendering.
//!
//! ```
//! use coffee_cooling::api::{self, CalculateResponse};
//!
//! let response = api::calculate_json(
//!     r#"{"coffee_temp": 90, "room_temp": "20", "duration": 30, "mug_type": "ceramic"}"#,
//! );
//! let CalculateResponse::Success(success) = &response else {
//!     panic!("expected a successful calculation");
//! };
//! assert_eq!(success.final_temp, 35.6);
//!
//! let json = serde_json::to_value(&response).unwrap();
//! assert_eq!(json["success"], true);
//! assert_eq!(json["plot_data"]["mug_color"], "#D2691E");
//! ```

mod catalog;
mod request;
mod response;

pub use catalog::{Catalog, MugType, catalog};
pub use request::{CalculateRequest, NumericInput};
pub use response::{CalculateFailure, CalculateResponse, CalculateSuccess, PlotData};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::thermal::cooling::{CoolingModel, ValidationError, ValidationErrorKind};

/// Errors reported to API callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body is not valid JSON or has the wrong shape.
    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The request failed cooling model validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// Returns a stable snake_case identifier for the error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Malformed(_) => "malformed_request",
            ApiError::Validation(err) => match err.kind() {
                ValidationErrorKind::InvalidNumber => "invalid_number",
                ValidationErrorKind::NonPositiveGradient => "non_positive_gradient",
                ValidationErrorKind::InvalidDuration => "invalid_duration",
                ValidationErrorKind::UnknownContainer => "unknown_container",
            },
        }
    }
}

/// Computes a cooling curve for a parsed request.
#[instrument(level = "debug", skip_all, fields(mug_type = ?request.mug_type))]
pub fn calculate(request: &CalculateRequest) -> CalculateResponse {
    let model: CoolingModel = CoolingModel::default();

    match model.compute(&request.to_cooling_request()) {
        Ok(results) => CalculateResponse::Success(CalculateSuccess::from_results(&results)),
        Err(err) => CalculateResponse::failure(&ApiError::from(err)),
    }
}

/// Parses a JSON request body and computes its cooling curve.
///
/// Bodies that cannot be parsed produce a `malformed_request` failure.
pub fn calculate_json(body: &str) -> CalculateResponse {
    match serde_json::from_str::<CalculateRequest>(body) {
        Ok(request) => calculate(&request),
        Err(err) => {
            debug!(%err, "could not parse calculate request");
            CalculateResponse::failure(&ApiError::from(err))
        }
    }
}
