use serde::Serialize;

use crate::models::thermal::cooling::{CoolingResults, Sample};

use super::ApiError;

/// The outcome of a calculation, serialized with a `success` flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalculateResponse {
    Success(CalculateSuccess),
    Failure(CalculateFailure),
}

impl CalculateResponse {
    /// Builds a failure response from an error.
    #[must_use]
    pub fn failure(err: &ApiError) -> Self {
        CalculateResponse::Failure(CalculateFailure {
            success: false,
            error: err.to_string(),
            error_kind: err.kind(),
        })
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, CalculateResponse::Success(_))
    }
}

/// A successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculateSuccess {
    /// Always `true`.
    pub success: bool,
    pub plot_data: PlotData,
    pub mug_name: &'static str,
    pub cooling_constant: f64,
    pub final_temp: f64,
    pub temp_drop: f64,
    pub time_to_ideal: Option<f64>,
    pub temp_timeline: Vec<Sample>,
    /// Rounded temperatures at the key checkpoint minutes within the window.
    pub temp_checkpoints: Vec<Sample>,
    pub physics_explanation: String,
}

impl CalculateSuccess {
    /// Shapes model results for the wire.
    #[must_use]
    pub fn from_results<const N: usize>(results: &CoolingResults<N>) -> Self {
        Self {
            success: true,
            plot_data: PlotData::from_results(results),
            mug_name: results.mug_name(),
            cooling_constant: results.cooling_constant,
            final_temp: results.final_temp,
            temp_drop: results.temp_drop,
            time_to_ideal: results.time_to_ideal,
            temp_timeline: results.timeline.to_vec(),
            temp_checkpoints: results.checkpoints(),
            physics_explanation: results.physics_explanation.clone(),
        }
    }
}

/// Series and reference lines for a cooling chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotData {
    /// Sample times (minutes).
    pub time: Vec<f64>,

    /// Sample temperatures (°C), aligned with `time`.
    pub temperature: Vec<f64>,

    /// Room temperature reference line (°C).
    pub room_temp: f64,

    /// Ideal drinking temperature reference line (°C).
    pub ideal_temp: f64,

    /// Series color for the selected container.
    pub mug_color: &'static str,
}

impl PlotData {
    #[must_use]
    pub fn from_results<const N: usize>(results: &CoolingResults<N>) -> Self {
        let (time, temperature) = results
            .timeline
            .iter()
            .map(|sample| (sample.time, sample.temperature))
            .unzip();

        Self {
            time,
            temperature,
            room_temp: results.room_temp,
            ideal_temp: results.ideal_temp,
            mug_color: results.mug_color(),
        }
    }
}

/// A failed calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculateFailure {
    /// Always `false`.
    pub success: bool,

    /// Human-readable description of what went wrong.
    pub error: String,

    /// Stable identifier for the kind of failure, such as `unknown_container`.
    pub error_kind: &'static str,
}
