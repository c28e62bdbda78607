//! Newton's Law of Cooling for a beverage in a container.
//!
//! This module provides a [`twine_core::Model`] implementation for the cooling
//! curve of a hot beverage. The computational core is in the internal `core`
//! module; [`CoolingModel`] is a thin adapter over it.
//!
//! # Example
//!
//! ```
//! use approx::assert_relative_eq;
//! use coffee_cooling::models::thermal::cooling::{CoolingModel, CoolingRequest};
//! use twine_core::Model;
//!
//! let model: CoolingModel = CoolingModel::default();
//! let results = model
//!     .call(&CoolingRequest::new(90.0, 20.0, 30.0, "ceramic"))
//!     .unwrap();
//!
//! // 20 + 70 * e^(-0.05 * 10)
//! assert_relative_eq!(results.temperature_at(10.0), 62.457, epsilon = 1e-3);
//! assert_eq!(results.mug_name(), "Ceramic Mug");
//! ```

mod core;

pub use self::core::{
    CHECKPOINT_MINUTES, Container, ContainerProfile, CoolingConfig, CoolingRequest,
    CoolingResults, DISPLAY_DECIMALS, Field, IDEAL_DRINKING_TEMP, NewtonCooling, PROFILES,
    PhysicsDefaults, Sample, TIMELINE_SAMPLES, ThermalMass, ValidationError, ValidationErrorKind,
};

use twine_core::Model;

/// Cooling curve model with a fixed timeline resolution of `N` samples.
///
/// The sample count is fixed at compile time so identical requests always
/// produce timelines of identical shape. `N` must be at least 2 (start and end),
/// which is enforced at compile time.
///
/// ```compile_fail
/// # use coffee_cooling::models::thermal::cooling::{CoolingModel, CoolingRequest};
/// // This will fail to compile: N must be >= 2
/// let _ = CoolingModel::<1>::new().compute(&CoolingRequest::new(90.0, 20.0, 30.0, "glass"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingModel<const N: usize = TIMELINE_SAMPLES> {
    config: CoolingConfig,
}

impl<const N: usize> CoolingModel<N> {
    /// Creates a model using the default [`CoolingConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CoolingConfig::default())
    }

    /// Creates a model with an explicit configuration.
    #[must_use]
    pub fn with_config(config: CoolingConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this model.
    #[must_use]
    pub fn config(&self) -> &CoolingConfig {
        &self.config
    }

    /// Computes the cooling curve and summary metrics for a request.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if any input is non-finite, the coffee is
    /// not hotter than the room, the container is unknown, or the duration is
    /// not strictly positive.
    pub fn compute(&self, request: &CoolingRequest) -> Result<CoolingResults<N>, ValidationError> {
        self::core::compute::<N>(request, &self.config)
    }
}

impl<const N: usize> Default for CoolingModel<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Model for CoolingModel<N> {
    type Input = CoolingRequest;
    type Output = CoolingResults<N>;
    type Error = ValidationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.compute(input)
    }
}
