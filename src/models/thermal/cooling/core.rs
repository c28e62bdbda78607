//! Closed-form cooling of a beverage toward ambient temperature.
//!
//! The beverage is treated as a single lumped mass losing heat in proportion
//! to its excess over room temperature:
//!
//! ```text
//! dT/dt = -k (T - T_room)   =>   T(t) = T_room + (T_0 - T_room) e^(-k t)
//! ```
//!
//! The container sets `k`. Temperatures are carried in degrees Celsius and
//! times in minutes throughout this module.

mod config;
mod error;
mod explanation;
mod newton;
mod profile;
mod request;
mod results;
mod timeline;

#[cfg(test)]
mod test_support;

pub use config::{
    CHECKPOINT_MINUTES, CoolingConfig, DISPLAY_DECIMALS, IDEAL_DRINKING_TEMP, PhysicsDefaults,
    TIMELINE_SAMPLES,
};
pub use error::{Field, ValidationError, ValidationErrorKind};
pub use newton::NewtonCooling;
pub use profile::{Container, ContainerProfile, PROFILES, ThermalMass};
pub use request::CoolingRequest;
pub use results::CoolingResults;
pub use timeline::Sample;

use tracing::{debug, instrument};

/// Validates a request and computes its cooling curve and summary metrics.
///
/// # Errors
///
/// Returns a [`ValidationError`] describing the first failed input check.
#[instrument(level = "debug", skip_all, fields(container = %request.container, samples = N))]
pub(super) fn compute<const N: usize>(
    request: &CoolingRequest,
    config: &CoolingConfig,
) -> Result<CoolingResults<N>, ValidationError> {
    const {
        assert!(
            N >= 2,
            "cooling timeline requires at least 2 samples (start and end)"
        );
    };

    let conditions = request
        .validate()
        .inspect_err(|err| debug!(%err, "rejected cooling request"))?;

    let profile = conditions.container.profile();
    let duration = conditions.duration.into_inner();
    let law = NewtonCooling::new(
        conditions.coffee_temp,
        conditions.room_temp,
        profile.constrained_cooling_constant(),
    );

    let timeline = timeline::sample::<N>(&law, duration);

    let final_temp = config.round(timeline[N - 1].temperature);
    let temp_drop = config.round(conditions.coffee_temp - final_temp);

    // Rounding may push a crossing just inside the window past its end.
    let time_to_ideal = law
        .time_to_reach(config.ideal_temp)
        .filter(|&t| t <= duration)
        .map(|t| config.round(t).min(duration));

    debug!(final_temp, temp_drop, ?time_to_ideal, "computed cooling curve");

    Ok(CoolingResults {
        container: conditions.container,
        coffee_temp: conditions.coffee_temp,
        room_temp: conditions.room_temp,
        duration,
        ideal_temp: config.ideal_temp,
        cooling_constant: profile.cooling_constant(),
        final_temp,
        temp_drop,
        time_to_ideal,
        timeline,
        physics_explanation: explanation::explain(profile),
        law,
        config: *config,
    })
}
