use super::{ContainerProfile, ThermalMass};

/// Builds the physics explanation shown alongside a cooling curve.
pub(super) fn explain(profile: &ContainerProfile) -> String {
    format!(
        "Newton's Law of Cooling: dT/dt = -k(T - T_room) where k = {k}. \
         {name} ({description}) has {mass} thermal mass, so it {behavior}.",
        k = profile.cooling_constant(),
        name = profile.name(),
        description = profile.description(),
        mass = profile.thermal_mass().label().to_lowercase(),
        behavior = behavior(profile.thermal_mass()),
    )
}

fn behavior(mass: ThermalMass) -> &'static str {
    match mass {
        ThermalMass::VeryLow => "sheds heat very quickly",
        ThermalMass::Low => "sheds heat quickly",
        ThermalMass::Medium => "cools at a moderate pace",
        ThermalMass::High => "holds heat well and cools slowly",
    }
}
