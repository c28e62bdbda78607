use serde::Serialize;

use crate::models::thermal::cooling::{ContainerProfile, PROFILES, PhysicsDefaults};

/// Container profiles and physics constants for rendering an input form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    /// Container profiles, in table order.
    pub mug_types: Vec<MugType>,
    pub physics: PhysicsDefaults,
}

/// Display view of one container profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MugType {
    pub id: &'static str,
    pub name: &'static str,
    pub cooling_constant: f64,
    pub description: &'static str,
    pub color: &'static str,
    pub thermal_mass: &'static str,
}

impl From<&ContainerProfile> for MugType {
    fn from(profile: &ContainerProfile) -> Self {
        Self {
            id: profile.id(),
            name: profile.name(),
            cooling_constant: profile.cooling_constant(),
            description: profile.description(),
            color: profile.color(),
            thermal_mass: profile.thermal_mass().label(),
        }
    }
}

/// Returns the read-only catalog of container profiles and physics defaults.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog {
        mug_types: PROFILES.iter().map(MugType::from).collect(),
        physics: PhysicsDefaults::default(),
    }
}
