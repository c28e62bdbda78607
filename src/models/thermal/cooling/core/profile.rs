use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::support::constraint::{Constrained, UnitIntervalOpen};

use super::ValidationError;

/// Containers with a known cooling profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Container {
    Ceramic,
    Glass,
    Metal,
    Paper,
    DoubleWall,
}

impl Container {
    /// Every container, in profile table order.
    pub const ALL: [Container; 5] = [
        Container::Ceramic,
        Container::Glass,
        Container::Metal,
        Container::Paper,
        Container::DoubleWall,
    ];

    /// Returns the container's identifier key.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Container::Ceramic => "ceramic",
            Container::Glass => "glass",
            Container::Metal => "metal",
            Container::Paper => "paper",
            Container::DoubleWall => "double_wall",
        }
    }

    /// Returns the container's entry in the profile table.
    #[must_use]
    pub fn profile(self) -> &'static ContainerProfile {
        &PROFILES[self as usize]
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Container {
    type Err = ValidationError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Container::ALL
            .into_iter()
            .find(|container| container.id() == id)
            .ok_or_else(|| ValidationError::UnknownContainer { id: id.to_owned() })
    }
}

/// Qualitative thermal mass of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThermalMass {
    VeryLow,
    Low,
    Medium,
    High,
}

impl ThermalMass {
    /// Returns the display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ThermalMass::VeryLow => "Very Low",
            ThermalMass::Low => "Low",
            ThermalMass::Medium => "Medium",
            ThermalMass::High => "High",
        }
    }
}

impl fmt::Display for ThermalMass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cooling parameters and display metadata for one container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerProfile {
    container: Container,
    name: &'static str,
    cooling_constant: Constrained<f64, UnitIntervalOpen>,
    color: &'static str,
    description: &'static str,
    thermal_mass: ThermalMass,
}

impl ContainerProfile {
    /// Returns the container this profile describes.
    #[must_use]
    pub fn container(&self) -> Container {
        self.container
    }

    /// Returns the identifier key.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.container.id()
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the cooling constant `k` in 1/minute.
    #[must_use]
    pub fn cooling_constant(&self) -> f64 {
        *self.cooling_constant.as_ref()
    }

    pub(super) fn constrained_cooling_constant(&self) -> Constrained<f64, UnitIntervalOpen> {
        self.cooling_constant
    }

    /// Returns the chart color as a CSS hex string.
    #[must_use]
    pub fn color(&self) -> &'static str {
        self.color
    }

    /// Returns a short description of the container's insulation.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Returns the qualitative thermal mass.
    #[must_use]
    pub fn thermal_mass(&self) -> ThermalMass {
        self.thermal_mass
    }
}

/// The container profile table, indexed by [`Container`] discriminant.
pub static PROFILES: [ContainerProfile; 5] = [
    ContainerProfile {
        container: Container::Ceramic,
        name: "Ceramic Mug",
        cooling_constant: Constrained::new_unchecked(0.05),
        color: "#D2691E",
        description: "Classic ceramic - good heat retention",
        thermal_mass: ThermalMass::Medium,
    },
    ContainerProfile {
        container: Container::Glass,
        name: "Glass Mug",
        cooling_constant: Constrained::new_unchecked(0.08),
        color: "#87CEEB",
        description: "Clear glass - faster cooling",
        thermal_mass: ThermalMass::Low,
    },
    ContainerProfile {
        container: Container::Metal,
        name: "Metal Travel Mug",
        cooling_constant: Constrained::new_unchecked(0.03),
        color: "#C0C0C0",
        description: "Stainless steel - excellent insulation",
        thermal_mass: ThermalMass::High,
    },
    ContainerProfile {
        container: Container::Paper,
        name: "Paper Cup",
        cooling_constant: Constrained::new_unchecked(0.12),
        color: "#DEB887",
        description: "Disposable - poor insulation",
        thermal_mass: ThermalMass::VeryLow,
    },
    ContainerProfile {
        container: Container::DoubleWall,
        name: "Double-Wall Glass",
        cooling_constant: Constrained::new_unchecked(0.025),
        color: "#E6E6FA",
        description: "Premium insulation",
        thermal_mass: ThermalMass::High,
    },
];
