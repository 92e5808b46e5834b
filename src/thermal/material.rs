use crate::math::Real;

/// Initial temperature given to imported objects.
pub const DEFAULT_OBJECT_TEMPERATURE: Real = 300.0;
/// Thermal diffusivity given to imported objects.
pub const DEFAULT_OBJECT_DIFFUSIVITY: Real = 0.01;

/// The thermal properties stamped into the simulation grid for every voxel
/// occupied by an object.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ThermalMaterial {
    /// The temperature of the object when the simulation starts.
    pub initial_temperature: Real,
    /// The thermal diffusivity of the object.
    pub heat_diffusivity: Real,
}

impl ThermalMaterial {
    /// Creates a new material.
    pub fn new(initial_temperature: Real, heat_diffusivity: Real) -> Self {
        Self {
            initial_temperature,
            heat_diffusivity,
        }
    }
}

impl Default for ThermalMaterial {
    fn default() -> Self {
        Self::new(DEFAULT_OBJECT_TEMPERATURE, DEFAULT_OBJECT_DIFFUSIVITY)
    }
}
