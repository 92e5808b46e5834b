use crate::math::Real;
use crate::transformation::voxelization::DEFAULT_VOXEL_SIZE;

/// Ambient temperature of the empty cells of a space.
pub const DEFAULT_AMBIENT_TEMPERATURE: Real = 293.15;
/// Ambient thermal diffusivity of the empty cells of a space (air).
pub const DEFAULT_AMBIENT_DIFFUSIVITY: Real = 2.2e-5;

/// Parameters of the global simulation grid of a [`Space`](super::Space).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SpaceConfig {
    /// The edge length of each voxel, in world units.
    ///
    /// Objects are only stamped into the global grid if their own occupancy
    /// grid uses the same voxel size.
    pub voxel_size: Real,
    /// The temperature of cells not covered by any object.
    pub initial_temperature: Real,
    /// The thermal diffusivity of cells not covered by any object.
    pub heat_diffusivity: Real,
}

impl SpaceConfig {
    /// Is the voxel size finite and strictly positive?
    pub fn has_valid_voxel_size(&self) -> bool {
        self.voxel_size.is_finite() && self.voxel_size > 0.0
    }
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            voxel_size: DEFAULT_VOXEL_SIZE,
            initial_temperature: DEFAULT_AMBIENT_TEMPERATURE,
            heat_diffusivity: DEFAULT_AMBIENT_DIFFUSIVITY,
        }
    }
}
