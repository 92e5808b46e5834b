use super::{ImportError, ThermalMaterial};
use crate::bounding_volume::Aabb;
use crate::io;
use crate::math::{Point, Real};
use crate::shape::{OccupancyGrid, TriangleSoup};
use crate::transformation::voxelization::{self, VoxelizationError, DEFAULT_VOXEL_SIZE};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The description of an object to build with [`Object3D::build_all`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectDesc {
    /// The mesh, in the local frame of the object.
    pub vertices: TriangleSoup,
    /// The world-space position of the object.
    pub position: Point<Real>,
    /// The thermal properties of the object.
    pub material: ThermalMaterial,
}

/// A voxelized solid object with thermal properties.
///
/// An object is immutable once built: its AABB and occupancy grid are derived
/// from its vertices at construction and never go stale. Editing an object
/// means building a new one and handing it to the [`Space`](super::Space).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Object3D {
    name: Option<String>,
    vertices: TriangleSoup,
    position: Point<Real>,
    aabb: Aabb,
    grid: OccupancyGrid,
    material: ThermalMaterial,
}

impl Object3D {
    /// Builds an object, voxelizing its mesh with the default voxel size.
    pub fn new(
        vertices: TriangleSoup,
        position: Point<Real>,
        material: ThermalMaterial,
    ) -> Result<Self, VoxelizationError> {
        Self::with_voxel_size(vertices, position, material, DEFAULT_VOXEL_SIZE)
    }

    /// Builds an object, voxelizing its mesh with cubic voxels of edge `voxel_size`.
    ///
    /// The occupancy grid covers the local AABB of `vertices`.
    pub fn with_voxel_size(
        vertices: TriangleSoup,
        position: Point<Real>,
        material: ThermalMaterial,
        voxel_size: Real,
    ) -> Result<Self, VoxelizationError> {
        let aabb = vertices.local_aabb().ok_or(VoxelizationError::EmptyMesh)?;
        let grid = voxelization::voxelize(&vertices, &aabb, voxel_size)?;

        log::debug!(
            "Built object with {} triangles, {:?} voxels ({} occupied).",
            vertices.num_triangles(),
            grid.dims(),
            grid.num_occupied()
        );

        Ok(Self {
            name: None,
            vertices,
            position,
            aabb,
            grid,
            material,
        })
    }

    /// Decodes an STL buffer and builds an object from it.
    pub fn from_stl_bytes(
        bytes: &[u8],
        position: Point<Real>,
        material: ThermalMaterial,
        voxel_size: Real,
    ) -> Result<Self, ImportError> {
        let vertices = io::decode(bytes)?;
        Ok(Self::with_voxel_size(
            vertices, position, material, voxel_size,
        )?)
    }

    /// Builds several objects with the same voxel size.
    ///
    /// The results are in the same order as `descs`. With the `parallel`
    /// feature enabled, objects are voxelized concurrently.
    pub fn build_all(
        descs: Vec<ObjectDesc>,
        voxel_size: Real,
    ) -> Vec<Result<Self, VoxelizationError>> {
        let build = |desc: ObjectDesc| {
            Self::with_voxel_size(desc.vertices, desc.position, desc.material, voxel_size)
        };

        #[cfg(feature = "parallel")]
        return descs.into_par_iter().map(build).collect();

        #[cfg(not(feature = "parallel"))]
        return descs.into_iter().map(build).collect();
    }

    /// Sets the display name of this object.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The display name of this object, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The mesh of this object, in its local frame.
    pub fn vertices(&self) -> &TriangleSoup {
        &self.vertices
    }

    /// The world-space position of this object.
    pub fn position(&self) -> Point<Real> {
        self.position
    }

    /// The AABB of the mesh, in its local frame.
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The AABB of the mesh translated by the position of this object.
    pub fn world_aabb(&self) -> Aabb {
        self.aabb.translated(&self.position.coords)
    }

    /// The occupancy grid of this object, covering its local AABB.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// The voxel size the occupancy grid was computed with.
    pub fn voxel_size(&self) -> Real {
        self.grid.voxel_size()
    }

    /// The thermal properties of this object.
    pub fn material(&self) -> &ThermalMaterial {
        &self.material
    }
}
