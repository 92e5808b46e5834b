use super::{Object3D, SpaceConfig, SpaceError};
use crate::bounding_volume::Aabb;
use crate::math::{CellIndex, Point, Real, Vector3};
use crate::shape::{GridDims, VoxelGrid};
use std::sync::Arc;

/// The global simulation grids of a populated [`Space`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SpaceGrids {
    aabb: Aabb,
    voxel_size: Real,
    temperature: VoxelGrid<Real>,
    diffusivity: VoxelGrid<Real>,
    num_clipped_voxels: usize,
}

impl SpaceGrids {
    /// The union of the AABBs of every object of the space.
    ///
    /// The global grid starts at `aabb.mins`.
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The world-space corner of the cell `(0, 0, 0)`.
    pub fn origin(&self) -> Point<Real> {
        self.aabb.mins
    }

    /// The edge length of each voxel.
    pub fn voxel_size(&self) -> Real {
        self.voxel_size
    }

    /// The initial temperature of each cell.
    pub fn temperature(&self) -> &VoxelGrid<Real> {
        &self.temperature
    }

    /// The thermal diffusivity of each cell.
    pub fn diffusivity(&self) -> &VoxelGrid<Real> {
        &self.diffusivity
    }

    /// The number of occupied object voxels that fell outside of the global grid.
    pub fn num_clipped_voxels(&self) -> usize {
        self.num_clipped_voxels
    }
}

/// The derived state of a [`Space`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum SpaceState {
    /// The space has no object: there is no AABB and no grid.
    Empty,
    /// The space has at least one object.
    Populated(SpaceGrids),
}

/// A collection of objects composited into the initial conditions of a heat
/// simulation.
///
/// The space keeps a snapshot of its objects. Its grids are only recomputed by
/// the operations that change that snapshot, and a failed recomputation leaves
/// the previous snapshot and grids untouched.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use std::sync::Arc;
/// use thermovox3d::math::Point;
/// use thermovox3d::shape::TriangleSoup;
/// use thermovox3d::thermal::{Object3D, Space, SpaceConfig, ThermalMaterial};
///
/// let (a, b, c, d) = (
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
///     Point::new(0.0, 0.0, 1.0),
/// );
/// let soup = TriangleSoup::from_triangles([[a, c, b], [a, b, d], [a, d, c], [b, c, d]]);
/// let object = Object3D::new(soup, Point::origin(), ThermalMaterial::default()).unwrap();
///
/// let space = Space::new(vec![Arc::new(object)], SpaceConfig::default()).unwrap();
/// assert!(space.temperature_grid().is_some());
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Space {
    config: SpaceConfig,
    objects: Vec<Arc<Object3D>>,
    state: SpaceState,
}

impl Space {
    /// Creates a space without any object.
    pub fn empty(config: SpaceConfig) -> Self {
        Self {
            config,
            objects: vec![],
            state: SpaceState::Empty,
        }
    }

    /// Creates a space from a collection of objects and computes its grids.
    pub fn new(objects: Vec<Arc<Object3D>>, config: SpaceConfig) -> Result<Self, SpaceError> {
        let state = composite(&objects, &config)?;
        Ok(Self {
            config,
            objects,
            state,
        })
    }

    /// Replaces the objects of this space and recomputes its grids.
    pub fn rebuild(&mut self, objects: Vec<Arc<Object3D>>) -> Result<(), SpaceError> {
        self.state = composite(&objects, &self.config)?;
        self.objects = objects;
        Ok(())
    }

    /// Replaces the configuration of this space and recomputes its grids.
    pub fn set_config(&mut self, config: SpaceConfig) -> Result<(), SpaceError> {
        self.state = composite(&self.objects, &config)?;
        self.config = config;
        Ok(())
    }

    /// Appends an object and recomputes the grids.
    ///
    /// The new object is composited last, so it wins over the others where
    /// they overlap.
    pub fn insert(&mut self, object: Arc<Object3D>) -> Result<(), SpaceError> {
        let mut objects = self.objects.clone();
        objects.push(object);
        self.rebuild(objects)
    }

    /// Removes the object at `index` and recomputes the grids.
    ///
    /// Returns `Ok(None)` if `index` is out of bounds, in which case nothing is
    /// recomputed.
    pub fn remove(&mut self, index: usize) -> Result<Option<Arc<Object3D>>, SpaceError> {
        if index >= self.objects.len() {
            return Ok(None);
        }

        let mut objects = self.objects.clone();
        let removed = objects.remove(index);
        self.rebuild(objects)?;
        Ok(Some(removed))
    }

    /// Replaces the object at `index` and recomputes the grids.
    ///
    /// Returns the previous object, or `Ok(None)` if `index` is out of bounds.
    pub fn replace(
        &mut self,
        index: usize,
        object: Arc<Object3D>,
    ) -> Result<Option<Arc<Object3D>>, SpaceError> {
        if index >= self.objects.len() {
            return Ok(None);
        }

        let mut objects = self.objects.clone();
        let previous = std::mem::replace(&mut objects[index], object);
        self.rebuild(objects)?;
        Ok(Some(previous))
    }

    /// Removes every object.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.state = SpaceState::Empty;
    }

    /// The configuration of this space.
    pub fn config(&self) -> &SpaceConfig {
        &self.config
    }

    /// The objects of this space, in compositing order.
    pub fn objects(&self) -> &[Arc<Object3D>] {
        &self.objects
    }

    /// The derived state of this space.
    pub fn state(&self) -> &SpaceState {
        &self.state
    }

    /// The grids of this space, if it has any object.
    pub fn grids(&self) -> Option<&SpaceGrids> {
        match &self.state {
            SpaceState::Empty => None,
            SpaceState::Populated(grids) => Some(grids),
        }
    }

    /// Does this space have no object?
    pub fn is_empty(&self) -> bool {
        self.state == SpaceState::Empty
    }

    /// The union of the AABBs of all the objects.
    pub fn aabb(&self) -> Option<&Aabb> {
        self.grids().map(SpaceGrids::aabb)
    }

    /// The initial temperature grid.
    pub fn temperature_grid(&self) -> Option<&VoxelGrid<Real>> {
        self.grids().map(SpaceGrids::temperature)
    }

    /// The thermal diffusivity grid.
    pub fn diffusivity_grid(&self) -> Option<&VoxelGrid<Real>> {
        self.grids().map(SpaceGrids::diffusivity)
    }

    /// The number of object voxels dropped because they fell outside of the global grid.
    pub fn num_clipped_voxels(&self) -> usize {
        self.grids().map_or(0, SpaceGrids::num_clipped_voxels)
    }
}

/// Computes the state of a space made of `objects`.
fn composite(objects: &[Arc<Object3D>], config: &SpaceConfig) -> Result<SpaceState, SpaceError> {
    let voxel_size = config.voxel_size;

    if !config.has_valid_voxel_size() {
        return Err(SpaceError::InvalidVoxelSize(voxel_size));
    }

    if objects.is_empty() {
        return Ok(SpaceState::Empty);
    }

    let mut aabb = Aabb::new_invalid();
    for obj in objects {
        aabb.merge(obj.local_aabb());
    }

    let dims = aabb.grid_dims(voxel_size);
    let mut temperature =
        VoxelGrid::new(dims, config.initial_temperature).ok_or(SpaceError::GridTooLarge(dims))?;
    let mut diffusivity =
        VoxelGrid::new(dims, config.heat_diffusivity).ok_or(SpaceError::GridTooLarge(dims))?;
    let mut num_clipped_voxels = 0;

    for (id, obj) in objects.iter().enumerate() {
        if !relative_eq!(obj.voxel_size(), voxel_size) {
            log::warn!(
                "Object {} was voxelized with a voxel size of {} but the space uses {}, it is ignored.",
                id,
                obj.voxel_size(),
                voxel_size
            );
            continue;
        }

        let offset = (obj.position() - aabb.mins).map(|x| (x / voxel_size).floor() as i64);
        let material = obj.material();
        let mut num_clipped = 0;

        for cell in obj.grid().occupied_cells() {
            let Some(global) = global_cell(cell, &offset, dims) else {
                num_clipped += 1;
                continue;
            };

            temperature[global] = material.initial_temperature;
            diffusivity[global] = material.heat_diffusivity;
        }

        if num_clipped > 0 {
            log::debug!(
                "Object {} has {} voxels outside of the space grid, they are dropped.",
                id,
                num_clipped
            );
        }

        num_clipped_voxels += num_clipped;
    }

    log::trace!(
        "Composited {} objects into a {:?} grid ({} clipped voxels).",
        objects.len(),
        dims,
        num_clipped_voxels
    );

    Ok(SpaceState::Populated(SpaceGrids {
        aabb,
        voxel_size,
        temperature,
        diffusivity,
        num_clipped_voxels,
    }))
}

/// The cell of the global grid `local` lands on once shifted by `offset`.
///
/// Returns `None` if it falls outside of `dims`, including when the shift
/// overflows.
fn global_cell(local: CellIndex, offset: &Vector3<i64>, dims: GridDims) -> Option<CellIndex> {
    let gi = i64::try_from(local.x).ok()?.checked_add(offset.x)?;
    let gj = i64::try_from(local.y).ok()?.checked_add(offset.y)?;
    let gk = i64::try_from(local.z).ok()?.checked_add(offset.z)?;

    dims.contains_signed(gi, gj, gk)
        .then(|| CellIndex::new(gi as usize, gj as usize, gk as usize))
}
