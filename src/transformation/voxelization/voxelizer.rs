use super::{SurfaceMarker, TriangleAabbMarker};
use crate::bounding_volume::Aabb;
use crate::math::Real;
use crate::shape::{GridDims, OccupancyGrid, TriangleSoup};

/// The voxel edge length used when none is specified, in world units.
pub const DEFAULT_VOXEL_SIZE: Real = 0.1;

/// How the cells enclosed by the marked surface are classified.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum FillMode {
    /// Only the surface cells are occupied.
    SurfaceOnly,
    /// Surface cells plus the cells enclosed by them, using an even-odd rule
    /// along each `x` scanline. See [`parity_fill`].
    #[default]
    ParityFill,
}

/// Errors raised when a mesh cannot be voxelized.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum VoxelizationError {
    /// The mesh has no vertex, so it has no AABB.
    #[error("cannot voxelize an empty mesh.")]
    EmptyMesh,
    /// The AABB is flat along at least one axis, the grid would have no cell.
    #[error("degenerate geometry: the voxel grid would have dimensions {0:?}.")]
    DegenerateGeometry(GridDims),
    /// The AABB has a NaN or infinite bound.
    #[error("the mesh bounds are not finite.")]
    NonFiniteBounds,
    /// The voxel size is not a finite positive number.
    #[error("invalid voxel size {0}, it must be finite and strictly positive.")]
    InvalidVoxelSize(Real),
    /// The grid is too large to be allocated.
    #[error("the voxel grid {0:?} is too large to be allocated.")]
    GridTooLarge(GridDims),
}

/// Voxelizes a triangle soup with the [`TriangleAabbMarker`] and a parity fill.
///
/// The grid covers `aabb` (normally the AABB of `vertices`) with cubic voxels of
/// edge `voxel_size`, and has `ceil(extent / voxel_size)` cells along each axis.
///
/// The parity fill assumes a watertight mesh: open or non-manifold meshes can
/// produce over- or under-filled scanlines.
pub fn voxelize(
    vertices: &TriangleSoup,
    aabb: &Aabb,
    voxel_size: Real,
) -> Result<OccupancyGrid, VoxelizationError> {
    voxelize_with(
        vertices,
        aabb,
        voxel_size,
        &TriangleAabbMarker,
        FillMode::ParityFill,
    )
}

/// Voxelizes a triangle soup with a custom surface marker and fill mode.
pub fn voxelize_with<M: SurfaceMarker + ?Sized>(
    vertices: &TriangleSoup,
    aabb: &Aabb,
    voxel_size: Real,
    marker: &M,
    fill_mode: FillMode,
) -> Result<OccupancyGrid, VoxelizationError> {
    let mut grid = allocate_grid(aabb, voxel_size)?;

    for triangle in vertices.triangles() {
        marker.mark_triangle(&mut grid, &triangle);
    }

    let num_surface = grid.num_occupied();

    if fill_mode == FillMode::ParityFill {
        parity_fill(&mut grid);
    }

    log::trace!(
        "Voxelized {} triangles into a {:?} grid: {} surface cells, {} occupied cells.",
        vertices.num_triangles(),
        grid.dims(),
        num_surface,
        grid.num_occupied()
    );

    Ok(grid)
}

fn allocate_grid(aabb: &Aabb, voxel_size: Real) -> Result<OccupancyGrid, VoxelizationError> {
    if !voxel_size.is_finite() || voxel_size <= 0.0 {
        return Err(VoxelizationError::InvalidVoxelSize(voxel_size));
    }

    if !(aabb.mins.coords.iter().chain(aabb.maxs.coords.iter())).all(|x| x.is_finite()) {
        return Err(VoxelizationError::NonFiniteBounds);
    }

    let dims = aabb.grid_dims(voxel_size);

    if dims.is_empty() {
        return Err(VoxelizationError::DegenerateGeometry(dims));
    }

    OccupancyGrid::new(aabb, voxel_size).ok_or(VoxelizationError::GridTooLarge(dims))
}

/// Fills the interior of the surface marked on `grid` with an even-odd rule.
///
/// Each `(j, k)` scanline is walked along increasing `i` with an `inside`
/// flag toggled whenever a marked cell is crossed; every cell visited while
/// the flag is set becomes occupied. Scanlines are independent.
pub fn parity_fill(grid: &mut OccupancyGrid) {
    let nx = grid.dims().nx;

    if grid.dims().is_empty() {
        return;
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        grid.cells_mut()
            .as_mut_slice()
            .par_chunks_mut(nx)
            .for_each(fill_scanline);
    }

    #[cfg(not(feature = "parallel"))]
    grid.cells_mut()
        .as_mut_slice()
        .chunks_mut(nx)
        .for_each(fill_scanline);
}

fn fill_scanline(row: &mut [u8]) {
    let mut inside = false;

    for cell in row {
        if *cell != OccupancyGrid::EMPTY {
            inside = !inside;
        }

        if inside {
            *cell = OccupancyGrid::OCCUPIED;
        }
    }
}
