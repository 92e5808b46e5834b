use crate::bounding_volume::details::triangle_aabb;
use crate::math::{Point, Real};
use crate::shape::OccupancyGrid;
use std::ops::Range;

/// A strategy deciding which voxels a triangle of the surface touches.
///
/// Implementations mark cells of the grid as occupied. They must not clear
/// cells: the grid is shared by all the triangles of the mesh, and the parity
/// fill running afterward relies on every surface cell being marked.
pub trait SurfaceMarker {
    /// Marks the cells of `grid` touched by `triangle` (world-space vertices).
    fn mark_triangle(&self, grid: &mut OccupancyGrid, triangle: &[Point<Real>; 3]);
}

/// Marks every cell overlapped by the AABB of each triangle.
///
/// This is a coarse, conservative rasterization: the whole box of cells
/// enclosing the triangle is marked, not only the cells the triangle actually
/// passes through. Thin or tilted triangles over-mark their neighborhood.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TriangleAabbMarker;

impl SurfaceMarker for TriangleAabbMarker {
    fn mark_triangle(&self, grid: &mut OccupancyGrid, triangle: &[Point<Real>; 3]) {
        let aabb = triangle_aabb(triangle);
        let origin = grid.origin();
        let voxel_size = grid.voxel_size();
        let dims = grid.dims();

        let ri = cell_range(aabb.mins.x, aabb.maxs.x, origin.x, voxel_size, dims.nx);
        let rj = cell_range(aabb.mins.y, aabb.maxs.y, origin.y, voxel_size, dims.ny);
        let rk = cell_range(aabb.mins.z, aabb.maxs.z, origin.z, voxel_size, dims.nz);

        for k in rk {
            for j in rj.clone() {
                for i in ri.clone() {
                    grid.set_occupied(i, j, k);
                }
            }
        }
    }
}

/// The cells `floor((min - origin) / s) ..= floor((max - origin) / s)` clamped to `[0, n)`.
///
/// Cells falling outside of the grid are dropped, so the range may be empty.
fn cell_range(min: Real, max: Real, origin: Real, voxel_size: Real, n: usize) -> Range<usize> {
    let first = ((min - origin) / voxel_size).floor();
    let last = ((max - origin) / voxel_size).floor();

    if last.is_nan() || last < 0.0 {
        return 0..0;
    }

    // NOTE: float to int `as` casts saturate.
    let start = (first.max(0.0) as usize).min(n);
    let end = (last as usize).saturating_add(1).min(n);
    start..end.max(start)
}
