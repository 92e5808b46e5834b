use crate::bounding_volume::Aabb;
use crate::math::{CellIndex, Point, Real, Vector};
use crate::shape::{GridDims, VoxelGrid};

/// A dense inside/outside classification of a solid, sampled on cubic voxels.
///
/// The cell `(i, j, k)` covers the world-space cube
/// `[origin + i·s, origin + (i+1)·s) × [..) × [..)` where `s` is the voxel size.
/// Cells are stored as `u8`: [`OccupancyGrid::EMPTY`] or [`OccupancyGrid::OCCUPIED`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct OccupancyGrid {
    origin: Point<Real>,
    voxel_size: Real,
    cells: VoxelGrid<u8>,
}

impl OccupancyGrid {
    /// The value of a cell outside of the solid.
    pub const EMPTY: u8 = 0;
    /// The value of a cell inside of, or on the surface of, the solid.
    pub const OCCUPIED: u8 = 1;

    /// Allocates an empty grid covering `aabb` with cubic voxels of edge `voxel_size`.
    ///
    /// The grid has `ceil(extent / voxel_size)` cells along each axis and its
    /// origin is `aabb.mins`. Returns `None` if the grid is too large to be
    /// allocated.
    pub fn new(aabb: &Aabb, voxel_size: Real) -> Option<Self> {
        Some(Self {
            origin: aabb.mins,
            voxel_size,
            cells: VoxelGrid::new(aabb.grid_dims(voxel_size), Self::EMPTY)?,
        })
    }

    /// The world-space position of the corner of the cell `(0, 0, 0)`.
    #[inline]
    pub fn origin(&self) -> Point<Real> {
        self.origin
    }

    /// The edge length of each voxel.
    #[inline]
    pub fn voxel_size(&self) -> Real {
        self.voxel_size
    }

    /// The number of cells along each axis.
    #[inline]
    pub fn dims(&self) -> GridDims {
        self.cells.dims()
    }

    /// The raw cell values, mutably.
    ///
    /// Any non-zero value is treated as occupied by the parity fill.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut VoxelGrid<u8> {
        &mut self.cells
    }

    /// The world-space box covered by the cell `(i, j, k)`.
    pub fn cell_aabb(&self, i: usize, j: usize, k: usize) -> Aabb {
        let mins = self.origin + Vector::new(i as Real, j as Real, k as Real) * self.voxel_size;
        Aabb::new(mins, mins + Vector::repeat(self.voxel_size))
    }

    /// The cell containing the world-space point `pt`, if any.
    pub fn cell_at_point(&self, pt: &Point<Real>) -> Option<CellIndex> {
        let local = (pt - self.origin) / self.voxel_size;
        let (i, j, k) = (
            local.x.floor() as i64,
            local.y.floor() as i64,
            local.z.floor() as i64,
        );
        self.dims()
            .contains_signed(i, j, k)
            .then(|| CellIndex::new(i as usize, j as usize, k as usize))
    }

    /// Is the cell `(i, j, k)` occupied? Cells outside of the grid are not.
    #[inline]
    pub fn is_occupied(&self, i: usize, j: usize, k: usize) -> bool {
        self.cells.get(i, j, k).is_some_and(|v| *v != Self::EMPTY)
    }

    /// Marks the cell `(i, j, k)` as occupied. Cells outside of the grid are ignored.
    #[inline]
    pub fn set_occupied(&mut self, i: usize, j: usize, k: usize) {
        if let Some(v) = self.cells.get_mut(i, j, k) {
            *v = Self::OCCUPIED;
        }
    }

    /// The number of occupied cells.
    pub fn num_occupied(&self) -> usize {
        self.cells
            .as_slice()
            .iter()
            .filter(|v| **v != Self::EMPTY)
            .count()
    }

    /// Iterates through the coordinates of every occupied cell, in linear-index order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells
            .iter()
            .filter(|(_, v)| **v != Self::EMPTY)
            .map(|(cell, _)| cell)
    }

    /// Builds a triangle mesh made of one cube per occupied voxel.
    ///
    /// This is meant for debug display of the voxelization result.
    pub fn to_trimesh(&self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        for cell in self.occupied_cells() {
            let s = vertices.len() as u32;
            vertices.extend(self.cell_aabb(cell.x, cell.y, cell.z).vertices());

            indices.push([s, s + 2, s + 1]);
            indices.push([s, s + 3, s + 2]);
            indices.push([s + 4, s + 5, s + 6]);
            indices.push([s + 4, s + 6, s + 7]);
            indices.push([s + 7, s + 6, s + 2]);
            indices.push([s + 7, s + 2, s + 3]);
            indices.push([s + 4, s + 1, s + 5]);
            indices.push([s + 4, s, s + 1]);
            indices.push([s + 6, s + 5, s + 1]);
            indices.push([s + 6, s + 1, s + 2]);
            indices.push([s + 7, s, s + 4]);
            indices.push([s + 7, s + 3, s]);
        }

        (vertices, indices)
    }
}
