use crate::math::CellIndex;
use std::ops::{Index, IndexMut};

/// The number of cells along each axis of a dense voxel grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GridDims {
    /// Number of cells along the `x` axis.
    pub nx: usize,
    /// Number of cells along the `y` axis.
    pub ny: usize,
    /// Number of cells along the `z` axis.
    pub nz: usize,
}

impl GridDims {
    /// Creates new grid dimensions.
    #[inline]
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { nx, ny, nz }
    }

    /// The total number of cells, or `None` if it overflows `usize`.
    #[inline]
    pub fn num_cells(&self) -> Option<usize> {
        self.nx.checked_mul(self.ny)?.checked_mul(self.nz)
    }

    /// Does a grid with these dimensions have no cell at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nx == 0 || self.ny == 0 || self.nz == 0
    }

    /// Is `(i, j, k)` a valid cell of the grid?
    #[inline]
    pub fn contains(&self, i: usize, j: usize, k: usize) -> bool {
        i < self.nx && j < self.ny && k < self.nz
    }

    /// Same as [`Self::contains`] with signed coordinates.
    #[inline]
    pub fn contains_signed(&self, i: i64, j: i64, k: i64) -> bool {
        i >= 0
            && j >= 0
            && k >= 0
            && (i as u64) < self.nx as u64
            && (j as u64) < self.ny as u64
            && (k as u64) < self.nz as u64
    }

    /// The linear index of the cell `(i, j, k)`: `i + nx * (j + ny * k)`.
    ///
    /// The coordinates are not checked.
    #[inline]
    pub fn linear_index(&self, i: usize, j: usize, k: usize) -> usize {
        i + self.nx * (j + self.ny * k)
    }

    /// The cell coordinates of the given linear index.
    #[inline]
    pub fn cell_coords(&self, index: usize) -> CellIndex {
        let i = index % self.nx;
        let jk = index / self.nx;
        CellIndex::new(i, jk % self.ny, jk / self.ny)
    }
}

/// A dense 3D grid of values with `x`-major linear storage.
///
/// The value of the cell `(i, j, k)` lives at `i + nx * (j + ny * k)`, so a
/// scanline along `x` is contiguous in memory.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct VoxelGrid<T> {
    dims: GridDims,
    data: Vec<T>,
}

impl<T: Clone> VoxelGrid<T> {
    /// Allocates a grid with every cell set to `value`.
    ///
    /// Returns `None` if the grid cannot be allocated: its number of cells
    /// overflows `usize`, its size in bytes exceeds `isize::MAX`, or the
    /// allocator refuses the request.
    pub fn new(dims: GridDims, value: T) -> Option<Self> {
        let len = dims.num_cells()?;
        let num_bytes = len.checked_mul(std::mem::size_of::<T>())?;

        if num_bytes > isize::MAX as usize {
            return None;
        }

        let mut data = Vec::new();
        data.try_reserve_exact(len).ok()?;
        data.resize(len, value);

        Some(Self { dims, data })
    }
}

impl<T> VoxelGrid<T> {
    /// The dimensions of this grid.
    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// The value of a cell, if `(i, j, k)` lies in the grid.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<&T> {
        if self.dims.contains(i, j, k) {
            Some(&self.data[self.dims.linear_index(i, j, k)])
        } else {
            None
        }
    }

    /// A mutable reference to a cell, if `(i, j, k)` lies in the grid.
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize, k: usize) -> Option<&mut T> {
        if self.dims.contains(i, j, k) {
            let id = self.dims.linear_index(i, j, k);
            Some(&mut self.data[id])
        } else {
            None
        }
    }

    /// All the cells, in linear-index order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// All the cells, in linear-index order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterates through all the cells together with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, &T)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(id, value)| (self.dims.cell_coords(id), value))
    }

    /// The raw bytes of this grid, for upload to a GPU buffer.
    #[cfg(feature = "bytemuck-serialize")]
    pub fn as_bytes(&self) -> &[u8]
    where
        T: bytemuck::Pod,
    {
        bytemuck::cast_slice(&self.data)
    }
}

impl<T> Index<CellIndex> for VoxelGrid<T> {
    type Output = T;

    #[inline]
    fn index(&self, cell: CellIndex) -> &T {
        assert!(self.dims.contains(cell.x, cell.y, cell.z));
        &self.data[self.dims.linear_index(cell.x, cell.y, cell.z)]
    }
}

impl<T> IndexMut<CellIndex> for VoxelGrid<T> {
    #[inline]
    fn index_mut(&mut self, cell: CellIndex) -> &mut T {
        assert!(self.dims.contains(cell.x, cell.y, cell.z));
        let id = self.dims.linear_index(cell.x, cell.y, cell.z);
        &mut self.data[id]
    }
}
