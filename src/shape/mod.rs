//! Geometric data consumed and produced by the voxelization pipeline.

pub use self::occupancy_grid::OccupancyGrid;
pub use self::triangle_soup::{TriangleSoup, TriangleSoupError, COORDS_PER_TRIANGLE};
pub use self::voxel_grid::{GridDims, VoxelGrid};

mod occupancy_grid;
mod triangle_soup;
mod voxel_grid;
