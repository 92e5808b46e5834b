//! Voxelization of a 3D triangle mesh into a dense occupancy grid.
//!
//! Voxelization runs in two phases:
//!
//! 1. A [`SurfaceMarker`] marks the cells touched by each triangle.
//! 2. Depending on the [`FillMode`], the cells enclosed by that surface are
//!    filled with an even-odd rule along `x` scanlines ([`parity_fill`]).

pub use self::surface_marker::{SurfaceMarker, TriangleAabbMarker};
pub use self::voxelizer::{
    parity_fill, voxelize, voxelize_with, FillMode, VoxelizationError, DEFAULT_VOXEL_SIZE,
};

mod surface_marker;
mod voxelizer;
