use crate::io::DecodeError;
use crate::math::Real;
use crate::shape::GridDims;
use crate::transformation::voxelization::VoxelizationError;

/// Errors raised while importing a mesh file as an [`Object3D`](super::Object3D).
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum ImportError {
    /// The file bytes could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
    /// The decoded mesh could not be voxelized.
    #[error("voxelization error: {0}")]
    Voxelization(#[from] VoxelizationError),
}

/// Errors raised while building the global grid of a [`Space`](super::Space).
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum SpaceError {
    /// The configured voxel size is not a finite positive number.
    #[error("invalid space voxel size {0}, it must be finite and strictly positive.")]
    InvalidVoxelSize(Real),
    /// The global grid would have more cells than can be addressed.
    #[error("the global grid {0:?} is too large to be allocated.")]
    GridTooLarge(GridDims),
}
