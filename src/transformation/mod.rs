//! Transformation of meshes into other geometric representations.

/// Voxelization of a 3D triangle mesh.
pub mod voxelization;
