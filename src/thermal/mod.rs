//! Voxelized objects with thermal properties and their composition into the
//! initial conditions of a heat simulation.
//!
//! An [`Object3D`] bundles a mesh with its occupancy grid and a
//! [`ThermalMaterial`]. A [`Space`] overlays the occupancy of all its objects
//! on a global grid covering the union of their AABBs, producing one grid of
//! initial temperatures and one grid of thermal diffusivities. Cells covered
//! by no object keep the ambient values of the [`SpaceConfig`].
//!
//! Objects are shared with `Arc` so that a space snapshot never observes an
//! object changing under it.

pub use self::error::{ImportError, SpaceError};
pub use self::material::{
    ThermalMaterial, DEFAULT_OBJECT_DIFFUSIVITY, DEFAULT_OBJECT_TEMPERATURE,
};
pub use self::object3d::{Object3D, ObjectDesc};
pub use self::space::{Space, SpaceGrids, SpaceState};
pub use self::space_config::{
    SpaceConfig, DEFAULT_AMBIENT_DIFFUSIVITY, DEFAULT_AMBIENT_TEMPERATURE,
};

mod error;
mod material;
mod object3d;
mod space;
mod space_config;
