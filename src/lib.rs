/*!
thermovox
=========

**thermovox** turns triangulated surface meshes (STL files) into voxel
occupancy grids and composites them into a shared simulation grid carrying
per-voxel temperature and thermal diffusivity, ready for a heat-diffusion
solver.

The pipeline is:

1. [`io::decode`] turns raw STL bytes into a [`shape::TriangleSoup`].
2. [`bounding_volume::Aabb`] bounds the soup.
3. [`transformation::voxelization::voxelize`] fills an [`shape::OccupancyGrid`].
4. [`thermal::Space`] stamps every [`thermal::Object3D`] into the global
   temperature and diffusivity grids.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod io;
pub mod shape;
pub mod thermal;
pub mod transformation;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The integer coordinates of a grid cell.
    pub type CellIndex = Point3<usize>;
}
