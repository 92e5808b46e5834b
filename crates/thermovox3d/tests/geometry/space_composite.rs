use crate::{binary_stl, box_triangles};
use std::sync::Arc;
use thermovox3d::math::{Point, Real};
use thermovox3d::thermal::{Object3D, Space, SpaceConfig, SpaceState, ThermalMaterial};

fn config() -> SpaceConfig {
    SpaceConfig {
        voxel_size: 0.25,
        initial_temperature: 290.0,
        heat_diffusivity: 1.0e-5,
    }
}

fn imported_box(mins: Point<Real>, maxs: Point<Real>, temperature: Real) -> Arc<Object3D> {
    let bytes = binary_stl(b"box", &box_triangles(mins, maxs));
    let material = ThermalMaterial::new(temperature, 0.02);
    Arc::new(Object3D::from_stl_bytes(&bytes, mins, material, 0.25).unwrap())
}

#[test]
fn space_without_objects_is_empty() {
    let space = Space::new(vec![], config()).unwrap();
    assert_eq!(space.state(), &SpaceState::Empty);
    assert_eq!(space.num_clipped_voxels(), 0);
}

#[test]
fn objects_are_stamped_over_ambient_values() {
    let hot = imported_box(Point::origin(), Point::new(1.0, 1.0, 1.0), 400.0);
    let cold = imported_box(Point::new(2.0, 0.0, 0.0), Point::new(3.0, 0.5, 0.5), 250.0);
    let space = Space::new(vec![hot, cold], config()).unwrap();

    let grids = space.grids().unwrap();
    assert_eq!(grids.origin(), Point::origin());
    assert_eq!(grids.aabb().maxs, Point::new(3.0, 1.0, 1.0));

    let temperature = grids.temperature();
    let diffusivity = grids.diffusivity();
    assert_eq!(temperature.dims().nx, 12);

    assert_eq!(temperature.get(0, 0, 0), Some(&400.0));
    assert_eq!(temperature.get(3, 3, 3), Some(&400.0));
    assert_eq!(temperature.get(8, 1, 1), Some(&250.0));
    assert_eq!(diffusivity.get(8, 1, 1), Some(&0.02));

    // Between the two boxes and above the cold one.
    assert_eq!(temperature.get(5, 0, 0), Some(&290.0));
    assert_eq!(temperature.get(9, 3, 3), Some(&290.0));
    assert_eq!(diffusivity.get(5, 0, 0), Some(&1.0e-5));

    let num_hot = temperature.as_slice().iter().filter(|t| **t == 400.0).count();
    let num_cold = temperature.as_slice().iter().filter(|t| **t == 250.0).count();
    assert_eq!(num_hot, 64);
    assert_eq!(num_cold, 16);
    assert_eq!(space.num_clipped_voxels(), 0);
}
