use crate::box_soup;
use thermovox3d::math::Point;
use thermovox3d::shape::TriangleSoup;
use thermovox3d::transformation::voxelization::{self, VoxelizationError};

#[test]
fn unit_cube_with_unit_voxels() {
    let soup = box_soup(Point::origin(), Point::new(1.0, 1.0, 1.0));
    let aabb = soup.local_aabb().unwrap();
    let grid = voxelization::voxelize(&soup, &aabb, 1.0).unwrap();

    assert_eq!(grid.dims().num_cells(), Some(1));
    assert_eq!(grid.num_occupied(), 1);
    assert!(grid.is_occupied(0, 0, 0));
}

#[test]
fn unit_cube_is_completely_filled() {
    let soup = box_soup(Point::origin(), Point::new(1.0, 1.0, 1.0));
    let aabb = soup.local_aabb().unwrap();
    let grid = voxelization::voxelize(&soup, &aabb, 0.25).unwrap();

    assert_eq!(grid.dims().nx, 4);
    assert_eq!(grid.dims().ny, 4);
    assert_eq!(grid.dims().nz, 4);
    assert_eq!(grid.num_occupied(), 64);
}

#[test]
fn enclosed_cavity_stays_empty() {
    // A 2x2x2 box with a 1x1x1 hole in its middle.
    let mut triangles: Vec<_> = box_soup(Point::origin(), Point::new(2.0, 2.0, 2.0))
        .triangles()
        .collect();
    triangles.extend(box_soup(Point::new(0.5, 0.5, 0.5), Point::new(1.5, 1.5, 1.5)).triangles());
    let soup = TriangleSoup::from_triangles(triangles);
    let aabb = soup.local_aabb().unwrap();
    let grid = voxelization::voxelize(&soup, &aabb, 0.25).unwrap();

    assert_eq!(grid.dims().nx, 8);
    assert!(grid.is_occupied(1, 4, 4));
    assert!(grid.is_occupied(2, 4, 4));
    assert!(!grid.is_occupied(3, 4, 4));
    assert!(!grid.is_occupied(4, 4, 4));
    assert!(!grid.is_occupied(5, 4, 4));
    assert!(grid.is_occupied(6, 4, 4));
    assert!(grid.is_occupied(7, 4, 4));
}

#[test]
fn grid_origin_is_aabb_minimum() {
    let soup = box_soup(Point::new(-3.0, 1.0, 0.5), Point::new(-2.0, 1.5, 1.0));
    let aabb = soup.local_aabb().unwrap();
    let grid = voxelization::voxelize(&soup, &aabb, 0.25).unwrap();

    assert_eq!(grid.origin(), Point::new(-3.0, 1.0, 0.5));
    assert_eq!(grid.cell_at_point(&Point::new(-2.9, 1.1, 0.6)).unwrap().x, 0);
    assert_eq!(grid.num_occupied(), 4 * 2 * 2);
}

#[test]
fn flat_mesh_is_degenerate() {
    let soup = TriangleSoup::from_triangles([[
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ]]);
    let aabb = soup.local_aabb().unwrap();

    assert!(matches!(
        voxelization::voxelize(&soup, &aabb, 0.25),
        Err(VoxelizationError::DegenerateGeometry(_))
    ));
}
