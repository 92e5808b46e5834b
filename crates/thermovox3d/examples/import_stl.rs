use std::sync::Arc;
use thermovox3d::io;
use thermovox3d::math::Point;
use thermovox3d::thermal::{Object3D, Space, SpaceConfig, ThermalMaterial};

fn main() {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: import_stl <file.stl> [voxel_size]");
        std::process::exit(1);
    };
    let voxel_size = std::env::args()
        .nth(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(SpaceConfig::default().voxel_size);

    let soup = match io::load_stl_file(&path) {
        Ok(soup) => soup,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    println!("{}: {} triangles", path, soup.num_triangles());

    let object = match Object3D::with_voxel_size(
        soup,
        Point::origin(),
        ThermalMaterial::default(),
        voxel_size,
    ) {
        Ok(object) => object,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let aabb = object.local_aabb();
    let grid = object.grid();
    println!("aabb: {} -> {}", aabb.mins, aabb.maxs);
    println!(
        "grid: {}x{}x{}, {} occupied voxels",
        grid.dims().nx,
        grid.dims().ny,
        grid.dims().nz,
        grid.num_occupied()
    );

    let config = SpaceConfig {
        voxel_size,
        ..SpaceConfig::default()
    };
    let space = Space::new(vec![Arc::new(object.with_name(path))], config)
        .expect("the voxel size was already validated by the voxelizer");
    let temperature = space.temperature_grid().map_or(0, |t| t.as_slice().len());
    println!("space: {temperature} cells");
}
