mod aabb_permutation;
mod cube_voxelization;
mod space_composite;
mod stl_decoding;

use thermovox3d::bounding_volume::Aabb;
use thermovox3d::math::{Point, Real};
use thermovox3d::shape::TriangleSoup;

/// The 12 triangles of the surface of an axis-aligned box.
pub fn box_triangles(mins: Point<Real>, maxs: Point<Real>) -> Vec<[Point<Real>; 3]> {
    let v = Aabb::new(mins, maxs).vertices();
    [
        [0, 2, 1],
        [0, 3, 2],
        [4, 5, 6],
        [4, 6, 7],
        [0, 1, 5],
        [0, 5, 4],
        [1, 2, 6],
        [1, 6, 5],
        [2, 3, 7],
        [2, 7, 6],
        [3, 0, 4],
        [3, 4, 7],
    ]
    .iter()
    .map(|f| [v[f[0]], v[f[1]], v[f[2]]])
    .collect()
}

pub fn box_soup(mins: Point<Real>, maxs: Point<Real>) -> TriangleSoup {
    TriangleSoup::from_triangles(box_triangles(mins, maxs))
}

/// Encodes triangles as a binary STL file with zero normals and attributes.
pub fn binary_stl(header: &[u8], triangles: &[[Point<Real>; 3]]) -> Vec<u8> {
    let mut bytes = vec![0u8; 80];
    let len = header.len().min(80);
    bytes[..len].copy_from_slice(&header[..len]);
    bytes.extend_from_slice(&(triangles.len() as u32).to_le_bytes());

    for tri in triangles {
        bytes.extend_from_slice(&[0u8; 12]);
        for pt in tri {
            for c in pt.iter() {
                bytes.extend_from_slice(&(*c as f32).to_le_bytes());
            }
        }
        bytes.extend_from_slice(&[0u8; 2]);
    }

    bytes
}

/// Encodes triangles as a text STL file.
pub fn ascii_stl(triangles: &[[Point<Real>; 3]]) -> String {
    let mut out = String::from("solid test\n");
    for tri in triangles {
        out.push_str("  facet normal 0 0 0\n    outer loop\n");
        for pt in tri {
            out.push_str(&format!("      vertex {:e} {:e} {:e}\n", pt.x, pt.y, pt.z));
        }
        out.push_str("    endloop\n  endfacet\n");
    }
    out.push_str("endsolid test\n");
    out
}
