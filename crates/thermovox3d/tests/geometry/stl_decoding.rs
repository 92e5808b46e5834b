use crate::{ascii_stl, binary_stl, box_triangles};
use thermovox3d::io::{self, DecodeError, LoadError, MeshFormat};
use thermovox3d::math::Point;

#[test]
fn binary_stl_decodes_nine_coords_per_triangle() {
    let triangles = box_triangles(Point::new(-1.0, 0.0, 2.0), Point::new(1.0, 0.5, 3.0));
    let bytes = binary_stl(b"binary box", &triangles);
    let soup = io::decode(&bytes).unwrap();

    assert_eq!(soup.coords().len(), 9 * triangles.len());
    assert_eq!(soup.num_triangles(), 12);
    for (decoded, expected) in soup.triangles().zip(triangles.iter()) {
        assert_eq!(&decoded, expected);
    }
}

#[test]
fn binary_stl_with_solid_header_is_detected() {
    let triangles = box_triangles(Point::origin(), Point::new(1.0, 1.0, 1.0));
    let bytes = binary_stl(b"solid but actually binary", &triangles);

    assert_eq!(MeshFormat::detect(&bytes), MeshFormat::Ascii);
    assert_eq!(io::decode(&bytes).unwrap().num_triangles(), 12);
    assert!(io::decode_with(&bytes, MeshFormat::Ascii)
        .map_or(true, |soup| soup.is_empty()));
}

#[test]
fn truncated_binary_stl_is_a_format_error() {
    let triangles = box_triangles(Point::origin(), Point::new(1.0, 1.0, 1.0));
    let bytes = binary_stl(b"", &triangles);

    let err = io::decode(&bytes[..bytes.len() - 1]).unwrap_err();
    assert!(err.is_format_error());
    assert!(matches!(
        err,
        DecodeError::TruncatedTriangles {
            num_triangles: 12,
            ..
        }
    ));

    let err = io::decode(&bytes[..40]).unwrap_err();
    assert!(matches!(err, DecodeError::TruncatedHeader { found: 40, .. }));
}

#[test]
fn oversized_triangle_count_is_rejected_before_reading() {
    let mut bytes = vec![0u8; 84];
    bytes[80..84].copy_from_slice(&20_000_000u32.to_le_bytes());

    let err = io::decode(&bytes).unwrap_err();
    assert!(err.is_size_limit_error());
    assert!(!err.is_format_error());
}

#[test]
fn text_stl_decodes_every_vertex() {
    let triangles = box_triangles(Point::new(0.25, -0.5, 0.0), Point::new(1.5, 0.5, 2.0));
    let text = ascii_stl(&triangles);
    let soup = io::decode(text.as_bytes()).unwrap();

    assert_eq!(soup.coords().len(), 3 * 3 * triangles.len());
    for (decoded, expected) in soup.triangles().zip(triangles.iter()) {
        assert_eq!(&decoded, expected);
    }
}

#[test]
fn text_stl_with_byte_order_mark_is_detected() {
    let triangles = box_triangles(Point::origin(), Point::new(1.0, 1.0, 1.0));
    let mut bytes = b"\xEF\xBB\xBF".to_vec();
    bytes.extend_from_slice(ascii_stl(&triangles).as_bytes());

    assert_eq!(MeshFormat::detect(&bytes), MeshFormat::Ascii);
    assert_eq!(io::decode(&bytes).unwrap().num_triangles(), 12);
}

#[test]
fn text_stl_with_dangling_vertex_is_rejected() {
    let text = "solid s\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nvertex 5 5 5\nendsolid s\n";
    assert_eq!(
        io::decode(text.as_bytes()),
        Err(DecodeError::VertexCountMismatch(4))
    );
}

#[test]
fn load_stl_file_from_disk() {
    let triangles = box_triangles(Point::origin(), Point::new(2.0, 2.0, 2.0));
    let path = std::env::temp_dir().join(format!("thermovox3d-{}.stl", std::process::id()));
    std::fs::write(&path, binary_stl(b"disk", &triangles)).unwrap();

    let soup = io::load_stl_file(&path);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(soup.unwrap().num_triangles(), 12);

    assert!(matches!(
        io::load_stl_file(&path),
        Err(LoadError::Io { .. })
    ));
}
