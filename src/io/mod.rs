//! Decoding of STL triangle meshes.
//!
//! Both the binary and the text flavors of STL are supported. Decoding only
//! extracts the triangle vertices: normals, attributes, and solid names are
//! dropped.

pub use self::error::{DecodeError, LoadError};
pub use self::mesh_format::MeshFormat;
pub use self::stl_ascii::decode_ascii;
pub use self::stl_binary::decode_binary;

use crate::shape::TriangleSoup;
use std::path::Path;

mod error;
mod mesh_format;
mod stl_ascii;
pub mod stl_binary;

/// The maximum number of coordinates a single mesh may decode into.
///
/// Binary STL headers declaring more triangles than this allows are rejected
/// before any allocation.
pub const MAX_DECODED_COORDS: u64 = 100_000_000;

/// Decodes an STL buffer, guessing its format with [`MeshFormat::detect`].
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use thermovox3d::io;
///
/// let stl = "solid t\nfacet normal 0 0 1\nouter loop\n\
///            vertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\n\
///            endloop\nendfacet\nendsolid t\n";
/// let soup = io::decode(stl.as_bytes()).unwrap();
/// assert_eq!(soup.num_triangles(), 1);
/// # }
/// ```
pub fn decode(bytes: &[u8]) -> Result<TriangleSoup, DecodeError> {
    decode_with(bytes, MeshFormat::Auto)
}

/// Decodes an STL buffer with an explicit format hint.
///
/// With [`MeshFormat::Auto`], a buffer detected as text that yields no vertex
/// (or fails to parse) while its length exactly matches the binary layout is
/// decoded as binary instead. Explicit hints never fall back.
pub fn decode_with(bytes: &[u8], format: MeshFormat) -> Result<TriangleSoup, DecodeError> {
    match format {
        MeshFormat::Binary => decode_binary(bytes),
        MeshFormat::Ascii => decode_ascii(bytes),
        MeshFormat::Auto => match MeshFormat::detect(bytes) {
            MeshFormat::Ascii => {
                let result = decode_ascii(bytes);
                let misdetected = result.as_ref().map_or(true, |soup| soup.is_empty());

                if misdetected && stl_binary::has_binary_layout(bytes) {
                    log::debug!(
                        "STL header starts with `solid` but the content matches the binary layout, decoding as binary."
                    );
                    decode_binary(bytes)
                } else {
                    result
                }
            }
            _ => decode_binary(bytes),
        },
    }
}

/// Reads and decodes an STL file.
pub fn load_stl_file(path: impl AsRef<Path>) -> Result<TriangleSoup, LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::trace!("Decoding {} bytes from {:?}.", bytes.len(), path);
    Ok(decode(&bytes)?)
}

#[cfg(test)]
mod test {
    use super::stl_binary::test::encode_binary;
    use super::{decode, decode_with, load_stl_file, LoadError, MeshFormat};

    const TRI: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

    #[test]
    fn binary_with_solid_header_falls_back() {
        let bytes = encode_binary(b"solid exported-by-cad", &[TRI, TRI]);

        assert_eq!(MeshFormat::detect(&bytes), MeshFormat::Ascii);
        assert_eq!(decode(&bytes).unwrap().num_triangles(), 2);
        assert_eq!(
            decode_with(&bytes, MeshFormat::Binary).unwrap().num_triangles(),
            2
        );
        // An explicit text hint is obeyed.
        assert!(decode_with(&bytes, MeshFormat::Ascii).unwrap().is_empty());
    }

    #[test]
    fn empty_text_solid_stays_empty() {
        let soup = decode(b"solid nothing\nendsolid nothing\n").unwrap();
        assert!(soup.is_empty());
    }

    #[test]
    fn missing_file() {
        let err = load_stl_file("/definitely/not/a/mesh.stl").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
