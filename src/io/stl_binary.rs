//! Decoder of the fixed-layout binary STL format.
//!
//! ```text
//! bytes  0..80   header, ignored
//! bytes 80..84   u32 triangle count T, little-endian
//! then T records of 50 bytes:
//!        0..12   f32 normal (ignored)
//!       12..48   3 × (f32 x, f32 y, f32 z)
//!       48..50   u16 attribute byte count (ignored)
//! ```

use super::{DecodeError, MAX_DECODED_COORDS};
use crate::math::Real;
use crate::shape::{TriangleSoup, COORDS_PER_TRIANGLE};
use static_assertions::const_assert_eq;

/// Length of the free-form header.
pub const HEADER_LEN: usize = 80;
/// Offset of the first triangle record.
pub const TRIANGLES_OFFSET: usize = HEADER_LEN + 4;
/// Length of a single triangle record.
pub const TRIANGLE_RECORD_LEN: usize = 50;

const NORMAL_LEN: usize = 12;

const_assert_eq!(
    TRIANGLE_RECORD_LEN,
    NORMAL_LEN + COORDS_PER_TRIANGLE * 4 + 2
);

/// Reads the triangle count declared in the header, if the header is complete.
pub fn declared_triangle_count(bytes: &[u8]) -> Option<u32> {
    let count = bytes.get(HEADER_LEN..TRIANGLES_OFFSET)?;
    let mut buf = [0; 4];
    buf.copy_from_slice(count);
    Some(u32::from_le_bytes(buf))
}

/// The exact byte length of a binary STL with `num_triangles` triangles.
#[inline]
pub fn expected_len(num_triangles: u32) -> u64 {
    TRIANGLES_OFFSET as u64 + TRIANGLE_RECORD_LEN as u64 * num_triangles as u64
}

/// Is the length of `bytes` exactly the one its declared triangle count requires?
pub fn has_binary_layout(bytes: &[u8]) -> bool {
    declared_triangle_count(bytes).is_some_and(|n| expected_len(n) == bytes.len() as u64)
}

/// Decodes a binary STL.
///
/// The declared triangle count is checked against the size limit before
/// anything is allocated, then against the actual buffer length.
pub fn decode_binary(bytes: &[u8]) -> Result<TriangleSoup, DecodeError> {
    let num_triangles =
        declared_triangle_count(bytes).ok_or(DecodeError::TruncatedHeader {
            expected: TRIANGLES_OFFSET,
            found: bytes.len(),
        })?;

    let num_coords = num_triangles as u64 * COORDS_PER_TRIANGLE as u64;
    if num_coords > MAX_DECODED_COORDS {
        return Err(DecodeError::SizeLimit {
            num_coords,
            limit: MAX_DECODED_COORDS,
        });
    }

    let expected = expected_len(num_triangles);
    if (bytes.len() as u64) < expected {
        return Err(DecodeError::TruncatedTriangles {
            num_triangles,
            expected,
            found: bytes.len(),
        });
    }

    // The length check above guarantees `expected` fits in a `usize`.
    let records = &bytes[TRIANGLES_OFFSET..expected as usize];
    if records.len() + TRIANGLES_OFFSET < bytes.len() {
        log::debug!(
            "Ignoring {} trailing bytes after the last binary STL triangle.",
            bytes.len() - records.len() - TRIANGLES_OFFSET
        );
    }

    let mut coords = Vec::with_capacity(num_coords as usize);

    for record in records.chunks_exact(TRIANGLE_RECORD_LEN) {
        let vertices = &record[NORMAL_LEN..NORMAL_LEN + COORDS_PER_TRIANGLE * 4];
        coords.extend(vertices.chunks_exact(4).map(|le| {
            let mut buf = [0; 4];
            buf.copy_from_slice(le);
            Real::from(f32::from_le_bytes(buf))
        }));
    }

    TriangleSoup::new(coords).map_err(|_| DecodeError::VertexCountMismatch(num_coords as usize / 3))
}
