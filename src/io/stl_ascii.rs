//! Decoder of the text STL format.
//!
//! The decoder does not validate the `solid`/`facet`/`outer loop` nesting: it
//! harvests every `vertex <x> <y> <z>` triple in document order.

use super::{DecodeError, MAX_DECODED_COORDS};
use crate::math::Real;
use crate::shape::TriangleSoup;
use once_cell::sync::Lazy;
use regex::bytes::Regex;

static VERTEX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"vertex\s+([-+]?[0-9.eE+-]+)\s+([-+]?[0-9.eE+-]+)\s+([-+]?[0-9.eE+-]+)")
        .expect("the STL vertex pattern is a valid regex")
});

/// Parses the longest prefix of `token` that is a valid float.
fn parse_coord(token: &[u8], vertex: usize) -> Result<Real, DecodeError> {
    // The pattern only matches ASCII bytes, so every prefix is a valid `str`.
    let token = std::str::from_utf8(token).unwrap_or_default();

    (1..=token.len())
        .rev()
        .find_map(|end| token[..end].parse::<Real>().ok())
        .ok_or_else(|| DecodeError::InvalidNumber {
            token: token.to_string(),
            vertex,
        })
}

/// Decodes a text STL.
///
/// Coordinates are read leniently: trailing garbage after a valid number is
/// ignored, so `1.5e` reads as `1.5` and `1.2.3` as `1.2`. Fails if a
/// coordinate has no numeric prefix at all, or if the number of vertices found
/// is not a multiple of 3.
pub fn decode_ascii(bytes: &[u8]) -> Result<TriangleSoup, DecodeError> {
    let mut coords = Vec::new();

    for (vertex, captures) in VERTEX_PATTERN.captures_iter(bytes).enumerate() {
        if coords.len() as u64 + 3 > MAX_DECODED_COORDS {
            return Err(DecodeError::SizeLimit {
                num_coords: coords.len() as u64 + 3,
                limit: MAX_DECODED_COORDS,
            });
        }

        for c in 1..=3 {
            coords.push(parse_coord(&captures[c], vertex)?);
        }
    }

    let num_vertices = coords.len() / 3;
    TriangleSoup::new(coords).map_err(|_| DecodeError::VertexCountMismatch(num_vertices))
}
