use crate::bounding_volume::{self, Aabb};
use crate::math::{Point, Real};

/// Number of scalar coordinates describing one triangle (3 vertices × 3 coordinates).
pub const COORDS_PER_TRIANGLE: usize = 9;

/// Error raised when a flat coordinate buffer cannot be interpreted as triangles.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriangleSoupError {
    /// The buffer length is not a multiple of 9.
    #[error("a triangle soup needs a multiple of 9 coordinates, found {0}.")]
    InvalidLength(usize),
}

/// An unindexed triangle mesh stored as a flat coordinate buffer.
///
/// Triangle `t` occupies the coordinates `9 * t .. 9 * t + 9`, laid out as
/// `[x0, y0, z0, x1, y1, z1, x2, y2, z2]`. This is the layout produced by the
/// STL decoders and uploaded as-is by vertex-buffer consumers.
///
/// The soup is immutable: building a different mesh means building a new soup.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriangleSoup {
    coords: Vec<Real>,
}

impl TriangleSoup {
    /// Wraps a flat coordinate buffer.
    ///
    /// Fails if `coords.len()` is not a multiple of 9.
    pub fn new(coords: Vec<Real>) -> Result<Self, TriangleSoupError> {
        if coords.len() % COORDS_PER_TRIANGLE != 0 {
            return Err(TriangleSoupError::InvalidLength(coords.len()));
        }

        Ok(Self { coords })
    }

    /// Builds a soup from a list of triangles.
    pub fn from_triangles<I>(triangles: I) -> Self
    where
        I: IntoIterator<Item = [Point<Real>; 3]>,
    {
        let coords = triangles
            .into_iter()
            .flat_map(|tri| tri.into_iter().flat_map(|pt| [pt.x, pt.y, pt.z]))
            .collect();
        Self { coords }
    }

    /// The flat coordinate buffer.
    #[inline]
    pub fn coords(&self) -> &[Real] {
        &self.coords
    }

    /// The number of triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.coords.len() / COORDS_PER_TRIANGLE
    }

    /// Does this soup contain no triangle?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The vertices of the `i`-th triangle.
    ///
    /// # Panics
    /// Panics if `i >= self.num_triangles()`.
    #[inline]
    pub fn triangle(&self, i: usize) -> [Point<Real>; 3] {
        let c = &self.coords[i * COORDS_PER_TRIANGLE..(i + 1) * COORDS_PER_TRIANGLE];
        [
            Point::new(c[0], c[1], c[2]),
            Point::new(c[3], c[4], c[5]),
            Point::new(c[6], c[7], c[8]),
        ]
    }

    /// Iterates through all the triangles, in storage order.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = [Point<Real>; 3]> + '_ {
        (0..self.num_triangles()).map(|i| self.triangle(i))
    }

    /// Iterates through all the vertices, in storage order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = Point<Real>> + '_ {
        self.coords
            .chunks_exact(3)
            .map(|xyz| Point::new(xyz[0], xyz[1], xyz[2]))
    }

    /// The AABB of this soup, in its local frame.
    ///
    /// Returns `None` if the soup is empty.
    pub fn local_aabb(&self) -> Option<Aabb> {
        bounding_volume::compute_aabb(&self.coords)
    }
}
