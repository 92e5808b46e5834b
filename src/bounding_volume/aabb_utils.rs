use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

/// Computes the AABB of a flat vertex buffer `[x0, y0, z0, x1, y1, z1, ...]`.
///
/// This is a single scan tracking the componentwise minimum and maximum.
/// Returns `None` if the buffer contains no complete vertex. Trailing
/// coordinates that do not form a full vertex are ignored.
pub fn compute_aabb(coords: &[Real]) -> Option<Aabb> {
    local_point_cloud_aabb(
        coords
            .chunks_exact(3)
            .map(|xyz| Point::new(xyz[0], xyz[1], xyz[2])),
    )
}

/// Computes the AABB of a set of points.
///
/// Returns `None` if `pts` yields no point.
pub fn local_point_cloud_aabb<I>(pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = Point<Real>>,
{
    let mut it = pts.into_iter();

    let p0 = it.next()?;
    let mut min: Point<Real> = p0;
    let mut max: Point<Real> = p0;

    for pt in it {
        min = min.inf(&pt);
        max = max.sup(&pt);
    }

    Some(Aabb::new(min, max))
}

/// Computes the AABB of a single triangle.
#[inline]
pub fn triangle_aabb(vertices: &[Point<Real>; 3]) -> Aabb {
    Aabb::new(
        vertices[0].inf(&vertices[1]).inf(&vertices[2]),
        vertices[0].sup(&vertices[1]).sup(&vertices[2]),
    )
}
