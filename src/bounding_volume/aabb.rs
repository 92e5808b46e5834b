//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};
use crate::shape::GridDims;
use num::Bounded;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. Its edges are always
/// parallel to the coordinate axes.
///
/// # Structure
///
/// - **mins**: The point with the smallest coordinates on each axis.
/// - **maxs**: The point with the largest coordinates on each axis.
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z`.
///
/// An empty point set has no AABB at all: functions computing the AABB of a
/// vertex buffer return `Option<Aabb>` and yield `None` in that case instead of
/// a box with inverted bounds.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use thermovox3d::bounding_volume::Aabb;
/// use nalgebra::Point3;
///
/// let aabb = Aabb::new(Point3::new(-0.5, -0.5, -0.5), Point3::new(0.5, 0.5, 0.5));
///
/// assert!(aabb.contains_local_point(&Point3::origin()));
/// assert_eq!(aabb.extents().x, 1.0);
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "bytemuck-serialize",
    derive(bytemuck::Pod, bytemuck::Zeroable)
)]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    ///
    /// Each component of `mins` should be ≤ the corresponding component of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// This is only useful as the starting value of a merge loop. It must never
    /// escape as the AABB of an empty set, use `None` for that.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(<Real as Bounded>::max_value()).into(),
            Vector::repeat(<Real as Bounded>::min_value()).into(),
        )
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Computes the `Aabb` bounding `self` translated by `translation`.
    #[inline]
    #[must_use]
    pub fn translated(mut self, translation: &Vector<Real>) -> Self {
        self.mins += translation;
        self.maxs += translation;
        self
    }

    /// Merges this AABB with another one, in place (componentwise union).
    #[inline]
    pub fn merge(&mut self, other: &Aabb) {
        *self = self.merged(other);
    }

    /// The smallest AABB containing both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// Does this AABB contain the given point? Points on the boundary count as inside.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// The number of cells along each axis of a grid of cubic voxels with edge
    /// `voxel_size` covering this AABB.
    ///
    /// Each axis has `ceil((maxs - mins) / voxel_size)` cells. A zero-extent axis
    /// yields zero cells.
    #[inline]
    pub fn grid_dims(&self, voxel_size: Real) -> GridDims {
        let extents = self.extents();
        // NOTE: `as usize` saturates: negative or NaN extents give 0.
        GridDims::new(
            (extents.x / voxel_size).ceil() as usize,
            (extents.y / voxel_size).ceil() as usize,
            (extents.z / voxel_size).ceil() as usize,
        )
    }

    /// The eight corners of this AABB.
    ///
    /// ```text
    ///    y             3 - 2
    ///    |           7 − 6 |
    ///    ___ x       |   | 1  (the zero is below 3 and on the left of 1,
    ///   /            4 - 5     hidden by the 4-5-6-7 face.)
    ///  z
    /// ```
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }
}

#[cfg(test)]
mod test {
    use super::Aabb;
    use crate::math::Point;

    #[test]
    fn merged_is_componentwise_union() {
        let a = Aabb::new(Point::new(0.0, -1.0, 2.0), Point::new(1.0, 0.0, 3.0));
        let b = Aabb::new(Point::new(-2.0, 0.5, 2.5), Point::new(0.5, 4.0, 2.75));
        let merged = a.merged(&b);

        assert_eq!(merged.mins, Point::new(-2.0, -1.0, 2.0));
        assert_eq!(merged.maxs, Point::new(1.0, 4.0, 3.0));
        assert!(merged.contains_local_point(&a.mins));
        assert!(merged.contains_local_point(&b.maxs));

        let mut in_place = Aabb::new_invalid();
        in_place.merge(&a);
        in_place.merge(&b);
        assert_eq!(in_place, merged);
    }

    #[test]
    fn grid_dims_round_up() {
        let aabb = Aabb::new(Point::origin(), Point::new(1.0, 0.6, 0.0));
        let dims = aabb.grid_dims(0.25);

        assert_eq!(dims.nx, 4);
        assert_eq!(dims.ny, 3);
        assert_eq!(dims.nz, 0);
        assert!(dims.is_empty());
    }
}
