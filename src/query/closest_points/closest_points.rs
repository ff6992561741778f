use crate::math::{Isometry, Point, Real};

/// Closest points information.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ClosestPoints {
    /// The two objects are intersecting or touching.
    Intersecting,
    /// The two objects are disjoint.
    Disjoint {
        /// The point on the first object closest to the second one.
        point1: Point<Real>,
        /// The point on the second object closest to the first one.
        point2: Point<Real>,
        /// The distance separating the two objects.
        distance: Real,
    },
}

impl ClosestPoints {
    /// Transform the points in `self` by `pos1` and `pos2`.
    #[must_use]
    pub fn transform_by(self, pos1: &Isometry<Real>, pos2: &Isometry<Real>) -> Self {
        if let ClosestPoints::Disjoint {
            point1,
            point2,
            distance,
        } = self
        {
            ClosestPoints::Disjoint {
                point1: pos1 * point1,
                point2: pos2 * point2,
                distance,
            }
        } else {
            self
        }
    }
}
