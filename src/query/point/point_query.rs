use crate::math::{Point, Real};
use na;

/// Description of the projection of a point on a shape.
#[derive(Copy, Clone, Debug)]
pub struct PointProjection {
    /// Whether or not the point to project was located on the shape.
    pub is_inside: bool,
    /// The projection result.
    pub point: Point<Real>,
}

impl PointProjection {
    /// Initializes a new `PointProjection`.
    pub fn new(is_inside: bool, point: Point<Real>) -> Self {
        PointProjection { is_inside, point }
    }
}

/// Trait of objects that can be tested for point projection.
pub trait PointQuery {
    /// Projects a point on `self`.
    ///
    /// The point is assumed to be expressed in the local-space of `self`.
    fn project_local_point(&self, pt: &Point<Real>) -> PointProjection;

    /// Computes the minimal distance between a point and `self`.
    #[inline]
    fn distance_to_local_point(&self, pt: &Point<Real>) -> Real {
        let proj = self.project_local_point(pt);
        na::distance(pt, &proj.point)
    }
}
