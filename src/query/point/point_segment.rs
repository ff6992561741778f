use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Segment;

impl PointQuery for Segment {
    #[inline]
    fn project_local_point(&self, pt: &Point<Real>) -> PointProjection {
        let ab = self.b - self.a;
        let ap = pt - self.a;
        let ab_ap = ab.dot(&ap);
        let sqnab = ab.norm_squared();

        let proj = if ab_ap <= 0.0 || sqnab == 0.0 {
            // Voronoï region of vertex `a`, or a zero-length segment.
            self.a
        } else if ab_ap >= sqnab {
            // Voronoï region of vertex `b`.
            self.b
        } else {
            // Voronoï region of the segment interior.
            self.a + ab * (ab_ap / sqnab)
        };

        PointProjection::new(relative_eq!(proj, *pt), proj)
    }
}
