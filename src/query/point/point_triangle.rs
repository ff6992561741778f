use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Triangle;
use na;

#[inline]
fn compute_result(pt: &Point<Real>, proj: Point<Real>) -> PointProjection {
    PointProjection::new(relative_eq!(proj, *pt), proj)
}

impl PointQuery for Triangle {
    #[inline]
    fn project_local_point(&self, pt: &Point<Real>) -> PointProjection {
        let a = self.a;
        let b = self.b;
        let c = self.c;

        let ab = b - a;
        let ac = c - a;
        let ap = pt - a;

        let ab_ap = ab.dot(&ap);
        let ac_ap = ac.dot(&ap);

        if ab_ap <= 0.0 && ac_ap <= 0.0 {
            // Voronoï region of `a`.
            return compute_result(pt, a);
        }

        let bp = pt - b;
        let ab_bp = ab.dot(&bp);
        let ac_bp = ac.dot(&bp);

        if ab_bp >= 0.0 && ac_bp <= ab_bp {
            // Voronoï region of `b`.
            return compute_result(pt, b);
        }

        let cp = pt - c;
        let ab_cp = ab.dot(&cp);
        let ac_cp = ac.dot(&cp);

        if ac_cp >= 0.0 && ab_cp <= ac_cp {
            // Voronoï region of `c`.
            return compute_result(pt, c);
        }

        let n = ab.cross(&ac);

        let vc = n.dot(&ab.cross(&ap));
        if vc < 0.0 && ab_ap >= 0.0 && ab_bp <= 0.0 {
            // Voronoï region of `ab`.
            let v = ab_ap / ab.norm_squared();
            return compute_result(pt, a + ab * v);
        }

        let vb = -n.dot(&ac.cross(&cp));
        if vb < 0.0 && ac_ap >= 0.0 && ac_cp <= 0.0 {
            // Voronoï region of `ac`.
            let w = ac_ap / ac.norm_squared();
            return compute_result(pt, a + ac * w);
        }

        let bc = c - b;
        let va = n.dot(&bc.cross(&bp));
        if va < 0.0 && ac_bp - ab_bp >= 0.0 && ab_cp - ac_cp >= 0.0 {
            // Voronoï region of `bc`.
            let w = bc.dot(&bp) / bc.norm_squared();
            return compute_result(pt, b + bc * w);
        }

        let denom = va + vb + vc;
        if denom != 0.0 {
            // Voronoï region of the face.
            let denom = 1.0 / denom;
            let v = vb * denom;
            let w = vc * denom;
            return compute_result(pt, a + ab * v + ac * w);
        }

        // The triangle is degenerate (collinear or zero-area): project on its
        // closest edge instead.
        let mut best = PointProjection::new(false, a);
        let mut best_dist = Real::MAX;

        for edge in self.edges() {
            let proj = edge.project_local_point(pt);
            let dist = na::distance_squared(&proj.point, pt);
            if dist < best_dist {
                best_dist = dist;
                best = proj;
            }
        }

        best
    }
}
