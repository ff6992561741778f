use crate::math::{Point, Real};
use crate::query::closest_points::{closest_points_segment_segment, ClosestPoints};
use crate::query::intersection_test::intersection_test_triangle_triangle;
use crate::query::PointQuery;
use crate::shape::Triangle;

use na;

/// Closest points between two triangles expressed in the same frame.
///
/// Touching triangles (shared vertex or edge, contact between the faces) are reported
/// as [`ClosestPoints::Intersecting`], consistently with
/// [`intersection_test_triangle_triangle`].
pub fn closest_points_triangle_triangle(tri1: &Triangle, tri2: &Triangle) -> ClosestPoints {
    if intersection_test_triangle_triangle(tri1, tri2) {
        return ClosestPoints::Intersecting;
    }

    let (point1, point2, distance) = closest_feature_points(tri1, tri2);
    ClosestPoints::Disjoint {
        point1,
        point2,
        distance,
    }
}

/// Closest points between the features (vertices, edges, faces) of two triangles.
///
/// The minimum over the nine edge-edge pairs and the six vertex-face projections
/// realizes the exact triangle-triangle distance whenever no triangle crosses the
/// other one's interior.
pub(crate) fn closest_feature_points(
    tri1: &Triangle,
    tri2: &Triangle,
) -> (Point<Real>, Point<Real>, Real) {
    let mut best_sq = Real::MAX;
    let mut best = (tri1.a, tri2.a);

    for edge1 in &tri1.edges() {
        for edge2 in &tri2.edges() {
            let (p1, p2) = closest_points_segment_segment(edge1, edge2);
            let dist_sq = na::distance_squared(&p1, &p2);

            if dist_sq < best_sq {
                best_sq = dist_sq;
                best = (p1, p2);
            }
        }
    }

    for pt in tri1.vertices() {
        let proj = tri2.project_local_point(pt);
        let dist_sq = na::distance_squared(pt, &proj.point);

        if dist_sq < best_sq {
            best_sq = dist_sq;
            best = (*pt, proj.point);
        }
    }

    for pt in tri2.vertices() {
        let proj = tri1.project_local_point(pt);
        let dist_sq = na::distance_squared(&proj.point, pt);

        if dist_sq < best_sq {
            best_sq = dist_sq;
            best = (proj.point, *pt);
        }
    }

    (best.0, best.1, best_sq.sqrt())
}
