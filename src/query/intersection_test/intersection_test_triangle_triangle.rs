use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::query::closest_points::closest_feature_points;
use crate::query::PointQuery;
use crate::shape::{Segment, Triangle};

/// Tests whether two triangles expressed in the same frame intersect.
///
/// Touching configurations (shared vertex or edge, contact between the faces) count
/// as intersecting. Degenerate (collinear or zero-area) triangles are supported.
pub fn intersection_test_triangle_triangle(tri1: &Triangle, tri2: &Triangle) -> bool {
    let n1 = tri1.scaled_normal();
    let n2 = tri2.scaled_normal();
    let valid1 = normal_is_valid(tri1, &n1);
    let valid2 = normal_is_valid(tri2, &n2);

    match (valid1, valid2) {
        (true, true) => !separated_by_sat(tri1, &n1, tri2, &n2),
        // A degenerate triangle is a segment (or a point): the feature-to-feature
        // distance decides, except when that segment pierces the other triangle's
        // interior.
        (true, false) => degenerate_intersects_triangle(tri2, tri1, &n1),
        (false, true) => degenerate_intersects_triangle(tri1, tri2, &n2),
        (false, false) => closest_feature_points(tri1, tri2).2 == 0.0,
    }
}

fn normal_is_valid(tri: &Triangle, normal: &Vector<Real>) -> bool {
    let ab = tri.b - tri.a;
    let ac = tri.c - tri.a;
    normal.norm_squared() > DEFAULT_EPSILON * ab.norm_squared() * ac.norm_squared()
}

// Separating-axis test over the complete axis set of a triangle pair: the two face
// normals, the in-plane edge normals (these separate coplanar pairs), and the cross
// products of every edge pair. Separation must be strict so touching still counts as
// an intersection.
fn separated_by_sat(
    tri1: &Triangle,
    n1: &Vector<Real>,
    tri2: &Triangle,
    n2: &Vector<Real>,
) -> bool {
    if separated_on_axis(tri1, tri2, n1) || separated_on_axis(tri1, tri2, n2) {
        return true;
    }

    let edges1 = tri1.edges_scaled_directions();
    let edges2 = tri2.edges_scaled_directions();

    for edge in &edges1 {
        let axis = n1.cross(edge);
        if axis.norm_squared() > DEFAULT_EPSILON * n1.norm_squared() * edge.norm_squared()
            && separated_on_axis(tri1, tri2, &axis)
        {
            return true;
        }
    }

    for edge in &edges2 {
        let axis = n2.cross(edge);
        if axis.norm_squared() > DEFAULT_EPSILON * n2.norm_squared() * edge.norm_squared()
            && separated_on_axis(tri1, tri2, &axis)
        {
            return true;
        }
    }

    for edge1 in &edges1 {
        for edge2 in &edges2 {
            let axis = edge1.cross(edge2);
            if axis.norm_squared() > DEFAULT_EPSILON * edge1.norm_squared() * edge2.norm_squared()
                && separated_on_axis(tri1, tri2, &axis)
            {
                return true;
            }
        }
    }

    false
}

fn separated_on_axis(tri1: &Triangle, tri2: &Triangle, axis: &Vector<Real>) -> bool {
    let (min1, max1) = extents_on_axis(tri1, axis);
    let (min2, max2) = extents_on_axis(tri2, axis);
    max1 < min2 || max2 < min1
}

fn extents_on_axis(tri: &Triangle, axis: &Vector<Real>) -> (Real, Real) {
    let a = tri.a.coords.dot(axis);
    let b = tri.b.coords.dot(axis);
    let c = tri.c.coords.dot(axis);
    (a.min(b).min(c), a.max(b).max(c))
}

// Intersection between a degenerate triangle (its convex hull is its longest edge)
// and a non-degenerate one with normal `n`.
fn degenerate_intersects_triangle(
    degenerate: &Triangle,
    tri: &Triangle,
    n: &Vector<Real>,
) -> bool {
    let segment = longest_edge(degenerate);

    let d_a = (segment.a - tri.a).dot(n);
    let d_b = (segment.b - tri.a).dot(n);

    if d_a * d_b < 0.0 {
        // The segment crosses the triangle's plane: intersection happens iff the
        // crossing point lies on the triangle itself.
        let t = d_a / (d_a - d_b);
        let pt = segment.a + segment.scaled_direction() * t;

        if tri.project_local_point(&pt).is_inside {
            return true;
        }
    }

    // Every remaining configuration (coplanar, touching, disjoint) is decided by the
    // feature-to-feature distance.
    closest_feature_points(degenerate, tri).2 == 0.0
}

fn longest_edge(tri: &Triangle) -> Segment {
    let edges = tri.edges();
    let mut best = edges[0];
    let mut best_len = best.scaled_direction().norm_squared();

    for edge in &edges[1..] {
        let len = edge.scaled_direction().norm_squared();
        if len > best_len {
            best = *edge;
            best_len = len;
        }
    }

    best
}
