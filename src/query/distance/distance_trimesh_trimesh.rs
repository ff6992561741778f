use crate::math::{Isometry, Point, Real};
use crate::partitioning::BvhNode;
use crate::query::closest_points::{closest_points_triangle_triangle, ClosestPoints};
use crate::shape::TriMesh;
use crate::utils::WeightedValue;
use num::Bounded;
use std::collections::BinaryHeap;

/// Tolerances and options of a distance query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceRequest {
    /// Should the pair of nearest points realizing the distance be reported?
    pub nearest_points: bool,
    /// Allowed error on the reported distance, relative to the distance itself.
    pub relative_error: Real,
    /// Allowed absolute error on the reported distance.
    pub absolute_error: Real,
}

impl Default for DistanceRequest {
    /// An exact query (both tolerances zero) reporting the nearest points.
    fn default() -> Self {
        Self {
            nearest_points: true,
            relative_error: 0.0,
            absolute_error: 0.0,
        }
    }
}

/// Result of a distance query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceResult {
    /// The minimum distance between the two meshes. Zero if they intersect or touch.
    pub distance: Real,
    /// The pair of nearest points realizing the distance, if requested.
    ///
    /// `None` when not requested, or when the meshes overlap (no meaningful witness
    /// pair exists in that case).
    pub nearest_points: Option<(Point<Real>, Point<Real>)>,
}

/// Computes the minimum distance between two triangle meshes, with `pos12` the
/// placement of `mesh2` relative to `mesh1`.
///
/// This is a best-first branch-and-bound traversal of the two hierarchies: node
/// pairs are visited by increasing volume-to-volume distance, which is a lower bound
/// of the distance between the triangles they contain, so a pair whose lower bound
/// exceeds the best distance found so far can be discarded together with both its
/// subtrees. The traversal stops as soon as the smallest lower bound left is within
/// `max(relative_error * best, absolute_error)` of the best candidate; with both
/// tolerances zero the result is exact.
///
/// Nearest points are expressed in the local frame of `mesh1`.
pub fn distance_trimesh_trimesh(
    pos12: &Isometry<Real>,
    mesh1: &TriMesh,
    mesh2: &TriMesh,
    request: &DistanceRequest,
) -> DistanceResult {
    let bvh1 = mesh1.bvh();
    let bvh2 = mesh2.bvh();

    let mut queue: BinaryHeap<WeightedValue<(u32, u32)>> = BinaryHeap::new();
    let mut best = Real::max_value();
    let mut best_points = None;

    if let (Some(root1), Some(root2)) = (bvh1.root(), bvh2.root()) {
        let lower_bound = node_distance_lower_bound(root1, root2, pos12);
        queue.push(WeightedValue::new((0, 0), -lower_bound));
    }

    while let Some(entry) = queue.pop() {
        let lower_bound = -entry.cost;

        // The queue pops pairs by increasing lower bound, so once the smallest one
        // is within the requested tolerance of the best candidate, no remaining
        // pair can improve the result beyond that tolerance.
        let margin = if best < Real::max_value() {
            (request.relative_error * best).max(request.absolute_error)
        } else {
            0.0
        };
        if lower_bound >= best - margin {
            break;
        }

        let (id1, id2) = entry.value;
        let node1 = bvh1.node(id1);
        let node2 = bvh2.node(id2);

        if node1.is_leaf() && node2.is_leaf() {
            let tri1 = mesh1.triangle(node1.leaf_data());
            let tri2 = mesh2.triangle(node2.leaf_data()).transformed(pos12);

            match closest_points_triangle_triangle(&tri1, &tri2) {
                ClosestPoints::Intersecting => {
                    best = 0.0;
                    best_points = None;
                    break;
                }
                ClosestPoints::Disjoint {
                    point1,
                    point2,
                    distance,
                } => {
                    if distance < best {
                        best = distance;
                        best_points = Some((point1, point2));
                    }
                }
            }

            continue;
        }

        // Expand the internal node with the larger volume.
        let children = if !node1.is_leaf()
            && (node2.is_leaf() || node1.aabb().volume() >= node2.aabb().volume())
        {
            let (left, right) = node1.children_ids();
            [(left, id2), (right, id2)]
        } else {
            let (left, right) = node2.children_ids();
            [(id1, left), (id1, right)]
        };

        for (child1, child2) in children {
            let lower_bound =
                node_distance_lower_bound(bvh1.node(child1), bvh2.node(child2), pos12);

            if lower_bound < best {
                queue.push(WeightedValue::new((child1, child2), -lower_bound));
            }
        }
    }

    DistanceResult {
        distance: best,
        nearest_points: if request.nearest_points {
            best_points
        } else {
            None
        },
    }
}

// Distance between the bounding volumes of two nodes, the second volume being lifted
// through `pos12` on the fly. Never overestimates the distance between the
// triangles the nodes contain.
fn node_distance_lower_bound(node1: &BvhNode, node2: &BvhNode, pos12: &Isometry<Real>) -> Real {
    node1
        .aabb()
        .distance_to_aabb(&node2.aabb().transform_by(pos12))
}
