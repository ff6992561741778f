use crate::bounding_volume::BoundingVolume;
use crate::math::{Isometry, Real};
use crate::query::intersection_test::intersection_test_triangle_triangle;
use crate::shape::TriMesh;

/// Tests whether two triangle meshes, with `pos12` the placement of `mesh2` relative
/// to `mesh1`, are intersecting.
///
/// The two hierarchies are traversed simultaneously: a pair of nodes is pruned as
/// soon as their bounding volumes (the second one lifted through `pos12` on the fly,
/// the shared trees are never mutated) do not overlap. The query short-circuits at
/// the first pair of intersecting triangles.
pub fn intersection_test_trimesh_trimesh(
    pos12: &Isometry<Real>,
    mesh1: &TriMesh,
    mesh2: &TriMesh,
) -> bool {
    mesh1
        .bvh()
        .leaf_pairs(mesh2.bvh(), |node1, node2| {
            node1.aabb().intersects(&node2.aabb().transform_by(pos12))
        })
        .any(|(id1, id2)| {
            let tri1 = mesh1.triangle(id1);
            let tri2 = mesh2.triangle(id2).transformed(pos12);
            intersection_test_triangle_triangle(&tri1, &tri2)
        })
}
