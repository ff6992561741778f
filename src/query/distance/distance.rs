use crate::math::{Isometry, Real};
use crate::query::distance::{distance_trimesh_trimesh, DistanceRequest, DistanceResult};
use crate::shape::TriMesh;

/// Computes the exact minimum distance separating two placed triangle meshes.
///
/// Returns `0.0` if the meshes are touching or penetrating.
pub fn distance(
    pos1: &Isometry<Real>,
    mesh1: &TriMesh,
    pos2: &Isometry<Real>,
    mesh2: &TriMesh,
) -> Real {
    let pos12 = pos1.inv_mul(pos2);
    distance_trimesh_trimesh(&pos12, mesh1, mesh2, &DistanceRequest::default()).distance
}

/// Computes the minimum distance separating two placed triangle meshes, within the
/// tolerances carried by `request`.
///
/// The nearest points of the result, if requested and available, are expressed in
/// world space.
pub fn distance_with_request(
    pos1: &Isometry<Real>,
    mesh1: &TriMesh,
    pos2: &Isometry<Real>,
    mesh2: &TriMesh,
    request: &DistanceRequest,
) -> DistanceResult {
    let pos12 = pos1.inv_mul(pos2);
    let mut result = distance_trimesh_trimesh(&pos12, mesh1, mesh2, request);

    // The engine works in the local frame of `mesh1`; lift its witness points to
    // world space.
    if let Some((point1, point2)) = &mut result.nearest_points {
        *point1 = pos1 * *point1;
        *point2 = pos1 * *point2;
    }

    result
}
