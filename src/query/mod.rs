//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::distance()`](crate::query::distance) to compute the minimum distance
//!   between two placed meshes.
//! * [`query::distance_with_request()`](crate::query::distance_with_request) for the
//!   same query with convergence tolerances and the pair of nearest points.
//! * [`query::intersection_test()`](crate::query::intersection_test) to determine if
//!   two placed meshes are intersecting or not.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of
//! the ones described above, following the `[operation]_[shape1]_[shape2]()` naming
//! scheme. They take the relative placement `pos12` of the second shape in the local
//! frame of the first one instead of two independent placements.

pub use self::closest_points::ClosestPoints;
pub use self::distance::{distance, distance_with_request, DistanceRequest, DistanceResult};
pub use self::intersection_test::intersection_test;
pub use self::point::{PointProjection, PointQuery};

pub mod closest_points;
mod distance;
mod intersection_test;
pub mod point;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::closest_points::{
        closest_points_segment_segment, closest_points_triangle_triangle,
    };
    pub use super::distance::distance_trimesh_trimesh;
    pub use super::intersection_test::{
        intersection_test_triangle_triangle, intersection_test_trimesh_trimesh,
    };
}
